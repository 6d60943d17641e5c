//! Template Method Pattern
//!
//! The skeleton of an algorithm lives in one provided method; implementors fill
//! in individual steps without being able to change their order.
//!
//! Run with: cargo run --bin template_method

use crate::error::Result;
use crate::transcript::Transcript;

pub trait Recipe {
    fn mix_ingredients(&self) -> &'static str;
    fn cook(&self) -> &'static str;

    fn serve(&self) -> &'static str {
        "Serving the dish."
    }

    /// The template: mix, cook, serve.
    fn prepare_recipe(&self) -> [&'static str; 3] {
        [self.mix_ingredients(), self.cook(), self.serve()]
    }
}

pub struct CakeRecipe;

impl Recipe for CakeRecipe {
    fn mix_ingredients(&self) -> &'static str {
        "Mixing flour, sugar, and eggs."
    }

    fn cook(&self) -> &'static str {
        "Baking the cake."
    }
}

pub struct BreadRecipe;

impl Recipe for BreadRecipe {
    fn mix_ingredients(&self) -> &'static str {
        "Mixing flour, yeast, and water."
    }

    fn cook(&self) -> &'static str {
        "Baking the bread"
    }
}

pub fn demo() -> Result<Transcript> {
    let mut out = Transcript::new();
    out.extend(CakeRecipe.prepare_recipe());
    out.extend(BreadRecipe.prepare_recipe());
    Ok(out)
}
