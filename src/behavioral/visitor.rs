//! Visitor Pattern
//!
//! New operations over a fixed family of element types, added without touching
//! the elements. Each element's `accept` calls back the visitor method for its
//! own concrete type (double dispatch).
//!
//! Run with: cargo run --bin visitor

use crate::error::Result;
use crate::transcript::Transcript;

pub trait DocumentVisitor {
    fn visit_text_document(&mut self, doc: &TextDocument) -> String;
    fn visit_pdf_document(&mut self, doc: &PdfDocument) -> String;
}

pub trait Document {
    fn accept(&self, visitor: &mut dyn DocumentVisitor) -> String;
}

pub struct TextDocument;

impl Document for TextDocument {
    fn accept(&self, visitor: &mut dyn DocumentVisitor) -> String {
        visitor.visit_text_document(self)
    }
}

pub struct PdfDocument;

impl Document for PdfDocument {
    fn accept(&self, visitor: &mut dyn DocumentVisitor) -> String {
        visitor.visit_pdf_document(self)
    }
}

// ============================================================================
// Visitors
// ============================================================================

pub struct RenderVisitor;

impl DocumentVisitor for RenderVisitor {
    fn visit_text_document(&mut self, _doc: &TextDocument) -> String {
        "Rendering a text document".to_string()
    }

    fn visit_pdf_document(&mut self, _doc: &PdfDocument) -> String {
        "Rendering a PDF document".to_string()
    }
}

pub struct ExportVisitor;

impl DocumentVisitor for ExportVisitor {
    fn visit_text_document(&mut self, _doc: &TextDocument) -> String {
        "Exporting a text document".to_string()
    }

    fn visit_pdf_document(&mut self, _doc: &PdfDocument) -> String {
        "Exporting a PDF document".to_string()
    }
}

pub fn demo() -> Result<Transcript> {
    let mut out = Transcript::new();

    let documents: Vec<Box<dyn Document>> = vec![Box::new(TextDocument), Box::new(PdfDocument)];
    let mut render_visitor = RenderVisitor;
    let mut export_visitor = ExportVisitor;

    for doc in &documents {
        out.line(doc.accept(&mut render_visitor));
        out.line(doc.accept(&mut export_visitor));
    }
    Ok(out)
}
