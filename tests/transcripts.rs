use pattern_catalog::catalog::{self, Category};
use pattern_catalog::creational::factory::{Vehicle, VehicleError, VehicleFactory};
use pattern_catalog::structural::flyweight::Forest;
use pattern_catalog::{CatalogError, PATTERNS};

fn transcript(name: &str) -> Vec<String> {
    catalog::find(name)
        .and_then(|entry| entry.run())
        .unwrap_or_else(|err| panic!("{name} failed: {err}"))
        .into_lines()
}

#[test]
fn every_demo_runs_and_prints_something() {
    for entry in PATTERNS {
        let transcript = entry.run().unwrap();
        assert!(!transcript.is_empty(), "{} printed nothing", entry.name);
    }
}

#[test]
fn demos_are_deterministic() {
    for entry in PATTERNS {
        assert_eq!(entry.run().unwrap(), entry.run().unwrap(), "{}", entry.name);
    }
}

#[test]
fn command_copy_then_paste() {
    assert_eq!(transcript("command"), ["Hello, World!"]);
}

#[test]
fn chain_routes_every_request() {
    let lines = transcript("cor");
    let expected: Vec<String> = (0..25)
        .map(|n| match n {
            0..=9 => format!("Handler 1: {n}"),
            10..=19 => format!("Handler 2: {n}"),
            _ => format!("DefaultHandler: No handler could process {n}"),
        })
        .collect();
    assert_eq!(lines, expected);
}

#[test]
fn memento_two_undos() {
    assert_eq!(
        transcript("memento"),
        [
            "Current state: State 3",
            "After undo: State 2",
            "After another undo: State 1",
        ]
    );
}

#[test]
fn flyweight_reuses_oak() {
    let lines = transcript("flyweight");
    assert_eq!(
        &lines[..3],
        [
            "Creating new TreeType",
            "Reusing existing TreeType",
            "Creating new TreeType",
        ]
    );

    let mut forest = Forest::new();
    forest.plant_tree(1, 2, 5, "Oak", "Green", "Rough");
    forest.plant_tree(3, 4, 10, "Oak", "Green", "Rough");
    forest.plant_tree(5, 6, 15, "Birch", "White", "Smooth");
    assert_eq!(forest.tree_type_count(), 2);
}

#[test]
fn factory_accepts_car_and_rejects_bogus() {
    assert_eq!(VehicleFactory::get_vehicle("car").unwrap().drive(), "Driving a car");
    assert!(matches!(
        VehicleFactory::get_vehicle("bogus"),
        Err(VehicleError::UnknownVehicleType(ref kind)) if kind == "bogus"
    ));

    let err: CatalogError = VehicleError::UnknownVehicleType("bogus".into()).into();
    assert!(err.to_string().contains("bogus"));
}

#[test]
fn proxy_prints_book_content() {
    let lines = transcript("proxy");
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[1], "The contents of the book.");
    assert_eq!(lines[3], "The contents of the book.");
}

#[test]
fn decorator_prices_keep_decimal_point() {
    let lines = transcript("decorator");
    assert!(lines[0].starts_with("Cost: 2.0;"));
    assert!(lines[2].starts_with("Cost: 2.7;"));
}

#[test]
fn catalog_covers_all_three_categories() {
    for category in [Category::Behavioral, Category::Creational, Category::Structural] {
        assert!(catalog::by_category(category).count() > 0);
    }
}
