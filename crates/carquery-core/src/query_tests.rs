use super::*;

fn full_selection() -> Selection {
    Selection::new()
        .with_brand("TATA")
        .with_model("HARRIER")
        .with_fuel_type("DIESEL")
        .with_transmission("MANUAL")
        .with_state("DELHI")
}

#[test]
fn test_default_is_lenient_on_road_price() {
    let builder = QueryBuilder::default();
    assert_eq!(builder.mode(), QueryMode::Lenient);
    let query = builder
        .build(&Selection::new().with_brand("TATA").with_model("HARRIER"))
        .unwrap();
    assert!(query.as_str().starts_with("Find the on road price of cars with "));
}

#[test]
fn test_lenient_brand_and_model_only() {
    let query = QueryBuilder::lenient()
        .build(&Selection::new().with_brand("TATA").with_model("HARRIER"))
        .unwrap();
    assert_eq!(
        query.as_str(),
        "Find the on road price of cars with brand as tata, model as harrier"
    );

    let clauses = query
        .as_str()
        .trim_start_matches("Find the on road price of cars with ");
    assert_eq!(clauses.split(", ").count(), 2);
    assert!(!query.as_str().contains("state"));
}

#[test]
fn test_lenient_full_selection() {
    let query = QueryBuilder::lenient().build(&full_selection()).unwrap();
    assert_eq!(
        query.as_str(),
        "Find the on road price of cars with brand as tata, model as harrier, \
         fuel type as diesel, transmission as manual, and state as DELHI"
    );
}

#[test]
fn test_lenient_skips_gaps_in_order() {
    let selection = Selection::new()
        .with_brand("MAHINDRA")
        .with_model("BE6")
        .with_transmission("AUTOMATIC")
        .with_state("KERALA");
    let query = QueryBuilder::lenient().build(&selection).unwrap();
    assert_eq!(
        query.as_str(),
        "Find the on road price of cars with brand as mahindra, model as be6, \
         transmission as automatic, and state as KERALA"
    );
}

#[test]
fn test_lenient_requires_model() {
    let err = QueryBuilder::lenient()
        .build(&Selection::new().with_brand("TATA"))
        .unwrap_err();
    assert_eq!(
        err,
        SelectionError::Incomplete {
            missing: vec![SelectionField::Model]
        }
    );
    assert_eq!(err.to_string(), "Please select Model.");
}

#[test]
fn test_strict_full_selection() {
    let query = QueryBuilder::strict()
        .with_target(QueryTarget::Variant)
        .build(&full_selection())
        .unwrap();
    assert_eq!(
        query.as_str(),
        "Find the variant of cars with brand as tata, model as harrier, \
         fuel type as diesel, transmission as manual with state as DELHI"
    );
}

#[test]
fn test_strict_without_state() {
    let mut selection = full_selection();
    selection.set(SelectionField::State, None);
    let query = QueryBuilder::strict().build(&selection).unwrap();
    assert!(query.as_str().ends_with("transmission as manual"));
}

#[test]
fn test_strict_missing_transmission() {
    let mut selection = full_selection();
    selection.set(SelectionField::Transmission, None);
    let err = QueryBuilder::strict().build(&selection).unwrap_err();
    assert_eq!(err.missing(), &[SelectionField::Transmission]);
}

#[test]
fn test_strict_empty_selection_lists_all_required() {
    let err = QueryBuilder::strict().build(&Selection::new()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Please select Brand, Model, Fuel Type and Transmission."
    );
}

#[test]
fn test_build_is_deterministic() {
    let builder = QueryBuilder::lenient();
    let selection = full_selection();
    assert_eq!(builder.build(&selection), builder.build(&selection));
}
