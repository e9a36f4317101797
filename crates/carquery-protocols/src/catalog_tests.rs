use super::*;

#[test]
fn test_builtin_brand_order() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.brand_names(), vec!["TATA", "MAHINDRA"]);
}

#[test]
fn test_builtin_lookup_path() {
    let catalog = Catalog::builtin();
    let fuel = catalog.fuel("TATA", "HARRIER", "DIESEL").unwrap();
    assert_eq!(fuel.transmissions, vec!["AUTOMATIC", "MANUAL"]);
}

#[test]
fn test_lookup_model_under_wrong_brand() {
    let catalog = Catalog::builtin();
    assert!(catalog.model("MAHINDRA", "HARRIER").is_none());
    assert!(catalog.model("", "HARRIER").is_none());
}

#[test]
fn test_builtin_states() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.states().len(), DEFAULT_STATES.len());
    assert_eq!(catalog.states()[0], "DELHI");
    assert_eq!(catalog.states().last().unwrap(), "TELANGANA");
}

#[test]
fn test_builtin_passes_validation() {
    let builtin = Catalog::builtin();
    let rebuilt = Catalog::new(builtin.brands().to_vec(), builtin.states().to_vec()).unwrap();
    assert_eq!(rebuilt, builtin);
}

#[test]
fn test_duplicate_model_rejected() {
    let brands = vec![BrandEntry::new(
        "TATA",
        vec![
            ModelEntry::new("HARRIER", vec![]),
            ModelEntry::new("HARRIER", vec![]),
        ],
    )];
    let err = Catalog::new(brands, vec![]).unwrap_err();
    assert_eq!(
        err,
        CatalogError::DuplicateKey {
            level: "model",
            parent: "TATA".to_string(),
            key: "HARRIER".to_string(),
        }
    );
}

#[test]
fn test_same_model_name_under_different_brands_allowed() {
    let brands = vec![
        BrandEntry::new("A", vec![ModelEntry::new("X", vec![])]),
        BrandEntry::new("B", vec![ModelEntry::new("X", vec![])]),
    ];
    assert!(Catalog::new(brands, vec![]).is_ok());
}

#[test]
fn test_empty_brand_name_rejected() {
    let brands = vec![BrandEntry::new("  ", vec![])];
    assert_eq!(
        Catalog::new(brands, vec![]).unwrap_err(),
        CatalogError::EmptyKey("brand")
    );
}

#[test]
fn test_deserialize_preserves_order() {
    let doc = r#"
        states = ["KERALA", "DELHI"]

        [[brands]]
        name = "ZETA"

        [[brands.models]]
        name = "M2"

        [[brands.models.fuels]]
        name = "PETROL"
        transmissions = ["MANUAL", "AUTOMATIC"]

        [[brands]]
        name = "ALPHA"
    "#;
    let catalog: Catalog = toml::from_str(doc).unwrap();
    assert_eq!(catalog.brand_names(), vec!["ZETA", "ALPHA"]);
    assert_eq!(catalog.states(), &["KERALA".to_string(), "DELHI".to_string()]);
    let fuel = catalog.fuel("ZETA", "M2", "PETROL").unwrap();
    assert_eq!(fuel.transmissions, vec!["MANUAL", "AUTOMATIC"]);
}

#[test]
fn test_deserialize_defaults_states() {
    let doc = r#"
        [[brands]]
        name = "TATA"
    "#;
    let catalog: Catalog = toml::from_str(doc).unwrap();
    assert_eq!(catalog.states().len(), DEFAULT_STATES.len());
}

#[test]
fn test_deserialize_rejects_duplicates() {
    let doc = r#"
        [[brands]]
        name = "TATA"

        [[brands]]
        name = "TATA"
    "#;
    let result: Result<Catalog, _> = toml::from_str(doc);
    assert!(result.is_err());
}
