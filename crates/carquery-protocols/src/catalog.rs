//! Static vehicle catalog.
//!
//! The catalog is an ordered tree: brand → model → fuel type → transmissions.
//! Order is significant (it is the order options are offered in), so every
//! level is a `Vec` rather than a map. Uniqueness of keys within a parent is
//! checked once at construction and the tree is read-only afterwards.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// States offered independently of the brand/model cascade.
pub const DEFAULT_STATES: &[&str] = &[
    "DELHI",
    "TAMILNADU",
    "MAHARASHTRA",
    "GUJARAT",
    "KERALA",
    "ODISHA",
    "PUNJAB",
    "WESTBENGAL",
    "MEGHALAYA",
    "BIHAR",
    "TELANGANA",
];

/// A fuel type and the transmissions available for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuelEntry {
    pub name: String,
    #[serde(default)]
    pub transmissions: Vec<String>,
}

impl FuelEntry {
    pub fn new<I, S>(name: impl Into<String>, transmissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            transmissions: transmissions.into_iter().map(Into::into).collect(),
        }
    }
}

/// A model and its fuel types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelEntry {
    pub name: String,
    #[serde(default)]
    pub fuels: Vec<FuelEntry>,
}

impl ModelEntry {
    pub fn new(name: impl Into<String>, fuels: Vec<FuelEntry>) -> Self {
        Self {
            name: name.into(),
            fuels,
        }
    }

    pub fn fuel(&self, name: &str) -> Option<&FuelEntry> {
        self.fuels.iter().find(|f| f.name == name)
    }
}

/// A brand and its models.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandEntry {
    pub name: String,
    #[serde(default)]
    pub models: Vec<ModelEntry>,
}

impl BrandEntry {
    pub fn new(name: impl Into<String>, models: Vec<ModelEntry>) -> Self {
        Self {
            name: name.into(),
            models,
        }
    }

    pub fn model(&self, name: &str) -> Option<&ModelEntry> {
        self.models.iter().find(|m| m.name == name)
    }
}

/// On-disk / wire shape of a catalog before validation.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    brands: Vec<BrandEntry>,
    #[serde(default)]
    states: Option<Vec<String>>,
}

impl TryFrom<CatalogDocument> for Catalog {
    type Error = CatalogError;

    fn try_from(doc: CatalogDocument) -> Result<Self, Self::Error> {
        let states = doc
            .states
            .unwrap_or_else(|| DEFAULT_STATES.iter().map(|s| s.to_string()).collect());
        Catalog::new(doc.brands, states)
    }
}

/// Immutable brand → model → fuel → transmissions tree plus the state list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CatalogDocument")]
pub struct Catalog {
    brands: Vec<BrandEntry>,
    states: Vec<String>,
}

impl Catalog {
    /// Build a catalog, rejecting empty or duplicate keys at any level.
    pub fn new(brands: Vec<BrandEntry>, states: Vec<String>) -> Result<Self, CatalogError> {
        check_unique("brand", "catalog", brands.iter().map(|b| b.name.as_str()))?;
        for brand in &brands {
            check_unique("model", &brand.name, brand.models.iter().map(|m| m.name.as_str()))?;
            for model in &brand.models {
                check_unique("fuel type", &model.name, model.fuels.iter().map(|f| f.name.as_str()))?;
                for fuel in &model.fuels {
                    check_unique(
                        "transmission",
                        &fuel.name,
                        fuel.transmissions.iter().map(String::as_str),
                    )?;
                }
            }
        }
        check_unique("state", "catalog", states.iter().map(String::as_str))?;

        Ok(Self { brands, states })
    }

    /// The catalog shipped with the binary.
    pub fn builtin() -> Self {
        Self {
            brands: vec![
                BrandEntry::new(
                    "TATA",
                    vec![ModelEntry::new(
                        "HARRIER",
                        vec![
                            FuelEntry::new("DIESEL", ["AUTOMATIC", "MANUAL"]),
                            FuelEntry::new("ELECTRIC", ["AUTOMATIC"]),
                        ],
                    )],
                ),
                BrandEntry::new(
                    "MAHINDRA",
                    vec![ModelEntry::new(
                        "BE6",
                        vec![FuelEntry::new("ELECTRIC", ["AUTOMATIC"])],
                    )],
                ),
            ],
            states: DEFAULT_STATES.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn brands(&self) -> &[BrandEntry] {
        &self.brands
    }

    pub fn states(&self) -> &[String] {
        &self.states
    }

    pub fn brand(&self, name: &str) -> Option<&BrandEntry> {
        self.brands.iter().find(|b| b.name == name)
    }

    pub fn model(&self, brand: &str, model: &str) -> Option<&ModelEntry> {
        self.brand(brand)?.model(model)
    }

    pub fn fuel(&self, brand: &str, model: &str, fuel: &str) -> Option<&FuelEntry> {
        self.model(brand, model)?.fuel(fuel)
    }

    /// Brand names in catalog order.
    pub fn brand_names(&self) -> Vec<&str> {
        self.brands.iter().map(|b| b.name.as_str()).collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn check_unique<'a>(
    level: &'static str,
    parent: &str,
    keys: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for key in keys {
        if key.trim().is_empty() {
            return Err(CatalogError::EmptyKey(level));
        }
        if !seen.insert(key) {
            return Err(CatalogError::DuplicateKey {
                level,
                parent: parent.to_string(),
                key: key.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
