//! Cascade controller.
//!
//! Each level's options are derived from the catalog path above it. A path
//! that does not exist in the catalog (including an empty key) produces an
//! empty, disabled option set rather than an error.

use std::sync::Arc;

use carquery_protocols::{Catalog, Selection, SelectionField};
use serde::Serialize;

/// Options offered for one level, and whether that level accepts input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OptionSet {
    pub options: Vec<String>,
    pub enabled: bool,
}

impl OptionSet {
    /// An empty, disabled level.
    pub fn disabled() -> Self {
        Self::default()
    }

    /// A level is enabled exactly when it has something to choose.
    pub fn from_options<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        let enabled = !options.is_empty();
        Self { options, enabled }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.options.iter().any(|o| o == value)
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

/// Option sets of every level for one selection path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CascadeLevels {
    pub brands: OptionSet,
    pub models: OptionSet,
    pub fuel_types: OptionSet,
    pub transmissions: OptionSet,
    pub states: OptionSet,
}

impl CascadeLevels {
    pub fn get(&self, field: SelectionField) -> &OptionSet {
        match field {
            SelectionField::Brand => &self.brands,
            SelectionField::Model => &self.models,
            SelectionField::FuelType => &self.fuel_types,
            SelectionField::Transmission => &self.transmissions,
            SelectionField::State => &self.states,
        }
    }
}

/// Computes next-level option sets from a shared, read-only catalog.
#[derive(Debug, Clone)]
pub struct CascadeController {
    catalog: Arc<Catalog>,
}

impl CascadeController {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Top level: every brand.
    pub fn brands(&self) -> OptionSet {
        OptionSet::from_options(self.catalog.brand_names())
    }

    /// States do not depend on the cascade.
    pub fn states(&self) -> OptionSet {
        OptionSet::from_options(self.catalog.states().iter().cloned())
    }

    /// Models for `brand`.
    pub fn on_brand_changed(&self, brand: &str) -> OptionSet {
        match self.catalog.brand(brand) {
            Some(entry) => OptionSet::from_options(entry.models.iter().map(|m| m.name.clone())),
            None => OptionSet::disabled(),
        }
    }

    /// Fuel types for `brand` / `model`.
    pub fn on_model_changed(&self, brand: &str, model: &str) -> OptionSet {
        match self.catalog.model(brand, model) {
            Some(entry) => OptionSet::from_options(entry.fuels.iter().map(|f| f.name.clone())),
            None => OptionSet::disabled(),
        }
    }

    /// Transmissions for `brand` / `model` / `fuel`.
    pub fn on_fuel_changed(&self, brand: &str, model: &str, fuel: &str) -> OptionSet {
        match self.catalog.fuel(brand, model, fuel) {
            Some(entry) => OptionSet::from_options(entry.transmissions.iter().cloned()),
            None => OptionSet::disabled(),
        }
    }

    /// Every level along `selection`, without validating it.
    ///
    /// A level below an unset field is disabled. Values missing from the
    /// catalog simply yield disabled levels beneath them.
    pub fn levels(&self, selection: &Selection) -> CascadeLevels {
        let models = match selection.brand() {
            Some(b) => self.on_brand_changed(b),
            None => OptionSet::disabled(),
        };
        let fuel_types = match (selection.brand(), selection.model()) {
            (Some(b), Some(m)) => self.on_model_changed(b, m),
            _ => OptionSet::disabled(),
        };
        let transmissions = match (selection.brand(), selection.model(), selection.fuel_type()) {
            (Some(b), Some(m), Some(f)) => self.on_fuel_changed(b, m, f),
            _ => OptionSet::disabled(),
        };
        CascadeLevels {
            brands: self.brands(),
            models,
            fuel_types,
            transmissions,
            states: self.states(),
        }
    }
}

#[cfg(test)]
#[path = "cascade_tests.rs"]
mod tests;
