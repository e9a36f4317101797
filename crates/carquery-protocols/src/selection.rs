//! Selection and query value types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the five user-selectable fields, top of the cascade first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionField {
    Brand,
    Model,
    FuelType,
    Transmission,
    State,
}

impl SelectionField {
    /// All fields in cascade order.
    pub const ALL: [SelectionField; 5] = [
        Self::Brand,
        Self::Model,
        Self::FuelType,
        Self::Transmission,
        Self::State,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Brand => "Brand",
            Self::Model => "Model",
            Self::FuelType => "Fuel Type",
            Self::Transmission => "Transmission",
            Self::State => "State",
        }
    }
}

impl fmt::Display for SelectionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The user's current choice across the five fields.
///
/// Blank values are stored as unset. The type does not enforce the
/// "nothing below an unset field" rule; the cascade controller does.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fuel_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    transmission: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    state: Option<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_brand(mut self, value: impl Into<String>) -> Self {
        self.set(SelectionField::Brand, Some(value.into()));
        self
    }

    pub fn with_model(mut self, value: impl Into<String>) -> Self {
        self.set(SelectionField::Model, Some(value.into()));
        self
    }

    pub fn with_fuel_type(mut self, value: impl Into<String>) -> Self {
        self.set(SelectionField::FuelType, Some(value.into()));
        self
    }

    pub fn with_transmission(mut self, value: impl Into<String>) -> Self {
        self.set(SelectionField::Transmission, Some(value.into()));
        self
    }

    pub fn with_state(mut self, value: impl Into<String>) -> Self {
        self.set(SelectionField::State, Some(value.into()));
        self
    }

    /// Set or clear a single field. Blank strings clear it.
    pub fn set(&mut self, field: SelectionField, value: Option<String>) {
        let value = value.filter(|v| !v.trim().is_empty());
        *self.slot_mut(field) = value;
    }

    pub fn get(&self, field: SelectionField) -> Option<&str> {
        match field {
            SelectionField::Brand => self.brand.as_deref(),
            SelectionField::Model => self.model.as_deref(),
            SelectionField::FuelType => self.fuel_type.as_deref(),
            SelectionField::Transmission => self.transmission.as_deref(),
            SelectionField::State => self.state.as_deref(),
        }
    }

    pub fn brand(&self) -> Option<&str> {
        self.brand.as_deref()
    }

    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    pub fn fuel_type(&self) -> Option<&str> {
        self.fuel_type.as_deref()
    }

    pub fn transmission(&self) -> Option<&str> {
        self.transmission.as_deref()
    }

    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    /// Fields from `required` that are currently unset, in cascade order.
    pub fn missing(&self, required: &[SelectionField]) -> Vec<SelectionField> {
        SelectionField::ALL
            .into_iter()
            .filter(|f| required.contains(f) && self.get(*f).is_none())
            .collect()
    }

    fn slot_mut(&mut self, field: SelectionField) -> &mut Option<String> {
        match field {
            SelectionField::Brand => &mut self.brand,
            SelectionField::Model => &mut self.model,
            SelectionField::FuelType => &mut self.fuel_type,
            SelectionField::Transmission => &mut self.transmission,
            SelectionField::State => &mut self.state,
        }
    }
}

/// A natural-language query, immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Query(String);

impl Query {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Query {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// How strictly the query builder treats unset fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryMode {
    /// Brand, model, fuel type and transmission are all required.
    Strict,
    /// Only brand and model are required; unset fields are left out.
    #[default]
    Lenient,
}

impl FromStr for QueryMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "lenient" => Ok(Self::Lenient),
            other => Err(format!("unknown query mode '{other}' (expected strict or lenient)")),
        }
    }
}

/// What the query asks the backend to find.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryTarget {
    #[default]
    OnRoadPrice,
    Variant,
}

impl QueryTarget {
    pub fn phrase(&self) -> &'static str {
        match self {
            Self::OnRoadPrice => "on road price",
            Self::Variant => "variant",
        }
    }
}

impl FromStr for QueryTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "on_road_price" | "price" => Ok(Self::OnRoadPrice),
            "variant" | "variants" => Ok(Self::Variant),
            other => Err(format!(
                "unknown query target '{other}' (expected on_road_price or variant)"
            )),
        }
    }
}
