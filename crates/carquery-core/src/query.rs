//! Query builder.

use carquery_protocols::{Query, QueryMode, QueryTarget, Selection, SelectionError, SelectionField};
use tracing::debug;

const STRICT_REQUIRED: &[SelectionField] = &[
    SelectionField::Brand,
    SelectionField::Model,
    SelectionField::FuelType,
    SelectionField::Transmission,
];

const LENIENT_REQUIRED: &[SelectionField] = &[SelectionField::Brand, SelectionField::Model];

/// Turns a [`Selection`] snapshot into a natural-language [`Query`].
///
/// Catalog values are lower-cased; the state is passed through as selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryBuilder {
    mode: QueryMode,
    target: QueryTarget,
}

impl QueryBuilder {
    pub fn new(mode: QueryMode, target: QueryTarget) -> Self {
        Self { mode, target }
    }

    pub fn strict() -> Self {
        Self::new(QueryMode::Strict, QueryTarget::default())
    }

    pub fn lenient() -> Self {
        Self::new(QueryMode::Lenient, QueryTarget::default())
    }

    pub fn with_target(mut self, target: QueryTarget) -> Self {
        self.target = target;
        self
    }

    pub fn mode(&self) -> QueryMode {
        self.mode
    }

    /// Fields that must be set for [`build`](Self::build) to succeed.
    pub fn required_fields(&self) -> &'static [SelectionField] {
        match self.mode {
            QueryMode::Strict => STRICT_REQUIRED,
            QueryMode::Lenient => LENIENT_REQUIRED,
        }
    }

    pub fn build(&self, selection: &Selection) -> Result<Query, SelectionError> {
        let missing = selection.missing(self.required_fields());
        if !missing.is_empty() {
            return Err(SelectionError::Incomplete { missing });
        }

        let text = match self.mode {
            QueryMode::Strict => self.strict_text(selection),
            QueryMode::Lenient => self.lenient_text(selection),
        };
        debug!(mode = ?self.mode, "Built query: {}", text);
        Ok(Query::new(text))
    }

    fn prefix(&self) -> String {
        format!("Find the {} of cars with ", self.target.phrase())
    }

    /// All four catalog clauses, then ` with state as …` when a state is set.
    fn strict_text(&self, selection: &Selection) -> String {
        let lower = |field| selection.get(field).unwrap_or_default().to_lowercase();
        let mut text = format!(
            "{}brand as {}, model as {}, fuel type as {}, transmission as {}",
            self.prefix(),
            lower(SelectionField::Brand),
            lower(SelectionField::Model),
            lower(SelectionField::FuelType),
            lower(SelectionField::Transmission),
        );
        if let Some(state) = selection.state() {
            text.push_str(" with state as ");
            text.push_str(state);
        }
        text
    }

    /// Only the clauses that are set, comma-joined, state last with `and`.
    fn lenient_text(&self, selection: &Selection) -> String {
        let mut clauses: Vec<String> = [
            (SelectionField::Brand, "brand"),
            (SelectionField::Model, "model"),
            (SelectionField::FuelType, "fuel type"),
            (SelectionField::Transmission, "transmission"),
        ]
        .into_iter()
        .filter_map(|(field, name)| {
            selection
                .get(field)
                .map(|value| format!("{} as {}", name, value.to_lowercase()))
        })
        .collect();

        if let Some(state) = selection.state() {
            clauses.push(format!("and state as {}", state));
        }

        format!("{}{}", self.prefix(), clauses.join(", "))
    }
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
