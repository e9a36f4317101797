//! A single UI session.
//!
//! Owns the [`Selection`] and the option sets of every cascading level.
//! Selection fields only change through the `select_*` handlers, which
//! reset every field strictly below the changed one, unconditionally.

use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;

use carquery_protocols::{Catalog, Query, Selection, SelectionError, SelectionField};
use serde_json::Value;
use tracing::{debug, warn};

use crate::cascade::{CascadeController, OptionSet};
use crate::query::QueryBuilder;
use crate::view::{Rendered, ResultView};

/// Status text when a submit is attempted while one is in flight.
pub const SUBMIT_IN_FLIGHT: &str = "A request is already in flight.";

#[derive(Debug, Clone)]
pub struct Session {
    cascade: CascadeController,
    selection: Selection,
    brands: OptionSet,
    models: OptionSet,
    fuel_types: OptionSet,
    transmissions: OptionSet,
    states: OptionSet,
    view: ResultView,
    submitting: bool,
}

impl Session {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let cascade = CascadeController::new(catalog);
        Self {
            brands: cascade.brands(),
            states: cascade.states(),
            models: OptionSet::disabled(),
            fuel_types: OptionSet::disabled(),
            transmissions: OptionSet::disabled(),
            selection: Selection::new(),
            view: ResultView::new(),
            submitting: false,
            cascade,
        }
    }

    /// Replay a selection through the handlers, top to bottom.
    ///
    /// Fails on the first value the cascade does not offer.
    pub fn apply(&mut self, selection: &Selection) -> Result<(), SelectionError> {
        self.select_brand(selection.brand())?;
        self.select_model(selection.model())?;
        self.select_fuel_type(selection.fuel_type())?;
        self.select_transmission(selection.transmission())?;
        self.select_state(selection.state())?;
        Ok(())
    }

    pub fn select_brand(&mut self, brand: Option<&str>) -> Result<&OptionSet, SelectionError> {
        let brand = offered(&self.brands, SelectionField::Brand, brand)?;
        self.selection.set(SelectionField::Brand, brand.clone());
        self.reset_below(SelectionField::Brand);
        self.models = match &brand {
            Some(b) => self.cascade.on_brand_changed(b),
            None => OptionSet::disabled(),
        };
        Ok(&self.models)
    }

    pub fn select_model(&mut self, model: Option<&str>) -> Result<&OptionSet, SelectionError> {
        let model = offered(&self.models, SelectionField::Model, model)?;
        self.selection.set(SelectionField::Model, model.clone());
        self.reset_below(SelectionField::Model);
        self.fuel_types = match (self.selection.brand(), &model) {
            (Some(b), Some(m)) => self.cascade.on_model_changed(b, m),
            _ => OptionSet::disabled(),
        };
        Ok(&self.fuel_types)
    }

    pub fn select_fuel_type(&mut self, fuel: Option<&str>) -> Result<&OptionSet, SelectionError> {
        let fuel = offered(&self.fuel_types, SelectionField::FuelType, fuel)?;
        self.selection.set(SelectionField::FuelType, fuel.clone());
        self.reset_below(SelectionField::FuelType);
        self.transmissions = match (self.selection.brand(), self.selection.model(), &fuel) {
            (Some(b), Some(m), Some(f)) => self.cascade.on_fuel_changed(b, m, f),
            _ => OptionSet::disabled(),
        };
        Ok(&self.transmissions)
    }

    pub fn select_transmission(&mut self, transmission: Option<&str>) -> Result<(), SelectionError> {
        let transmission = offered(&self.transmissions, SelectionField::Transmission, transmission)?;
        self.selection.set(SelectionField::Transmission, transmission);
        self.view.clear();
        Ok(())
    }

    /// States sit outside the cascade; changing one resets nothing.
    pub fn select_state(&mut self, state: Option<&str>) -> Result<(), SelectionError> {
        let state = offered(&self.states, SelectionField::State, state)?;
        self.selection.set(SelectionField::State, state);
        Ok(())
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Current option set for a field.
    pub fn options(&self, field: SelectionField) -> &OptionSet {
        match field {
            SelectionField::Brand => &self.brands,
            SelectionField::Model => &self.models,
            SelectionField::FuelType => &self.fuel_types,
            SelectionField::Transmission => &self.transmissions,
            SelectionField::State => &self.states,
        }
    }

    pub fn view(&self) -> &ResultView {
        &self.view
    }

    /// Snapshot the selection into a query.
    pub fn query(&self, builder: &QueryBuilder) -> Result<Query, SelectionError> {
        builder.build(&self.selection)
    }

    /// Latch the submit control. Returns `false` if a submit is already in
    /// flight.
    pub fn begin_submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        self.view.set_loading();
        true
    }

    /// Release the submit control. Called on every outcome.
    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Run one submit round-trip: latch, await `request`, release, then
    /// render the response or record the failure in the view.
    ///
    /// The latch is released on every outcome.
    pub async fn submit<F, E>(&mut self, highlight_key: &str, request: F) -> Result<&Rendered, String>
    where
        F: Future<Output = Result<Value, E>>,
        E: Display,
    {
        if !self.begin_submit() {
            return Err(SUBMIT_IN_FLIGHT.to_string());
        }
        let outcome = request.await;
        self.finish_submit();

        match outcome {
            Ok(response) => Ok(self.view.render_value(&response, highlight_key)),
            Err(e) => {
                let message = e.to_string();
                warn!("Submit failed: {}", message);
                self.view.set_failed(message.clone());
                Err(message)
            }
        }
    }

    fn reset_below(&mut self, field: SelectionField) {
        let below: &[SelectionField] = match field {
            SelectionField::Brand => &[
                SelectionField::Model,
                SelectionField::FuelType,
                SelectionField::Transmission,
            ],
            SelectionField::Model => &[SelectionField::FuelType, SelectionField::Transmission],
            SelectionField::FuelType => &[SelectionField::Transmission],
            SelectionField::Transmission | SelectionField::State => &[],
        };
        for f in below {
            self.selection.set(*f, None);
            match f {
                SelectionField::Model => self.models = OptionSet::disabled(),
                SelectionField::FuelType => self.fuel_types = OptionSet::disabled(),
                SelectionField::Transmission => self.transmissions = OptionSet::disabled(),
                SelectionField::Brand | SelectionField::State => {}
            }
        }
        self.view.clear();
        debug!(field = %field, "Cascade reset below");
    }
}

/// Accept `value` only if blank or currently offered.
fn offered(
    options: &OptionSet,
    field: SelectionField,
    value: Option<&str>,
) -> Result<Option<String>, SelectionError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(v) if options.enabled && options.contains(v) => Ok(Some(v.to_string())),
        Some(v) => Err(SelectionError::Unavailable {
            field,
            value: v.to_string(),
        }),
    }
}
