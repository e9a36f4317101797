//! # carquery Protocols
//!
//! Shared data model and trait seams for the carquery workspace.
//! Contains only definitions - the behavior lives in `carquery-core`,
//! `carquery-relay` and the backend extensions.
//!
//! ## Core Types
//!
//! - [`Catalog`] - Static brand/model/fuel/transmission lookup tree
//! - [`Selection`] - The user's in-progress choice across five fields
//! - [`Query`] - Natural-language query derived from a selection
//! - [`RelayRequest`] / [`RelayResponse`] - Messages exchanged with the relay
//!
//! ## Core Traits
//!
//! - [`Backend`] - Sends a query and returns the backend's JSON answer
//! - [`WindowHost`] - Opens independent UI surfaces on request

pub mod backend;
pub mod catalog;
pub mod error;
pub mod relay;
pub mod selection;
pub mod window;

pub use backend::{Backend, DEFAULT_ENDPOINT};
pub use catalog::{BrandEntry, Catalog, FuelEntry, ModelEntry, DEFAULT_STATES};
pub use error::{
    CatalogError, ClientError, FormatError, RelayError, SelectionError, WindowError,
};
pub use relay::{RelayRequest, RelayResponse};
pub use selection::{Query, QueryMode, QueryTarget, Selection, SelectionField};
pub use window::{WindowHost, WindowId, WindowKind, WindowSpec};
