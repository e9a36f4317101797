//! # carquery Core
//!
//! The selection-to-render pipeline, free of I/O:
//!
//! - [`CascadeController`] - option sets for each level of the catalog
//! - [`QueryBuilder`] - selection to natural-language query
//! - [`partition`] - split a response into highlighted value and remainder
//! - [`ResultView`] - all-or-nothing render state
//! - [`Session`] - one UI session: selection, cascade state, submit latch

pub mod cascade;
pub mod partition;
pub mod query;
pub mod session;
pub mod view;

pub use cascade::{CascadeController, CascadeLevels, OptionSet};
pub use partition::{format_raw, format_raw_bytes, partition, pretty, PartitionedResponse};
pub use query::QueryBuilder;
pub use session::{Session, SUBMIT_IN_FLIGHT};
pub use view::{Rendered, ResultView, ViewStatus};
