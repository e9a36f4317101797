//! Catalog construction errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Duplicate {level} '{key}' under '{parent}'")]
    DuplicateKey {
        level: &'static str,
        parent: String,
        key: String,
    },

    #[error("Empty {0} name")]
    EmptyKey(&'static str),
}
