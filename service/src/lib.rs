//! Service contains the business logic of booking trips on rocket launches.
//!
//! List of available Cargo features:
#![doc = document_features::document_features!()]
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod command;
pub mod domain;
pub mod infra;
pub mod query;
pub mod read;
#[cfg(test)]
mod test_support;

#[cfg(doc)]
use infra::{Catalog, Database};

pub use self::{command::Command, query::Query};

/// Domain service.
#[derive(Clone, Debug)]
pub struct Service<Db, Cat> {
    /// [`Database`] of this [`Service`].
    database: Db,

    /// [`Catalog`] of this [`Service`].
    catalog: Cat,
}

impl<Db, Cat> Service<Db, Cat> {
    /// Creates a new [`Service`] on top of the provided [`Database`] and
    /// [`Catalog`].
    #[must_use]
    pub fn new(database: Db, catalog: Cat) -> Self {
        Self { database, catalog }
    }

    /// Returns [`Database`] of this [`Service`].
    #[must_use]
    pub fn database(&self) -> &Db {
        &self.database
    }

    /// Returns [`Catalog`] of this [`Service`].
    #[must_use]
    pub fn catalog(&self) -> &Cat {
        &self.catalog
    }
}
