//! Infrastructure layer.

pub mod catalog;
pub mod database;

use derive_more::{Display, Error as StdError, From};

pub use self::{catalog::Catalog, database::Database};
#[cfg(feature = "spacex")]
pub use self::catalog::{spacex, SpaceX};
#[cfg(feature = "postgres")]
pub use self::database::{postgres, Postgres};

/// Error of an operation involving both [`Catalog`] and [`Database`].
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`Catalog`] error.
    #[display("`Catalog` operation failed: {_0}")]
    Catalog(catalog::Error),
}
