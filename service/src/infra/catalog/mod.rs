//! [`Catalog`]-related implementations.

#[cfg(any(test, feature = "memory"))]
pub mod memory;
#[cfg(feature = "spacex")]
pub mod spacex;

use derive_more::{Display, Error as StdError, From};

#[cfg(any(test, feature = "memory"))]
pub use self::memory::Memory;
#[cfg(feature = "spacex")]
pub use self::spacex::SpaceX;

/// Catalog of [`Launch`]es operation.
///
/// [`Launch`]: crate::domain::Launch
pub use common::Handler as Catalog;

/// [`Catalog`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    #[cfg(feature = "spacex")]
    /// [`SpaceX`] error.
    SpaceX(spacex::Error),
}
