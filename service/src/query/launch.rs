//! [`Query`] collection related to a single [`Launch`].

use common::operations::By;

use crate::domain::{launch, Launch};
#[cfg(doc)]
use crate::Query;

use super::CatalogQuery;

/// Queries a [`Launch`] by its [`launch::Id`].
pub type ById = CatalogQuery<By<Option<Launch>, launch::Id>>;

/// Queries [`Launch`]es by their [`launch::Id`]s.
///
/// Unknown [`launch::Id`]s are skipped.
pub type ByIds = CatalogQuery<By<Vec<Launch>, Vec<launch::Id>>>;
