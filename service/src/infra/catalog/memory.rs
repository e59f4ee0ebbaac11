//! In-memory [`Catalog`] implementation.

use common::operations::{By, Select};
use tracerr::Traced;

use crate::domain::{launch, Launch};

use super::{Catalog, Error};

/// [`Catalog`] serving a fixed list of [`Launch`]es.
#[derive(Clone, Debug, Default)]
pub struct Memory {
    /// [`Launch`]es in ascending order.
    launches: Vec<Launch>,
}

impl Memory {
    /// Creates a new [`Memory`] catalog of the provided `launches`, which are
    /// expected to be in ascending order.
    #[must_use]
    pub fn new(launches: Vec<Launch>) -> Self {
        Self { launches }
    }
}

impl Catalog<Select<By<Vec<Launch>, ()>>> for Memory {
    type Ok = Vec<Launch>;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Launch>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.launches.clone())
    }
}

impl Catalog<Select<By<Option<Launch>, launch::Id>>> for Memory {
    type Ok = Option<Launch>;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Launch>, launch::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self.launches.iter().find(|l| l.id == id).cloned())
    }
}

impl Catalog<Select<By<Vec<Launch>, Vec<launch::Id>>>> for Memory {
    type Ok = Vec<Launch>;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Launch>, Vec<launch::Id>>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(by
            .into_inner()
            .into_iter()
            .filter_map(|id| self.launches.iter().find(|l| l.id == id))
            .cloned()
            .collect())
    }
}
