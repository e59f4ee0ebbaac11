//! [`Query`] collection related to a single [`User`].

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    domain::{launch, user, Launch},
    infra::{self, catalog, database, Catalog, Database},
    Service,
};
#[cfg(doc)]
use crate::domain::{Trip, User};

use super::Query;

/// Queries [`Launch`]es a [`User`] has booked [`Trip`]s on.
#[derive(Clone, Copy, Debug)]
pub struct Trips {
    /// ID of the [`User`] whose [`Trip`]s should be queried.
    pub user_id: user::Id,
}

impl<Db, Cat> Query<Trips> for Service<Db, Cat>
where
    Db: Database<
        Select<By<Vec<launch::Id>, user::Id>>,
        Ok = Vec<launch::Id>,
        Err = Traced<database::Error>,
    >,
    Cat: Catalog<
        Select<By<Vec<Launch>, Vec<launch::Id>>>,
        Ok = Vec<Launch>,
        Err = Traced<catalog::Error>,
    >,
{
    type Ok = Vec<Launch>;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, query: Trips) -> Result<Self::Ok, Self::Err> {
        let Trips { user_id } = query;

        let ids = self
            .database()
            .execute(Select(By::new(user_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> ExecutionError))?;
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        self.catalog()
            .execute(Select(By::new(ids)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> ExecutionError))
    }
}

/// Error of [`Trips`] [`Query`] execution.
pub type ExecutionError = infra::Error;

#[cfg(test)]
mod spec {
    use crate::{
        command::{BookTrips, Command as _},
        test_support::{launch, service},
    };

    use super::Trips;

    #[tokio::test]
    async fn resolves_booked_launches() {
        let svc = service(vec![launch(1, Some("a")), launch(2, Some("b"))]);
        let user_id = 7.into();
        drop(
            svc.execute(BookTrips {
                user_id,
                launch_ids: vec![2.into()],
            })
            .await
            .unwrap(),
        );

        let trips = svc.execute(Trips { user_id }).await.unwrap();

        assert_eq!(trips, vec![launch(2, Some("b"))]);
    }

    #[tokio::test]
    async fn returns_nothing_without_trips() {
        let svc = service(vec![launch(1, Some("a"))]);

        let trips = svc.execute(Trips { user_id: 1.into() }).await.unwrap();

        assert!(trips.is_empty());
    }
}
