//! [`Command`] for booking [`Trip`]s.

use common::operations::{By, Insert, Select};
use tracerr::Traced;

use crate::{
    domain::{launch, trip, user, Launch, Trip},
    infra::{self, catalog, database, Catalog, Database},
    read, Service,
};
#[cfg(doc)]
use crate::domain::User;

use super::Command;

/// [`Command`] for booking [`Trip`]s on multiple [`Launch`]es at once.
#[derive(Clone, Debug)]
pub struct BookTrips {
    /// ID of the [`User`] booking the [`Trip`]s.
    pub user_id: user::Id,

    /// IDs of the [`Launch`]es to book [`Trip`]s on.
    pub launch_ids: Vec<launch::Id>,
}

impl<Db, Cat> Command<BookTrips> for Service<Db, Cat>
where
    Db: Database<
        Insert<trip::Key>,
        Ok = Option<Trip>,
        Err = Traced<database::Error>,
    >,
    Cat: Catalog<
        Select<By<Vec<Launch>, Vec<launch::Id>>>,
        Ok = Vec<Launch>,
        Err = Traced<catalog::Error>,
    >,
{
    type Ok = read::outcome::Trips;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: BookTrips) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let BookTrips {
            user_id,
            launch_ids,
        } = cmd;

        let mut booked = Vec::with_capacity(launch_ids.len());
        for launch_id in launch_ids.iter().copied() {
            let trip = self
                .database()
                .execute(Insert(trip::Key { user_id, launch_id }))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?;
            if let Some(t) = trip {
                booked.push(t.launch_id);
            }
        }

        let launches = if booked.is_empty() {
            Vec::new()
        } else {
            self.catalog()
                .execute(Select(By::new(booked.clone())))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?
        };

        Ok(read::outcome::booking(&launch_ids, &booked, launches))
    }
}

/// Error of [`BookTrips`] [`Command`] execution.
pub type ExecutionError = infra::Error;
