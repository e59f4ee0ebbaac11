//! [`Command`] for cancelling a [`Trip`].

use common::operations::{By, Delete, Select};
use tracerr::Traced;

use crate::{
    domain::{launch, trip, user, Launch, Trip},
    infra::{self, catalog, database, Catalog, Database},
    read, Service,
};
#[cfg(doc)]
use crate::domain::User;

use super::Command;

/// [`Command`] for cancelling a [`Trip`] on a [`Launch`].
#[derive(Clone, Copy, Debug)]
pub struct CancelTrip {
    /// ID of the [`User`] cancelling the [`Trip`].
    pub user_id: user::Id,

    /// ID of the [`Launch`] the [`Trip`] is booked on.
    pub launch_id: launch::Id,
}

impl<Db, Cat> Command<CancelTrip> for Service<Db, Cat>
where
    Db: Database<
        Delete<By<Trip, trip::Key>>,
        Ok = bool,
        Err = Traced<database::Error>,
    >,
    Cat: Catalog<
        Select<By<Option<Launch>, launch::Id>>,
        Ok = Option<Launch>,
        Err = Traced<catalog::Error>,
    >,
{
    type Ok = read::outcome::Trips;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: CancelTrip) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CancelTrip { user_id, launch_id } = cmd;

        let cancelled = self
            .database()
            .execute(Delete(By::new(trip::Key { user_id, launch_id })))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        if !cancelled {
            return Ok(read::outcome::cancellation(false, None));
        }

        let launch = self
            .catalog()
            .execute(Select(By::new(launch_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(read::outcome::cancellation(true, launch))
    }
}

/// Error of [`CancelTrip`] [`Command`] execution.
pub type ExecutionError = infra::Error;

#[cfg(test)]
mod spec {
    use common::Verdict;

    use crate::{
        command::{BookTrips, Command as _},
        read::outcome,
        test_support::{launch, service},
    };

    use super::CancelTrip;

    #[tokio::test]
    async fn cancels_booked_trip() {
        let svc = service(vec![launch(999, Some("a"))]);
        drop(
            svc.execute(BookTrips {
                user_id: 1.into(),
                launch_ids: vec![999.into()],
            })
            .await
            .unwrap(),
        );

        let verdict = svc
            .execute(CancelTrip {
                user_id: 1.into(),
                launch_id: 999.into(),
            })
            .await
            .unwrap();

        assert_eq!(
            verdict,
            Verdict::ok(outcome::CANCELLED, vec![launch(999, Some("a"))]),
        );
    }

    #[tokio::test]
    async fn fails_without_booked_trip() {
        let svc = service(vec![launch(999, Some("a"))]);

        let verdict = svc
            .execute(CancelTrip {
                user_id: 1.into(),
                launch_id: 999.into(),
            })
            .await
            .unwrap();

        assert_eq!(verdict, Verdict::fail(outcome::NOT_CANCELLED));
    }

    #[tokio::test]
    async fn cancels_trip_on_unknown_launch() {
        let svc = service(vec![]);
        drop(
            svc.execute(BookTrips {
                user_id: 1.into(),
                launch_ids: vec![5.into()],
            })
            .await
            .unwrap(),
        );

        let verdict = svc
            .execute(CancelTrip {
                user_id: 1.into(),
                launch_id: 5.into(),
            })
            .await
            .unwrap();

        assert_eq!(verdict, Verdict::ok(outcome::CANCELLED, vec![]));
    }
}
