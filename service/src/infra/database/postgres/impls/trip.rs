//! [`Trip`]-related [`Database`] implementations.

use common::operations::{By, Delete, Insert, Select};
use tracerr::Traced;

use crate::{
    domain::{launch, trip, user, Trip},
    infra::{
        database::{self, postgres::Connection, Postgres},
        Database,
    },
    read,
};

/// Books a [`Trip`], returning the existing one if it's booked already.
impl<C> Database<Insert<trip::Key>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Option<Trip>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(key): Insert<trip::Key>,
    ) -> Result<Self::Ok, Self::Err> {
        let trip::Key { user_id, launch_id } = key;

        const SQL: &str = "\
            INSERT INTO trips (user_id, launch_id) \
            VALUES ($1::INT4, $2::INT4) \
            ON CONFLICT (user_id, launch_id) DO UPDATE \
            SET launch_id = EXCLUDED.launch_id \
            RETURNING id, user_id, launch_id";
        Ok(self
            .query_opt(SQL, &[&user_id, &launch_id])
            .await
            .map_err(tracerr::wrap!())?
            .map(|row| Trip {
                id: row.get("id"),
                user_id: row.get("user_id"),
                launch_id: row.get("launch_id"),
            }))
    }
}

impl<C> Database<Delete<By<Trip, trip::Key>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = bool;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<Trip, trip::Key>>,
    ) -> Result<Self::Ok, Self::Err> {
        let trip::Key { user_id, launch_id } = by.into_inner();

        const SQL: &str = "\
            DELETE FROM trips \
            WHERE user_id = $1::INT4 \
              AND launch_id = $2::INT4";
        Ok(self
            .exec(SQL, &[&user_id, &launch_id])
            .await
            .map_err(tracerr::wrap!())?
            > 0)
    }
}

impl<C> Database<Select<By<Vec<launch::Id>, user::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<launch::Id>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<launch::Id>, user::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let user_id = by.into_inner();

        const SQL: &str = "\
            SELECT launch_id \
            FROM trips \
            WHERE user_id = $1::INT4 \
            ORDER BY id";
        Ok(self
            .query(SQL, &[&user_id])
            .await
            .map_err(tracerr::wrap!())?
            .into_iter()
            .map(|row| row.get("launch_id"))
            .collect())
    }
}

impl<C> Database<Select<By<read::trip::IsBooked, trip::Key>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = read::trip::IsBooked;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<read::trip::IsBooked, trip::Key>>,
    ) -> Result<Self::Ok, Self::Err> {
        let trip::Key { user_id, launch_id } = by.into_inner();

        const SQL: &str = "\
            SELECT EXISTS (\
                SELECT 1 \
                FROM trips \
                WHERE user_id = $1::INT4 \
                  AND launch_id = $2::INT4\
            ) AS is_booked";
        Ok(read::trip::IsBooked(
            self.query_one(SQL, &[&user_id, &launch_id])
                .await
                .map_err(tracerr::wrap!())?
                .get("is_booked"),
        ))
    }
}
