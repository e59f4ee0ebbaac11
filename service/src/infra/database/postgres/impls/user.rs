//! [`User`]-related [`Database`] implementations.

use common::operations::Insert;
use tracerr::Traced;

use crate::{
    domain::{user, User},
    infra::{
        database::{self, postgres::Connection, Postgres},
        Database,
    },
};

/// Finds the [`User`] with the provided [`user::Email`], creating it if it
/// doesn't exist yet.
impl<C> Database<Insert<user::Email>> for Postgres<C>
where
    C: Connection,
{
    type Ok = User;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(email): Insert<user::Email>,
    ) -> Result<Self::Ok, Self::Err> {
        // `DO UPDATE` makes `RETURNING` yield the already existing row too.
        const SQL: &str = "\
            INSERT INTO users (email) \
            VALUES ($1::VARCHAR) \
            ON CONFLICT (email) DO UPDATE \
            SET email = EXCLUDED.email \
            RETURNING id, email";
        let row = self
            .query_one(SQL, &[&email])
            .await
            .map_err(tracerr::wrap!())?;

        Ok(User {
            id: row.get("id"),
            email: row.get("email"),
        })
    }
}
