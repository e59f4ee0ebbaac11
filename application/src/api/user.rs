//! [`User`]-related definitions.

use derive_more::{Display, From, Into};
use juniper::{graphql_object, GraphQLScalar};
use service::{domain, query, Query as _};

use crate::{api, AsError, Context, Error};

/// User booking trips.
#[derive(Clone, Debug, From, Into)]
pub struct User(domain::User);

/// User booking trips.
#[graphql_object(context = Context)]
impl User {
    /// Unique identifier of this `User`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "User.id",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn id(&self) -> Id {
        self.0.id.into()
    }

    /// Email of this `User`.
    pub fn email(&self) -> String {
        self.0.email.to_string()
    }

    /// `Launch`es this `User` has booked trips on.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "User.trips",
            otel.name = api::Query::SPAN_NAME,
            user_id = %self.0.id,
        ),
    )]
    pub async fn trips(&self, ctx: &Context) -> Result<Vec<api::Launch>, Error> {
        ctx.service()
            .execute(query::user::Trips { user_id: self.0.id })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|launches| launches.into_iter().map(Into::into).collect())
    }
}

/// ID of a `User`.
#[derive(
    Clone, Copy, Debug, Display, Eq, From, GraphQLScalar, Into, PartialEq,
)]
#[from(domain::user::Id)]
#[into(domain::user::Id)]
#[graphql(name = "UserId", transparent)]
pub struct Id(i32);
