//! GraphQL [`Mutation`]s definitions.

use juniper::graphql_object;
use service::{command, Command as _};

use crate::{api, AsError, Context, Error};

/// Root of all GraphQL mutations.
#[derive(Clone, Copy, Debug)]
pub struct Mutation;

impl Mutation {
    /// Name of the [`tracing::Span`] for the mutations.
    const SPAN_NAME: &'static str = "GraphQL mutation";
}

#[graphql_object(context = Context)]
impl Mutation {
    /// Books trips on the `Launch`es with the provided IDs for the current
    /// `User`.
    ///
    /// Succeeds if at least one trip has been booked.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `AUTHORIZATION_REQUIRED` - the request is anonymous.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "bookTrips",
            launch_ids = ?launch_ids,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn book_trips(
        launch_ids: Vec<api::launch::Id>,
        ctx: &Context,
    ) -> Result<api::TripUpdateResponse, Error> {
        let user = ctx.authorized_user().await?;

        ctx.service()
            .execute(command::BookTrips {
                user_id: user.id,
                launch_ids: launch_ids.into_iter().map(Into::into).collect(),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Cancels the current `User`'s trip on the `Launch` with the provided ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `AUTHORIZATION_REQUIRED` - the request is anonymous.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "cancelTrip",
            launch_id = %launch_id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn cancel_trip(
        launch_id: api::launch::Id,
        ctx: &Context,
    ) -> Result<api::TripUpdateResponse, Error> {
        let user = ctx.authorized_user().await?;

        ctx.service()
            .execute(command::CancelTrip {
                user_id: user.id,
                launch_id: launch_id.into(),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Logs in with the provided email, creating a new `User` if needed.
    ///
    /// Returns a token to be passed in the `Authorization` header, or `null`
    /// if the email is malformed.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "login",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn login(
        email: String,
        ctx: &Context,
    ) -> Result<Option<String>, Error> {
        ctx.service()
            .execute(command::Login { email })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|v| v.into_data().map(|token| token.to_string()))
    }
}
