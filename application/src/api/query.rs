//! GraphQL [`Query`]s definitions.

use juniper::graphql_object;
use service::{query, read, Query as _};

use crate::{api, AsError, Context, Error};

/// Root of all GraphQL queries.
#[derive(Clone, Copy, Debug)]
pub struct Query;

impl Query {
    /// Name of the [`tracing::Span`] for the queries.
    pub(crate) const SPAN_NAME: &'static str = "GraphQL query";
}

#[graphql_object(context = Context)]
impl Query {
    /// Fetches the page of `Launch`es, the most recent first.
    ///
    /// `pageSize` defaults to 20. If `after` doesn't match any `Launch`, the
    /// page starts from the most recent one.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `INVALID_PAGE_SIZE` - the provided `pageSize` is negative.
    #[tracing::instrument(
        skip_all,
        fields(
            after = ?after,
            gql.name = "launches",
            otel.name = Self::SPAN_NAME,
            page_size = ?page_size,
        ),
    )]
    pub async fn launches(
        page_size: Option<i32>,
        after: Option<String>,
        ctx: &Context,
    ) -> Result<api::launch::list::Connection, Error> {
        let arguments = read::launch::list::Arguments::new(
            page_size,
            after.map(Into::into),
        )
        .ok_or_else(|| api::PaginationError::InvalidPageSize.into())
        .map_err(ctx.error())?;

        ctx.service()
            .execute(query::launches::List(arguments))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Returns the `Launch` with the specified ID, if it exists.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "launch",
            id = %id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn launch(
        id: api::launch::Id,
        ctx: &Context,
    ) -> Result<Option<api::Launch>, Error> {
        ctx.service()
            .execute(query::launch::ById::by(id.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|l| l.map(Into::into))
    }

    /// Returns the `User` identified by the `Authorization` header, if any.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "me",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn me(ctx: &Context) -> Result<Option<api::User>, Error> {
        Ok(ctx.current_user().await?.cloned().map(Into::into))
    }
}
