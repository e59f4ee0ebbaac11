//! [`Launch`]-related definitions.

use derive_more::{Display, From, Into};
use juniper::{graphql_object, GraphQLEnum, GraphQLScalar};
use service::{
    domain::{self, trip},
    query, Query as _,
};

use crate::{api, AsError, Context, Error};

/// Rocket launch available for booking.
#[derive(Clone, Debug, From, Into)]
pub struct Launch(domain::Launch);

/// Rocket launch available for booking.
#[graphql_object(context = Context)]
impl Launch {
    /// Unique identifier of this `Launch` (its flight number).
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Launch.id",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn id(&self) -> Id {
        self.0.id.into()
    }

    /// Name of the site this `Launch` takes place at.
    pub fn site(&self) -> Option<String> {
        self.0.site.as_ref().map(ToString::to_string)
    }

    /// Mission of this `Launch`.
    pub fn mission(&self) -> Mission {
        Mission(self.0.mission.clone())
    }

    /// Rocket performing this `Launch`.
    pub fn rocket(&self) -> Rocket {
        Rocket(self.0.rocket.clone())
    }

    /// Indicator whether the current `User` has booked a trip on this
    /// `Launch`.
    ///
    /// Always `false` for anonymous requests.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Launch.isBooked",
            launch_id = %self.0.id,
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn is_booked(&self, ctx: &Context) -> Result<bool, Error> {
        let Some(user) = ctx.current_user().await? else {
            return Ok(false);
        };

        ctx.service()
            .execute(query::trip::IsBooked::by(trip::Key {
                user_id: user.id,
                launch_id: self.0.id,
            }))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|booked| *booked)
    }
}

/// ID of a `Launch`.
#[derive(
    Clone, Copy, Debug, Display, Eq, From, GraphQLScalar, Into, PartialEq,
)]
#[from(domain::launch::Id)]
#[into(domain::launch::Id)]
#[graphql(name = "LaunchId", transparent)]
pub struct Id(i32);

/// Mission of a `Launch`.
#[derive(Clone, Debug, From)]
pub struct Mission(domain::launch::Mission);

/// Mission of a `Launch`.
#[graphql_object(context = Context)]
impl Mission {
    /// Name of this `Mission`.
    pub fn name(&self) -> Option<String> {
        self.0.name.clone()
    }

    /// URL of this `Mission` patch image of the requested `size`.
    ///
    /// `size` defaults to `LARGE`.
    pub fn mission_patch(&self, size: Option<PatchSize>) -> Option<String> {
        self.0
            .patch(size.map(Into::into).unwrap_or_default())
            .map(ToOwned::to_owned)
    }
}

/// Size of a `Mission` patch image.
#[derive(Clone, Copy, Debug, Eq, GraphQLEnum, PartialEq)]
pub enum PatchSize {
    /// Small patch image.
    Small,

    /// Large patch image.
    Large,
}

impl From<PatchSize> for domain::launch::PatchSize {
    fn from(size: PatchSize) -> Self {
        match size {
            PatchSize::Small => Self::Small,
            PatchSize::Large => Self::Large,
        }
    }
}

/// Rocket performing a `Launch`.
#[derive(Clone, Debug, From)]
pub struct Rocket(domain::launch::Rocket);

/// Rocket performing a `Launch`.
#[graphql_object(context = Context)]
impl Rocket {
    /// Unique identifier of this `Rocket`.
    pub fn id(&self) -> String {
        self.0.id.clone()
    }

    /// Name of this `Rocket`.
    pub fn name(&self) -> Option<String> {
        self.0.name.clone()
    }

    /// Type of this `Rocket`.
    #[graphql(name = "type")]
    pub fn kind(&self) -> Option<String> {
        self.0.kind.clone()
    }
}

pub mod list {
    //! Definitions related to [`Launch`] list.

    use derive_more::{From, Into};
    use juniper::graphql_object;
    use service::read;

    use crate::Context;

    use super::Launch;

    /// Page of the [`Launch`] list.
    #[derive(Clone, Debug, From, Into)]
    pub struct Connection(read::launch::list::Page);

    /// Page of the `Launch` list, the most recent `Launch` first.
    #[graphql_object(name = "LaunchConnection", context = Context)]
    impl Connection {
        /// Cursor of the last `Launch` in this page, to be passed as `after`
        /// for fetching the next page.
        #[must_use]
        pub fn cursor(&self) -> Option<String> {
            self.0.cursor.as_ref().map(ToString::to_string)
        }

        /// Indicator whether there are more `Launch`es after this page.
        #[must_use]
        pub fn has_more(&self) -> bool {
            self.0.has_more
        }

        /// `Launch`es of this page.
        #[must_use]
        pub fn launches(&self) -> Vec<Launch> {
            self.0.nodes.iter().cloned().map(Into::into).collect()
        }
    }
}
