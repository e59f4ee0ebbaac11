//! GraphQL API definitions.

pub mod launch;
mod mutation;
mod query;
pub mod trip;
pub mod user;

use juniper::EmptySubscription;

use crate::{define_error, Context};

pub use self::{
    launch::Launch, mutation::Mutation, query::Query,
    trip::TripUpdateResponse, user::User,
};

/// GraphQL schema.
pub type Schema =
    juniper::RootNode<'static, Query, Mutation, EmptySubscription<Context>>;

/// Creates a new GraphQL [`Schema`].
#[must_use]
pub fn schema() -> Schema {
    Schema::new(Query, Mutation, EmptySubscription::new())
}

define_error! {
    enum PaginationError {
        #[code = "INVALID_PAGE_SIZE"]
        #[status = BAD_REQUEST]
        #[message = "Page size must not be negative"]
        InvalidPageSize,
    }
}
