//! [`Command`] definition.

pub mod authorize_user;
pub mod book_trips;
pub mod cancel_trip;
pub mod login;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    authorize_user::AuthorizeUser, book_trips::BookTrips,
    cancel_trip::CancelTrip, login::Login,
};
