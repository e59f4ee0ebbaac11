//! Domain definitions.

pub mod launch;
pub mod trip;
pub mod user;

pub use self::{launch::Launch, trip::Trip, user::User};
