//! [`Query`] collection related to [`Trip`]s.

use common::operations::By;

#[cfg(doc)]
use crate::{
    domain::{Launch, Trip, User},
    Query,
};
use crate::{
    domain::{launch, trip, user},
    read,
};

use super::DatabaseQuery;

/// Queries whether a [`Trip`] with the provided [`trip::Key`] is booked.
pub type IsBooked = DatabaseQuery<By<read::trip::IsBooked, trip::Key>>;

/// Queries IDs of the [`Launch`]es booked by a [`User`].
pub type LaunchIds = DatabaseQuery<By<Vec<launch::Id>, user::Id>>;
