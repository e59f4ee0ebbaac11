//! [`Trip`]-related read definitions.

use derive_more::{Deref, From, Into};

#[cfg(doc)]
use crate::domain::{Launch, Trip, User};

/// Indicator whether a [`User`] has booked a [`Trip`] on a [`Launch`].
#[derive(Clone, Copy, Debug, Deref, Eq, From, Hash, Into, PartialEq)]
pub struct IsBooked(pub bool);

impl PartialEq<bool> for IsBooked {
    fn eq(&self, other: &bool) -> bool {
        self.0 == *other
    }
}
