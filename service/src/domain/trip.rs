//! [`Trip`] definitions.

use derive_more::{Display, From, Into};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};

use crate::domain::{launch, user};
#[cfg(doc)]
use crate::domain::{Launch, User};

/// [`Launch`] booked by a [`User`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Trip {
    /// ID of this [`Trip`].
    pub id: Id,

    /// ID of the [`User`] who booked this [`Trip`].
    pub user_id: user::Id,

    /// ID of the booked [`Launch`].
    pub launch_id: launch::Id,
}

impl Trip {
    /// Returns the [`Key`] of this [`Trip`].
    #[must_use]
    pub fn key(&self) -> Key {
        Key {
            user_id: self.user_id,
            launch_id: self.launch_id,
        }
    }
}

/// ID of a [`Trip`].
#[derive(Clone, Copy, Debug, Display, Eq, From, Hash, Into, PartialEq)]
#[cfg_attr(feature = "postgres", derive(ToSql, FromSql), postgres(transparent))]
pub struct Id(i32);

/// Natural key of a [`Trip`]: a [`User`] may book a [`Launch`] only once.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Key {
    /// ID of the [`User`] booking a [`Launch`].
    pub user_id: user::Id,

    /// ID of the booked [`Launch`].
    pub launch_id: launch::Id,
}
