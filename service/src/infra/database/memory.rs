//! In-memory [`Database`] implementation.

use std::{
    collections::HashSet,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use common::operations::{By, Delete, Insert, Select};
use tracerr::Traced;

use crate::{
    domain::{launch, trip, user, Trip, User},
    read,
};

use super::{Database, Error};

/// [`Database`] keeping [`User`]s and [`Trip`]s in memory.
///
/// Clones share the same storage.
#[derive(Clone, Debug, Default)]
pub struct Memory(Arc<Mutex<State>>);

/// Stored data of a [`Memory`] database.
#[derive(Debug, Default)]
struct State {
    users: Vec<User>,
    trips: Vec<Trip>,

    /// [`launch::Id`]s no [`Trip`] can be booked on.
    rejected: HashSet<launch::Id>,
}

impl Memory {
    /// Makes [`Trip`]s on the [`Launch`] with the provided `id` impossible to
    /// book.
    ///
    /// [`Launch`]: crate::domain::Launch
    pub fn reject(&self, id: launch::Id) {
        _ = self.state().rejected.insert(id);
    }

    /// Returns all the stored [`User`]s.
    #[must_use]
    pub fn users(&self) -> Vec<User> {
        self.state().users.clone()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Generates the next sequential ID after `len` stored rows.
fn next_id<T: From<i32>>(len: usize) -> T {
    i32::try_from(len + 1).unwrap_or(i32::MAX).into()
}

impl Database<Insert<user::Email>> for Memory {
    type Ok = User;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Insert(email): Insert<user::Email>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self.state();
        let users = &mut state.users;
        if let Some(u) = users.iter().find(|u| u.email == email) {
            return Ok(u.clone());
        }
        let user = User {
            id: next_id(users.len()),
            email,
        };
        users.push(user.clone());
        Ok(user)
    }
}

impl Database<Insert<trip::Key>> for Memory {
    type Ok = Option<Trip>;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Insert(key): Insert<trip::Key>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self.state();
        if state.rejected.contains(&key.launch_id) {
            return Ok(None);
        }
        if let Some(t) = state.trips.iter().find(|t| t.key() == key) {
            return Ok(Some(*t));
        }
        let trip = Trip {
            id: next_id(state.trips.len()),
            user_id: key.user_id,
            launch_id: key.launch_id,
        };
        state.trips.push(trip);
        Ok(Some(trip))
    }
}

impl Database<Delete<By<Trip, trip::Key>>> for Memory {
    type Ok = bool;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<Trip, trip::Key>>,
    ) -> Result<Self::Ok, Self::Err> {
        let key = by.into_inner();
        let mut state = self.state();
        let trips = &mut state.trips;
        let before = trips.len();
        trips.retain(|t| t.key() != key);
        Ok(trips.len() < before)
    }
}

impl Database<Select<By<Vec<launch::Id>, user::Id>>> for Memory {
    type Ok = Vec<launch::Id>;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<launch::Id>, user::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let user_id = by.into_inner();
        Ok(self
            .state()
            .trips
            .iter()
            .filter(|t| t.user_id == user_id)
            .map(|t| t.launch_id)
            .collect())
    }
}

impl Database<Select<By<read::trip::IsBooked, trip::Key>>> for Memory {
    type Ok = read::trip::IsBooked;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Select(by): Select<By<read::trip::IsBooked, trip::Key>>,
    ) -> Result<Self::Ok, Self::Err> {
        let key = by.into_inner();
        Ok(self.state().trips.iter().any(|t| t.key() == key).into())
    }
}
