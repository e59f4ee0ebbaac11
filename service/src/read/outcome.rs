//! Outcomes of the [`Trip`] and [`User`] mutations.
//!
//! Each mutation reduces whatever the [`Database`] reported into a single
//! [`Verdict`], so the caller never has to inspect the raw write result.
//!
//! [`Database`]: crate::infra::Database

use common::Verdict;
use itertools::Itertools as _;

#[cfg(doc)]
use crate::domain::Trip;
use crate::domain::{launch, user, Launch, User};

/// Message of a successful booking.
pub const BOOKED: &str = "trips booked successfully";

/// Message of a successful cancellation.
pub const CANCELLED: &str = "trip cancelled";

/// Message of a failed cancellation.
pub const NOT_CANCELLED: &str = "failed to cancel trip";

/// Message of a successful login.
pub const LOGGED_IN: &str = "logged in";

/// Message of a failed login.
pub const NOT_LOGGED_IN: &str = "failed to find or create user";

/// Outcome of booking or cancelling [`Trip`]s.
pub type Trips = Verdict<Vec<Launch>>;

/// Outcome of a [`User`] login.
pub type Login = Verdict<user::Token>;

/// Reduces the result of booking the `requested` [`Launch`]es.
///
/// Booking succeeds if at least one [`Launch`] has been `booked`, while the
/// `launches` are the resolved `booked` ones.
#[must_use]
pub fn booking(
    requested: &[launch::Id],
    booked: &[launch::Id],
    launches: Vec<Launch>,
) -> Trips {
    if booked.is_empty() {
        return Verdict::fail(not_booked(requested, booked));
    }
    Verdict::ok(BOOKED, launches)
}

/// Reduces the result of cancelling a [`Trip`] on a `launch`.
#[must_use]
pub fn cancellation(cancelled: bool, launch: Option<Launch>) -> Trips {
    if !cancelled {
        return Verdict::fail(NOT_CANCELLED);
    }
    Verdict::ok(CANCELLED, launch.into_iter().collect())
}

/// Reduces the result of finding or creating a [`User`] on login.
#[must_use]
pub fn login(user: Option<&User>) -> Login {
    match user {
        Some(u) => Verdict::ok(LOGGED_IN, user::Token::encode(&u.email)),
        None => Verdict::fail(NOT_LOGGED_IN),
    }
}

/// Renders the failure message listing the [`Launch`]es which couldn't be
/// booked.
fn not_booked(requested: &[launch::Id], booked: &[launch::Id]) -> String {
    format!(
        "the following launches couldn't be booked: {}",
        requested.iter().filter(|id| !booked.contains(*id)).join(", "),
    )
}

#[cfg(test)]
mod spec {
    use common::Verdict;

    use crate::domain::{launch, user, Launch, User};

    use super::{booking, cancellation, login};

    fn launch(id: i32, cursor: &str) -> Launch {
        Launch {
            id: id.into(),
            cursor: Some(cursor.into()),
            site: None,
            mission: launch::Mission::default(),
            rocket: launch::Rocket::default(),
        }
    }

    #[test]
    fn booking_succeeds_if_anything_booked() {
        let outcome =
            booking(&[123.into()], &[999.into()], vec![launch(999, "foo")]);

        assert_eq!(
            outcome,
            Verdict::ok("trips booked successfully", vec![launch(999, "foo")]),
        );
    }

    #[test]
    fn booking_fails_if_nothing_booked() {
        let outcome = booking(&[123.into(), 7.into()], &[], vec![]);

        assert!(!outcome.is_ok());
        assert_eq!(
            outcome.message(),
            "the following launches couldn't be booked: 123, 7",
        );
    }

    #[test]
    fn cancellation_follows_store_result() {
        assert_eq!(
            cancellation(true, Some(launch(999, "foo"))),
            Verdict::ok("trip cancelled", vec![launch(999, "foo")]),
        );
        assert_eq!(
            cancellation(true, None),
            Verdict::ok("trip cancelled", vec![]),
        );

        let failed = cancellation(false, Some(launch(999, "foo")));
        assert!(!failed.is_ok());
        assert!(!failed.message().is_empty());
    }

    #[test]
    fn login_encodes_email() {
        let user = User {
            id: 1.into(),
            email: user::Email::new("a@a.a").unwrap(),
        };

        let outcome = login(Some(&user));

        assert_eq!(
            outcome.into_data().map(|t| t.to_string()),
            Some("YUBhLmE=".to_owned()),
        );
        assert_eq!(login(None).into_data(), None);
    }
}
