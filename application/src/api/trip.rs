//! Trip-related definitions.

use juniper::GraphQLObject;
use service::read;

use crate::{api, Context};

/// Result of booking or cancelling trips.
#[derive(Clone, Debug, GraphQLObject)]
#[graphql(context = Context)]
pub struct TripUpdateResponse {
    /// Indicator whether the update succeeded.
    pub success: bool,

    /// Human-readable description of the update result.
    pub message: String,

    /// `Launch`es affected by the update.
    pub launches: Vec<api::Launch>,
}

impl From<read::outcome::Trips> for TripUpdateResponse {
    fn from(verdict: read::outcome::Trips) -> Self {
        let success = verdict.is_ok();
        let message = verdict.message().to_owned();
        Self {
            success,
            message,
            launches: verdict
                .into_data()
                .into_iter()
                .flatten()
                .map(Into::into)
                .collect(),
        }
    }
}

#[cfg(test)]
mod spec {
    use common::Verdict;
    use service::domain::{launch, Launch};

    use super::TripUpdateResponse;

    fn launch(id: i32) -> Launch {
        Launch {
            id: id.into(),
            cursor: None,
            site: None,
            mission: launch::Mission::default(),
            rocket: launch::Rocket::default(),
        }
    }

    #[test]
    fn reports_success_with_launches() {
        let resp = TripUpdateResponse::from(Verdict::ok(
            "trips booked successfully",
            vec![launch(999)],
        ));

        assert!(resp.success);
        assert_eq!(resp.message, "trips booked successfully");
        assert_eq!(resp.launches.len(), 1);
    }

    #[test]
    fn reports_failure_without_launches() {
        let resp =
            TripUpdateResponse::from(Verdict::fail("failed to cancel trip"));

        assert!(!resp.success);
        assert_eq!(resp.message, "failed to cancel trip");
        assert!(resp.launches.is_empty());
    }
}
