//! [SpaceX API] [`Catalog`] implementation.
//!
//! [SpaceX API]: https://github.com/r-spacex/SpaceX-API

use std::time;

use common::operations::{By, Select};
use derive_more::{Display, Error as StdError, From};
use futures::future;
use serde::Deserialize;
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{launch, Launch},
    infra::{catalog, Catalog},
};

/// [`SpaceX`] configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the [SpaceX API].
    ///
    /// [SpaceX API]: https://github.com/r-spacex/SpaceX-API
    pub base_url: String,

    /// Timeout of a single HTTP request.
    pub timeout: time::Duration,
}

/// [SpaceX API] [`Catalog`] client.
///
/// [SpaceX API]: https://github.com/r-spacex/SpaceX-API
#[derive(Clone, Debug)]
pub struct SpaceX {
    /// HTTP client performing requests.
    client: reqwest::Client,

    /// URL of the `launches` endpoint.
    launches_url: String,
}

impl SpaceX {
    /// Creates a new [`SpaceX`] client with the provided [`Config`].
    ///
    /// # Errors
    ///
    /// If failed to build an HTTP client.
    pub fn new(conf: &Config) -> Result<Self, Traced<catalog::Error>> {
        let client = reqwest::Client::builder()
            .timeout(conf.timeout)
            .build()
            .map_err(tracerr::from_and_wrap!(=> Error))
            .map_err(tracerr::map_from)?;
        Ok(Self {
            client,
            launches_url: format!(
                "{}/launches",
                conf.base_url.trim_end_matches('/'),
            ),
        })
    }

    /// Fetches [`Launch`]es matching the provided `query`, in the
    /// chronological order.
    async fn launches(
        &self,
        query: &[(&str, String)],
    ) -> Result<Vec<Launch>, Traced<catalog::Error>> {
        log::debug!("fetching `{}` with {query:?}", self.launches_url);

        let payload = self
            .client
            .get(&self.launches_url)
            .query(query)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(tracerr::from_and_wrap!(=> Error))
            .map_err(tracerr::map_from)?
            .json::<Vec<Payload>>()
            .await
            .map_err(tracerr::from_and_wrap!(=> Error))
            .map_err(tracerr::map_from)?;

        Ok(payload.into_iter().map(Into::into).collect())
    }
}

impl Catalog<Select<By<Vec<Launch>, ()>>> for SpaceX {
    type Ok = Vec<Launch>;
    type Err = Traced<catalog::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Launch>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.launches(&[]).await.map_err(tracerr::wrap!())
    }
}

impl Catalog<Select<By<Option<Launch>, launch::Id>>> for SpaceX {
    type Ok = Option<Launch>;
    type Err = Traced<catalog::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Launch>, launch::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self
            .launches(&[("flight_number", id.to_string())])
            .await
            .map_err(tracerr::wrap!())?
            .into_iter()
            .find(|l| l.id == id))
    }
}

impl Catalog<Select<By<Vec<Launch>, Vec<launch::Id>>>> for SpaceX {
    type Ok = Vec<Launch>;
    type Err = Traced<catalog::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Launch>, Vec<launch::Id>>>,
    ) -> Result<Self::Ok, Self::Err> {
        let found = future::try_join_all(
            by.into_inner()
                .into_iter()
                .map(|id| self.execute(Select(By::new(id)))),
        )
        .await
        .map_err(tracerr::wrap!())?;

        Ok(found.into_iter().flatten().collect())
    }
}

/// [`SpaceX`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// HTTP request failed or its response couldn't be decoded.
    #[display("HTTP request failed: {_0}")]
    Http(reqwest::Error),
}

/// Launch as represented by the [SpaceX API].
///
/// [SpaceX API]: https://github.com/r-spacex/SpaceX-API
#[derive(Debug, Deserialize)]
struct Payload {
    /// Flight number, identifying the launch.
    flight_number: i32,

    /// UNIX timestamp of the launch.
    launch_date_unix: Option<i64>,

    /// Launch site.
    launch_site: Option<SitePayload>,

    /// Name of the mission.
    mission_name: Option<String>,

    /// Links related to the launch.
    #[serde(default)]
    links: LinksPayload,

    /// Rocket performing the launch.
    #[serde(default)]
    rocket: RocketPayload,
}

/// Launch site as represented by the [SpaceX API].
///
/// [SpaceX API]: https://github.com/r-spacex/SpaceX-API
#[derive(Debug, Deserialize)]
struct SitePayload {
    /// Name of the site.
    site_name: Option<String>,
}

/// Launch links as represented by the [SpaceX API].
///
/// [SpaceX API]: https://github.com/r-spacex/SpaceX-API
#[derive(Debug, Default, Deserialize)]
struct LinksPayload {
    /// URL of the small mission patch.
    mission_patch_small: Option<String>,

    /// URL of the large mission patch.
    mission_patch: Option<String>,
}

/// Rocket as represented by the [SpaceX API].
///
/// [SpaceX API]: https://github.com/r-spacex/SpaceX-API
#[derive(Debug, Default, Deserialize)]
struct RocketPayload {
    /// ID of the rocket.
    #[serde(default)]
    rocket_id: String,

    /// Name of the rocket.
    rocket_name: Option<String>,

    /// Type of the rocket.
    rocket_type: Option<String>,
}

impl From<Payload> for Launch {
    fn from(payload: Payload) -> Self {
        let Payload {
            flight_number,
            launch_date_unix,
            launch_site,
            mission_name,
            links,
            rocket,
        } = payload;

        Self {
            id: flight_number.into(),
            cursor: launch_date_unix.map(|ts| ts.to_string().into()),
            site: launch_site.and_then(|s| s.site_name).map(Into::into),
            mission: launch::Mission {
                name: mission_name,
                patch_small: links.mission_patch_small,
                patch_large: links.mission_patch,
            },
            rocket: launch::Rocket {
                id: rocket.rocket_id,
                name: rocket.rocket_name,
                kind: rocket.rocket_type,
            },
        }
    }
}

#[cfg(test)]
mod spec {
    use crate::domain::{launch, Launch};

    use super::Payload;

    #[test]
    fn reduces_payload_into_launch() {
        let payload = serde_json::from_str::<Payload>(
            r#"{
                "flight_number": 65,
                "launch_date_unix": 1528902000,
                "launch_site": {"site_name": "CCAFS SLC 40"},
                "mission_name": "Telstar 19V",
                "links": {
                    "mission_patch_small": "https://images2.imgbox.com/s.png",
                    "mission_patch": "https://images2.imgbox.com/l.png"
                },
                "rocket": {
                    "rocket_id": "falcon9",
                    "rocket_name": "Falcon 9",
                    "rocket_type": "FT"
                }
            }"#,
        )
        .unwrap();

        assert_eq!(
            Launch::from(payload),
            Launch {
                id: 65.into(),
                cursor: Some("1528902000".into()),
                site: Some("CCAFS SLC 40".into()),
                mission: launch::Mission {
                    name: Some("Telstar 19V".into()),
                    patch_small: Some("https://images2.imgbox.com/s.png".into()),
                    patch_large: Some("https://images2.imgbox.com/l.png".into()),
                },
                rocket: launch::Rocket {
                    id: "falcon9".into(),
                    name: Some("Falcon 9".into()),
                    kind: Some("FT".into()),
                },
            },
        );
    }

    #[test]
    fn tolerates_missing_fields() {
        let payload =
            serde_json::from_str::<Payload>(r#"{"flight_number": 1}"#).unwrap();

        let launch = Launch::from(payload);

        assert_eq!(launch.id, 1.into());
        assert_eq!(launch.cursor, None);
        assert_eq!(launch.site, None);
        assert_eq!(launch.mission, launch::Mission::default());
        assert_eq!(launch.rocket, launch::Rocket::default());
    }
}
