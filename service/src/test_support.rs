//! Helpers for testing the [`Service`] on top of in-memory infrastructure.

use crate::{
    domain::{
        launch::{Mission, Rocket},
        Launch,
    },
    infra::{catalog, database},
    Service,
};

/// Creates a new [`Service`] on top of a [`catalog::Memory`] with the provided
/// `launches` (in ascending order) and an empty [`database::Memory`].
pub(crate) fn service(
    launches: Vec<Launch>,
) -> Service<database::Memory, catalog::Memory> {
    Service::new(database::Memory::default(), catalog::Memory::new(launches))
}

/// Creates a bare [`Launch`] with the provided `id` and `cursor`.
pub(crate) fn launch(id: i32, cursor: Option<&str>) -> Launch {
    Launch {
        id: id.into(),
        cursor: cursor.map(Into::into),
        site: None,
        mission: Mission::default(),
        rocket: Rocket::default(),
    }
}
