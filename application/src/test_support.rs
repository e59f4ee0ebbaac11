//! Helpers for executing the GraphQL API on top of in-memory infrastructure.

use axum::extract::FromRequestParts as _;
use juniper::{DefaultScalarValue, ExecutionError, Value, Variables};
use service::{
    domain::{
        launch::{Mission, Rocket},
        Launch,
    },
    infra::{catalog, database},
};

use crate::{api, Context, Service};

/// Creates a new [`Service`] with the provided `launches` (in ascending
/// order) and no users or trips.
pub(crate) fn service(launches: Vec<Launch>) -> Service {
    Service::new(database::Memory::default(), catalog::Memory::new(launches))
}

/// Creates a bare [`Launch`] with the provided `id`.
pub(crate) fn launch(id: i32) -> Launch {
    Launch {
        id: id.into(),
        cursor: Some(id.to_string().into()),
        site: None,
        mission: Mission::default(),
        rocket: Rocket::default(),
    }
}

/// Extracts a [`Context`] from an HTTP request to the provided [`Service`]
/// carrying the provided raw `Authorization` header, if any.
pub(crate) async fn context(
    service: &Service,
    authorization: Option<&[u8]>,
) -> Context {
    let mut req = http::Request::builder().extension(service.clone());
    if let Some(value) = authorization {
        req = req.header(http::header::AUTHORIZATION, value);
    }
    let (mut parts, ()) = req.body(()).unwrap().into_parts();

    Context::from_request_parts(&mut parts, &()).await.unwrap()
}

/// Executes the provided GraphQL `document` against the [`api::schema()`].
pub(crate) async fn execute(
    document: &str,
    ctx: &Context,
) -> (Value, Vec<ExecutionError<DefaultScalarValue>>) {
    juniper::execute(document, None, &api::schema(), &Variables::new(), ctx)
        .await
        .unwrap()
}

/// Returns `code`s of the provided GraphQL `errors`.
pub(crate) fn error_codes(
    errors: &[ExecutionError<DefaultScalarValue>],
) -> Vec<String> {
    errors
        .iter()
        .filter_map(|e| {
            e.error()
                .extensions()
                .as_object_value()?
                .get_field_value("code")?
                .as_string_value()
                .map(ToOwned::to_owned)
        })
        .collect()
}
