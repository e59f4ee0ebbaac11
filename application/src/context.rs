//! [`Context`]-related definitions.

use std::sync::atomic::{self, AtomicU16};

use axum::{async_trait, extract::FromRequestParts};
use juniper::{
    http::{GraphQLBatchResponse, GraphQLResponse},
    IntoFieldError as _,
};
use service::{
    command::{self, Command as _},
    domain::{user, User},
};
use tokio::sync::OnceCell;
use tracing as log;

use crate::{define_error, AsError, Error, JuniperResponse, Service};

/// Application context.
#[derive(Debug)]
pub struct Context {
    /// [`Service`] instance.
    service: Service,

    /// Error status code.
    error_status_code: AtomicU16,

    /// Parts of the HTTP request.
    parts: http::request::Parts,

    /// [`User`] identified by the HTTP request, if any.
    current_user: OnceCell<Option<User>>,
}

impl Context {
    /// Returns [`Service`] instance of this [`Context`].
    #[must_use]
    pub fn service(&self) -> &Service {
        &self.service
    }

    /// Returns the error status code of this [`Context`].
    #[expect(clippy::missing_panics_doc, reason = "infallible")]
    #[must_use]
    pub fn error_status_code(&self) -> http::StatusCode {
        http::StatusCode::from_u16(
            self.error_status_code.load(atomic::Ordering::Relaxed),
        )
        .expect("invalid status code")
    }

    /// Sets the error status code for this [`Context`].
    ///
    /// Provided [`http::StatusCode`] will be applied to the response.
    pub fn set_error_status_code(&self, status_code: http::StatusCode) {
        self.error_status_code
            .store(status_code.as_u16(), atomic::Ordering::Relaxed);
    }

    /// Helper method calling [`Context::set_error_status_code()`] inside
    /// [`Result::map_err()`] closure.
    pub fn error(&self) -> impl FnOnce(Error) -> Error + '_ {
        move |err| {
            self.set_error_status_code(err.status_code);
            err
        }
    }

    /// Returns the [`User`] identified by the current HTTP request.
    ///
    /// [`None`] is returned for anonymous requests, including the ones
    /// carrying a malformed `Authorization` header.
    ///
    /// # Errors
    ///
    /// Errors if failed to find or create the identified [`User`].
    pub async fn current_user(&self) -> Result<Option<&User>, Error> {
        self.current_user
            .get_or_try_init(|| self.identify())
            .await
            .map(Option::as_ref)
    }

    /// Returns the [`User`] identified by the current HTTP request, requiring
    /// it to be present.
    ///
    /// # Errors
    ///
    /// Errors if:
    /// - the current HTTP request is anonymous;
    /// - failed to find or create the identified [`User`].
    pub async fn authorized_user(&self) -> Result<&User, Error> {
        self.current_user()
            .await?
            .ok_or_else(|| AuthError::AuthorizationRequired.into())
            .map_err(self.error())
    }

    /// Identifies the [`User`] by the `Authorization` header of the HTTP
    /// request.
    async fn identify(&self) -> Result<Option<User>, Error> {
        let Some(header) = self.parts.headers.get(http::header::AUTHORIZATION)
        else {
            return Ok(None);
        };
        let Ok(token) = header.to_str() else {
            log::debug!("ignoring non-ASCII `Authorization` header");
            return Ok(None);
        };

        self.service
            .execute(command::AuthorizeUser {
                token: user::Token::from(token),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(self.error())
    }
}

impl juniper::Context for Context {}

#[async_trait]
impl<S> FromRequestParts<S> for Context
where
    S: Send + Sync,
{
    type Rejection = JuniperResponse;

    async fn from_request_parts(
        parts: &mut http::request::Parts,
        _: &S,
    ) -> Result<Self, Self::Rejection> {
        let service =
            parts.extensions.get::<Service>().cloned().ok_or_else(|| {
                JuniperResponse {
                    status_code: http::StatusCode::INTERNAL_SERVER_ERROR,
                    response: GraphQLBatchResponse::Single(
                        GraphQLResponse::error(
                            Error::internal(&"missing `Service` extension")
                                .into_field_error(),
                        ),
                    ),
                }
            })?;

        Ok(Self {
            service,
            error_status_code: AtomicU16::new(
                http::StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            ),
            parts: parts.clone(),
            current_user: OnceCell::new(),
        })
    }
}

define_error! {
    enum AuthError {
        #[code = "AUTHORIZATION_REQUIRED"]
        #[status = UNAUTHORIZED]
        #[message = "Authorization required"]
        AuthorizationRequired,
    }
}

#[cfg(test)]
mod spec {
    use crate::test_support::{context, service};

    #[tokio::test]
    async fn treats_request_without_header_as_anonymous() {
        let svc = service(vec![]);
        let ctx = context(&svc, None).await;

        assert_eq!(ctx.current_user().await.unwrap(), None);

        let err = ctx.authorized_user().await.unwrap_err();
        assert_eq!(err.code, "AUTHORIZATION_REQUIRED");
        assert_eq!(ctx.error_status_code(), http::StatusCode::UNAUTHORIZED);
        assert!(svc.database().users().is_empty());
    }

    #[tokio::test]
    async fn treats_malformed_header_as_anonymous() {
        let svc = service(vec![]);

        for header in [&b"%%%"[..], b"bm90IGFuIGVtYWls", b"\xFF\xFE"] {
            let ctx = context(&svc, Some(header)).await;

            assert_eq!(ctx.current_user().await.unwrap(), None);
            assert!(ctx.authorized_user().await.is_err());
        }
        assert!(svc.database().users().is_empty());
    }

    #[tokio::test]
    async fn identifies_user_by_encoded_email() {
        let svc = service(vec![]);
        let ctx = context(&svc, Some(b"YUBhLmE=")).await;

        let user = ctx.current_user().await.unwrap().cloned().unwrap();
        assert_eq!(user.email.to_string(), "a@a.a");
        assert_eq!(ctx.authorized_user().await.unwrap(), &user);

        let again = context(&svc, Some(b"YUBhLmE=")).await;
        assert_eq!(again.current_user().await.unwrap(), Some(&user));
        assert_eq!(svc.database().users(), vec![user]);
    }
}
