//! [`Command`] for logging a [`User`] in.

use common::operations::Insert;
use tracerr::Traced;

use crate::{
    domain::{user, User},
    infra::{database, Database},
    read, Service,
};

use super::Command;

/// [`Command`] for logging a [`User`] in by its [`user::Email`].
///
/// The [`User`] is created if it doesn't exist yet.
#[derive(Clone, Debug)]
pub struct Login {
    /// Raw email address to log in with.
    pub email: String,
}

impl<Db, Cat> Command<Login> for Service<Db, Cat>
where
    Db: Database<
        Insert<user::Email>,
        Ok = User,
        Err = Traced<database::Error>,
    >,
{
    type Ok = read::outcome::Login;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: Login) -> Result<Self::Ok, Self::Err> {
        let Login { email } = cmd;

        let Some(email) = user::Email::new(email) else {
            tracing::debug!("rejected login with malformed email");
            return Ok(read::outcome::login(None));
        };

        let user = self
            .database()
            .execute(Insert(email))
            .await
            .map_err(tracerr::wrap!())?;

        Ok(read::outcome::login(Some(&user)))
    }
}

/// Error of [`Login`] [`Command`] execution.
pub type ExecutionError = database::Error;

#[cfg(test)]
mod spec {
    use crate::{command::Command as _, test_support::service};

    use super::Login;

    #[tokio::test]
    async fn returns_token_for_valid_email() {
        let svc = service(vec![]);

        let verdict = svc
            .execute(Login {
                email: "a@a.a".into(),
            })
            .await
            .unwrap();

        assert!(verdict.is_ok());
        assert_eq!(
            verdict.into_data().map(|t| t.to_string()).as_deref(),
            Some("YUBhLmE="),
        );
    }

    #[tokio::test]
    async fn reuses_existing_user() {
        let svc = service(vec![]);

        for _ in 0..2 {
            drop(
                svc.execute(Login {
                    email: "a@a.a".into(),
                })
                .await
                .unwrap(),
            );
        }

        assert_eq!(svc.database().users().len(), 1);
    }

    #[tokio::test]
    async fn fails_for_malformed_email() {
        let svc = service(vec![]);

        let verdict = svc
            .execute(Login {
                email: "not an email".into(),
            })
            .await
            .unwrap();

        assert!(!verdict.is_ok());
        assert!(svc.database().users().is_empty());
    }
}
