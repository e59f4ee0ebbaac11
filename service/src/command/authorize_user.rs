//! [`Command`] for authorizing a [`User`].

use common::operations::Insert;
use tracerr::Traced;

use crate::{
    domain::{user, User},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for resolving the [`User`] identified by a [`user::Token`].
///
/// Resolves to [`None`] if the [`user::Token`] doesn't encode a valid
/// [`user::Email`], so the request is treated as an anonymous one.
#[derive(Clone, Debug)]
pub struct AuthorizeUser {
    /// [`user::Token`] to authorize.
    pub token: user::Token,
}

impl<Db, Cat> Command<AuthorizeUser> for Service<Db, Cat>
where
    Db: Database<
        Insert<user::Email>,
        Ok = User,
        Err = Traced<database::Error>,
    >,
{
    type Ok = Option<User>;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: AuthorizeUser,
    ) -> Result<Self::Ok, Self::Err> {
        let AuthorizeUser { token } = cmd;

        let Some(email) = token.decode() else {
            return Ok(None);
        };

        self.database()
            .execute(Insert(email))
            .await
            .map(Some)
            .map_err(tracerr::wrap!())
    }
}

/// Error of [`AuthorizeUser`] [`Command`] execution.
pub type ExecutionError = database::Error;

#[cfg(test)]
mod spec {
    use crate::{
        command::Command as _,
        domain::user::{Email, Token},
        test_support::service,
    };

    use super::AuthorizeUser;

    #[tokio::test]
    async fn resolves_user_by_token() {
        let svc = service(vec![]);
        let email = Email::new("a@a.a").unwrap();

        let user = svc
            .execute(AuthorizeUser {
                token: Token::encode(&email),
            })
            .await
            .unwrap()
            .unwrap();

        assert_eq!(user.email, email);
    }

    #[tokio::test]
    async fn resolves_same_user_twice() {
        let svc = service(vec![]);
        let token = Token::encode(&Email::new("a@a.a").unwrap());

        let first = svc
            .execute(AuthorizeUser {
                token: token.clone(),
            })
            .await
            .unwrap();
        let second = svc.execute(AuthorizeUser { token }).await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn treats_garbage_as_anonymous() {
        let svc = service(vec![]);

        let user = svc
            .execute(AuthorizeUser {
                token: Token::from("%%%"),
            })
            .await
            .unwrap();

        assert_eq!(user, None);
        assert!(svc.database().users().is_empty());
    }
}
