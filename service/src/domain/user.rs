//! [`User`] definitions.

use std::sync::LazyLock;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use derive_more::{AsRef, Display, From, Into};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};
use regex::Regex;

/// Platform user booking trips.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct User {
    /// ID of this [`User`].
    pub id: Id,

    /// [`Email`] of this [`User`].
    pub email: Email,
}

/// ID of a [`User`].
#[derive(Clone, Copy, Debug, Display, Eq, From, Hash, Into, PartialEq)]
#[cfg_attr(feature = "postgres", derive(ToSql, FromSql), postgres(transparent))]
pub struct Id(i32);

/// Email address of a [`User`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(str, String)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
pub struct Email(String);

impl Email {
    /// Creates a new [`Email`] if the given `address` is valid.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Option<Self> {
        let address = address.into();
        Self::check(&address).then_some(Self(address))
    }

    /// Checks whether the given `address` is a valid [`Email`].
    fn check(address: impl AsRef<str>) -> bool {
        /// Regular expression checking [`Email`] format: a non-empty local
        /// part, a single `@` and a domain having at least one dot.
        static REGEX: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$")
                .expect("valid regex")
        });

        let address = address.as_ref();
        address.len() <= 254 && REGEX.is_match(address)
    }
}

/// Login token of a [`User`].
///
/// It's merely a reversible encoding of the [`User`]'s [`Email`], used to
/// identify the [`User`] in subsequent requests. It's not a secret.
///
/// A [`Token`] may be created from any raw string: it's validated only when
/// [`Token::decode()`]d.
#[derive(AsRef, Clone, Debug, Display, Eq, From, PartialEq)]
#[as_ref(str, String)]
#[from(String, &str)]
pub struct Token(String);

impl Token {
    /// Encodes the provided [`Email`] into a [`Token`].
    #[must_use]
    pub fn encode(email: &Email) -> Self {
        Self(BASE64.encode(AsRef::<str>::as_ref(email)))
    }

    /// Decodes the [`Email`] this [`Token`] was created from.
    ///
    /// [`None`] is returned if this [`Token`] doesn't encode a valid
    /// [`Email`].
    #[must_use]
    pub fn decode(&self) -> Option<Email> {
        let bytes = BASE64.decode(self.0.trim()).ok()?;
        Email::new(String::from_utf8(bytes).ok()?)
    }
}
