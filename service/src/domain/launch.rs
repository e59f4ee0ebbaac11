//! [`Launch`] definitions.

use common::Cursored;
use derive_more::{AsRef, Display, From, Into};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};

/// Rocket launch available for booking.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Launch {
    /// ID of this [`Launch`].
    pub id: Id,

    /// [`Cursor`] of this [`Launch`] in the chronological list of all
    /// [`Launch`]es, if it's known.
    pub cursor: Option<Cursor>,

    /// [`Site`] this [`Launch`] takes place at.
    pub site: Option<Site>,

    /// [`Mission`] of this [`Launch`].
    pub mission: Mission,

    /// [`Rocket`] of this [`Launch`].
    pub rocket: Rocket,
}

impl Cursored for Launch {
    type Cursor = Cursor;

    fn cursor(&self) -> Option<&Cursor> {
        self.cursor.as_ref()
    }
}

/// ID of a [`Launch`] (its flight number).
#[derive(
    Clone, Copy, Debug, Display, Eq, From, Hash, Into, Ord, PartialEq, PartialOrd,
)]
#[cfg_attr(feature = "postgres", derive(ToSql, FromSql), postgres(transparent))]
pub struct Id(i32);

/// Opaque position of a [`Launch`] in the chronological list of all
/// [`Launch`]es.
#[derive(AsRef, Clone, Debug, Display, Eq, From, Hash, PartialEq)]
#[as_ref(str, String)]
#[from(String, &str)]
pub struct Cursor(String);

/// Name of a [`Launch`] site.
#[derive(AsRef, Clone, Debug, Display, Eq, From, PartialEq)]
#[as_ref(str, String)]
#[from(String, &str)]
pub struct Site(String);

/// Mission of a [`Launch`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Mission {
    /// Name of this [`Mission`].
    pub name: Option<String>,

    /// URL of the small patch image of this [`Mission`].
    pub patch_small: Option<String>,

    /// URL of the large patch image of this [`Mission`].
    pub patch_large: Option<String>,
}

impl Mission {
    /// Returns URL of the patch image of this [`Mission`] in the provided
    /// [`PatchSize`].
    #[must_use]
    pub fn patch(&self, size: PatchSize) -> Option<&str> {
        match size {
            PatchSize::Small => self.patch_small.as_deref(),
            PatchSize::Large => self.patch_large.as_deref(),
        }
    }
}

/// Size of a [`Mission`] patch image.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum PatchSize {
    /// Small patch image.
    Small,

    /// Large patch image.
    #[default]
    Large,
}

/// Rocket performing a [`Launch`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Rocket {
    /// ID of this [`Rocket`].
    pub id: String,

    /// Name of this [`Rocket`].
    pub name: Option<String>,

    /// Type of this [`Rocket`].
    pub kind: Option<String>,
}
