//! [`Launch`]-related read definitions.

#[cfg(doc)]
use crate::domain::Launch;

pub mod list {
    //! [`Launch`] list definitions.

    use common::define_pagination;

    use crate::domain::Launch;

    define_pagination!(Launch);
}
