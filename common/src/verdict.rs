//! [`Verdict`] definitions.

/// Verdict of an operation, reported as data rather than as an error.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Verdict<T> {
    /// Operation succeeded and produced `data`.
    Ok {
        /// Human-readable message describing the success.
        message: String,

        /// Data produced by the operation.
        data: T,
    },

    /// Operation failed.
    Fail {
        /// Human-readable message describing the failure.
        message: String,
    },
}

impl<T> Verdict<T> {
    /// Creates a successful [`Verdict`].
    #[must_use]
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self::Ok {
            message: message.into(),
            data,
        }
    }

    /// Creates a failed [`Verdict`].
    #[must_use]
    pub fn fail(message: impl Into<String>) -> Self {
        Self::Fail {
            message: message.into(),
        }
    }

    /// Indicates whether this [`Verdict`] is successful.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok { .. })
    }

    /// Returns the message of this [`Verdict`].
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Ok { message, .. } | Self::Fail { message } => message,
        }
    }

    /// Consumes this [`Verdict`] returning its data, if it's successful.
    #[must_use]
    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Ok { data, .. } => Some(data),
            Self::Fail { .. } => None,
        }
    }
}

#[cfg(test)]
mod spec {
    use super::Verdict;

    #[test]
    fn exposes_message_and_data() {
        let ok = Verdict::ok("done", 42);
        assert!(ok.is_ok());
        assert_eq!(ok.message(), "done");
        assert_eq!(ok.into_data(), Some(42));

        let fail = Verdict::<i32>::fail("nope");
        assert!(!fail.is_ok());
        assert_eq!(fail.message(), "nope");
        assert_eq!(fail.into_data(), None);
    }
}
