//! Read entities definitions.

pub mod launch;
pub mod outcome;
pub mod trip;
