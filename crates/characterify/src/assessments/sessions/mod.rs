//! In-progress questionnaires that can be resumed later, one per test.

pub mod domain;
pub mod store;

pub use domain::{SessionProgressView, TestSession};
pub use store::{SessionError, SessionStore};
