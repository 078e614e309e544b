//! Typed shapes for the well-known subset of Conduit methods.
//!
//! These are declarative only: they give `user.whoami` and
//! `differential.revision.search` a shape without constraining the
//! dynamic mechanism, which reaches any method the server knows.

mod revision;
mod user;

pub use revision::*;
pub use user::*;
