//! TSDoc comment validation.
//!
//! - `message`: diagnostic ids and the diagnostic type
//! - `tags`: the standard TSDoc tag table
//! - `validator`: the [`DocCommentValidator`] trait and [`TsDocValidator`]

pub mod message;
pub mod tags;
pub mod validator;

pub use message::{DocDiagnostic, MessageId};
pub use validator::{DocCommentValidator, TsDocValidator};
