//! Recoverable errors surfaced by the slide engine.
//!
//! Navigation itself never fails; these cover the text inputs that configure it.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unknown easing function `{0}`")]
    UnknownEasing(String),
    #[error("unknown command `{0}` (expected `next` or `previous`)")]
    UnknownCommand(String),
    #[error("unknown theme `{0}` (expected `plain` or `progress`)")]
    UnknownTheme(String),
}

pub type Result<T> = std::result::Result<T, Error>;
