//! Error model for the hello module.
//!
//! Every failure this module can produce is a `ModuleError`. The binding
//! layer in `lib.rs` converts these into `napi::Error` before they cross
//! into the host.

use napi::Status;
use std::io;
use thiserror::Error;

/// Failures surfaced to the host that loaded this module.
#[derive(Debug, Error)]
pub enum ModuleError {
    /// The caller did not supply exactly one argument.
    #[error("expected exactly 1 argument, got {got}")]
    WrongArity { got: usize },

    /// The single argument was not a text value.
    #[error("argument must be text, got {got}")]
    NotText { got: &'static str },

    /// No command with this name is registered.
    #[error("unknown command `{0}`")]
    UnknownCommand(String),

    /// The greeting could not be written to the output stream.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl From<ModuleError> for napi::Error {
    fn from(err: ModuleError) -> Self {
        let status = match err {
            ModuleError::Output(_) => Status::GenericFailure,
            _ => Status::InvalidArg,
        };
        napi::Error::new(status, err.to_string())
    }
}
