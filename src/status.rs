//! Exit status codes for the CLI
//!
//! specport follows standard Unix exit code conventions:
//! - 0: the pipeline ran to completion (soft failures included)
//! - 1: any fatal error (missing credential, unreadable spec, remote 4xx/5xx
//!   on a required call, transport failure)
//! - 130: user interrupted (Ctrl+C, standard SIGINT exit code)
//!
//! Soft failures never change the exit code; they are logged with the
//! response detail and the remaining stages proceed.

use std::process::{ExitCode, Termination};

/// Exit status codes following standard Unix conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    /// Pipeline completed (possibly with logged soft failures)
    Success = 0,
    /// Any fatal error
    Error = 1,
    /// User interrupted (Ctrl+C) - standard SIGINT code
    Interrupted = 130,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status as u8)
    }
}

impl Termination for ExitStatus {
    fn report(self) -> ExitCode {
        ExitCode::from(self as u8)
    }
}

impl ExitStatus {
    /// Create an exit status from a raw exit code
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => ExitStatus::Success,
            130 => ExitStatus::Interrupted,
            _ => ExitStatus::Error,
        }
    }
}
