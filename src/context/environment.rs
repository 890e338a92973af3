//! Environment struct (stdin/stdout/etc.)

/// Execution environment
pub struct Environment {
    pub stdin_isatty: bool,
    pub stdout_isatty: bool,
    pub stderr_isatty: bool,
    pub program_name: String,
}

impl Environment {
    pub fn init() -> Self {
        Self::default()
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            stdin_isatty: atty::is(atty::Stream::Stdin),
            stdout_isatty: atty::is(atty::Stream::Stdout),
            stderr_isatty: atty::is(atty::Stream::Stderr),
            program_name: "specport".to_string(),
        }
    }
}
