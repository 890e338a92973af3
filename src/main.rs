// The binary compiles the same modules as the library and exercises only a
// subset of their surface
#![allow(dead_code)]

mod cli;
mod client;
mod config;
mod context;
mod core;
mod diagnostics;
mod errors;
mod models;
mod openapi;
mod pipeline;
mod status;

use context::Environment;
use status::ExitStatus;

/// Entry point - delegates to core::run()
///
/// Returns ExitStatus directly, which implements std::process::Termination.
fn main() -> ExitStatus {
    // Exit immediately on Ctrl+C. The pipeline keeps no local state worth
    // unwinding and never rolls back already-created remote resources, so
    // there is nothing to clean up.
    ctrlc::set_handler(|| {
        eprintln!("\nInterrupted");
        std::process::exit(ExitStatus::Interrupted as i32);
    })
    .ok();

    let args: Vec<String> = std::env::args().collect();
    let env = Environment::init();

    core::run(args, env)
}
