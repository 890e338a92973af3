//! Main execution logic
//!
//! `run` owns argument parsing, logging setup, and the tokio runtime;
//! `program` dispatches between the provisioning pipeline and the
//! diagnostic modes. The pipeline is one HTTP call at a time on a
//! current-thread runtime; nothing here is concurrent.

use clap::Parser;

use crate::cli::args::{Args, Shell};
use crate::client::PostmanClient;
use crate::config::Config;
use crate::context::Environment;
use crate::diagnostics;
use crate::errors::{Result, SpecportError};
use crate::openapi::{parse_spec, SpecDocument};
use crate::pipeline::{self, resolve_workspace};
use crate::status::ExitStatus;

/// Main entry point for the CLI.
///
/// Handles argument parsing and dispatches to the appropriate mode
/// (pipeline, offline plan, diagnostics).
pub fn run(args: Vec<String>, mut env: Environment) -> ExitStatus {
    if let Some(name) = args.first() {
        if let Some(basename) = std::path::Path::new(name).file_stem() {
            env.program_name = basename.to_string_lossy().to_string();
        }
    }

    let parsed = match Args::try_parse_from(&args) {
        Ok(args) => args,
        Err(e) => {
            e.print().ok();
            return if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                ExitStatus::Success
            } else {
                ExitStatus::Error
            };
        }
    };

    if let Some(shell) = &parsed.generate_completions {
        generate_completions(shell, &env.program_name);
        return ExitStatus::Success;
    }

    if parsed.debug {
        init_tracing();
    }
    let debug = parsed.debug;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("Failed to create tokio runtime");

    match runtime.block_on(program(parsed, env)) {
        Ok(status) => status,
        Err(e) => handle_error(e, debug),
    }
}

pub async fn program(args: Args, env: Environment) -> Result<ExitStatus> {
    // Environment helpers need no spec file
    if let Some(ref environment_id) = args.delete_environment {
        let client = build_client(&args)?;
        return diagnostics::delete_environment(&client, environment_id).await;
    }

    if args.list_environments {
        let client = build_client(&args)?;
        let workspace_id =
            resolve_workspace(&client, args.workspace_id.as_deref(), &args.workspace_name).await?;
        return diagnostics::list_environments(&client, &workspace_id).await;
    }

    let spec_path = args
        .spec
        .as_ref()
        .ok_or_else(|| SpecportError::Config("no spec file given".to_string()))?;

    eprintln!("Reading spec {}...", spec_path.display());
    let spec = parse_spec(spec_path)?;

    let env_urls = spec.environment_urls();
    eprintln!("  loaded spec: {} (v{})", spec.title, spec.version);
    eprintln!(
        "  extracted {} environments: {}",
        env_urls.len(),
        env_urls.keys().copied().collect::<Vec<_>>().join(", ")
    );

    if args.offline {
        print_plan(&spec, &env);
        return Ok(ExitStatus::Success);
    }

    let client = build_client(&args)?;
    let workspace_id =
        resolve_workspace(&client, args.workspace_id.as_deref(), &args.workspace_name).await?;

    if args.diagnose_specs {
        return diagnostics::run_specs_probe(&client, &workspace_id, &spec).await;
    }

    pipeline::run_pipeline(&client, &workspace_id, &spec, &args.mock_script).await
}

/// Resolve the remote config and construct the client. This is the point
/// where a missing API key becomes fatal, before any network call.
fn build_client(args: &Args) -> Result<PostmanClient> {
    let config = Config::from_args(args)?;
    eprintln!("Credentials loaded");
    PostmanClient::new(&config)
}

/// Print the provisioning plan derived from the spec without any network I/O
fn print_plan(spec: &SpecDocument, env: &Environment) {
    if env.stdout_isatty {
        println!("# provisioning plan (offline)");
    }

    println!("API: {} v{}", spec.title, spec.version);
    if let Some(ref description) = spec.description {
        println!("  {description}");
    }

    println!("Servers:");
    for server in &spec.servers {
        match &server.description {
            Some(description) => println!("  {} ({})", server.url, description),
            None => println!("  {}", server.url),
        }
    }

    let env_urls = spec.environment_urls();
    let values = pipeline::build_environment_values(&env_urls);
    println!(
        "Environment '{} - Environment' ({} variables):",
        spec.title,
        values.len()
    );
    for value in &values {
        if value.value.is_empty() {
            println!("  {} = (set at request time)", value.key);
        } else {
            println!("  {} = {}", value.key, value.value);
        }
    }

    println!("Collection: generated from the spec via import");
}

fn handle_error(error: SpecportError, traceback: bool) -> ExitStatus {
    if traceback {
        eprintln!("Error: {:?}", error);
    } else {
        eprintln!("Error: {}", error);
    }

    // All fatal errors return the same exit code (1) following Unix conventions
    ExitStatus::Error
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env("SPECPORT_LOG")
        .unwrap_or_else(|_| EnvFilter::new("specport=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn generate_completions(shell: &Shell, bin_name: &str) {
    use clap::CommandFactory;
    use clap_complete::{generate, Shell as ClapShell};

    let mut cmd = Args::command();
    let shell = match shell {
        Shell::Bash => ClapShell::Bash,
        Shell::Zsh => ClapShell::Zsh,
        Shell::Fish => ClapShell::Fish,
        Shell::PowerShell => ClapShell::PowerShell,
        Shell::Elvish => ClapShell::Elvish,
    };

    generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
}
