//! Railsr connector CLI and webhook receiver entry point.
//!
//! Binary name: `railsr`
//!
//! Parses CLI arguments, initializes tracing, configuration and node state,
//! then dispatches to the appropriate command handler or starts the
//! webhook receiver.

mod cli;
mod http;
mod state;

use anyhow::anyhow;
use clap::Parser;
use clap_complete::generate;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity; RUST_LOG overrides
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,railsr=debug",
        _ => "trace",
    };
    railsr_observe::tracing_setup::init_tracing(filter, cli.otel)
        .map_err(|e| anyhow!("failed to initialize tracing: {e}"))?;

    let result = run(cli).await;
    railsr_observe::tracing_setup::shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        // Commands that need neither config nor state
        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            generate(shell, &mut cmd, "railsr", &mut std::io::stdout());
        }

        Commands::Operations { resource } => {
            cli::operations::list_operations(resource.as_deref(), cli.json)?;
        }

        Commands::Call {
            resource,
            operation,
            params,
            params_json,
            continue_on_fail,
        } => {
            let item = cli::call::build_item(resource, operation, params_json.as_deref(), params)?;
            let state = AppState::init().await?;
            cli::call::call(&state, item, continue_on_fail, cli.json).await?;
        }

        Commands::Batch {
            file,
            continue_on_fail,
        } => {
            let state = AppState::init().await?;
            cli::call::batch(&state, &file, continue_on_fail, cli.json).await?;
        }

        Commands::Trigger { action } => {
            let state = AppState::init().await?;
            cli::trigger::handle_trigger_command(action, &state, cli.json).await?;
        }

        Commands::Serve {
            host,
            port,
            register,
            target,
        } => {
            let state = AppState::init().await?;
            cli::serve::serve(
                &state,
                cli::serve::ServeOptions {
                    host,
                    port,
                    register,
                    target,
                    quiet: cli.quiet,
                },
            )
            .await?;
        }
    }

    Ok(())
}
