mod cli;
mod output;

use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use clap::error::ErrorKind as ClapErrorKind;
use ddg_appcore::settings::render_settings;
use ddg_appcore::{AppService, Launch, Terminal};
use ddg_core::error::DdgError;
use ddg_engine::{Generation, Generator};
use ddg_providers::DuckClient;
use ddg_runtime::ConfigStore;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command, normalize_args, rejected_command};
use crate::output::{HELP, Style, version_line};

fn init_logging() -> anyhow::Result<()> {
    // Quiet by default so normal output stays clean; `RUST_LOG=debug` for details.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("install log subscriber")
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    if let Err(e) = init_logging() {
        eprintln!("warning: {e:#}");
    }

    let style = Style::from_env();
    print!("{}", style.banner());

    let args = normalize_args(std::env::args_os());
    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(e) if e.kind() == ClapErrorKind::InvalidSubcommand => {
            let cmd = rejected_command(&e, &args);
            eprintln!("Unknown command: {cmd}\n");
            println!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(cli, &style).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("command failed: {e:?}");
            eprintln!("{}", style.error_line(&e));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli, style: &Style) -> Result<(), DdgError> {
    match cli.command {
        Some(Command::Help) => {
            println!("{HELP}");
            return Ok(());
        }
        Some(Command::Version) => {
            println!("{}", version_line());
            return Ok(());
        }
        _ => {}
    }

    let store = match cli.config {
        Some(path) => ConfigStore::at_path(path),
        None => ConfigStore::in_home()?,
    };
    log::debug!("using config at {}", store.path().display());

    let generator = Generator::new(Arc::new(DuckClient::new()), ddg_platform::system_clipboard());
    let svc = AppService::new(store, generator);

    let stdin = io::stdin();
    let mut term = Terminal::new(stdin.lock(), io::stdout());

    match cli.command {
        None => match svc.launch(&mut term).await? {
            Launch::Generated(generation) => print_generation(&generation, style),
            Launch::ShowHelp => println!("{HELP}"),
        },
        Some(Command::Gen) => {
            let generation = svc.generate().await?;
            print_generation(&generation, style);
        }
        Some(Command::Settings(args)) => {
            if args.any_supplied() {
                svc.update_settings(&args.to_update())?;
                println!("✅ Settings updated.");
            } else {
                let cfg = svc.current_settings()?;
                println!("{}", render_settings(&cfg));
            }
        }
        Some(Command::Reset) => {
            svc.reset(&mut term)?;
        }
        Some(Command::Help) | Some(Command::Version) => {}
    }

    Ok(())
}

fn print_generation(generation: &Generation, style: &Style) {
    println!("{}", style.address(generation.address()));
    if generation.copied() {
        println!("(copied to clipboard)");
    }
}
