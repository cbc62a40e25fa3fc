//! mediaquery CLI.
//!
//! Classifies the terminal viewport into mobile / tablet / desktop.

use std::time::Duration;

use clap::{Parser, Subcommand};
use mediaquery::{
    ClassifierConfig, DeviceHint, Dimensions, EnvironmentMode, EnvironmentProbe, FixedViewport,
    ViewportClassifier, ViewportWatcher,
};

mod event;
mod terminal;
mod ui;

use crate::event::ResizePump;
use crate::terminal::{CellSize, TerminalHost};

#[derive(Parser)]
#[command(name = "mediaquery")]
#[command(about = "Classify the viewport as mobile, tablet or desktop")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a viewport width
    Classify {
        /// Viewport width in pixels
        width: u32,

        /// Viewport height in pixels
        #[arg(default_value_t = 0)]
        height: u32,

        /// Print the snapshot as JSON
        #[arg(long)]
        json: bool,
    },

    /// Report whether a viewport is available here
    Probe {
        /// Force the environment: interactive, headless or auto
        #[arg(long)]
        env: Option<EnvironmentMode>,
    },

    /// Watch the terminal and print each applied change
    Watch {
        /// Category to report before the first measurement
        #[arg(short, long)]
        default: Option<DeviceHint>,

        /// Debounce window in milliseconds
        #[arg(long)]
        debounce_ms: Option<u64>,

        /// Force the environment: interactive, headless or auto
        #[arg(long)]
        env: Option<EnvironmentMode>,

        /// Nominal cell width when the terminal doesn't report pixels
        #[arg(long, default_value_t = 8)]
        cell_width: u16,

        /// Nominal cell height when the terminal doesn't report pixels
        #[arg(long, default_value_t = 16)]
        cell_height: u16,

        /// Print one JSON object per change
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Classify {
            width,
            height,
            json,
        } => {
            let classifier = ViewportClassifier::mount(
                FixedViewport(Dimensions::new(width, height)),
                &EnvironmentProbe::interactive(),
                &ClassifierConfig::default(),
            );
            ui::snapshot(&classifier.snapshot(), json)?;
        }

        Commands::Probe { env } => {
            let probe = EnvironmentProbe::detect(env);
            ui::probe(&probe);
        }

        Commands::Watch {
            default,
            debounce_ms,
            env,
            cell_width,
            cell_height,
            json,
        } => {
            let mut config = ClassifierConfig::from_env()?;
            if let Some(hint) = default {
                config = config.with_default_device(hint);
            }
            if let Some(ms) = debounce_ms {
                config = config.with_debounce(Duration::from_millis(ms));
            }

            let cell = CellSize {
                width: cell_width,
                height: cell_height,
            };
            run_watch(&config, env, cell, json).await?;
        }
    }

    Ok(())
}

/// Log to stderr, filtered by RUST_LOG (default: warn).
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Mount a classifier on the terminal and stream changes until Ctrl-C.
async fn run_watch(
    config: &ClassifierConfig,
    env: Option<EnvironmentMode>,
    cell: CellSize,
    json: bool,
) -> miette::Result<()> {
    let probe = EnvironmentProbe::detect(env);
    let classifier = ViewportClassifier::mount(TerminalHost::new(cell), &probe, config);

    if !json {
        ui::print_compact_header(env!("CARGO_PKG_VERSION"));
        ui::probe(&probe);
    }
    ui::snapshot(&classifier.snapshot(), json)?;

    if !classifier.is_listening() {
        if !json {
            ui::dim("nothing to watch.");
        }
        return Ok(());
    }

    let (pump, notices) = ResizePump::new(64);
    let pump_task = pump.spawn();
    let mut watcher = ViewportWatcher::spawn(classifier, notices);

    if !json {
        ui::info(&format!(
            "watching for resizes ({}ms debounce). ctrl-c to stop.",
            config.debounce.as_millis()
        ));
    }

    loop {
        tokio::select! {
            changed = watcher.changed() => match changed {
                Some(snapshot) => ui::snapshot(&snapshot, json)?,
                None => break,
            },
            result = tokio::signal::ctrl_c() => {
                result.map_err(|e| miette::miette!("failed to listen for ctrl-c: {}", e))?;
                break;
            }
        }
    }

    pump_task.abort();
    watcher.shutdown().await;

    if !json {
        ui::dim("stopped.");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_flag_is_typed() {
        let cli = Cli::try_parse_from(["mediaquery", "watch", "--env", "headless"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Watch {
                env: Some(EnvironmentMode::Headless),
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_env_flag_is_rejected() {
        let err = Cli::try_parse_from(["mediaquery", "watch", "--env", "maybe"])
            .err()
            .expect("unknown environment mode should fail to parse");
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        assert!(err.to_string().contains("Unknown environment mode 'maybe'"));
    }
}
