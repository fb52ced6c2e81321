//! CLI entry point for sattuner.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and
//! exit codes. All business logic lives in the `sattuner-app` crate.
//!
//! Every operation writes exactly one JSON envelope to stdout and exits.
//! Internal failures become an error envelope (never a raw panic at the
//! boundary) with exit code 1.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use sattuner_app::{
    ExplainOutput, format_explanation, format_not_found, run_apply, run_audit, run_explain,
    run_restore, run_security, run_ultra, runtime_error_envelope, status_exit_code,
};
use sattuner_settings::{Overrides, SattunerConfigV1, parse_settings_toml, resolve_settings};
use sattuner_store::{ExecReloader, FsConfigStore, LoaderTuningWriter};
use sattuner_types::Envelope;

#[derive(Parser, Debug)]
#[command(
    name = "sattuner",
    version,
    about = "Audit and tune a gateway configuration for a satellite WAN uplink"
)]
struct Cli {
    /// Path to sattuner config TOML.
    #[arg(long, default_value = "sattuner.toml")]
    config: Utf8PathBuf,

    /// Override the configuration store root directory.
    #[arg(long)]
    store_root: Option<Utf8PathBuf>,

    /// Override the per-file loader configuration directory.
    #[arg(long)]
    loader_dir: Option<Utf8PathBuf>,

    /// Override the shared loader file used on classic hosts.
    #[arg(long)]
    classic_loader_path: Option<Utf8PathBuf>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Audit the stored configuration against the tuning rules.
    Audit,
    /// Scan the stored configuration for common misconfigurations.
    Security,
    /// Back up, remediate, persist, and reload the configuration.
    Apply,
    /// Write boot-time loader tunables (requires a system restart).
    Ultra,
    /// Restore the most recent configuration backup.
    Restore,
    /// Explain a rule ID with remediation guidance.
    Explain {
        /// The rule ID (e.g., "wan.block_private") to explain.
        identifier: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match dispatch(&cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            let envelope = runtime_error_envelope(&format!("{err:#}"));
            if let Ok(text) = serde_json::to_string_pretty(&envelope) {
                println!("{text}");
            }
            eprintln!("sattuner error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn dispatch(cli: &Cli) -> anyhow::Result<i32> {
    // Load settings if present; a missing file is allowed (defaults apply).
    let cfg_text = std::fs::read_to_string(&cli.config).unwrap_or_default();
    let cfg = if cfg_text.trim().is_empty() {
        SattunerConfigV1::default()
    } else {
        parse_settings_toml(&cfg_text).with_context(|| format!("parse settings: {}", cli.config))?
    };

    let settings = resolve_settings(
        cfg,
        Overrides {
            store_root: cli.store_root.clone(),
            loader_dir: cli.loader_dir.clone(),
            classic_loader_path: cli.classic_loader_path.clone(),
        },
    );

    let store = FsConfigStore::new(settings.store_root.clone());

    match &cli.cmd {
        Commands::Audit => emit(&run_audit(&store)?),
        Commands::Security => emit(&run_security(&store)?),
        Commands::Apply => {
            let reloader = ExecReloader {
                sysctl_cmd: settings.sysctl_cmd.clone(),
                wan_reload_cmd: settings.wan_reload_cmd.clone(),
            };
            emit(&run_apply(&store, &reloader)?)
        }
        Commands::Ultra => {
            let writer = LoaderTuningWriter::new(
                settings.loader_dir.clone(),
                settings.classic_loader_path.clone(),
            );
            emit(&run_ultra(&store, &writer)?)
        }
        Commands::Restore => emit(&run_restore(&store)?),
        Commands::Explain { identifier } => match run_explain(identifier) {
            ExplainOutput::Found(exp) => {
                print!("{}", format_explanation(&exp));
                Ok(0)
            }
            ExplainOutput::NotFound {
                identifier,
                available_rule_ids,
            } => {
                eprint!("{}", format_not_found(&identifier, available_rule_ids));
                Ok(1)
            }
        },
    }
}

fn emit<T: serde::Serialize>(envelope: &Envelope<T>) -> anyhow::Result<i32> {
    let text = serde_json::to_string_pretty(envelope).context("serialize envelope")?;
    println!("{text}");
    Ok(status_exit_code(envelope.status))
}
