use std::path::PathBuf;

use anyhow::{Context, anyhow};
use clap::Parser;
use ttsim_core::Harness;
use ttsim_core::core::Machine;
use ttsim_models::registry;

use crate::config::{Config, Polarity};

mod config;
mod emulator;
mod input;
mod screenshot;
mod video;

/// Run a cycle-evaluated hardware model behind a VGA decoder and gamepad PMOD.
#[derive(Debug, Parser)]
#[command(name = "ttsim", version)]
struct Cli {
    /// Model to run (see --list).
    #[arg(default_value = "padtest")]
    model: String,

    /// Print the registered models and exit.
    #[arg(long)]
    list: bool,

    /// Integer window scale factor.
    #[arg(long)]
    scale: Option<u32>,

    /// Sync level treated as active at startup (P toggles at runtime).
    #[arg(long, value_enum)]
    polarity: Option<Polarity>,

    /// Config file to use instead of the default location.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Clock cycles simulated per displayed frame.
    #[arg(long)]
    cycles_per_frame: Option<u64>,

    /// Directory for F12 screenshots.
    #[arg(long)]
    screenshot_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    if cli.list {
        for entry in registry::all() {
            println!("{:<16} {}", entry.name, entry.description);
        }
        return Ok(());
    }

    let entry = registry::find(&cli.model).ok_or_else(|| {
        let names: Vec<_> = registry::all().iter().map(|e| e.name).collect();
        anyhow!(
            "unknown model: {} (available: {})",
            cli.model,
            names.join(", ")
        )
    })?;

    let config = Config::load(cli.config.as_deref()).context("loading configuration")?;
    let scale = cli.scale.unwrap_or(config.scale).max(1);
    let polarity = cli.polarity.unwrap_or(config.sync_polarity);
    let cycles_per_frame = cli.cycles_per_frame.unwrap_or(config.cycles_per_frame);
    if cycles_per_frame == 0 {
        return Err(anyhow!("cycles per frame must be positive"));
    }
    let screenshot_dir = cli
        .screenshot_dir
        .or(config.screenshot_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));

    log::info!("model {}: {}", entry.name, entry.description);
    let mut machine = Harness::new((entry.create)())
        .with_cycles_per_frame(cycles_per_frame)
        .with_polarity(polarity.into());

    config.check_key_names(machine.input_map())?;
    let mut key_map = input::default_key_map(machine.input_map());
    key_map.apply_overrides(&config.keys, machine.input_map());

    let opts = emulator::RunOptions {
        model_name: entry.name.to_string(),
        scale,
        screenshot_dir,
    };
    emulator::run(&mut machine, key_map, &opts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["ttsim"]).unwrap();
        assert_eq!(cli.model, "padtest");
        assert!(!cli.list);
        assert_eq!(cli.scale, None);
        assert_eq!(cli.polarity, None);
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::try_parse_from([
            "ttsim",
            "colorbars-neg",
            "--scale",
            "2",
            "--polarity",
            "low",
            "--cycles-per-frame",
            "640000",
        ])
        .unwrap();
        assert_eq!(cli.model, "colorbars-neg");
        assert_eq!(cli.scale, Some(2));
        assert_eq!(cli.polarity, Some(Polarity::Low));
        assert_eq!(cli.cycles_per_frame, Some(640_000));
    }

    #[test]
    fn test_cli_rejects_bad_polarity() {
        assert!(Cli::try_parse_from(["ttsim", "--polarity", "both"]).is_err());
    }
}
