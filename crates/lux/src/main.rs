//! lux CLI: lighting presets, gradients and rotations for Logitech G213 keyboards.
//!
//! All painting goes through the external `g213-led` tool.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use clap::{ArgAction, ArgGroup, CommandFactory, Parser};
use lux_lib::LuxError;
use lux_lib::dispatch::RotateOptions;
use lux_lib::tool::DEFAULT_TOOL;

mod cli;

/// Shared shutdown flag: cleared by the Ctrl+C handler during rotation.
pub static RUNNING: AtomicBool = AtomicBool::new(true);

#[derive(Parser, Debug)]
#[command(name = "lux", version, about = "G213 keyboard lighting preset tool")]
#[command(group(
    ArgGroup::new("action").args(["preset", "list", "rgbhex", "rotate", "random", "gradient"])
))]
struct Args {
    /// Name of preset to apply
    preset: Option<String>,

    /// List all available presets
    #[arg(short, long)]
    list: bool,

    /// Apply a raw RGB hex color (e.g. ff0000)
    #[arg(long, visible_alias = "rh", value_name = "RRGGBB")]
    rgbhex: Option<String>,

    /// Rotate through presets of given category
    #[arg(short, long, value_enum, value_name = "CATEGORY")]
    rotate: Option<cli::RotateArg>,

    /// Interval between rotations in seconds
    #[arg(short, long, default_value = "5", value_name = "SECONDS", value_parser = cli::parse_interval)]
    interval: Duration,

    /// Stop rotating after N full passes (default: until Ctrl+C)
    #[arg(long, value_name = "N", requires = "rotate")]
    cycles: Option<u32>,

    /// Random mode: pick random flag/color/preset, or 'all' for surprise (default)
    #[arg(
        short = 'R',
        long,
        value_enum,
        num_args = 0..=1,
        default_missing_value = "all",
        value_name = "CATEGORY"
    )]
    random: Option<cli::RandomArg>,

    /// Apply gradient from LEFT to RIGHT hex color across zones
    #[arg(short, long, num_args = 2, value_names = ["LEFT", "RIGHT"])]
    gradient: Option<Vec<String>>,

    /// Lighting tool to run
    #[arg(long, env = "LUX_TOOL", default_value = DEFAULT_TOOL, value_name = "PATH")]
    tool: PathBuf,

    /// Print the tool commands instead of running them
    #[arg(long)]
    dry_run: bool,

    /// Output as JSON (for --list)
    #[arg(long)]
    json: bool,

    /// Verbose output (-v progress, -vv tool invocations)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn action(&self) -> cli::Action {
        if self.list {
            return cli::Action::List;
        }
        if let Some(hex) = &self.rgbhex {
            return cli::Action::Hex(hex.clone());
        }
        if let Some(category) = self.rotate {
            return cli::Action::Rotate {
                category: category.into(),
                options: RotateOptions {
                    interval: self.interval,
                    cycles: self.cycles,
                },
            };
        }
        if let Some(pick) = self.random {
            return cli::Action::Random(pick.into());
        }
        if let Some([left, right]) = self.gradient.as_deref() {
            return cli::Action::Gradient {
                left: left.clone(),
                right: right.clone(),
            };
        }
        match &self.preset {
            Some(name) => cli::Action::Preset(name.clone()),
            None => cli::Action::Help,
        }
    }

    fn settings(&self) -> cli::Settings {
        cli::Settings {
            tool: self.tool.clone(),
            dry_run: self.dry_run,
            json: self.json,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let action = args.action();
    if action == cli::Action::Help {
        let _ = Args::command().print_help();
        std::process::exit(1);
    }

    // Only rotation is long-running; elsewhere Ctrl+C keeps its default behavior.
    if matches!(action, cli::Action::Rotate { .. }) {
        ctrlc::set_handler(move || {
            RUNNING.store(false, Ordering::SeqCst);
        })
        .ok();
    }

    match cli::run(action, &args.settings()) {
        Ok(code) => std::process::exit(code.code()),
        Err(e) => {
            eprintln!("Error: {e}");
            if matches!(e, LuxError::UnknownPreset(_)) {
                eprintln!("Use --list to see available presets.");
            }
            std::process::exit(1);
        }
    }
}
