//! CLI actions: preset listing, color application, random modes, rotation.

mod dry_run;
mod list;

use std::path::PathBuf;
use std::time::Duration;

use clap::ValueEnum;
use serde::Serialize;

pub(super) use crate::RUNNING;
pub(super) use lux_lib::dispatch::{Dispatcher, RandomPick, RotateOptions};
pub(super) use lux_lib::error::Result;
pub(super) use lux_lib::preset::{Category, PresetCatalog, PresetDefinition};
pub(super) use lux_lib::tool::{ExitCode, G213Led, LedTool};

use dry_run::DryRun;

/// Category names accepted by `--rotate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RotateArg {
    #[value(alias = "flag")]
    Flags,
    #[value(alias = "color")]
    Colors,
    Special,
}

impl From<RotateArg> for Category {
    fn from(arg: RotateArg) -> Self {
        match arg {
            RotateArg::Flags => Category::Flag,
            RotateArg::Colors => Category::Color,
            RotateArg::Special => Category::Special,
        }
    }
}

/// Pools accepted by `--random`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RandomArg {
    Flag,
    Color,
    Preset,
    All,
}

impl From<RandomArg> for RandomPick {
    fn from(arg: RandomArg) -> Self {
        match arg {
            RandomArg::Flag => RandomPick::Flag,
            RandomArg::Color => RandomPick::Color,
            RandomArg::Preset => RandomPick::Preset,
            RandomArg::All => RandomPick::All,
        }
    }
}

/// Parse `--interval`: non-negative, finite seconds.
pub fn parse_interval(s: &str) -> std::result::Result<Duration, String> {
    let secs: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a number of seconds"))?;
    if !secs.is_finite() || secs < 0.0 {
        return Err(format!("interval must be a non-negative number, got {s}"));
    }
    Duration::try_from_secs_f64(secs).map_err(|e| format!("interval {s} is out of range: {e}"))
}

/// Strip leading `#`s, so `#ff0000` and `ff0000` are both accepted.
pub fn strip_hash(s: &str) -> &str {
    s.trim_start_matches('#')
}

/// One resolved request.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    List,
    Preset(String),
    Hex(String),
    Gradient { left: String, right: String },
    Random(RandomPick),
    Rotate {
        category: Category,
        options: RotateOptions,
    },
    /// Nothing to do; print usage.
    Help,
}

/// Runtime settings that are not part of the action.
#[derive(Debug, Clone)]
pub struct Settings {
    pub tool: PathBuf,
    pub dry_run: bool,
    pub json: bool,
}

// ── JSON output structs ──

#[derive(Serialize)]
pub(super) struct PresetsOutput<'a> {
    pub count: usize,
    pub presets: &'a [PresetDefinition],
}

/// Warn if `--json` was passed to an action that doesn't support it.
fn warn_json_unsupported(action: &Action) {
    log::warn!("--json only applies to --list (ignored for {action:?})");
}

/// Run `action` and return the aggregate exit code of the tool calls.
pub fn run(action: Action, settings: &Settings) -> Result<ExitCode> {
    let catalog = PresetCatalog::builtin();

    if action == Action::List {
        list::cmd_list(&catalog, settings.json);
        return Ok(ExitCode::SUCCESS);
    }
    if settings.json {
        warn_json_unsupported(&action);
    }

    if settings.dry_run {
        let tool = DryRun::new(settings.tool.display().to_string());
        dispatch(&catalog, tool, action)
    } else {
        dispatch(&catalog, G213Led::new(&settings.tool), action)
    }
}

fn dispatch(catalog: &PresetCatalog, tool: impl LedTool, action: Action) -> Result<ExitCode> {
    let mut dispatcher = Dispatcher::new(catalog, tool, rand::thread_rng());
    match action {
        Action::Preset(name) => dispatcher.apply_alias(&name),
        Action::Hex(hex) => dispatcher.apply_hex(strip_hash(&hex)),
        Action::Gradient { left, right } => {
            dispatcher.apply_gradient(strip_hash(&left), strip_hash(&right))
        }
        Action::Random(pick) => dispatcher.random_pick(pick),
        Action::Rotate { category, options } => dispatcher.rotate(category, &options, &RUNNING),
        Action::List | Action::Help => Ok(ExitCode::SUCCESS),
    }
}
