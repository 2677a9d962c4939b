//! Dispatcher: turns one resolved request into `g213-led` calls.
//!
//! Multi-call sequences never short-circuit: every zone is painted even if an
//! earlier call failed, and the result is the last non-zero [`ExitCode`].
//! Input validation happens before the first call, so a rejected color or
//! alias never leaves the keyboard half-painted.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use rand::Rng;
use rand::seq::SliceRandom;

use crate::color::{self, Rgb};
use crate::error::{LuxError, Result};
use crate::preset::{Category, ColorSpec, PresetCatalog, PresetDefinition};
use crate::tool::{ExitCode, LedTool, ZONE_COUNT, Zone};

/// How often the rotation sleep checks the running flag.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Pool for `--random`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RandomPick {
    /// A random flag preset.
    Flag,
    /// A random solid color preset.
    Color,
    /// Any preset from the catalog.
    Preset,
    /// Surprise: one of the [`SurpriseMode`]s, chosen at random.
    All,
}

impl RandomPick {
    fn label(self) -> &'static str {
        match self {
            RandomPick::Flag => "flag",
            RandomPick::Color => "color",
            RandomPick::Preset | RandomPick::All => "preset",
        }
    }
}

/// The branches surprise mode picks from, uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurpriseMode {
    /// Any catalog preset.
    Preset,
    /// One random color on the whole keyboard.
    Solid,
    /// An independent random color per zone.
    Zones,
    /// A gradient between two random colors.
    Gradient,
}

impl SurpriseMode {
    pub const ALL: [SurpriseMode; 4] = [
        SurpriseMode::Preset,
        SurpriseMode::Solid,
        SurpriseMode::Zones,
        SurpriseMode::Gradient,
    ];
}

/// Rotation timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotateOptions {
    /// Pause after each preset.
    pub interval: Duration,
    /// Stop after this many full passes. `None` rotates until interrupted.
    pub cycles: Option<u32>,
}

impl Default for RotateOptions {
    fn default() -> Self {
        RotateOptions {
            interval: Duration::from_secs(5),
            cycles: None,
        }
    }
}

/// Maps requests onto a [`LedTool`], drawing randomness from an owned RNG.
pub struct Dispatcher<'a, T: LedTool, R: Rng> {
    catalog: &'a PresetCatalog,
    tool: T,
    rng: R,
}

impl<'a, T: LedTool, R: Rng> Dispatcher<'a, T, R> {
    pub fn new(catalog: &'a PresetCatalog, tool: T, rng: R) -> Self {
        Dispatcher { catalog, tool, rng }
    }

    /// Solid: one whole-keyboard call. Regions: one call per zone, 1 to 5.
    pub fn apply_spec(&self, spec: ColorSpec) -> ExitCode {
        match spec {
            ColorSpec::Solid { color } => self.tool.apply_all(color),
            ColorSpec::Regions { colors } => self.apply_zones(colors),
        }
    }

    pub fn apply_definition(&self, def: &PresetDefinition) -> ExitCode {
        self.apply_spec(def.spec)
    }

    /// Look up `alias` and apply it.
    pub fn apply_alias(&self, alias: &str) -> Result<ExitCode> {
        let def = self
            .catalog
            .get(alias)
            .ok_or_else(|| LuxError::UnknownPreset(alias.to_string()))?;
        Ok(self.apply_definition(def))
    }

    /// Validate a raw `RRGGBB` string and paint the whole keyboard with it.
    pub fn apply_hex(&self, hex: &str) -> Result<ExitCode> {
        let color = Rgb::from_hex(hex)?;
        Ok(self.tool.apply_all(color))
    }

    /// Left-to-right gradient between two raw `RRGGBB` strings.
    ///
    /// Both endpoints are validated before anything is painted.
    pub fn apply_gradient(&self, left: &str, right: &str) -> Result<ExitCode> {
        let l = parse_endpoint("left", left)?;
        let r = parse_endpoint("right", right)?;
        log::info!("Gradient: #{l} -> #{r}");
        Ok(self.apply_gradient_colors(l, r))
    }

    pub fn apply_gradient_colors(&self, left: Rgb, right: Rgb) -> ExitCode {
        self.apply_zones(color::interpolate(left, right, ZONE_COUNT))
    }

    /// An independent random color on each zone.
    pub fn random_zones(&mut self) -> ExitCode {
        log::info!("Random zones mode:");
        let colors: Vec<Rgb> = (0..ZONE_COUNT)
            .map(|_| color::random_color(&mut self.rng))
            .collect();
        self.apply_zones(colors)
    }

    /// Apply a random preset from the requested pool, or run surprise mode.
    pub fn random_pick(&mut self, pick: RandomPick) -> Result<ExitCode> {
        let pool: Vec<&PresetDefinition> = match pick {
            RandomPick::Flag => self.catalog.by_category(Category::Flag),
            RandomPick::Color => self.catalog.by_category(Category::Color),
            RandomPick::Preset => self.catalog.list_all().iter().collect(),
            RandomPick::All => return self.surprise(),
        };
        let def = *pool
            .choose(&mut self.rng)
            .ok_or_else(|| LuxError::EmptyCategory(pick.label().to_string()))?;
        log::info!("Random {}: {}", pick.label(), def.name());
        Ok(self.apply_definition(def))
    }

    /// Pick one [`SurpriseMode`] uniformly and run it.
    pub fn surprise(&mut self) -> Result<ExitCode> {
        let mode = SurpriseMode::ALL[self.rng.gen_range(0..SurpriseMode::ALL.len())];
        self.run_surprise(mode)
    }

    /// Run one surprise branch.
    pub fn run_surprise(&mut self, mode: SurpriseMode) -> Result<ExitCode> {
        match mode {
            SurpriseMode::Preset => self.random_pick(RandomPick::Preset),
            SurpriseMode::Solid => {
                let c = color::random_color(&mut self.rng);
                log::info!("Random solid color: #{c}");
                Ok(self.tool.apply_all(c))
            }
            SurpriseMode::Zones => Ok(self.random_zones()),
            SurpriseMode::Gradient => {
                log::info!("Random gradient:");
                let left = color::random_color(&mut self.rng);
                let right = color::random_color(&mut self.rng);
                Ok(self.apply_gradient_colors(left, right))
            }
        }
    }

    /// Apply each preset of `category` in declaration order, pausing
    /// `options.interval` after each, until `running` is cleared.
    ///
    /// An interrupted rotation reports success. A rotation bounded by
    /// `options.cycles` reports the last non-zero code of its calls.
    pub fn rotate(
        &self,
        category: Category,
        options: &RotateOptions,
        running: &AtomicBool,
    ) -> Result<ExitCode> {
        let presets = self.catalog.by_category(category);
        if presets.is_empty() {
            return Err(LuxError::EmptyCategory(category.to_string()));
        }

        log::info!(
            "Rotating {} {category} presets (interval: {}s)",
            presets.len(),
            options.interval.as_secs_f64()
        );
        log::info!("Press Ctrl+C to stop");

        let mut result = ExitCode::SUCCESS;
        let mut cycle = 0u32;
        'rotation: loop {
            if options.cycles.is_some_and(|n| cycle >= n) {
                return Ok(result);
            }
            let final_pass = options.cycles == Some(cycle + 1);
            for (i, def) in presets.iter().enumerate() {
                if !running.load(Ordering::SeqCst) {
                    break 'rotation;
                }
                log::info!("  -> {}", def.name());
                result = result.merge(self.apply_definition(def));

                let last = final_pass && i + 1 == presets.len();
                if !last && !sleep_while_running(options.interval, running) {
                    break 'rotation;
                }
            }
            cycle += 1;
        }

        log::info!("Stopped");
        Ok(ExitCode::SUCCESS)
    }

    fn apply_zones(&self, colors: impl IntoIterator<Item = Rgb>) -> ExitCode {
        ExitCode::aggregate(Zone::all().zip(colors).map(|(zone, c)| {
            log::info!("  Zone {zone}: #{c}");
            self.tool.apply_zone(zone, c)
        }))
    }
}

fn parse_endpoint(side: &str, hex: &str) -> Result<Rgb> {
    Rgb::from_hex(hex).map_err(|_| LuxError::Color(format!("Invalid {side} color '{hex}'")))
}

/// Sleep for `interval`, waking early if `running` is cleared.
/// Returns `false` when interrupted.
///
/// An interval too long to represent as an `Instant` never elapses; only
/// clearing `running` ends it.
fn sleep_while_running(interval: Duration, running: &AtomicBool) -> bool {
    let deadline = Instant::now().checked_add(interval);
    loop {
        if !running.load(Ordering::SeqCst) {
            return false;
        }
        let step = match deadline {
            Some(deadline) => {
                let now = Instant::now();
                if now >= deadline {
                    return true;
                }
                (deadline - now).min(POLL_INTERVAL)
            }
            None => POLL_INTERVAL,
        };
        std::thread::sleep(step);
    }
}
