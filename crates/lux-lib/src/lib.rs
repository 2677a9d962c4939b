//! lux: lighting presets, gradients and rotations for Logitech G213 keyboards.
//!
//! The keyboard itself is driven by the external `g213-led` tool; this crate
//! owns the preset catalog, the color math and the mapping from a request to
//! a sequence of tool calls.

pub mod color;
pub mod dispatch;
pub mod error;
pub mod preset;
pub mod tool;

pub use color::Rgb;
pub use dispatch::{Dispatcher, RandomPick, RotateOptions};
pub use error::LuxError;
pub use preset::{Category, ColorSpec, PresetCatalog, PresetDefinition};
pub use tool::{ExitCode, G213Led, LedTool};
