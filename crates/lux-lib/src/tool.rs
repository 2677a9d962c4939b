//! `g213-led` invocation: the only place lux touches the keyboard.
//!
//! Every call blocks until the external process exits. Launch failures and
//! non-zero exits are not errors here: they come back as [`ExitCode`] values
//! and the dispatcher merges them.

use std::ffi::OsString;
use std::fmt;
use std::io;
use std::process::{Command, ExitStatus};

use crate::color::Rgb;
use crate::error::{LuxError, Result};

/// Number of independently addressable zones on a G213.
pub const ZONE_COUNT: usize = 5;

/// Executable used when neither `--tool` nor `LUX_TOOL` is set.
pub const DEFAULT_TOOL: &str = "g213-led";

/// Exit status of one tool call, or the merge of several.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    /// Reported when the tool cannot be located or launched.
    pub const TOOL_NOT_FOUND: ExitCode = ExitCode(1);

    pub fn is_success(self) -> bool {
        self.0 == 0
    }

    /// Aggregation step: a non-zero `next` replaces the running result.
    pub fn merge(self, next: ExitCode) -> ExitCode {
        if next.is_success() { self } else { next }
    }

    /// Last non-zero code of the sequence, or success.
    ///
    /// Consumes the whole iterator, so lazily mapped calls all run.
    pub fn aggregate(codes: impl IntoIterator<Item = ExitCode>) -> ExitCode {
        codes.into_iter().fold(ExitCode::SUCCESS, ExitCode::merge)
    }

    pub fn code(self) -> i32 {
        self.0
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return ExitCode(code);
        }
        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return ExitCode(128 + signal);
            }
        }
        ExitCode(1)
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Keyboard zone, 1 (left) through 5 (right).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Zone(u8);

impl Zone {
    pub fn new(index: u8) -> Result<Self> {
        if (1..=ZONE_COUNT as u8).contains(&index) {
            Ok(Zone(index))
        } else {
            Err(LuxError::Zone(index))
        }
    }

    /// Zones 1..=5, left to right.
    pub fn all() -> impl Iterator<Item = Zone> {
        (1..=ZONE_COUNT as u8).map(Zone)
    }

    pub fn index(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One invocation of the lighting tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolCommand {
    /// Whole keyboard: `-a RRGGBB`.
    All(Rgb),
    /// One zone: `-r N RRGGBB`.
    Zone(Zone, Rgb),
}

impl ToolCommand {
    pub fn args(&self) -> Vec<String> {
        match self {
            ToolCommand::All(color) => vec!["-a".into(), color.to_string()],
            ToolCommand::Zone(zone, color) => {
                vec!["-r".into(), zone.to_string(), color.to_string()]
            }
        }
    }
}

/// Something that can paint the keyboard.
///
/// [`G213Led`] runs the real tool; tests use [`mock::MockTool`].
pub trait LedTool {
    fn run(&self, command: ToolCommand) -> ExitCode;

    fn apply_all(&self, color: Rgb) -> ExitCode {
        self.run(ToolCommand::All(color))
    }

    fn apply_zone(&self, zone: Zone, color: Rgb) -> ExitCode {
        self.run(ToolCommand::Zone(zone, color))
    }
}

impl<T: LedTool + ?Sized> LedTool for &T {
    fn run(&self, command: ToolCommand) -> ExitCode {
        (**self).run(command)
    }
}

/// Runs `g213-led` (or a replacement given by path) as a subprocess.
#[derive(Debug, Clone)]
pub struct G213Led {
    program: OsString,
}

impl Default for G213Led {
    fn default() -> Self {
        Self::new(DEFAULT_TOOL)
    }
}

impl G213Led {
    pub fn new(program: impl Into<OsString>) -> Self {
        G213Led {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &OsString {
        &self.program
    }

    fn spawn_and_wait(&self, args: &[String]) -> io::Result<ExitStatus> {
        Command::new(&self.program).args(args).status()
    }
}

impl LedTool for G213Led {
    fn run(&self, command: ToolCommand) -> ExitCode {
        let args = command.args();
        let program = self.program.to_string_lossy();
        log::debug!("running: {program} {}", args.join(" "));

        match self.spawn_and_wait(&args) {
            Ok(status) => {
                let code = ExitCode::from(status);
                if !code.is_success() {
                    log::warn!("{program} exited with {code}: {}", args.join(" "));
                }
                code
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::error!("{program} not found. Please install it first.");
                ExitCode::TOOL_NOT_FOUND
            }
            Err(e) => {
                log::error!("{program} could not be launched: {e}");
                ExitCode::TOOL_NOT_FOUND
            }
        }
    }
}

pub mod mock {
    //! Recording tool for tests.

    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Records every command and answers with scripted exit codes
    /// (success once the script runs out).
    #[derive(Debug, Default)]
    pub struct MockTool {
        /// Commands in the order they were run.
        pub calls: RefCell<Vec<ToolCommand>>,
        /// Exit codes returned by successive calls.
        pub responses: RefCell<VecDeque<ExitCode>>,
    }

    impl MockTool {
        pub fn new() -> Self {
            Self::default()
        }

        /// Mock whose successive calls return `codes`.
        pub fn with_responses(codes: impl IntoIterator<Item = i32>) -> Self {
            let tool = Self::new();
            tool.responses
                .borrow_mut()
                .extend(codes.into_iter().map(ExitCode));
            tool
        }

        pub fn call_count(&self) -> usize {
            self.calls.borrow().len()
        }

        /// Recorded calls rendered as argument lists.
        pub fn call_args(&self) -> Vec<Vec<String>> {
            self.calls.borrow().iter().map(ToolCommand::args).collect()
        }

        /// Zone colors of recorded zone calls, as hex strings.
        pub fn zone_colors(&self) -> Vec<String> {
            self.calls
                .borrow()
                .iter()
                .filter_map(|c| match c {
                    ToolCommand::Zone(_, color) => Some(color.to_string()),
                    ToolCommand::All(_) => None,
                })
                .collect()
        }
    }

    impl LedTool for MockTool {
        fn run(&self, command: ToolCommand) -> ExitCode {
            self.calls.borrow_mut().push(command);
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or(ExitCode::SUCCESS)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MockTool;
    use super::*;

    // ── ExitCode ──

    #[test]
    fn aggregate_keeps_last_nonzero() {
        let codes = [0, 0, 7, 0, 3].map(ExitCode);
        assert_eq!(ExitCode::aggregate(codes), ExitCode(3));
    }

    #[test]
    fn aggregate_all_success() {
        assert_eq!(ExitCode::aggregate([ExitCode(0); 5]), ExitCode::SUCCESS);
        assert_eq!(ExitCode::aggregate(Vec::new()), ExitCode::SUCCESS);
    }

    #[test]
    fn aggregate_trailing_success_does_not_reset() {
        let codes = [2, 0, 0].map(ExitCode);
        assert_eq!(ExitCode::aggregate(codes), ExitCode(2));
    }

    #[test]
    fn aggregate_runs_every_lazy_call() {
        let tool = MockTool::with_responses([0, 0, 7, 0, 3]);
        let result = ExitCode::aggregate(Zone::all().map(|z| tool.apply_zone(z, Rgb::WHITE)));
        assert_eq!(result, ExitCode(3));
        assert_eq!(tool.call_count(), 5);
    }

    // ── Zone ──

    #[test]
    fn zone_range() {
        assert!(Zone::new(0).is_err());
        assert!(Zone::new(6).is_err());
        for i in 1..=5 {
            assert_eq!(Zone::new(i).unwrap().index(), i);
        }
    }

    #[test]
    fn zone_all_is_left_to_right() {
        let zones: Vec<u8> = Zone::all().map(Zone::index).collect();
        assert_eq!(zones, [1, 2, 3, 4, 5]);
    }

    // ── ToolCommand ──

    #[test]
    fn args_for_whole_keyboard() {
        let cmd = ToolCommand::All(Rgb::from_u32(0x55ff12));
        assert_eq!(cmd.args(), ["-a", "55ff12"]);
    }

    #[test]
    fn args_for_zone() {
        let cmd = ToolCommand::Zone(Zone::new(3).unwrap(), Rgb::from_u32(0x002868));
        assert_eq!(cmd.args(), ["-r", "3", "002868"]);
    }

    // ── G213Led ──

    #[test]
    fn missing_tool_reports_sentinel() {
        let tool = G213Led::new("/nonexistent/lux-test/g213-led");
        assert_eq!(tool.apply_all(Rgb::WHITE), ExitCode::TOOL_NOT_FOUND);
    }

    #[cfg(unix)]
    #[test]
    fn exit_codes_pass_through() {
        assert_eq!(G213Led::new("true").apply_all(Rgb::WHITE), ExitCode::SUCCESS);
        assert_eq!(G213Led::new("false").apply_all(Rgb::WHITE), ExitCode(1));
    }

    #[test]
    fn default_program_is_g213_led() {
        assert_eq!(G213Led::default().program(), DEFAULT_TOOL);
    }

    // ── MockTool ──

    #[test]
    fn mock_records_and_defaults_to_success() {
        let tool = MockTool::with_responses([4]);
        assert_eq!(tool.apply_all(Rgb::BLACK), ExitCode(4));
        assert_eq!(tool.apply_all(Rgb::BLACK), ExitCode::SUCCESS);
        assert_eq!(tool.call_args(), [["-a", "000000"], ["-a", "000000"]]);
    }

    #[test]
    fn tool_by_reference() {
        let tool = MockTool::new();
        let by_ref = &tool;
        by_ref.apply_zone(Zone::new(2).unwrap(), Rgb::WHITE);
        assert_eq!(tool.zone_colors(), ["ffffff"]);
    }
}
