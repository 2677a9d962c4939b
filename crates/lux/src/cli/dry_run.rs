//! `--dry-run`: print the `g213-led` command lines instead of running them.

use super::{ExitCode, LedTool};
use lux_lib::tool::ToolCommand;

pub(super) struct DryRun {
    program: String,
}

impl DryRun {
    pub(super) fn new(program: String) -> Self {
        DryRun { program }
    }

    fn render(&self, command: ToolCommand) -> String {
        format!("{} {}", self.program, command.args().join(" "))
    }
}

impl LedTool for DryRun {
    fn run(&self, command: ToolCommand) -> ExitCode {
        println!("{}", self.render(command));
        ExitCode::SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lux_lib::Rgb;
    use lux_lib::tool::Zone;

    #[test]
    fn renders_whole_keyboard_call() {
        let dry = DryRun::new("g213-led".into());
        assert_eq!(
            dry.render(ToolCommand::All(Rgb::from_u32(0x4169e1))),
            "g213-led -a 4169e1"
        );
    }

    #[test]
    fn renders_zone_call_with_custom_program() {
        let dry = DryRun::new("/opt/bin/g213-led".into());
        let cmd = ToolCommand::Zone(Zone::new(5).unwrap(), Rgb::WHITE);
        assert_eq!(dry.render(cmd), "/opt/bin/g213-led -r 5 ffffff");
    }

    #[test]
    fn always_succeeds() {
        let dry = DryRun::new("g213-led".into());
        assert_eq!(dry.apply_all(Rgb::BLACK), ExitCode::SUCCESS);
    }
}
