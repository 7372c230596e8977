use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::{BuildOptions, ReportLogic};
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Build {
        input,
        dir,
        output,
        year,
        month,
        force,
        verbose,
    } = cmd
    {
        let opts = BuildOptions {
            input: input.clone(),
            dir: dir.clone(),
            output: output.clone(),
            year: *year,
            month: *month,
            force: *force,
            verbose: *verbose,
        };

        let path = ReportLogic::build(&opts, cfg)?;
        success(format!("Attendance summary ready: {}", path.display()));
    }
    Ok(())
}
