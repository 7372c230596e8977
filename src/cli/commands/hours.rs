use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::evaluate;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Hours {
        check_in,
        check_out,
        notation,
    } = cmd
    {
        let notation = notation.unwrap_or(cfg.decimal_notation);
        let outcome = evaluate(Some(check_in.as_str()), Some(check_out.as_str()), notation);
        println!("{}", outcome.label());
    }
    Ok(())
}
