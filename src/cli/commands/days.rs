use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::models::Period;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Days { year, month } = cmd {
        let period = Period::new(*year, *month)?;
        println!("{}", period.days());
    }
    Ok(())
}
