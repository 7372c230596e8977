pub mod calendar;
pub mod hours;
pub mod punch;

pub use calendar::days_in;
pub use hours::{DayOutcome, WorkHoursCalculator, compute, evaluate};
pub use punch::{ReducedPunch, parse_punches};
