//! List multipliers the user is currently eligible for

use anyhow::Result;
use chrono::{DateTime, Datelike, Local, TimeZone, Weekday};
use clap::Parser;
use console::style;
use ranked_core::UserTriggerState;

use super::Context;
use crate::output::{OutputFormat, print_json};

#[derive(Parser)]
pub struct Multipliers {
    /// Consecutive wins
    #[arg(long, default_value_t = 0)]
    pub(crate) win_streak: u32,

    /// Override weekend detection (default: today's local date)
    #[arg(long, value_name = "BOOL")]
    pub(crate) weekend: Option<bool>,
}

impl Multipliers {
    pub fn execute(self, ctx: &Context) -> Result<()> {
        let state = UserTriggerState::new(self.win_streak, 0, false);
        let weekend = self.weekend.unwrap_or_else(|| is_weekend(&Local::now()));
        let active = ctx.engine().get_active_multipliers(&state, weekend);

        match ctx.output {
            OutputFormat::Json => print_json(&active),
            OutputFormat::Text => {
                if active.is_empty() {
                    println!("No active multipliers");
                }
                for multiplier in &active {
                    println!(
                        "{} {} ({})",
                        style(format!("{}x", multiplier.value)).bold().yellow(),
                        multiplier.name,
                        style(&multiplier.trigger_id).dim()
                    );
                }
                Ok(())
            }
        }
    }
}

/// Saturday or Sunday in the timestamp's own time zone.
fn is_weekend<Tz: TimeZone>(at: &DateTime<Tz>) -> bool {
    matches!(at.weekday(), Weekday::Sat | Weekday::Sun)
}
