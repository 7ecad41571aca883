//! Show the login streak bonus for a streak length

use anyhow::Result;
use clap::Parser;
use console::style;
use serde_json::json;

use super::Context;
use crate::output::{OutputFormat, print_json};

#[derive(Parser)]
pub struct Login {
    /// Consecutive login days, including today
    #[arg(value_name = "DAYS")]
    pub(crate) days: u32,
}

impl Login {
    pub fn execute(self, ctx: &Context) -> Result<()> {
        let bonus = ctx.engine().calculate_login_streak_bonus(self.days);

        match ctx.output {
            OutputFormat::Json => print_json(&json!({
                "consecutive_logins": self.days,
                "bonus_xp": bonus,
            })),
            OutputFormat::Text => {
                if bonus == 0 {
                    println!("{}-day streak: no bonus yet", self.days);
                } else {
                    println!(
                        "{}-day streak: {}",
                        self.days,
                        style(format!("+{bonus} XP")).bold().green()
                    );
                }
                Ok(())
            }
        }
    }
}
