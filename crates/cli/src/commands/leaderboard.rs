//! Order players by XP and show their ranks

use anyhow::Result;
use clap::Parser;
use console::style;
use ranked_core::{LeaderboardEntry, format_xp};

use super::Context;
use crate::output::{OutputFormat, print_json};

#[derive(Parser)]
pub struct Leaderboard {
    /// Players as `user=xp` pairs
    #[arg(value_name = "USER=XP", value_parser = parse_entry, required = true)]
    pub(crate) entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub fn execute(self, ctx: &Context) -> Result<()> {
        let standings = ctx.content.config.standings(&self.entries);

        if ctx.output == OutputFormat::Json {
            return print_json(&standings);
        }

        for standing in &standings {
            println!(
                "{:>3}. {:<16} {:<14} {:>8} XP",
                standing.position,
                style(&standing.entry.user_id).bold(),
                standing.rank.display_name(),
                format_xp(standing.entry.xp)
            );
        }
        Ok(())
    }
}

fn parse_entry(raw: &str) -> Result<LeaderboardEntry, String> {
    let (user, xp) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected USER=XP, got '{raw}'"))?;
    if user.is_empty() {
        return Err(format!("missing user id in '{raw}'"));
    }
    let xp = xp
        .parse()
        .map_err(|e| format!("invalid XP in '{raw}': {e}"))?;
    Ok(LeaderboardEntry::new(user, xp))
}
