//! Text breakdown of an award for UI display.

use super::XpCalculation;
use crate::config::Xp;

impl XpCalculation {
    /// Lines such as `Base: +100 XP`, `Multiplier: 1.5x`, `Bonus: +200 XP`,
    /// `Total: +350 XP`. Multiplier and bonus lines only appear when they
    /// change the result.
    pub fn breakdown_lines(&self) -> Vec<String> {
        let mut lines = vec![format!("Base: +{} XP", self.base_xp)];
        if self.multiplier != 1.0 {
            lines.push(format!("Multiplier: {}x", self.multiplier));
        }
        if self.bonus_xp > 0 {
            lines.push(format!("Bonus: +{} XP", self.bonus_xp));
        }
        lines.push(format!("Total: +{} XP", self.total_xp));
        lines
    }
}

/// Compact XP: `999`, `1.5K`, `2.3M`.
pub fn format_xp(xp: Xp) -> String {
    if xp >= 1_000_000 {
        format!("{:.1}M", xp as f64 / 1_000_000.0)
    } else if xp >= 1_000 {
        format!("{:.1}K", xp as f64 / 1_000.0)
    } else {
        xp.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::award::{MatchOutcome, calculate_match_xp};
    use crate::state::UserTriggerState;

    #[test]
    fn full_breakdown() {
        let calc = calculate_match_xp(
            &UserTriggerState::new(5, 0, true),
            MatchOutcome::Win,
            &[] as &[&str],
        );
        assert_eq!(
            calc.breakdown_lines(),
            [
                "Base: +100 XP",
                "Multiplier: 1.5x",
                "Bonus: +200 XP",
                "Total: +350 XP"
            ]
        );
    }

    #[test]
    fn minimal_breakdown() {
        let calc = calculate_match_xp(&UserTriggerState::default(), MatchOutcome::Loss, &[] as &[&str]);
        assert_eq!(calc.breakdown_lines(), ["Base: +25 XP", "Total: +25 XP"]);
    }

    #[test]
    fn compact_numbers() {
        assert_eq!(format_xp(999), "999");
        assert_eq!(format_xp(1_500), "1.5K");
        assert_eq!(format_xp(127_500), "127.5K");
        assert_eq!(format_xp(2_340_000), "2.3M");
    }
}
