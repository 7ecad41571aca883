//! Achievement badges, grouped into metallic tiers.

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BadgeTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl BadgeTier {
    /// Frame color for the tier.
    pub const fn color(self) -> &'static str {
        match self {
            Self::Bronze => "#CD7F32",
            Self::Silver => "#C0C0C0",
            Self::Gold => "#FFD700",
            Self::Platinum => "#E5E4E2",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BadgeDefinition {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub tier: BadgeTier,
    /// Human-readable unlock rule.
    pub criteria: String,
}

impl BadgeDefinition {
    pub fn new(
        id: &str,
        name: &str,
        description: &str,
        icon: &str,
        tier: BadgeTier,
        criteria: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            tier,
            criteria: criteria.to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BadgeCatalog {
    badges: Vec<BadgeDefinition>,
}

impl BadgeCatalog {
    pub fn new(badges: Vec<BadgeDefinition>) -> Self {
        Self { badges }
    }

    pub fn builtin() -> Self {
        Self::new(builtin_badges())
    }

    pub fn get(&self, id: &str) -> Option<&BadgeDefinition> {
        self.badges.iter().find(|b| b.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BadgeDefinition> {
        self.badges.iter()
    }

    pub fn len(&self) -> usize {
        self.badges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.badges.is_empty()
    }

    pub fn by_tier(&self, tier: BadgeTier) -> impl Iterator<Item = &BadgeDefinition> {
        self.iter().filter(move |b| b.tier == tier)
    }
}

pub fn builtin_badges() -> Vec<BadgeDefinition> {
    use BadgeTier::*;

    vec![
        BadgeDefinition::new("first_win", "First Victory", "Win your first match", "trophy", Bronze, "Win 1 match"),
        BadgeDefinition::new("newcomer", "Newcomer", "Complete your first 5 games", "star", Bronze, "Play 5 matches"),
        BadgeDefinition::new(
            "daily_player",
            "Daily Player",
            "Login and play for 7 consecutive days",
            "calendar",
            Bronze,
            "7 day login streak",
        ),
        BadgeDefinition::new(
            "first_blood",
            "Quick Draw",
            "Win a match in under 2 minutes",
            "zap",
            Bronze,
            "Win a quick match",
        ),
        BadgeDefinition::new("streak_3", "Hot Streak", "Win 3 matches in a row", "flame", Silver, "3 win streak"),
        BadgeDefinition::new("veteran", "Veteran", "Complete 50 matches", "award", Silver, "Play 50 matches"),
        BadgeDefinition::new(
            "consistent",
            "Consistent",
            "Maintain 50% win rate over 20 games",
            "target",
            Silver,
            "50%+ win rate (20+ games)",
        ),
        BadgeDefinition::new("marathon", "Marathon", "Play for 10 hours total", "clock", Silver, "10 hours play time"),
        BadgeDefinition::new(
            "streak_5",
            "Unstoppable",
            "Win 5 matches in a row",
            "trending-up",
            Gold,
            "5 win streak",
        ),
        BadgeDefinition::new(
            "perfectionist",
            "Perfectionist",
            "Complete a match with a perfect score",
            "check-circle",
            Gold,
            "Perfect game score",
        ),
        BadgeDefinition::new(
            "dedicated",
            "Dedicated",
            "Login for 30 consecutive days",
            "heart",
            Gold,
            "30 day login streak",
        ),
        BadgeDefinition::new("centurion", "Centurion", "Win 100 matches", "shield", Gold, "100 wins"),
        BadgeDefinition::new(
            "legendary_streak",
            "Legendary Streak",
            "Win 10 matches in a row",
            "crown",
            Platinum,
            "10 win streak",
        ),
        BadgeDefinition::new("grandmaster", "Grandmaster", "Reach Diamond rank", "gem", Platinum, "Reach Diamond"),
        BadgeDefinition::new(
            "thousand_hours",
            "Thousand Hours",
            "Play for 1000 hours total",
            "infinity",
            Platinum,
            "1000 hours play time",
        ),
        BadgeDefinition::new(
            "elite",
            "Elite",
            "Maintain 70% win rate over 100 games",
            "star",
            Platinum,
            "70%+ win rate (100+ games)",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_badges_per_tier() {
        let catalog = BadgeCatalog::builtin();
        assert_eq!(catalog.len(), 16);
        for tier in [
            BadgeTier::Bronze,
            BadgeTier::Silver,
            BadgeTier::Gold,
            BadgeTier::Platinum,
        ] {
            assert_eq!(catalog.by_tier(tier).count(), 4, "tier {tier}");
        }
    }

    #[test]
    fn lookup() {
        let catalog = BadgeCatalog::builtin();
        let grandmaster = catalog.get("grandmaster").unwrap();
        assert_eq!(grandmaster.tier, BadgeTier::Platinum);
        assert_eq!(grandmaster.tier.color(), "#E5E4E2");
        assert!(catalog.get("nope").is_none());
    }
}
