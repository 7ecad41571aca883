//! Daily, streak, weekly and special tasks that pay flat XP rewards.

/// Task grouping, derived from the id prefix (`daily_`, `streak_`, `weekly_`).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TaskCategory {
    Daily,
    Streak,
    Weekly,
    Special,
}

impl TaskCategory {
    pub fn of(task_id: &str) -> Self {
        if task_id.starts_with("daily_") {
            Self::Daily
        } else if task_id.starts_with("streak_") {
            Self::Streak
        } else if task_id.starts_with("weekly_") {
            Self::Weekly
        } else {
            Self::Special
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TaskDefinition {
    pub id: String,
    pub name: String,
    pub description: String,
    pub xp_reward: u32,
    pub icon: String,
}

impl TaskDefinition {
    pub fn new(id: &str, name: &str, description: &str, xp_reward: u32, icon: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            xp_reward,
            icon: icon.to_string(),
        }
    }

    pub fn category(&self) -> TaskCategory {
        TaskCategory::of(&self.id)
    }
}

/// A user's progress on one task.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserTask {
    pub task_id: String,
    pub progress: u32,
    pub target: u32,
    pub completed: bool,
}

impl UserTask {
    pub fn new(task_id: impl Into<String>, target: u32) -> Self {
        Self {
            task_id: task_id.into(),
            progress: 0,
            target,
            completed: target == 0,
        }
    }

    /// Adds `amount` progress, capped at the target. Completion is sticky.
    #[must_use]
    pub fn advance(&self, amount: u32) -> Self {
        let progress = self.progress.saturating_add(amount).min(self.target);
        Self {
            task_id: self.task_id.clone(),
            progress,
            target: self.target,
            completed: self.completed || progress >= self.target,
        }
    }

    /// Progress as a percentage in `[0, 100]`.
    pub fn progress_percent(&self) -> f64 {
        if self.target == 0 {
            return 100.0;
        }
        (self.progress.min(self.target) as f64 / self.target as f64) * 100.0
    }
}

/// Ordered task list with id lookup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskCatalog {
    tasks: Vec<TaskDefinition>,
}

impl TaskCatalog {
    pub fn new(tasks: Vec<TaskDefinition>) -> Self {
        Self { tasks }
    }

    pub fn builtin() -> Self {
        Self::new(builtin_tasks())
    }

    pub fn get(&self, id: &str) -> Option<&TaskDefinition> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TaskDefinition> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn by_category(&self, category: TaskCategory) -> impl Iterator<Item = &TaskDefinition> {
        self.iter().filter(move |t| t.category() == category)
    }

    /// XP paid for completing `id`, or 0 for unknown tasks.
    pub fn reward(&self, id: &str) -> u32 {
        self.get(id).map_or(0, |t| t.xp_reward)
    }

    /// Display order for a user's tasks: incomplete first, then by reward
    /// descending. Ties keep their input order. At most `limit` entries.
    pub fn display_order<'a>(&self, tasks: &'a [UserTask], limit: usize) -> Vec<&'a UserTask> {
        let mut sorted: Vec<&UserTask> = tasks.iter().collect();
        sorted.sort_by(|a, b| {
            a.completed
                .cmp(&b.completed)
                .then_with(|| self.reward(&b.task_id).cmp(&self.reward(&a.task_id)))
        });
        sorted.truncate(limit);
        sorted
    }
}

pub fn builtin_tasks() -> Vec<TaskDefinition> {
    vec![
        // Daily
        TaskDefinition::new("daily_win_1", "Daily Victory", "Win 1 match today", 200, "trophy"),
        TaskDefinition::new("daily_play_3", "Active Player", "Play 3 matches today", 150, "gamepad-2"),
        TaskDefinition::new(
            "daily_perfect",
            "Perfect Game",
            "Complete a match with a perfect score",
            500,
            "check-circle",
        ),
        TaskDefinition::new(
            "daily_quick_win",
            "Speed Runner",
            "Win a match in under 2 minutes",
            300,
            "zap",
        ),
        TaskDefinition::new("daily_playtime", "Dedicated", "Play for 30 minutes today", 200, "clock"),
        // Streaks
        TaskDefinition::new("streak_2", "Warming Up", "Win 2 matches in a row", 250, "flame"),
        TaskDefinition::new("streak_3", "On Fire", "Win 3 matches in a row", 500, "flame"),
        TaskDefinition::new("streak_5", "Unstoppable", "Win 5 matches in a row", 1_000, "flame"),
        // Weekly
        TaskDefinition::new(
            "weekly_wins_10",
            "Weekly Champion",
            "Win 10 matches this week",
            1_500,
            "calendar",
        ),
        TaskDefinition::new(
            "weekly_play_20",
            "Weekly Warrior",
            "Play 20 matches this week",
            1_000,
            "swords",
        ),
        TaskDefinition::new(
            "weekly_variety",
            "Explorer",
            "Play against 10 different opponents this week",
            750,
            "users",
        ),
        // Special
        TaskDefinition::new(
            "comeback",
            "Comeback King",
            "Win a match after being down 2 points",
            400,
            "refresh-cw",
        ),
        TaskDefinition::new("domination", "Domination", "Win by 5 or more points", 350, "crown"),
        TaskDefinition::new(
            "rival",
            "Rival Defeated",
            "Beat a player ranked higher than you",
            450,
            "sword",
        ),
        TaskDefinition::new(
            "first_of_day",
            "Early Bird",
            "Play your first match before 9 AM",
            100,
            "sunrise",
        ),
    ]
}
