//! Grade symbols for display.
//!
//! The nine grades form three tiers of three:
//!
//! | grades | tier    | symbol                         |
//! |--------|---------|--------------------------------|
//! | 0..=2  | numeral | `I` asset repeated 1-3 times   |
//! | 3..=5  | star    | `★` asset repeated 1-3 times   |
//! | 6..=8  | line    | `-`, `=`, `≡` characters       |

use crate::config::ProgressionConfig;

const MAX_GRADE: u8 = ProgressionConfig::MAX_GRADES_PER_RANK - 1;
const LINE_SYMBOLS: [char; 3] = ['-', '=', '≡'];
const GRADE_NAMES: [&str; ProgressionConfig::MAX_GRADES_PER_RANK as usize] =
    ["I", "II", "III", "★", "★★", "★★★", "-", "=", "≡"];

/// Repeatable image assets used by the first two tiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum GradeAsset {
    Numeral,
    Star,
}

/// How to draw a grade.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GradeDisplay {
    /// Draw `asset` `count` times.
    Asset { asset: GradeAsset, count: u8 },
    /// Draw a single character.
    Char(char),
}

/// Display configuration for a grade index. Out-of-range grades clamp to 0..=8.
pub fn grade_display(grade_index: u8) -> GradeDisplay {
    let grade = grade_index.min(MAX_GRADE);
    let position = grade % 3;

    match grade / 3 {
        0 => GradeDisplay::Asset {
            asset: GradeAsset::Numeral,
            count: position + 1,
        },
        1 => GradeDisplay::Asset {
            asset: GradeAsset::Star,
            count: position + 1,
        },
        _ => GradeDisplay::Char(LINE_SYMBOLS[position as usize]),
    }
}

/// Text form of a grade, e.g. `"III"` or `"★★"`.
pub fn grade_name(grade_index: u8) -> &'static str {
    GRADE_NAMES[grade_index.min(MAX_GRADE) as usize]
}

/// e.g. `"Gold III"` or `"Platinum ★★"`.
pub fn rank_display_name(rank_name: &str, grade_index: u8) -> String {
    format!("{} {}", rank_name, grade_name(grade_index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers() {
        assert_eq!(
            grade_display(0),
            GradeDisplay::Asset {
                asset: GradeAsset::Numeral,
                count: 1
            }
        );
        assert_eq!(
            grade_display(5),
            GradeDisplay::Asset {
                asset: GradeAsset::Star,
                count: 3
            }
        );
        assert_eq!(grade_display(7), GradeDisplay::Char('='));
        assert_eq!(grade_display(200), GradeDisplay::Char('≡'));
    }

    #[test]
    fn every_valid_grade_has_a_distinct_name() {
        let config =
            ProgressionConfig::new(100, ProgressionConfig::MAX_GRADES_PER_RANK, 5).unwrap();
        let names: std::collections::HashSet<String> = (0..config.grades_per_rank())
            .map(|grade| config.rank_state(grade as u64 * 100).display_name())
            .collect();
        assert_eq!(names.len(), ProgressionConfig::MAX_GRADES_PER_RANK as usize);
        assert_eq!(GRADE_NAMES.len(), ProgressionConfig::MAX_GRADES_PER_RANK as usize);
    }

    #[test]
    fn names() {
        assert_eq!(grade_name(2), "III");
        assert_eq!(grade_name(4), "★★");
        assert_eq!(grade_name(99), "≡");
        assert_eq!(rank_display_name("Gold", 2), "Gold III");
        assert_eq!(rank_display_name("Platinum", 4), "Platinum ★★");
    }
}
