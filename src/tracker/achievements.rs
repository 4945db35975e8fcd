//! Achievement definitions and unlock evaluation.
//!
//! Unlocked state is derived, never stored: every recompute re-evaluates each
//! rule against the current stats. An achievement whose rule stops holding is
//! re-locked, so crossing the threshold again notifies again.

use std::collections::HashSet;

use super::types::{StatEntry, StatId};

/// Rule deciding whether an achievement is earned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnlockRule {
    /// A stat's current value is at or above a threshold.
    StatAtLeast { stat: StatId, threshold: f64 },
}

impl UnlockRule {
    /// Evaluate the rule against the current stat set.
    pub fn is_met(&self, stats: &[StatEntry]) -> bool {
        match self {
            UnlockRule::StatAtLeast { stat, threshold } => stats
                .iter()
                .find(|s| s.id == *stat)
                .is_some_and(|s| s.value >= *threshold),
        }
    }
}

/// Achievement definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Achievement {
    /// Stable id
    pub id: u32,
    /// Display name
    pub name: &'static str,
    /// Badge glyph
    pub icon: &'static str,
    /// Unlock rule
    pub rule: UnlockRule,
}

/// The full achievement catalog.
pub fn all_achievements() -> Vec<Achievement> {
    vec![
        Achievement {
            id: 1,
            name: "10k Steps",
            icon: "🥾",
            rule: UnlockRule::StatAtLeast {
                stat: StatId::Steps,
                threshold: 10000.0,
            },
        },
        Achievement {
            id: 2,
            name: "500 Calories Burned",
            icon: "🔥",
            rule: UnlockRule::StatAtLeast {
                stat: StatId::Calories,
                threshold: 500.0,
            },
        },
        Achievement {
            id: 3,
            name: "Active 60+ Min",
            icon: "⏱️",
            rule: UnlockRule::StatAtLeast {
                stat: StatId::ActiveMinutes,
                threshold: 60.0,
            },
        },
    ]
}

/// Re-evaluate every achievement against the current stats.
///
/// Newly satisfied achievements enter `unlocked` and are returned so the
/// caller can notify. Achievements whose rule no longer holds leave
/// `unlocked` — a later re-cross notifies again.
pub fn recompute_unlocks(
    achievements: &[Achievement],
    stats: &[StatEntry],
    unlocked: &mut HashSet<u32>,
) -> Vec<Achievement> {
    let mut newly_unlocked = Vec::new();

    for achievement in achievements {
        if achievement.rule.is_met(stats) {
            if unlocked.insert(achievement.id) {
                newly_unlocked.push(achievement.clone());
            }
        } else {
            unlocked.remove(&achievement.id);
        }
    }

    newly_unlocked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats_with_steps(steps: f64) -> Vec<StatEntry> {
        vec![StatEntry::new(StatId::Steps, "Steps", "🥾", steps, 10000.0)]
    }

    #[test]
    fn test_unlock_emits_once_while_held() {
        let achievements = all_achievements();
        let mut unlocked = HashSet::new();

        let events = recompute_unlocks(&achievements, &stats_with_steps(12000.0), &mut unlocked);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name, "10k Steps");
        assert!(unlocked.contains(&1));

        // Still met: no repeat notification.
        let events = recompute_unlocks(&achievements, &stats_with_steps(12000.0), &mut unlocked);
        assert!(events.is_empty());
        assert!(unlocked.contains(&1));
    }

    #[test]
    fn test_relock_allows_renotification() {
        let achievements = all_achievements();
        let mut unlocked = HashSet::new();

        recompute_unlocks(&achievements, &stats_with_steps(12000.0), &mut unlocked);
        assert!(unlocked.contains(&1));

        // Drop below the threshold: the achievement re-locks.
        let events = recompute_unlocks(&achievements, &stats_with_steps(8000.0), &mut unlocked);
        assert!(events.is_empty());
        assert!(!unlocked.contains(&1));

        // Cross it again: a fresh notification fires.
        let events = recompute_unlocks(&achievements, &stats_with_steps(10000.0), &mut unlocked);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, 1);
    }

    #[test]
    fn test_missing_stat_never_unlocks() {
        let achievements = all_achievements();
        let mut unlocked = HashSet::new();

        let events = recompute_unlocks(&achievements, &[], &mut unlocked);
        assert!(events.is_empty());
        assert!(unlocked.is_empty());
    }
}
