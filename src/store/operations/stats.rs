use std::collections::HashSet;

use chrono::{Days, NaiveDate, Utc};
use serde::Serialize;

use crate::store::{Store, StoreError};

/// Per-user dashboard summary, derived by joining the three per-user record
/// families. Pure read; nothing here mutates the store.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    /// Progress records with `completed = true`.
    pub completed_lessons: u64,
    /// Vocabulary items the user has touched in any review state.
    pub total_vocabulary: u64,
    /// Vocabulary items with `mastered = true`.
    pub mastered_vocabulary: u64,
    /// Unlocked achievements (existence of the join record).
    pub total_achievements: u64,
    /// Consecutive UTC calendar days with at least one activity record,
    /// counted back from today (or yesterday, see `streak_days`).
    pub streak_days: u32,
    /// Mean progress score rounded to the nearest integer; 0 with no records.
    pub average_score: u32,
}

impl Store {
    pub fn compute_user_stats(&self, user_id: u64) -> Result<UserStats, StoreError> {
        self.compute_user_stats_at(user_id, Utc::now().date_naive())
    }

    /// Statistics as of the given "today". Split out so the streak window is
    /// testable without depending on the wall clock.
    pub fn compute_user_stats_at(
        &self,
        user_id: u64,
        today: NaiveDate,
    ) -> Result<UserStats, StoreError> {
        let progress = self.get_user_progress(user_id)?;
        let vocabulary = self.get_user_vocabulary(user_id)?;
        let achievements = self.get_user_achievements(user_id)?;

        let completed_lessons = progress.iter().filter(|p| p.completed).count() as u64;
        let mastered_vocabulary = vocabulary.iter().filter(|v| v.mastered).count() as u64;

        let average_score = if progress.is_empty() {
            0
        } else {
            let sum: u64 = progress.iter().map(|p| u64::from(p.score)).sum();
            (sum as f64 / progress.len() as f64).round() as u32
        };

        let mut activity_days: HashSet<NaiveDate> = HashSet::new();
        activity_days.extend(progress.iter().map(|p| p.updated_at.date_naive()));
        activity_days.extend(vocabulary.iter().map(|v| v.last_reviewed.date_naive()));
        activity_days.extend(achievements.iter().map(|a| a.unlocked_at.date_naive()));

        Ok(UserStats {
            completed_lessons,
            total_vocabulary: vocabulary.len() as u64,
            mastered_vocabulary,
            total_achievements: achievements.len() as u64,
            streak_days: streak_days(&activity_days, today),
            average_score,
        })
    }
}

/// Length of the run of consecutive qualifying days ending at `today`. A run
/// that ends yesterday still counts, so a streak is not reported as broken
/// before the user's first session of the current day.
fn streak_days(activity_days: &HashSet<NaiveDate>, today: NaiveDate) -> u32 {
    let anchor = if activity_days.contains(&today) {
        today
    } else {
        match today.checked_sub_days(Days::new(1)) {
            Some(yesterday) if activity_days.contains(&yesterday) => yesterday,
            _ => return 0,
        }
    };

    let mut streak = 0u32;
    let mut day = anchor;
    while activity_days.contains(&day) {
        streak += 1;
        day = match day.checked_sub_days(Days::new(1)) {
            Some(previous) => previous,
            None => break,
        };
    }
    streak
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::operations::progress::ProgressUpdate;
    use crate::store::operations::user_vocabulary::UserVocabularyUpdate;

    fn progress(user_id: u64, lesson_id: u64, completed: bool, score: u32) -> ProgressUpdate {
        ProgressUpdate {
            user_id,
            lesson_id,
            completed: Some(completed),
            score: Some(score),
        }
    }

    fn review(user_id: u64, vocabulary_id: u64, mastered: bool) -> UserVocabularyUpdate {
        UserVocabularyUpdate {
            user_id,
            vocabulary_id,
            mastered: Some(mastered),
            correct_count: None,
            incorrect_count: None,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn stats_for_unknown_user_are_all_zero() {
        let store = Store::open_temporary().unwrap();
        let stats = store.compute_user_stats(77).unwrap();
        assert_eq!(stats.completed_lessons, 0);
        assert_eq!(stats.total_vocabulary, 0);
        assert_eq!(stats.mastered_vocabulary, 0);
        assert_eq!(stats.total_achievements, 0);
        assert_eq!(stats.streak_days, 0);
        assert_eq!(stats.average_score, 0);
    }

    #[test]
    fn average_is_rounded_mean_of_all_progress_scores() {
        let store = Store::open_temporary().unwrap();
        store.upsert_user_progress(progress(1, 1, true, 80)).unwrap();
        store.upsert_user_progress(progress(1, 2, true, 90)).unwrap();
        store.upsert_user_progress(progress(1, 3, false, 100)).unwrap();

        let stats = store.compute_user_stats(1).unwrap();
        assert_eq!(stats.average_score, 90);
        // Incomplete records still contribute to the mean, not to the count
        assert_eq!(stats.completed_lessons, 2);
    }

    #[test]
    fn counts_join_all_three_record_families() {
        let store = Store::open_temporary().unwrap();
        store.upsert_user_progress(progress(1, 1, true, 95)).unwrap();
        store.upsert_user_vocabulary(review(1, 1, true)).unwrap();
        store.upsert_user_vocabulary(review(1, 2, false)).unwrap();
        store.unlock_achievement(1, 1).unwrap();

        // A second user's records must not bleed in
        store.upsert_user_progress(progress(2, 1, true, 10)).unwrap();

        let stats = store.compute_user_stats(1).unwrap();
        assert_eq!(stats.completed_lessons, 1);
        assert_eq!(stats.total_vocabulary, 2);
        assert_eq!(stats.mastered_vocabulary, 1);
        assert_eq!(stats.total_achievements, 1);
        assert_eq!(stats.average_score, 95);
    }

    #[test]
    fn streak_counts_consecutive_days_ending_today() {
        let days: HashSet<NaiveDate> = [
            date(2026, 8, 27),
            date(2026, 8, 28),
            date(2026, 8, 29),
        ]
        .into_iter()
        .collect();
        assert_eq!(streak_days(&days, date(2026, 8, 29)), 3);
    }

    #[test]
    fn streak_survives_a_day_without_activity_yet() {
        let days: HashSet<NaiveDate> = [date(2026, 8, 27), date(2026, 8, 28)].into_iter().collect();
        // Nothing recorded today, run ended yesterday
        assert_eq!(streak_days(&days, date(2026, 8, 29)), 2);
    }

    #[test]
    fn streak_breaks_on_a_gap() {
        let days: HashSet<NaiveDate> = [
            date(2026, 8, 25),
            date(2026, 8, 26),
            date(2026, 8, 29),
        ]
        .into_iter()
        .collect();
        assert_eq!(streak_days(&days, date(2026, 8, 29)), 1);
        assert_eq!(streak_days(&days, date(2026, 8, 31)), 0);
    }

    #[test]
    fn todays_activity_yields_a_one_day_streak() {
        let store = Store::open_temporary().unwrap();
        store.upsert_user_progress(progress(1, 1, false, 0)).unwrap();
        let stats = store.compute_user_stats(1).unwrap();
        assert_eq!(stats.streak_days, 1);
    }
}
