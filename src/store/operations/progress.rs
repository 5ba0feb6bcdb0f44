use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::{keys, trees, Store, StoreError};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    pub id: u64,
    pub user_id: u64,
    pub lesson_id: u64,
    pub completed: bool,
    pub score: u32,
    /// Set the first time a write carries `completed = true`, then frozen.
    /// A later write flipping `completed` back to false keeps the original
    /// completion time.
    pub completed_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

/// Partial progress update. Absent fields keep the stored values on merge
/// and fall back to the schema defaults on first write.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressUpdate {
    pub user_id: u64,
    pub lesson_id: u64,
    pub completed: Option<bool>,
    pub score: Option<u32>,
}

impl Store {
    /// Create-or-merge keyed by the (user, lesson) pair: repeated writes for
    /// the same pair always land on the same record.
    pub fn upsert_user_progress(&self, update: ProgressUpdate) -> Result<UserProgress, StoreError> {
        let key = keys::pair_key(update.user_id, update.lesson_id);
        let now = Utc::now();

        let record = match self.user_progress.get(key)? {
            Some(raw) => {
                let existing: UserProgress = Self::deserialize(&raw)?;
                let completed = update.completed.unwrap_or(existing.completed);
                let completed_at = match existing.completed_at {
                    Some(at) => Some(at),
                    None if completed => Some(now),
                    None => None,
                };
                UserProgress {
                    id: existing.id,
                    user_id: existing.user_id,
                    lesson_id: existing.lesson_id,
                    completed,
                    score: update.score.unwrap_or(existing.score),
                    completed_at,
                    updated_at: now,
                }
            }
            None => {
                let completed = update.completed.unwrap_or(false);
                UserProgress {
                    id: self.next_id(trees::USER_PROGRESS)?,
                    user_id: update.user_id,
                    lesson_id: update.lesson_id,
                    completed,
                    score: update.score.unwrap_or(0),
                    completed_at: completed.then_some(now),
                    updated_at: now,
                }
            }
        };

        self.user_progress.insert(key, Self::serialize(&record)?)?;
        Ok(record)
    }

    /// Every progress record owned by a user, via prefix scan on the
    /// composite key. A user with no records yields an empty Vec.
    pub fn get_user_progress(&self, user_id: u64) -> Result<Vec<UserProgress>, StoreError> {
        let mut out = Vec::new();
        for item in self.user_progress.scan_prefix(keys::user_prefix(user_id)) {
            let (_, raw) = item?;
            out.push(Self::deserialize(&raw)?);
        }
        Ok(out)
    }

    pub fn get_user_lesson_progress(
        &self,
        user_id: u64,
        lesson_id: u64,
    ) -> Result<Option<UserProgress>, StoreError> {
        match self.user_progress.get(keys::pair_key(user_id, lesson_id))? {
            Some(raw) => Ok(Some(Self::deserialize(&raw)?)),
            None => Ok(None),
        }
    }
}
