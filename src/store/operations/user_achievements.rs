use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::{keys, trees, Store, StoreError};

/// An unlocked achievement. Existence of the record is the unlock; there is
/// no locked state and records are never removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAchievement {
    pub id: u64,
    pub user_id: u64,
    pub achievement_id: u64,
    pub unlocked_at: DateTime<Utc>,
}

impl Store {
    /// Create-only: unlocking an already-unlocked achievement returns the
    /// existing record untouched, keeping the original unlock time.
    pub fn unlock_achievement(
        &self,
        user_id: u64,
        achievement_id: u64,
    ) -> Result<UserAchievement, StoreError> {
        let key = keys::pair_key(user_id, achievement_id);
        if let Some(raw) = self.user_achievements.get(key)? {
            return Self::deserialize(&raw);
        }

        let record = UserAchievement {
            id: self.next_id(trees::USER_ACHIEVEMENTS)?,
            user_id,
            achievement_id,
            unlocked_at: Utc::now(),
        };
        self.user_achievements
            .insert(key, Self::serialize(&record)?)?;
        Ok(record)
    }

    pub fn get_user_achievements(&self, user_id: u64) -> Result<Vec<UserAchievement>, StoreError> {
        let mut out = Vec::new();
        for item in self
            .user_achievements
            .scan_prefix(keys::user_prefix(user_id))
        {
            let (_, raw) = item?;
            out.push(Self::deserialize(&raw)?);
        }
        Ok(out)
    }
}
