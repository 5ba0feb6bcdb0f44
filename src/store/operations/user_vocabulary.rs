use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::{keys, trees, Store, StoreError};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserVocabulary {
    pub id: u64,
    pub user_id: u64,
    pub vocabulary_id: u64,
    pub mastered: bool,
    pub correct_count: u32,
    pub incorrect_count: u32,
    /// Touched on every write, create or merge.
    pub last_reviewed: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserVocabularyUpdate {
    pub user_id: u64,
    pub vocabulary_id: u64,
    pub mastered: Option<bool>,
    pub correct_count: Option<u32>,
    pub incorrect_count: Option<u32>,
}

impl Store {
    /// Create-or-merge keyed by the (user, vocabulary) pair. The counters are
    /// absolute values supplied by the caller, expected to only grow.
    pub fn upsert_user_vocabulary(
        &self,
        update: UserVocabularyUpdate,
    ) -> Result<UserVocabulary, StoreError> {
        let key = keys::pair_key(update.user_id, update.vocabulary_id);
        let now = Utc::now();

        let record = match self.user_vocabulary.get(key)? {
            Some(raw) => {
                let existing: UserVocabulary = Self::deserialize(&raw)?;
                UserVocabulary {
                    id: existing.id,
                    user_id: existing.user_id,
                    vocabulary_id: existing.vocabulary_id,
                    mastered: update.mastered.unwrap_or(existing.mastered),
                    correct_count: update.correct_count.unwrap_or(existing.correct_count),
                    incorrect_count: update.incorrect_count.unwrap_or(existing.incorrect_count),
                    last_reviewed: now,
                }
            }
            None => UserVocabulary {
                id: self.next_id(trees::USER_VOCABULARY)?,
                user_id: update.user_id,
                vocabulary_id: update.vocabulary_id,
                mastered: update.mastered.unwrap_or(false),
                correct_count: update.correct_count.unwrap_or(0),
                incorrect_count: update.incorrect_count.unwrap_or(0),
                last_reviewed: now,
            },
        };

        self.user_vocabulary.insert(key, Self::serialize(&record)?)?;
        Ok(record)
    }

    pub fn get_user_vocabulary(&self, user_id: u64) -> Result<Vec<UserVocabulary>, StoreError> {
        let mut out = Vec::new();
        for item in self.user_vocabulary.scan_prefix(keys::user_prefix(user_id)) {
            let (_, raw) = item?;
            out.push(Self::deserialize(&raw)?);
        }
        Ok(out)
    }
}
