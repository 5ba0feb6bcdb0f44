pub mod keys;
pub mod operations;
pub mod seed;
pub mod trees;

use serde::de::DeserializeOwned;
use serde::Serialize;
use sled::Db;
use thiserror::Error;

/// One sled tree per entity kind, plus a meta tree holding the per-kind
/// id counters and the seed version. Join-record trees are keyed by the
/// composite (user id, target id) pair, reference trees by the entity id.
#[derive(Debug)]
pub struct Store {
    db: Db,
    pub meta: sled::Tree,
    pub users: sled::Tree,
    pub user_indexes: sled::Tree,
    pub lessons: sled::Tree,
    pub vocabulary: sled::Tree,
    pub achievements: sled::Tree,
    pub user_progress: sled::Tree,
    pub user_vocabulary: sled::Tree,
    pub user_achievements: sled::Tree,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sled error: {0}")]
    Sled(#[from] sled::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("not found: entity={entity}, key={key}")]
    NotFound { entity: String, key: String },
    #[error("conflict: entity={entity}, key={key}")]
    Conflict { entity: String, key: String },
    #[error("validation error: {0}")]
    Validation(String),
    #[error("seed error at version {version}: {message}")]
    Seed { version: u32, message: String },
}

impl Store {
    pub fn open(sled_path: &str) -> Result<Self, StoreError> {
        Self::from_db(sled::open(sled_path)?)
    }

    /// An ephemeral store that vanishes on drop. Used by the test suites and
    /// available for demo deployments that do not want state to survive a restart.
    pub fn open_temporary() -> Result<Self, StoreError> {
        Self::from_db(sled::Config::new().temporary(true).open()?)
    }

    fn from_db(db: Db) -> Result<Self, StoreError> {
        let meta = db.open_tree(trees::META)?;
        let users = db.open_tree(trees::USERS)?;
        let user_indexes = db.open_tree(trees::USER_INDEXES)?;
        let lessons = db.open_tree(trees::LESSONS)?;
        let vocabulary = db.open_tree(trees::VOCABULARY)?;
        let achievements = db.open_tree(trees::ACHIEVEMENTS)?;
        let user_progress = db.open_tree(trees::USER_PROGRESS)?;
        let user_vocabulary = db.open_tree(trees::USER_VOCABULARY)?;
        let user_achievements = db.open_tree(trees::USER_ACHIEVEMENTS)?;

        Ok(Self {
            db,
            meta,
            users,
            user_indexes,
            lessons,
            vocabulary,
            achievements,
            user_progress,
            user_vocabulary,
            user_achievements,
        })
    }

    pub fn run_seed(&self) -> Result<(), StoreError> {
        seed::run(self)
    }

    pub fn flush(&self) -> Result<(), StoreError> {
        self.db.flush()?;
        Ok(())
    }

    /// Atomically reserves the next id for an entity kind. Counters are
    /// persisted per kind, so an id is never handed out twice by the same
    /// store, even across reopen.
    pub(crate) fn next_id(&self, kind: &str) -> Result<u64, StoreError> {
        let key = keys::counter_key(kind);
        let raw = self
            .meta
            .update_and_fetch(key.as_bytes(), |old| {
                let current = old
                    .and_then(|bytes| <[u8; 8]>::try_from(bytes).ok())
                    .map(u64::from_be_bytes)
                    .unwrap_or(0);
                Some(current.saturating_add(1).to_be_bytes().to_vec())
            })?
            .ok_or_else(|| StoreError::Validation(format!("id counter missing for {kind}")))?;
        let bytes: [u8; 8] = raw
            .as_ref()
            .try_into()
            .map_err(|_| StoreError::Validation(format!("corrupt id counter for {kind}")))?;
        Ok(u64::from_be_bytes(bytes))
    }

    pub(crate) fn serialize<T: Serialize>(value: &T) -> Result<Vec<u8>, StoreError> {
        Ok(serde_json::to_vec(value)?)
    }

    pub(crate) fn deserialize<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, StoreError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
