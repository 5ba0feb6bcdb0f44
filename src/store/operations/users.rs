use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::{keys, trees, Store, StoreError};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

impl Store {
    /// Creates a user, enforcing username and email uniqueness through
    /// compare-and-swap on dedicated index keys. The CAS closes the race
    /// where two concurrent registrations with the same email both pass a
    /// read-then-write existence check.
    pub fn create_user(&self, new: NewUser) -> Result<User, StoreError> {
        let id = self.next_id(trees::USERS)?;
        let user = User {
            id,
            username: new.username,
            email: new.email,
            password_hash: new.password_hash,
            created_at: Utc::now(),
        };

        let email_key = keys::user_email_index_key(&user.email);
        let username_key = keys::user_username_index_key(&user.username);
        let id_bytes = user.id.to_be_bytes().to_vec();

        let email_cas = self.user_indexes.compare_and_swap(
            email_key.as_bytes(),
            None::<&[u8]>,
            Some(id_bytes.clone()),
        )?;
        if email_cas.is_err() {
            return Err(StoreError::Conflict {
                entity: "user_email".to_string(),
                key: user.email,
            });
        }

        let username_cas = self.user_indexes.compare_and_swap(
            username_key.as_bytes(),
            None::<&[u8]>,
            Some(id_bytes),
        )?;
        if username_cas.is_err() {
            let _ = self.user_indexes.remove(email_key.as_bytes());
            return Err(StoreError::Conflict {
                entity: "user_username".to_string(),
                key: user.username,
            });
        }

        if let Err(e) = self
            .users
            .insert(keys::id_key(user.id), Self::serialize(&user)?)
        {
            let _ = self.user_indexes.remove(email_key.as_bytes());
            let _ = self.user_indexes.remove(username_key.as_bytes());
            return Err(StoreError::Sled(e));
        }

        Ok(user)
    }

    pub fn get_user(&self, id: u64) -> Result<Option<User>, StoreError> {
        match self.users.get(keys::id_key(id))? {
            Some(raw) => Ok(Some(Self::deserialize(&raw)?)),
            None => Ok(None),
        }
    }

    pub fn get_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        self.get_user_via_index(&keys::user_email_index_key(email))
    }

    pub fn get_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        self.get_user_via_index(&keys::user_username_index_key(username))
    }

    fn get_user_via_index(&self, index_key: &str) -> Result<Option<User>, StoreError> {
        let Some(raw_id) = self.user_indexes.get(index_key.as_bytes())? else {
            return Ok(None);
        };
        let bytes: [u8; 8] = match raw_id.as_ref().try_into() {
            Ok(bytes) => bytes,
            Err(_) => {
                tracing::warn!(index_key, "Malformed user index entry");
                return Ok(None);
            }
        };
        self.get_user(u64::from_be_bytes(bytes))
    }
}
