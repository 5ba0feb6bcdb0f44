//! Key encodings for the sled trees.
//!
//! Entity trees are keyed by the big-endian id, join-record trees by the
//! fixed-width (user id, target id) pair. Fixed-width binary keys keep ids
//! sorted numerically under sled's byte ordering and, unlike delimiter-joined
//! strings, cannot collide or be ambiguous for any pair of ids.

/// Primary key for a record in an entity tree.
pub fn id_key(id: u64) -> [u8; 8] {
    id.to_be_bytes()
}

/// Composite key for a per-user join record: 8 bytes of user id followed by
/// 8 bytes of target entity id, both big-endian. At most one record can exist
/// per (user, target) pair by construction.
pub fn pair_key(user_id: u64, target_id: u64) -> [u8; 16] {
    let mut key = [0u8; 16];
    key[..8].copy_from_slice(&user_id.to_be_bytes());
    key[8..].copy_from_slice(&target_id.to_be_bytes());
    key
}

/// Scan prefix covering every join record owned by a user.
pub fn user_prefix(user_id: u64) -> [u8; 8] {
    user_id.to_be_bytes()
}

pub fn parse_pair_key(raw: &[u8]) -> Option<(u64, u64)> {
    if raw.len() != 16 {
        return None;
    }
    let user_id = u64::from_be_bytes(raw[..8].try_into().ok()?);
    let target_id = u64::from_be_bytes(raw[8..].try_into().ok()?);
    Some((user_id, target_id))
}

pub fn counter_key(kind: &str) -> String {
    format!("counter:{kind}")
}

pub fn user_email_index_key(email: &str) -> String {
    format!("email:{}", email.to_lowercase())
}

pub fn user_username_index_key(username: &str) -> String {
    format!("username:{username}")
}
