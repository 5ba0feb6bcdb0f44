use kurdlearn_backend::store::operations::progress::ProgressUpdate;
use kurdlearn_backend::store::operations::users::{NewUser, User};
use kurdlearn_backend::store::Store;

pub fn seed_user(store: &Store, username: &str, email: &str) -> User {
    store
        .create_user(NewUser {
            username: username.to_string(),
            email: email.to_string(),
            password_hash: "$argon2id$fixture".to_string(),
        })
        .expect("create fixture user")
}

pub fn seed_progress(store: &Store, user_id: u64, lesson_id: u64, completed: bool, score: u32) {
    store
        .upsert_user_progress(ProgressUpdate {
            user_id,
            lesson_id,
            completed: Some(completed),
            score: Some(score),
        })
        .expect("upsert fixture progress");
}
