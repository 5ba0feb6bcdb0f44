pub const META: &str = "meta";
pub const USERS: &str = "users";
pub const USER_INDEXES: &str = "user_indexes";
pub const LESSONS: &str = "lessons";
pub const VOCABULARY: &str = "vocabulary";
pub const ACHIEVEMENTS: &str = "achievements";
pub const USER_PROGRESS: &str = "user_progress";
pub const USER_VOCABULARY: &str = "user_vocabulary";
pub const USER_ACHIEVEMENTS: &str = "user_achievements";
