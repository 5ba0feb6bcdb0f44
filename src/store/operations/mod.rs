pub mod achievements;
pub mod lessons;
pub mod progress;
pub mod stats;
pub mod user_achievements;
pub mod user_vocabulary;
pub mod users;
pub mod vocabulary;
