//! Versioned, idempotent seeding of the reference content (lessons,
//! vocabulary, achievements).
//!
//! Seed steps follow the migration discipline: each step must be idempotent,
//! the applied version is checkpointed in the meta tree after each step, and
//! version downgrades are refused. Reopening an already-seeded store is a
//! no-op, so reference data is never duplicated.

use crate::store::operations::achievements::{AchievementRequirement, NewAchievement};
use crate::store::operations::lessons::{LessonCategory, LessonContent, LessonLevel, NewLesson};
use crate::store::operations::vocabulary::{Difficulty, NewVocabularyItem};
use crate::store::{Store, StoreError};

const VERSION_KEY: &str = "seed:version";

type SeedFn = fn(&Store) -> Result<(), StoreError>;

fn steps() -> Vec<(&'static str, SeedFn)> {
    vec![
        ("001_lessons", s001_lessons),
        ("002_vocabulary", s002_vocabulary),
        ("003_achievements", s003_achievements),
    ]
}

pub fn run(store: &Store) -> Result<(), StoreError> {
    let current = get_current_version(store)?;

    for (index, (name, func)) in steps().iter().enumerate() {
        let version = (index + 1) as u32;
        if version > current {
            tracing::info!(version, name, "Applying seed step");
            func(store)?;
            set_version(store, version)?;
        } else {
            tracing::debug!(version, name, "Seed step already applied, skipping");
        }
    }

    Ok(())
}

pub fn get_current_version(store: &Store) -> Result<u32, StoreError> {
    match store.meta.get(VERSION_KEY.as_bytes())? {
        Some(raw) => {
            let bytes: [u8; 4] = raw.as_ref().try_into().unwrap_or([0; 4]);
            Ok(u32::from_be_bytes(bytes))
        }
        None => Ok(0),
    }
}

fn set_version(store: &Store, version: u32) -> Result<(), StoreError> {
    let current = get_current_version(store)?;
    if version < current {
        return Err(StoreError::Seed {
            version,
            message: format!("refuse to downgrade from {current} to {version}"),
        });
    }
    store
        .meta
        .insert(VERSION_KEY.as_bytes(), &version.to_be_bytes())?;
    Ok(())
}

fn s001_lessons(store: &Store) -> Result<(), StoreError> {
    let lessons = vec![
        NewLesson {
            title: "The English Alphabet".to_string(),
            title_ku: "پیتێن ئینگلیزی".to_string(),
            description: "Learn the 26 letters of the English alphabet".to_string(),
            description_ku: "فێربوونا ٢٦ پیتێن ئەلفوبێیا ئینگلیزی".to_string(),
            level: LessonLevel::Beginner,
            category: LessonCategory::Basics,
            content: LessonContent::Alphabet {
                letters: vec!["A".to_string(), "B".to_string(), "C".to_string()],
            },
            order: 1,
            is_active: true,
        },
        NewLesson {
            title: "Basic Greetings".to_string(),
            title_ku: "سلاڤکرنا سەرەتایی".to_string(),
            description: "Common ways to greet people in English".to_string(),
            description_ku: "ڕێگێن باو یێن سلاڤکرنێ ب ئینگلیزی".to_string(),
            level: LessonLevel::Beginner,
            category: LessonCategory::Conversation,
            content: LessonContent::Greetings {
                phrases: vec![
                    "Hello".to_string(),
                    "Good morning".to_string(),
                    "How are you?".to_string(),
                ],
            },
            order: 2,
            is_active: true,
        },
        NewLesson {
            title: "Present Tense".to_string(),
            title_ku: "کاتا ئێستا".to_string(),
            description: "Understanding and using present tense".to_string(),
            description_ku: "تێگەهشتن و بکارهێنانا کاتا ئێستا".to_string(),
            level: LessonLevel::Intermediate,
            category: LessonCategory::Grammar,
            content: LessonContent::Grammar {
                rules: vec![
                    "I am".to_string(),
                    "You are".to_string(),
                    "He/She is".to_string(),
                ],
            },
            order: 3,
            is_active: true,
        },
    ];

    for lesson in lessons {
        store.create_lesson(lesson)?;
    }
    Ok(())
}

fn s002_vocabulary(store: &Store) -> Result<(), StoreError> {
    let items = vec![
        NewVocabularyItem {
            english: "Apple".to_string(),
            kurdish: "سێڤ".to_string(),
            pronunciation: "/ˈæpəl/".to_string(),
            category: "food".to_string(),
            difficulty: Difficulty::Easy,
            image_url: Some(
                "https://images.unsplash.com/photo-1560806887-1e4cd0b6cbd6?w=200&h=200&fit=crop"
                    .to_string(),
            ),
            audio_url: None,
            example: Some("I eat an apple every day".to_string()),
            example_ku: Some("ئەز هەر ڕۆژێ سێڤەکێ دخۆم".to_string()),
            is_active: true,
        },
        NewVocabularyItem {
            english: "House".to_string(),
            kurdish: "خانی".to_string(),
            pronunciation: "/haʊs/".to_string(),
            category: "home".to_string(),
            difficulty: Difficulty::Easy,
            image_url: None,
            audio_url: None,
            example: Some("This is my house".to_string()),
            example_ku: Some("ئەڤە خانیا منە".to_string()),
            is_active: true,
        },
        NewVocabularyItem {
            english: "Beautiful".to_string(),
            kurdish: "جوان".to_string(),
            pronunciation: "/ˈbjuːtɪfəl/".to_string(),
            category: "adjectives".to_string(),
            difficulty: Difficulty::Medium,
            image_url: None,
            audio_url: None,
            example: Some("She is beautiful".to_string()),
            example_ku: Some("ئەو جوانە".to_string()),
            is_active: true,
        },
    ];

    for item in items {
        store.create_vocabulary(item)?;
    }
    Ok(())
}

fn s003_achievements(store: &Store) -> Result<(), StoreError> {
    let achievements = vec![
        NewAchievement {
            name: "First Steps".to_string(),
            name_ku: "یەکەم هەنگاو".to_string(),
            description: "Complete your first lesson".to_string(),
            description_ku: "یەکەم وانا خۆ تەواو بکە".to_string(),
            icon: "fas fa-baby".to_string(),
            requirement: AchievementRequirement::LessonsCompleted { count: 1 },
            is_active: true,
        },
        NewAchievement {
            name: "Vocabulary Master".to_string(),
            name_ku: "مامۆستایێ وشان".to_string(),
            description: "Learn 100 new words".to_string(),
            description_ku: "١٠٠ وشا نوێ فێربە".to_string(),
            icon: "fas fa-brain".to_string(),
            requirement: AchievementRequirement::VocabularyLearned { count: 100 },
            is_active: true,
        },
        NewAchievement {
            name: "Streak Champion".to_string(),
            name_ku: "پاڵەوانێ یەکجار".to_string(),
            description: "Study for 15 consecutive days".to_string(),
            description_ku: "١٥ ڕۆژێ یەکجار فێربە".to_string(),
            icon: "fas fa-fire".to_string(),
            requirement: AchievementRequirement::DailyStreak { count: 15 },
            is_active: true,
        },
    ];

    for achievement in achievements {
        store.create_achievement(achievement)?;
    }
    Ok(())
}
