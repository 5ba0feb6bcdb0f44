use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::store::{keys, trees, Store, StoreError};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: u64,
    pub title: String,
    pub title_ku: String,
    pub description: String,
    pub description_ku: String,
    pub level: LessonLevel,
    pub category: LessonCategory,
    pub content: LessonContent,
    pub order: u32,
    pub is_active: bool,
}

/// Lesson fields as provided by a caller; the store assigns the id.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLesson {
    pub title: String,
    pub title_ku: String,
    pub description: String,
    pub description_ku: String,
    pub level: LessonLevel,
    pub category: LessonCategory,
    pub content: LessonContent,
    pub order: u32,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl FromStr for LessonLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Exact, case-sensitive match: "Beginner" is not a level.
        match s {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonCategory {
    Basics,
    Grammar,
    Vocabulary,
    Conversation,
}

/// Structured lesson body. Each variant mirrors one of the known content
/// shapes; the discriminator serializes as a `type` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LessonContent {
    Alphabet { letters: Vec<String> },
    Greetings { phrases: Vec<String> },
    Grammar { rules: Vec<String> },
}

impl Store {
    pub fn create_lesson(&self, new: NewLesson) -> Result<Lesson, StoreError> {
        let id = self.next_id(trees::LESSONS)?;
        let lesson = Lesson {
            id,
            title: new.title,
            title_ku: new.title_ku,
            description: new.description,
            description_ku: new.description_ku,
            level: new.level,
            category: new.category,
            content: new.content,
            order: new.order,
            is_active: new.is_active,
        };
        self.lessons
            .insert(keys::id_key(id), Self::serialize(&lesson)?)?;
        Ok(lesson)
    }

    /// Lookup by id, active or not. Absence is a normal `None`, never an error.
    pub fn get_lesson(&self, id: u64) -> Result<Option<Lesson>, StoreError> {
        match self.lessons.get(keys::id_key(id))? {
            Some(raw) => Ok(Some(Self::deserialize(&raw)?)),
            None => Ok(None),
        }
    }

    /// All active lessons in id order.
    pub fn get_all_lessons(&self) -> Result<Vec<Lesson>, StoreError> {
        let mut out = Vec::new();
        for item in self.lessons.iter() {
            let (_, raw) = item?;
            let lesson: Lesson = Self::deserialize(&raw)?;
            if lesson.is_active {
                out.push(lesson);
            }
        }
        Ok(out)
    }

    pub fn get_lessons_by_level(&self, level: LessonLevel) -> Result<Vec<Lesson>, StoreError> {
        let mut out = Vec::new();
        for item in self.lessons.iter() {
            let (_, raw) = item?;
            let lesson: Lesson = Self::deserialize(&raw)?;
            if lesson.is_active && lesson.level == level {
                out.push(lesson);
            }
        }
        Ok(out)
    }
}
