use serde::{Deserialize, Serialize};

use crate::store::{keys, trees, Store, StoreError};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyItem {
    pub id: u64,
    pub english: String,
    pub kurdish: String,
    pub pronunciation: String,
    /// Free-form grouping ("food", "home", "adjectives", ...), unlike the
    /// closed lesson category set.
    pub category: String,
    pub difficulty: Difficulty,
    pub image_url: Option<String>,
    pub audio_url: Option<String>,
    pub example: Option<String>,
    pub example_ku: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVocabularyItem {
    pub english: String,
    pub kurdish: String,
    pub pronunciation: String,
    pub category: String,
    pub difficulty: Difficulty,
    pub image_url: Option<String>,
    pub audio_url: Option<String>,
    pub example: Option<String>,
    pub example_ku: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Store {
    pub fn create_vocabulary(&self, new: NewVocabularyItem) -> Result<VocabularyItem, StoreError> {
        let id = self.next_id(trees::VOCABULARY)?;
        let item = VocabularyItem {
            id,
            english: new.english,
            kurdish: new.kurdish,
            pronunciation: new.pronunciation,
            category: new.category,
            difficulty: new.difficulty,
            image_url: new.image_url,
            audio_url: new.audio_url,
            example: new.example,
            example_ku: new.example_ku,
            is_active: new.is_active,
        };
        self.vocabulary
            .insert(keys::id_key(id), Self::serialize(&item)?)?;
        Ok(item)
    }

    pub fn get_vocabulary(&self, id: u64) -> Result<Option<VocabularyItem>, StoreError> {
        match self.vocabulary.get(keys::id_key(id))? {
            Some(raw) => Ok(Some(Self::deserialize(&raw)?)),
            None => Ok(None),
        }
    }

    pub fn get_all_vocabulary(&self) -> Result<Vec<VocabularyItem>, StoreError> {
        let mut out = Vec::new();
        for item in self.vocabulary.iter() {
            let (_, raw) = item?;
            let entry: VocabularyItem = Self::deserialize(&raw)?;
            if entry.is_active {
                out.push(entry);
            }
        }
        Ok(out)
    }

    /// Exact, case-sensitive category match over active items. An empty or
    /// unknown category simply matches nothing.
    pub fn get_vocabulary_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<VocabularyItem>, StoreError> {
        let mut out = Vec::new();
        for item in self.vocabulary.iter() {
            let (_, raw) = item?;
            let entry: VocabularyItem = Self::deserialize(&raw)?;
            if entry.is_active && entry.category == category {
                out.push(entry);
            }
        }
        Ok(out)
    }
}
