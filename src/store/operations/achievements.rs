use serde::{Deserialize, Serialize};

use crate::store::{keys, trees, Store, StoreError};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: u64,
    pub name: String,
    pub name_ku: String,
    pub description: String,
    pub description_ku: String,
    /// Icon reference the frontend resolves (e.g. "fas fa-fire").
    pub icon: String,
    pub requirement: AchievementRequirement,
    pub is_active: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAchievement {
    pub name: String,
    pub name_ku: String,
    pub description: String,
    pub description_ku: String,
    pub icon: String,
    pub requirement: AchievementRequirement,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// Unlock criterion, one variant per known requirement kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AchievementRequirement {
    LessonsCompleted { count: u32 },
    VocabularyLearned { count: u32 },
    DailyStreak { count: u32 },
}

impl Store {
    pub fn create_achievement(&self, new: NewAchievement) -> Result<Achievement, StoreError> {
        let id = self.next_id(trees::ACHIEVEMENTS)?;
        let achievement = Achievement {
            id,
            name: new.name,
            name_ku: new.name_ku,
            description: new.description,
            description_ku: new.description_ku,
            icon: new.icon,
            requirement: new.requirement,
            is_active: new.is_active,
        };
        self.achievements
            .insert(keys::id_key(id), Self::serialize(&achievement)?)?;
        Ok(achievement)
    }

    pub fn get_achievement(&self, id: u64) -> Result<Option<Achievement>, StoreError> {
        match self.achievements.get(keys::id_key(id))? {
            Some(raw) => Ok(Some(Self::deserialize(&raw)?)),
            None => Ok(None),
        }
    }

    pub fn get_all_achievements(&self) -> Result<Vec<Achievement>, StoreError> {
        let mut out = Vec::new();
        for item in self.achievements.iter() {
            let (_, raw) = item?;
            let achievement: Achievement = Self::deserialize(&raw)?;
            if achievement.is_active {
                out.push(achievement);
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requirement_serializes_with_snake_case_tag() {
        let req = AchievementRequirement::LessonsCompleted { count: 1 };
        let json = serde_json::to_value(req).unwrap();
        assert_eq!(json["type"], "lessons_completed");
        assert_eq!(json["count"], 1);

        let parsed: AchievementRequirement =
            serde_json::from_value(serde_json::json!({"type": "daily_streak", "count": 15}))
                .unwrap();
        assert_eq!(parsed, AchievementRequirement::DailyStreak { count: 15 });
    }

    #[test]
    fn create_and_list_active() {
        let store = Store::open_temporary().unwrap();
        let a = store
            .create_achievement(NewAchievement {
                name: "First Steps".to_string(),
                name_ku: "یەکەم هەنگاو".to_string(),
                description: "Complete your first lesson".to_string(),
                description_ku: "یەکەم وانا خۆ تەواو بکە".to_string(),
                icon: "fas fa-baby".to_string(),
                requirement: AchievementRequirement::LessonsCompleted { count: 1 },
                is_active: true,
            })
            .unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(store.get_all_achievements().unwrap().len(), 1);
        assert!(store.get_achievement(2).unwrap().is_none());
    }
}
