use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::SpicyLevel,
};

const LEVELS: [(&str, &str, i32, i64); 5] = [
    ("1", "Normal", 1, 0),
    ("2", "Pedas", 2, 2000),
    ("3", "Extra Pedas", 3, 4000),
    ("4", "Gila", 4, 6000),
    ("5", "Mati Rasa", 5, 8000),
];

/// Fixed menu of spiciness levels, shared for the life of the process.
#[derive(Clone)]
pub struct SpicyLevelService {
    levels: Arc<[SpicyLevel]>,
}

impl Default for SpicyLevelService {
    fn default() -> Self {
        Self::new()
    }
}

impl SpicyLevelService {
    pub fn new() -> Self {
        let levels = LEVELS
            .iter()
            .map(|&(id, name, level, price)| SpicyLevel {
                id: id.to_string(),
                name: name.to_string(),
                level,
                price,
            })
            .collect();
        Self { levels }
    }

    pub fn list(&self) -> Vec<SpicyLevel> {
        self.levels.to_vec()
    }

    pub fn get(&self, id: &str) -> AppResult<SpicyLevel> {
        self.levels
            .iter()
            .find(|level| level.id == id)
            .cloned()
            .ok_or(AppError::NotFound("Spicy level not found"))
    }
}
