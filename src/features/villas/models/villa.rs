use chrono::{DateTime, Utc};

use crate::core::repository::Keyed;

/// Persisted villa record.
#[derive(Debug, Clone)]
pub struct Villa {
    pub id: i32,
    pub name: String,
    pub details: String,
    pub rate: i64,
    pub occupancy: i32,
    pub sqft: i32,
    pub image_url: String,
    /// Server-relative path of the stored image file, empty when the villa
    /// only carries the placeholder URL.
    pub image_local_path: String,
    pub amenity: String,
    pub created_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
}

impl Keyed for Villa {
    const AUTO_KEY: bool = true;
    const ENTITY: &'static str = "Villa";

    fn key(&self) -> i32 {
        self.id
    }

    fn set_key(&mut self, key: i32) {
        self.id = key;
    }
}
