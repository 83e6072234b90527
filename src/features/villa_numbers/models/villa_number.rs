use chrono::{DateTime, Utc};

use crate::core::repository::Keyed;

/// Persisted villa number, a bookable unit keyed by its client-supplied
/// room number and owned by a villa.
#[derive(Debug, Clone)]
pub struct VillaNumber {
    pub villa_no: i32,
    pub villa_id: i32,
    pub special_details: String,
    pub created_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
}

impl Keyed for VillaNumber {
    const AUTO_KEY: bool = false;
    const ENTITY: &'static str = "VillaNumber";

    fn key(&self) -> i32 {
        self.villa_no
    }

    fn set_key(&mut self, key: i32) {
        self.villa_no = key;
    }
}
