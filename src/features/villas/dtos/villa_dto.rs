use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::villas::models::Villa;
use crate::shared::constants::DEFAULT_PAGE_NUMBER;

/// Villa as exposed over the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VillaDto {
    pub id: i32,
    pub name: String,
    pub details: String,
    pub rate: i64,
    pub occupancy: i32,
    pub sqft: i32,
    pub image_url: String,
    pub image_local_path: String,
    pub amenity: String,
}

impl From<Villa> for VillaDto {
    fn from(villa: Villa) -> Self {
        Self {
            id: villa.id,
            name: villa.name,
            details: villa.details,
            rate: villa.rate,
            occupancy: villa.occupancy,
            sqft: villa.sqft,
            image_url: villa.image_url,
            image_local_path: villa.image_local_path,
            amenity: villa.amenity,
        }
    }
}

/// Fields accepted when creating a villa (multipart form, image handled
/// separately by the handler).
#[derive(Debug, Clone, Default, Validate, ToSchema)]
pub struct VillaCreateDto {
    #[validate(length(min = 1, max = 30, message = "Name is required and must not exceed 30 characters"))]
    pub name: String,
    pub details: String,
    #[validate(range(min = 1, message = "Rate must be positive"))]
    pub rate: i64,
    #[validate(range(min = 1, message = "Occupancy must be positive"))]
    pub occupancy: i32,
    #[validate(range(min = 1, message = "Sqft must be positive"))]
    pub sqft: i32,
    pub amenity: String,
}

/// Fields accepted when fully replacing a villa.
#[derive(Debug, Clone, Validate, ToSchema)]
pub struct VillaUpdateDto {
    pub id: i32,
    #[validate(length(min = 1, max = 30, message = "Name is required and must not exceed 30 characters"))]
    pub name: String,
    pub details: String,
    #[validate(range(min = 1, message = "Rate must be positive"))]
    pub rate: i64,
    #[validate(range(min = 1, message = "Occupancy must be positive"))]
    pub occupancy: i32,
    #[validate(range(min = 1, message = "Sqft must be positive"))]
    pub sqft: i32,
    pub amenity: String,
}

/// Merge-style partial update document: absent fields keep their stored
/// values.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VillaPatchDto {
    #[validate(length(min = 1, max = 30, message = "Name must be 1-30 characters"))]
    pub name: Option<String>,
    pub details: Option<String>,
    #[validate(range(min = 1, message = "Rate must be positive"))]
    pub rate: Option<i64>,
    #[validate(range(min = 1, message = "Occupancy must be positive"))]
    pub occupancy: Option<i32>,
    #[validate(range(min = 1, message = "Sqft must be positive"))]
    pub sqft: Option<i32>,
    pub amenity: Option<String>,
}

impl VillaPatchDto {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.details.is_none()
            && self.rate.is_none()
            && self.occupancy.is_none()
            && self.sqft.is_none()
            && self.amenity.is_none()
    }
}

/// Query params for the villa list endpoint.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ListVillasQuery {
    /// Equality filter on occupancy
    #[serde(rename = "FilterOccupancy")]
    pub filter_occupancy: Option<i32>,

    /// Case-insensitive substring filter on amenity
    pub search: Option<String>,

    /// 0 (default) returns the full filtered set unpaginated
    #[serde(rename = "pageSize", default)]
    pub page_size: i32,

    /// 1-indexed page number
    #[serde(rename = "pageNumber", default = "default_page_number")]
    pub page_number: i32,
}

fn default_page_number() -> i32 {
    DEFAULT_PAGE_NUMBER
}
