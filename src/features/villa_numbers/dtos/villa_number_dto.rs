use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::villa_numbers::models::VillaNumber;
use crate::features::villas::dtos::VillaDto;

/// Villa number as exposed over the API. The owning villa is embedded so
/// list views need no second request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VillaNumberDto {
    pub villa_no: i32,
    pub villa_id: i32,
    pub special_details: String,
    pub villa: Option<VillaDto>,
}

impl VillaNumberDto {
    pub fn from_record(record: VillaNumber, villa: Option<VillaDto>) -> Self {
        Self {
            villa_no: record.villa_no,
            villa_id: record.villa_id,
            special_details: record.special_details,
            villa,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VillaNumberCreateDto {
    #[validate(range(min = 1, message = "VillaNo must be positive"))]
    pub villa_no: i32,
    #[validate(range(min = 1, message = "VillaId must be positive"))]
    pub villa_id: i32,
    #[serde(default)]
    pub special_details: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VillaNumberUpdateDto {
    #[validate(range(min = 1, message = "VillaNo must be positive"))]
    pub villa_no: i32,
    #[validate(range(min = 1, message = "VillaId must be positive"))]
    pub villa_id: i32,
    #[serde(default)]
    pub special_details: String,
}
