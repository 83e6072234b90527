use chrono::Utc;

use crate::core::error::{AppError, Result};
use crate::core::repository::Repository;
use crate::features::villa_numbers::dtos::{
    VillaNumberCreateDto, VillaNumberDto, VillaNumberUpdateDto,
};
use crate::features::villa_numbers::models::VillaNumber;
use crate::features::villas::models::Villa;

/// Service for villa number CRUD. Holds a handle on the villa repository to
/// enforce the villa-id foreign key on writes and to embed the owning villa
/// in read results.
pub struct VillaNumberService {
    repo: Repository<VillaNumber>,
    villas: Repository<Villa>,
}

impl VillaNumberService {
    pub fn new(repo: Repository<VillaNumber>, villas: Repository<Villa>) -> Self {
        Self { repo, villas }
    }

    pub async fn list(&self, page_size: i32, page_number: i32) -> Vec<VillaNumberDto> {
        let records = self
            .repo
            .get_all(None::<fn(&VillaNumber) -> bool>, page_size, page_number)
            .await;

        let mut dtos = Vec::with_capacity(records.len());
        for record in records {
            let villa = self.villas.get_one(|v| v.id == record.villa_id).await;
            dtos.push(VillaNumberDto::from_record(record, villa.map(Into::into)));
        }
        dtos
    }

    pub async fn get(&self, villa_no: i32) -> Option<VillaNumberDto> {
        let record = self.repo.get_one(|n| n.villa_no == villa_no).await?;
        let villa = self.villas.get_one(|v| v.id == record.villa_id).await;
        Some(VillaNumberDto::from_record(record, villa.map(Into::into)))
    }

    pub async fn create(&self, dto: VillaNumberCreateDto) -> Result<VillaNumberDto> {
        self.check_villa_exists(dto.villa_id).await?;

        let now = Utc::now();
        let record = self
            .repo
            .create(VillaNumber {
                villa_no: dto.villa_no,
                villa_id: dto.villa_id,
                special_details: dto.special_details,
                created_date: now,
                updated_date: now,
            })
            .await?;

        tracing::info!(villa_no = record.villa_no, "Villa number created");
        let villa = self.villas.get_one(|v| v.id == record.villa_id).await;
        Ok(VillaNumberDto::from_record(record, villa.map(Into::into)))
    }

    /// Full replace keyed by `villa_no`; the room number itself is immutable.
    pub async fn update(&self, dto: VillaNumberUpdateDto) -> Result<VillaNumberDto> {
        self.check_villa_exists(dto.villa_id).await?;

        let existing = self
            .repo
            .get_one(|n| n.villa_no == dto.villa_no)
            .await
            .ok_or_else(|| AppError::NotFound(format!("VillaNumber {} not found", dto.villa_no)))?;

        let record = self
            .repo
            .update(VillaNumber {
                villa_no: dto.villa_no,
                villa_id: dto.villa_id,
                special_details: dto.special_details,
                created_date: existing.created_date,
                updated_date: Utc::now(),
            })
            .await?;

        let villa = self.villas.get_one(|v| v.id == record.villa_id).await;
        Ok(VillaNumberDto::from_record(record, villa.map(Into::into)))
    }

    pub async fn remove(&self, villa_no: i32) -> Result<Option<VillaNumberDto>> {
        let Some(record) = self.repo.get_one(|n| n.villa_no == villa_no).await else {
            return Ok(None);
        };
        self.repo.remove(villa_no).await?;
        tracing::info!(villa_no, "Villa number deleted");
        Ok(Some(VillaNumberDto::from_record(record, None)))
    }

    async fn check_villa_exists(&self, villa_id: i32) -> Result<()> {
        if self.villas.get_one(|v| v.id == villa_id).await.is_none() {
            return Err(AppError::BadRequest("Villa ID is invalid".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::constants::PLACEHOLDER_IMAGE_URL;

    async fn seed_villa(villas: &Repository<Villa>, name: &str) -> Villa {
        let now = Utc::now();
        villas
            .create(Villa {
                id: 0,
                name: name.to_string(),
                details: String::new(),
                rate: 100,
                occupancy: 4,
                sqft: 500,
                image_url: PLACEHOLDER_IMAGE_URL.to_string(),
                image_local_path: String::new(),
                amenity: String::new(),
                created_date: now,
                updated_date: now,
            })
            .await
            .unwrap()
    }

    fn create_dto(villa_no: i32, villa_id: i32) -> VillaNumberCreateDto {
        VillaNumberCreateDto {
            villa_no,
            villa_id,
            special_details: "corner unit".to_string(),
        }
    }

    async fn service_with_villa() -> (VillaNumberService, Villa) {
        let villas = Repository::new();
        let villa = seed_villa(&villas, "A").await;
        (VillaNumberService::new(Repository::new(), villas), villa)
    }

    #[tokio::test]
    async fn create_keeps_client_supplied_number_and_embeds_villa() {
        let (svc, villa) = service_with_villa().await;

        let dto = svc.create(create_dto(101, villa.id)).await.unwrap();
        assert_eq!(dto.villa_no, 101);
        assert_eq!(dto.villa_id, villa.id);
        assert_eq!(dto.villa.as_ref().unwrap().name, "A");
    }

    #[tokio::test]
    async fn create_rejects_unknown_villa_id() {
        let (svc, _) = service_with_villa().await;

        let err = svc.create(create_dto(101, 9999)).await.unwrap_err();
        match err {
            AppError::BadRequest(msg) => assert_eq!(msg, "Villa ID is invalid"),
            other => panic!("expected BadRequest, got {:?}", other),
        }
        assert!(svc.get(101).await.is_none());
    }

    #[tokio::test]
    async fn create_rejects_duplicate_number() {
        let (svc, villa) = service_with_villa().await;
        svc.create(create_dto(101, villa.id)).await.unwrap();

        let err = svc.create(create_dto(101, villa.id)).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn update_checks_fk_before_existence() {
        let (svc, villa) = service_with_villa().await;
        svc.create(create_dto(101, villa.id)).await.unwrap();

        let err = svc
            .update(VillaNumberUpdateDto {
                villa_no: 101,
                villa_id: 9999,
                special_details: String::new(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn update_missing_number_is_not_found() {
        let (svc, villa) = service_with_villa().await;

        let err = svc
            .update(VillaNumberUpdateDto {
                villa_no: 500,
                villa_id: villa.id,
                special_details: String::new(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn remove_returns_deleted_record() {
        let (svc, villa) = service_with_villa().await;
        svc.create(create_dto(101, villa.id)).await.unwrap();

        let removed = svc.remove(101).await.unwrap().unwrap();
        assert_eq!(removed.villa_no, 101);
        assert!(svc.get(101).await.is_none());
        assert!(svc.remove(101).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_orders_by_number() {
        let (svc, villa) = service_with_villa().await;
        svc.create(create_dto(202, villa.id)).await.unwrap();
        svc.create(create_dto(101, villa.id)).await.unwrap();

        let numbers = svc.list(0, 1).await;
        assert_eq!(numbers.len(), 2);
        assert_eq!(numbers[0].villa_no, 101);
        assert_eq!(numbers[1].villa_no, 202);
    }
}
