use chrono::Utc;

use crate::core::error::{AppError, Result};
use crate::core::repository::Repository;
use crate::features::villas::dtos::{VillaCreateDto, VillaPatchDto, VillaUpdateDto};
use crate::features::villas::models::Villa;
use crate::shared::constants::PLACEHOLDER_IMAGE_URL;

/// Service for villa CRUD. Image file placement is a handler-side
/// collaborator; this service only records the resulting URL and path.
pub struct VillaService {
    repo: Repository<Villa>,
}

impl VillaService {
    pub fn new(repo: Repository<Villa>) -> Self {
        Self { repo }
    }

    /// List villas, optionally filtered by exact occupancy (repository
    /// filter) and a case-insensitive amenity substring (applied in-memory
    /// after retrieval, matching the storage contract).
    pub async fn list(
        &self,
        occupancy: Option<i32>,
        search: Option<&str>,
        page_size: i32,
        page_number: i32,
    ) -> Vec<Villa> {
        let villas = match occupancy {
            Some(occupancy) if occupancy > 0 => {
                self.repo
                    .get_all(
                        Some(move |v: &Villa| v.occupancy == occupancy),
                        page_size,
                        page_number,
                    )
                    .await
            }
            _ => {
                self.repo
                    .get_all(None::<fn(&Villa) -> bool>, page_size, page_number)
                    .await
            }
        };

        match search {
            Some(search) if !search.is_empty() => {
                let needle = search.to_lowercase();
                villas
                    .into_iter()
                    .filter(|v| v.amenity.to_lowercase().contains(&needle))
                    .collect()
            }
            _ => villas,
        }
    }

    pub async fn get(&self, id: i32) -> Result<Option<Villa>> {
        Ok(self.repo.get_one(|v| v.id == id).await)
    }

    pub async fn create(&self, dto: VillaCreateDto) -> Result<Villa> {
        let now = Utc::now();
        let villa = Villa {
            id: 0,
            name: dto.name,
            details: dto.details,
            rate: dto.rate,
            occupancy: dto.occupancy,
            sqft: dto.sqft,
            image_url: PLACEHOLDER_IMAGE_URL.to_string(),
            image_local_path: String::new(),
            amenity: dto.amenity,
            created_date: now,
            updated_date: now,
        };

        let villa = self.repo.create(villa).await?;
        tracing::info!(villa_id = villa.id, "Villa created");
        Ok(villa)
    }

    /// Full replace keyed by `dto.id`; preserves the creation timestamp and
    /// the stored image fields (the handler rewrites those separately when an
    /// image is attached or dropped).
    pub async fn update(&self, dto: VillaUpdateDto) -> Result<Villa> {
        let existing = self
            .repo
            .get_one(|v| v.id == dto.id)
            .await
            .ok_or_else(|| AppError::NotFound(format!("Villa {} not found", dto.id)))?;

        let villa = Villa {
            id: dto.id,
            name: dto.name,
            details: dto.details,
            rate: dto.rate,
            occupancy: dto.occupancy,
            sqft: dto.sqft,
            image_url: existing.image_url,
            image_local_path: existing.image_local_path,
            amenity: dto.amenity,
            created_date: existing.created_date,
            updated_date: Utc::now(),
        };

        self.repo.update(villa).await
    }

    /// Apply a merge-style patch document; absent fields keep their values.
    pub async fn patch(&self, id: i32, dto: VillaPatchDto) -> Result<Option<Villa>> {
        let Some(mut villa) = self.repo.get_one(|v| v.id == id).await else {
            return Ok(None);
        };

        if let Some(name) = dto.name {
            villa.name = name;
        }
        if let Some(details) = dto.details {
            villa.details = details;
        }
        if let Some(rate) = dto.rate {
            villa.rate = rate;
        }
        if let Some(occupancy) = dto.occupancy {
            villa.occupancy = occupancy;
        }
        if let Some(sqft) = dto.sqft {
            villa.sqft = sqft;
        }
        if let Some(amenity) = dto.amenity {
            villa.amenity = amenity;
        }
        villa.updated_date = Utc::now();

        Ok(Some(self.repo.update(villa).await?))
    }

    /// Record the image URL and local path produced by the image store.
    pub async fn set_image(&self, id: i32, url: String, local_path: String) -> Result<Villa> {
        let mut villa = self
            .repo
            .get_one(|v| v.id == id)
            .await
            .ok_or_else(|| AppError::NotFound(format!("Villa {} not found", id)))?;
        villa.image_url = url;
        villa.image_local_path = local_path;
        villa.updated_date = Utc::now();
        self.repo.update(villa).await
    }

    /// Remove the villa, returning the deleted record so the caller can clean
    /// up its image file.
    pub async fn remove(&self, id: i32) -> Result<Option<Villa>> {
        let Some(villa) = self.repo.get_one(|v| v.id == id).await else {
            return Ok(None);
        };
        self.repo.remove(id).await?;
        tracing::info!(villa_id = id, "Villa deleted");
        Ok(Some(villa))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_dto(name: &str, occupancy: i32, amenity: &str) -> VillaCreateDto {
        VillaCreateDto {
            name: name.to_string(),
            details: "details".to_string(),
            rate: 100,
            occupancy,
            sqft: 500,
            amenity: amenity.to_string(),
        }
    }

    fn service() -> VillaService {
        VillaService::new(Repository::new())
    }

    #[tokio::test]
    async fn create_assigns_id_and_round_trips_fields() {
        let svc = service();
        let villa = svc.create(create_dto("Villa A", 4, "pool")).await.unwrap();

        assert!(villa.id > 0);
        assert_eq!(villa.name, "Villa A");
        assert_eq!(villa.rate, 100);
        assert_eq!(villa.occupancy, 4);
        assert_eq!(villa.sqft, 500);
        assert_eq!(villa.image_url, PLACEHOLDER_IMAGE_URL);
    }

    #[tokio::test]
    async fn list_filters_occupancy_and_orders_by_id() {
        let svc = service();
        svc.create(create_dto("A", 4, "pool")).await.unwrap();
        svc.create(create_dto("B", 2, "spa")).await.unwrap();
        svc.create(create_dto("C", 4, "gym")).await.unwrap();

        let filtered = svc.list(Some(4), None, 0, 1).await;
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|v| v.occupancy == 4));
        assert!(filtered[0].id < filtered[1].id);
    }

    #[tokio::test]
    async fn search_matches_amenity_case_insensitively() {
        let svc = service();
        svc.create(create_dto("A", 4, "Private Pool")).await.unwrap();
        svc.create(create_dto("B", 4, "Spa")).await.unwrap();

        let found = svc.list(None, Some("POOL"), 0, 1).await;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "A");
    }

    #[tokio::test]
    async fn update_preserves_created_date_and_image() {
        let svc = service();
        let created = svc.create(create_dto("A", 4, "pool")).await.unwrap();
        svc.set_image(created.id, "http://img/1.png".into(), "wwwroot/ProductImage/1.png".into())
            .await
            .unwrap();

        let updated = svc
            .update(VillaUpdateDto {
                id: created.id,
                name: "A2".to_string(),
                details: "new details".to_string(),
                rate: 200,
                occupancy: 6,
                sqft: 800,
                amenity: "spa".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(updated.name, "A2");
        assert_eq!(updated.created_date, created.created_date);
        assert_eq!(updated.image_url, "http://img/1.png");
        assert!(updated.updated_date >= created.updated_date);
    }

    #[tokio::test]
    async fn update_missing_villa_is_not_found() {
        let svc = service();
        let err = svc
            .update(VillaUpdateDto {
                id: 9999,
                name: "X".to_string(),
                details: String::new(),
                rate: 1,
                occupancy: 1,
                sqft: 1,
                amenity: String::new(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn patch_merges_only_present_fields() {
        let svc = service();
        let villa = svc.create(create_dto("A", 4, "pool")).await.unwrap();

        let patched = svc
            .patch(
                villa.id,
                VillaPatchDto {
                    rate: Some(250),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(patched.rate, 250);
        assert_eq!(patched.name, "A");
        assert_eq!(patched.occupancy, 4);
    }

    #[tokio::test]
    async fn remove_missing_id_leaves_store_unchanged() {
        let svc = service();
        svc.create(create_dto("A", 4, "pool")).await.unwrap();

        assert!(svc.remove(9999).await.unwrap().is_none());
        assert_eq!(svc.list(None, None, 0, 1).await.len(), 1);
    }

    #[tokio::test]
    async fn remove_returns_deleted_record() {
        let svc = service();
        let villa = svc.create(create_dto("A", 4, "pool")).await.unwrap();

        let removed = svc.remove(villa.id).await.unwrap().unwrap();
        assert_eq!(removed.id, villa.id);
        assert!(svc.get(villa.id).await.unwrap().is_none());
    }
}
