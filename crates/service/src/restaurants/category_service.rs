use std::sync::Arc;

use tracing::{error, info, instrument};

use super::conversion::{to_food_category, to_food_category_response};
use super::domain::{FoodCategoryRequest, FoodCategoryResponse};
use super::repository::FoodCategoryRepository;
use crate::errors::ServiceError;
use crate::messages;

/// Food category workflows, independent of the web framework.
pub struct FoodCategoryService<R: FoodCategoryRepository + ?Sized = dyn FoodCategoryRepository> {
    repo: Arc<R>,
}

impl<R: FoodCategoryRepository + ?Sized> FoodCategoryService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Add a category unless the restaurant already has one with the same
    /// name, compared case-insensitively.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::restaurants::FoodCategoryService;
    /// use service::restaurants::domain::FoodCategoryRequest;
    /// use service::restaurants::repository::mock::MockFoodCategoryRepository;
    /// let svc = FoodCategoryService::new(Arc::new(MockFoodCategoryRepository::default()));
    /// let req = FoodCategoryRequest { restaurant_id: Some(1), category_name: Some("Drinks".into()) };
    /// let created = tokio_test::block_on(svc.add_food_category(req)).unwrap();
    /// assert_eq!(created.category_name.as_deref(), Some("Drinks"));
    /// ```
    #[instrument(skip(self, request), fields(restaurant_id = ?request.restaurant_id, category_name = ?request.category_name))]
    pub async fn add_food_category(&self, request: FoodCategoryRequest) -> Result<FoodCategoryResponse, ServiceError> {
        info!("adding food category");
        let restaurant_id = request.restaurant_id.ok_or_else(|| ServiceError::Validation(messages::RESTAURANT_ID_REQUIRED.into()))?;
        let name = request
            .category_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .ok_or_else(|| ServiceError::Validation(messages::CATEGORY_NAME_REQUIRED.into()))?;

        if self.repo.exists_by_restaurant_id_and_category_name_ignore_case(restaurant_id, name).await? {
            error!("duplicate category for restaurant");
            return Err(ServiceError::already_exists(messages::CATEGORY_ALREADY_EXISTS));
        }

        let saved = self.repo.save(to_food_category(&request)).await?;
        info!(category_id = ?saved.category_id, "food category added");
        Ok(to_food_category_response(&saved))
    }

    #[instrument(skip(self))]
    pub async fn delete_food_category(&self, category_id: i64) -> Result<(), ServiceError> {
        if !self.repo.exists_by_id(category_id).await? {
            error!("food category not found");
            return Err(ServiceError::not_found(messages::CATEGORY_NOT_FOUND));
        }
        self.repo.delete_by_id(category_id).await?;
        info!("food category deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn get_all_categories_by_restaurant_id(&self, restaurant_id: i64) -> Result<Vec<FoodCategoryResponse>, ServiceError> {
        let categories = self.repo.find_by_restaurant_id(restaurant_id).await?;
        let out: Vec<_> = categories.iter().map(to_food_category_response).collect();
        info!(count = out.len(), "food categories retrieved");
        Ok(out)
    }

    /// Rename a category. Uniqueness is left to the store.
    #[instrument(skip(self))]
    pub async fn update_category_name(&self, category_id: i64, new_name: &str) -> Result<FoodCategoryResponse, ServiceError> {
        if new_name.trim().is_empty() {
            return Err(ServiceError::Validation(messages::CATEGORY_NAME_REQUIRED.into()));
        }
        let Some(mut category) = self.repo.find_by_id(category_id).await? else {
            error!("food category not found");
            return Err(ServiceError::not_found(messages::CATEGORY_NOT_FOUND));
        };
        category.category_name = Some(new_name.to_string());
        let updated = self.repo.save(category).await?;
        info!("category name updated");
        Ok(to_food_category_response(&updated))
    }

    pub async fn get_food_category_by_id(&self, category_id: i64) -> Result<FoodCategoryResponse, ServiceError> {
        self.repo
            .find_by_id(category_id)
            .await?
            .map(|c| to_food_category_response(&c))
            .ok_or_else(|| ServiceError::not_found(messages::category_not_found_with_id(category_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::restaurants::repository::mock::MockFoodCategoryRepository;

    fn service() -> (FoodCategoryService, Arc<MockFoodCategoryRepository>) {
        let repo = Arc::new(MockFoodCategoryRepository::default());
        let shared: Arc<dyn FoodCategoryRepository> = repo.clone();
        (FoodCategoryService::new(shared), repo)
    }

    fn request(restaurant_id: i64, name: &str) -> FoodCategoryRequest {
        FoodCategoryRequest { restaurant_id: Some(restaurant_id), category_name: Some(name.into()) }
    }

    #[tokio::test]
    async fn add_returns_request_fields_and_persists() {
        let (svc, repo) = service();
        let created = svc.add_food_category(request(1, "Drinks")).await.unwrap();
        assert_eq!(created.restaurant_id, Some(1));
        assert_eq!(created.category_name.as_deref(), Some("Drinks"));
        assert!(repo.exists_by_restaurant_id_and_category_name_ignore_case(1, "Drinks").await.unwrap());
    }

    #[tokio::test]
    async fn same_name_under_other_restaurant_is_allowed() {
        let (svc, _) = service();
        svc.add_food_category(request(1, "Drinks")).await.unwrap();
        assert!(svc.add_food_category(request(2, "drinks")).await.is_ok());
    }

    #[tokio::test]
    async fn missing_fields_are_rejected_before_any_write() {
        let (svc, repo) = service();
        let err = svc.add_food_category(FoodCategoryRequest { restaurant_id: Some(1), category_name: None }).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        let err = svc.add_food_category(FoodCategoryRequest { restaurant_id: None, category_name: Some("x".into()) }).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert!(repo.find_by_restaurant_id(1).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_ids_are_not_found() {
        let (svc, repo) = service();
        let kept = svc.add_food_category(request(1, "Drinks")).await.unwrap();
        let before = repo.find_by_restaurant_id(1).await.unwrap();

        assert!(matches!(svc.delete_food_category(42).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(svc.update_category_name(42, "x").await, Err(ServiceError::NotFound(_))));
        assert!(matches!(svc.get_food_category_by_id(42).await, Err(ServiceError::NotFound(_))));

        assert_eq!(repo.find_by_restaurant_id(1).await.unwrap(), before);
        assert!(!repo.exists_by_restaurant_id_and_category_name_ignore_case(1, "x").await.unwrap());
        let fetched = svc.get_food_category_by_id(kept.category_id.unwrap()).await.unwrap();
        assert_eq!(fetched.category_name.as_deref(), Some("Drinks"));
    }

    #[tokio::test]
    async fn category_lifecycle() {
        let (svc, _) = service();
        let created = svc.add_food_category(request(1, "Drinks")).await.unwrap();
        let id = created.category_id.unwrap();

        let dup = svc.add_food_category(request(1, "drinks")).await.unwrap_err();
        assert!(matches!(dup, ServiceError::AlreadyExists(ref m) if m == "Category already exists"));

        let listed = svc.get_all_categories_by_restaurant_id(1).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].category_name.as_deref(), Some("Drinks"));

        let renamed = svc.update_category_name(id, "Beverages").await.unwrap();
        assert_eq!(renamed.category_name.as_deref(), Some("Beverages"));

        svc.delete_food_category(id).await.unwrap();
        let again = svc.delete_food_category(id).await.unwrap_err();
        assert_eq!(again.to_string(), "Food category not found");

        let get = svc.get_food_category_by_id(id).await.unwrap_err();
        assert_eq!(get.to_string(), format!("Food Category not found with id {id}"));
    }

    #[tokio::test]
    async fn rename_onto_existing_name_is_rejected_by_store() {
        let (svc, _) = service();
        svc.add_food_category(request(1, "Drinks")).await.unwrap();
        let snacks = svc.add_food_category(request(1, "Snacks")).await.unwrap();
        let err = svc.update_category_name(snacks.category_id.unwrap(), "DRINKS").await.unwrap_err();
        assert!(matches!(err, ServiceError::AlreadyExists(_)));
        let unchanged = svc.get_food_category_by_id(snacks.category_id.unwrap()).await.unwrap();
        assert_eq!(unchanged.category_name.as_deref(), Some("Snacks"));
    }
}
