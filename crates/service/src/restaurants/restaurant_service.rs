use std::sync::Arc;

use tracing::{error, info, instrument};

use super::conversion::{to_restaurant, to_restaurant_response};
use super::domain::{RestaurantRequest, RestaurantResponse};
use super::repository::RestaurantRepository;
use crate::errors::ServiceError;
use crate::messages;

pub struct RestaurantService<R: RestaurantRepository + ?Sized = dyn RestaurantRepository> {
    repo: Arc<R>,
}

impl<R: RestaurantRepository + ?Sized> RestaurantService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Register a restaurant; an owner cannot hold two with the same name.
    #[instrument(skip(self, request, image), fields(user_id = ?request.user_id, restaurant_name = ?request.restaurant_name))]
    pub async fn add_restaurant(&self, request: RestaurantRequest, image: Option<Vec<u8>>) -> Result<RestaurantResponse, ServiceError> {
        info!("adding restaurant");
        let user_id = request.user_id.ok_or_else(|| ServiceError::Validation(messages::OWNER_ID_REQUIRED.into()))?;
        let name = request
            .restaurant_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .ok_or_else(|| ServiceError::Validation(messages::RESTAURANT_NAME_REQUIRED.into()))?;

        if self.repo.exists_by_user_id_and_restaurant_name_ignore_case(user_id, name).await? {
            error!("duplicate restaurant for owner");
            return Err(ServiceError::already_exists(messages::RESTAURANT_ALREADY_EXISTS));
        }

        let saved = self.repo.save(to_restaurant(&request, image)).await?;
        info!(restaurant_id = ?saved.restaurant_id, "restaurant added");
        Ok(to_restaurant_response(&saved))
    }

    pub async fn get_restaurant_by_id(&self, restaurant_id: i64) -> Result<RestaurantResponse, ServiceError> {
        self.repo
            .find_by_id(restaurant_id)
            .await?
            .map(|r| to_restaurant_response(&r))
            .ok_or_else(|| ServiceError::not_found(messages::RESTAURANT_NOT_FOUND))
    }

    #[instrument(skip(self))]
    pub async fn get_restaurants_by_user_id(&self, user_id: i64) -> Result<Vec<RestaurantResponse>, ServiceError> {
        let rows = self.repo.find_by_user_id(user_id).await?;
        info!(count = rows.len(), "restaurants retrieved");
        Ok(rows.iter().map(to_restaurant_response).collect())
    }

    /// Overwrite the fields present in `request`; the image is kept.
    #[instrument(skip(self, request))]
    pub async fn update_restaurant(&self, restaurant_id: i64, request: RestaurantRequest) -> Result<RestaurantResponse, ServiceError> {
        let Some(mut r) = self.repo.find_by_id(restaurant_id).await? else {
            error!("restaurant not found");
            return Err(ServiceError::not_found(messages::RESTAURANT_NOT_FOUND));
        };
        let RestaurantRequest { user_id, restaurant_name, restaurant_address, contact_number, restaurant_description, opening_hour } = request;
        r.user_id = user_id.or(r.user_id);
        r.restaurant_name = restaurant_name.or(r.restaurant_name);
        r.restaurant_address = restaurant_address.or(r.restaurant_address);
        r.contact_number = contact_number.or(r.contact_number);
        r.restaurant_description = restaurant_description.or(r.restaurant_description);
        r.opening_hour = opening_hour.or(r.opening_hour);

        let updated = self.repo.save(r).await?;
        info!("restaurant updated");
        Ok(to_restaurant_response(&updated))
    }

    #[instrument(skip(self))]
    pub async fn delete_restaurant(&self, restaurant_id: i64) -> Result<(), ServiceError> {
        if !self.repo.exists_by_id(restaurant_id).await? {
            error!("restaurant not found");
            return Err(ServiceError::not_found(messages::RESTAURANT_NOT_FOUND));
        }
        self.repo.delete_by_id(restaurant_id).await?;
        info!("restaurant deleted");
        Ok(())
    }

    pub async fn get_restaurant_image(&self, restaurant_id: i64) -> Result<Vec<u8>, ServiceError> {
        let r = self
            .repo
            .find_by_id(restaurant_id)
            .await?
            .ok_or_else(|| ServiceError::not_found(messages::RESTAURANT_NOT_FOUND))?;
        Ok(r.restaurant_image.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::restaurants::repository::mock::MockRestaurantRepository;

    fn service() -> RestaurantService {
        let repo: Arc<dyn RestaurantRepository> = Arc::new(MockRestaurantRepository::default());
        RestaurantService::new(repo)
    }

    fn request(user_id: i64, name: &str) -> RestaurantRequest {
        RestaurantRequest {
            user_id: Some(user_id),
            restaurant_name: Some(name.into()),
            restaurant_address: Some("1 Main St".into()),
            contact_number: Some("555-0100".into()),
            restaurant_description: None,
            opening_hour: Some("9-22".into()),
        }
    }

    #[tokio::test]
    async fn add_then_get_matches_request() {
        let svc = service();
        let created = svc.add_restaurant(request(7, "Luigi's"), None).await.unwrap();
        let fetched = svc.get_restaurant_by_id(created.restaurant_id.unwrap()).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.restaurant_address.as_deref(), Some("1 Main St"));
        assert!(svc.get_restaurant_image(created.restaurant_id.unwrap()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn owner_cannot_reuse_name() {
        let svc = service();
        svc.add_restaurant(request(7, "Luigi's"), None).await.unwrap();
        let err = svc.add_restaurant(request(7, "LUIGI'S"), None).await.unwrap_err();
        assert_eq!(err.to_string(), "Restaurant already exists");
        assert!(svc.add_restaurant(request(8, "Luigi's"), None).await.is_ok());
        assert_eq!(svc.get_restaurants_by_user_id(7).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_and_delete() {
        let svc = service();
        let id = svc.add_restaurant(request(7, "Luigi's"), Some(vec![9])).await.unwrap().restaurant_id.unwrap();
        let patch = RestaurantRequest { opening_hour: Some("10-23".into()), ..Default::default() };
        let updated = svc.update_restaurant(id, patch).await.unwrap();
        assert_eq!(updated.opening_hour.as_deref(), Some("10-23"));
        assert_eq!(updated.restaurant_name.as_deref(), Some("Luigi's"));
        assert_eq!(svc.get_restaurant_image(id).await.unwrap(), vec![9]);

        svc.delete_restaurant(id).await.unwrap();
        assert!(matches!(svc.delete_restaurant(id).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(svc.update_restaurant(id, RestaurantRequest::default()).await, Err(ServiceError::NotFound(_))));
    }
}
