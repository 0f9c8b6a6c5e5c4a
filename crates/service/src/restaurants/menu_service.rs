use std::sync::Arc;

use tracing::{error, info, instrument};

use super::conversion::{to_restaurant_menu, to_restaurant_menu_response};
use super::domain::{RestaurantMenuRequest, RestaurantMenuResponse};
use super::repository::{FoodCategoryRepository, RestaurantMenuRepository};
use crate::errors::ServiceError;
use crate::messages;

/// Menu item workflows. Holds the category repository for by-category lookups.
pub struct RestaurantMenuService<
    M: RestaurantMenuRepository + ?Sized = dyn RestaurantMenuRepository,
    C: FoodCategoryRepository + ?Sized = dyn FoodCategoryRepository,
> {
    repo: Arc<M>,
    categories: Arc<C>,
}

fn validate_price(price: Option<f64>) -> Result<(), ServiceError> {
    match price {
        // NaN fails the comparison too
        Some(p) if !(p >= 0.0) => Err(ServiceError::Validation(messages::INVALID_PRICE.into())),
        _ => Ok(()),
    }
}

impl<M, C> RestaurantMenuService<M, C>
where
    M: RestaurantMenuRepository + ?Sized,
    C: FoodCategoryRepository + ?Sized,
{
    pub fn new(repo: Arc<M>, categories: Arc<C>) -> Self { Self { repo, categories } }

    #[instrument(skip(self, request, image), fields(restaurant_id = ?request.restaurant_id, item_name = ?request.item_name))]
    pub async fn add_food_item(&self, request: RestaurantMenuRequest, image: Option<Vec<u8>>) -> Result<RestaurantMenuResponse, ServiceError> {
        info!("adding food item");
        let restaurant_id = request.restaurant_id.ok_or_else(|| ServiceError::Validation(messages::RESTAURANT_ID_REQUIRED.into()))?;
        let name = request
            .item_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .ok_or_else(|| ServiceError::Validation(messages::FOOD_ITEM_NAME_REQUIRED.into()))?;
        validate_price(request.price)?;

        if self.repo.exists_by_restaurant_id_and_item_name_ignore_case(restaurant_id, name).await? {
            error!("duplicate food item for restaurant");
            return Err(ServiceError::already_exists(messages::FOOD_ITEM_ALREADY_EXISTS));
        }

        let saved = self.repo.save(to_restaurant_menu(&request, image)).await?;
        info!(item_id = ?saved.item_id, "food item added");
        Ok(to_restaurant_menu_response(&saved))
    }

    #[instrument(skip(self))]
    pub async fn delete_food_item(&self, item_id: i64) -> Result<(), ServiceError> {
        if !self.repo.exists_by_id(item_id).await? {
            error!("food item not found");
            return Err(ServiceError::not_found(messages::FOOD_ITEM_NOT_FOUND));
        }
        self.repo.delete_by_id(item_id).await?;
        info!("food item deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn get_food_items_by_restaurant_id(&self, restaurant_id: i64) -> Result<Vec<RestaurantMenuResponse>, ServiceError> {
        let items = self.repo.find_by_restaurant_id(restaurant_id).await?;
        let out: Vec<_> = items.iter().map(to_restaurant_menu_response).collect();
        info!(count = out.len(), "food items retrieved");
        Ok(out)
    }

    #[instrument(skip(self))]
    pub async fn get_food_items_by_category_id(&self, category_id: i64) -> Result<Vec<RestaurantMenuResponse>, ServiceError> {
        if !self.categories.exists_by_id(category_id).await? {
            error!("category not found");
            return Err(ServiceError::not_found(messages::MENU_CATEGORY_NOT_FOUND));
        }
        let items = self.repo.find_by_category_id(category_id).await?;
        info!(count = items.len(), "food items retrieved");
        Ok(items.iter().map(to_restaurant_menu_response).collect())
    }

    /// Overwrite the fields present in `request`; absent fields and the
    /// stored image are kept.
    #[instrument(skip(self, request))]
    pub async fn update_restaurant_menu(&self, item_id: i64, request: RestaurantMenuRequest) -> Result<RestaurantMenuResponse, ServiceError> {
        validate_price(request.price)?;
        let Some(mut item) = self.repo.find_by_id(item_id).await? else {
            error!("food item not found");
            return Err(ServiceError::not_found(messages::FOOD_ITEM_NOT_FOUND));
        };
        let RestaurantMenuRequest { item_name, price, description, veg_non_veg, category_id, restaurant_id } = request;
        item.item_name = item_name.or(item.item_name);
        item.price = price.or(item.price);
        item.description = description.or(item.description);
        item.veg_non_veg = veg_non_veg.or(item.veg_non_veg);
        item.category_id = category_id.or(item.category_id);
        item.restaurant_id = restaurant_id.or(item.restaurant_id);

        let updated = self.repo.save(item).await?;
        info!("food item updated");
        Ok(to_restaurant_menu_response(&updated))
    }

    pub async fn get_food_item_by_id(&self, item_id: i64) -> Result<RestaurantMenuResponse, ServiceError> {
        self.repo
            .find_by_id(item_id)
            .await?
            .map(|i| to_restaurant_menu_response(&i))
            .ok_or_else(|| ServiceError::not_found(messages::FOOD_ITEM_NOT_FOUND))
    }

    /// Stored image bytes; empty when the item has none.
    pub async fn get_food_item_image(&self, item_id: i64) -> Result<Vec<u8>, ServiceError> {
        let item = self.repo.find_by_id(item_id).await?.ok_or_else(|| ServiceError::not_found(messages::FOOD_ITEM_NOT_FOUND))?;
        Ok(item.image.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::restaurants::domain::FoodCategory;
    use crate::restaurants::repository::mock::{MockFoodCategoryRepository, MockRestaurantMenuRepository};

    struct Fixture {
        svc: RestaurantMenuService,
        menu: Arc<MockRestaurantMenuRepository>,
        categories: Arc<MockFoodCategoryRepository>,
    }

    fn fixture() -> Fixture {
        let menu = Arc::new(MockRestaurantMenuRepository::default());
        let categories = Arc::new(MockFoodCategoryRepository::default());
        let m: Arc<dyn RestaurantMenuRepository> = menu.clone();
        let c: Arc<dyn FoodCategoryRepository> = categories.clone();
        Fixture { svc: RestaurantMenuService::new(m, c), menu, categories }
    }

    fn pizza(price: f64) -> RestaurantMenuRequest {
        RestaurantMenuRequest {
            item_name: Some("Pizza".into()),
            price: Some(price),
            description: Some("cheese".into()),
            veg_non_veg: Some(true),
            category_id: Some(3),
            restaurant_id: Some(1),
        }
    }

    #[tokio::test]
    async fn add_keeps_image_out_of_response() {
        let f = fixture();
        let created = f.svc.add_food_item(pizza(9.5), Some(vec![0xff, 0xd8])).await.unwrap();
        assert_eq!(created.item_name.as_deref(), Some("Pizza"));
        assert_eq!(created.price, Some(9.5));
        let id = created.item_id.unwrap();
        assert_eq!(f.svc.get_food_item_image(id).await.unwrap(), vec![0xff, 0xd8]);
    }

    #[tokio::test]
    async fn negative_price_is_rejected_without_write() {
        let f = fixture();
        let err = f.svc.add_food_item(pizza(-1.0), None).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ref m) if m == messages::INVALID_PRICE));
        assert!(f.menu.find_by_restaurant_id(1).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn duplicate_name_ignores_case() {
        let f = fixture();
        f.svc.add_food_item(pizza(9.5), None).await.unwrap();
        let mut again = pizza(5.0);
        again.item_name = Some("PIZZA".into());
        let err = f.svc.add_food_item(again, None).await.unwrap_err();
        assert_eq!(err.to_string(), "Food item already exists");
    }

    #[tokio::test]
    async fn by_category_requires_existing_category() {
        let f = fixture();
        let err = f.svc.get_food_items_by_category_id(3).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(ref m) if m == "Category not found"));

        let cat = f
            .categories
            .save(FoodCategory { category_id: None, restaurant_id: Some(1), category_name: Some("Mains".into()) })
            .await
            .unwrap();
        let cid = cat.category_id.unwrap();
        let mut req = pizza(9.5);
        req.category_id = Some(cid);
        f.svc.add_food_item(req, None).await.unwrap();
        assert_eq!(f.svc.get_food_items_by_category_id(cid).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_merges_present_fields() {
        let f = fixture();
        let id = f.svc.add_food_item(pizza(9.5), Some(vec![1])).await.unwrap().item_id.unwrap();
        let patch = RestaurantMenuRequest { price: Some(11.0), ..Default::default() };
        let updated = f.svc.update_restaurant_menu(id, patch).await.unwrap();
        assert_eq!(updated.price, Some(11.0));
        assert_eq!(updated.item_name.as_deref(), Some("Pizza"));
        assert_eq!(f.svc.get_food_item_image(id).await.unwrap(), vec![1]);

        let bad = RestaurantMenuRequest { price: Some(-0.5), ..Default::default() };
        assert!(matches!(f.svc.update_restaurant_menu(id, bad).await, Err(ServiceError::Validation(_))));
    }

    #[tokio::test]
    async fn rename_onto_existing_name_is_rejected_by_store() {
        let f = fixture();
        f.svc.add_food_item(pizza(9.5), None).await.unwrap();
        let mut pasta = pizza(8.0);
        pasta.item_name = Some("Pasta".into());
        let pasta_id = f.svc.add_food_item(pasta, None).await.unwrap().item_id.unwrap();

        let rename = RestaurantMenuRequest { item_name: Some("pIZZA".into()), ..Default::default() };
        let err = f.svc.update_restaurant_menu(pasta_id, rename).await.unwrap_err();
        assert!(matches!(err, ServiceError::AlreadyExists(ref m) if m == "Food item already exists"));

        let unchanged = f.svc.get_food_item_by_id(pasta_id).await.unwrap();
        assert_eq!(unchanged.item_name.as_deref(), Some("Pasta"));
        assert_eq!(f.menu.find_by_restaurant_id(1).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn delete_twice_is_not_found() {
        let f = fixture();
        let id = f.svc.add_food_item(pizza(0.0), None).await.unwrap().item_id.unwrap();
        f.svc.delete_food_item(id).await.unwrap();
        assert_eq!(f.svc.delete_food_item(id).await.unwrap_err().to_string(), "Food item not found");
        assert!(matches!(f.svc.get_food_item_by_id(id).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(f.svc.get_food_item_image(id).await, Err(ServiceError::NotFound(_))));
    }
}
