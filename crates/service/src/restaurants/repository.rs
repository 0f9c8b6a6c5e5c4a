use async_trait::async_trait;

use super::domain::{FoodCategory, Restaurant, RestaurantMenu};
use crate::errors::ServiceError;

/// Persistence for food categories.
///
/// `save` inserts when `category_id` is `None` and replaces the row
/// otherwise; a write that would break the per-restaurant name uniqueness
/// fails with `AlreadyExists`.
#[async_trait]
pub trait FoodCategoryRepository: Send + Sync {
    async fn save(&self, category: FoodCategory) -> Result<FoodCategory, ServiceError>;
    async fn find_by_id(&self, category_id: i64) -> Result<Option<FoodCategory>, ServiceError>;
    async fn exists_by_id(&self, category_id: i64) -> Result<bool, ServiceError>;
    async fn delete_by_id(&self, category_id: i64) -> Result<(), ServiceError>;
    async fn find_by_restaurant_id(&self, restaurant_id: i64) -> Result<Vec<FoodCategory>, ServiceError>;
    async fn exists_by_restaurant_id_and_category_name_ignore_case(&self, restaurant_id: i64, category_name: &str) -> Result<bool, ServiceError>;
}

/// Persistence for menu items.
#[async_trait]
pub trait RestaurantMenuRepository: Send + Sync {
    async fn save(&self, item: RestaurantMenu) -> Result<RestaurantMenu, ServiceError>;
    async fn find_by_id(&self, item_id: i64) -> Result<Option<RestaurantMenu>, ServiceError>;
    async fn exists_by_id(&self, item_id: i64) -> Result<bool, ServiceError>;
    async fn delete_by_id(&self, item_id: i64) -> Result<(), ServiceError>;
    async fn find_by_restaurant_id(&self, restaurant_id: i64) -> Result<Vec<RestaurantMenu>, ServiceError>;
    async fn find_by_category_id(&self, category_id: i64) -> Result<Vec<RestaurantMenu>, ServiceError>;
    async fn exists_by_restaurant_id_and_item_name_ignore_case(&self, restaurant_id: i64, item_name: &str) -> Result<bool, ServiceError>;
}

/// Persistence for restaurants.
#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    async fn save(&self, restaurant: Restaurant) -> Result<Restaurant, ServiceError>;
    async fn find_by_id(&self, restaurant_id: i64) -> Result<Option<Restaurant>, ServiceError>;
    async fn exists_by_id(&self, restaurant_id: i64) -> Result<bool, ServiceError>;
    async fn delete_by_id(&self, restaurant_id: i64) -> Result<(), ServiceError>;
    async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<Restaurant>, ServiceError>;
    async fn exists_by_user_id_and_restaurant_name_ignore_case(&self, user_id: i64, restaurant_name: &str) -> Result<bool, ServiceError>;
}

/// In-memory repositories for tests and doc examples
pub mod mock {
    use super::*;
    use crate::messages;
    use crate::storage::{same_key, same_name_ignore_case, MemoryTable};

    #[derive(Default)]
    pub struct MockFoodCategoryRepository {
        table: MemoryTable<FoodCategory>,
    }

    #[async_trait]
    impl FoodCategoryRepository for MockFoodCategoryRepository {
        async fn save(&self, category: FoodCategory) -> Result<FoodCategory, ServiceError> {
            let id = category.category_id;
            self.table
                .save(
                    id,
                    messages::CATEGORY_ALREADY_EXISTS,
                    |other| {
                        same_key(other.restaurant_id, category.restaurant_id)
                            && same_name_ignore_case(other.category_name.as_deref(), category.category_name.as_deref())
                    },
                    |category_id| FoodCategory { category_id: Some(category_id), ..category.clone() },
                )
                .await
        }

        async fn find_by_id(&self, category_id: i64) -> Result<Option<FoodCategory>, ServiceError> {
            Ok(self.table.get(category_id).await)
        }

        async fn exists_by_id(&self, category_id: i64) -> Result<bool, ServiceError> {
            Ok(self.table.contains(category_id).await)
        }

        async fn delete_by_id(&self, category_id: i64) -> Result<(), ServiceError> {
            self.table.remove(category_id).await;
            Ok(())
        }

        async fn find_by_restaurant_id(&self, restaurant_id: i64) -> Result<Vec<FoodCategory>, ServiceError> {
            Ok(self.table.filter(|c| c.restaurant_id == Some(restaurant_id)).await)
        }

        async fn exists_by_restaurant_id_and_category_name_ignore_case(&self, restaurant_id: i64, category_name: &str) -> Result<bool, ServiceError> {
            Ok(self
                .table
                .any(|c| c.restaurant_id == Some(restaurant_id) && same_name_ignore_case(c.category_name.as_deref(), Some(category_name)))
                .await)
        }
    }

    #[derive(Default)]
    pub struct MockRestaurantMenuRepository {
        table: MemoryTable<RestaurantMenu>,
    }

    #[async_trait]
    impl RestaurantMenuRepository for MockRestaurantMenuRepository {
        async fn save(&self, item: RestaurantMenu) -> Result<RestaurantMenu, ServiceError> {
            let id = item.item_id;
            self.table
                .save(
                    id,
                    messages::FOOD_ITEM_ALREADY_EXISTS,
                    |other| {
                        same_key(other.restaurant_id, item.restaurant_id)
                            && same_name_ignore_case(other.item_name.as_deref(), item.item_name.as_deref())
                    },
                    |item_id| RestaurantMenu { item_id: Some(item_id), ..item.clone() },
                )
                .await
        }

        async fn find_by_id(&self, item_id: i64) -> Result<Option<RestaurantMenu>, ServiceError> {
            Ok(self.table.get(item_id).await)
        }

        async fn exists_by_id(&self, item_id: i64) -> Result<bool, ServiceError> {
            Ok(self.table.contains(item_id).await)
        }

        async fn delete_by_id(&self, item_id: i64) -> Result<(), ServiceError> {
            self.table.remove(item_id).await;
            Ok(())
        }

        async fn find_by_restaurant_id(&self, restaurant_id: i64) -> Result<Vec<RestaurantMenu>, ServiceError> {
            Ok(self.table.filter(|i| i.restaurant_id == Some(restaurant_id)).await)
        }

        async fn find_by_category_id(&self, category_id: i64) -> Result<Vec<RestaurantMenu>, ServiceError> {
            Ok(self.table.filter(|i| i.category_id == Some(category_id)).await)
        }

        async fn exists_by_restaurant_id_and_item_name_ignore_case(&self, restaurant_id: i64, item_name: &str) -> Result<bool, ServiceError> {
            Ok(self
                .table
                .any(|i| i.restaurant_id == Some(restaurant_id) && same_name_ignore_case(i.item_name.as_deref(), Some(item_name)))
                .await)
        }
    }

    #[derive(Default)]
    pub struct MockRestaurantRepository {
        table: MemoryTable<Restaurant>,
    }

    #[async_trait]
    impl RestaurantRepository for MockRestaurantRepository {
        async fn save(&self, restaurant: Restaurant) -> Result<Restaurant, ServiceError> {
            let id = restaurant.restaurant_id;
            self.table
                .save(
                    id,
                    messages::RESTAURANT_ALREADY_EXISTS,
                    |other| {
                        same_key(other.user_id, restaurant.user_id)
                            && same_name_ignore_case(other.restaurant_name.as_deref(), restaurant.restaurant_name.as_deref())
                    },
                    |restaurant_id| Restaurant { restaurant_id: Some(restaurant_id), ..restaurant.clone() },
                )
                .await
        }

        async fn find_by_id(&self, restaurant_id: i64) -> Result<Option<Restaurant>, ServiceError> {
            Ok(self.table.get(restaurant_id).await)
        }

        async fn exists_by_id(&self, restaurant_id: i64) -> Result<bool, ServiceError> {
            Ok(self.table.contains(restaurant_id).await)
        }

        async fn delete_by_id(&self, restaurant_id: i64) -> Result<(), ServiceError> {
            self.table.remove(restaurant_id).await;
            Ok(())
        }

        async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<Restaurant>, ServiceError> {
            Ok(self.table.filter(|r| r.user_id == Some(user_id)).await)
        }

        async fn exists_by_user_id_and_restaurant_name_ignore_case(&self, user_id: i64, restaurant_name: &str) -> Result<bool, ServiceError> {
            Ok(self
                .table
                .any(|r| r.user_id == Some(user_id) && same_name_ignore_case(r.restaurant_name.as_deref(), Some(restaurant_name)))
                .await)
        }
    }
}
