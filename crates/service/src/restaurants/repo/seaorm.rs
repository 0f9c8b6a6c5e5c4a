use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

use models::filters::eq_ignore_case;
use models::{food_category, restaurant, restaurant_menu};

use crate::errors::ServiceError;
use crate::messages;
use crate::restaurants::domain::{FoodCategory, Restaurant, RestaurantMenu};
use crate::restaurants::repository::{FoodCategoryRepository, RestaurantMenuRepository, RestaurantRepository};

impl From<food_category::Model> for FoodCategory {
    fn from(m: food_category::Model) -> Self {
        Self { category_id: Some(m.category_id), restaurant_id: m.restaurant_id, category_name: m.category_name }
    }
}

impl From<restaurant_menu::Model> for RestaurantMenu {
    fn from(m: restaurant_menu::Model) -> Self {
        Self {
            item_id: Some(m.item_id),
            item_name: m.item_name,
            price: m.price,
            description: m.description,
            veg_non_veg: m.veg_non_veg,
            category_id: m.category_id,
            restaurant_id: m.restaurant_id,
            image: m.image,
        }
    }
}

impl From<restaurant::Model> for Restaurant {
    fn from(m: restaurant::Model) -> Self {
        Self {
            restaurant_id: Some(m.restaurant_id),
            user_id: m.user_id,
            restaurant_name: m.restaurant_name,
            restaurant_address: m.restaurant_address,
            contact_number: m.contact_number,
            restaurant_description: m.restaurant_description,
            opening_hour: m.opening_hour,
            restaurant_image: m.restaurant_image,
        }
    }
}

pub struct SeaOrmFoodCategoryRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl FoodCategoryRepository for SeaOrmFoodCategoryRepository {
    async fn save(&self, category: FoodCategory) -> Result<FoodCategory, ServiceError> {
        let am = food_category::ActiveModel {
            category_id: category.category_id.map_or(NotSet, Set),
            restaurant_id: Set(category.restaurant_id),
            category_name: Set(category.category_name),
        };
        let saved = match category.category_id {
            Some(_) => am.update(&self.db).await,
            None => am.insert(&self.db).await,
        }
        .map_err(|e| ServiceError::from_write(e, messages::CATEGORY_ALREADY_EXISTS))?;
        Ok(saved.into())
    }

    async fn find_by_id(&self, category_id: i64) -> Result<Option<FoodCategory>, ServiceError> {
        let found = food_category::Entity::find_by_id(category_id).one(&self.db).await?;
        Ok(found.map(Into::into))
    }

    async fn exists_by_id(&self, category_id: i64) -> Result<bool, ServiceError> {
        Ok(food_category::Entity::find_by_id(category_id).count(&self.db).await? > 0)
    }

    async fn delete_by_id(&self, category_id: i64) -> Result<(), ServiceError> {
        food_category::Entity::delete_by_id(category_id).exec(&self.db).await?;
        Ok(())
    }

    async fn find_by_restaurant_id(&self, restaurant_id: i64) -> Result<Vec<FoodCategory>, ServiceError> {
        let rows = food_category::Entity::find()
            .filter(food_category::Column::RestaurantId.eq(restaurant_id))
            .order_by_asc(food_category::Column::CategoryId)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn exists_by_restaurant_id_and_category_name_ignore_case(&self, restaurant_id: i64, category_name: &str) -> Result<bool, ServiceError> {
        let hits = food_category::Entity::find()
            .filter(food_category::Column::RestaurantId.eq(restaurant_id))
            .filter(eq_ignore_case(food_category::Column::CategoryName, category_name))
            .count(&self.db)
            .await?;
        Ok(hits > 0)
    }
}

pub struct SeaOrmRestaurantMenuRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl RestaurantMenuRepository for SeaOrmRestaurantMenuRepository {
    async fn save(&self, item: RestaurantMenu) -> Result<RestaurantMenu, ServiceError> {
        let am = restaurant_menu::ActiveModel {
            item_id: item.item_id.map_or(NotSet, Set),
            item_name: Set(item.item_name),
            price: Set(item.price),
            description: Set(item.description),
            veg_non_veg: Set(item.veg_non_veg),
            category_id: Set(item.category_id),
            restaurant_id: Set(item.restaurant_id),
            image: Set(item.image),
        };
        let saved = match item.item_id {
            Some(_) => am.update(&self.db).await,
            None => am.insert(&self.db).await,
        }
        .map_err(|e| ServiceError::from_write(e, messages::FOOD_ITEM_ALREADY_EXISTS))?;
        Ok(saved.into())
    }

    async fn find_by_id(&self, item_id: i64) -> Result<Option<RestaurantMenu>, ServiceError> {
        let found = restaurant_menu::Entity::find_by_id(item_id).one(&self.db).await?;
        Ok(found.map(Into::into))
    }

    async fn exists_by_id(&self, item_id: i64) -> Result<bool, ServiceError> {
        Ok(restaurant_menu::Entity::find_by_id(item_id).count(&self.db).await? > 0)
    }

    async fn delete_by_id(&self, item_id: i64) -> Result<(), ServiceError> {
        restaurant_menu::Entity::delete_by_id(item_id).exec(&self.db).await?;
        Ok(())
    }

    async fn find_by_restaurant_id(&self, restaurant_id: i64) -> Result<Vec<RestaurantMenu>, ServiceError> {
        let rows = restaurant_menu::Entity::find()
            .filter(restaurant_menu::Column::RestaurantId.eq(restaurant_id))
            .order_by_asc(restaurant_menu::Column::ItemId)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_category_id(&self, category_id: i64) -> Result<Vec<RestaurantMenu>, ServiceError> {
        let rows = restaurant_menu::Entity::find()
            .filter(restaurant_menu::Column::CategoryId.eq(category_id))
            .order_by_asc(restaurant_menu::Column::ItemId)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn exists_by_restaurant_id_and_item_name_ignore_case(&self, restaurant_id: i64, item_name: &str) -> Result<bool, ServiceError> {
        let hits = restaurant_menu::Entity::find()
            .filter(restaurant_menu::Column::RestaurantId.eq(restaurant_id))
            .filter(eq_ignore_case(restaurant_menu::Column::ItemName, item_name))
            .count(&self.db)
            .await?;
        Ok(hits > 0)
    }
}

pub struct SeaOrmRestaurantRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl RestaurantRepository for SeaOrmRestaurantRepository {
    async fn save(&self, r: Restaurant) -> Result<Restaurant, ServiceError> {
        let am = restaurant::ActiveModel {
            restaurant_id: r.restaurant_id.map_or(NotSet, Set),
            user_id: Set(r.user_id),
            restaurant_name: Set(r.restaurant_name),
            restaurant_address: Set(r.restaurant_address),
            contact_number: Set(r.contact_number),
            restaurant_description: Set(r.restaurant_description),
            opening_hour: Set(r.opening_hour),
            restaurant_image: Set(r.restaurant_image),
        };
        let saved = match r.restaurant_id {
            Some(_) => am.update(&self.db).await,
            None => am.insert(&self.db).await,
        }
        .map_err(|e| ServiceError::from_write(e, messages::RESTAURANT_ALREADY_EXISTS))?;
        Ok(saved.into())
    }

    async fn find_by_id(&self, restaurant_id: i64) -> Result<Option<Restaurant>, ServiceError> {
        let found = restaurant::Entity::find_by_id(restaurant_id).one(&self.db).await?;
        Ok(found.map(Into::into))
    }

    async fn exists_by_id(&self, restaurant_id: i64) -> Result<bool, ServiceError> {
        Ok(restaurant::Entity::find_by_id(restaurant_id).count(&self.db).await? > 0)
    }

    async fn delete_by_id(&self, restaurant_id: i64) -> Result<(), ServiceError> {
        restaurant::Entity::delete_by_id(restaurant_id).exec(&self.db).await?;
        Ok(())
    }

    async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<Restaurant>, ServiceError> {
        let rows = restaurant::Entity::find()
            .filter(restaurant::Column::UserId.eq(user_id))
            .order_by_asc(restaurant::Column::RestaurantId)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn exists_by_user_id_and_restaurant_name_ignore_case(&self, user_id: i64, restaurant_name: &str) -> Result<bool, ServiceError> {
        let hits = restaurant::Entity::find()
            .filter(restaurant::Column::UserId.eq(user_id))
            .filter(eq_ignore_case(restaurant::Column::RestaurantName, restaurant_name))
            .count(&self.db)
            .await?;
        Ok(hits > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn category_repository_round_trip() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()) };
        let repo = SeaOrmFoodCategoryRepository { db };
        let restaurant_id = (uuid::Uuid::new_v4().as_u128() % 1_000_000_000) as i64;

        let saved = repo
            .save(FoodCategory { category_id: None, restaurant_id: Some(restaurant_id), category_name: Some("Drinks".into()) })
            .await?;
        let id = saved.category_id.expect("assigned id");
        assert!(repo.exists_by_id(id).await?);
        assert!(repo.exists_by_restaurant_id_and_category_name_ignore_case(restaurant_id, "dRiNkS").await?);

        let dup = repo
            .save(FoodCategory { category_id: None, restaurant_id: Some(restaurant_id), category_name: Some("DRINKS".into()) })
            .await;
        assert!(matches!(dup, Err(ServiceError::AlreadyExists(ref m)) if m == messages::CATEGORY_ALREADY_EXISTS));

        let renamed = repo.save(FoodCategory { category_name: Some("Beverages".into()), ..saved }).await?;
        assert_eq!(renamed.category_name.as_deref(), Some("Beverages"));
        assert_eq!(repo.find_by_restaurant_id(restaurant_id).await?.len(), 1);

        repo.delete_by_id(id).await?;
        assert!(repo.find_by_id(id).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn menu_repository_lists_by_category() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()) };
        let repo = SeaOrmRestaurantMenuRepository { db };
        let restaurant_id = (uuid::Uuid::new_v4().as_u128() % 1_000_000_000) as i64;
        let category_id = restaurant_id + 1;

        let mut ids = vec![];
        for name in ["Pizza", "Pasta"] {
            let saved = repo
                .save(RestaurantMenu {
                    item_name: Some(name.into()),
                    price: Some(9.5),
                    category_id: Some(category_id),
                    restaurant_id: Some(restaurant_id),
                    image: Some(vec![1, 2, 3]),
                    ..Default::default()
                })
                .await?;
            ids.push(saved.item_id.expect("id"));
        }
        let listed = repo.find_by_category_id(category_id).await?;
        assert_eq!(listed.iter().map(|i| i.item_id.unwrap()).collect::<Vec<_>>(), ids);
        assert_eq!(listed[0].image.as_deref(), Some(&[1u8, 2, 3][..]));

        let clash = repo.save(RestaurantMenu { item_name: Some("PIZZA".into()), ..listed[1].clone() }).await;
        assert!(matches!(clash, Err(ServiceError::AlreadyExists(ref m)) if m == messages::FOOD_ITEM_ALREADY_EXISTS));
        assert_eq!(repo.find_by_id(ids[1]).await?.and_then(|i| i.item_name).as_deref(), Some("Pasta"));

        for id in ids {
            repo.delete_by_id(id).await?;
        }
        Ok(())
    }
}
