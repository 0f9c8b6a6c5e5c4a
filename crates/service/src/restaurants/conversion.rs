//! Field-for-field mapping between DTOs and entities. No validation here.

use super::domain::{
    FoodCategory, FoodCategoryRequest, FoodCategoryResponse, Restaurant, RestaurantMenu, RestaurantMenuRequest,
    RestaurantMenuResponse, RestaurantRequest, RestaurantResponse,
};

pub fn to_food_category(request: &FoodCategoryRequest) -> FoodCategory {
    FoodCategory {
        category_id: None,
        restaurant_id: request.restaurant_id,
        category_name: request.category_name.clone(),
    }
}

pub fn to_food_category_response(category: &FoodCategory) -> FoodCategoryResponse {
    FoodCategoryResponse {
        category_id: category.category_id,
        restaurant_id: category.restaurant_id,
        category_name: category.category_name.clone(),
    }
}

pub fn to_restaurant_menu(request: &RestaurantMenuRequest, image: Option<Vec<u8>>) -> RestaurantMenu {
    RestaurantMenu {
        item_id: None,
        item_name: request.item_name.clone(),
        price: request.price,
        description: request.description.clone(),
        veg_non_veg: request.veg_non_veg,
        category_id: request.category_id,
        restaurant_id: request.restaurant_id,
        image,
    }
}

pub fn to_restaurant_menu_response(item: &RestaurantMenu) -> RestaurantMenuResponse {
    RestaurantMenuResponse {
        item_id: item.item_id,
        item_name: item.item_name.clone(),
        price: item.price,
        description: item.description.clone(),
        veg_non_veg: item.veg_non_veg,
        category_id: item.category_id,
        restaurant_id: item.restaurant_id,
    }
}

pub fn to_restaurant(request: &RestaurantRequest, image: Option<Vec<u8>>) -> Restaurant {
    Restaurant {
        restaurant_id: None,
        user_id: request.user_id,
        restaurant_name: request.restaurant_name.clone(),
        restaurant_address: request.restaurant_address.clone(),
        contact_number: request.contact_number.clone(),
        restaurant_description: request.restaurant_description.clone(),
        opening_hour: request.opening_hour.clone(),
        restaurant_image: image,
    }
}

pub fn to_restaurant_response(restaurant: &Restaurant) -> RestaurantResponse {
    RestaurantResponse {
        restaurant_id: restaurant.restaurant_id,
        user_id: restaurant.user_id,
        restaurant_name: restaurant.restaurant_name.clone(),
        restaurant_address: restaurant.restaurant_address.clone(),
        contact_number: restaurant.contact_number.clone(),
        restaurant_description: restaurant.restaurant_description.clone(),
        opening_hour: restaurant.opening_hour.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_category_request_maps_to_empty_entity() {
        let entity = to_food_category(&FoodCategoryRequest::default());
        assert_eq!(entity, FoodCategory::default());
    }

    #[test]
    fn category_round_trip_copies_fields() {
        let req = FoodCategoryRequest { restaurant_id: Some(1), category_name: Some("Drinks".into()) };
        let mut entity = to_food_category(&req);
        assert_eq!(entity.category_id, None);
        entity.category_id = Some(7);
        let resp = to_food_category_response(&entity);
        assert_eq!(resp.category_id, Some(7));
        assert_eq!(resp.restaurant_id, Some(1));
        assert_eq!(resp.category_name.as_deref(), Some("Drinks"));
    }

    #[test]
    fn empty_menu_request_maps_to_empty_entity() {
        let entity = to_restaurant_menu(&RestaurantMenuRequest::default(), None);
        assert_eq!(entity, RestaurantMenu::default());
    }

    #[test]
    fn menu_response_leaves_out_image() {
        let req = RestaurantMenuRequest {
            item_name: Some("Burger".into()),
            price: Some(10.99),
            description: Some("Delicious beef burger".into()),
            veg_non_veg: Some(false),
            category_id: Some(1),
            restaurant_id: Some(2),
        };
        let entity = to_restaurant_menu(&req, Some(vec![1, 2, 3]));
        assert_eq!(entity.image, Some(vec![1, 2, 3]));
        let resp = to_restaurant_menu_response(&entity);
        assert_eq!(resp.item_name.as_deref(), Some("Burger"));
        assert_eq!(resp.price, Some(10.99));
        assert_eq!(resp.veg_non_veg, Some(false));
        assert_eq!(resp.category_id, Some(1));
        assert_eq!(resp.restaurant_id, Some(2));
    }

    #[test]
    fn empty_restaurant_request_maps_to_empty_entity() {
        let entity = to_restaurant(&RestaurantRequest::default(), None);
        assert_eq!(entity, Restaurant::default());
        assert_eq!(to_restaurant_response(&entity), RestaurantResponse::default());
    }

    #[test]
    fn menu_request_uses_camel_case_on_the_wire() {
        let json = serde_json::json!({
            "itemName": "Pizza", "price": 15.99, "description": "Cheese",
            "vegNonVeg": true, "categoryId": 2, "restaurantId": 1
        });
        let req: RestaurantMenuRequest = serde_json::from_value(json).unwrap();
        assert_eq!(req.item_name.as_deref(), Some("Pizza"));
        assert_eq!(req.veg_non_veg, Some(true));
        assert_eq!(req.restaurant_id, Some(1));
    }
}
