//! Fixed, human-readable messages returned by the workflows and handlers.

pub const CATEGORY_ALREADY_EXISTS: &str = "Category already exists";
pub const CATEGORY_NOT_FOUND: &str = "Food category not found";
pub const CATEGORY_ADD_SUCCESS: &str = "Category added successfully";
pub const CATEGORY_DELETE_SUCCESS: &str = "Food category deleted successfully.";
pub const CATEGORY_NAME_REQUIRED: &str = "Category name is required";
pub const RESTAURANT_ID_REQUIRED: &str = "Restaurant id is required";

/// Not-found message for a lookup by id.
pub fn category_not_found_with_id(id: i64) -> String {
    format!("Food Category not found with id {id}")
}

pub const FOOD_ITEM_ALREADY_EXISTS: &str = "Food item already exists";
pub const FOOD_ITEM_NOT_FOUND: &str = "Food item not found";
pub const FOOD_ITEM_ADD_SUCCESS: &str = "Food item added successfully";
pub const FOOD_ITEM_DELETE_SUCCESS: &str = "Food item deleted successfully.";
pub const FOOD_ITEM_NAME_REQUIRED: &str = "Item name is required";
pub const MENU_CATEGORY_NOT_FOUND: &str = "Category not found";
pub const INVALID_PRICE: &str = "Price must be greater than or equal to zero";

pub const RESTAURANT_ALREADY_EXISTS: &str = "Restaurant already exists";
pub const RESTAURANT_NOT_FOUND: &str = "Restaurant not found";
pub const RESTAURANT_ADD_SUCCESS: &str = "Restaurant added successfully";
pub const RESTAURANT_DELETE_SUCCESS: &str = "Restaurant deleted successfully.";
pub const RESTAURANT_NAME_REQUIRED: &str = "Restaurant name is required";
pub const OWNER_ID_REQUIRED: &str = "User id is required";

pub const USER_NOT_FOUND: &str = "User not found";
pub const EMAIL_ALREADY_EXISTS: &str = "Email already exists";
pub const USER_ADD_SUCCESS: &str = "User added successfully";
pub const USER_DELETE_SUCCESS: &str = "User deleted successfully.";
pub const EMAIL_REQUIRED: &str = "Email is required";

pub const ADDRESS_ADD_SUCCESS: &str = "Address added successfully";
pub const ADDRESS_ALREADY_EXISTS: &str = "Address already exists";
pub const ADDRESS_NOT_FOUND: &str = "Address not found";
pub const ADDRESS_DELETE_SUCCESS: &str = "Address deleted successfully.";

pub const INVALID_IMAGE: &str = "Image must be base64 encoded";
