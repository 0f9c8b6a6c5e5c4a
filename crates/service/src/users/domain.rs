use serde::{Deserialize, Serialize};

/// Sign-up or update input. `user_password` is plain text here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    pub user_name: Option<String>,
    pub user_password: Option<String>,
    pub phone_number: Option<String>,
    pub user_email: Option<String>,
    pub user_role: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: Option<i64>,
    pub user_name: Option<String>,
    pub user_password: Option<String>,
    pub phone_number: Option<String>,
    pub user_email: Option<String>,
    pub user_role: Option<String>,
    pub wallet: Option<f64>,
}

/// Stored account; `user_password` holds the encoded form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct User {
    pub user_id: Option<i64>,
    pub user_name: Option<String>,
    pub user_password: Option<String>,
    pub phone_number: Option<String>,
    pub user_email: Option<String>,
    pub user_role: Option<String>,
    pub wallet: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressRequest {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<i32>,
    pub country: Option<String>,
    pub user_id: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressResponse {
    pub address_id: Option<i64>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<i32>,
    pub country: Option<String>,
    pub user_id: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Address {
    pub address_id: Option<i64>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<i32>,
    pub country: Option<String>,
    pub user_id: Option<i64>,
}

impl Address {
    /// Same owner and same postal fields, ignoring the id.
    pub fn same_place(&self, other: &Address) -> bool {
        self.user_id == other.user_id
            && self.street == other.street
            && self.city == other.city
            && self.state == other.state
            && self.zip_code == other.zip_code
            && self.country == other.country
    }
}
