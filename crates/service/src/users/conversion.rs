//! DTO/entity mapping for users and addresses. Passwords are copied as
//! given; encoding happens in the workflow.

use super::domain::{Address, AddressRequest, AddressResponse, User, UserRequest, UserResponse};

pub fn to_user(request: &UserRequest) -> User {
    User {
        user_id: None,
        user_name: request.user_name.clone(),
        user_password: request.user_password.clone(),
        phone_number: request.phone_number.clone(),
        user_email: request.user_email.clone(),
        user_role: request.user_role.clone(),
        wallet: None,
    }
}

pub fn to_user_response(user: &User) -> UserResponse {
    UserResponse {
        user_id: user.user_id,
        user_name: user.user_name.clone(),
        user_password: user.user_password.clone(),
        phone_number: user.phone_number.clone(),
        user_email: user.user_email.clone(),
        user_role: user.user_role.clone(),
        wallet: user.wallet,
    }
}

pub fn to_address(request: &AddressRequest) -> Address {
    Address {
        address_id: None,
        street: request.street.clone(),
        city: request.city.clone(),
        state: request.state.clone(),
        zip_code: request.zip_code,
        country: request.country.clone(),
        user_id: request.user_id,
    }
}

pub fn to_address_response(address: &Address) -> AddressResponse {
    AddressResponse {
        address_id: address.address_id,
        street: address.street.clone(),
        city: address.city.clone(),
        state: address.state.clone(),
        zip_code: address.zip_code,
        country: address.country.clone(),
        user_id: address.user_id,
    }
}
