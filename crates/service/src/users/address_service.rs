use std::sync::Arc;

use tracing::{error, info, instrument};

use super::conversion::{to_address, to_address_response};
use super::domain::{AddressRequest, AddressResponse};
use super::repository::{AddressRepository, UserRepository};
use crate::errors::ServiceError;
use crate::messages;

/// Address workflows. The owning user must exist.
pub struct AddressService<
    A: AddressRepository + ?Sized = dyn AddressRepository,
    U: UserRepository + ?Sized = dyn UserRepository,
> {
    repo: Arc<A>,
    users: Arc<U>,
}

impl<A, U> AddressService<A, U>
where
    A: AddressRepository + ?Sized,
    U: UserRepository + ?Sized,
{
    pub fn new(repo: Arc<A>, users: Arc<U>) -> Self { Self { repo, users } }

    #[instrument(skip(self, request), fields(user_id = ?request.user_id))]
    pub async fn add_address(&self, request: AddressRequest) -> Result<AddressResponse, ServiceError> {
        info!("adding address");
        let user_id = request.user_id.ok_or_else(|| ServiceError::Validation(messages::OWNER_ID_REQUIRED.into()))?;
        if !self.users.exists_by_id(user_id).await? {
            error!("owning user not found");
            return Err(ServiceError::not_found(messages::USER_NOT_FOUND));
        }

        let address = to_address(&request);
        if self.repo.exists_same_place(&address).await? {
            error!("address already registered for user");
            return Err(ServiceError::already_exists(messages::ADDRESS_ALREADY_EXISTS));
        }

        let saved = self.repo.save(address).await?;
        info!(address_id = ?saved.address_id, "address added");
        Ok(to_address_response(&saved))
    }

    #[instrument(skip(self))]
    pub async fn get_addresses_by_user_id(&self, user_id: i64) -> Result<Vec<AddressResponse>, ServiceError> {
        let rows = self.repo.find_by_user_id(user_id).await?;
        info!(count = rows.len(), "addresses retrieved");
        Ok(rows.iter().map(to_address_response).collect())
    }

    #[instrument(skip(self, request))]
    pub async fn update_address(&self, address_id: i64, request: AddressRequest) -> Result<AddressResponse, ServiceError> {
        let Some(mut a) = self.repo.find_by_id(address_id).await? else {
            error!("address not found");
            return Err(ServiceError::not_found(messages::ADDRESS_NOT_FOUND));
        };
        let AddressRequest { street, city, state, zip_code, country, user_id } = request;
        if let Some(uid) = user_id {
            if !self.users.exists_by_id(uid).await? {
                return Err(ServiceError::not_found(messages::USER_NOT_FOUND));
            }
        }
        a.street = street.or(a.street);
        a.city = city.or(a.city);
        a.state = state.or(a.state);
        a.zip_code = zip_code.or(a.zip_code);
        a.country = country.or(a.country);
        a.user_id = user_id.or(a.user_id);

        let updated = self.repo.save(a).await?;
        info!("address updated");
        Ok(to_address_response(&updated))
    }

    #[instrument(skip(self))]
    pub async fn delete_address(&self, address_id: i64) -> Result<(), ServiceError> {
        if !self.repo.exists_by_id(address_id).await? {
            error!("address not found");
            return Err(ServiceError::not_found(messages::ADDRESS_NOT_FOUND));
        }
        self.repo.delete_by_id(address_id).await?;
        info!("address deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::domain::User;
    use crate::users::repository::mock::{MockAddressRepository, MockUserRepository};

    async fn setup() -> (AddressService, i64) {
        let users = Arc::new(MockUserRepository::default());
        let owner = users.save(User { user_email: Some("o@x.io".into()), ..Default::default() }).await.unwrap();
        let a: Arc<dyn AddressRepository> = Arc::new(MockAddressRepository::default());
        let u: Arc<dyn UserRepository> = users;
        (AddressService::new(a, u), owner.user_id.unwrap())
    }

    fn home(user_id: i64) -> AddressRequest {
        AddressRequest {
            street: Some("1 Main St".into()),
            city: Some("Springfield".into()),
            state: Some("IL".into()),
            zip_code: Some(62701),
            country: Some("US".into()),
            user_id: Some(user_id),
        }
    }

    #[tokio::test]
    async fn owner_must_exist() {
        let (svc, owner) = setup().await;
        let err = svc.add_address(home(owner + 100)).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(ref m) if m == "User not found"));
        assert!(svc.get_addresses_by_user_id(owner + 100).await.unwrap().is_empty());
        assert!(svc.get_addresses_by_user_id(owner).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_address_leaves_store_unchanged() {
        let (svc, owner) = setup().await;
        let kept = svc.add_address(home(owner)).await.unwrap();
        let before = svc.get_addresses_by_user_id(owner).await.unwrap();
        let unknown = kept.address_id.unwrap() + 100;

        let patch = AddressRequest { city: Some("Shelbyville".into()), user_id: Some(owner), ..Default::default() };
        assert!(matches!(svc.update_address(unknown, patch).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(svc.delete_address(unknown).await, Err(ServiceError::NotFound(_))));

        assert_eq!(svc.get_addresses_by_user_id(owner).await.unwrap(), before);
    }

    #[tokio::test]
    async fn identical_address_is_rejected() {
        let (svc, owner) = setup().await;
        let created = svc.add_address(home(owner)).await.unwrap();
        assert_eq!(created.city.as_deref(), Some("Springfield"));
        let err = svc.add_address(home(owner)).await.unwrap_err();
        assert_eq!(err.to_string(), "Address already exists");

        let mut work = home(owner);
        work.street = Some("2 Side St".into());
        svc.add_address(work).await.unwrap();
        let listed = svc.get_addresses_by_user_id(owner).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert!(listed[0].address_id < listed[1].address_id);
    }

    #[tokio::test]
    async fn update_then_delete() {
        let (svc, owner) = setup().await;
        let id = svc.add_address(home(owner)).await.unwrap().address_id.unwrap();
        let patch = AddressRequest { zip_code: Some(62702), ..Default::default() };
        let updated = svc.update_address(id, patch).await.unwrap();
        assert_eq!(updated.zip_code, Some(62702));
        assert_eq!(updated.street.as_deref(), Some("1 Main St"));

        svc.delete_address(id).await.unwrap();
        assert_eq!(svc.delete_address(id).await.unwrap_err().to_string(), "Address not found");
        assert!(matches!(svc.update_address(id, AddressRequest::default()).await, Err(ServiceError::NotFound(_))));
        assert!(svc.get_addresses_by_user_id(owner).await.unwrap().is_empty());
    }
}
