use async_trait::async_trait;

use super::domain::{Address, User};
use crate::errors::ServiceError;

/// Persistence for user accounts. Emails are unique ignoring case.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn save(&self, user: User) -> Result<User, ServiceError>;
    async fn find_by_id(&self, user_id: i64) -> Result<Option<User>, ServiceError>;
    async fn exists_by_id(&self, user_id: i64) -> Result<bool, ServiceError>;
    async fn delete_by_id(&self, user_id: i64) -> Result<(), ServiceError>;
    async fn exists_by_user_email_ignore_case(&self, user_email: &str) -> Result<bool, ServiceError>;
}

#[async_trait]
pub trait AddressRepository: Send + Sync {
    async fn save(&self, address: Address) -> Result<Address, ServiceError>;
    async fn find_by_id(&self, address_id: i64) -> Result<Option<Address>, ServiceError>;
    async fn exists_by_id(&self, address_id: i64) -> Result<bool, ServiceError>;
    async fn delete_by_id(&self, address_id: i64) -> Result<(), ServiceError>;
    async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<Address>, ServiceError>;
    /// Whether the owner already has an address with identical postal fields.
    async fn exists_same_place(&self, address: &Address) -> Result<bool, ServiceError>;
}

/// In-memory repositories for tests and the database-free server state
pub mod mock {
    use super::*;
    use crate::messages;
    use crate::storage::{same_name_ignore_case, MemoryTable};

    #[derive(Default)]
    pub struct MockUserRepository {
        table: MemoryTable<User>,
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn save(&self, user: User) -> Result<User, ServiceError> {
            let id = user.user_id;
            self.table
                .save(
                    id,
                    messages::EMAIL_ALREADY_EXISTS,
                    |other| same_name_ignore_case(other.user_email.as_deref(), user.user_email.as_deref()),
                    |user_id| User { user_id: Some(user_id), ..user.clone() },
                )
                .await
        }

        async fn find_by_id(&self, user_id: i64) -> Result<Option<User>, ServiceError> {
            Ok(self.table.get(user_id).await)
        }

        async fn exists_by_id(&self, user_id: i64) -> Result<bool, ServiceError> {
            Ok(self.table.contains(user_id).await)
        }

        async fn delete_by_id(&self, user_id: i64) -> Result<(), ServiceError> {
            self.table.remove(user_id).await;
            Ok(())
        }

        async fn exists_by_user_email_ignore_case(&self, user_email: &str) -> Result<bool, ServiceError> {
            Ok(self.table.any(|u| same_name_ignore_case(u.user_email.as_deref(), Some(user_email))).await)
        }
    }

    #[derive(Default)]
    pub struct MockAddressRepository {
        table: MemoryTable<Address>,
    }

    #[async_trait]
    impl AddressRepository for MockAddressRepository {
        async fn save(&self, address: Address) -> Result<Address, ServiceError> {
            let id = address.address_id;
            self.table
                .save(
                    id,
                    messages::ADDRESS_ALREADY_EXISTS,
                    |other| other.same_place(&address),
                    |address_id| Address { address_id: Some(address_id), ..address.clone() },
                )
                .await
        }

        async fn find_by_id(&self, address_id: i64) -> Result<Option<Address>, ServiceError> {
            Ok(self.table.get(address_id).await)
        }

        async fn exists_by_id(&self, address_id: i64) -> Result<bool, ServiceError> {
            Ok(self.table.contains(address_id).await)
        }

        async fn delete_by_id(&self, address_id: i64) -> Result<(), ServiceError> {
            self.table.remove(address_id).await;
            Ok(())
        }

        async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<Address>, ServiceError> {
            Ok(self.table.filter(|a| a.user_id == Some(user_id)).await)
        }

        async fn exists_same_place(&self, address: &Address) -> Result<bool, ServiceError> {
            Ok(self.table.any(|a| a.same_place(address)).await)
        }
    }
}
