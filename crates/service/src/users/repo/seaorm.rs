use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, NotSet, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

use models::filters::eq_ignore_case;
use models::{address, user};

use crate::errors::ServiceError;
use crate::messages;
use crate::users::domain::{Address, User};
use crate::users::repository::{AddressRepository, UserRepository};

impl From<user::Model> for User {
    fn from(m: user::Model) -> Self {
        Self {
            user_id: Some(m.user_id),
            user_name: m.user_name,
            user_password: m.user_password,
            phone_number: m.phone_number,
            user_email: m.user_email,
            user_role: m.user_role,
            wallet: m.wallet,
        }
    }
}

impl From<address::Model> for Address {
    fn from(m: address::Model) -> Self {
        Self {
            address_id: Some(m.address_id),
            street: m.street,
            city: m.city,
            state: m.state,
            zip_code: m.zip_code,
            country: m.country,
            user_id: m.user_id,
        }
    }
}

/// `column = value`, or `column IS NULL` for a missing value.
fn eq_or_null<C, V>(column: C, value: Option<V>) -> Condition
where
    C: ColumnTrait,
    V: Into<sea_orm::Value>,
{
    match value {
        Some(v) => Condition::all().add(column.eq(v)),
        None => Condition::all().add(column.is_null()),
    }
}

pub struct SeaOrmUserRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn save(&self, u: User) -> Result<User, ServiceError> {
        let am = user::ActiveModel {
            user_id: u.user_id.map_or(NotSet, Set),
            user_name: Set(u.user_name),
            user_password: Set(u.user_password),
            phone_number: Set(u.phone_number),
            user_email: Set(u.user_email),
            user_role: Set(u.user_role),
            wallet: Set(u.wallet),
        };
        let saved = match u.user_id {
            Some(_) => am.update(&self.db).await,
            None => am.insert(&self.db).await,
        }
        .map_err(|e| ServiceError::from_write(e, messages::EMAIL_ALREADY_EXISTS))?;
        Ok(saved.into())
    }

    async fn find_by_id(&self, user_id: i64) -> Result<Option<User>, ServiceError> {
        Ok(user::Entity::find_by_id(user_id).one(&self.db).await?.map(Into::into))
    }

    async fn exists_by_id(&self, user_id: i64) -> Result<bool, ServiceError> {
        Ok(user::Entity::find_by_id(user_id).count(&self.db).await? > 0)
    }

    async fn delete_by_id(&self, user_id: i64) -> Result<(), ServiceError> {
        user::Entity::delete_by_id(user_id).exec(&self.db).await?;
        Ok(())
    }

    async fn exists_by_user_email_ignore_case(&self, user_email: &str) -> Result<bool, ServiceError> {
        let hits = user::Entity::find()
            .filter(eq_ignore_case(user::Column::UserEmail, user_email))
            .count(&self.db)
            .await?;
        Ok(hits > 0)
    }
}

pub struct SeaOrmAddressRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl AddressRepository for SeaOrmAddressRepository {
    async fn save(&self, a: Address) -> Result<Address, ServiceError> {
        let am = address::ActiveModel {
            address_id: a.address_id.map_or(NotSet, Set),
            street: Set(a.street),
            city: Set(a.city),
            state: Set(a.state),
            zip_code: Set(a.zip_code),
            country: Set(a.country),
            user_id: Set(a.user_id),
        };
        let saved = match a.address_id {
            Some(_) => am.update(&self.db).await,
            None => am.insert(&self.db).await,
        }
        .map_err(|e| ServiceError::from_write(e, messages::ADDRESS_ALREADY_EXISTS))?;
        Ok(saved.into())
    }

    async fn find_by_id(&self, address_id: i64) -> Result<Option<Address>, ServiceError> {
        Ok(address::Entity::find_by_id(address_id).one(&self.db).await?.map(Into::into))
    }

    async fn exists_by_id(&self, address_id: i64) -> Result<bool, ServiceError> {
        Ok(address::Entity::find_by_id(address_id).count(&self.db).await? > 0)
    }

    async fn delete_by_id(&self, address_id: i64) -> Result<(), ServiceError> {
        address::Entity::delete_by_id(address_id).exec(&self.db).await?;
        Ok(())
    }

    async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<Address>, ServiceError> {
        let rows = address::Entity::find()
            .filter(address::Column::UserId.eq(user_id))
            .order_by_asc(address::Column::AddressId)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn exists_same_place(&self, a: &Address) -> Result<bool, ServiceError> {
        let hits = address::Entity::find()
            .filter(eq_or_null(address::Column::UserId, a.user_id))
            .filter(eq_or_null(address::Column::Street, a.street.clone()))
            .filter(eq_or_null(address::Column::City, a.city.clone()))
            .filter(eq_or_null(address::Column::State, a.state.clone()))
            .filter(eq_or_null(address::Column::ZipCode, a.zip_code))
            .filter(eq_or_null(address::Column::Country, a.country.clone()))
            .count(&self.db)
            .await?;
        Ok(hits > 0)
    }
}
