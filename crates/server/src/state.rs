use std::sync::Arc;

use configs::UsersConfig;
use sea_orm::DatabaseConnection;

use service::restaurants::repo::seaorm::{SeaOrmFoodCategoryRepository, SeaOrmRestaurantMenuRepository, SeaOrmRestaurantRepository};
use service::restaurants::repository::mock::{MockFoodCategoryRepository, MockRestaurantMenuRepository, MockRestaurantRepository};
use service::restaurants::repository::{FoodCategoryRepository, RestaurantMenuRepository, RestaurantRepository};
use service::restaurants::{FoodCategoryService, RestaurantMenuService, RestaurantService};
use service::users::repo::seaorm::{SeaOrmAddressRepository, SeaOrmUserRepository};
use service::users::repository::mock::{MockAddressRepository, MockUserRepository};
use service::users::repository::{AddressRepository, UserRepository};
use service::users::{AddressService, UserService};

/// Services shared by every handler.
#[derive(Clone)]
pub struct ServerState {
    pub categories: Arc<FoodCategoryService>,
    pub menu: Arc<RestaurantMenuService>,
    pub restaurants: Arc<RestaurantService>,
    pub users: Arc<UserService>,
    pub addresses: Arc<AddressService>,
}

struct Repos {
    categories: Arc<dyn FoodCategoryRepository>,
    menu: Arc<dyn RestaurantMenuRepository>,
    restaurants: Arc<dyn RestaurantRepository>,
    users: Arc<dyn UserRepository>,
    addresses: Arc<dyn AddressRepository>,
}

impl ServerState {
    /// SeaORM repositories over one pooled connection.
    pub fn from_db(db: DatabaseConnection, users: &UsersConfig) -> Self {
        Self::wire(
            Repos {
                categories: Arc::new(SeaOrmFoodCategoryRepository { db: db.clone() }),
                menu: Arc::new(SeaOrmRestaurantMenuRepository { db: db.clone() }),
                restaurants: Arc::new(SeaOrmRestaurantRepository { db: db.clone() }),
                users: Arc::new(SeaOrmUserRepository { db: db.clone() }),
                addresses: Arc::new(SeaOrmAddressRepository { db }),
            },
            users,
        )
    }

    /// Process-local repositories; nothing survives a restart.
    pub fn in_memory(users: &UsersConfig) -> Self {
        Self::wire(
            Repos {
                categories: Arc::new(MockFoodCategoryRepository::default()),
                menu: Arc::new(MockRestaurantMenuRepository::default()),
                restaurants: Arc::new(MockRestaurantRepository::default()),
                users: Arc::new(MockUserRepository::default()),
                addresses: Arc::new(MockAddressRepository::default()),
            },
            users,
        )
    }

    fn wire(repos: Repos, cfg: &UsersConfig) -> Self {
        Self {
            categories: Arc::new(FoodCategoryService::new(repos.categories.clone())),
            menu: Arc::new(RestaurantMenuService::new(repos.menu, repos.categories)),
            restaurants: Arc::new(RestaurantService::new(repos.restaurants)),
            users: Arc::new(UserService::new(repos.users.clone(), cfg.starting_wallet)),
            addresses: Arc::new(AddressService::new(repos.addresses, repos.users)),
        }
    }
}
