//! Migrator registering one table per entity kind, indexes last.
pub use sea_orm_migration::prelude::*;

mod m20240601_000001_create_food_category;
mod m20240601_000002_create_restaurant_menu;
mod m20240601_000003_create_restaurant;
mod m20240601_000004_create_users;
mod m20240601_000005_create_address;
mod m20240601_000006_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_food_category::Migration),
            Box::new(m20240601_000002_create_restaurant_menu::Migration),
            Box::new(m20240601_000003_create_restaurant::Migration),
            Box::new(m20240601_000004_create_users::Migration),
            Box::new(m20240601_000005_create_address::Migration),
            // Indexes should always be applied last
            Box::new(m20240601_000006_add_indexes::Migration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_are_ordered_with_indexes_last() {
        let names: Vec<String> = Migrator::migrations().iter().map(|m| m.name().to_string()).collect();
        assert_eq!(names.len(), 6);
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert!(names.last().unwrap().ends_with("add_indexes"));
    }

    #[test]
    fn unique_indexes_are_case_insensitive() {
        for (name, sql) in m20240601_000006_add_indexes::UNIQUE_INDEXES {
            assert!(sql.contains(name));
            assert!(sql.contains("lower("));
        }
    }
}
