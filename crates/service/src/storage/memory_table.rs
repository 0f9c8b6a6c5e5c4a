use std::collections::BTreeMap;

use tokio::sync::RwLock;

use crate::errors::ServiceError;

struct Rows<V> {
    last_id: i64,
    rows: BTreeMap<i64, V>,
}

/// Auto-increment keyed table held in memory.
///
/// Iteration is in ascending id order. Uniqueness is checked and the row
/// written under one write guard, so concurrent saves cannot both pass the
/// duplicate check.
pub struct MemoryTable<V> {
    inner: RwLock<Rows<V>>,
}

impl<V> Default for MemoryTable<V> {
    fn default() -> Self {
        Self { inner: RwLock::new(Rows { last_id: 0, rows: BTreeMap::new() }) }
    }
}

impl<V: Clone> MemoryTable<V> {
    pub fn new() -> Self { Self::default() }

    /// Get row by id.
    pub async fn get(&self, id: i64) -> Option<V> {
        self.inner.read().await.rows.get(&id).cloned()
    }

    pub async fn contains(&self, id: i64) -> bool {
        self.inner.read().await.rows.contains_key(&id)
    }

    /// Remove a row; returns whether it existed.
    pub async fn remove(&self, id: i64) -> bool {
        self.inner.write().await.rows.remove(&id).is_some()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Rows matching `pred`, ascending by id.
    pub async fn filter<F>(&self, pred: F) -> Vec<V>
    where
        F: Fn(&V) -> bool,
    {
        self.inner.read().await.rows.values().filter(|v| pred(v)).cloned().collect()
    }

    pub async fn any<F>(&self, pred: F) -> bool
    where
        F: Fn(&V) -> bool,
    {
        self.inner.read().await.rows.values().any(pred)
    }

    /// Insert (`id == None`) or replace (`id == Some`) a row.
    ///
    /// `is_duplicate` is evaluated against every other row; a match fails
    /// with `AlreadyExists(duplicate_message)` and nothing is written.
    /// Replacing a missing id is an unclassified failure, like an UPDATE
    /// that touches no row.
    pub async fn save<D, B>(&self, id: Option<i64>, duplicate_message: &str, is_duplicate: D, build: B) -> Result<V, ServiceError>
    where
        D: Fn(&V) -> bool,
        B: FnOnce(i64) -> V,
    {
        let mut table = self.inner.write().await;
        let target = match id {
            Some(id) if table.rows.contains_key(&id) => id,
            Some(id) => return Err(ServiceError::Db(format!("record {id} not found for update"))),
            None => table.last_id + 1,
        };
        if table.rows.iter().any(|(k, v)| *k != target && is_duplicate(v)) {
            return Err(ServiceError::already_exists(duplicate_message));
        }
        if id.is_none() {
            table.last_id = target;
        }
        let row = build(target);
        table.rows.insert(target, row.clone());
        Ok(row)
    }
}

/// Both ids present and equal; a missing id never collides, like NULL in a unique index.
pub fn same_key(a: Option<i64>, b: Option<i64>) -> bool {
    a.is_some() && a == b
}

/// Both names present and equal ignoring case.
///
/// Folds with Unicode `to_lowercase`, which is what Postgres `lower()` does
/// under a UTF-8 locale. ASCII names fold the same under every locale.
pub fn same_name_ignore_case(a: Option<&str>, b: Option<&str>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.to_lowercase() == b.to_lowercase(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row { id: i64, name: String }

    #[tokio::test]
    async fn assigns_increasing_ids_and_iterates_in_order() {
        let table = MemoryTable::<Row>::new();
        for name in ["b", "a", "c"] {
            table.save(None, "dup", |_| false, |id| Row { id, name: name.into() }).await.unwrap();
        }
        let rows = table.filter(|_| true).await;
        assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(rows[0].name, "b");
    }

    #[tokio::test]
    async fn duplicate_is_rejected_without_writing() {
        let table = MemoryTable::<Row>::new();
        table.save(None, "dup", |_| false, |id| Row { id, name: "Drinks".into() }).await.unwrap();
        let err = table
            .save(None, "dup", |r| same_name_ignore_case(Some(&r.name), Some("drinks")), |id| Row { id, name: "drinks".into() })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::AlreadyExists(ref m) if m == "dup"));
        assert_eq!(table.len().await, 1);
        // the rejected insert does not burn an id
        let next = table.save(None, "dup", |_| false, |id| Row { id, name: "Food".into() }).await.unwrap();
        assert_eq!(next.id, 2);
    }

    #[tokio::test]
    async fn replace_ignores_its_own_row_and_requires_existing_id() {
        let table = MemoryTable::<Row>::new();
        let row = table.save(None, "dup", |_| false, |id| Row { id, name: "x".into() }).await.unwrap();
        let same = table
            .save(Some(row.id), "dup", |r| r.name == "x", |id| Row { id, name: "x".into() })
            .await
            .unwrap();
        assert_eq!(same, row);
        assert!(matches!(
            table.save(Some(99), "dup", |_| false, |id| Row { id, name: "y".into() }).await,
            Err(ServiceError::Db(_))
        ));
    }

    #[test]
    fn missing_keys_never_collide() {
        assert!(!same_key(None, None));
        assert!(same_key(Some(1), Some(1)));
        assert!(!same_name_ignore_case(None, Some("a")));
        assert!(same_name_ignore_case(Some("Drinks"), Some("dRINKS")));
    }

    #[test]
    fn ascii_names_fold_like_sql_lower() {
        assert!(same_name_ignore_case(Some("Drinks"), Some("DRINKS")));
        assert!(same_name_ignore_case(Some("ada@Example.com"), Some("ADA@example.COM")));
        assert!(!same_name_ignore_case(Some("Drinks"), Some("Drink")));
        assert!(!same_name_ignore_case(None, Some("Drinks")));
    }

    #[test]
    fn non_ascii_names_fold_like_a_utf8_database() {
        assert!(same_name_ignore_case(Some("Crème Brûlée"), Some("CRÈME BRÛLÉE")));
        assert!(same_name_ignore_case(Some("Ölbaum"), Some("ölbaum")));
    }
}
