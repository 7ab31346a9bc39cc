use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, RwLock};

/// Keyed store abstraction for the service's records.
///
/// The store owns its concurrency control; callers never lock around it.
pub trait Store<K, V>: Send + Sync {
    fn get(&self, key: &K) -> Option<V>;
    fn upsert(&self, key: K, value: V);
    /// Remove a record, returning it if it was present.
    fn remove(&self, key: &K) -> Option<V>;
    fn list(&self) -> Vec<V>;
}

impl<K, V, S> Store<K, V> for Arc<S>
where
    S: Store<K, V> + ?Sized,
{
    fn get(&self, key: &K) -> Option<V> {
        (**self).get(key)
    }

    fn upsert(&self, key: K, value: V) {
        (**self).upsert(key, value)
    }

    fn remove(&self, key: &K) -> Option<V> {
        (**self).remove(key)
    }

    fn list(&self) -> Vec<V> {
        (**self).list()
    }
}

/// In-memory store for single-process deployments and tests.
#[derive(Debug)]
pub struct InMemoryStore<K, V> {
    inner: RwLock<HashMap<K, V>>,
}

impl<K, V> InMemoryStore<K, V> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }
}

impl<K, V> Default for InMemoryStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Store<K, V> for InMemoryStore<K, V>
where
    K: Clone + Eq + Hash + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    fn get(&self, key: &K) -> Option<V> {
        let map = self.inner.read().ok()?;
        map.get(key).cloned()
    }

    fn upsert(&self, key: K, value: V) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(key, value);
        }
    }

    fn remove(&self, key: &K) -> Option<V> {
        let mut map = self.inner.write().ok()?;
        map.remove(key)
    }

    fn list(&self) -> Vec<V> {
        let map = match self.inner.read() {
            Ok(m) => m,
            Err(_) => return vec![],
        };

        map.values().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_upserted_value() {
        let store: InMemoryStore<i64, String> = InMemoryStore::new();

        store.upsert(1, "one".to_string());

        assert_eq!(store.get(&1), Some("one".to_string()));
        assert_eq!(store.get(&2), None);
    }

    #[test]
    fn upsert_overwrites_existing_value() {
        let store: InMemoryStore<i64, String> = InMemoryStore::new();

        store.upsert(1, "one".to_string());
        store.upsert(1, "uno".to_string());

        assert_eq!(store.get(&1), Some("uno".to_string()));
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn remove_returns_record_and_empties_slot() {
        let store: InMemoryStore<i64, String> = InMemoryStore::new();

        store.upsert(1, "one".to_string());

        assert_eq!(store.remove(&1), Some("one".to_string()));
        assert_eq!(store.remove(&1), None);
        assert_eq!(store.get(&1), None);
    }

    #[test]
    fn list_returns_all_values() {
        let store: InMemoryStore<i64, String> = InMemoryStore::new();

        store.upsert(1, "one".to_string());
        store.upsert(2, "two".to_string());

        let mut values = store.list();
        values.sort();
        assert_eq!(values, vec!["one".to_string(), "two".to_string()]);
    }
}
