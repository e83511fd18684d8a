use crate::error::Error;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// A flat namespace of string keys and string values, shared with whoever
/// else holds a handle to it.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, Error>;
    fn set(&self, key: &str, value: &str) -> Result<(), Error>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        (**self).get(key)
    }
    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        (**self).set(key, value)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Rc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        (**self).get(key)
    }
    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        (**self).set(key, value)
    }
}

#[derive(Default)]
struct Namespace {
    items: HashMap<String, String>,
    quota: Option<usize>,
}

impl Namespace {
    fn used(&self) -> usize {
        self.items.iter().map(|(k, v)| k.len() + v.len()).sum()
    }
}

/// In-process storage. Clones are handles to the same namespace.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    inner: Rc<RefCell<Namespace>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that refuses writes once keys and values together exceed
    /// `quota` bytes.
    pub fn with_quota(quota: usize) -> Self {
        let storage = Self::default();
        storage.inner.borrow_mut().quota = Some(quota);
        storage
    }

    pub fn remove(&self, key: &str) -> Option<String> {
        self.inner.borrow_mut().items.remove(key)
    }

    pub fn clear(&self) {
        self.inner.borrow_mut().items.clear()
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        Ok(self.inner.borrow().items.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        let mut ns = self.inner.borrow_mut();
        if let Some(quota) = ns.quota {
            let replaced = ns.items.get(key).map_or(0, |old| key.len() + old.len());
            if ns.used() - replaced + key.len() + value.len() > quota {
                return Err(Error::QuotaExceeded {
                    key: key.to_string(),
                });
            }
        }
        ns.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_namespace() {
        let a = MemoryStorage::new();
        let b = a.clone();
        a.set("k", "v").unwrap();
        assert_eq!(b.get("k").unwrap().as_deref(), Some("v"));
        b.remove("k");
        assert_eq!(a.get("k").unwrap(), None);
        assert!(a.is_empty());
    }

    #[test]
    fn quota_counts_keys_and_values() {
        let storage = MemoryStorage::with_quota(10);
        storage.set("abc", "defg").unwrap();
        assert_eq!(
            storage.set("xyz", "1234"),
            Err(Error::QuotaExceeded { key: "xyz".into() })
        );
        assert_eq!(storage.get("xyz").unwrap(), None);
    }

    #[test]
    fn quota_credits_the_replaced_value() {
        let storage = MemoryStorage::with_quota(8);
        storage.set("key", "12345").unwrap();
        storage.set("key", "54321").unwrap();
        assert_eq!(storage.get("key").unwrap().as_deref(), Some("54321"));
    }
}
