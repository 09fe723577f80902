use dashmap::DashMap;

/// 持久化键值存储 (浏览器 localStorage 的抽象)
pub trait KeyValueStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: String);
    fn remove(&self, key: &str);
}

/// 内存实现
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: DashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|v| v.value().clone())
    }

    fn set(&self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&self, key: &str) {
        self.entries.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("user"), None);
        storage.set("user", "{}".to_string());
        assert_eq!(storage.get("user").as_deref(), Some("{}"));
        storage.set("user", "[]".to_string());
        assert_eq!(storage.get("user").as_deref(), Some("[]"));
        storage.remove("user");
        assert_eq!(storage.get("user"), None);
    }
}
