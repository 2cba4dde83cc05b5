use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::tenant::TenantRecord;

/// Data-access collaborator the resolver turns hints into tenants with.
///
/// `Ok(None)` means "no such tenant"; `Err` means the store could not
/// answer. The resolver treats both as "no match" but callers can tell
/// them apart.
#[async_trait]
pub trait TenantLookup: Send + Sync {
    /// First tenant whose default or custom domain starts with `prefix`,
    /// compared case-insensitively.
    async fn find_by_domain_prefix(&self, prefix: &str) -> Result<Option<TenantRecord>>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<TenantRecord>>;
}

/// In-memory tenant store. Prefix lookups return the earliest inserted match.
#[derive(Debug, Default)]
pub struct MemoryTenantStore {
    records: RwLock<Vec<TenantRecord>>,
}

impl MemoryTenantStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: impl IntoIterator<Item = TenantRecord>) -> Self {
        Self {
            records: RwLock::new(records.into_iter().collect()),
        }
    }

    /// Insert a record, replacing any existing record with the same id in place.
    pub async fn insert(&self, record: TenantRecord) {
        let mut records = self.records.write().await;
        match records.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => *existing = record,
            None => records.push(record),
        }
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Load a JSON array of tenant records. A repeated id replaces the
    /// earlier record in its original position.
    #[cfg(feature = "serde")]
    pub async fn load_json_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        use anyhow::Context;

        let path = path.as_ref();
        let raw = tokio::fs::read(path)
            .await
            .with_context(|| format!("reading tenant seed file {}", path.display()))?;
        let records: Vec<TenantRecord> = serde_json::from_slice(&raw)
            .with_context(|| format!("parsing tenant seed file {}", path.display()))?;

        let store = Self::new();
        for record in records {
            store.insert(record).await;
        }
        Ok(store)
    }
}

#[async_trait]
impl TenantLookup for MemoryTenantStore {
    async fn find_by_domain_prefix(&self, prefix: &str) -> Result<Option<TenantRecord>> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .find(|r| r.matches_domain_prefix(prefix))
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<TenantRecord>> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u128) -> Uuid {
        Uuid::from_u128(n)
    }

    #[tokio::test]
    async fn prefix_lookup_returns_first_inserted_match() {
        let store = MemoryTenantStore::from_records([
            TenantRecord::new(id(1), "ABC", "abc.example.com"),
            TenantRecord::new(id(2), "AB", "ab.example.com"),
        ]);

        let hit = store.find_by_domain_prefix("ab").await.unwrap().unwrap();
        assert_eq!(hit.id, id(1));

        let hit = store.find_by_domain_prefix("AB.").await.unwrap().unwrap();
        assert_eq!(hit.id, id(2));

        assert!(store.find_by_domain_prefix("zz").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn insert_replaces_by_id() {
        let store = MemoryTenantStore::new();
        store.insert(TenantRecord::new(id(7), "Old", "old.example.com")).await;
        store.insert(TenantRecord::new(id(7), "New", "new.example.com")).await;

        assert_eq!(store.len().await, 1);
        let rec = store.find_by_id(id(7)).await.unwrap().unwrap();
        assert_eq!(rec.name, "New");
        assert!(store.find_by_id(id(8)).await.unwrap().is_none());
    }

    #[cfg(feature = "serde")]
    #[tokio::test]
    async fn seed_file_with_repeated_id_keeps_last_record_in_place() {
        let path = std::env::temp_dir()
            .join(format!("momantza-seed-{}.json", std::process::id()));
        let seed = format!(
            r#"[
                {{"id": "{a}", "name": "Old", "default_domain": "ab.example.com"}},
                {{"id": "{b}", "name": "Other", "default_domain": "abc.example.com"}},
                {{"id": "{a}", "name": "New", "default_domain": "abd.example.com"}}
            ]"#,
            a = id(1),
            b = id(2),
        );
        tokio::fs::write(&path, seed).await.unwrap();

        let store = MemoryTenantStore::load_json_file(&path).await.unwrap();
        tokio::fs::remove_file(&path).await.unwrap();

        assert_eq!(store.len().await, 2);
        assert_eq!(store.find_by_id(id(1)).await.unwrap().unwrap().name, "New");
        // replaced in place, so it still comes before id 2 for a shared prefix
        let hit = store.find_by_domain_prefix("ab").await.unwrap().unwrap();
        assert_eq!(hit.id, id(1));
    }

    #[cfg(feature = "serde")]
    #[tokio::test]
    async fn missing_seed_file_names_the_path() {
        let err = MemoryTenantStore::load_json_file("/nonexistent/momantza-tenants.json")
            .await
            .unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("reading tenant seed file /nonexistent/momantza-tenants.json"));
    }
}
