//! Identifier-keyed media cache.
//!
//! [`MediaCache`] is the injectable port; [`SessionCache`] is the in-memory
//! implementation used by default, living as long as the fetcher that owns it.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use tokio::sync::RwLock;

/// When entries leave a [`SessionCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvictionPolicy {
    /// Entries stay for the lifetime of the cache.
    #[default]
    Never,
    /// Keep at most `max_entries`; the oldest inserted identifier goes first.
    OldestFirst { max_entries: usize },
}

/// Key-value store for media items keyed by identifier.
#[async_trait]
pub trait MediaCache<V>: Send + Sync
where
    V: Clone + Send + Sync + 'static,
{
    async fn get(&self, id: &str) -> Option<V>;

    /// Inserts or replaces the item stored under `id`.
    async fn insert(&self, id: String, item: V);

    async fn contains(&self, id: &str) -> bool {
        self.get(id).await.is_some()
    }

    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    async fn clear(&self);
}

#[derive(Debug)]
struct Entries<V> {
    items: HashMap<String, V>,
    /// Insertion order, oldest first. Only tracked for bounded policies.
    order: VecDeque<String>,
}

impl<V> Default for Entries<V> {
    fn default() -> Self {
        Self {
            items: HashMap::new(),
            order: VecDeque::new(),
        }
    }
}

/// In-memory session cache.
#[derive(Debug)]
pub struct SessionCache<V> {
    policy: EvictionPolicy,
    entries: Arc<RwLock<Entries<V>>>,
}

impl<V> Default for SessionCache<V> {
    fn default() -> Self {
        Self::new(EvictionPolicy::default())
    }
}

impl<V> SessionCache<V> {
    pub fn new(policy: EvictionPolicy) -> Self {
        Self {
            policy,
            entries: Arc::new(RwLock::new(Entries::default())),
        }
    }

    pub fn policy(&self) -> EvictionPolicy {
        self.policy
    }
}

#[async_trait]
impl<V> MediaCache<V> for SessionCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    async fn get(&self, id: &str) -> Option<V> {
        self.entries.read().await.items.get(id).cloned()
    }

    async fn insert(&self, id: String, item: V) {
        let mut entries = self.entries.write().await;

        let EvictionPolicy::OldestFirst { max_entries } = self.policy else {
            entries.items.insert(id, item);
            return;
        };

        if entries.items.insert(id.clone(), item).is_some() {
            return;
        }
        entries.order.push_back(id);

        while entries.items.len() > max_entries {
            let Some(oldest) = entries.order.pop_front() else {
                break;
            };
            entries.items.remove(&oldest);
            debug!("Evicted '{oldest}' from media cache (limit {max_entries})");
        }
    }

    async fn len(&self) -> usize {
        self.entries.read().await.items.len()
    }

    async fn clear(&self) {
        let mut entries = self.entries.write().await;
        entries.items.clear();
        entries.order.clear();
    }
}
