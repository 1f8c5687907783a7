//! Favorite recipe ids, persisted and observable
//!
//! [`FavoritesStore`] is the only writer of the favorite set. Every change
//! produces a new immutable [`FavoriteSet`] snapshot which is written to
//! storage and then handed to each subscriber, in subscription order,
//! before `toggle_favorite` returns. Storage trouble never escapes: the
//! in-memory set stays authoritative for the session.

use crate::config::FavoritesConfig;
use crate::models::RecipeSummary;
use recipe_explorer_store::Storage;
use std::collections::BTreeSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::{debug, warn};

/// Storage key holding the JSON array of favorite ids
pub const FAVORITES_STORAGE_KEY: &str = "recipe_favorites";

/// Immutable snapshot of the favorite ids
///
/// Cloning is cheap; subscribers may keep snapshots around.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteSet(Arc<BTreeSet<String>>);

impl FavoriteSet {
    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.0.iter().cloned().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for FavoriteSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(Arc::new(iter.into_iter().map(Into::into).collect()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&FavoriteSet) + Send>;

pub struct FavoritesStore {
    storage: Box<dyn Storage>,
    storage_key: String,
    current: FavoriteSet,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl FavoritesStore {
    /// Read the persisted set, or start from the configured seed
    ///
    /// Absent, unreadable, or malformed data all mean "start from seed".
    pub fn load(storage: Box<dyn Storage>, config: &FavoritesConfig) -> Self {
        let current = match read_persisted(&*storage, &config.storage_key) {
            Some(ids) => ids,
            None => config.seed.iter().cloned().collect(),
        };
        debug!("Loaded {} favorites", current.len());

        Self {
            storage,
            storage_key: config.storage_key.clone(),
            current,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Default key, no seed
    pub fn with_storage(storage: Box<dyn Storage>) -> Self {
        Self::load(storage, &FavoritesConfig::default())
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.current.contains(id)
    }

    /// Flip membership of `id`; returns whether it is a favorite afterwards
    pub fn toggle_favorite(&mut self, id: &str) -> bool {
        let mut next: BTreeSet<String> = (*self.current.0).clone();
        let now_favorite = if next.remove(id) {
            false
        } else {
            next.insert(id.to_string());
            true
        };

        self.current = FavoriteSet(Arc::new(next));

        if let Err(e) = self.persist() {
            warn!("Could not persist favorites, keeping them in memory: {}", e);
        }
        self.publish();

        debug!("Recipe {} favorite: {}", id, now_favorite);
        now_favorite
    }

    /// Favorite ids in sorted order
    pub fn favorites(&self) -> Vec<String> {
        self.current.to_vec()
    }

    /// Keep only the favorites from `candidates`, in candidate order
    pub fn favorite_recipes<R>(&self, candidates: &[R]) -> Vec<R>
    where
        R: AsRef<RecipeSummary> + Clone,
    {
        candidates
            .iter()
            .filter(|r| self.current.contains(&r.as_ref().id))
            .cloned()
            .collect()
    }

    pub fn count(&self) -> usize {
        self.current.len()
    }

    pub fn snapshot(&self) -> FavoriteSet {
        self.current.clone()
    }

    /// Register an observer; it receives the current snapshot right away
    /// and every later one
    pub fn subscribe<F>(&mut self, mut callback: F) -> SubscriptionId
    where
        F: FnMut(&FavoriteSet) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;

        callback(&self.current);
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Returns false if the subscription was already gone
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn persist(&mut self) -> crate::Result<()> {
        let json = serde_json::to_string(&self.current.to_vec())?;
        self.storage.set(&self.storage_key, &json)?;
        Ok(())
    }

    fn publish(&mut self) {
        let snapshot = self.current.clone();
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&snapshot);
        }
    }
}

/// Favorites count for the header, kept current by a subscription
#[derive(Debug)]
pub struct FavoritesBadge {
    count: Arc<AtomicUsize>,
    subscription: SubscriptionId,
}

impl FavoritesBadge {
    pub fn attach(store: &mut FavoritesStore) -> Self {
        let count = Arc::new(AtomicUsize::new(0));
        let sink = Arc::clone(&count);
        let subscription = store.subscribe(move |set| sink.store(set.len(), Ordering::Relaxed));

        Self {
            count,
            subscription,
        }
    }

    pub fn count(&self) -> usize {
        self.count.load(Ordering::Relaxed)
    }

    /// Stop tracking; the last count stays readable
    pub fn detach(&self, store: &mut FavoritesStore) -> bool {
        store.unsubscribe(self.subscription)
    }
}

fn read_persisted(storage: &dyn Storage, key: &str) -> Option<FavoriteSet> {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            warn!("Could not read favorites from storage: {}", e);
            return None;
        }
    };

    match serde_json::from_str::<Vec<String>>(&raw) {
        Ok(ids) => Some(ids.into_iter().collect()),
        Err(e) => {
            warn!("Ignoring malformed favorites data: {}", e);
            None
        }
    }
}
