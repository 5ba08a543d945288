//! Resource-keyed query cache.
//!
//! Every mount fetches through [`QueryCache::fetch`]; the last JSON snapshot for the key is
//! shown as a placeholder until the response lands. Snapshots younger than the store's
//! stale time are served without a request (the default stale time is zero). Mutations go
//! through [`QueryCache::mutate`]; on success the keys listed by [`Mutation::invalidates`]
//! are marked stale and their version counters bumped, which makes every mounted resource
//! tracking them re-fetch. Failed calls never touch the cache.

use crate::api::ApiError;
use crate::state::auth::{use_auth, AuthState};
use chrono::{DateTime, Duration, Utc};
use leptos::*;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::future::Future;

pub const DEFAULT_STALE_SECONDS: i64 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum QueryKey {
    MyEvents,
    MySwappableEvents,
    SwappableSlots,
    IncomingRequests,
    OutgoingRequests,
}

impl QueryKey {
    pub const ALL: [QueryKey; 5] = [
        QueryKey::MyEvents,
        QueryKey::MySwappableEvents,
        QueryKey::SwappableSlots,
        QueryKey::IncomingRequests,
        QueryKey::OutgoingRequests,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QueryKey::MyEvents => "events",
            QueryKey::MySwappableEvents => "my-swappable-events",
            QueryKey::SwappableSlots => "swappable-slots",
            QueryKey::IncomingRequests => "incoming-requests",
            QueryKey::OutgoingRequests => "outgoing-requests",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    CreateEvent,
    UpdateEvent,
    UpdateEventStatus,
    DeleteEvent,
    CreateSwapRequest,
    RespondToSwapRequest,
}

const OWN_EVENTS: &[QueryKey] = &[QueryKey::MyEvents, QueryKey::MySwappableEvents];

const AFTER_SWAP_PROPOSAL: &[QueryKey] = &[
    QueryKey::SwappableSlots,
    QueryKey::MyEvents,
    QueryKey::MySwappableEvents,
    QueryKey::OutgoingRequests,
];

// A settled swap can move ownership and status across every view.
const AFTER_SWAP_RESPONSE: &[QueryKey] = &[
    QueryKey::IncomingRequests,
    QueryKey::OutgoingRequests,
    QueryKey::SwappableSlots,
    QueryKey::MyEvents,
    QueryKey::MySwappableEvents,
];

impl Mutation {
    pub fn invalidates(&self) -> &'static [QueryKey] {
        match self {
            Mutation::CreateEvent
            | Mutation::UpdateEvent
            | Mutation::UpdateEventStatus
            | Mutation::DeleteEvent => OWN_EVENTS,
            Mutation::CreateSwapRequest => AFTER_SWAP_PROPOSAL,
            Mutation::RespondToSwapRequest => AFTER_SWAP_RESPONSE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mutation::CreateEvent => "create-event",
            Mutation::UpdateEvent => "update-event",
            Mutation::UpdateEventStatus => "update-event-status",
            Mutation::DeleteEvent => "delete-event",
            Mutation::CreateSwapRequest => "create-swap-request",
            Mutation::RespondToSwapRequest => "respond-to-swap-request",
        }
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    value: Value,
    fetched_at: DateTime<Utc>,
    invalidated: bool,
}

#[derive(Debug, Clone)]
pub struct QueryStore {
    entries: HashMap<QueryKey, CacheEntry>,
    stale_time: Duration,
}

impl Default for QueryStore {
    fn default() -> Self {
        Self::new(Duration::seconds(DEFAULT_STALE_SECONDS))
    }
}

impl QueryStore {
    pub fn new(stale_time: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            stale_time,
        }
    }

    pub fn fresh(&self, key: QueryKey, now: DateTime<Utc>) -> Option<&Value> {
        self.entries
            .get(&key)
            .filter(|entry| !entry.invalidated && now - entry.fetched_at < self.stale_time)
            .map(|entry| &entry.value)
    }

    /// Last successful response for `key`, fresh or not.
    pub fn snapshot(&self, key: QueryKey) -> Option<&Value> {
        self.entries.get(&key).map(|entry| &entry.value)
    }

    pub fn insert(&mut self, key: QueryKey, value: Value, now: DateTime<Utc>) {
        self.entries.insert(
            key,
            CacheEntry {
                value,
                fetched_at: now,
                invalidated: false,
            },
        );
    }

    pub fn invalidate(&mut self, keys: &[QueryKey]) {
        for key in keys {
            if let Some(entry) = self.entries.get_mut(key) {
                entry.invalidated = true;
            }
        }
    }
}

#[derive(Clone, Copy)]
pub struct QueryCache {
    store: StoredValue<QueryStore>,
    versions: RwSignal<HashMap<QueryKey, u32>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self {
            store: store_value(QueryStore::default()),
            versions: create_rw_signal(HashMap::new()),
        }
    }

    /// Tracked read; resources use this as their source.
    pub fn version(&self, key: QueryKey) -> u32 {
        self.versions
            .with(|versions| versions.get(&key).copied().unwrap_or(0))
    }

    pub fn version_untracked(&self, key: QueryKey) -> u32 {
        self.versions
            .with_untracked(|versions| versions.get(&key).copied().unwrap_or(0))
    }

    pub fn snapshot<T: DeserializeOwned>(&self, key: QueryKey) -> Option<T> {
        let value = self
            .store
            .with_value(|store| store.snapshot(key).cloned())?;
        serde_json::from_value(value)
            .map_err(|err| log::debug!("discarding cached {}: {}", key.as_str(), err))
            .ok()
    }

    pub async fn fetch<T, Fut>(self, key: QueryKey, request: Fut) -> Result<T, ApiError>
    where
        T: Serialize + DeserializeOwned,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let cached = self
            .store
            .with_value(|store| store.fresh(key, Utc::now()).cloned());
        if let Some(value) = cached {
            match serde_json::from_value(value) {
                Ok(data) => return Ok(data),
                Err(err) => log::debug!("discarding cached {}: {}", key.as_str(), err),
            }
        }

        let result = request.await;
        match &result {
            Ok(data) => match serde_json::to_value(data) {
                Ok(value) => self
                    .store
                    .update_value(|store| store.insert(key, value, Utc::now())),
                Err(err) => log::warn!("failed to cache {}: {}", key.as_str(), err),
            },
            Err(err) => log::warn!("query {} failed: {}", key.as_str(), err),
        }
        result
    }

    pub fn invalidate(&self, keys: &[QueryKey]) {
        self.store.update_value(|store| store.invalidate(keys));
        self.versions.update(|versions| {
            for key in keys {
                let version = versions.entry(*key).or_insert(0);
                *version = version.wrapping_add(1);
            }
        });
    }

    pub async fn mutate<O, Fut>(self, mutation: Mutation, request: Fut) -> Result<O, ApiError>
    where
        Fut: Future<Output = Result<O, ApiError>>,
    {
        let result = request.await;
        match &result {
            Ok(_) => {
                log::debug!("{} succeeded, invalidating", mutation.as_str());
                self.invalidate(mutation.invalidates());
            }
            Err(err) => log::warn!("{} failed: {}", mutation.as_str(), err),
        }
        result
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_query_cache() -> QueryCache {
    match use_context::<QueryCache>() {
        Some(cache) => cache,
        None => {
            let cache = QueryCache::new();
            provide_context(cache);
            cache
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum QueryState<T> {
    Loading,
    Error(ApiError),
    Success(T),
}

impl<T> From<Option<Result<T, ApiError>>> for QueryState<T> {
    fn from(value: Option<Result<T, ApiError>>) -> Self {
        match value {
            None => QueryState::Loading,
            Some(Err(err)) => QueryState::Error(err),
            Some(Ok(data)) => QueryState::Success(data),
        }
    }
}

/// A query's resource plus the snapshot that was cached when it mounted.
pub struct QueryResource<T: 'static> {
    resource: Resource<u32, Result<T, ApiError>>,
    placeholder: StoredValue<Option<T>>,
}

impl<T> Clone for QueryResource<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for QueryResource<T> {}

impl<T: Clone> QueryResource<T> {
    /// Tracked read: the latest response, else the cached placeholder, else `None` (loading).
    pub fn get(&self) -> Option<Result<T, ApiError>> {
        self.resource
            .get()
            .or_else(|| self.placeholder.get_value().map(Ok))
    }
}

/// Drops the session when the backend no longer recognises it, so guarded
/// routes send the user back to login.
pub fn expire_session_on_unauthorized<T>(
    result: &Result<T, ApiError>,
    set_auth: WriteSignal<AuthState>,
) {
    if let Err(err) = result {
        if err.is_unauthorized() {
            log::warn!("session expired: {}", err);
            set_auth.update(|state| state.clear());
        }
    }
}

pub fn use_query<T, F, Fut>(key: QueryKey, fetcher: F) -> QueryResource<T>
where
    T: Serialize + DeserializeOwned + Clone + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let cache = use_query_cache();
    let (_, set_auth) = use_auth();
    let placeholder = store_value(cache.snapshot::<T>(key));
    let resource = create_resource(
        move || cache.version(key),
        move |_| {
            let request = cache.fetch(key, fetcher());
            async move {
                let result = request.await;
                expire_session_on_unauthorized(&result, set_auth);
                result
            }
        },
    );
    QueryResource {
        resource,
        placeholder,
    }
}

pub fn use_mutation<I, O, F, Fut>(mutation: Mutation, run: F) -> Action<I, Result<O, ApiError>>
where
    I: 'static,
    O: 'static,
    F: Fn(&I) -> Fut + 'static,
    Fut: Future<Output = Result<O, ApiError>> + 'static,
{
    let cache = use_query_cache();
    create_action(move |input: &I| cache.mutate(mutation, run(input)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(seconds: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, seconds).unwrap()
    }

    #[test]
    fn swap_response_invalidates_all_dependent_views() {
        let keys = Mutation::RespondToSwapRequest.invalidates();
        for key in [
            QueryKey::MyEvents,
            QueryKey::SwappableSlots,
            QueryKey::IncomingRequests,
            QueryKey::OutgoingRequests,
        ] {
            assert!(keys.contains(&key), "missing {}", key.as_str());
        }
    }

    #[test]
    fn event_mutations_only_touch_own_events() {
        for mutation in [
            Mutation::CreateEvent,
            Mutation::UpdateEvent,
            Mutation::UpdateEventStatus,
            Mutation::DeleteEvent,
        ] {
            assert_eq!(
                mutation.invalidates(),
                &[QueryKey::MyEvents, QueryKey::MySwappableEvents]
            );
        }
    }

    #[test]
    fn swap_proposal_refreshes_marketplace_and_outgoing() {
        let keys = Mutation::CreateSwapRequest.invalidates();
        assert!(keys.contains(&QueryKey::SwappableSlots));
        assert!(keys.contains(&QueryKey::OutgoingRequests));
        assert!(!keys.contains(&QueryKey::IncomingRequests));
    }

    #[test]
    fn default_store_never_serves_without_refetch() {
        let mut store = QueryStore::default();
        store.insert(QueryKey::SwappableSlots, serde_json::json!([1, 2]), at(0));
        assert!(store.fresh(QueryKey::SwappableSlots, at(0)).is_none());
        assert_eq!(
            store.snapshot(QueryKey::SwappableSlots),
            Some(&serde_json::json!([1, 2]))
        );
    }

    #[test]
    fn store_serves_fresh_entries_until_stale_time() {
        let mut store = QueryStore::new(Duration::seconds(10));
        store.insert(QueryKey::MyEvents, serde_json::json!([1]), at(0));
        assert!(store.fresh(QueryKey::MyEvents, at(9)).is_some());
        assert!(store.fresh(QueryKey::MyEvents, at(10)).is_none());
        assert!(store.fresh(QueryKey::SwappableSlots, at(0)).is_none());
    }

    #[test]
    fn store_invalidation_marks_entries_stale() {
        let mut store = QueryStore::default();
        store.insert(QueryKey::MyEvents, serde_json::json!([]), at(0));
        store.insert(QueryKey::IncomingRequests, serde_json::json!([]), at(0));
        store.invalidate(&[QueryKey::MyEvents]);
        assert!(store.fresh(QueryKey::MyEvents, at(1)).is_none());
        assert!(store.snapshot(QueryKey::MyEvents).is_some());
        assert!(store.fresh(QueryKey::IncomingRequests, at(1)).is_some());
    }

    #[test]
    fn query_state_maps_resource_value() {
        assert_eq!(QueryState::<u8>::from(None), QueryState::Loading);
        assert_eq!(QueryState::from(Some(Ok::<u8, ApiError>(3))), QueryState::Success(3));
        let err = ApiError::unknown("nope");
        assert_eq!(
            QueryState::<u8>::from(Some(Err(err.clone()))),
            QueryState::Error(err)
        );
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::sample_user;
    use crate::test_support::ssr::{with_idle_resources, with_runtime};
    use futures::executor::block_on;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn successful_mutation_bumps_every_invalidated_key() {
        with_runtime(|| {
            let cache = QueryCache::new();
            let result = block_on(cache.mutate(Mutation::RespondToSwapRequest, async {
                Ok::<_, ApiError>(())
            }));
            assert!(result.is_ok());
            for key in Mutation::RespondToSwapRequest.invalidates() {
                assert_eq!(cache.version_untracked(*key), 1);
            }
        });
    }

    #[test]
    fn failed_mutation_invalidates_nothing() {
        with_runtime(|| {
            let cache = QueryCache::new();
            let result = block_on(cache.mutate(Mutation::RespondToSwapRequest, async {
                Err::<(), _>(ApiError::http(500, "boom"))
            }));
            assert!(result.is_err());
            for key in QueryKey::ALL {
                assert_eq!(cache.version_untracked(key), 0);
            }
        });
    }

    #[test]
    fn status_toggle_leaves_other_views_untouched() {
        with_runtime(|| {
            let cache = QueryCache::new();
            block_on(cache.mutate(Mutation::UpdateEventStatus, async {
                Ok::<_, ApiError>(())
            }))
            .unwrap();
            assert_eq!(cache.version_untracked(QueryKey::MyEvents), 1);
            assert_eq!(cache.version_untracked(QueryKey::SwappableSlots), 0);
            assert_eq!(cache.version_untracked(QueryKey::IncomingRequests), 0);
            assert_eq!(cache.version_untracked(QueryKey::OutgoingRequests), 0);
        });
    }

    #[test]
    fn remount_fetch_reaches_backend_again() {
        with_runtime(|| {
            let cache = QueryCache::new();
            let calls = Rc::new(Cell::new(0));
            let request = |calls: Rc<Cell<u32>>, slots: Vec<i32>| async move {
                calls.set(calls.get() + 1);
                Ok::<_, ApiError>(slots)
            };

            let first: Vec<i32> = block_on(
                cache.fetch(QueryKey::SwappableSlots, request(calls.clone(), vec![1, 2])),
            )
            .unwrap();
            let second: Vec<i32> = block_on(
                cache.fetch(QueryKey::SwappableSlots, request(calls.clone(), vec![1])),
            )
            .unwrap();
            assert_eq!(first, vec![1, 2]);
            assert_eq!(second, vec![1]);
            assert_eq!(calls.get(), 2);
            assert_eq!(
                cache.snapshot::<Vec<i32>>(QueryKey::SwappableSlots),
                Some(vec![1])
            );
        });
    }

    #[test]
    fn failed_fetch_leaves_cache_empty() {
        with_runtime(|| {
            let cache = QueryCache::new();
            let result: Result<Vec<i32>, _> = block_on(cache.fetch(QueryKey::SwappableSlots, async {
                Err(ApiError::http(500, "down"))
            }));
            assert!(result.is_err());
            assert!(cache.snapshot::<Vec<i32>>(QueryKey::SwappableSlots).is_none());
        });
    }

    #[test]
    fn mounted_query_shows_cached_snapshot_while_loading() {
        with_idle_resources(|| {
            let cache = QueryCache::new();
            provide_context(cache);
            block_on(cache.fetch(QueryKey::MyEvents, async {
                Ok::<_, ApiError>(vec![7])
            }))
            .unwrap();

            let cached = use_query(QueryKey::MyEvents, || async { Ok::<_, ApiError>(vec![8]) });
            assert_eq!(cached.get(), Some(Ok(vec![7])));

            let empty =
                use_query(QueryKey::SwappableSlots, || async { Ok::<_, ApiError>(vec![1]) });
            assert_eq!(empty.get(), None);
        });
    }

    #[test]
    fn unauthorized_response_ends_the_session() {
        with_runtime(|| {
            let (auth, set_auth) = create_signal(AuthState::authenticated(sample_user()));

            expire_session_on_unauthorized(&Err::<(), _>(ApiError::http(500, "down")), set_auth);
            assert!(auth.get().is_authenticated());

            expire_session_on_unauthorized(
                &Err::<(), _>(ApiError::from_response(401, "Unauthorized")),
                set_auth,
            );
            assert_eq!(auth.get().phase, crate::state::auth::SessionPhase::Anonymous);
            assert!(auth.get().user.is_none());
        });
    }

    #[test]
    fn use_query_cache_reuses_provided_context() {
        with_runtime(|| {
            let provided = QueryCache::new();
            provide_context(provided);
            let cache = use_query_cache();
            cache.invalidate(&[QueryKey::MyEvents]);
            assert_eq!(provided.version_untracked(QueryKey::MyEvents), 1);
        });
    }
}
