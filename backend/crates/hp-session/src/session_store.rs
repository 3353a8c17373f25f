use crate::{PortalSession, SessionId, SessionSettings};

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use hp_tenant::TenantConfigSource;
use log::{info, warn};
use tokio::sync::{Mutex, RwLock};

pub type SharedSession = Arc<Mutex<PortalSession>>;

/// Live visitor sessions keyed by the id in their cookie.
///
/// Holds at most `max_sessions`. At the limit the least recently used
/// session is evicted, and signed-out sessions go before signed-in ones.
pub struct SessionStore {
    inner: Arc<RwLock<StoreInner>>,
    settings: Arc<SessionSettings>,
    source: Arc<dyn TenantConfigSource>,
    max_sessions: usize,
}

struct StoreInner {
    sessions: HashMap<SessionId, SessionEntry>,
    /// Logical clock stamped on every access
    clock: AtomicU64,
}

struct SessionEntry {
    session: SharedSession,
    last_access: AtomicU64,
}

impl StoreInner {
    fn tick(&self) -> u64 {
        self.clock.fetch_add(1, Ordering::Relaxed)
    }

    /// Eviction candidate: signed-out before signed-in, then least recently used.
    ///
    /// A session whose lock is held is in use and counts as signed in.
    fn eviction_candidate(&self) -> Option<SessionId> {
        self.sessions
            .iter()
            .min_by_key(|(_, entry)| {
                let signed_in = entry
                    .session
                    .try_lock()
                    .map(|session| session.gate().is_authenticated())
                    .unwrap_or(true);
                (signed_in, entry.last_access.load(Ordering::Relaxed))
            })
            .map(|(id, _)| *id)
    }
}

impl SessionStore {
    pub fn new(
        settings: SessionSettings,
        source: Arc<dyn TenantConfigSource>,
        max_sessions: usize,
    ) -> Self {
        Self {
            inner: Arc::new(RwLock::new(StoreInner {
                sessions: HashMap::new(),
                clock: AtomicU64::new(0),
            })),
            settings: Arc::new(settings),
            source,
            max_sessions: max_sessions.max(1),
        }
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// Existing session for `id`, or a fresh one under a new id.
    ///
    /// The returned flag is `true` when a session was created.
    pub async fn get_or_create(&self, id: Option<SessionId>) -> (SessionId, SharedSession, bool) {
        if let Some(existing) = self.lookup(id).await {
            return existing;
        }

        let (id, session) = self.create().await;
        (id, session, true)
    }

    /// Existing session for the id a request carried, without creating one.
    pub async fn lookup(&self, id: Option<SessionId>) -> Option<(SessionId, SharedSession, bool)> {
        let id = id?;
        let session = self.get(id).await?;
        Some((id, session, false))
    }

    /// Session that is never stored, for requests with no state to keep.
    pub fn detached(&self) -> PortalSession {
        PortalSession::new(Arc::clone(&self.settings), Arc::clone(&self.source))
    }

    pub async fn create(&self) -> (SessionId, SharedSession) {
        let mut inner = self.inner.write().await;

        if inner.sessions.len() >= self.max_sessions
            && let Some(evicted) = inner.eviction_candidate()
        {
            warn!(
                "Session limit reached ({}), evicting session {evicted}",
                self.max_sessions
            );
            inner.sessions.remove(&evicted);
        }

        let id = SessionId::new();
        let session = Arc::new(Mutex::new(self.detached()));

        let last_access = AtomicU64::new(inner.tick());
        inner.sessions.insert(
            id,
            SessionEntry {
                session: Arc::clone(&session),
                last_access,
            },
        );
        info!("Created session {id} ({} total)", inner.sessions.len());

        (id, session)
    }

    pub async fn get(&self, id: SessionId) -> Option<SharedSession> {
        let inner = self.inner.read().await;
        let entry = inner.sessions.get(&id)?;
        entry.last_access.store(inner.tick(), Ordering::Relaxed);
        Some(Arc::clone(&entry.session))
    }

    pub async fn remove(&self, id: SessionId) -> bool {
        let mut inner = self.inner.write().await;
        let removed = inner.sessions.remove(&id).is_some();
        if removed {
            info!(
                "Removed session {id} ({} total remaining)",
                inner.sessions.len()
            );
        }
        removed
    }

    pub async fn len(&self) -> usize {
        let inner = self.inner.read().await;
        inner.sessions.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Clone for SessionStore {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            settings: Arc::clone(&self.settings),
            source: Arc::clone(&self.source),
            max_sessions: self.max_sessions,
        }
    }
}
