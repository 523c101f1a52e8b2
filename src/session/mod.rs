//! Signed-in user state, persisted as JSON in the storage directory.
//!
//! There is no credential check. Registering or logging in always
//! succeeds and replaces the current user.
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock, Weak};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const SESSION_FILE_NAME: &str = "snuggles_auth.json";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub user: Option<User>,
    pub is_authenticated: bool,
}

impl SessionState {
    fn signed_in(user: User) -> Self {
        Self {
            user: Some(user),
            is_authenticated: true,
        }
    }
}

type Listener = Arc<dyn Fn(&SessionState) + Send + Sync>;

#[derive(Default)]
struct Listeners {
    next_id: AtomicU64,
    entries: Mutex<BTreeMap<u64, Listener>>,
}

pub struct SessionStore {
    path: Option<PathBuf>,
    state: RwLock<SessionState>,
    listeners: Arc<Listeners>,
}

impl SessionStore {
    /// Load the session from `path`. A missing file starts signed out, as
    /// does a file that can't be read or parsed.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let state = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::error!("Failed to parse stored session {}: {}", path.display(), e);
                SessionState::default()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => SessionState::default(),
            Err(e) => {
                tracing::error!("Failed to read stored session {}: {}", path.display(), e);
                SessionState::default()
            }
        };
        Self {
            path: Some(path),
            state: RwLock::new(state),
            listeners: Arc::default(),
        }
    }

    pub fn in_memory() -> Self {
        Self {
            path: None,
            state: RwLock::new(SessionState::default()),
            listeners: Arc::default(),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn state(&self) -> SessionState {
        self.state
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn register(&self, name: &str, email: &str, _password: &str) -> Result<SessionState> {
        self.replace(SessionState::signed_in(User {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
        }))
    }

    pub fn login(&self, email: &str, _password: &str) -> Result<SessionState> {
        let name = email.split('@').next().unwrap_or_default();
        self.replace(SessionState::signed_in(User {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
        }))
    }

    pub fn logout(&self) -> Result<SessionState> {
        self.replace(SessionState::default())
    }

    /// Call `listener` after every change. The listener stays registered
    /// until the returned `Subscription` is dropped.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&SessionState) + Send + Sync + 'static,
    {
        let id = self.listeners.next_id.fetch_add(1, Ordering::Relaxed);
        self.listeners
            .entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(id, Arc::new(listener));
        Subscription {
            id,
            listeners: Arc::downgrade(&self.listeners),
        }
    }

    /// Saves `next` before it becomes visible. A failed save leaves both
    /// the file and the in-memory state as they were.
    fn replace(&self, next: SessionState) -> Result<SessionState> {
        {
            let mut state = self
                .state
                .write()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            self.persist(&next)?;
            *state = next.clone();
        }
        self.notify(&next);
        Ok(next)
    }

    fn persist(&self, state: &SessionState) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let contents = serde_json::to_string(state)?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write session to {}", path.display()))?;
        Ok(())
    }

    /// Listeners run without the registry lock held, so they may
    /// subscribe or drop subscriptions themselves.
    fn notify(&self, state: &SessionState) {
        let listeners: Vec<Listener> = self
            .listeners
            .entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .values()
            .cloned()
            .collect();
        for listener in listeners {
            listener(state);
        }
    }
}

#[must_use = "dropping a Subscription unsubscribes the listener"]
pub struct Subscription {
    id: u64,
    listeners: Weak<Listeners>,
}

impl Subscription {
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners
                .entries
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner())
                .remove(&self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_login_uses_email_local_part() {
        let store = SessionStore::in_memory();
        let state = store.login("jamie@example.com", "secret").unwrap();
        assert!(state.is_authenticated);
        let user = state.user.unwrap();
        assert_eq!(user.name, "jamie");
        assert_eq!(user.email, "jamie@example.com");
    }

    #[test]
    fn test_register_then_logout() {
        let store = SessionStore::in_memory();
        store.register("Jamie", "jamie@example.com", "secret").unwrap();
        assert_eq!(store.state().user.unwrap().name, "Jamie");

        let state = store.logout().unwrap();
        assert_eq!(state, SessionState::default());
        assert_eq!(store.state(), SessionState::default());
    }

    #[test]
    fn test_state_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SESSION_FILE_NAME);
        let store = SessionStore::open(&path);
        store.login("sam@example.com", "pw").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\"isAuthenticated\":true"));

        let reopened = SessionStore::open(&path);
        assert_eq!(reopened.state(), store.state());
    }

    #[test]
    fn test_corrupt_file_starts_signed_out() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SESSION_FILE_NAME);
        fs::write(&path, "{not json").unwrap();
        let store = SessionStore::open(&path);
        assert_eq!(store.state(), SessionState::default());
    }

    #[test]
    fn test_subscription_lifetime() {
        let store = SessionStore::in_memory();
        let calls = Arc::new(AtomicUsize::new(0));

        let counter = calls.clone();
        let subscription = store.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let counter = calls.clone();
        let _kept = store.subscribe(move |_| {
            counter.fetch_add(10, Ordering::SeqCst);
        });

        store.login("a@b.c", "pw").unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 11);

        subscription.unsubscribe();
        store.logout().unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 21);
    }

    #[test]
    fn test_listener_sees_new_state() {
        let store = SessionStore::in_memory();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let _subscription = store.subscribe(move |state| {
            sink.lock().unwrap().push(state.is_authenticated);
        });
        store.login("a@b.c", "pw").unwrap();
        store.logout().unwrap();
        assert_eq!(*seen.lock().unwrap(), vec![true, false]);
    }

    #[test]
    fn test_failed_save_keeps_previous_state() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "").unwrap();
        let store = SessionStore::open(blocker.join(SESSION_FILE_NAME));

        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let _subscription = store.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert!(store.login("sam@example.com", "pw").is_err());
        assert_eq!(store.state(), SessionState::default());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_listener_can_subscribe_and_unsubscribe() {
        let store = Arc::new(SessionStore::in_memory());
        let calls = Arc::new(AtomicUsize::new(0));
        let slot: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));

        // Subscribes a new listener on the first change, then drops its
        // own subscription.
        let inner = Arc::downgrade(&store);
        let own = slot.clone();
        let counter = calls.clone();
        let subscription = store.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            if let Some(store) = inner.upgrade() {
                let counter = counter.clone();
                std::mem::forget(store.subscribe(move |_| {
                    counter.fetch_add(100, Ordering::SeqCst);
                }));
            }
            drop(own.lock().unwrap().take());
        });
        *slot.lock().unwrap() = Some(subscription);

        store.login("a@b.c", "pw").unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        store.logout().unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 101);
    }
}
