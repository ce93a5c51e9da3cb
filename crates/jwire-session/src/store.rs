//! Persistent credential store.

use std::fs;
use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{Duration, Utc};
use tracing::{debug, warn};

use jwire_models::{AuthResponse, Role};

use crate::credential::{Credential, CredentialUpdate, LoginStatus, SESSION_TTL_SECS};
use crate::error::SessionResult;

/// Single source of truth for the current session credential.
///
/// The in-memory record is authoritative; every mutation rewrites the
/// backing JSON file best-effort. Reads never touch the filesystem and
/// nothing here suspends, so the store is safe to consult on the request
/// path. Concurrent writers race last-write-wins (whole-record overwrites
/// under the lock), which is documented behavior, not a guarantee worth
/// relying on.
pub struct CredentialStore {
    path: Option<PathBuf>,
    current: RwLock<Option<Credential>>,
}

impl CredentialStore {
    /// Open the store backed by `path` and run the startup validity check.
    ///
    /// A missing file is an empty store. An unreadable or corrupt file is a
    /// fatal initialization error. An expired record, or one whose role the
    /// client no longer recognizes, is cleared on the spot.
    pub fn open(path: impl Into<PathBuf>) -> SessionResult<Self> {
        let path = path.into();
        let current = match fs::read_to_string(&path) {
            Ok(raw) => Some(serde_json::from_str::<Credential>(&raw)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => return Err(e.into()),
        };

        let store = Self {
            path: Some(path),
            current: RwLock::new(current),
        };

        let stale = store
            .read_lock()
            .as_ref()
            .is_some_and(|c| !c.is_valid_at(Utc::now()) || c.parsed_role().is_none());
        if stale {
            debug!("Stored credential failed the startup validity check");
            store.clear();
        }

        Ok(store)
    }

    /// An unpersisted store, for tests and ephemeral sessions.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            current: RwLock::new(None),
        }
    }

    /// Overwrite the whole record from a successful login response.
    ///
    /// The expiry is computed here, now + 24h, not taken from the server.
    pub fn save(&self, auth: &AuthResponse) {
        let credential = Credential {
            email: auth.email.clone(),
            name: auth.name.clone(),
            role: auth.role.clone(),
            avatar_url: auth.image_url.clone(),
            token: auth.token.clone(),
            expires_at: Utc::now() + Duration::seconds(SESSION_TTL_SECS),
        };
        debug!(email = %credential.email, "Saving session credential");
        *self.write_lock() = Some(credential);
        self.persist();
    }

    /// Last-saved snapshot, or `None` when logged out.
    pub fn read(&self) -> Option<Credential> {
        self.read_lock().clone()
    }

    /// Bearer token for the request authenticator.
    ///
    /// Returns the token even when the session has expired; expiry only
    /// matters to UI routing, the server answers 401 for stale tokens.
    pub fn token(&self) -> Option<String> {
        self.read_lock()
            .as_ref()
            .map(|c| c.token.clone())
            .filter(|t| !t.is_empty())
    }

    /// True iff a bearer token is present and the expiry is in the future.
    pub fn is_valid(&self) -> bool {
        self.read_lock()
            .as_ref()
            .is_some_and(|c| c.is_valid_at(Utc::now()))
    }

    /// Login state for routing decisions.
    ///
    /// A credential carrying a role the client does not recognize is
    /// cleared here, the same way the app discards it on startup.
    pub fn login_status(&self) -> LoginStatus {
        let role = match self.read() {
            Some(c) if c.is_valid_at(Utc::now()) => c.parsed_role(),
            _ => return LoginStatus::NotLoggedIn,
        };
        match role {
            Some(Role::Employee) => LoginStatus::Employee,
            Some(Role::Recruiter) => LoginStatus::Recruiter,
            None => {
                warn!("Stored credential carries an unknown role, clearing it");
                self.clear();
                LoginStatus::NotLoggedIn
            }
        }
    }

    /// Erase every stored field. Safe to call repeatedly.
    pub fn clear(&self) {
        debug!("Clearing session credential");
        *self.write_lock() = None;
        self.persist();
    }

    /// Overwrite only the supplied fields and extend the session from now.
    ///
    /// No-op when logged out: a partial update cannot resurrect a cleared
    /// session.
    pub fn apply_update(&self, update: CredentialUpdate) {
        {
            let mut guard = self.write_lock();
            let Some(credential) = guard.as_mut() else {
                warn!("Ignoring credential update while logged out");
                return;
            };
            if let Some(email) = update.email {
                credential.email = email;
            }
            if let Some(name) = update.name {
                credential.name = name;
            }
            if let Some(avatar_url) = update.avatar_url {
                credential.avatar_url = avatar_url;
            }
            if let Some(token) = update.token {
                credential.token = token;
            }
            credential.expires_at = Utc::now() + Duration::seconds(SESSION_TTL_SECS);
        }
        self.persist();
    }

    fn persist(&self) {
        let Some(path) = &self.path else { return };
        let result = match self.read_lock().as_ref() {
            Some(credential) => serde_json::to_string_pretty(credential)
                .map_err(std::io::Error::other)
                .and_then(|raw| fs::write(path, raw)),
            None => match fs::remove_file(path) {
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
                other => other,
            },
        };
        if let Err(e) = result {
            warn!("Failed to persist credential record: {}", e);
        }
    }

    fn read_lock(&self) -> RwLockReadGuard<'_, Option<Credential>> {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_lock(&self) -> RwLockWriteGuard<'_, Option<Credential>> {
        self.current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
