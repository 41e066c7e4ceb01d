//! Login state carried between invocations
//!
//! The API authenticates with a session cookie. After a login the cookie
//! header and the user are kept in namespaced storage, and every later run
//! seeds the client's cookie jar from it.

use anyhow::{Context as _, Result};
use plaready_api_client::endpoints::auth::User;
use plaready_api_client::{ClientConfig, PlaReadyClient};
use plaready_core::config::Config;
use plaready_core::storage::{FileStore, Storage};
use tracing::debug;

/// Storage key holding the cookie header
pub const SESSION_KEY: &str = "session";

/// Storage key holding the last logged-in user
pub const USER_KEY: &str = "user";

/// API client bound to persisted login state
pub struct Session {
    client: PlaReadyClient,
    storage: Storage,
}

impl Session {
    /// Build the client and open the session store described by `config`
    ///
    /// Origin precedence: `origin` flag, `PLAREADY_ORIGIN`, config file, default.
    pub fn open(config: &Config, origin: Option<&str>) -> Result<Self> {
        let mut client_config = ClientConfig::default()
            .with_section(&config.schema.client)
            .with_env_overrides();
        if let Some(origin) = origin {
            client_config = client_config.with_origin(origin);
        }
        let client = PlaReadyClient::with_config(client_config)?;

        let path = config.schema.storage.resolved_path();
        let store = FileStore::open(&path)
            .with_context(|| format!("Failed to open session store {}", path.display()))?;
        debug!(path = %store.path().display(), "Opened session store");

        Self::with_storage(client, Storage::new(&config.schema.storage.namespace, store))
    }

    /// Attach `storage` to `client`, restoring any saved cookie
    pub fn with_storage(client: PlaReadyClient, storage: Storage) -> Result<Self> {
        if let Some(cookie) = storage.get::<String>(SESSION_KEY)? {
            client.restore_session(&cookie)?;
            debug!(namespace = %storage.prefix(), "Restored saved session");
        }
        Ok(Self { client, storage })
    }

    /// The API client
    pub fn client(&self) -> &PlaReadyClient {
        &self.client
    }

    /// Persist the current cookie and `user`
    pub fn remember(&self, user: &User) -> Result<()> {
        if let Some(cookie) = self.client.session_cookies() {
            self.storage.set(SESSION_KEY, &cookie)?;
        }
        self.storage.set(USER_KEY, user)?;
        Ok(())
    }

    /// User saved by the last login, if any
    pub fn cached_user(&self) -> Result<Option<User>> {
        Ok(self.storage.get(USER_KEY)?)
    }

    /// Drop everything this client stored
    pub fn forget(&self) -> Result<usize> {
        let removed = self.storage.clear()?;
        debug!(removed, "Cleared saved session");
        Ok(removed)
    }
}
