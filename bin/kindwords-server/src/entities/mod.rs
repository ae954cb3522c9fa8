//! Persistence layer.
//!
//! [`MessageStore`] defines the conversation-log interface; the default
//! implementation is [`SqliteMessageStore`].  Trait methods use `impl Future`
//! in their signatures so no `async-trait` crate is required.
//!
//! The store holds connection options rather than a pool: each operation
//! opens a fresh connection, does its work and closes it again.  Concurrent
//! writers are serialised by SQLite's own locking.

pub mod dao;
pub mod message;

pub use dao::{Message, Role};
pub use message::MessageStore;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};
use tracing::debug;

/// Settings the store is constructed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// sqlx SQLite URL, e.g. `"sqlite://chat.db"`.
    pub database_url: String,
    /// Window used by [`SqliteMessageStore::history`].
    pub history_limit: u32,
}

impl StoreConfig {
    pub const DEFAULT_HISTORY_LIMIT: u32 = 100;

    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            history_limit: Self::DEFAULT_HISTORY_LIMIT,
        }
    }
}

/// SQLite-backed conversation log.
#[derive(Clone, Debug)]
pub struct SqliteMessageStore {
    options: SqliteConnectOptions,
    history_limit: u32,
}

impl SqliteMessageStore {
    /// Resolve `config.database_url`, create the file if needed and run
    /// pending migrations.
    ///
    /// Migrations are embedded at compile time from `./migrations`, relative
    /// to the crate root.
    pub async fn connect(config: StoreConfig) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);
        let store = Self {
            options,
            history_limit: config.history_limit,
        };

        let mut conn = store.open().await?;
        sqlx::migrate!("./migrations").run(&mut conn).await?;
        conn.close().await?;
        Ok(store)
    }

    /// Number of messages [`Self::history`] returns.
    pub fn history_limit(&self) -> u32 {
        self.history_limit
    }

    /// The most recent [`Self::history_limit`] messages, oldest first.
    pub async fn history(&self) -> Result<Vec<Message>, sqlx::Error> {
        self.recent(self.history_limit).await
    }

    /// Open a connection and touch the `messages` table.
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        let mut conn = self.open().await?;
        sqlx::query("SELECT 1 FROM messages LIMIT 1")
            .fetch_optional(&mut conn)
            .await?;
        conn.close().await
    }

    async fn open(&self) -> Result<SqliteConnection, sqlx::Error> {
        debug!("opening sqlite connection");
        self.options.connect().await
    }
}
