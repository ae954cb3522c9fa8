use std::future::Future;

use chrono::{DateTime, Utc};
use sqlx::Connection;

use crate::entities::dao::message::format_ts;
use crate::entities::{Message, Role, SqliteMessageStore};

/// Append-only conversation log.
pub trait MessageStore: Send + Sync + 'static {
    /// Persist one message stamped with the current UTC time.
    fn append(
        &self,
        role: Role,
        content: &str,
    ) -> impl Future<Output = Result<(), sqlx::Error>> + Send;

    /// Up to `limit` most recent messages in ascending creation order.
    fn recent(&self, limit: u32) -> impl Future<Output = Result<Vec<Message>, sqlx::Error>> + Send;

    /// Delete every message.  Returns the number of rows removed.
    fn clear(&self) -> impl Future<Output = Result<u64, sqlx::Error>> + Send;
}

type MessageRow = (String, String, String);

fn decode_row((role, content, ts): MessageRow) -> Result<Message, sqlx::Error> {
    let role = role
        .parse::<Role>()
        .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;
    let created_at = DateTime::parse_from_rfc3339(&ts)
        .map_err(|e| sqlx::Error::Decode(Box::new(e)))?
        .with_timezone(&Utc);
    Ok(Message {
        role,
        content,
        ts,
        created_at,
    })
}

impl MessageStore for SqliteMessageStore {
    async fn append(&self, role: Role, content: &str) -> Result<(), sqlx::Error> {
        let ts = format_ts(&Utc::now());
        let mut conn = self.open().await?;
        sqlx::query("INSERT INTO messages (role, content, ts) VALUES (?1, ?2, ?3)")
            .bind(role.to_string())
            .bind(content)
            .bind(&ts)
            .execute(&mut conn)
            .await?;
        conn.close().await?;
        Ok(())
    }

    async fn recent(&self, limit: u32) -> Result<Vec<Message>, sqlx::Error> {
        let mut conn = self.open().await?;
        let rows: Vec<MessageRow> = sqlx::query_as(
            "SELECT role, content, ts FROM ( \
                 SELECT id, role, content, ts FROM messages ORDER BY id DESC LIMIT ?1 \
             ) ORDER BY id ASC",
        )
        .bind(i64::from(limit))
        .fetch_all(&mut conn)
        .await?;
        conn.close().await?;
        rows.into_iter().map(decode_row).collect()
    }

    async fn clear(&self) -> Result<u64, sqlx::Error> {
        let mut conn = self.open().await?;
        let result = sqlx::query("DELETE FROM messages").execute(&mut conn).await?;
        conn.close().await?;
        Ok(result.rows_affected())
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
