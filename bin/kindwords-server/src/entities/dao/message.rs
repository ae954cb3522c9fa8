use chrono::{DateTime, SecondsFormat, Utc};
use strum::{Display, EnumString};

/// Author of a stored message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single row in the `messages` table.
///
/// The table's auto-increment `id` only orders rows and is not exposed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
    /// `ts` exactly as stored.  Rows written by older builds may lack the
    /// fractional seconds, so this is served verbatim rather than re-rendered.
    pub ts: String,
    /// `ts` parsed; used for ordering checks and validation on read.
    pub created_at: DateTime<Utc>,
}

/// Render a timestamp the way it is stored and served, e.g.
/// `2026-10-16T09:30:12.123456Z`.
pub fn format_ts(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}
