//! Persisted per-user column ordering
//!
//! The MES shop-floor board remembers each user's column arrangement. The
//! payload is a bare JSON array of column-id strings under one key per user;
//! the store itself is an injected port so tests run against an in-memory
//! fake.

use crate::error::Result;
use crate::types::{Column, ColumnId, UserId};
use andon_store::OrderStore;
use tracing::{debug, warn};

/// Handle for loading and saving one user's column order.
pub struct ColumnOrder {
    store: Box<dyn OrderStore>,
    user: UserId,
}

impl ColumnOrder {
    /// Create a handle over the given store for the given user.
    pub fn new(store: impl OrderStore + 'static, user: impl Into<UserId>) -> Self {
        Self {
            store: Box::new(store),
            user: user.into(),
        }
    }

    /// The user this handle persists for.
    pub fn user(&self) -> &UserId {
        &self.user
    }

    fn key(&self) -> String {
        format!("column-order/{}", self.user)
    }

    /// Load the stored order merged against the live column list.
    ///
    /// Stored ids no longer on the board are dropped, and live columns absent
    /// from the stored order are appended in their natural order — a user
    /// with a stale stored order still sees newly added columns, at the end.
    /// A missing or malformed payload falls back to the live order.
    pub fn load(&self, live: &[Column]) -> Vec<ColumnId> {
        let stored = match self.store.read(&self.key()) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<ColumnId>>(&raw) {
                Ok(ids) => ids,
                Err(error) => {
                    warn!(user = %self.user, %error, "discarding malformed stored column order");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(error) => {
                warn!(user = %self.user, %error, "failed to read stored column order");
                Vec::new()
            }
        };

        let mut order: Vec<ColumnId> = stored
            .into_iter()
            .filter(|id| live.iter().any(|c| &c.id == id))
            .collect();
        for column in live {
            if !order.contains(&column.id) {
                order.push(column.id.clone());
            }
        }
        order
    }

    /// Persist the current column order.
    ///
    /// Fire-and-forget from the drag session's point of view: the visual
    /// order has already committed, so callers log a failed write and move
    /// on rather than roll back.
    pub fn save(&self, columns: &[Column]) -> Result<()> {
        let ids: Vec<&ColumnId> = columns.iter().map(|c| &c.id).collect();
        let payload = serde_json::to_string(&ids)?;
        self.store.write(&self.key(), &payload)?;
        debug!(user = %self.user, count = ids.len(), "saved column order");
        Ok(())
    }
}

impl std::fmt::Debug for ColumnOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColumnOrder")
            .field("user", &self.user)
            .finish_non_exhaustive()
    }
}
