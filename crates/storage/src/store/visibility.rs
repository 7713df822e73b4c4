#![forbid(unsafe_code)]

use super::support::query;
use super::{SqliteStore, StoreError};
use rd_core::model::EntityKind;
use rusqlite::params;

impl SqliteStore {
    /// Moves a record to the hidden side of the live partition. Returns the
    /// stored flag after the update.
    pub fn hide(&self, kind: EntityKind, id: i64) -> Result<bool, StoreError> {
        self.set_flag(kind, id, "is_hidden", true)
    }

    pub fn unhide(&self, kind: EntityKind, id: i64) -> Result<bool, StoreError> {
        self.set_flag(kind, id, "is_hidden", false)
    }

    /// Removes a record from the live universe. The hidden flag is left
    /// untouched, so a hidden record restored later comes back hidden.
    pub fn archive(&self, kind: EntityKind, id: i64) -> Result<bool, StoreError> {
        self.set_flag(kind, id, "is_archived", true)
    }

    pub fn restore(&self, kind: EntityKind, id: i64) -> Result<bool, StoreError> {
        self.set_flag(kind, id, "is_archived", false)
    }

    fn set_flag(
        &self,
        kind: EntityKind,
        id: i64,
        column: &str,
        value: bool,
    ) -> Result<bool, StoreError> {
        let table = query::descriptor(kind).table;
        let sql = format!("UPDATE {table} SET {column} = ?1 WHERE id = ?2");
        let updated = self.conn.execute(&sql, params![value, id])?;
        if updated == 0 {
            return Err(StoreError::UnknownId);
        }
        Ok(value)
    }

    /// Archives a unit together with its live tenants.
    pub fn archive_unit(&mut self, id: i64) -> Result<(), StoreError> {
        let tx = self.conn.transaction()?;
        let updated = tx.execute("UPDATE units SET is_archived = 1 WHERE id = ?1", params![id])?;
        if updated == 0 {
            return Err(StoreError::UnknownId);
        }
        tx.execute(
            "UPDATE tenants SET is_archived = 1 WHERE unit_id = ?1 AND is_archived = 0",
            params![id],
        )?;
        tx.commit()?;
        Ok(())
    }

    /// Brings an archived unit back to the live universe. Tenants archived
    /// alongside it stay archived until restored individually.
    pub fn restore_unit(&self, id: i64) -> Result<(), StoreError> {
        let updated = self
            .conn
            .execute("UPDATE units SET is_archived = 0 WHERE id = ?1", params![id])?;
        if updated == 0 {
            return Err(StoreError::UnknownId);
        }
        Ok(())
    }
}
