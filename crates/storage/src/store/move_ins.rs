#![forbid(unsafe_code)]

use super::support::normalize_date;
use super::{MoveInRow, NewMoveIn, SqliteStore, StoreError};
use rusqlite::{OptionalExtension, params};

impl SqliteStore {
    pub fn create_move_in(&self, req: &NewMoveIn) -> Result<MoveInRow, StoreError> {
        let move_in_date = normalize_date(&req.move_in_date, "move_in_date must be YYYY-MM-DD")?;
        self.conn.execute(
            "INSERT INTO move_ins(unit_id, move_in_date, signed_lease, tenant_name, \
             last_notice_sent, created_at_ms) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                req.unit_id,
                move_in_date,
                req.signed_lease,
                req.tenant_name,
                req.last_notice_sent,
                req.created_at_ms,
            ],
        )?;
        Ok(MoveInRow {
            id: self.conn.last_insert_rowid(),
            unit_id: req.unit_id,
            move_in_date,
            signed_lease: req.signed_lease.clone(),
            tenant_name: req.tenant_name.clone(),
            last_notice_sent: req.last_notice_sent.clone(),
            is_hidden: false,
            is_archived: false,
            created_at_ms: req.created_at_ms,
        })
    }

    pub fn get_move_in(&self, id: i64) -> Result<Option<MoveInRow>, StoreError> {
        Ok(self
            .conn
            .query_row(
                "SELECT id, unit_id, move_in_date, signed_lease, tenant_name, last_notice_sent, \
                 is_hidden, is_archived, created_at_ms FROM move_ins WHERE id = ?1",
                params![id],
                |row| {
                    Ok(MoveInRow {
                        id: row.get(0)?,
                        unit_id: row.get(1)?,
                        move_in_date: row.get(2)?,
                        signed_lease: row.get(3)?,
                        tenant_name: row.get(4)?,
                        last_notice_sent: row.get(5)?,
                        is_hidden: row.get(6)?,
                        is_archived: row.get(7)?,
                        created_at_ms: row.get(8)?,
                    })
                },
            )
            .optional()?)
    }
}
