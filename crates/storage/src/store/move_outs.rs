#![forbid(unsafe_code)]

use super::support::normalize_date;
use super::{MoveOutRow, NewMoveOut, SqliteStore, StoreError};
use rusqlite::{OptionalExtension, params};

impl SqliteStore {
    /// Records a move-out. When the lease status is "ended" and a unit is
    /// attached, the unit is reset in the same transaction: tenants cleared,
    /// marked vacant, delisted.
    pub fn create_move_out(&mut self, req: &NewMoveOut) -> Result<MoveOutRow, StoreError> {
        let move_out_date = normalize_date(&req.move_out_date, "move_out_date must be YYYY-MM-DD")?;

        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO move_outs(unit_id, move_out_date, lease_status, keys_location, \
             walkthrough, repairs, notes, send_back_security_deposit, list_the_unit, tenants, \
             utility_type, created_at_ms) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
            params![
                req.unit_id,
                move_out_date,
                req.lease_status,
                req.keys_location,
                req.walkthrough,
                req.repairs,
                req.notes,
                req.send_back_security_deposit,
                req.list_the_unit,
                req.tenants,
                req.utility_type,
                req.created_at_ms,
            ],
        )?;
        let id = tx.last_insert_rowid();

        let lease_ended = req
            .lease_status
            .as_deref()
            .is_some_and(|status| status.trim().eq_ignore_ascii_case("ended"));
        if lease_ended && let Some(unit_id) = req.unit_id {
            tx.execute(
                "UPDATE units SET tenants = NULL, vacant = 'Yes', listed = 'No' WHERE id = ?1",
                params![unit_id],
            )?;
        }
        tx.commit()?;

        Ok(MoveOutRow {
            id,
            unit_id: req.unit_id,
            move_out_date,
            lease_status: req.lease_status.clone(),
            keys_location: req.keys_location.clone(),
            walkthrough: req.walkthrough.clone(),
            repairs: req.repairs.clone(),
            notes: req.notes.clone(),
            send_back_security_deposit: req.send_back_security_deposit.clone(),
            list_the_unit: req.list_the_unit.clone(),
            tenants: req.tenants.clone(),
            utility_type: req.utility_type.clone(),
            is_hidden: false,
            is_archived: false,
            created_at_ms: req.created_at_ms,
        })
    }

    pub fn get_move_out(&self, id: i64) -> Result<Option<MoveOutRow>, StoreError> {
        Ok(self
            .conn
            .query_row(
                "SELECT id, unit_id, move_out_date, lease_status, keys_location, walkthrough, \
                 repairs, notes, send_back_security_deposit, list_the_unit, tenants, \
                 utility_type, is_hidden, is_archived, created_at_ms \
                 FROM move_outs WHERE id = ?1",
                params![id],
                |row| {
                    Ok(MoveOutRow {
                        id: row.get(0)?,
                        unit_id: row.get(1)?,
                        move_out_date: row.get(2)?,
                        lease_status: row.get(3)?,
                        keys_location: row.get(4)?,
                        walkthrough: row.get(5)?,
                        repairs: row.get(6)?,
                        notes: row.get(7)?,
                        send_back_security_deposit: row.get(8)?,
                        list_the_unit: row.get(9)?,
                        tenants: row.get(10)?,
                        utility_type: row.get(11)?,
                        is_hidden: row.get(12)?,
                        is_archived: row.get(13)?,
                        created_at_ms: row.get(14)?,
                    })
                },
            )
            .optional()?)
    }
}
