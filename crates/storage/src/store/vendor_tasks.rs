#![forbid(unsafe_code)]

use super::support::normalize_date;
use super::{NewVendorTask, SqliteStore, StoreError, VendorTaskRow};
use rusqlite::{OptionalExtension, params};

impl SqliteStore {
    pub fn create_vendor_task(&self, req: &NewVendorTask) -> Result<VendorTaskRow, StoreError> {
        let task_submission_date = normalize_date(
            &req.task_submission_date,
            "task_submission_date must be YYYY-MM-DD",
        )?;
        self.conn.execute(
            "INSERT INTO vendor_tasks(unit_id, vendor_id, task_submission_date, assigned_tasks, \
             any_scheduled_visits, task_ending_date, notes, status, urgent, created_at_ms) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                req.unit_id,
                req.vendor_id,
                task_submission_date,
                req.assigned_tasks,
                req.any_scheduled_visits,
                req.task_ending_date,
                req.notes,
                req.status,
                req.urgent,
                req.created_at_ms,
            ],
        )?;
        Ok(VendorTaskRow {
            id: self.conn.last_insert_rowid(),
            unit_id: req.unit_id,
            vendor_id: req.vendor_id,
            task_submission_date,
            assigned_tasks: req.assigned_tasks.clone(),
            any_scheduled_visits: req.any_scheduled_visits.clone(),
            task_ending_date: req.task_ending_date.clone(),
            notes: req.notes.clone(),
            status: req.status.clone(),
            urgent: req.urgent.clone(),
            is_hidden: false,
            is_archived: false,
            created_at_ms: req.created_at_ms,
        })
    }

    pub fn get_vendor_task(&self, id: i64) -> Result<Option<VendorTaskRow>, StoreError> {
        Ok(self
            .conn
            .query_row(
                "SELECT id, unit_id, vendor_id, task_submission_date, assigned_tasks, \
                 any_scheduled_visits, task_ending_date, notes, status, urgent, is_hidden, \
                 is_archived, created_at_ms FROM vendor_tasks WHERE id = ?1",
                params![id],
                |row| {
                    Ok(VendorTaskRow {
                        id: row.get(0)?,
                        unit_id: row.get(1)?,
                        vendor_id: row.get(2)?,
                        task_submission_date: row.get(3)?,
                        assigned_tasks: row.get(4)?,
                        any_scheduled_visits: row.get(5)?,
                        task_ending_date: row.get(6)?,
                        notes: row.get(7)?,
                        status: row.get(8)?,
                        urgent: row.get(9)?,
                        is_hidden: row.get(10)?,
                        is_archived: row.get(11)?,
                        created_at_ms: row.get(12)?,
                    })
                },
            )
            .optional()?)
    }
}
