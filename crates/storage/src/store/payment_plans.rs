#![forbid(unsafe_code)]

use super::support::normalize_date;
use super::{NewPaymentPlan, PaymentPlanRow, SqliteStore, StoreError};
use rusqlite::{OptionalExtension, params};

impl SqliteStore {
    pub fn create_payment_plan(&self, req: &NewPaymentPlan) -> Result<PaymentPlanRow, StoreError> {
        let plan_date = normalize_date(&req.plan_date, "plan_date must be YYYY-MM-DD")?;
        self.conn.execute(
            "INSERT INTO payment_plans(unit_id, tenant, plan_date, amount, paid, left_to_pay, \
             dates, notes, status, created_at_ms) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                req.unit_id,
                req.tenant,
                plan_date,
                req.amount,
                req.paid,
                req.left_to_pay,
                req.dates,
                req.notes,
                req.status,
                req.created_at_ms,
            ],
        )?;
        Ok(PaymentPlanRow {
            id: self.conn.last_insert_rowid(),
            unit_id: req.unit_id,
            tenant: req.tenant.clone(),
            plan_date,
            amount: req.amount,
            paid: req.paid,
            left_to_pay: req.left_to_pay,
            dates: req.dates.clone(),
            notes: req.notes.clone(),
            status: req.status.clone(),
            is_hidden: false,
            is_archived: false,
            created_at_ms: req.created_at_ms,
        })
    }

    pub fn get_payment_plan(&self, id: i64) -> Result<Option<PaymentPlanRow>, StoreError> {
        Ok(self
            .conn
            .query_row(
                "SELECT id, unit_id, tenant, plan_date, amount, paid, left_to_pay, dates, notes, \
                 status, is_hidden, is_archived, created_at_ms FROM payment_plans WHERE id = ?1",
                params![id],
                |row| {
                    Ok(PaymentPlanRow {
                        id: row.get(0)?,
                        unit_id: row.get(1)?,
                        tenant: row.get(2)?,
                        plan_date: row.get(3)?,
                        amount: row.get(4)?,
                        paid: row.get(5)?,
                        left_to_pay: row.get(6)?,
                        dates: row.get(7)?,
                        notes: row.get(8)?,
                        status: row.get(9)?,
                        is_hidden: row.get(10)?,
                        is_archived: row.get(11)?,
                        created_at_ms: row.get(12)?,
                    })
                },
            )
            .optional()?)
    }
}
