#![forbid(unsafe_code)]

use super::support::query::{self, EntityDescriptor};
use super::{Listing, Page, RecordSummary, SqliteStore, StoreError};
use rd_core::filter::{FilterSpec, PageRequest, PerPage, StatusFilter};
use rd_core::model::EntityKind;
use rusqlite::types::Value as SqlValue;
use rusqlite::{OptionalExtension, params, params_from_iter};

impl SqliteStore {
    /// Lists one family under the given filter and page request. The same
    /// filter passed to [`SqliteStore::adjacent_ids`] yields the same
    /// ordering, so paging and record-to-record navigation agree.
    pub fn list(
        &self,
        kind: EntityKind,
        filters: &FilterSpec,
        page: &PageRequest,
    ) -> Result<Listing, StoreError> {
        let desc = query::descriptor(kind);
        let (clause, bound) = query::filter_clause(desc, filters);

        match page.per_page {
            PerPage::All => Ok(Listing::All(self.fetch_summaries(desc, &clause, bound, None)?)),
            PerPage::Limit(per_page) => {
                let total = self.count_rows(desc, &clause, &bound)?;
                let last_page = last_page(total, per_page);
                let current_page = page.page.max(1);
                let offset = u64::from(current_page - 1) * u64::from(per_page);
                let data = self.fetch_summaries(desc, &clause, bound, Some((per_page, offset)))?;

                let from = (!data.is_empty()).then_some(offset + 1);
                let to = (!data.is_empty()).then(|| offset + data.len() as u64);

                Ok(Listing::Paged(Page {
                    current_page,
                    last_page,
                    per_page,
                    total,
                    from,
                    to,
                    prev_page: (current_page > 1).then(|| current_page - 1),
                    next_page: (current_page < last_page).then(|| current_page + 1),
                    data,
                }))
            }
        }
    }

    /// Denormalized rows of the default visible view, for export. Status is
    /// not filtered: exports carry completed records too.
    pub fn export_rows(&self, kind: EntityKind) -> Result<Vec<RecordSummary>, StoreError> {
        let desc = query::descriptor(kind);
        let filters = FilterSpec {
            status: StatusFilter::All,
            ..FilterSpec::default()
        };
        let (clause, bound) = query::filter_clause(desc, &filters);
        self.fetch_summaries(desc, &clause, bound, None)
    }

    /// One record with its hierarchy names, live universe only.
    pub fn summary(&self, kind: EntityKind, id: i64) -> Result<Option<RecordSummary>, StoreError> {
        let desc = query::descriptor(kind);
        let sql = format!(
            "{} WHERE t.is_archived = 0 AND t.id = ?1",
            query::summary_select_sql(desc)
        );
        Ok(self
            .conn
            .query_row(&sql, params![id], map_summary_row)
            .optional()?)
    }

    fn count_rows(
        &self,
        desc: &EntityDescriptor,
        clause: &str,
        bound: &[SqlValue],
    ) -> Result<u64, StoreError> {
        let sql = format!("{}{}", query::count_select_sql(desc), clause);
        let count: i64 = self
            .conn
            .query_row(&sql, params_from_iter(bound.iter().cloned()), |row| {
                row.get(0)
            })?;
        Ok(u64::try_from(count).unwrap_or(0))
    }

    fn fetch_summaries(
        &self,
        desc: &EntityDescriptor,
        clause: &str,
        mut bound: Vec<SqlValue>,
        window: Option<(u32, u64)>,
    ) -> Result<Vec<RecordSummary>, StoreError> {
        let mut sql = format!(
            "{}{}{}",
            query::summary_select_sql(desc),
            clause,
            query::order_clause(desc)
        );
        if let Some((limit, offset)) = window {
            sql.push_str(" LIMIT ? OFFSET ?");
            bound.push(SqlValue::Integer(i64::from(limit)));
            bound.push(SqlValue::Integer(i64::try_from(offset).unwrap_or(i64::MAX)));
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bound))?;
        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            out.push(map_summary_row(row)?);
        }
        Ok(out)
    }
}

fn map_summary_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RecordSummary> {
    Ok(RecordSummary {
        id: row.get(0)?,
        city_name: row.get(1)?,
        property_name: row.get(2)?,
        unit_name: row.get(3)?,
        vendor_name: row.get(4)?,
        primary_date: row.get(5)?,
        status: row.get(6)?,
        is_hidden: row.get(7)?,
        is_archived: row.get(8)?,
        created_at_ms: row.get(9)?,
    })
}

fn last_page(total: u64, per_page: u32) -> u32 {
    let pages = total.div_ceil(u64::from(per_page)).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}
