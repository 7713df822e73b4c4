#![forbid(unsafe_code)]

use super::support::query::{self, EntityDescriptor, Neighbor};
use super::{AdjacentIds, SqliteStore, StoreError};
use rd_core::filter::FilterSpec;
use rd_core::model::EntityKind;
use rusqlite::types::Value as SqlValue;
use rusqlite::{OptionalExtension, params_from_iter};

impl SqliteStore {
    /// Previous/next record ids under the same filter and ordering as
    /// [`SqliteStore::list`]. A `current_id` outside the filtered universe
    /// (unknown, archived, on the other side of the hidden partition, or
    /// excluded by a predicate) yields `{None, None}`.
    pub fn adjacent_ids(
        &self,
        kind: EntityKind,
        filters: &FilterSpec,
        current_id: i64,
    ) -> Result<AdjacentIds, StoreError> {
        let desc = query::descriptor(kind);
        let (clause, bound) = query::filter_clause(desc, filters);

        let current_sql = format!(
            "{}{} AND t.id = ?",
            query::sort_key_select_sql(desc),
            clause
        );
        let mut current_bound = bound.clone();
        current_bound.push(SqlValue::Integer(current_id));
        let current = self
            .conn
            .query_row(&current_sql, params_from_iter(current_bound), |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
            })
            .optional()?;

        let Some((date, created_at_ms)) = current else {
            return Ok(AdjacentIds {
                prev_id: None,
                next_id: None,
            });
        };

        let prev_id = self.neighbor_id(
            desc,
            &clause,
            &bound,
            &date,
            created_at_ms,
            current_id,
            Neighbor::Above,
        )?;
        let next_id = self.neighbor_id(
            desc,
            &clause,
            &bound,
            &date,
            created_at_ms,
            current_id,
            Neighbor::Below,
        )?;

        Ok(AdjacentIds { prev_id, next_id })
    }

    #[allow(clippy::too_many_arguments)]
    fn neighbor_id(
        &self,
        desc: &EntityDescriptor,
        clause: &str,
        bound: &[SqlValue],
        date: &str,
        created_at_ms: i64,
        current_id: i64,
        neighbor: Neighbor,
    ) -> Result<Option<i64>, StoreError> {
        let sql = query::neighbor_sql(desc, clause, neighbor);
        let mut bound = bound.to_vec();
        bound.push(SqlValue::Text(date.to_string()));
        bound.push(SqlValue::Text(date.to_string()));
        bound.push(SqlValue::Integer(created_at_ms));
        bound.push(SqlValue::Integer(created_at_ms));
        bound.push(SqlValue::Integer(current_id));

        Ok(self
            .conn
            .query_row(&sql, params_from_iter(bound), |row| row.get(0))
            .optional()?)
    }
}
