#![forbid(unsafe_code)]

use rd_core::filter::{FilterSpec, StatusFilter, Visibility};
use rd_core::model::{COMPLETED_STATUS, EntityKind};
use rusqlite::types::Value as SqlValue;

/// Capability descriptor for one searchable family. The composer dispatches
/// on these fields instead of per-family query code.
#[derive(Debug)]
pub(in crate::store) struct EntityDescriptor {
    pub table: &'static str,
    pub date_column: &'static str,
    pub has_vendor: bool,
    pub has_status: bool,
    pub tenant_column: Option<&'static str>,
    pub search_columns: &'static [&'static str],
}

const MOVE_IN: EntityDescriptor = EntityDescriptor {
    table: "move_ins",
    date_column: "move_in_date",
    has_vendor: false,
    has_status: false,
    tenant_column: None,
    search_columns: &["signed_lease", "tenant_name", "last_notice_sent"],
};

const MOVE_OUT: EntityDescriptor = EntityDescriptor {
    table: "move_outs",
    date_column: "move_out_date",
    has_vendor: false,
    has_status: false,
    tenant_column: None,
    search_columns: &[
        "lease_status",
        "keys_location",
        "walkthrough",
        "repairs",
        "notes",
        "send_back_security_deposit",
        "list_the_unit",
        "tenants",
        "utility_type",
    ],
};

const VENDOR_TASK: EntityDescriptor = EntityDescriptor {
    table: "vendor_tasks",
    date_column: "task_submission_date",
    has_vendor: true,
    has_status: true,
    tenant_column: None,
    search_columns: &["assigned_tasks", "status", "notes"],
};

const PAYMENT_PLAN: EntityDescriptor = EntityDescriptor {
    table: "payment_plans",
    date_column: "plan_date",
    has_vendor: false,
    has_status: true,
    tenant_column: Some("tenant"),
    search_columns: &["tenant", "status", "notes", "dates"],
};

pub(in crate::store) fn descriptor(kind: EntityKind) -> &'static EntityDescriptor {
    match kind {
        EntityKind::MoveIn => &MOVE_IN,
        EntityKind::MoveOut => &MOVE_OUT,
        EntityKind::VendorTask => &VENDOR_TASK,
        EntityKind::PaymentPlan => &PAYMENT_PLAN,
    }
}

fn join_sql(desc: &EntityDescriptor) -> String {
    let mut sql = String::from(
        " LEFT JOIN units u ON u.id = t.unit_id \
         LEFT JOIN properties p ON p.id = u.property_id \
         LEFT JOIN cities c ON c.id = p.city_id",
    );
    if desc.has_vendor {
        sql.push_str(" LEFT JOIN vendors v ON v.id = t.vendor_id");
    }
    sql
}

pub(in crate::store) fn summary_select_sql(desc: &EntityDescriptor) -> String {
    let vendor = if desc.has_vendor { "v.vendor_name" } else { "NULL" };
    let status = if desc.has_status { "t.status" } else { "NULL" };
    format!(
        "SELECT t.id, c.city, p.property_name, u.unit_name, {vendor}, t.{date}, {status}, \
         t.is_hidden, t.is_archived, t.created_at_ms FROM {table} t{joins}",
        date = desc.date_column,
        table = desc.table,
        joins = join_sql(desc),
    )
}

pub(in crate::store) fn count_select_sql(desc: &EntityDescriptor) -> String {
    format!("SELECT COUNT(*) FROM {} t{}", desc.table, join_sql(desc))
}

pub(in crate::store) fn sort_key_select_sql(desc: &EntityDescriptor) -> String {
    format!(
        "SELECT t.{date}, t.created_at_ms FROM {table} t{joins}",
        date = desc.date_column,
        table = desc.table,
        joins = join_sql(desc),
    )
}

/// Composes the WHERE clause for one request: archive scope, then the
/// hidden/visible partition, then every provided predicate ANDed together.
/// Returns the clause (with a leading " WHERE ") and its bound values.
pub(in crate::store) fn filter_clause(
    desc: &EntityDescriptor,
    filters: &FilterSpec,
) -> (String, Vec<SqlValue>) {
    let mut sql = String::from(" WHERE ");
    let mut params: Vec<SqlValue> = Vec::new();

    sql.push_str(match filters.visibility {
        Visibility::Visible => "t.is_archived = 0 AND t.is_hidden = 0",
        Visibility::Hidden => "t.is_archived = 0 AND t.is_hidden = 1",
        Visibility::All => "t.is_archived = 0",
        Visibility::ArchivedOnly => "t.is_archived = 1",
    });

    if desc.has_status {
        append_status_clause(&mut sql, &mut params, &filters.status);
    }

    append_match_clause(&mut sql, &mut params, "c.city", filters.city.as_deref());
    append_match_clause(
        &mut sql,
        &mut params,
        "p.property_name",
        filters.property.as_deref(),
    );
    append_match_clause(&mut sql, &mut params, "u.unit_name", filters.unit.as_deref());
    if desc.has_vendor {
        append_match_clause(
            &mut sql,
            &mut params,
            "v.vendor_name",
            filters.vendor.as_deref(),
        );
    }
    if let Some(column) = desc.tenant_column {
        let column = format!("t.{column}");
        append_match_clause(&mut sql, &mut params, &column, filters.tenant.as_deref());
    }
    append_search_clause(&mut sql, &mut params, desc, filters.search.as_deref());

    (sql, params)
}

fn append_status_clause(sql: &mut String, params: &mut Vec<SqlValue>, status: &StatusFilter) {
    match status {
        StatusFilter::All => {}
        StatusFilter::ExcludeCompleted => {
            sql.push_str(" AND (t.status IS NULL OR t.status = '' OR t.status <> ?)");
            params.push(SqlValue::Text(COMPLETED_STATUS.to_string()));
        }
        StatusFilter::Exact(value) => {
            sql.push_str(" AND t.status = ?");
            params.push(SqlValue::Text(value.clone()));
        }
    }
}

fn append_match_clause(
    sql: &mut String,
    params: &mut Vec<SqlValue>,
    column: &str,
    value: Option<&str>,
) {
    if let Some(value) = value {
        sql.push_str(" AND ");
        sql.push_str(column);
        sql.push_str(" LIKE ?");
        params.push(SqlValue::Text(format!("%{value}%")));
    }
}

fn append_search_clause(
    sql: &mut String,
    params: &mut Vec<SqlValue>,
    desc: &EntityDescriptor,
    search: Option<&str>,
) {
    let Some(search) = search else {
        return;
    };
    let pattern = format!("%{search}%");

    sql.push_str(" AND (c.city LIKE ? OR p.property_name LIKE ? OR u.unit_name LIKE ?");
    params.push(SqlValue::Text(pattern.clone()));
    params.push(SqlValue::Text(pattern.clone()));
    params.push(SqlValue::Text(pattern.clone()));
    if desc.has_vendor {
        sql.push_str(" OR v.vendor_name LIKE ?");
        params.push(SqlValue::Text(pattern.clone()));
    }
    for column in desc.search_columns {
        sql.push_str(" OR t.");
        sql.push_str(column);
        sql.push_str(" LIKE ?");
        params.push(SqlValue::Text(pattern.clone()));
    }
    sql.push(')');
}

/// The fixed three-key ordering shared by listing and adjacency.
pub(in crate::store) fn order_clause(desc: &EntityDescriptor) -> String {
    format!(
        " ORDER BY t.{date} DESC, t.created_at_ms DESC, t.id DESC",
        date = desc.date_column
    )
}

#[derive(Clone, Copy, Debug)]
pub(in crate::store) enum Neighbor {
    Above,
    Below,
}

/// Boundary query for the record ranked immediately above or below a sort
/// key under the shared descending order. `Above` selects the minimum tuple
/// strictly greater than the key; `Below` the maximum strictly smaller.
pub(in crate::store) fn neighbor_sql(
    desc: &EntityDescriptor,
    clause: &str,
    neighbor: Neighbor,
) -> String {
    let (op, ord) = match neighbor {
        Neighbor::Above => (">", "ASC"),
        Neighbor::Below => ("<", "DESC"),
    };
    format!(
        "SELECT t.id FROM {table} t{joins}{clause} AND \
         (t.{d} {op} ? OR (t.{d} = ? AND (t.created_at_ms {op} ? OR (t.created_at_ms = ? AND t.id {op} ?)))) \
         ORDER BY t.{d} {ord}, t.created_at_ms {ord}, t.id {ord} LIMIT 1",
        table = desc.table,
        joins = join_sql(desc),
        d = desc.date_column,
    )
}
