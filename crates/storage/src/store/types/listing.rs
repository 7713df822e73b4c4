#![forbid(unsafe_code)]

use serde::Serialize;

/// One record of a searchable family with its hierarchy names denormalized
/// for display. `vendor_name` and `status` are NULL for families without
/// those capabilities.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RecordSummary {
    pub id: i64,
    pub city_name: Option<String>,
    pub property_name: Option<String>,
    pub unit_name: Option<String>,
    pub vendor_name: Option<String>,
    pub primary_date: String,
    pub status: Option<String>,
    pub is_hidden: bool,
    pub is_archived: bool,
    pub created_at_ms: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub current_page: u32,
    pub last_page: u32,
    pub per_page: u32,
    pub total: u64,
    pub from: Option<u64>,
    pub to: Option<u64>,
    pub prev_page: Option<u32>,
    pub next_page: Option<u32>,
}

/// A listing response: a bare list under the `"all"` sentinel, a page with
/// metadata otherwise.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Listing {
    All(Vec<RecordSummary>),
    Paged(Page<RecordSummary>),
}

impl Listing {
    pub fn rows(&self) -> &[RecordSummary] {
        match self {
            Self::All(rows) => rows,
            Self::Paged(page) => &page.data,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct AdjacentIds {
    pub prev_id: Option<i64>,
    pub next_id: Option<i64>,
}
