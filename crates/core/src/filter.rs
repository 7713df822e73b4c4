#![forbid(unsafe_code)]

use std::collections::BTreeMap;

pub const DEFAULT_PER_PAGE: u32 = 15;

/// Which slice of a family's records a query sees. Archive exclusion is
/// applied before the hidden/visible partition; `All` keeps the partition
/// open within the live universe, `ArchivedOnly` flips to the archived one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
    All,
    ArchivedOnly,
}

/// Sentinel-aware status filter. Absence of the `status` query parameter
/// means `ExcludeCompleted`, which also keeps rows whose status is NULL or
/// empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    ExcludeCompleted,
    All,
    Exact(String),
}

impl StatusFilter {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") | Some("exclude_completed") => Self::ExcludeCompleted,
            Some("all") => Self::All,
            Some(value) => Self::Exact(value.to_string()),
        }
    }
}

/// Page size: a positive integer or the `"all"` sentinel. Anything
/// unparseable falls back to [`DEFAULT_PER_PAGE`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PerPage {
    All,
    Limit(u32),
}

impl PerPage {
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::Limit(DEFAULT_PER_PAGE);
        };
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Self::All;
        }
        match trimmed.parse::<u32>() {
            Ok(value) if value > 0 => Self::Limit(value),
            _ => Self::Limit(DEFAULT_PER_PAGE),
        }
    }
}

impl Default for PerPage {
    fn default() -> Self {
        Self::Limit(DEFAULT_PER_PAGE)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub per_page: PerPage,
    pub page: u32,
}

impl PageRequest {
    pub fn from_query(query: &BTreeMap<String, String>) -> Self {
        let per_page = query
            .get("per_page")
            .or_else(|| query.get("perPage"))
            .map(String::as_str);
        Self {
            per_page: PerPage::parse(per_page),
            page: parse_page(query.get("page").map(String::as_str)),
        }
    }

    pub fn all() -> Self {
        Self {
            per_page: PerPage::All,
            page: 1,
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            per_page: PerPage::default(),
            page: 1,
        }
    }
}

fn parse_page(raw: Option<&str>) -> u32 {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|page| *page >= 1)
        .unwrap_or(1)
}

/// Permissive truthy coercion for boolean-ish query values.
pub fn is_truthy(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}

/// Normalized description of one listing request's predicates. Every field
/// is optional; the default value matches every live, visible record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterSpec {
    pub city: Option<String>,
    pub property: Option<String>,
    pub unit: Option<String>,
    pub vendor: Option<String>,
    pub tenant: Option<String>,
    pub search: Option<String>,
    pub status: StatusFilter,
    pub visibility: Visibility,
}

impl FilterSpec {
    /// Builds a spec from raw query parameters. Empty and whitespace-only
    /// values count as absent; unknown keys are ignored.
    pub fn from_query(query: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            query
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };

        let hidden = query
            .get("is_hidden")
            .is_some_and(|value| is_truthy(value));

        Self {
            city: get("city"),
            property: get("property"),
            unit: get("unit").or_else(|| get("unit_name")),
            vendor: get("vendor_name"),
            tenant: get("tenant"),
            search: get("search"),
            status: StatusFilter::parse(query.get("status").map(String::as_str)),
            visibility: if hidden {
                Visibility::Hidden
            } else {
                Visibility::Visible
            },
        }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }
}
