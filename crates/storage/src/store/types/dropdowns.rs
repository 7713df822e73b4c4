#![forbid(unsafe_code)]

use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CityOption {
    pub id: i64,
    pub city: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PropertyOption {
    pub id: i64,
    pub property_name: String,
    pub city: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UnitOption {
    pub id: i64,
    pub unit_name: String,
    pub property_name: Option<String>,
    pub city: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VendorOption {
    pub id: i64,
    pub vendor_name: String,
    pub city: Option<String>,
}

/// Hierarchical and flattened lookup lists for filter UIs. Grouped maps are
/// keyed by parent display name and omit records whose parent chain has a
/// gap; flat option lists carry every live record with nullable parent
/// names; `filter_*` lists are deduplicated names, alphabetical.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DropdownData {
    pub cities: Vec<CityOption>,
    pub properties: Vec<PropertyOption>,
    pub units: Vec<UnitOption>,
    pub vendors: Vec<VendorOption>,
    pub properties_by_city: BTreeMap<String, Vec<PropertyOption>>,
    pub units_by_property: BTreeMap<String, BTreeMap<String, Vec<UnitOption>>>,
    pub units_by_city: BTreeMap<String, Vec<UnitOption>>,
    pub vendors_by_city: BTreeMap<String, Vec<VendorOption>>,
    pub filter_cities: Vec<String>,
    pub filter_properties: Vec<String>,
    pub filter_units: Vec<String>,
    pub filter_vendors: Vec<String>,
}
