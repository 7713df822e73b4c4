#![forbid(unsafe_code)]

#[derive(Clone, Debug, PartialEq)]
pub struct UnitRow {
    pub id: i64,
    pub property_id: Option<i64>,
    pub unit_name: String,
    pub tenants: Option<String>,
    pub vacant: String,
    pub listed: String,
    pub is_archived: bool,
    pub created_at_ms: i64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TenantRow {
    pub id: i64,
    pub unit_id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub is_archived: bool,
    pub created_at_ms: i64,
}

impl TenantRow {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

#[derive(Clone, Debug)]
pub struct NewCity {
    pub city: String,
}

#[derive(Clone, Debug)]
pub struct NewProperty {
    pub city_id: Option<i64>,
    pub property_name: String,
}

#[derive(Clone, Debug)]
pub struct NewUnit {
    pub property_id: Option<i64>,
    pub unit_name: String,
    pub tenants: Option<String>,
}

#[derive(Clone, Debug)]
pub struct NewTenant {
    pub unit_id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Clone, Debug)]
pub struct NewVendor {
    pub city_id: Option<i64>,
    pub vendor_name: String,
}
