#![forbid(unsafe_code)]

#[derive(Clone, Debug, PartialEq)]
pub struct MoveOutRow {
    pub id: i64,
    pub unit_id: Option<i64>,
    pub move_out_date: String,
    pub lease_status: Option<String>,
    pub keys_location: Option<String>,
    pub walkthrough: Option<String>,
    pub repairs: Option<String>,
    pub notes: Option<String>,
    pub send_back_security_deposit: Option<String>,
    pub list_the_unit: Option<String>,
    pub tenants: Option<String>,
    pub utility_type: Option<String>,
    pub is_hidden: bool,
    pub is_archived: bool,
    pub created_at_ms: i64,
}

#[derive(Clone, Debug)]
pub struct NewMoveOut {
    pub unit_id: Option<i64>,
    pub move_out_date: String,
    pub lease_status: Option<String>,
    pub keys_location: Option<String>,
    pub walkthrough: Option<String>,
    pub repairs: Option<String>,
    pub notes: Option<String>,
    pub send_back_security_deposit: Option<String>,
    pub list_the_unit: Option<String>,
    pub tenants: Option<String>,
    pub utility_type: Option<String>,
    pub created_at_ms: i64,
}
