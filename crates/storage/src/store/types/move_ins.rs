#![forbid(unsafe_code)]

#[derive(Clone, Debug, PartialEq)]
pub struct MoveInRow {
    pub id: i64,
    pub unit_id: Option<i64>,
    pub move_in_date: String,
    pub signed_lease: Option<String>,
    pub tenant_name: Option<String>,
    pub last_notice_sent: Option<String>,
    pub is_hidden: bool,
    pub is_archived: bool,
    pub created_at_ms: i64,
}

#[derive(Clone, Debug)]
pub struct NewMoveIn {
    pub unit_id: Option<i64>,
    pub move_in_date: String,
    pub signed_lease: Option<String>,
    pub tenant_name: Option<String>,
    pub last_notice_sent: Option<String>,
    pub created_at_ms: i64,
}
