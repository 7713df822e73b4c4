#![forbid(unsafe_code)]

#[derive(Clone, Debug, PartialEq)]
pub struct VendorTaskRow {
    pub id: i64,
    pub unit_id: Option<i64>,
    pub vendor_id: Option<i64>,
    pub task_submission_date: String,
    pub assigned_tasks: Option<String>,
    pub any_scheduled_visits: Option<String>,
    pub task_ending_date: Option<String>,
    pub notes: Option<String>,
    pub status: Option<String>,
    pub urgent: Option<String>,
    pub is_hidden: bool,
    pub is_archived: bool,
    pub created_at_ms: i64,
}

#[derive(Clone, Debug)]
pub struct NewVendorTask {
    pub unit_id: Option<i64>,
    pub vendor_id: Option<i64>,
    pub task_submission_date: String,
    pub assigned_tasks: Option<String>,
    pub any_scheduled_visits: Option<String>,
    pub task_ending_date: Option<String>,
    pub notes: Option<String>,
    pub status: Option<String>,
    pub urgent: Option<String>,
    pub created_at_ms: i64,
}
