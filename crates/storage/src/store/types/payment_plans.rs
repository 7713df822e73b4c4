#![forbid(unsafe_code)]

#[derive(Clone, Debug, PartialEq)]
pub struct PaymentPlanRow {
    pub id: i64,
    pub unit_id: Option<i64>,
    pub tenant: Option<String>,
    pub plan_date: String,
    pub amount: Option<f64>,
    pub paid: Option<f64>,
    pub left_to_pay: Option<f64>,
    pub dates: Option<String>,
    pub notes: Option<String>,
    pub status: Option<String>,
    pub is_hidden: bool,
    pub is_archived: bool,
    pub created_at_ms: i64,
}

#[derive(Clone, Debug)]
pub struct NewPaymentPlan {
    pub unit_id: Option<i64>,
    pub tenant: Option<String>,
    pub plan_date: String,
    pub amount: Option<f64>,
    pub paid: Option<f64>,
    pub left_to_pay: Option<f64>,
    pub dates: Option<String>,
    pub notes: Option<String>,
    pub status: Option<String>,
    pub created_at_ms: i64,
}
