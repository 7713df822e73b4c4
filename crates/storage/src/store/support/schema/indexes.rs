#![forbid(unsafe_code)]

pub(super) const SQL: &str = r#"

        CREATE INDEX IF NOT EXISTS idx_properties_city ON properties(city_id);
        CREATE INDEX IF NOT EXISTS idx_units_property ON units(property_id);
        CREATE INDEX IF NOT EXISTS idx_tenants_unit ON tenants(unit_id);
        CREATE INDEX IF NOT EXISTS idx_vendors_city ON vendors(city_id);

        CREATE INDEX IF NOT EXISTS idx_move_ins_scope_order
          ON move_ins(is_archived, is_hidden, move_in_date, created_at_ms, id);
        CREATE INDEX IF NOT EXISTS idx_move_outs_scope_order
          ON move_outs(is_archived, is_hidden, move_out_date, created_at_ms, id);
        CREATE INDEX IF NOT EXISTS idx_vendor_tasks_scope_order
          ON vendor_tasks(is_archived, is_hidden, task_submission_date, created_at_ms, id);
        CREATE INDEX IF NOT EXISTS idx_payment_plans_scope_order
          ON payment_plans(is_archived, is_hidden, plan_date, created_at_ms, id);

        CREATE INDEX IF NOT EXISTS idx_vendor_tasks_vendor ON vendor_tasks(vendor_id);
"#;
