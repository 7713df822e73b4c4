#![forbid(unsafe_code)]

pub(super) const SQL: &str = r#"

        CREATE TABLE IF NOT EXISTS move_ins (
          id INTEGER PRIMARY KEY,
          unit_id INTEGER REFERENCES units(id) ON DELETE SET NULL,
          move_in_date TEXT NOT NULL,
          signed_lease TEXT,
          tenant_name TEXT,
          last_notice_sent TEXT,
          is_hidden INTEGER NOT NULL DEFAULT 0,
          is_archived INTEGER NOT NULL DEFAULT 0,
          created_at_ms INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS move_outs (
          id INTEGER PRIMARY KEY,
          unit_id INTEGER REFERENCES units(id) ON DELETE SET NULL,
          move_out_date TEXT NOT NULL,
          lease_status TEXT,
          keys_location TEXT,
          walkthrough TEXT,
          repairs TEXT,
          notes TEXT,
          send_back_security_deposit TEXT,
          list_the_unit TEXT,
          tenants TEXT,
          utility_type TEXT,
          is_hidden INTEGER NOT NULL DEFAULT 0,
          is_archived INTEGER NOT NULL DEFAULT 0,
          created_at_ms INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS vendor_tasks (
          id INTEGER PRIMARY KEY,
          unit_id INTEGER REFERENCES units(id) ON DELETE SET NULL,
          vendor_id INTEGER REFERENCES vendors(id) ON DELETE SET NULL,
          task_submission_date TEXT NOT NULL,
          assigned_tasks TEXT,
          any_scheduled_visits TEXT,
          task_ending_date TEXT,
          notes TEXT,
          status TEXT,
          urgent TEXT,
          is_hidden INTEGER NOT NULL DEFAULT 0,
          is_archived INTEGER NOT NULL DEFAULT 0,
          created_at_ms INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS payment_plans (
          id INTEGER PRIMARY KEY,
          unit_id INTEGER REFERENCES units(id) ON DELETE SET NULL,
          tenant TEXT,
          plan_date TEXT NOT NULL,
          amount REAL,
          paid REAL,
          left_to_pay REAL,
          dates TEXT,
          notes TEXT,
          status TEXT,
          is_hidden INTEGER NOT NULL DEFAULT 0,
          is_archived INTEGER NOT NULL DEFAULT 0,
          created_at_ms INTEGER NOT NULL
        );
"#;
