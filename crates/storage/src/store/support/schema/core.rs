#![forbid(unsafe_code)]

pub(super) const SQL: &str = r#"

        CREATE TABLE IF NOT EXISTS schema_state (
          singleton INTEGER PRIMARY KEY CHECK(singleton = 1),
          schema_version INTEGER NOT NULL,
          created_at_ms INTEGER NOT NULL,
          updated_at_ms INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS cities (
          id INTEGER PRIMARY KEY,
          city TEXT NOT NULL,
          created_at_ms INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS properties (
          id INTEGER PRIMARY KEY,
          city_id INTEGER REFERENCES cities(id) ON DELETE SET NULL,
          property_name TEXT NOT NULL,
          is_archived INTEGER NOT NULL DEFAULT 0,
          created_at_ms INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS units (
          id INTEGER PRIMARY KEY,
          property_id INTEGER REFERENCES properties(id) ON DELETE SET NULL,
          unit_name TEXT NOT NULL,
          tenants TEXT,
          vacant TEXT NOT NULL DEFAULT 'Yes',
          listed TEXT NOT NULL DEFAULT 'Yes',
          is_archived INTEGER NOT NULL DEFAULT 0,
          created_at_ms INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS tenants (
          id INTEGER PRIMARY KEY,
          unit_id INTEGER REFERENCES units(id) ON DELETE SET NULL,
          first_name TEXT NOT NULL,
          last_name TEXT NOT NULL,
          is_archived INTEGER NOT NULL DEFAULT 0,
          created_at_ms INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS vendors (
          id INTEGER PRIMARY KEY,
          city_id INTEGER REFERENCES cities(id) ON DELETE SET NULL,
          vendor_name TEXT NOT NULL,
          is_archived INTEGER NOT NULL DEFAULT 0,
          created_at_ms INTEGER NOT NULL
        );
"#;
