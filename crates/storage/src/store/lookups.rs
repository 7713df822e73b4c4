#![forbid(unsafe_code)]

use super::support::normalize_non_empty;
use super::{
    CityOption, NewCity, NewProperty, NewTenant, NewUnit, NewVendor, PropertyOption, SqliteStore,
    StoreError, TenantRow, UnitRow, now_ms,
};
use rusqlite::{OptionalExtension, params};

impl SqliteStore {
    pub fn create_city(&self, req: &NewCity) -> Result<i64, StoreError> {
        let city = normalize_non_empty(&req.city, "city name is required")?;
        self.conn.execute(
            "INSERT INTO cities(city, created_at_ms) VALUES (?1, ?2)",
            params![city, now_ms()],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn create_property(&self, req: &NewProperty) -> Result<i64, StoreError> {
        let name = normalize_non_empty(&req.property_name, "property name is required")?;
        self.conn.execute(
            "INSERT INTO properties(city_id, property_name, created_at_ms) VALUES (?1, ?2, ?3)",
            params![req.city_id, name, now_ms()],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Creates a unit. Occupancy fields are derived from the tenants text:
    /// an empty tenant list means the unit is vacant and stays listed.
    pub fn create_unit(&self, req: &NewUnit) -> Result<i64, StoreError> {
        let name = normalize_non_empty(&req.unit_name, "unit name is required")?;
        let tenants = req
            .tenants
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty());
        let vacant = if tenants.is_none() { "Yes" } else { "No" };
        let listed = if tenants.is_none() { "Yes" } else { "No" };
        self.conn.execute(
            "INSERT INTO units(property_id, unit_name, tenants, vacant, listed, created_at_ms) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![req.property_id, name, tenants, vacant, listed, now_ms()],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn create_tenant(&self, req: &NewTenant) -> Result<i64, StoreError> {
        let first = normalize_non_empty(&req.first_name, "tenant first name is required")?;
        let last = normalize_non_empty(&req.last_name, "tenant last name is required")?;
        self.conn.execute(
            "INSERT INTO tenants(unit_id, first_name, last_name, created_at_ms) \
             VALUES (?1, ?2, ?3, ?4)",
            params![req.unit_id, first, last, now_ms()],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn create_vendor(&self, req: &NewVendor) -> Result<i64, StoreError> {
        let name = normalize_non_empty(&req.vendor_name, "vendor name is required")?;
        self.conn.execute(
            "INSERT INTO vendors(city_id, vendor_name, created_at_ms) VALUES (?1, ?2, ?3)",
            params![req.city_id, name, now_ms()],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn cities(&self) -> Result<Vec<CityOption>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, city FROM cities ORDER BY city, id")?;
        let mut rows = stmt.query([])?;
        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            out.push(CityOption {
                id: row.get(0)?,
                city: row.get(1)?,
            });
        }
        Ok(out)
    }

    pub fn properties_in_city(&self, city_id: i64) -> Result<Vec<PropertyOption>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT p.id, p.property_name, c.city FROM properties p \
             LEFT JOIN cities c ON c.id = p.city_id \
             WHERE p.city_id = ?1 AND p.is_archived = 0 \
             ORDER BY p.property_name, p.id",
        )?;
        let mut rows = stmt.query(params![city_id])?;
        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            out.push(PropertyOption {
                id: row.get(0)?,
                property_name: row.get(1)?,
                city: row.get(2)?,
            });
        }
        Ok(out)
    }

    pub fn get_unit(&self, id: i64) -> Result<Option<UnitRow>, StoreError> {
        Ok(self
            .conn
            .query_row(
                "SELECT id, property_id, unit_name, tenants, vacant, listed, is_archived, \
                 created_at_ms FROM units WHERE id = ?1",
                params![id],
                map_unit_row,
            )
            .optional()?)
    }

    pub fn get_tenant(&self, id: i64) -> Result<Option<TenantRow>, StoreError> {
        Ok(self
            .conn
            .query_row(
                "SELECT id, unit_id, first_name, last_name, is_archived, created_at_ms \
                 FROM tenants WHERE id = ?1",
                params![id],
                |row| {
                    Ok(TenantRow {
                        id: row.get(0)?,
                        unit_id: row.get(1)?,
                        first_name: row.get(2)?,
                        last_name: row.get(3)?,
                        is_archived: row.get(4)?,
                        created_at_ms: row.get(5)?,
                    })
                },
            )
            .optional()?)
    }

    pub fn units_in_property(&self, property_id: i64) -> Result<Vec<UnitRow>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, property_id, unit_name, tenants, vacant, listed, is_archived, \
             created_at_ms FROM units WHERE property_id = ?1 AND is_archived = 0 \
             ORDER BY unit_name, id",
        )?;
        let mut rows = stmt.query(params![property_id])?;
        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            out.push(map_unit_row(row)?);
        }
        Ok(out)
    }

    /// Resolves a unit by exact name within the live universe, optionally
    /// scoped to a city name. Ambiguous names resolve to the oldest unit.
    pub fn resolve_unit_id(
        &self,
        unit_name: &str,
        city: Option<&str>,
    ) -> Result<Option<i64>, StoreError> {
        let name = normalize_non_empty(unit_name, "unit name is required")?;
        match city {
            Some(city) => Ok(self
                .conn
                .query_row(
                    "SELECT u.id FROM units u \
                     LEFT JOIN properties p ON p.id = u.property_id \
                     LEFT JOIN cities c ON c.id = p.city_id \
                     WHERE u.unit_name = ?1 AND c.city = ?2 AND u.is_archived = 0 \
                     ORDER BY u.id LIMIT 1",
                    params![name, city],
                    |row| row.get(0),
                )
                .optional()?),
            None => Ok(self
                .conn
                .query_row(
                    "SELECT id FROM units WHERE unit_name = ?1 AND is_archived = 0 \
                     ORDER BY id LIMIT 1",
                    params![name],
                    |row| row.get(0),
                )
                .optional()?),
        }
    }

    pub fn resolve_vendor_id(&self, vendor_name: &str) -> Result<Option<i64>, StoreError> {
        let name = normalize_non_empty(vendor_name, "vendor name is required")?;
        Ok(self
            .conn
            .query_row(
                "SELECT id FROM vendors WHERE vendor_name = ?1 AND is_archived = 0 \
                 ORDER BY id LIMIT 1",
                params![name],
                |row| row.get(0),
            )
            .optional()?)
    }
}

fn map_unit_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<UnitRow> {
    Ok(UnitRow {
        id: row.get(0)?,
        property_id: row.get(1)?,
        unit_name: row.get(2)?,
        tenants: row.get(3)?,
        vacant: row.get(4)?,
        listed: row.get(5)?,
        is_archived: row.get(6)?,
        created_at_ms: row.get(7)?,
    })
}
