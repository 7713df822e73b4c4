#![forbid(unsafe_code)]

use super::{DropdownData, PropertyOption, SqliteStore, StoreError, UnitOption, VendorOption};
use std::collections::BTreeMap;

impl SqliteStore {
    /// Builds every dropdown and filter list in one pass over the live
    /// universe. Grouped maps are keyed by parent names, so a record whose
    /// parent chain has a gap appears in the flat lists only.
    pub fn dropdown_data(&self) -> Result<DropdownData, StoreError> {
        let cities = self.cities()?;
        let properties = self.live_properties()?;
        let units = self.live_units()?;
        let vendors = self.live_vendors()?;

        let mut properties_by_city: BTreeMap<String, Vec<PropertyOption>> = BTreeMap::new();
        for property in &properties {
            if let Some(city) = &property.city {
                properties_by_city
                    .entry(city.clone())
                    .or_default()
                    .push(property.clone());
            }
        }

        let mut units_by_property: BTreeMap<String, BTreeMap<String, Vec<UnitOption>>> =
            BTreeMap::new();
        let mut units_by_city: BTreeMap<String, Vec<UnitOption>> = BTreeMap::new();
        for unit in &units {
            if let Some(city) = &unit.city {
                units_by_city.entry(city.clone()).or_default().push(unit.clone());
                if let Some(property) = &unit.property_name {
                    units_by_property
                        .entry(city.clone())
                        .or_default()
                        .entry(property.clone())
                        .or_default()
                        .push(unit.clone());
                }
            }
        }

        let mut vendors_by_city: BTreeMap<String, Vec<VendorOption>> = BTreeMap::new();
        for vendor in &vendors {
            if let Some(city) = &vendor.city {
                vendors_by_city
                    .entry(city.clone())
                    .or_default()
                    .push(vendor.clone());
            }
        }

        let filter_cities = dedup_names(cities.iter().map(|c| c.city.clone()));
        let filter_properties = dedup_names(properties.iter().map(|p| p.property_name.clone()));
        let filter_units = dedup_names(units.iter().map(|u| u.unit_name.clone()));
        let filter_vendors = dedup_names(vendors.iter().map(|v| v.vendor_name.clone()));

        Ok(DropdownData {
            cities,
            properties,
            units,
            vendors,
            properties_by_city,
            units_by_property,
            units_by_city,
            vendors_by_city,
            filter_cities,
            filter_properties,
            filter_units,
            filter_vendors,
        })
    }

    fn live_properties(&self) -> Result<Vec<PropertyOption>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT p.id, p.property_name, c.city FROM properties p \
             LEFT JOIN cities c ON c.id = p.city_id \
             WHERE p.is_archived = 0 ORDER BY p.property_name, p.id",
        )?;
        let mut rows = stmt.query([])?;
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

    fn live_units(&self) -> Result<Vec<UnitOption>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT u.id, u.unit_name, p.property_name, c.city FROM units u \
             LEFT JOIN properties p ON p.id = u.property_id \
             LEFT JOIN cities c ON c.id = p.city_id \
             WHERE u.is_archived = 0 ORDER BY u.unit_name, u.id",
        )?;
        let mut rows = stmt.query([])?;
        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            out.push(UnitOption {
                id: row.get(0)?,
                unit_name: row.get(1)?,
                property_name: row.get(2)?,
                city: row.get(3)?,
            });
        }
        Ok(out)
    }

    fn live_vendors(&self) -> Result<Vec<VendorOption>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT v.id, v.vendor_name, c.city FROM vendors v \
             LEFT JOIN cities c ON c.id = v.city_id \
             WHERE v.is_archived = 0 ORDER BY v.vendor_name, v.id",
        )?;
        let mut rows = stmt.query([])?;
        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            out.push(VendorOption {
                id: row.get(0)?,
                vendor_name: row.get(1)?,
                city: row.get(2)?,
            });
        }
        Ok(out)
    }
}

fn dedup_names(names: impl Iterator<Item = String>) -> Vec<String> {
    let mut names: Vec<String> = names.collect();
    names.sort();
    names.dedup();
    names
}
