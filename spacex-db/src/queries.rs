//! Typed query methods for retrieving launch data from the database.
//!
//! All queries return typed structs from [`crate::models`] that can be
//! serialized to JSON for the D3.js chart components. Groupings are ordered
//! by `MIN(id)`, i.e. by the first row in which each group appears in the
//! source CSV.

use crate::models::{LaunchRecord, OutcomeCount, PayloadBounds, SiteSuccessCount};
use crate::Database;
use rusqlite::params;

impl Database {
    /// Number of launch records loaded.
    pub fn query_launch_count(&self) -> anyhow::Result<i64> {
        let conn = self.conn.borrow();
        let count = conn.query_row("SELECT COUNT(*) FROM launches", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Get the (min, max) payload mass across all launches.
    ///
    /// Fails when no launches are loaded, since there is no range to derive.
    pub fn query_payload_bounds(&self) -> anyhow::Result<PayloadBounds> {
        let conn = self.conn.borrow();
        let (min, max) = conn.query_row(
            "SELECT MIN(payload_mass_kg), MAX(payload_mass_kg) FROM launches",
            [],
            |row| Ok((row.get::<_, Option<f64>>(0)?, row.get::<_, Option<f64>>(1)?)),
        )?;
        let (Some(min), Some(max)) = (min, max) else {
            anyhow::bail!("no launch records loaded; payload bounds are undefined");
        };
        log::info!(
            "[Launch DB] query: query_payload_bounds returned ({}, {})",
            min,
            max
        );
        Ok(PayloadBounds { min, max })
    }

    /// Get the distinct launch site names in first-encountered order.
    pub fn query_launch_sites(&self) -> anyhow::Result<Vec<String>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT launch_site FROM launches
             GROUP BY launch_site
             ORDER BY MIN(id)",
        )?;
        let rows = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        log::info!(
            "[Launch DB] query: query_launch_sites returned {} sites",
            rows.len()
        );
        Ok(rows)
    }

    /// Get the number of successful launches per site.
    ///
    /// Every site appears, including sites with no successes, so the result
    /// has exactly one entry per distinct site.
    pub fn query_success_by_site(&self) -> anyhow::Result<Vec<SiteSuccessCount>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT launch_site, SUM(class) FROM launches
             GROUP BY launch_site
             ORDER BY MIN(id)",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(SiteSuccessCount {
                    launch_site: row.get(0)?,
                    successes: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[Launch DB] query: query_success_by_site returned {} records",
            rows.len()
        );
        Ok(rows)
    }

    /// Count launches per outcome class at one site.
    ///
    /// Returns at most two entries. An unknown site yields an empty result.
    pub fn query_outcome_counts(&self, launch_site: &str) -> anyhow::Result<Vec<OutcomeCount>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT class, COUNT(*) FROM launches
             WHERE launch_site = ?1
             GROUP BY class
             ORDER BY MIN(id)",
        )?;
        let rows = stmt
            .query_map(params![launch_site], |row| {
                Ok(OutcomeCount {
                    class: row.get(0)?,
                    launches: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[Launch DB] query: query_outcome_counts({}) returned {} records",
            launch_site,
            rows.len()
        );
        Ok(rows)
    }

    /// Get launches whose payload mass lies in `[low, high]`, both ends
    /// inclusive, optionally restricted to one site. Rows keep CSV order.
    ///
    /// A reversed range (`low > high`) matches nothing.
    pub fn query_launches(
        &self,
        launch_site: Option<&str>,
        low: f64,
        high: f64,
    ) -> anyhow::Result<Vec<LaunchRecord>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT flight_number, launch_site, class, payload_mass_kg,
                    booster_version, booster_version_category
             FROM launches
             WHERE (?1 IS NULL OR launch_site = ?1)
               AND payload_mass_kg >= ?2 AND payload_mass_kg <= ?3
             ORDER BY id",
        )?;
        let rows = stmt
            .query_map(params![launch_site, low, high], |row| {
                Ok(LaunchRecord {
                    flight_number: row.get(0)?,
                    launch_site: row.get(1)?,
                    class: row.get(2)?,
                    payload_mass_kg: row.get(3)?,
                    booster_version: row.get(4)?,
                    booster_version_category: row.get(5)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[Launch DB] query: query_launches({:?}, {}, {}) returned {} records",
            launch_site,
            low,
            high,
            rows.len()
        );
        Ok(rows)
    }
}
