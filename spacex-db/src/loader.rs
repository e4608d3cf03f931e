//! CSV loading for populating the in-memory launch database.
//!
//! The launch CSV has headers. Columns are located by name, so extra
//! columns (such as the unnamed index column pandas writes) and column
//! order do not matter.
//!
//! # CSV Format
//!
//! ```text
//! ,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
//! 0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
//! ```
//!
//! Required: `Launch Site`, `class`, `Payload Mass (kg)`, `Booster Version Category`.
//! Optional: `Flight Number`, `Booster Version`.

use crate::{columns, Database};
use anyhow::Context;
use csv::StringRecord;
use rusqlite::params;

/// Positions of the known columns within a CSV header row.
struct ColumnIndex {
    launch_site: usize,
    class: usize,
    payload_mass_kg: usize,
    booster_version_category: usize,
    flight_number: Option<usize>,
    booster_version: Option<usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> anyhow::Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let require = |name: &str| {
            find(name).with_context(|| format!("launch CSV is missing required column '{}'", name))
        };
        Ok(Self {
            launch_site: require(columns::LAUNCH_SITE)?,
            class: require(columns::CLASS)?,
            payload_mass_kg: require(columns::PAYLOAD_MASS_KG)?,
            booster_version_category: require(columns::BOOSTER_VERSION_CATEGORY)?,
            flight_number: find(columns::FLIGHT_NUMBER),
            booster_version: find(columns::BOOSTER_VERSION),
        })
    }
}

fn field<'r>(record: &'r StringRecord, index: usize) -> &'r str {
    record.get(index).unwrap_or("").trim()
}

fn optional_field(record: &StringRecord, index: Option<usize>) -> Option<&str> {
    index
        .map(|i| field(record, i))
        .filter(|value| !value.is_empty())
}

impl Database {
    /// Load launch records from a headered CSV string.
    ///
    /// All rows are inserted in a single transaction: a missing column, an
    /// unparsable number or a `class` other than 0/1 aborts the whole load and
    /// leaves the database empty. Loading into a database that already holds
    /// launches is an error, since the dataset is load-once.
    pub fn load_launches(&self, csv_data: &str) -> anyhow::Result<()> {
        let mut conn = self.conn.borrow_mut();

        let existing: i64 = conn.query_row("SELECT COUNT(*) FROM launches", [], |row| row.get(0))?;
        anyhow::ensure!(
            existing == 0,
            "launch records are already loaded ({} rows)",
            existing
        );

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());
        let index = ColumnIndex::from_headers(rdr.headers()?)?;

        let tx = conn.transaction()?;
        let mut count = 0u32;
        {
            let mut insert = tx.prepare(
                "INSERT INTO launches
                 (flight_number, launch_site, class, payload_mass_kg, booster_version, booster_version_category)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for result in rdr.records() {
                let r = result?;
                let line = r.position().map(|p| p.line()).unwrap_or_default();

                let launch_site = field(&r, index.launch_site);
                let class_str = field(&r, index.class);
                let class: u8 = class_str
                    .parse()
                    .with_context(|| format!("line {}: invalid class {:?}", line, class_str))?;
                anyhow::ensure!(
                    class <= 1,
                    "line {}: class must be 0 or 1, got {}",
                    line,
                    class
                );
                let payload_str = field(&r, index.payload_mass_kg);
                let payload_mass_kg: f64 = payload_str.parse().with_context(|| {
                    format!("line {}: invalid payload mass {:?}", line, payload_str)
                })?;
                let booster_version_category = field(&r, index.booster_version_category);
                let flight_number: Option<i64> = optional_field(&r, index.flight_number)
                    .map(|s| {
                        s.parse()
                            .with_context(|| format!("line {}: invalid flight number {:?}", line, s))
                    })
                    .transpose()?;
                let booster_version = optional_field(&r, index.booster_version);

                insert.execute(params![
                    flight_number,
                    launch_site,
                    class,
                    payload_mass_kg,
                    booster_version,
                    booster_version_category
                ])?;
                count += 1;
            }
        }
        tx.commit()?;

        log::info!("[Launch DB] loader: Loaded {} launch records", count);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::Database;

    fn count(db: &Database) -> i64 {
        db.query_launch_count().unwrap()
    }

    #[test]
    fn load_launches_from_csv() {
        let db = Database::new().unwrap();
        let csv = "\
,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
1,6,VAFB SLC-4E,0,500.0,F9 v1.1  B1003,v1.1
2,30,KSC LC-39A,1,2490.0,F9 FT B1031.1,FT
";
        db.load_launches(csv).unwrap();
        assert_eq!(count(&db), 3);

        let conn = db.conn.borrow();
        let (site, payload, booster): (String, f64, Option<String>) = conn
            .query_row(
                "SELECT launch_site, payload_mass_kg, booster_version FROM launches WHERE flight_number = 30",
                [],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .unwrap();
        assert_eq!(site, "KSC LC-39A");
        assert!((payload - 2490.0).abs() < 0.01);
        assert_eq!(booster.as_deref(), Some("F9 FT B1031.1"));
    }

    #[test]
    fn load_launches_finds_columns_by_name() {
        let db = Database::new().unwrap();
        let csv = "\
Booster Version Category,Payload Mass (kg),class,Launch Site
FT,3600.0,1,KSC LC-39A
";
        db.load_launches(csv).unwrap();

        let conn = db.conn.borrow();
        let (flight, booster, class): (Option<i64>, Option<String>, u8) = conn
            .query_row(
                "SELECT flight_number, booster_version, class FROM launches",
                [],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .unwrap();
        assert_eq!(flight, None, "Optional flight number column is absent");
        assert_eq!(booster, None, "Optional booster version column is absent");
        assert_eq!(class, 1);
    }

    #[test]
    fn load_launches_requires_known_columns() {
        let db = Database::new().unwrap();
        let csv = "\
Launch Site,class,Booster Version Category
CCAFS LC-40,0,v1.0
";
        let err = db.load_launches(csv).unwrap_err();
        assert!(
            err.to_string().contains("Payload Mass (kg)"),
            "Error should name the missing column, got: {}",
            err
        );
    }

    #[test]
    fn load_launches_rejects_empty_input() {
        let db = Database::new().unwrap();
        assert!(db.load_launches("").is_err(), "Empty CSV has no header row");
    }

    #[test]
    fn load_launches_rejects_malformed_payload_atomically() {
        let db = Database::new().unwrap();
        let csv = "\
Launch Site,class,Payload Mass (kg),Booster Version Category
CCAFS LC-40,0,525.0,v1.0
CCAFS LC-40,0,heavy,v1.0
";
        let err = db.load_launches(csv).unwrap_err();
        assert!(err.to_string().contains("invalid payload mass"));
        assert_eq!(count(&db), 0, "Failed load should not leave partial rows");
    }

    #[test]
    fn load_launches_rejects_non_binary_class() {
        let db = Database::new().unwrap();
        let csv = "\
Launch Site,class,Payload Mass (kg),Booster Version Category
CCAFS LC-40,3,525.0,v1.0
";
        let err = db.load_launches(csv).unwrap_err();
        assert!(err.to_string().contains("class must be 0 or 1"));
    }

    #[test]
    fn load_launches_is_load_once() {
        let db = Database::new().unwrap();
        let csv = "\
Launch Site,class,Payload Mass (kg),Booster Version Category
CCAFS LC-40,0,525.0,v1.0
";
        db.load_launches(csv).unwrap();
        assert!(db.load_launches(csv).is_err(), "Second load should be refused");
        assert_eq!(count(&db), 1);
    }
}
