//! SQL schema for the in-memory launch database.

/// Returns the full SQL schema as a single batch string.
///
/// The `launches` table holds one row per CSV record. `id` is assigned in
/// load order, so `ORDER BY id` (or `MIN(id)` in a group) reproduces the
/// order in which rows appeared in the source file.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS launches (
        id INTEGER PRIMARY KEY,
        flight_number INTEGER,
        launch_site TEXT NOT NULL,
        class INTEGER NOT NULL CHECK (class IN (0, 1)),
        payload_mass_kg REAL NOT NULL,
        booster_version TEXT,
        booster_version_category TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_launches_site ON launches(launch_site);
    CREATE INDEX IF NOT EXISTS idx_launches_payload ON launches(payload_mass_kg);
    "#
}
