//! In-memory SQLite database layer for SpaceX launch records.
//!
//! Loads the launch CSV once into an in-memory SQLite database and exposes
//! typed, read-only query methods for the dashboard callbacks and the CLI.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in single-threaded WASM
//! - In-memory SQLite via `rusqlite`
//! - CSV data loaded via `include_str!` at compile time in the dashboard crate,
//!   or read from disk by the CLI
//! - Typed query methods returning serializable structs for JSON export to D3.js
//!
//! # Usage
//!
//! ```rust
//! use spacex_db::Database;
//!
//! let db = Database::new().unwrap();
//! db.load_launches("\
//! Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
//! 1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
//! ").unwrap();
//!
//! let sites = db.query_launch_sites().unwrap();
//! assert_eq!(sites, vec!["CCAFS LC-40".to_string()]);
//! ```
//!
//! # Tables
//!
//! See [`schema::create_schema`] for the full SQL schema. The single
//! `launches` table keeps CSV row order in its `id` column, which every
//! "first encountered" ordering relies on.

pub mod schema;
mod loader;
mod queries;
pub mod models;

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// CSV header names the loader looks up.
pub mod columns {
    pub const FLIGHT_NUMBER: &str = "Flight Number";
    pub const LAUNCH_SITE: &str = "Launch Site";
    pub const CLASS: &str = "class";
    pub const PAYLOAD_MASS_KG: &str = "Payload Mass (kg)";
    pub const BOOSTER_VERSION: &str = "Booster Version";
    pub const BOOSTER_VERSION_CATEGORY: &str = "Booster Version Category";
}

/// In-memory SQLite database holding the launch records.
///
/// Cheaply cloneable (via `Rc`); every clone sees the same data. After
/// [`load_launches`](Self::load_launches) succeeds the data is only read.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the schema applied.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }

    /// Create a database and load `csv_data` into it in one step.
    pub fn from_csv(csv_data: &str) -> anyhow::Result<Self> {
        let db = Self::new()?;
        db.load_launches(csv_data)?;
        Ok(db)
    }
}
