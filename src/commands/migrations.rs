//! Database schema status command.

use crate::db::db::Db;
use crate::db::migrations;
use anyhow::Result;

/// Opens the database, which applies any pending migrations, and prints
/// the resulting schema version.
pub fn cmd() -> Result<()> {
    let db = Db::new()?;
    migrations::print_status(&db.conn)?;
    Ok(())
}
