//! Latest command implementation

use anyhow::Result;
use ratchet_core::find_migrations;

use crate::cli::GlobalArgs;
use crate::context::RuntimeContext;

/// Execute the latest command
pub(crate) fn execute(global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;

    // Catalog over (0, MAX] ascending; the last record is the newest
    let records = find_migrations(0, i64::MAX, &ctx.migration_root())?;
    let latest = records.last().map(|r| r.version).unwrap_or(0);

    println!("{}", latest);
    Ok(())
}
