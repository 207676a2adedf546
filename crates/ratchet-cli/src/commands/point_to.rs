//! Point-to command implementation - administrative version override

use anyhow::Result;

use crate::cli::{GlobalArgs, PointToArgs};
use crate::context::RuntimeContext;

/// Execute the point-to command
pub(crate) fn execute(args: &PointToArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;
    let manager = ctx.manager()?;

    manager.set_current_schema_version(args.version)?;

    // Read back so clamped input reports what was actually stored
    let version = manager.current_schema_version()?;
    println!("Schema version set to {} (no scripts were run)", version);
    Ok(())
}
