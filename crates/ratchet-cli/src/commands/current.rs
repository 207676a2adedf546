//! Current command implementation

use anyhow::Result;

use crate::cli::GlobalArgs;
use crate::context::RuntimeContext;

/// Execute the current command
pub(crate) fn execute(global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;
    let manager = ctx.manager()?;

    println!("{}", manager.current_schema_version()?);
    Ok(())
}
