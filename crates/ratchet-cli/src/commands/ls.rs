//! Ls command implementation - lists discovered migrations

use anyhow::Result;
use ratchet_core::find_migrations;

use crate::cli::{GlobalArgs, LsArgs, LsOutput};
use crate::context::RuntimeContext;

/// Execute the ls command
pub(crate) fn execute(args: &LsArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;
    let manager = ctx.manager()?;

    let current = manager.current_schema_version()?;
    let records = find_migrations(0, i64::MAX, &ctx.migration_root())?;

    match args.output {
        LsOutput::Table => {
            println!("{:>8}  {:<24}  {:<8}  PATH", "VERSION", "NAME", "STATUS");
            for record in &records {
                let status = if record.version <= current {
                    "applied"
                } else {
                    "pending"
                };
                println!(
                    "{:>8}  {:<24}  {:<8}  {}",
                    record.version,
                    record.name,
                    status,
                    record.relative_path.display()
                );
            }
            println!();
            println!(
                "{} migration(s), current schema version {}",
                records.len(),
                current
            );
        }
        LsOutput::Json => {
            let migrations: Vec<serde_json::Value> = records
                .iter()
                .map(|record| {
                    serde_json::json!({
                        "version": record.version,
                        "name": record.name,
                        "path": record.relative_path.display().to_string(),
                        "status": if record.version <= current { "applied" } else { "pending" },
                    })
                })
                .collect();

            let output = serde_json::json!({
                "current_version": current,
                "migrations": migrations,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
