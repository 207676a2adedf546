//! Migrate command implementation

use anyhow::Result;
use ratchet_migrate::Outcome;

use crate::cli::{GlobalArgs, MigrateArgs};
use crate::context::RuntimeContext;

/// Execute the migrate command
pub(crate) fn execute(args: &MigrateArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;
    let use_transaction = ctx.config.use_transaction && !args.no_transaction;
    ctx.verbose(&format!(
        "migration root: {}, transactional: {}",
        ctx.migration_root().display(),
        use_transaction
    ));
    let mut manager = ctx.manager_with(use_transaction)?;

    match manager.update_to(args.to) {
        Ok(Outcome::Ok) => {
            let version = manager.current_schema_version()?;
            println!("Migrated {} to schema version {}", ctx.config.name, version);
            Ok(())
        }
        Ok(Outcome::AtCurrentVersion) => {
            let version = manager.current_schema_version()?;
            println!("Already at schema version {}", version);
            Ok(())
        }
        Ok(Outcome::NoMigrationsFound) => {
            let target = args
                .to
                .map(|v| v.to_string())
                .unwrap_or_else(|| "latest".to_string());
            anyhow::bail!("No migrations found to reach version {}", target)
        }
        Err(e) => {
            if manager.is_rollback() {
                eprintln!("Migration failed - all changes were rolled back");
            } else if let Ok(version) = manager.current_schema_version() {
                eprintln!(
                    "Migration failed partway - database left at schema version {}",
                    version
                );
            }
            Err(e.into())
        }
    }
}

#[cfg(test)]
#[path = "migrate_test.rs"]
mod tests;
