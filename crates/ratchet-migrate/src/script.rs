//! Change-script contract

use crate::error::MigrateResult;
use ratchet_db::Database;

/// A paired forward/backward unit of schema change.
///
/// Implementations are author-supplied and resolved by name through the
/// [`crate::registry::ScriptRegistry`]; the manager has no compile-time
/// knowledge of concrete variants. `down()` must be the exact structural
/// inverse of `up()` - the manager does not verify this.
pub trait ChangeScript {
    /// Apply the change
    fn up(&self, db: &dyn Database, table_prefix: &str) -> MigrateResult<()>;

    /// Reverse the change
    fn down(&self, db: &dyn Database, table_prefix: &str) -> MigrateResult<()>;
}
