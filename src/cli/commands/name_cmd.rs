//! cli::commands::name_cmd
//!
//! Resolve the repository name a description would produce. Useful for
//! previewing what `create` will do without touching any service.

use anyhow::Result;

use crate::core::naming;

/// Run the name command.
pub fn name(description: &str, explicit: Option<&str>) -> Result<()> {
    let resolved = naming::resolve(description, explicit);
    println!("{resolved}");
    Ok(())
}
