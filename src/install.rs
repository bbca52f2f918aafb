use anyhow::Result;

use crate::packages;
use crate::pkgmgr::PackageManager;

/// Refresh the package index, then install the fixed Qt runtime list.
/// Exactly two package manager operations, always in this order.
pub fn run(mgr: &dyn PackageManager) -> Result<()> {
    println!("=== Qt Runtime Dependencies ({}) ===\n", mgr.name());

    tracing::info!(manager = mgr.name(), "refreshing package index");
    mgr.refresh()?;
    println!("✓ Package index refreshed");

    let packages = packages::runtime_packages();
    tracing::info!(count = packages.len(), "installing Qt runtime libraries");
    mgr.install(&packages)?;
    println!("✓ Qt/XCB runtime libraries installed");

    Ok(())
}
