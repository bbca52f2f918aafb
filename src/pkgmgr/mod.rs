mod apt;

pub use apt::Apt;

use anyhow::Result;

/// Package manager trait - the seam between the install flow and the
/// underlying OS tool
pub trait PackageManager: Send + Sync {
    /// Name of the package manager (e.g., "apt")
    fn name(&self) -> &str;

    /// Refresh the package index
    fn refresh(&self) -> Result<()>;

    /// Install packages by name, assuming yes to prompts
    fn install(&self, packages: &[&str]) -> Result<()>;
}
