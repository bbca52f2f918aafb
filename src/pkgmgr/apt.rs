use super::PackageManager;
use anyhow::Result;

use crate::cmd::{Runner, Shell};

/// Apt package manager (Debian, Ubuntu and derivatives)
pub struct Apt {
    runner: Box<dyn Runner>,
}

impl Apt {
    pub fn new() -> Self {
        Self {
            runner: Box::new(Shell),
        }
    }

    /// Run apt through a custom runner. Tests use this to record the
    /// issued commands instead of mutating the host.
    pub fn with_runner(runner: Box<dyn Runner>) -> Self {
        Self { runner }
    }
}

impl Default for Apt {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageManager for Apt {
    fn name(&self) -> &str {
        "apt"
    }

    fn refresh(&self) -> Result<()> {
        self.runner.run("apt-get", &["update"])
    }

    fn install(&self, packages: &[&str]) -> Result<()> {
        if packages.is_empty() {
            return Ok(());
        }

        let mut args: Vec<&str> = vec!["install", "-y"];
        args.extend(packages);

        self.runner.run("apt-get", &args)
    }
}
