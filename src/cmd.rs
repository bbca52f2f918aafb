use anyhow::{Context, Result};
use std::process::Command;

const CYAN: &str = "\x1b[36m";
const RESET: &str = "\x1b[0m";

/// Executes external commands on behalf of a package manager backend.
///
/// Backends describe the command line; the runner decides how it is
/// carried out. Tests substitute a recording implementation.
pub trait Runner: Send + Sync {
    fn run(&self, program: &str, args: &[&str]) -> Result<()>;
}

/// Production runner: echoes the command line, then spawns it with
/// inherited stdio so the package manager's own output stays visible.
#[derive(Debug, Clone, Default)]
pub struct Shell;

impl Runner for Shell {
    fn run(&self, program: &str, args: &[&str]) -> Result<()> {
        println!("{}> {} {}{}", CYAN, program, args.join(" "), RESET);
        tracing::debug!(program, ?args, "spawning command");

        let status = Command::new(program)
            .args(args)
            .status()
            .with_context(|| format!("Failed to run {}", program))?;

        if !status.success() {
            anyhow::bail!("{} failed with exit code {:?}", program, status.code());
        }

        Ok(())
    }
}
