use anyhow::Result;
use tracing_subscriber::EnvFilter;

use qtdeps::install;
use qtdeps::pkgmgr::Apt;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if !nix::unistd::Uid::effective().is_root() {
        eprintln!("Error: qtdeps-install must be run as root (use sudo)");
        std::process::exit(1);
    }

    if which::which("apt-get").is_err() {
        eprintln!("Error: apt-get not found (Debian-based systems only)");
        std::process::exit(1);
    }

    install::run(&Apt::new())
}
