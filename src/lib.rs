pub mod cmd;
pub mod install;
pub mod packages;
pub mod pkgmgr;
