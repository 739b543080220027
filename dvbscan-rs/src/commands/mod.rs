pub mod catalog;
pub mod file;

pub use catalog::{cmd_muxes, cmd_networks, cmd_plan, cmd_regions, cmd_stats};
pub use file::{cmd_export, cmd_verify};
