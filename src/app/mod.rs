pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub(crate) mod context;
pub(crate) mod dispatch;
pub(crate) mod progress;
pub mod wizard;

pub use context::{AppContext, AppPorts};
