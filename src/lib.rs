pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};
pub use config::TomlConfig;

pub use crate::core::client::EndpointClient;
pub use domain::model::GrantRequest;
pub use domain::ports::EndpointApi;
pub use utils::error::{EndpointError, Result};
