pub mod client;

pub use crate::domain::model::{GrantRequest, Route};
pub use crate::domain::ports::{ConfigProvider, EndpointApi};
pub use crate::utils::error::Result;
