use crate::utils::error::Result;
use serde_json::Value;

/// Operations exposed by the local endpoint.
pub trait EndpointApi {
    fn dbs_and_roles(&self) -> Result<Value>;
    fn database_schema(&self, database: &str) -> Result<String>;
    fn installed_extensions(&self) -> Result<Value>;
    fn set_role_grants(
        &self,
        database: &str,
        role: &str,
        schema: &str,
        privileges: &[String],
    ) -> Result<Value>;
}

pub trait ConfigProvider {
    fn port(&self) -> Option<u16>;
}
