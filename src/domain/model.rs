use serde::{Deserialize, Serialize};

/// Body of `POST /grants`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrantRequest {
    pub database: String,
    pub schema: String,
    pub role: String,
    pub privileges: Vec<String>,
}

impl GrantRequest {
    pub fn new<S: AsRef<str>>(database: &str, role: &str, schema: &str, privileges: &[S]) -> Self {
        Self {
            database: database.to_string(),
            schema: schema.to_string(),
            role: role.to_string(),
            privileges: privileges.iter().map(|p| p.as_ref().to_string()).collect(),
        }
    }
}

/// Routes served by the endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    DbsAndRoles,
    DatabaseSchema,
    InstalledExtensions,
    Grants,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::DbsAndRoles => "/dbs_and_roles",
            Route::DatabaseSchema => "/database_schema",
            Route::InstalledExtensions => "/installed_extensions",
            Route::Grants => "/grants",
        }
    }
}
