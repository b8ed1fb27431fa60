use crate::config::toml_config::TomlConfig;
use crate::core::{ConfigProvider, EndpointApi};
use crate::utils::error::{EndpointError, Result};
use crate::utils::validation::{validate_non_empty, validate_path, validate_port, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "endpoint-client")]
#[command(about = "Query and manage a local endpoint over HTTP")]
pub struct CliConfig {
    #[arg(long, help = "Port the endpoint listens on (overrides the config file)")]
    pub port: Option<u16>,

    #[arg(long, help = "TOML file with an [endpoint] section")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List databases and roles
    DbsAndRoles,
    /// Dump the schema of a database
    DatabaseSchema {
        #[arg(long)]
        database: String,
    },
    /// List installed extensions
    InstalledExtensions,
    /// Grant privileges on a schema to a role
    SetRoleGrants {
        #[arg(long)]
        database: String,
        #[arg(long)]
        role: String,
        #[arg(long)]
        schema: String,
        #[arg(long, value_delimiter = ',', required = true)]
        privileges: Vec<String>,
    },
}

impl CliConfig {
    /// `--port` wins over the config file.
    pub fn resolve_port(&self) -> Result<u16> {
        if let Some(port) = self.port {
            return Ok(port);
        }

        if let Some(path) = &self.config {
            if let Some(port) = TomlConfig::from_file(path)?.port() {
                return Ok(port);
            }
        }

        Err(EndpointError::ConfigError {
            message: "No endpoint port given: pass --port or set endpoint.port in --config"
                .to_string(),
        })
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(port) = self.port {
            validate_port("port", port)?;
        }
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        self.command.validate()
    }
}

impl Validate for Command {
    fn validate(&self) -> Result<()> {
        match self {
            Command::DatabaseSchema { database } => validate_non_empty("database", database),
            Command::SetRoleGrants {
                database,
                role,
                schema,
                privileges,
            } => {
                validate_non_empty("database", database)?;
                validate_non_empty("role", role)?;
                validate_non_empty("schema", schema)?;
                for privilege in privileges {
                    validate_non_empty("privileges", privilege)?;
                }
                Ok(())
            }
            Command::DbsAndRoles | Command::InstalledExtensions => Ok(()),
        }
    }
}

impl Command {
    /// Run the command and render its result for stdout.
    pub fn execute(&self, api: &dyn EndpointApi) -> Result<String> {
        let value = match self {
            Command::DbsAndRoles => api.dbs_and_roles()?,
            Command::DatabaseSchema { database } => return api.database_schema(database),
            Command::InstalledExtensions => api.installed_extensions()?,
            Command::SetRoleGrants {
                database,
                role,
                schema,
                privileges,
            } => api.set_role_grants(database, role, schema, privileges)?,
        };

        Ok(serde_json::to_string_pretty(&value)?)
    }
}
