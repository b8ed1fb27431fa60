use crate::domain::model::{GrantRequest, Route};
use crate::domain::ports::EndpointApi;
use crate::utils::error::{EndpointError, Result};
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde_json::Value;
use url::Url;

/// Blocking client for the HTTP API of an endpoint listening on localhost.
///
/// The underlying reqwest client is kept for the lifetime of the value, so
/// consecutive calls reuse pooled connections. Cloning shares the pool.
#[derive(Debug, Clone)]
pub struct EndpointClient {
    port: u16,
    base_url: Url,
    client: Client,
}

impl EndpointClient {
    pub fn new(port: u16) -> Result<Self> {
        let client = Client::builder().build()?;
        Self::with_client(port, client)
    }

    /// Use a pre-configured transport instead of the default one.
    pub fn with_client(port: u16, client: Client) -> Result<Self> {
        let base_url = Url::parse(&format!("http://localhost:{}", port))?;

        Ok(Self {
            port,
            base_url,
            client,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn dbs_and_roles(&self) -> Result<Value> {
        let url = self.url_for(Route::DbsAndRoles)?;
        let response = self.execute(self.client.get(url.clone()), &url)?;
        decode_json(response)
    }

    pub fn database_schema(&self, database: &str) -> Result<String> {
        let mut url = self.url_for(Route::DatabaseSchema)?;
        url.query_pairs_mut().append_pair("database", database);

        let response = self.execute(self.client.get(url.clone()), &url)?;
        Ok(response.text()?)
    }

    pub fn installed_extensions(&self) -> Result<Value> {
        let url = self.url_for(Route::InstalledExtensions)?;
        let response = self.execute(self.client.get(url.clone()), &url)?;
        decode_json(response)
    }

    pub fn set_role_grants<S: AsRef<str>>(
        &self,
        database: &str,
        role: &str,
        schema: &str,
        privileges: &[S],
    ) -> Result<Value> {
        let url = self.url_for(Route::Grants)?;
        let body = GrantRequest::new(database, role, schema, privileges);

        tracing::debug!(
            "Granting {:?} on {}.{} to {}",
            body.privileges,
            body.database,
            body.schema,
            body.role
        );

        let response = self.execute(self.client.post(url.clone()).json(&body), &url)?;
        decode_json(response)
    }

    fn url_for(&self, route: Route) -> Result<Url> {
        Ok(self.base_url.join(route.path())?)
    }

    fn execute(&self, request: RequestBuilder, url: &Url) -> Result<Response> {
        tracing::debug!("Making endpoint request to: {}", url);
        let response = request.send()?;
        let status = response.status();

        tracing::debug!("Endpoint response status: {}", status);

        if !status.is_success() {
            tracing::warn!("Endpoint request to {} failed with status {}", url, status);
            return Err(EndpointError::HttpError {
                status,
                url: url.to_string(),
            });
        }

        Ok(response)
    }
}

fn decode_json(response: Response) -> Result<Value> {
    let body = response.text()?;
    Ok(serde_json::from_str(&body)?)
}

impl EndpointApi for EndpointClient {
    fn dbs_and_roles(&self) -> Result<Value> {
        EndpointClient::dbs_and_roles(self)
    }

    fn database_schema(&self, database: &str) -> Result<String> {
        EndpointClient::database_schema(self, database)
    }

    fn installed_extensions(&self) -> Result<Value> {
        EndpointClient::installed_extensions(self)
    }

    fn set_role_grants(
        &self,
        database: &str,
        role: &str,
        schema: &str,
        privileges: &[String],
    ) -> Result<Value> {
        EndpointClient::set_role_grants(self, database, role, schema, privileges)
    }
}
