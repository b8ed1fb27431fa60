use anyhow::Result;
use endpoint_client::{EndpointApi, EndpointClient, EndpointError};
use httpmock::prelude::*;
use serde_json::json;

/// A 404 fails every operation with HttpError, whatever the body says.
#[test]
fn test_not_found_is_http_error_for_every_operation() -> Result<()> {
    let server = MockServer::start();
    let not_found = server.mock(|when, then| {
        when.path_contains("/");
        then.status(404)
            .header("Content-Type", "application/json")
            .json_body(json!({"dbs": [], "roles": []}));
    });

    let client = EndpointClient::new(server.port())?;
    let privileges = vec!["SELECT".to_string()];

    let results = vec![
        client.dbs_and_roles().map(|_| ()),
        client.database_schema("mydb").map(|_| ()),
        client.installed_extensions().map(|_| ()),
        client
            .set_role_grants("db1", "role1", "public", &privileges)
            .map(|_| ()),
    ];

    for result in results {
        match result {
            Err(EndpointError::HttpError { status, .. }) => assert_eq!(status.as_u16(), 404),
            other => panic!("expected HttpError, got {:?}", other),
        }
    }

    not_found.assert_hits(4);
    Ok(())
}

/// One client serves a whole session of calls through the trait seam.
#[test]
fn test_session_through_endpoint_api() -> Result<()> {
    let server = MockServer::start();

    let dbs_mock = server.mock(|when, then| {
        when.method(GET).path("/dbs_and_roles");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({"dbs": ["a"], "roles": ["r"]}));
    });
    let extensions_mock = server.mock(|when, then| {
        when.method(GET).path("/installed_extensions");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({"extensions": [{"extname": "plpgsql", "versions": ["1.0"]}]}));
    });
    let schema_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/database_schema")
            .query_param("database", "a");
        then.status(200).body("CREATE TABLE public.t (id integer);\n");
    });
    let grants_mock = server.mock(|when, then| {
        when.method(POST).path("/grants").json_body(json!({
                "database": "a",
                "schema": "public",
                "role": "r",
                "privileges": ["USAGE", "CREATE"]
            }));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({"ok": true}));
    });

    let client = EndpointClient::new(server.port())?;
    let api: &dyn EndpointApi = &client;

    let listing = api.dbs_and_roles()?;
    let database = listing["dbs"][0].as_str().unwrap().to_string();
    let role = listing["roles"][0].as_str().unwrap().to_string();

    let extensions = api.installed_extensions()?;
    assert_eq!(extensions["extensions"][0]["extname"], "plpgsql");

    let schema = api.database_schema(&database)?;
    assert!(schema.contains("CREATE TABLE public.t"));

    let privileges = vec!["USAGE".to_string(), "CREATE".to_string()];
    let granted = api.set_role_grants(&database, &role, "public", &privileges)?;
    assert_eq!(granted, json!({"ok": true}));

    dbs_mock.assert();
    extensions_mock.assert();
    schema_mock.assert();
    grants_mock.assert();
    Ok(())
}

#[test]
fn test_client_error_status_is_not_retried() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/grants");
        then.status(400).body("role does not exist");
    });

    let client = EndpointClient::new(server.port())?;
    let err = client
        .set_role_grants("db1", "ghost", "public", &["SELECT"])
        .unwrap_err();

    assert!(err.is_http_error());
    assert!(err.to_string().contains("/grants"));
    api_mock.assert_hits(1);
    Ok(())
}

#[test]
fn test_cloned_clients_target_the_same_endpoint() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/installed_extensions");
        then.status(200).json_body(json!({"extensions": []}));
    });

    let client = EndpointClient::new(server.port())?;
    let clone = client.clone();

    assert_eq!(client.installed_extensions()?, clone.installed_extensions()?);
    assert_eq!(clone.port(), server.port());
    api_mock.assert_hits(2);
    Ok(())
}
