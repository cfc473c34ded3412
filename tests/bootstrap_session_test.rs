//! End-to-end: configuration → wiring → store, against a mocked GraphQL backend.

use std::time::Duration;

use mockito::{Matcher, Server};
use serde_json::json;

use devsnap_lib::bootstrap::{open_session, wire_dependencies, BackendSettings};
use ds_app::AppStore;
use ds_core::config::AppConfig;
use ds_core::load::LoadStatus;

fn session_config(device_id: &str, snapshot_id: &str) -> AppConfig {
    let mut config = AppConfig::empty();
    config.device_id = device_id.to_string();
    config.snapshot_id = snapshot_id.to_string();
    config
}

fn store_for(server: &Server) -> AppStore {
    let backend = BackendSettings {
        graphql_url: format!("{}/api/v1/data/graphql/", server.url()),
        request_timeout: Duration::from_secs(5),
    };
    AppStore::new(wire_dependencies(&backend).unwrap())
}

#[tokio::test]
async fn opens_device_and_snapshot_from_config() {
    let mut server = Server::new_async().await;
    let device_mock = server
        .mock("POST", "/api/v1/data/graphql/")
        .match_body(Matcher::PartialJson(json!({
            "operationName": "getDeviceInfos",
            "variables": { "deviceID": "3" }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "data": {
                    "deviceInfos": {
                        "name": "build-server",
                        "processor": "Xeon",
                        "cores": 32,
                        "memory": 128_000_000_000_i64,
                        "snapshots": [
                            { "key": "12", "date": "2024-06-30", "operatingSystem": "Ubuntu 24.04" }
                        ]
                    }
                }
            })
            .to_string(),
        )
        .create_async()
        .await;
    let snapshot_mock = server
        .mock("POST", "/api/v1/data/graphql/")
        .match_body(Matcher::PartialJson(json!({
            "operationName": "getSnapshotInfos",
            "variables": { "snapshotID": "12" }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "data": {
                    "snapshotInfos": {
                        "versions": [
                            { "chosenVersion": "2.43", "name": "git", "installType": "apt" },
                            { "chosenVersion": "24.0", "name": "docker", "installType": "snap" }
                        ]
                    }
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let store = store_for(&server);
    let state = open_session(&store, &session_config("3", " 12 ")).await;

    device_mock.assert_async().await;
    snapshot_mock.assert_async().await;
    assert_eq!(state.device.status(), LoadStatus::Success);
    assert_eq!(state.device.resource().unwrap().formatted_memory(), "128 GB");
    assert_eq!(state.snapshot.status(), LoadStatus::Success);
    assert_eq!(store.software_origins().unwrap().len(), 2);
}

#[tokio::test]
async fn backend_errors_end_in_error_state() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/v1/data/graphql/")
        .with_status(200)
        .with_body(r#"{"data":null,"errors":[{"message":"Device matching query does not exist."}]}"#)
        .create_async()
        .await;

    let store = store_for(&server);
    let state = open_session(&store, &session_config("404", "")).await;

    assert_eq!(state.device.status(), LoadStatus::Error);
    assert_eq!(state.device.error().message, "The device wasn't found!");
    assert_eq!(state.snapshot.status(), LoadStatus::Initial);
}

#[tokio::test]
async fn empty_session_loads_nothing() {
    let server = Server::new_async().await;

    let store = store_for(&server);
    let state = open_session(&store, &AppConfig::empty()).await;

    assert_eq!(state.device.status(), LoadStatus::Initial);
    assert_eq!(state.snapshot.status(), LoadStatus::Initial);
}
