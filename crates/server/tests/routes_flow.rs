use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use configs::StorageConfig;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use server::startup::{build_app, build_state};

struct TestApp {
    router: Router,
    data_dir: std::path::PathBuf,
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.data_dir);
    }
}

async fn build_test_app() -> anyhow::Result<TestApp> {
    let data_dir = std::env::temp_dir().join(format!("fleet_routes_{}", Uuid::new_v4()));
    let storage = StorageConfig { data_dir: data_dir.clone(), ..StorageConfig::default() };
    let state = build_state(&storage).await?;
    Ok(TestApp { router: build_app(state), data_dir })
}

async fn send(app: &TestApp, method: &str, uri: &str, body: Option<Value>) -> anyhow::Result<(StatusCode, Value)> {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&v)?)
        }
        None => Body::empty(),
    };
    let resp = app.router.clone().oneshot(builder.body(body)?).await?;
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    let json = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, json))
}

fn vehicle_json(plate: &str) -> Value {
    json!({
        "PlateNumber": plate,
        "Make": "Skoda",
        "Model": "Octavia",
        "Year": 2019,
        "FuelType": "diesel",
        "Gearbox": "Manual",
        "Color": "Gray",
        "Body": "Touring"
    })
}

fn john_json() -> Value {
    json!({
        "FirstName": "John",
        "LastName": "Smith",
        "PersonalID": 12345678901_i64,
        "PhoneNumber": "5551234",
        "Email": "john@x.com"
    })
}

#[tokio::test]
async fn health_is_ok() -> anyhow::Result<()> {
    let app = build_test_app().await?;
    let (status, body) = send(&app, "GET", "/health", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn customer_scenario() -> anyhow::Result<()> {
    let app = build_test_app().await?;

    let (status, body) = send(&app, "POST", "/customers", Some(john_json())).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["RentedVehicles"], json!([]));
    assert!(body["CreatedAt"].is_string());

    let (status, body) = send(&app, "POST", "/customers", Some(john_json())).await?;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Conflict");

    let (status, _) = send(&app, "DELETE", "/customers", Some(json!({"PersonalID": 99999999999_i64}))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", "/customers", Some(json!({"PersonalID": 123}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &app,
        "PUT",
        "/customers",
        Some(json!({"PersonalID": 12345678901_i64, "LastName": "Smythe"})),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["FirstName"], "John");
    assert_eq!(body["LastName"], "Smythe");
    assert!(body["LastEditedAt"].is_string());

    let (status, body) = send(&app, "GET", "/customers", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(1));

    let (status, body) = send(&app, "DELETE", "/customers", Some(json!({"PersonalID": 12345678901_i64}))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"], "customer deleted");
    Ok(())
}

#[tokio::test]
async fn vehicle_crud_and_errors() -> anyhow::Result<()> {
    let app = build_test_app().await?;

    let (status, body) = send(&app, "POST", "/vehicles", Some(vehicle_json("777XYZ"))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["FuelType"], "Diesel");

    let mut bad = vehicle_json("888XYZ");
    bad["FuelType"] = json!("petrolx");
    let (status, body) = send(&app, "POST", "/vehicles", Some(bad)).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation Error");

    let (status, body) = send(&app, "GET", "/vehicles", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["777XYZ"]["Make"], "Skoda");

    let mut edit = vehicle_json("777XYZ");
    edit["Color"] = json!("black");
    let (status, body) = send(&app, "PUT", "/vehicles", Some(edit.clone())).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Color"], "Black");
    let (status, _) = send(&app, "PUT", "/vehicles", Some(edit)).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = send(&app, "DELETE", "/vehicles", Some(json!({"PlateNumber": "777XYZ"}))).await?;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, "DELETE", "/vehicles", Some(json!({"PlateNumber": "777XYZ"}))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn rent_and_return_vehicle() -> anyhow::Result<()> {
    let app = build_test_app().await?;
    send(&app, "POST", "/customers", Some(john_json())).await?;
    send(&app, "POST", "/vehicles", Some(vehicle_json("777XYZ"))).await?;

    // unknown vehicle cannot be rented
    let (status, _) = send(&app, "POST", "/customers/12345678901/vehicles", Some(json!({"PlateNumber": "NOPE"}))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // the stored vehicle is embedded, not the request body
    let (status, body) = send(
        &app,
        "POST",
        "/customers/12345678901/vehicles",
        Some(json!({"PlateNumber": "777XYZ", "Make": "Bogus"})),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["RentedVehicles"][0]["Make"], "Skoda");

    let (status, _) = send(&app, "POST", "/customers/99999999999/vehicles", Some(json!({"PlateNumber": "777XYZ"}))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, "DELETE", "/customers/12345678901/777XYZ/delete-vehicle", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"], "vehicle deleted from customer");

    let (_, body) = send(&app, "GET", "/customers", None).await?;
    assert_eq!(body[0]["RentedVehicles"], json!([]));

    let (status, body) = send(&app, "POST", "/customers/12345678901/777XYZ/delete-vehicle", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"], "customer does not rent this vehicle");
    Ok(())
}

#[tokio::test]
async fn employee_crud() -> anyhow::Result<()> {
    let app = build_test_app().await?;
    let jane = json!({
        "FirstName": "Jane",
        "LastName": "Doe",
        "PersonalID": 48001010123_i64,
        "DateOfBirth": "01.01.1980",
        "Email": "jane@fleet.ee",
        "PhoneNumber": "5550000",
        "Address": "Main 1"
    });
    let (status, _) = send(&app, "POST", "/employees", Some(jane.clone())).await?;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, "POST", "/employees", Some(jane)).await?;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, body) = send(
        &app,
        "PUT",
        "/employees",
        Some(json!({"PersonalID": 48001010123_i64, "Email": "jd@fleet.ee", "PhoneNumber": "5551111", "Address": "Harbour 22"})),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Address"], "Harbour 22");
    assert_eq!(body["FirstName"], "Jane");

    let (status, _) = send(&app, "DELETE", "/employees", Some(json!({"PersonalID": 48001010123_i64}))).await?;
    assert_eq!(status, StatusCode::OK);
    let (_, body) = send(&app, "GET", "/employees", None).await?;
    assert_eq!(body, json!([]));
    Ok(())
}
