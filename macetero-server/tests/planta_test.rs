use axum::http::StatusCode;
use macetero_server::services::PlantaService;
use macetero_server::tests::create_test_planta;
use serde_json::json;

mod common;
use common::mock_app::MockApp;

fn nombres(body: &serde_json::Value) -> Vec<&str> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|p| p["nombre_planta"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn test_list_plants() {
    let app = MockApp::new().await;

    let (status, body) = app.get_json("/api/plantas").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    create_test_planta(app.storage.clone(), "Ficus").await;
    create_test_planta(app.storage.clone(), "Aloe").await;

    let (_, body) = app.get_json("/api/plantas").await;
    assert_eq!(nombres(&body), vec!["Aloe", "Ficus"]);
}

#[tokio::test]
async fn test_list_active_plants() {
    let app = MockApp::new().await;
    create_test_planta(app.storage.clone(), "Aloe").await;
    create_test_planta(app.storage.clone(), "Ficus").await;

    PlantaService::new(app.storage.clone())
        .unsubscribe("Ficus")
        .await
        .unwrap();

    let (_, body) = app.get_json("/api/plantas?activas=true").await;
    assert_eq!(nombres(&body), vec!["Aloe"]);

    let (_, body) = app.get_json("/api/plantas?activas=false").await;
    assert_eq!(nombres(&body), vec!["Aloe", "Ficus"]);
}

#[tokio::test]
async fn test_get_plant() {
    let app = MockApp::new().await;
    create_test_planta(app.storage.clone(), "Aloe").await;

    let (status, body) = app.get_json("/api/plantas/planta?nombre_planta=Aloe").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["nombre_planta"], json!("Aloe"));
    assert_eq!(body["fecha_eliminacion"], json!(null));

    let (status, body) = app.get_json("/api/plantas/planta?nombre_planta=Monstera").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], json!(404));
    assert_eq!(body["error"]["message"], json!("La planta Monstera no existe."));

    let (status, body) = app.get_json("/api/plantas/planta").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], json!(400));
    assert!(
        body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("nombre_planta")
    );
}
