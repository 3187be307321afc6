use pokedex_catalog::{CatalogConfig, CatalogError, CatalogLoader, Environment};
use pokedex_types::{ApiId, Pokemon};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn loader_for(server: &MockServer) -> CatalogLoader {
    CatalogLoader::new(CatalogConfig {
        environment: Environment::Development,
        api_base_url: server.uri(),
        timeout_secs: 5,
    })
}

fn entity_body(id: u32, name: &str) -> serde_json::Value {
    // Upstream payloads carry much more; only id and name are kept.
    json!({
        "id": id,
        "name": name,
        "base_experience": 112,
        "height": 4,
    })
}

// ── Single entity ───────────────────────────────────────────────

#[tokio::test]
async fn fetch_entity_decodes_id_and_name() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon/25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(entity_body(25, "pikachu")))
        .mount(&server)
        .await;

    let loader = loader_for(&server).await;
    let pokemon = loader.fetch_entity(ApiId::new(25)).await.unwrap();
    assert_eq!(pokemon, Pokemon::new(25u32, "pikachu"));
}

#[tokio::test]
async fn fetch_entity_maps_404_to_missing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon/9999"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let loader = loader_for(&server).await;
    let err = loader.fetch_entity(ApiId::new(9999)).await.unwrap_err();
    assert!(matches!(err, CatalogError::MissingEntity(id) if id == ApiId::new(9999)));
}

#[tokio::test]
async fn fetch_entity_surfaces_server_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon/1"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let loader = loader_for(&server).await;
    let err = loader.fetch_entity(ApiId::new(1)).await.unwrap_err();
    assert!(matches!(err, CatalogError::Status { status: 500, .. }));
}

#[tokio::test]
async fn fetch_entity_surfaces_decode_failures() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let loader = loader_for(&server).await;
    let err = loader.fetch_entity(ApiId::new(1)).await.unwrap_err();
    assert!(matches!(err, CatalogError::Http(_)));
}

// ── Batches ─────────────────────────────────────────────────────

#[tokio::test]
async fn fetch_entities_preserves_requested_order() {
    let server = MockServer::start().await;
    for (id, name) in [(25, "pikachu"), (1, "bulbasaur")] {
        Mock::given(method("GET"))
            .and(path(format!("/pokemon/{id}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(entity_body(id, name)))
            .mount(&server)
            .await;
    }

    let loader = loader_for(&server).await;
    let entities = loader
        .fetch_entities([ApiId::new(25), ApiId::new(1)])
        .await
        .unwrap();

    assert_eq!(
        entities,
        vec![Pokemon::new(25u32, "pikachu"), Pokemon::new(1u32, "bulbasaur")]
    );
}

#[tokio::test]
async fn fetch_all_honors_the_development_range() {
    let server = MockServer::start().await;
    for id in 1..=10u32 {
        Mock::given(method("GET"))
            .and(path(format!("/pokemon/{id}")))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(entity_body(id, &format!("mon-{id}"))),
            )
            .mount(&server)
            .await;
    }

    let loader = loader_for(&server).await;
    let entities = loader.fetch_all().await.unwrap();

    assert_eq!(entities.len(), 10);
    assert_eq!(entities[0].api_id, ApiId::new(1));
    assert_eq!(entities[9].api_id, ApiId::new(10));
}

#[tokio::test]
async fn fetch_entities_stops_at_the_first_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(entity_body(1, "bulbasaur")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/pokemon/2"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let loader = loader_for(&server).await;
    let err = loader
        .fetch_entities([ApiId::new(1), ApiId::new(2), ApiId::new(3)])
        .await
        .unwrap_err();
    assert!(matches!(err, CatalogError::Status { status: 503, .. }));
}
