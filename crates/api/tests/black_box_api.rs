use reqwest::StatusCode;
use serde_json::json;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Same router as prod, fresh store, ephemeral port.
        let app = stockpile_api::app::build_default_app();
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn post_form(
    client: &reqwest::Client,
    url: String,
    form: &[(&str, &str)],
) -> (StatusCode, serde_json::Value) {
    let res = client.post(url).form(form).send().await.unwrap();
    let status = res.status();
    let body = res.json().await.unwrap();
    (status, body)
}

#[tokio::test]
async fn home_and_health_respond() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client.get(srv.url("/")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await.unwrap(), "App Works!!!");

    let res = client.get(srv.url("/health")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn warehouse_widget_lifecycle() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let (status, inventory) =
        post_form(&client, srv.url("/inventory/create"), &[("name", "Warehouse")]).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(inventory, json!({ "id": 0, "name": "Warehouse" }));

    let (status, metadata) =
        post_form(&client, srv.url("/item-metadata/create"), &[("name", "Widget")]).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(metadata, json!({ "id": 0, "name": "Widget" }));

    let item_form = [("amount", "5"), ("metadata_id", "0"), ("inventory_id", "0")];
    let (status, first) = post_form(&client, srv.url("/items/create"), &item_form).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(first["id"], 0);
    assert_eq!(first["amount"], 5);

    let (status, second) = post_form(&client, srv.url("/items/create"), &item_form).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(second["id"], 1);

    let res = client.get(srv.url("/items/1")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let item: serde_json::Value = res.json().await.unwrap();
    assert_eq!(
        item,
        json!({ "id": 1, "amount": 5, "metadata_id": 0, "inventory_id": 0 })
    );

    let res = client.get(srv.url("/inventory/0")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let fetched: serde_json::Value = res.json().await.unwrap();
    assert_eq!(fetched, inventory);

    let res = client.get(srv.url("/item-metadata/0")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn validation_failures_name_the_violated_constraint() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let (status, body) =
        post_form(&client, srv.url("/inventory/create"), &[("name", "")]).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "empty_name");

    // Missing name is treated the same as an empty one.
    let (status, body) = post_form(&client, srv.url("/item-metadata/create"), &[]).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "empty_name");

    // Amount is checked before the (also invalid) references.
    let (status, body) = post_form(
        &client,
        srv.url("/items/create"),
        &[("amount", "-1"), ("metadata_id", "0"), ("inventory_id", "0")],
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "negative_amount");
    assert!(body["message"].as_str().unwrap().contains("-1"));

    let (status, body) = post_form(
        &client,
        srv.url("/items/create"),
        &[("amount", "1"), ("metadata_id", "999"), ("inventory_id", "999")],
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_metadata_reference");

    let (status, body) = post_form(&client, srv.url("/items/create"), &[("amount", "1")]).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_metadata_reference");

    // Nothing was stored by the rejected writes.
    let res = client.get(srv.url("/inventory/0")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let res = client.get(srv.url("/items/0")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn undecodable_forms_get_json_errors() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    // `amount` has no default, so a form without it cannot be decoded.
    let (status, body) = post_form(
        &client,
        srv.url("/items/create"),
        &[("metadata_id", "0"), ("inventory_id", "0")],
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "invalid_form");
    assert!(body["message"].as_str().unwrap().contains("amount"));

    let (status, body) =
        post_form(&client, srv.url("/items/create"), &[("amount", "lots")]).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "invalid_form");

    let (status, body) = post_form(
        &client,
        srv.url("/items/create"),
        &[("amount", "1"), ("metadata_id", ""), ("inventory_id", "0")],
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "invalid_form");

    let res = client
        .post(srv.url("/inventory/create"))
        .header("content-type", "application/json")
        .body(r#"{"name":"Warehouse"}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "invalid_form");

    let res = client.get(srv.url("/items/0")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unresolved_inventory_reference_is_reported() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    post_form(&client, srv.url("/item-metadata/create"), &[("name", "Widget")]).await;

    let (status, body) = post_form(
        &client,
        srv.url("/items/create"),
        &[("amount", "1"), ("metadata_id", "0"), ("inventory_id", "42")],
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_inventory_reference");
    assert!(body["message"].as_str().unwrap().contains("42"));
}

#[tokio::test]
async fn lookups_distinguish_missing_from_malformed_ids() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client.get(srv.url("/items/99")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "not_found");

    let res = client.get(srv.url("/inventory/abc")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "invalid_id");

    let res = client.get(srv.url("/item-metadata/-1")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn servers_have_independent_stores() {
    let first = TestServer::spawn().await;
    let second = TestServer::spawn().await;
    let client = reqwest::Client::new();

    post_form(&client, first.url("/inventory/create"), &[("name", "A")]).await;
    post_form(&client, first.url("/inventory/create"), &[("name", "B")]).await;

    let (status, body) =
        post_form(&client, second.url("/inventory/create"), &[("name", "C")]).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 0);

    let res = client.get(second.url("/inventory/1")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
