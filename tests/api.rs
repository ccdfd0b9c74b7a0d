use adapter::store::RecordStore;
use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Request, StatusCode},
    response::Response,
    Router,
};
use http_body_util::BodyExt;
use registry::AppRegistry;
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    api::route::api::routes().with_state(AppRegistry::new(RecordStore::new()))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn put(uri: &str) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_json(res: Response) -> Value {
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn register_user(app: &Router, name: &str, email: &str, location: &str) -> Value {
    let res = app
        .clone()
        .oneshot(post(
            "/api/users",
            json!({ "name": name, "email": email, "location": location }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    body_json(res).await
}

async fn share_item(app: &Router, title: &str, category: &str, location: &str, owner: &Value) -> Value {
    let res = app
        .clone()
        .oneshot(post(
            "/api/items",
            json!({
                "title": title,
                "description": "hardly worn",
                "category": category,
                "size": "M",
                "condition": "good",
                "location": location,
                "owner": owner,
                "sustainabilityImpact": 11
            }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    body_json(res).await
}

#[tokio::test]
async fn sharing_an_item_credits_the_owner() {
    let app = app();

    let user = register_user(&app, "A", "a@x.com", "X").await;
    assert_eq!(user["itemsShared"], 0);
    assert_eq!(user["sustainabilityScore"], 0);

    share_item(&app, "T", "tops", "X", &user["id"]).await;

    let res = app
        .clone()
        .oneshot(get(&format!("/api/users/{}", user["id"].as_str().unwrap())))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let fetched = body_json(res).await;
    assert_eq!(fetched["itemsShared"], 1);
    assert_eq!(fetched["sustainabilityScore"], 10);
}

#[tokio::test]
async fn duplicate_email_is_rejected_with_an_error_body() {
    let app = app();

    register_user(&app, "A", "a@x.com", "X").await;
    let res = app
        .clone()
        .oneshot(post(
            "/api/users",
            json!({ "name": "B", "email": "a@x.com", "location": "Y" }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);
    let body = body_json(res).await;
    assert!(body["error"].as_str().unwrap().contains("a@x.com"));
}

#[tokio::test]
async fn unknown_user_is_not_found() {
    let app = app();

    let res = app
        .clone()
        .oneshot(get("/api/users/00000000-0000-0000-0000-000000000000"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body = body_json(res).await;
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn item_filters_intersect() {
    let app = app();
    let user = register_user(&app, "A", "a@x.com", "Downtown").await;

    share_item(&app, "Running Shoes", "shoes", "Downtown", &user["id"]).await;
    share_item(&app, "Leather Boots", "shoes", "Midtown", &user["id"]).await;
    share_item(&app, "Summer Dress", "dresses", "Downtown", &user["id"]).await;

    let res = app
        .clone()
        .oneshot(get("/api/items?category=shoes&location=down"))
        .await
        .unwrap();
    let items = body_json(res).await;
    let items = items.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "Running Shoes");
    assert_eq!(items[0]["owner"]["name"], "A");

    // Empty parameters behave like absent ones.
    let res = app
        .clone()
        .oneshot(get("/api/items?category=&search="))
        .await
        .unwrap();
    let items = body_json(res).await;
    assert_eq!(items.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn stats_track_the_exchange_lifecycle() {
    let app = app();

    let res = app.clone().oneshot(get("/api/sustainability-stats")).await.unwrap();
    let stats = body_json(res).await;
    assert_eq!(stats["totalItems"], 0);
    assert_eq!(stats["totalUsers"], 0);
    assert_eq!(stats["totalExchanges"], 0);
    assert_eq!(stats["co2Saved"], 0);

    let owner = register_user(&app, "A", "a@x.com", "X").await;
    let requester = register_user(&app, "B", "b@x.com", "Y").await;
    let item = share_item(&app, "Denim Jacket", "outerwear", "X", &owner["id"]).await;

    let res = app
        .clone()
        .oneshot(post(
            "/api/exchanges",
            json!({
                "requester": requester["id"],
                "item": item["id"],
                "message": "Would love this!"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let exchange = body_json(res).await;
    assert_eq!(exchange["status"], "pending");
    assert_eq!(exchange["owner"], owner["id"]);

    // Pending exchanges do not move the needle.
    let res = app.clone().oneshot(get("/api/sustainability-stats")).await.unwrap();
    let stats = body_json(res).await;
    assert_eq!(stats["totalItems"], 1);
    assert_eq!(stats["totalUsers"], 2);
    assert_eq!(stats["totalExchanges"], 0);
    assert_eq!(stats["co2Saved"], 0);

    let res = app
        .clone()
        .oneshot(put(&format!(
            "/api/exchanges/{}/complete",
            exchange["id"].as_str().unwrap()
        )))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let completed = body_json(res).await;
    assert_eq!(completed["status"], "completed");

    let res = app.clone().oneshot(get("/api/sustainability-stats")).await.unwrap();
    let stats = body_json(res).await;
    assert_eq!(stats["totalExchanges"], 1);
    assert_eq!(stats["co2Saved"], 2);

    // The exchanged item left the listing.
    let res = app.clone().oneshot(get("/api/items")).await.unwrap();
    assert_eq!(body_json(res).await.as_array().unwrap().len(), 0);

    // The requester was credited.
    let res = app
        .clone()
        .oneshot(get(&format!("/api/users/{}", requester["id"].as_str().unwrap())))
        .await
        .unwrap();
    assert_eq!(body_json(res).await["itemsReceived"], 1);

    // A second completion is a conflict.
    let res = app
        .clone()
        .oneshot(put(&format!(
            "/api/exchanges/{}/complete",
            exchange["id"].as_str().unwrap()
        )))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);
}
