use std::str::FromStr;
use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use budgetwise_server::{api::app_router, build_state, config::Config, events::NEAR_LIMIT_ALERT, AppState};
use rust_decimal::Decimal;
use serde_json::{json, Value};
use tempfile::{tempdir, TempDir};
use tower::ServiceExt;

struct TestApp {
    router: Router,
    state: Arc<AppState>,
    _temp_dir: TempDir,
}

async fn test_app() -> TestApp {
    let temp_dir = tempdir().unwrap();
    let config = Config::with_db_path(temp_dir.path().join("test.db").to_string_lossy());
    let state = build_state(&config).await.unwrap();
    TestApp {
        router: app_router(state.clone(), &config),
        state,
        _temp_dir: temp_dir,
    }
}

impl TestApp {
    async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    async fn create_user(&self, email: &str, salary: &str) -> String {
        let (status, body) = self
            .send(
                Method::POST,
                "/api/v1/users",
                Some(json!({ "name": "Asha", "email": email, "salary": salary })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{}", body);
        body["id"].as_str().unwrap().to_string()
    }

    async fn add_expense(&self, user_id: &str, category: &str, amount: &str) -> (StatusCode, Value) {
        self.send(
            Method::POST,
            "/api/v1/expenses",
            Some(json!({ "userId": user_id, "amount": amount, "category": category })),
        )
        .await
    }
}

fn dec(value: &Value) -> Decimal {
    Decimal::from_str(value.as_str().unwrap_or_else(|| panic!("not a decimal string: {}", value)))
        .unwrap()
}

fn basic_group(snapshot: &Value) -> &Value {
    snapshot["groups"]
        .as_array()
        .unwrap()
        .iter()
        .find(|g| g["group"] == "basic")
        .unwrap()
}

#[tokio::test]
async fn healthz_works() {
    let app = test_app().await;
    let (status, _) = app.send(Method::GET, "/api/v1/healthz", None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = app.send(Method::GET, "/api/v1/readyz", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn groceries_scenario_over_http() {
    let app = test_app().await;
    let user_id = app.create_user("asha@example.com", "10000").await;

    let (status, snapshot) = app
        .send(Method::GET, &format!("/api/v1/budget/{}/snapshot", user_id), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    let allocated: Vec<Decimal> = snapshot["groups"]
        .as_array()
        .unwrap()
        .iter()
        .map(|g| dec(&g["allocated"]))
        .collect();
    assert_eq!(
        allocated,
        vec![Decimal::from(5000), Decimal::from(3000), Decimal::from(2000)]
    );

    let (status, body) = app.add_expense(&user_id, "Groceries", "4000").await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    assert_eq!(dec(&basic_group(&body["snapshot"])["remaining"]), Decimal::from(1000));
    assert_eq!(body["record"]["budgetType"], "50% - Basic Needs");

    let (status, body) = app.add_expense(&user_id, "Groceries", "1500").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["group"], "basic");
    assert_eq!(dec(&body["remaining"]), Decimal::from(1000));

    let (status, body) = app.add_expense(&user_id, "Groceries", "1000").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(dec(&basic_group(&body["snapshot"])["remaining"]), Decimal::ZERO);
    assert_eq!(body["alerts"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn invalid_amounts_are_bad_requests() {
    let app = test_app().await;
    let user_id = app.create_user("asha@example.com", "0").await;
    for amount in ["abc", "0", "-5", ""] {
        let (status, body) = app.add_expense(&user_id, "Groceries", amount).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{} -> {}", amount, body);
        assert_eq!(body["code"], 400);
    }
}

#[tokio::test]
async fn other_categories_are_uncapped() {
    let app = test_app().await;
    let user_id = app.create_user("asha@example.com", "100").await;
    let (status, body) = app.add_expense(&user_id, "Pet Food", "250.75").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(dec(&body["snapshot"]["otherSpent"]), Decimal::from_str("250.75").unwrap());
    assert_eq!(body["record"]["budgetGroup"], "other");
}

#[tokio::test]
async fn unknown_user_is_not_found() {
    let app = test_app().await;
    let (status, _) = app.send(Method::GET, "/api/v1/users/nobody", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = app
        .send(Method::GET, "/api/v1/budget/nobody/snapshot", None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = app.add_expense("nobody", "Groceries", "10").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn duplicate_email_conflicts() {
    let app = test_app().await;
    app.create_user("asha@example.com", "10").await;
    let (status, _) = app
        .send(
            Method::POST,
            "/api/v1/users",
            Some(json!({ "name": "Other", "email": "asha@example.com", "salary": "5" })),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn salary_update_and_reload() {
    let app = test_app().await;
    let user_id = app.create_user("asha@example.com", "10000").await;
    app.add_expense(&user_id, "Groceries", "4000").await;

    let (status, user) = app
        .send(
            Method::PUT,
            &format!("/api/v1/users/{}/salary", user_id),
            Some(json!({ "salary": "20000" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(dec(&user["salary"]), Decimal::from(20000));

    let (status, body) = app
        .send(Method::GET, &format!("/api/v1/users/{}/salary", user_id), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(dec(&body["salary"]), Decimal::from(20000));

    let (_, snapshot) = app
        .send(Method::GET, &format!("/api/v1/budget/{}/snapshot", user_id), None)
        .await;
    assert_eq!(dec(&basic_group(&snapshot)["remaining"]), Decimal::from(6000));

    let (status, _) = app
        .send(Method::POST, &format!("/api/v1/users/{}/reload", user_id), None)
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, snapshot) = app
        .send(Method::GET, &format!("/api/v1/budget/{}/snapshot", user_id), None)
        .await;
    assert_eq!(dec(&basic_group(&snapshot)["spent"]), Decimal::ZERO);
    assert_eq!(dec(&snapshot["salary"]), Decimal::from(20000));

    let (status, history) = app
        .send(Method::GET, &format!("/api/v1/expenses/{}", user_id), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(history.as_array().unwrap().len(), 1);

    let (status, _) = app
        .send(
            Method::PUT,
            &format!("/api/v1/users/{}/salary", user_id),
            Some(json!({ "salary": "-1" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn analytics_series_and_breakdown() {
    let app = test_app().await;
    let user_id = app.create_user("asha@example.com", "10000").await;

    let (status, series) = app
        .send(
            Method::GET,
            &format!("/api/v1/analytics/{}/series?interval=weekly", user_id),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(series, json!([{ "key": "No Data", "total": "0", "isPlaceholder": true }]));

    app.add_expense(&user_id, "Shopping", "120").await;
    app.add_expense(&user_id, "Groceries", "80").await;

    let (_, series) = app
        .send(
            Method::GET,
            &format!("/api/v1/analytics/{}/series?interval=monthly", user_id),
            None,
        )
        .await;
    let points = series.as_array().unwrap();
    assert_eq!(points.len(), 2);
    assert_eq!(points[0]["isPlaceholder"], true);
    assert_eq!(dec(&points[1]["total"]), Decimal::from(200));

    let (status, _) = app
        .send(
            Method::GET,
            &format!("/api/v1/analytics/{}/series?interval=daily", user_id),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _) = app
        .send(Method::GET, &format!("/api/v1/analytics/{}/series", user_id), None)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, breakdown) = app
        .send(
            Method::GET,
            &format!("/api/v1/analytics/{}/categories", user_id),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(dec(&breakdown["total"]), Decimal::from(200));
    assert_eq!(breakdown["categories"][0]["category"], "Shopping");
}

#[tokio::test]
async fn category_registry_endpoints() {
    let app = test_app().await;
    let (status, entries) = app.send(Method::GET, "/api/v1/categories", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(entries.as_array().unwrap().len(), 26);

    let (status, body) = app
        .send(Method::GET, "/api/v1/categories/classify?name=Pet%20Food", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["group"], "other");
    assert_eq!(body["tracked"], false);
    assert_eq!(body["registered"], false);

    let (_, body) = app
        .send(
            Method::GET,
            "/api/v1/categories/classify?name=Emergency%20Fund",
            None,
        )
        .await;
    assert_eq!(body["group"], "savings");
    assert_eq!(body["budgetType"], "20% - Savings");
    assert_eq!(body["registered"], true);
}

#[tokio::test]
async fn near_limit_alert_reaches_event_bus() {
    let app = test_app().await;
    let mut events = app.state.event_bus.subscribe();
    let user_id = app.create_user("asha@example.com", "1000").await;

    let (status, _) = app.add_expense(&user_id, "Entertainment", "280").await;
    assert_eq!(status, StatusCode::CREATED);

    let alert = loop {
        let event = tokio::time::timeout(std::time::Duration::from_secs(5), events.recv())
            .await
            .expect("no event within timeout")
            .unwrap();
        if event.name == NEAR_LIMIT_ALERT {
            break event;
        }
    };
    assert_eq!(alert.user_id.as_deref(), Some(user_id.as_str()));
    let payload = alert.payload.unwrap();
    assert_eq!(payload["group"], "lifestyle");
    assert_eq!(payload["title"], "Budget Almost Used");
}

#[tokio::test]
async fn malformed_expense_bodies_are_bad_requests() {
    let app = test_app().await;
    let user_id = app.create_user("asha@example.com", "10000").await;

    let bodies = vec![
        json!({ "userId": user_id, "amount": 4000, "category": "Groceries" }),
        json!({ "userId": user_id, "amount": true, "category": "Groceries" }),
        json!({ "userId": user_id, "amount": null, "category": "Groceries" }),
        json!({ "userId": user_id, "category": "Groceries" }),
    ];
    for body in bodies {
        let (status, response) = app
            .send(Method::POST, "/api/v1/expenses", Some(body.clone()))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{} -> {}", body, response);
        assert_eq!(response["code"], 400);
        assert!(response["message"].as_str().is_some_and(|m| !m.is_empty()));
        assert!(response.get("group").is_none());
    }

    let (status, response) = app
        .send(
            Method::POST,
            "/api/v1/users",
            Some(json!({ "name": "Asha", "email": "a@example.com", "salary": 10000 })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["code"], 400);
}

#[tokio::test]
async fn oversized_amounts_are_rejected_without_storing() {
    let app = test_app().await;
    let user_id = app.create_user("asha@example.com", "10000").await;

    for _ in 0..2 {
        let (status, body) = app
            .add_expense(&user_id, "Pet Food", "79228162514264337593543950335")
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", body);
    }

    let (status, snapshot) = app
        .send(Method::GET, &format!("/api/v1/budget/{}/snapshot", user_id), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(dec(&snapshot["totalSpent"]), Decimal::ZERO);

    let (status, _) = app
        .send(
            Method::PUT,
            &format!("/api/v1/users/{}/salary", user_id),
            Some(json!({ "salary": "0.00000000000000000000000005" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn suggestions_are_generated_and_listed() {
    let app = test_app().await;
    let user_id = app.create_user("asha@example.com", "10000").await;

    let (status, body) = app
        .send(Method::GET, &format!("/api/v1/suggestions/{}", user_id), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["suggestions"], json!([]));

    app.add_expense(&user_id, "Groceries", "5000").await;
    let (status, body) = app
        .send(
            Method::POST,
            "/api/v1/suggestions",
            Some(json!({ "userId": user_id })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    let tip = body["suggestion"].as_str().unwrap();
    assert!(tip.contains("Basic Needs budget is fully used"), "{}", tip);
    assert!(tip.contains("Groceries"));

    let (_, body) = app
        .send(Method::GET, &format!("/api/v1/suggestions/{}", user_id), None)
        .await;
    assert_eq!(body["suggestions"].as_array().unwrap().len(), 1);

    let (status, _) = app
        .send(
            Method::POST,
            "/api/v1/suggestions",
            Some(json!({ "userId": "nobody" })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
