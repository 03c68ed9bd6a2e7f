mod support;

use serde_json::{Value, json};

#[tokio::test]
async fn test_seed_users_are_listed_first() {
    let base_url = support::ensure_server();
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{base_url}/api/users"))
        .send()
        .await
        .expect("request should succeed");

    assert_eq!(res.status(), reqwest::StatusCode::OK);

    let users: Value = res.json().await.expect("json body");
    let users = users.as_array().expect("array body");
    // The store is append-only, so the seed records stay at the front even
    // when other tests in this binary have created users already.
    assert_eq!(users[0], json!({ "id": 1, "name": "John" }));
    assert_eq!(users[1], json!({ "id": 2, "name": "Jane" }));
}

#[tokio::test]
async fn test_get_seed_user_by_id_returns_the_stored_record() {
    let base_url = support::ensure_server();
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{base_url}/api/users/2"))
        .send()
        .await
        .expect("request should succeed");

    assert_eq!(res.status(), reqwest::StatusCode::OK);
    let user: Value = res.json().await.expect("json body");
    assert_eq!(user, json!({ "id": 2, "name": "Jane" }));
}

#[tokio::test]
async fn test_get_unknown_user_returns_404_with_error_body() {
    let base_url = support::ensure_server();
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{base_url}/api/users/424242"))
        .send()
        .await
        .expect("request should succeed");

    assert_eq!(res.status(), reqwest::StatusCode::NOT_FOUND);
    let body: Value = res.json().await.expect("json body");
    assert_eq!(body, json!({ "error": "User not found" }));
}

#[tokio::test]
async fn test_created_user_is_returned_by_lookup() {
    let base_url = support::ensure_server();
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{base_url}/api/users"))
        .json(&json!({ "id": 77, "name": "Amy" }))
        .send()
        .await
        .expect("request should succeed");

    assert_eq!(res.status(), reqwest::StatusCode::CREATED);
    let created: Value = res.json().await.expect("json body");
    assert_eq!(created, json!({ "id": 77, "name": "Amy" }));

    let res = client
        .get(format!("{base_url}/api/users/77"))
        .send()
        .await
        .expect("request should succeed");

    assert_eq!(res.status(), reqwest::StatusCode::OK);
    let user: Value = res.json().await.expect("json body");
    assert_eq!(user, json!({ "id": 77, "name": "Amy" }));
}

#[tokio::test]
async fn test_creating_a_duplicate_user_id_is_rejected() {
    let base_url = support::ensure_server();
    let client = reqwest::Client::new();

    let first = client
        .post(format!("{base_url}/api/users"))
        .json(&json!({ "id": 88, "name": "First" }))
        .send()
        .await
        .expect("request should succeed");
    assert_eq!(first.status(), reqwest::StatusCode::CREATED);

    let second = client
        .post(format!("{base_url}/api/users"))
        .json(&json!({ "id": 88, "name": "Second" }))
        .send()
        .await
        .expect("request should succeed");

    assert_eq!(second.status(), reqwest::StatusCode::CONFLICT);
    let body: Value = second.json().await.expect("json body");
    assert_eq!(body, json!({ "error": "User 88 already exists" }));

    // The original record survives the rejected append.
    let lookup = client
        .get(format!("{base_url}/api/users/88"))
        .send()
        .await
        .expect("request should succeed");
    let user: Value = lookup.json().await.expect("json body");
    assert_eq!(user["name"], "First");
}
