//! HTTP-level integration tests for the `/movies` endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::header::LOCATION;
use axum::http::StatusCode;
use common::{body_json, delete, get, patch_json, post_json, post_raw, put_json};
use serde_json::json;
use sqlx::PgPool;

fn dune() -> serde_json::Value {
    json!({
        "title": "Dune",
        "genre": "Science Fiction",
        "director": "Denis Villeneuve",
        "release_date": "2021-10-22T00:00:00Z",
        "duration": 155,
        "description": "A noble family becomes embroiled in a war for control over the galaxy's most valuable asset."
    })
}

fn with_duration(duration: i64) -> serde_json::Value {
    let mut body = dune();
    body["duration"] = json!(duration);
    body
}

async fn create_movie(pool: &PgPool, body: serde_json::Value) -> i64 {
    let response = post_json(common::build_test_app(pool.clone()), "/movies", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

async fn movie_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM movies")
        .fetch_one(pool)
        .await
        .unwrap()
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_movie_returns_201_with_location(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/movies", dune()).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response
        .headers()
        .get(LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();

    let json = body_json(response).await;
    let id = json["id"].as_i64().unwrap();
    assert_eq!(location, format!("/movies/{id}"));
    assert_eq!(json["title"], "Dune");
    assert_eq!(json["genre"], "Science Fiction");
    assert_eq!(json["director"], "Denis Villeneuve");
    assert_eq!(json["duration"], 155);
    assert!(json["query_time"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_movie_duration_bounds(pool: PgPool) {
    for rejected in [69, 601] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(app, "/movies", with_duration(rejected)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["fields"][0]["field"], "duration");
    }
    assert_eq!(movie_count(&pool).await, 0);

    for accepted in [70, 600] {
        create_movie(&pool, with_duration(accepted)).await;
    }
    assert_eq!(movie_count(&pool).await, 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_movie_empty_title_stores_nothing(pool: PgPool) {
    let mut body = dune();
    body["title"] = json!("");

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/movies", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["fields"][0]["field"], "title");
    assert_eq!(movie_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_movie_reports_every_failing_field(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/movies", json!({"title": "", "duration": 5})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    let fields: Vec<&str> = json["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["duration", "genre", "release_date", "title"]);
    assert_eq!(movie_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_movie_whitespace_strings_store_nothing(pool: PgPool) {
    let mut body = dune();
    body["title"] = json!("   ");
    body["genre"] = json!(" ");

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/movies", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["fields"][0]["field"], "genre");
    assert_eq!(json["fields"][0]["message"], "genre is required");
    assert_eq!(json["fields"][1]["field"], "title");
    assert_eq!(movie_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_movie_malformed_json_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_raw(app, "/movies", "{\"title\": ").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_movie_by_id(pool: PgPool) {
    let id = create_movie(&pool, dune()).await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/movies/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], id);
    assert_eq!(json["title"], "Dune");
    assert_eq!(json["release_date"], "2021-10-22T00:00:00Z");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_missing_movie_returns_404(pool: PgPool) {
    let id = create_movie(&pool, dune()).await;

    for missing in [-1, id + 1] {
        let app = common::build_test_app(pool.clone());
        let response = get(app, &format!("/movies/{missing}")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = body_json(response).await;
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["error"], format!("Movie with id {missing} not found"));
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_movies_pages_in_id_order(pool: PgPool) {
    for title in ["A", "B", "C", "D"] {
        let mut body = dune();
        body["title"] = json!(title);
        create_movie(&pool, body).await;
    }

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/movies?skip=1&take=2").await).await;
    let titles: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["B", "C"]);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/movies").await).await;
    assert_eq!(json.as_array().unwrap().len(), 4);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/movies?skip=10").await).await;
    assert!(json.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_movies_clamps_negative_paging(pool: PgPool) {
    create_movie(&pool, dune()).await;

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/movies?skip=-5&take=-1").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await.as_array().unwrap().is_empty());

    let app = common::build_test_app(pool);
    let response = get(app, "/movies?skip=-5").await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_malformed_query_and_path_return_json_400(pool: PgPool) {
    for uri in ["/movies?take=abc", "/movies/abc"] {
        let app = common::build_test_app(pool.clone());
        let response = get(app, uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(
            response.headers()["content-type"],
            "application/json",
            "{uri}"
        );
        assert_eq!(body_json(response).await["code"], "BAD_REQUEST", "{uri}");
    }
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_movie_returns_204_and_persists(pool: PgPool) {
    let id = create_movie(&pool, dune()).await;

    let mut body = dune();
    body["title"] = json!("Dune: Part One");
    body["duration"] = json!(156);

    let app = common::build_test_app(pool.clone());
    let response = put_json(app, &format!("/movies/{id}"), body).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/movies/{id}")).await).await;
    assert_eq!(json["id"], id);
    assert_eq!(json["title"], "Dune: Part One");
    assert_eq!(json["duration"], 156);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_missing_movie_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(app, "/movies/999999", dune()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_movie_invalid_body_leaves_row_untouched(pool: PgPool) {
    let id = create_movie(&pool, dune()).await;

    let app = common::build_test_app(pool.clone());
    let response = put_json(app, &format!("/movies/{id}"), with_duration(1000)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/movies/{id}")).await).await;
    assert_eq!(json["duration"], 155);
}

// ---------------------------------------------------------------------------
// Patch
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_patch_director_leaves_other_fields(pool: PgPool) {
    let id = create_movie(&pool, dune()).await;

    let app = common::build_test_app(pool.clone());
    let response = patch_json(
        app,
        &format!("/movies/{id}"),
        json!([{"op": "replace", "path": "/director", "value": "David Lynch"}]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/movies/{id}")).await).await;
    assert_eq!(json["director"], "David Lynch");
    assert_eq!(json["title"], "Dune");
    assert_eq!(json["genre"], "Science Fiction");
    assert_eq!(json["duration"], 155);
    assert_eq!(json["release_date"], "2021-10-22T00:00:00Z");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_patch_out_of_range_duration_persists_nothing(pool: PgPool) {
    let id = create_movie(&pool, dune()).await;

    let app = common::build_test_app(pool.clone());
    let response = patch_json(
        app,
        &format!("/movies/{id}"),
        json!([
            {"op": "replace", "path": "/title", "value": "Dune Messiah"},
            {"op": "replace", "path": "/duration", "value": 1000}
        ]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "PATCH_VALIDATION_ERROR");
    assert_eq!(json["fields"][0]["field"], "duration");

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/movies/{id}")).await).await;
    assert_eq!(json["title"], "Dune");
    assert_eq!(json["duration"], 155);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_patch_remove_description(pool: PgPool) {
    let id = create_movie(&pool, dune()).await;

    let app = common::build_test_app(pool.clone());
    let response = patch_json(
        app,
        &format!("/movies/{id}"),
        json!([{"op": "remove", "path": "/description"}]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/movies/{id}")).await).await;
    assert!(json["description"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_patch_blank_title_is_rejected(pool: PgPool) {
    let id = create_movie(&pool, dune()).await;

    let app = common::build_test_app(pool.clone());
    let response = patch_json(
        app,
        &format!("/movies/{id}"),
        json!([{"op": "replace", "path": "/title", "value": "  "}]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "PATCH_VALIDATION_ERROR");

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/movies/{id}")).await).await;
    assert_eq!(json["title"], "Dune");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_patch_id_is_rejected(pool: PgPool) {
    let id = create_movie(&pool, dune()).await;

    let app = common::build_test_app(pool.clone());
    let response = patch_json(
        app,
        &format!("/movies/{id}"),
        json!([{"op": "replace", "path": "/id", "value": 42}]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "INVALID_PATCH");

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/movies/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_patch_unsupported_op_returns_400(pool: PgPool) {
    let id = create_movie(&pool, dune()).await;

    let app = common::build_test_app(pool);
    let response = patch_json(
        app,
        &format!("/movies/{id}"),
        json!([{"op": "move", "from": "/title", "path": "/genre"}]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_patch_missing_movie_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = patch_json(
        app,
        "/movies/999999",
        json!([{"op": "replace", "path": "/director", "value": "Nobody"}]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_movie_returns_204_then_404(pool: PgPool) {
    let id = create_movie(&pool, dune()).await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/movies/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/movies/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let response = delete(app, &format!("/movies/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
