//! API integration tests.
//!
//! These tests drive the full router against mock database connections.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::Utc;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, MockExecResult};
use std::sync::Arc;
use tower::ServiceExt;
use tradepost_api::{health_router, router as api_router, AppState};
use tradepost_core::{
    CategoryService, FavoriteService, ListingService, LocationService, UserService,
};
use tradepost_db::entities::{category, favorite, listing, user};
use tradepost_db::repositories::{
    CategoryRepository, FavoriteRepository, ImageRepository, ListingRepository,
    LocationRepository, UserRepository,
};

fn empty_conn() -> Arc<DatabaseConnection> {
    Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection())
}

/// Assemble state with one mock connection per repository so each test
/// controls its query queues independently.
fn build_state(
    user_db: Arc<DatabaseConnection>,
    category_db: Arc<DatabaseConnection>,
    location_db: Arc<DatabaseConnection>,
    listing_db: Arc<DatabaseConnection>,
    image_db: Arc<DatabaseConnection>,
    favorite_db: Arc<DatabaseConnection>,
) -> AppState {
    AppState {
        user_service: UserService::new(UserRepository::new(user_db.clone())),
        category_service: CategoryService::new(CategoryRepository::new(category_db.clone())),
        location_service: LocationService::new(LocationRepository::new(location_db.clone())),
        listing_service: ListingService::new(
            ListingRepository::new(listing_db.clone()),
            ImageRepository::new(image_db),
            CategoryRepository::new(category_db),
            LocationRepository::new(location_db),
            UserRepository::new(user_db.clone()),
        ),
        favorite_service: FavoriteService::new(
            FavoriteRepository::new(favorite_db),
            UserRepository::new(user_db),
            ListingRepository::new(listing_db),
        ),
    }
}

fn test_app(state: AppState) -> Router {
    Router::new()
        .merge(health_router())
        .nest("/api", api_router())
        .with_state(state)
}

fn app_with_category_db(category_db: Arc<DatabaseConnection>) -> Router {
    test_app(build_state(
        empty_conn(),
        category_db,
        empty_conn(),
        empty_conn(),
        empty_conn(),
        empty_conn(),
    ))
}

fn test_category(id: &str, slug: &str) -> category::Model {
    category::Model {
        id: id.to_string(),
        name: "Electronics".to_string(),
        slug: slug.to_string(),
        parent_id: None,
        created_at: Utc::now().into(),
    }
}

fn test_user(id: &str, email: &str) -> user::Model {
    user::Model {
        id: id.to_string(),
        email: email.to_string(),
        password_hash: "hash".to_string(),
        name: None,
        phone: None,
        created_at: Utc::now().into(),
        updated_at: Utc::now().into(),
    }
}

fn test_listing(id: &str) -> listing::Model {
    listing::Model {
        id: id.to_string(),
        title: "Bike".to_string(),
        description: "A bike".to_string(),
        price: 50.0,
        currency: "USD".to_string(),
        category_id: "cat1".to_string(),
        location_id: "loc1".to_string(),
        user_id: "user1".to_string(),
        status: "active".to_string(),
        created_at: Utc::now().into(),
        updated_at: Utc::now().into(),
    }
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = test_app(build_state(
        empty_conn(),
        empty_conn(),
        empty_conn(),
        empty_conn(),
        empty_conn(),
        empty_conn(),
    ));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_list_categories_echoes_pagination() {
    let category_db = Arc::new(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![
                test_category("cat1", "electronics"),
                test_category("cat2", "furniture"),
            ]])
            .into_connection(),
    );
    let app = app_with_category_db(category_db);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/categories?page=2&limit=5")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["page"], 2);
    assert_eq!(body["limit"], 5);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
    assert_eq!(body["data"][0]["slug"], "electronics");
}

#[tokio::test]
async fn test_list_with_invalid_pagination_falls_back() {
    let category_db = Arc::new(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<category::Model>::new()])
            .into_connection(),
    );
    let app = app_with_category_db(category_db);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/categories?page=abc&limit=-5")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["page"], 1);
    assert_eq!(body["limit"], 50);
}

#[tokio::test]
async fn test_get_missing_category_returns_404() {
    let category_db = Arc::new(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<category::Model>::new()])
            .into_connection(),
    );
    let app = app_with_category_db(category_db);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/categories/nonexistent")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_create_category_returns_201() {
    let category_db = Arc::new(
        MockDatabase::new(DatabaseBackend::Postgres)
            // Slug uniqueness check finds nothing
            .append_query_results([Vec::<category::Model>::new()])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            // Insert returning
            .append_query_results([[test_category("cat1", "electronics")]])
            .into_connection(),
    );
    let app = app_with_category_db(category_db);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/categories")
                .method("POST")
                .header("Content-Type", "application/json")
                .body(Body::from(
                    r#"{"name":"Electronics","slug":"electronics"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["data"]["name"], "Electronics");
    assert_eq!(body["data"]["slug"], "electronics");
    assert!(body["data"]["id"].is_string());
    assert!(body["data"]["createdAt"].is_string());
}

#[tokio::test]
async fn test_create_category_without_slug_returns_400() {
    let app = app_with_category_db(empty_conn());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/categories")
                .method("POST")
                .header("Content-Type", "application/json")
                .body(Body::from(r#"{"name":"Electronics"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_create_user_with_invalid_email_returns_400() {
    let app = test_app(build_state(
        empty_conn(),
        empty_conn(),
        empty_conn(),
        empty_conn(),
        empty_conn(),
        empty_conn(),
    ));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/users")
                .method("POST")
                .header("Content-Type", "application/json")
                .body(Body::from(
                    r#"{"email":"not-an-email","passwordHash":"hash"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_delete_category_returns_204() {
    let category_db = Arc::new(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection(),
    );
    let app = app_with_category_db(category_db);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/categories/cat1")
                .method("DELETE")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_delete_missing_category_is_still_204() {
    let category_db = Arc::new(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection(),
    );
    let app = app_with_category_db(category_db);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/categories/ghost")
                .method("DELETE")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_list_listings_page_window() {
    let listing_db = Arc::new(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![
                test_listing("lst6"),
                test_listing("lst7"),
                test_listing("lst8"),
            ]])
            .into_connection(),
    );
    let app = test_app(build_state(
        empty_conn(),
        empty_conn(),
        empty_conn(),
        listing_db,
        empty_conn(),
        empty_conn(),
    ));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/listings?page=2&limit=5")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["page"], 2);
    assert_eq!(body["limit"], 5);
    assert!(body["data"].as_array().unwrap().len() <= 5);
}

#[tokio::test]
async fn test_get_listing_includes_images() {
    let listing_db = Arc::new(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[test_listing("lst1")]])
            .into_connection(),
    );
    let image_db = Arc::new(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[tradepost_db::entities::image::Model {
                id: "img1".to_string(),
                listing_id: "lst1".to_string(),
                url: "https://img.example.com/1.jpg".to_string(),
                order: 0,
                created_at: Utc::now().into(),
            }]])
            .into_connection(),
    );
    let app = test_app(build_state(
        empty_conn(),
        empty_conn(),
        empty_conn(),
        listing_db,
        image_db,
        empty_conn(),
    ));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/listings/lst1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["data"]["id"], "lst1");
    assert_eq!(body["data"]["currency"], "USD");
    assert_eq!(body["data"]["images"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"]["images"][0]["order"], 0);
}

#[tokio::test]
async fn test_add_image_to_missing_listing_returns_404() {
    let listing_db = Arc::new(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<listing::Model>::new()])
            .into_connection(),
    );
    let app = test_app(build_state(
        empty_conn(),
        empty_conn(),
        empty_conn(),
        listing_db,
        empty_conn(),
        empty_conn(),
    ));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/listings/ghost/images")
                .method("POST")
                .header("Content-Type", "application/json")
                .body(Body::from(r#"{"url":"https://img.example.com/1.jpg"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_duplicate_favorite_returns_409() {
    let user_db = Arc::new(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[test_user("user1", "a@example.com")]])
            .into_connection(),
    );
    let listing_db = Arc::new(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[test_listing("lst1")]])
            .into_connection(),
    );
    let favorite_db = Arc::new(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[favorite::Model {
                id: "fav1".to_string(),
                user_id: "user1".to_string(),
                listing_id: "lst1".to_string(),
                created_at: Utc::now().into(),
            }]])
            .into_connection(),
    );
    let app = test_app(build_state(
        user_db,
        empty_conn(),
        empty_conn(),
        listing_db,
        empty_conn(),
        favorite_db,
    ));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/favorites")
                .method("POST")
                .header("Content-Type", "application/json")
                .body(Body::from(r#"{"userId":"user1","listingId":"lst1"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "CONSTRAINT_VIOLATION");
}

#[tokio::test]
async fn test_remove_favorite_returns_204() {
    let favorite_db = Arc::new(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection(),
    );
    let app = test_app(build_state(
        empty_conn(),
        empty_conn(),
        empty_conn(),
        empty_conn(),
        empty_conn(),
        favorite_db,
    ));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/favorites")
                .method("DELETE")
                .header("Content-Type", "application/json")
                .body(Body::from(r#"{"userId":"user1","listingId":"lst1"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_list_user_favorites() {
    let favorite_db = Arc::new(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[favorite::Model {
                id: "fav1".to_string(),
                user_id: "user1".to_string(),
                listing_id: "lst1".to_string(),
                created_at: Utc::now().into(),
            }]])
            .into_connection(),
    );
    let app = test_app(build_state(
        empty_conn(),
        empty_conn(),
        empty_conn(),
        empty_conn(),
        empty_conn(),
        favorite_db,
    ));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/favorites/user/user1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["page"], 1);
    assert_eq!(body["limit"], 20);
    assert_eq!(body["data"][0]["listingId"], "lst1");
}

#[tokio::test]
async fn test_unknown_endpoint_returns_404() {
    let app = test_app(build_state(
        empty_conn(),
        empty_conn(),
        empty_conn(),
        empty_conn(),
        empty_conn(),
        empty_conn(),
    ));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/nonexistent")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
