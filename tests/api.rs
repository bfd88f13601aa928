use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use advocates_directory::domain::advocate::Advocate;
use advocates_directory::domain::types::AdvocateId;
use advocates_directory::load_records;
use advocates_directory::repository::InMemoryRepository;
use advocates_directory::routes::api::{api_advocates, api_seed, query_config};
use serde_json::Value;

mod common;

fn advocate(id: i32, first: &str, last: &str, specialties: &[&str], years: u32) -> Advocate {
    Advocate::try_new(
        first,
        last,
        "Austin",
        "MD",
        specialties.iter().map(|s| s.to_string()).collect(),
        years,
        5550000000 + id as u64,
    )
    .unwrap()
    .with_id(AdvocateId::new(id).unwrap())
}

fn repo_of(advocates: Vec<Advocate>) -> InMemoryRepository {
    InMemoryRepository::new(advocates).unwrap()
}

fn bundled_repo() -> InMemoryRepository {
    load_records(&common::server_config("data/advocates.json", None)).unwrap()
}

async fn get_json(repo: InMemoryRepository, uri: &str) -> (StatusCode, Value) {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(repo))
            .service(
                web::scope("/api")
                    .app_data(query_config())
                    .service(api_advocates)
                    .service(api_seed),
            ),
    )
    .await;

    let req = test::TestRequest::get().uri(uri).to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    let body: Value = test::read_body_json(resp).await;
    (status, body)
}

fn ids(body: &Value) -> Vec<i64> {
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_i64().unwrap())
        .collect()
}

#[actix_web::test]
async fn test_lists_with_default_pagination() {
    let (status, body) = get_json(bundled_repo(), "/api/advocates").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"].as_array().unwrap().len(), 15);
    assert_eq!(body["data"][0]["firstName"], "John");
    assert_eq!(body["data"][0]["phoneNumber"], 5551234567u64);
    assert_eq!(body["pagination"]["page"], 1);
    assert_eq!(body["pagination"]["limit"], 50);
    assert_eq!(body["pagination"]["totalCount"], 15);
    assert_eq!(body["pagination"]["totalPages"], 1);
    assert_eq!(body["pagination"]["hasMore"], false);
}

#[actix_web::test]
async fn test_experience_bucket_filter() {
    let repo = repo_of(vec![
        advocate(1, "Ann", "Lee", &[], 2),
        advocate(2, "Bob", "Ray", &[], 8),
        advocate(3, "Cal", "Fox", &[], 15),
    ]);

    let (status, body) = get_json(repo, "/api/advocates?experience=6-10").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![2]);
    assert_eq!(body["pagination"]["totalCount"], 1);
}

#[actix_web::test]
async fn test_search_matches_names_and_specialties() {
    let repo = repo_of(vec![
        advocate(1, "John", "Doe", &[], 4),
        advocate(2, "Ann", "Lee", &["Johnson's disease"], 4),
        advocate(3, "Cal", "Fox", &["Bipolar"], 4),
    ]);

    let (_, body) = get_json(repo.clone(), "/api/advocates?search=JOHN").await;
    assert_eq!(ids(&body), vec![1, 2]);

    let (_, body) = get_json(repo, "/api/advocates?search=john%20").await;
    assert_eq!(body["pagination"]["totalCount"], 0);
}

#[actix_web::test]
async fn test_sort_descending_is_stable() {
    let repo = repo_of(vec![
        advocate(1, "A", "A", &[], 5),
        advocate(2, "B", "B", &[], 1),
        advocate(3, "C", "C", &[], 5),
        advocate(4, "D", "D", &[], 3),
    ]);

    let (_, body) = get_json(
        repo,
        "/api/advocates?sortBy=yearsOfExperience&sortOrder=desc",
    )
    .await;

    assert_eq!(ids(&body), vec![1, 3, 4, 2]);
}

#[actix_web::test]
async fn test_last_partial_page() {
    let repo = repo_of(vec![
        advocate(1, "A", "A", &[], 1),
        advocate(2, "B", "B", &[], 2),
        advocate(3, "C", "C", &[], 3),
    ]);

    let (_, body) = get_json(repo, "/api/advocates?page=2&limit=2").await;

    assert_eq!(ids(&body), vec![3]);
    assert_eq!(body["pagination"]["totalPages"], 2);
    assert_eq!(body["pagination"]["hasMore"], false);
}

#[actix_web::test]
async fn test_page_past_the_end_is_empty() {
    let (status, body) = get_json(bundled_repo(), "/api/advocates?page=99&limit=10").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["data"].as_array().unwrap().is_empty());
    assert_eq!(body["pagination"]["totalCount"], 15);
    assert_eq!(body["pagination"]["totalPages"], 2);
    assert_eq!(body["pagination"]["hasMore"], false);
}

#[actix_web::test]
async fn test_unparseable_numbers_fall_back_to_defaults() {
    let (status, body) = get_json(bundled_repo(), "/api/advocates?page=abc&limit=").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["page"], 1);
    assert_eq!(body["pagination"]["limit"], 50);
}

#[actix_web::test]
async fn test_out_of_range_pagination_is_rejected() {
    for uri in [
        "/api/advocates?page=0",
        "/api/advocates?limit=0",
        "/api/advocates?limit=1001",
    ] {
        let (status, body) = get_json(bundled_repo(), uri).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().is_some_and(|e| !e.is_empty()));
    }
}

#[actix_web::test]
async fn test_pages_concatenate_to_full_result() {
    let mut collected = Vec::new();
    for page in 1..=4 {
        let (_, body) = get_json(
            bundled_repo(),
            &format!("/api/advocates?sortBy=lastName&page={page}&limit=4"),
        )
        .await;
        collected.extend(ids(&body));
    }

    let (_, full) = get_json(bundled_repo(), "/api/advocates?sortBy=lastName").await;
    assert_eq!(collected, ids(&full));
}

#[actix_web::test]
async fn test_seed_returns_dataset() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(bundled_repo()))
            .service(
                web::scope("/api")
                    .app_data(query_config())
                    .service(api_advocates)
                    .service(api_seed),
            ),
    )
    .await;

    let req = test::TestRequest::post().uri("/api/seed").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["advocates"].as_array().unwrap().len(), 15);

    // Seeding leaves the store untouched.
    let req = test::TestRequest::get().uri("/api/advocates").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["pagination"]["totalCount"], 15);
}

#[actix_web::test]
async fn test_malformed_query_uses_json_error_body() {
    let (status, body) = get_json(bundled_repo(), "/api/advocates?page=1&page=2").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().is_some_and(|e| e.contains("page")));
}
