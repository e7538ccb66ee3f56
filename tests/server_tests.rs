mod common;
use actix_web::{App, http::StatusCode, test, web};
use common::{init_db_with_data, setup_test_db};
use rplancharge::config::Config;
use rplancharge::core::palette::Palette;
use rplancharge::server::{ADMIN_HEADER, Api, configure};
use serde_json::{Value, json};

fn api_for(db_path: &str, require_admin: bool) -> web::Data<Api> {
    let cfg = Config {
        database: db_path.to_string(),
        require_admin,
        ..Config::default()
    };
    web::Data::new(Api::new(&cfg, Palette::default()))
}

macro_rules! app {
    ($api:expr) => {
        test::init_service(App::new().app_data($api).configure(configure)).await
    };
}

#[actix_web::test]
async fn test_root_and_data() {
    let db_path = setup_test_db("server_root_data");
    init_db_with_data(&db_path);
    let app = app!(api_for(&db_path, false));

    let req = test::TestRequest::get().uri("/").to_request();
    let body = test::call_and_read_body(&app, req).await;
    assert_eq!(&body[..], b"plan de charge");

    let req = test::TestRequest::get().uri("/api/data").to_request();
    let rows: Value = test::call_and_read_body_json(&app, req).await;
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["id_pers"], 1);
    assert_eq!(rows[0]["month"], "2024-01-01");
    assert_eq!(rows[0]["comment"], "lead");
}

#[actix_web::test]
async fn test_reference_endpoints() {
    let db_path = setup_test_db("server_reference");
    init_db_with_data(&db_path);
    let app = app!(api_for(&db_path, false));

    let req = test::TestRequest::get().uri("/api/persons").to_request();
    let persons: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(persons.as_array().unwrap().len(), 2);
    assert_eq!(persons[0]["team"], "Core");

    let req = test::TestRequest::get().uri("/api/subjects").to_request();
    let subjects: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(subjects[0]["subject"], "Math");
    assert_eq!(subjects[0]["id_subject"], 1);

    let req = test::TestRequest::get().uri("/api/teams").to_request();
    let teams: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(teams[0]["team"], "Core");
}

#[actix_web::test]
async fn test_matrix_carries_cell_colors() {
    let db_path = setup_test_db("server_matrix");
    init_db_with_data(&db_path);
    let app = app!(api_for(&db_path, false));

    let req = test::TestRequest::get()
        .uri("/api/matrix?name=doe")
        .to_request();
    let matrix: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(matrix["months"], json!(["2024-01-01", "2024-02-01"]));
    let rows = matrix["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["total"], 15);

    let palette = Palette::default();
    let jan = &rows[0]["cells"][0];
    assert_eq!(jan["load"], 5);
    assert_eq!(jan["background"], palette.color_for(5).to_hex());
    assert_eq!(jan["color"], "#000000");
}

#[actix_web::test]
async fn test_matrix_rejects_bad_window() {
    let db_path = setup_test_db("server_matrix_bad");
    init_db_with_data(&db_path);
    let app = app!(api_for(&db_path, false));

    let req = test::TestRequest::get()
        .uri("/api/matrix?from=2024-03&to=2024-01")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get()
        .uri("/api/matrix?from=someday")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_list_all_is_html_table() {
    let db_path = setup_test_db("server_list_all");
    init_db_with_data(&db_path);
    let app = app!(api_for(&db_path, false));

    let req = test::TestRequest::get().uri("/api/list_all").to_request();
    let body = test::call_and_read_body(&app, req).await;
    let html = String::from_utf8(body.to_vec()).unwrap();

    assert!(html.starts_with("<table border=\"1\">"));
    assert!(html.contains("<th>Comment</th>"));
    assert!(html.contains("<td>No comment</td>"));
    assert!(html.contains("<td>lead</td>"));
}

#[actix_web::test]
async fn test_submit_insert_then_update() {
    let db_path = setup_test_db("server_submit");
    init_db_with_data(&db_path);
    let app = app!(api_for(&db_path, false));

    let payload = json!({"id_pers": 2, "id_subject": 1, "month": "2024-03", "load": 4});

    let req = test::TestRequest::post()
        .uri("/api/submit")
        .set_json(&payload)
        .to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp["message"], "Record inserted successfully");

    let req = test::TestRequest::post()
        .uri("/api/submit")
        .set_json(json!({"ID_pers": 2, "ID_subject": 1, "month": "03/2024", "load": 6}))
        .to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp["message"], "Record updated successfully");
}

#[actix_web::test]
async fn test_submit_validation_and_lookup_errors() {
    let db_path = setup_test_db("server_submit_errors");
    init_db_with_data(&db_path);
    let app = app!(api_for(&db_path, false));

    let req = test::TestRequest::post()
        .uri("/api/submit")
        .set_json(json!({"id_pers": 1, "id_subject": 1, "month": "2024-03", "load": 40}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("Invalid load"));

    let req = test::TestRequest::post()
        .uri("/api/submit")
        .set_json(json!({"id_pers": 99, "id_subject": 1, "month": "2024-03", "load": 1}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_malformed_body_and_query_reply_json_errors() {
    let db_path = setup_test_db("server_malformed_input");
    init_db_with_data(&db_path);
    let app = app!(api_for(&db_path, false));

    let req = test::TestRequest::post()
        .uri("/api/submit")
        .set_json(json!({"id_pers": 1}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    let error = body["error"].as_str().unwrap();
    assert!(error.starts_with("Invalid input"));
    assert!(error.contains("id_subject"));

    let req = test::TestRequest::get()
        .uri("/api/matrix?sort=bogus")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("bogus"));
}

#[actix_web::test]
async fn test_submit_requires_admin_when_configured() {
    let db_path = setup_test_db("server_submit_admin");
    init_db_with_data(&db_path);

    {
        let mut pool = rplancharge::db::pool::DbPool::new(&db_path).unwrap();
        rplancharge::core::admin::AdminLogic::grant(&mut pool, 1, "jdoe").unwrap();
    }

    let app = app!(api_for(&db_path, true));
    let payload = json!({"id_pers": 1, "id_subject": 1, "month": "2024-01", "load": 6});

    let req = test::TestRequest::post()
        .uri("/api/submit")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::post()
        .uri("/api/submit")
        .insert_header((ADMIN_HEADER, "mallory"))
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::post()
        .uri("/api/submit")
        .insert_header((ADMIN_HEADER, "jdoe"))
        .set_json(&payload)
        .to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp["message"], "Record updated successfully");
}

#[actix_web::test]
async fn test_database_failure_is_generic_500() {
    let db_path = setup_test_db("server_no_schema");
    // file exists but has no tables
    std::fs::File::create(&db_path).unwrap();
    let app = app!(api_for(&db_path, false));

    let req = test::TestRequest::get().uri("/api/data").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Internal Server Error");
}
