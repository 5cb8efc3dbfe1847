use actix_web::{App, http::StatusCode, test, web};
use serde_json::Value;

use member_search::models::config::PageLimits;
use member_search::routes::configure;

mod common;

macro_rules! init_app {
    ($test_db:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($test_db.repo()))
                .app_data(web::Data::new(PageLimits::default()))
                .configure(configure),
        )
        .await
    };
}

fn usernames(rows: &Value) -> Vec<String> {
    rows.as_array()
        .unwrap()
        .iter()
        .map(|r| r["username"].as_str().unwrap().to_string())
        .collect()
}

#[actix_web::test]
async fn v1_filters_by_minimum_age() {
    let test_db = common::TestDb::new("v1_filters_by_minimum_age.db");
    common::seed_members(&test_db.repo());
    let app = init_app!(test_db);

    let req = test::TestRequest::get()
        .uri("/v1/members?ageGoe=20")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(usernames(&body), vec!["member2", "member3", "member4"]);
    assert_eq!(body[0]["teamName"], "teamA");
    assert_eq!(body[2]["teamName"], "teamB");
    assert!(body[0]["memberId"].is_number());
}

#[actix_web::test]
async fn v1_blank_filters_are_ignored() {
    let test_db = common::TestDb::new("v1_blank_filters_are_ignored.db");
    common::seed_members(&test_db.repo());
    let app = init_app!(test_db);

    let req = test::TestRequest::get()
        .uri("/v1/members?username=&teamName=")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.as_array().unwrap().len(), 4);
}

#[actix_web::test]
async fn v4_short_first_page_reports_exact_total() {
    let test_db = common::TestDb::new("v4_short_first_page.db");
    common::seed_members(&test_db.repo());
    let app = init_app!(test_db);

    let req = test::TestRequest::get()
        .uri("/v4/members?teamName=teamA&ageLoe=15&page=0&size=10")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(usernames(&body["content"]), vec!["member1"]);
    assert_eq!(body["totalElements"], 1);
    assert_eq!(body["totalPages"], 1);
    assert_eq!(body["page"], 0);
    assert_eq!(body["size"], 10);
}

#[actix_web::test]
async fn paged_versions_agree_on_totals() {
    let test_db = common::TestDb::new("paged_versions_agree.db");
    let repo = test_db.repo();
    common::seed_members(&repo);
    common::create_member(&repo, "loner", 35, None);
    let app = init_app!(test_db);

    for version in ["v2", "v3", "v4"] {
        let req = test::TestRequest::get()
            .uri(&format!("/{version}/members?ageGoe=20&page=1&size=2"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["totalElements"], 4, "{version}");
        assert_eq!(body["totalPages"], 2, "{version}");
        assert_eq!(usernames(&body["content"]), vec!["member4", "loner"], "{version}");
    }
}

#[actix_web::test]
async fn consolidated_endpoint_accepts_count_strategy() {
    let test_db = common::TestDb::new("consolidated_endpoint.db");
    common::seed_members(&test_db.repo());
    let app = init_app!(test_db);

    for strategy in ["always", "join_reduced", "skip_when_possible"] {
        let req = test::TestRequest::get()
            .uri(&format!("/members?teamName=teamB&size=1&count={strategy}"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["totalElements"], 2, "{strategy}");
        assert_eq!(usernames(&body["content"]), vec!["member3"], "{strategy}");
    }
}

#[actix_web::test]
async fn malformed_age_is_bad_request() {
    let test_db = common::TestDb::new("malformed_age.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::get()
        .uri("/v1/members?ageGoe=twenty")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
}

#[actix_web::test]
async fn invalid_page_size_is_bad_request() {
    let test_db = common::TestDb::new("invalid_page_size.db");
    let app = init_app!(test_db);

    for uri in [
        "/v2/members?size=0",
        "/v3/members?size=100000",
        "/v4/members?page=-1",
        "/members?count=sometimes",
    ] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
    }
}

#[actix_web::test]
async fn member_lookups() {
    let test_db = common::TestDb::new("member_lookups.db");
    let fixture = common::seed_members(&test_db.repo());
    let app = init_app!(test_db);

    let id = fixture.members[1].id;
    let req = test::TestRequest::get()
        .uri(&format!("/members/{id}"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["username"], "member2");
    assert_eq!(body["teamId"], fixture.team_a.id.get());

    let req = test::TestRequest::get().uri("/members/999").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get().uri("/members/0").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get()
        .uri("/members/by-username/member4")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["age"], 40);
}

#[actix_web::test]
async fn page_offset_beyond_sql_range_is_bad_request() {
    let test_db = common::TestDb::new("page_offset_out_of_range.db");
    common::seed_members(&test_db.repo());
    let app = init_app!(test_db);

    for uri in [
        "/v2/members?page=500000000000000000&size=20",
        "/v4/members?page=9223372036854775807&size=2",
        "/members?page=18446744073709551615&size=2000",
    ] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string(), "{uri}");
    }

    let req = test::TestRequest::get()
        .uri("/v2/members?page=1000000&size=20")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert!(body["content"].as_array().unwrap().is_empty());
    assert_eq!(body["totalElements"], 4);
}

#[actix_web::test]
async fn list_all_members_and_show_team() {
    let test_db = common::TestDb::new("list_all_and_show_team.db");
    let repo = test_db.repo();
    let fixture = common::seed_members(&repo);
    common::create_member(&repo, "loner", 50, None);
    let app = init_app!(test_db);

    let req = test::TestRequest::get().uri("/members/all").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        usernames(&body),
        vec!["member1", "member2", "member3", "member4", "loner"]
    );
    assert!(body[4]["teamId"].is_null());

    let id = fixture.team_b.id;
    let req = test::TestRequest::get()
        .uri(&format!("/teams/{id}"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["name"], "teamB");
    assert_eq!(body["id"], id.get());

    let req = test::TestRequest::get().uri("/teams/999").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
