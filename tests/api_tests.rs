mod common;

use actix_web::{App, http::StatusCode, test, web};
use serde_json::{Value, json};

use common::memory_storage;
use exam_seater::config::ExportConfig;
use exam_seater::models::ErrorCode;
use exam_seater::utils::{json_error_handler, path_error_handler, query_error_handler};
use exam_seater::{routes, services};

macro_rules! test_app {
    () => {{
        let storage = memory_storage().await;
        test::init_service(
            App::new()
                .app_data(web::QueryConfig::default().error_handler(query_error_handler))
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .app_data(web::PathConfig::default().error_handler(path_error_handler))
                .configure(|cfg| {
                    services::configure_service_data(cfg, &storage, &ExportConfig::default())
                })
                .configure(routes::configure_api_routes),
        )
        .await
    }};
}

macro_rules! send {
    ($app:expr, $req:expr) => {{
        let resp = test::call_service(&$app, $req.to_request()).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }};
}

#[actix_web::test]
async fn test_full_seating_flow() {
    let app = test_app!();

    let (status, room) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/rooms")
            .set_json(json!({ "room_code": "LH-1", "capacity": 2 }))
    );
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(room["code"], 0);
    assert_eq!(room["data"]["capacity"], 2);

    let (status, exam) = send!(
        app,
        test::TestRequest::post().uri("/api/v1/exams").set_json(json!({
            "course_code": "CS101",
            "exam_date": "2025-12-01",
            "start_time": "09:00",
            "end_time": "12:00"
        }))
    );
    assert_eq!(status, StatusCode::CREATED);
    let exam_id = exam["data"]["exam_id"].as_i64().expect("exam id");
    assert_eq!(exam["data"]["course_title"], "CS101");

    for roll in ["R1", "R2", "R3"] {
        let (status, _) = send!(
            app,
            test::TestRequest::post()
                .uri("/api/v1/students")
                .set_json(json!({ "roll": roll, "name": format!("Student {roll}") }))
        );
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, summary) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/registrations")
            .set_json(json!({ "exam_id": exam_id }))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["data"]["registered"], 3);

    let (status, seating) = send!(
        app,
        test::TestRequest::post().uri(&format!("/api/v1/exams/{exam_id}/seats"))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(seating["data"]["seated"], 2);
    assert_eq!(seating["data"]["unseated"], 1);
    assert_eq!(seating["message"], "Not enough seats. 1 unseated");
    assert_eq!(seating["data"]["rooms"][0]["seats"][0]["student"]["roll_no"], "R1");

    let (status, seats) = send!(
        app,
        test::TestRequest::get().uri(&format!("/api/v1/exams/{exam_id}/seats"))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(seats["data"].as_array().map(Vec::len), Some(2));

    let (status, state) = send!(app, test::TestRequest::get().uri("/api/v1/state"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        state["data"]["regs"][exam_id.to_string()]
            .as_array()
            .map(Vec::len),
        Some(3)
    );
    assert_eq!(state["data"]["courses"][0]["course_code"], "CS101");

    let (status, cleared) = send!(app, test::TestRequest::delete().uri("/api/v1/seats"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cleared["data"]["removed"], 2);
}

#[actix_web::test]
async fn test_seating_without_registrations_is_bad_request() {
    let app = test_app!();

    let (_, exam) = send!(
        app,
        test::TestRequest::post().uri("/api/v1/exams").set_json(json!({
            "course_code": "MA101",
            "exam_date": "2025-12-02",
            "start_time": "14:00",
            "end_time": "16:00"
        }))
    );
    let exam_id = exam["data"]["exam_id"].as_i64().expect("exam id");

    let (status, body) = send!(
        app,
        test::TestRequest::post().uri(&format!("/api/v1/exams/{exam_id}/seats"))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], ErrorCode::NoRegistrations as i32);
    assert_eq!(body["message"], "no registrations for exam");
}

#[actix_web::test]
async fn test_unknown_exam_is_not_found() {
    let app = test_app!();

    let (status, body) = send!(app, test::TestRequest::post().uri("/api/v1/exams/77/seats"));
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], ErrorCode::ExamNotFound as i32);

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/registrations")
            .set_json(json!({ "exam_id": 77 }))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], ErrorCode::ExamNotFound as i32);
}

#[actix_web::test]
async fn test_invalid_input_is_rejected() {
    let app = test_app!();

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/rooms")
            .set_json(json!({ "room_code": "R1", "capacity": 0 }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], ErrorCode::InvalidParameter as i32);

    let (status, body) = send!(
        app,
        test::TestRequest::post().uri("/api/v1/exams").set_json(json!({
            "course_code": "CS101",
            "exam_date": "2025-12-01",
            "start_time": "12:00",
            "end_time": "09:00"
        }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "end_time must be later than start_time");

    let (status, body) = send!(
        app,
        test::TestRequest::post().uri("/api/v1/exams").set_json(json!({
            "course_code": "CS101",
            "exam_date": "01/12/2025",
            "start_time": "09:00",
            "end_time": "12:00"
        }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], ErrorCode::InvalidParameter as i32);

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/students")
            .set_json(json!({ "roll": "", "name": "Nobody" }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "roll required");

    let (status, body) = send!(app, test::TestRequest::delete().uri("/api/v1/rooms/abc"));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], ErrorCode::BadRequest as i32);
}

#[actix_web::test]
async fn test_duplicate_room_is_conflict() {
    let app = test_app!();

    let request = || {
        test::TestRequest::post()
            .uri("/api/v1/rooms")
            .set_json(json!({ "room_code": "LH-9", "capacity": 40 }))
    };
    let (status, _) = send!(app, request());
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send!(app, request());
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], ErrorCode::Conflict as i32);
}

#[actix_web::test]
async fn test_delete_missing_resources() {
    let app = test_app!();

    let (status, body) = send!(app, test::TestRequest::delete().uri("/api/v1/rooms/5"));
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], ErrorCode::RoomNotFound as i32);

    let (status, body) = send!(app, test::TestRequest::delete().uri("/api/v1/students/5"));
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], ErrorCode::StudentNotFound as i32);

    let (status, body) = send!(app, test::TestRequest::delete().uri("/api/v1/exams/5"));
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], ErrorCode::ExamNotFound as i32);
}

#[actix_web::test]
async fn test_invigilator_routes() {
    let app = test_app!();

    let (_, room) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/rooms")
            .set_json(json!({ "room_code": "LH-2", "capacity": 20 }))
    );
    let room_id = room["data"]["room_id"].as_i64().expect("room id");
    let (_, exam) = send!(
        app,
        test::TestRequest::post().uri("/api/v1/exams").set_json(json!({
            "course_code": "EE201",
            "exam_date": "2025-12-03",
            "start_time": "09:00",
            "end_time": "11:00"
        }))
    );
    let exam_id = exam["data"]["exam_id"].as_i64().expect("exam id");

    let (status, inv) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/invigilators")
            .set_json(json!({ "name": "Dr. Iyer", "emp": "E7" }))
    );
    assert_eq!(status, StatusCode::CREATED);
    let inv_id = inv["data"]["invigilator_id"].as_i64().expect("invigilator id");

    let (status, _) = send!(
        app,
        test::TestRequest::post()
            .uri(&format!("/api/v1/invigilators/{inv_id}/availability"))
            .set_json(json!({ "date": "2025-12-03", "start_time": "08:00", "end_time": "13:00" }))
    );
    assert_eq!(status, StatusCode::CREATED);

    let (status, slots) = send!(
        app,
        test::TestRequest::get().uri(&format!("/api/v1/invigilators/{inv_id}/availability"))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(slots["data"].as_array().map(Vec::len), Some(1));

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/invigilators/999/availability")
            .set_json(json!({ "date": "2025-12-03", "start_time": "08:00", "end_time": "13:00" }))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], ErrorCode::InvigilatorNotFound as i32);

    let (status, assignment) = send!(
        app,
        test::TestRequest::post()
            .uri(&format!("/api/v1/exams/{exam_id}/invigilation"))
            .set_json(json!({ "room_id": room_id, "invigilator_id": inv_id, "role": "chief" }))
    );
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(assignment["data"]["role"], "chief");
    let assign_id = assignment["data"]["assign_id"].as_i64().expect("assign id");

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri(&format!("/api/v1/exams/{exam_id}/invigilation"))
            .set_json(json!({ "room_id": 999, "invigilator_id": inv_id }))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], ErrorCode::RoomNotFound as i32);

    let (status, _) = send!(
        app,
        test::TestRequest::delete()
            .uri(&format!("/api/v1/exams/{exam_id}/invigilation/{assign_id}"))
    );
    assert_eq!(status, StatusCode::OK);

    let (status, list) = send!(
        app,
        test::TestRequest::get().uri(&format!("/api/v1/exams/{exam_id}/invigilation"))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list["data"].as_array().map(Vec::len), Some(0));
}

#[actix_web::test]
async fn test_export_is_attachment() {
    let app = test_app!();

    let (status, _) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/rooms")
            .set_json(json!({ "room_code": "LH-3", "capacity": 12 }))
    );
    assert_eq!(status, StatusCode::CREATED);

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/v1/export").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let disposition = resp
        .headers()
        .get("Content-Disposition")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    assert_eq!(
        disposition.as_deref(),
        Some("attachment; filename=\"examseater-db.json\"")
    );

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["rooms"][0]["room_code"], "LH-3");
    assert_eq!(body["rooms"][0]["capacity"], 12);
    assert!(body["rooms"][0].get("building").is_none());
}

#[actix_web::test]
async fn test_codes_with_spaces_are_accepted() {
    let app = test_app!();

    let (status, room) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/rooms")
            .set_json(json!({ "room_code": "Hall A", "capacity": 60 }))
    );
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(room["data"]["room_code"], "Hall A");

    let (status, student) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/students")
            .set_json(json!({ "roll": "2021 CSE 001", "name": "Asha" }))
    );
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(student["data"]["roll_no"], "2021 CSE 001");

    let (status, _) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/invigilators")
            .set_json(json!({ "name": "Dr. Sen", "emp": "EMP 42" }))
    );
    assert_eq!(status, StatusCode::CREATED);
}

#[actix_web::test]
async fn test_state_omits_exams_without_registrations() {
    let app = test_app!();

    let mut exam_ids = Vec::new();
    for course in ["PH101", "PH102"] {
        let (_, exam) = send!(
            app,
            test::TestRequest::post().uri("/api/v1/exams").set_json(json!({
                "course_code": course,
                "exam_date": "2025-12-04",
                "start_time": "10:00",
                "end_time": "12:00"
            }))
        );
        exam_ids.push(exam["data"]["exam_id"].as_i64().expect("exam id"));
    }
    let (status, _) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/students")
            .set_json(json!({ "roll": "P1", "name": "Priya" }))
    );
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/registrations")
            .set_json(json!({ "exam_id": exam_ids[0] }))
    );
    assert_eq!(status, StatusCode::OK);

    let (status, state) = send!(app, test::TestRequest::get().uri("/api/v1/state"));
    assert_eq!(status, StatusCode::OK);
    let regs = state["data"]["regs"].as_object().expect("regs object");
    assert_eq!(regs.len(), 1);
    assert!(regs.contains_key(&exam_ids[0].to_string()));
    assert!(!regs.contains_key(&exam_ids[1].to_string()));
}
