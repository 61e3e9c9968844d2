use actix_web::{App, http::StatusCode, test};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use shiftcare::middleware::RequestId;
use shiftcare::models::{Shift, ShiftStatus, SwapRequest, SwapStatus};

mod common;
use common::{TestApp, read_data, read_error};

#[actix_web::test]
async fn test_list_seeded_swap_requests() {
    let ctx = TestApp::new();
    let app = test::init_service(App::new().configure(ctx.configure())).await;

    let req = test::TestRequest::get().uri("/api/v1/swaps").to_request();
    let swaps: Vec<SwapRequest> = read_data(test::call_service(&app, req).await).await;

    assert_eq!(swaps.len(), 2);
    assert_eq!(swaps[0].requester_name, "Dr. Chen");
    assert_eq!(swaps[0].status, SwapStatus::New);
    assert_eq!(swaps[1].status, SwapStatus::Pending);
}

#[actix_web::test]
async fn test_accept_swap_rewrites_october_26() {
    let ctx = TestApp::new();
    let app = test::init_service(App::new().wrap(RequestId).configure(ctx.configure())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/swaps/1/accept")
        .insert_header(("x-correlation-id", "swap-accept-1"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("x-correlation-id").unwrap(),
        "swap-accept-1"
    );

    let body: Value = read_data(resp).await;
    assert_eq!(body["applied"], true);
    assert_eq!(body["acceptedSwaps"][0]["id"], "1");
    assert_eq!(body["acceptedSwaps"][0]["status"], "accepted");
    assert_eq!(body["acceptedSwaps"][0]["isAccepted"], true);
    assert_eq!(
        body["events"].as_array().unwrap().last().unwrap(),
        &json!({ "type": "shiftsChanged", "month": { "year": 2025, "month": 10 }, "shiftId": "oct-2025-26" })
    );

    let req = test::TestRequest::get()
        .uri("/api/v1/shifts?year=2025&month=10")
        .to_request();
    let shifts: Vec<Shift> = read_data(test::call_service(&app, req).await).await;
    let day_26 = shifts.iter().find(|s| s.id == "oct-2025-26").unwrap();
    assert_eq!(day_26.status, ShiftStatus::Swapped);
    assert_eq!(day_26.start_time, "08:00 AM");
    assert_eq!(day_26.end_time, "05:00 PM");
    assert_eq!(day_26.department, "Cardiology");

    let req = test::TestRequest::get()
        .uri("/api/v1/swaps?status=new")
        .to_request();
    let new: Vec<SwapRequest> = read_data(test::call_service(&app, req).await).await;
    assert!(new.is_empty());
}

#[actix_web::test]
async fn test_accept_swap_twice_is_noop() {
    let ctx = TestApp::new();
    let app = test::init_service(App::new().configure(ctx.configure())).await;

    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri("/api/v1/swaps/2/accept")
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }

    let req = test::TestRequest::get()
        .uri("/api/v1/swaps/accepted")
        .to_request();
    let accepted: Vec<SwapRequest> = read_data(test::call_service(&app, req).await).await;
    assert_eq!(accepted.len(), 1);

    let store = ctx.state.store().unwrap();
    assert_eq!(store.shifts_revision(), 1);
    assert!(store.is_accepted("2"));
}

#[actix_web::test]
async fn test_accept_open_offer_by_id() {
    let ctx = TestApp::new();
    let app = test::init_service(App::new().configure(ctx.configure())).await;

    let req = test::TestRequest::get().uri("/api/v1/swaps/4").to_request();
    let offer: SwapRequest = read_data(test::call_service(&app, req).await).await;
    assert_eq!(offer.requester_name, "Dr. Rajesh Kumar");

    let req = test::TestRequest::post()
        .uri("/api/v1/swaps/4/accept")
        .to_request();
    let body: Value = read_data(test::call_service(&app, req).await).await;
    assert_eq!(body["applied"], true);
    assert_eq!(body["acceptedSwaps"][0]["id"], "static_Dr. Rajesh Kumar");

    let req = test::TestRequest::get().uri("/api/v1/offers").to_request();
    let offers: Vec<SwapRequest> = read_data(test::call_service(&app, req).await).await;
    assert_eq!(offers.len(), 2);
    assert!(offers.iter().all(|o| o.requester_name != "Dr. Rajesh Kumar"));

    let req = test::TestRequest::post()
        .uri("/api/v1/offers/static/accept")
        .set_json(json!({ "doctorName": "Dr. Rajesh Kumar", "date": "Nov 2", "department": "ICU" }))
        .to_request();
    let body: Value = read_data(test::call_service(&app, req).await).await;
    assert_eq!(body["applied"], false);

    let req = test::TestRequest::post()
        .uri("/api/v1/swaps/4/accept")
        .to_request();
    let body: Value = read_data(test::call_service(&app, req).await).await;
    assert_eq!(body["applied"], false);
    assert_eq!(body["acceptedSwaps"].as_array().unwrap().len(), 1);

    let store = ctx.state.store().unwrap();
    assert_eq!(store.shifts_revision(), 1);
    let nov_2 = store
        .shifts_for_month(11, 2025)
        .iter()
        .find(|s| s.id == "nov-2025-02")
        .unwrap();
    assert_eq!(nov_2.department, "ICU");
    assert_eq!(nov_2.start_time, "2 PM");
    assert_eq!(nov_2.end_time, "10 PM");
}

#[actix_web::test]
async fn test_unknown_swap_returns_not_found() {
    let ctx = TestApp::new();
    let app = test::init_service(App::new().configure(ctx.configure())).await;

    let req = test::TestRequest::get().uri("/api/v1/swaps/missing").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(read_error(resp).await, "Not found: Swap request missing");
}

#[actix_web::test]
async fn test_create_swap_request() {
    let ctx = TestApp::new();
    let app = test::init_service(App::new().configure(ctx.configure())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/swaps")
        .set_json(json!({
            "requestedShiftId": "oct-2025-29",
            "offeredShiftId": "oct-2025-30",
            "date": "Wed, Oct 29",
            "time": "08:00 AM - 05:00 PM",
            "department": "Cardiology"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let created: SwapRequest = read_data(resp).await;
    assert_eq!(created.status, SwapStatus::Pending);
    assert_eq!(created.requester_id, "1");
    assert_eq!(created.requester_name, "Dr. Sharma");
    assert!(!created.is_accepted);

    let req = test::TestRequest::get()
        .uri("/api/v1/swaps?status=pending")
        .to_request();
    let pending: Vec<SwapRequest> = read_data(test::call_service(&app, req).await).await;
    assert_eq!(pending.len(), 2);
    assert!(pending.iter().any(|s| s.id == created.id));
}
