#![cfg(feature = "server")]

use actix_web::App;
use actix_web::http::StatusCode;
use actix_web::test;
use actix_web::web;
use serde_json::Value;
use serde_json::json;
use synergy::hosting::routes;
use synergy::service::GameService;

macro_rules! app {
    ($service:expr) => {
        test::init_service(App::new().app_data($service.clone()).configure(routes)).await
    };
}

#[actix_web::test]
async fn full_round_over_http() {
    let service = web::Data::new(GameService::default());
    let app = app!(service);

    let req = test::TestRequest::get().uri("/game_state").to_request();
    let state: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(state["currentRound"], 0);
    assert_eq!(state["communityScore"], 0.0);
    assert_eq!(state["activePlayers"], 0);

    let req = test::TestRequest::post()
        .uri("/propose_action")
        .set_json(json!({ "player_index": 0, "amount": 10 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let action: Value = test::read_body_json(resp).await;
    assert_eq!(action["playerIndex"], 0);
    assert_eq!(action["amount"], 10);
    assert_eq!(action["supportWeight"], 0.0);

    let req = test::TestRequest::post()
        .uri("/propose_action")
        .set_json(json!({ "player_index": 1, "amount": 5 }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/support_action/0")
        .set_json(json!({ "supporter": 1, "support": true }))
        .to_request();
    let support: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(support["targetPlayerIndex"], 0);
    assert!(support["supportWeight"].as_f64().unwrap() > 0.);

    let req = test::TestRequest::get().uri("/pending_actions").to_request();
    let pending: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(pending.as_array().unwrap().len(), 2);

    let req = test::TestRequest::post()
        .uri("/run_game")
        .set_json(json!({ "outcome": "win" }))
        .to_request();
    let state: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(state["currentRound"], 1);
    assert_eq!(state["activePlayers"], 2);
    assert!(state["communityScore"].as_f64().unwrap() > 0.);

    let req = test::TestRequest::get().uri("/pending_actions").to_request();
    let pending: Value = test::call_and_read_body_json(&app, req).await;
    assert!(pending.as_array().unwrap().is_empty());

    let req = test::TestRequest::get().uri("/history").to_request();
    let history: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(history[0]["round"], 1);
    assert_eq!(history[0]["outcome"], "win");
    assert_eq!(history[0]["payouts"].as_array().unwrap().len(), 2);

    let req = test::TestRequest::post().uri("/reset_game").to_request();
    let state: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(state["currentRound"], 0);
    assert_eq!(state["timeRemaining"], 300);
}

#[actix_web::test]
async fn validation_errors_map_to_client_errors() {
    let service = web::Data::new(GameService::default());
    let app = app!(service);

    let req = test::TestRequest::post()
        .uri("/propose_action")
        .set_json(json!({ "player_index": 0, "amount": 0 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["kind"], "validation");
    assert_eq!(body["retryable"], false);

    let req = test::TestRequest::post()
        .uri("/propose_action")
        .set_json(json!({ "player_index": 0, "amount": 10 }))
        .to_request();
    test::call_service(&app, req).await;
    let req = test::TestRequest::post()
        .uri("/propose_action")
        .set_json(json!({ "player_index": 0, "amount": 10 }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/support_action/0")
        .set_json(json!({ "supporter": 0 }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/support_action/7")
        .set_json(json!({ "supporter": 0 }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::post()
        .uri("/run_game")
        .set_json(json!({ "outcome": "draw" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn support_can_be_withdrawn() {
    let service = web::Data::new(GameService::default());
    let app = app!(service);

    let req = test::TestRequest::post()
        .uri("/propose_action")
        .set_json(json!({ "playerIndex": 3, "amount": 20 }))
        .to_request();
    test::call_service(&app, req).await;
    for (flag, positive) in [(true, true), (true, true), (false, false)] {
        let req = test::TestRequest::post()
            .uri("/support_action/3")
            .set_json(json!({ "supporter": 4, "support": flag }))
            .to_request();
        let support: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(support["supportWeight"].as_f64().unwrap() > 0., positive);
    }
    assert_eq!(service.pending().await[0].support_weight(), 0.);
}

#[actix_web::test]
async fn players_list_reputation_and_profit() {
    let service = web::Data::new(GameService::default());
    let app = app!(service);

    for (player, amount) in [(0, 10), (1, 40)] {
        let req = test::TestRequest::post()
            .uri("/propose_action")
            .set_json(json!({ "player_index": player, "amount": amount }))
            .to_request();
        test::call_service(&app, req).await;
    }
    let req = test::TestRequest::get().uri("/players").to_request();
    let players: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(players.as_array().unwrap().len(), 2);
    assert_eq!(players[1]["playerIndex"], 1);
    assert_eq!(players[1]["pending"], 40);
    assert_eq!(players[1]["reputation"], 0.5);
    assert_eq!(players[1]["cumulativeProfit"], 0.0);

    let req = test::TestRequest::post()
        .uri("/run_game")
        .set_json(json!({ "outcome": "win" }))
        .to_request();
    test::call_service(&app, req).await;
    let req = test::TestRequest::get().uri("/players").to_request();
    let players: Value = test::call_and_read_body_json(&app, req).await;
    for player in players.as_array().unwrap() {
        assert!(player["pending"].is_null());
        assert!(player["cumulativeProfit"].as_f64().unwrap() > 0.);
        assert!(player["reputation"].as_f64().unwrap() > 0.5);
    }
}

#[actix_web::test]
async fn malformed_requests_share_the_error_shape() {
    let service = web::Data::new(GameService::default());
    let app = app!(service);

    let req = test::TestRequest::post()
        .uri("/propose_action")
        .insert_header(("content-type", "application/json"))
        .set_payload("{ not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["kind"], "validation");
    assert_eq!(body["retryable"], false);
    assert!(body["error"].is_string());

    let req = test::TestRequest::post()
        .uri("/run_game")
        .set_json(json!({ "outcome": "draw" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["kind"], "validation");

    let req = test::TestRequest::post()
        .uri("/support_action/nobody")
        .set_json(json!({ "supporter": 1 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["kind"], "validation");
}
