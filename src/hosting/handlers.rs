use super::*;
use crate::ErrorKind;
use crate::GameError;
use crate::PlayerIndex;
use crate::service::GameService;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::error::InternalError;
use actix_web::web;

pub async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

pub async fn game_state(service: web::Data<GameService>) -> impl Responder {
    HttpResponse::Ok().json(service.state().await)
}

pub async fn pending_actions(service: web::Data<GameService>) -> impl Responder {
    HttpResponse::Ok().json(service.pending().await)
}

pub async fn history(service: web::Data<GameService>) -> impl Responder {
    HttpResponse::Ok().json(service.history().await)
}

pub async fn players(service: web::Data<GameService>) -> impl Responder {
    HttpResponse::Ok().json(service.players().await)
}

pub async fn propose_action(
    service: web::Data<GameService>,
    req: web::Json<ProposeRequest>,
) -> impl Responder {
    match service.propose(req.player_index, req.amount).await {
        Ok(action) => HttpResponse::Created().json(action),
        Err(e) => failure(e),
    }
}

pub async fn support_action(
    service: web::Data<GameService>,
    path: web::Path<PlayerIndex>,
    req: web::Json<SupportRequest>,
) -> impl Responder {
    let target = path.into_inner();
    match service.support(req.supporter, target, req.support).await {
        Ok(weight) => HttpResponse::Ok().json(SupportResponse {
            target_player_index: target,
            support_weight: weight,
        }),
        Err(e) => failure(e),
    }
}

pub async fn run_game(
    service: web::Data<GameService>,
    req: web::Json<RunRequest>,
) -> impl Responder {
    match service.run(req.outcome).await {
        Ok(state) => HttpResponse::Ok().json(state),
        Err(e) => failure(e),
    }
}

pub async fn reset_game(service: web::Data<GameService>) -> impl Responder {
    match service.reset().await {
        Ok(state) => HttpResponse::Ok().json(state),
        Err(e) => failure(e),
    }
}

fn failure(e: GameError) -> HttpResponse {
    let body = ErrorResponse::from(&e);
    match (e.kind(), e) {
        (ErrorKind::Validation, GameError::UnknownAction(_)) => HttpResponse::NotFound().json(body),
        (ErrorKind::Validation, _) => HttpResponse::BadRequest().json(body),
        (ErrorKind::Concurrency, _) => HttpResponse::Conflict().json(body),
        (ErrorKind::Internal, _) => HttpResponse::InternalServerError().json(body),
    }
}

/// Body-or-path extraction failures, answered in the same shape as
/// validation errors from the game itself.
pub fn malformed<E>(e: E) -> actix_web::Error
where
    E: std::fmt::Debug + std::fmt::Display + 'static,
{
    let body = ErrorResponse::malformed(&e);
    InternalError::from_response(e, HttpResponse::BadRequest().json(body)).into()
}
