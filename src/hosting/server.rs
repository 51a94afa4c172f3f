use super::*;
use crate::config::Config;
use crate::service::GameService;
use crate::storage::Storage;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpServer;
use actix_web::middleware::Logger;
use actix_web::web;

pub struct Server;

impl Server {
    /// Serves the game until interrupted, restoring from and saving to
    /// the configured snapshot around the server's lifetime.
    pub async fn run(config: Config) -> anyhow::Result<()> {
        let rules = config.rules();
        let storage = config.storage();
        let service = web::Data::new(
            match storage.as_ref().map(|s| s.load()).transpose()?.flatten() {
                Some(table) => GameService::restore(rules, table),
                None => GameService::new(rules),
            },
        );
        log::info!("starting hosting server on {}", config.bind);
        let data = service.clone();
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .app_data(data.clone())
                .configure(routes)
        })
        .workers(config.workers)
        .bind(&config.bind)?
        .run()
        .await?;
        log::info!("hosting server stopped");
        if let Some(storage) = storage {
            storage.save(&service.snapshot().await)?;
        }
        Ok(())
    }
}

/// Route table, shared by the server and by tests.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|e, _| malformed(e)))
        .app_data(web::PathConfig::default().error_handler(|e, _| malformed(e)))
        .route("/health", web::get().to(health))
        .route("/game_state", web::get().to(game_state))
        .route("/pending_actions", web::get().to(pending_actions))
        .route("/history", web::get().to(history))
        .route("/players", web::get().to(players))
        .route("/propose_action", web::post().to(propose_action))
        .route("/support_action/{target}", web::post().to(support_action))
        .route("/run_game", web::post().to(run_game))
        .route("/reset_game", web::post().to(reset_game));
}
