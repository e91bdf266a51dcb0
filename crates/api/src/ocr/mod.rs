mod ingest_create;
mod ingest_preview;

use actix_web::web;
use ingest_create::ingest_create_controller;
use ingest_preview::ingest_preview_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/ocr/ingest-preview",
        web::post().to(ingest_preview_controller),
    );
    cfg.route("/ocr/ingest-create", web::post().to(ingest_create_controller));
}
