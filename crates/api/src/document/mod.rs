mod clear_document_content;
mod create_document;
mod delete_document;
mod get_document;
mod get_document_content;
mod get_documents;
mod get_documents_by_user;
mod set_document_content;
mod update_document;

use actix_web::web;
use clear_document_content::clear_document_content_controller;
use create_document::create_document_controller;
use delete_document::delete_document_controller;
use get_document::get_document_controller;
use get_document_content::get_document_content_controller;
use get_documents::get_documents_controller;
use get_documents_by_user::get_documents_by_user_controller;
use set_document_content::set_document_content_controller;
use update_document::update_document_controller;

pub use create_document::{CreateDocumentUseCase, UseCaseError as CreateDocumentError};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/documents", web::get().to(get_documents_controller));
    cfg.route("/documents", web::post().to(create_document_controller));
    cfg.route(
        "/documents/user/{user_id}",
        web::get().to(get_documents_by_user_controller),
    );
    cfg.route(
        "/documents/{document_id}",
        web::get().to(get_document_controller),
    );
    cfg.route(
        "/documents/{document_id}",
        web::put().to(update_document_controller),
    );
    cfg.route(
        "/documents/{document_id}",
        web::delete().to(delete_document_controller),
    );
    cfg.route(
        "/documents/{document_id}/content",
        web::get().to(get_document_content_controller),
    );
    cfg.route(
        "/documents/{document_id}/content",
        web::patch().to(set_document_content_controller),
    );
    cfg.route(
        "/documents/{document_id}/content",
        web::delete().to(clear_document_content_controller),
    );
}
