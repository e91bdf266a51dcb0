mod create_transaction;
mod delete_transaction;
mod get_transaction;
mod get_transactions;
mod get_transactions_by_user;
mod refresh_recurring_transaction;
mod update_transaction;

use actix_web::web;
use create_transaction::create_transaction_controller;
use delete_transaction::delete_transaction_controller;
use get_transaction::get_transaction_controller;
use get_transactions::get_transactions_controller;
use get_transactions_by_user::get_transactions_by_user_controller;
use refresh_recurring_transaction::refresh_recurring_transaction_controller;
use update_transaction::update_transaction_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/transactions", web::get().to(get_transactions_controller));
    cfg.route("/transactions", web::post().to(create_transaction_controller));
    cfg.route(
        "/transactions/user/{user_id}",
        web::get().to(get_transactions_by_user_controller),
    );
    cfg.route(
        "/transactions/{transaction_id}",
        web::get().to(get_transaction_controller),
    );
    cfg.route(
        "/transactions/{transaction_id}",
        web::patch().to(update_transaction_controller),
    );
    cfg.route(
        "/transactions/{transaction_id}",
        web::delete().to(delete_transaction_controller),
    );
    cfg.route(
        "/transactions/{transaction_id}/recurring",
        web::patch().to(refresh_recurring_transaction_controller),
    );
}
