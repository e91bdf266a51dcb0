mod create_account;
mod delete_account;
mod get_account;
mod get_account_by_number;
mod get_accounts;
mod get_accounts_by_user;
mod transfer;
mod update_account;

use actix_web::web;
use create_account::create_account_controller;
use delete_account::delete_account_controller;
use get_account::get_account_controller;
use get_account_by_number::get_account_by_number_controller;
use get_accounts::get_accounts_controller;
use get_accounts_by_user::get_accounts_by_user_controller;
use transfer::transfer_controller;
use update_account::update_account_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/accounts", web::get().to(get_accounts_controller));
    cfg.route("/accounts", web::post().to(create_account_controller));
    cfg.route("/accounts/transfer", web::post().to(transfer_controller));
    cfg.route(
        "/accounts/user/{user_id}",
        web::get().to(get_accounts_by_user_controller),
    );
    cfg.route(
        "/accounts/number/{number}",
        web::get().to(get_account_by_number_controller),
    );
    cfg.route(
        "/accounts/{account_id}",
        web::get().to(get_account_controller),
    );
    cfg.route(
        "/accounts/{account_id}",
        web::put().to(update_account_controller),
    );
    cfg.route(
        "/accounts/{account_id}",
        web::delete().to(delete_account_controller),
    );
}
