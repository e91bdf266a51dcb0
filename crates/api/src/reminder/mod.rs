mod create_reminder;
mod delete_reminder;
mod get_reminder;
mod get_reminders;
mod get_reminders_by_transaction;
mod get_reminders_by_user;
mod get_reminders_by_user_and_status;
mod update_reminder;

use actix_web::web;
use create_reminder::create_reminder_controller;
use delete_reminder::delete_reminder_controller;
use get_reminder::get_reminder_controller;
use get_reminders::get_reminders_controller;
use get_reminders_by_transaction::get_reminders_by_transaction_controller;
use get_reminders_by_user::get_reminders_by_user_controller;
use get_reminders_by_user_and_status::get_reminders_by_user_and_status_controller;
use update_reminder::update_reminder_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/reminders", web::get().to(get_reminders_controller));
    cfg.route("/reminders", web::post().to(create_reminder_controller));
    cfg.route(
        "/reminders/transaction/{transaction_id}",
        web::get().to(get_reminders_by_transaction_controller),
    );
    cfg.route(
        "/reminders/user/{user_id}",
        web::get().to(get_reminders_by_user_controller),
    );
    cfg.route(
        "/reminders/user/{user_id}/status",
        web::get().to(get_reminders_by_user_and_status_controller),
    );
    cfg.route(
        "/reminders/{reminder_id}",
        web::get().to(get_reminder_controller),
    );
    cfg.route(
        "/reminders/{reminder_id}",
        web::patch().to(update_reminder_controller),
    );
    cfg.route(
        "/reminders/{reminder_id}",
        web::delete().to(delete_reminder_controller),
    );
}
