use crate::handlers::notifications;
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/me", web::get().to(notifications::get_current_user))
        .route(
            "/notifications",
            web::get().to(notifications::get_notifications),
        );
}
