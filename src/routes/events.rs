use crate::handlers::events;
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/events", web::get().to(events::get_events))
        .route("/activity", web::get().to(events::get_activity));
}
