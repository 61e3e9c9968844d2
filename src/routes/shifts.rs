use crate::handlers::shifts;
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/shifts")
            .route("", web::get().to(shifts::get_shifts))
            .route("/months", web::get().to(shifts::get_tracked_months))
            .route("/today", web::get().to(shifts::get_today_shift))
            .route("/next", web::get().to(shifts::get_next_shift)),
    );
}
