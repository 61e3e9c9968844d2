use crate::handlers::stats;
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/stats").route("/dashboard", web::get().to(stats::get_dashboard_stats)),
    );
}
