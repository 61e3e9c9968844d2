use crate::handlers::offers;
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/offers")
            .route("", web::get().to(offers::get_open_offers))
            .route("/static/accept", web::post().to(offers::accept_static_offer))
            .route("/static/{name}", web::get().to(offers::get_static_offer_status)),
    );
}
