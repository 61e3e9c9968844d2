use crate::handlers::swaps;
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/swaps")
            .route("", web::post().to(swaps::create_swap_request))
            .route("", web::get().to(swaps::get_swap_requests))
            .route("/accepted", web::get().to(swaps::get_accepted_swaps))
            .route("/{id}", web::get().to(swaps::get_swap_request))
            .route("/{id}/accept", web::post().to(swaps::accept_swap)),
    );
}
