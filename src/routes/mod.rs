use actix_web::web;

pub mod events;
pub mod offers;
pub mod profile;
pub mod shifts;
pub mod stats;
pub mod swaps;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(profile::configure)
            .configure(shifts::configure)
            .configure(swaps::configure)
            .configure(offers::configure)
            .configure(stats::configure)
            .configure(events::configure),
    );
}
