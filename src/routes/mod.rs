pub mod admin;
pub mod events;
pub mod public;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(public::configure)
        .configure(admin::configure)
        .configure(events::configure);
}
