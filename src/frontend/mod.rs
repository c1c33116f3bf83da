pub mod client;
pub mod page;
pub mod routes;
pub mod view;

use crate::config::FrontendConfig;
use crate::fairings::RequestLogger;
use client::{HttpMessageSource, MessageSource};
use rocket::fairing::AdHoc;
use routes::Frontend;
use std::sync::Arc;

pub fn rocket(config: &FrontendConfig) -> rocket::Rocket<rocket::Build> {
    let source = HttpMessageSource::new(&config.api_url);
    tracing::info!(endpoint = %source.endpoint(), "frontend will fetch from backend");
    rocket_with_source(config, Arc::new(source))
}

pub fn rocket_with_source(
    config: &FrontendConfig,
    source: Arc<dyn MessageSource>,
) -> rocket::Rocket<rocket::Build> {
    let rocket_config = rocket::Config {
        address: config.address,
        port: config.port,
        log_level: rocket::config::LogLevel::Normal,
        ..rocket::Config::default()
    };

    rocket::custom(rocket_config)
        .manage(Frontend::new(source))
        .mount("/", routes::routes())
        .register("/", routes::catchers())
        .attach(RequestLogger::new("frontend"))
        .attach(AdHoc::on_liftoff("Startup Line", |rocket| {
            let port = rocket.config().port;
            Box::pin(async move {
                tracing::info!("frontend running on port {port}");
            })
        }))
}
