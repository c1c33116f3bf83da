use crate::config::BackendConfig;
use crate::{catchers, fairings, routes};
use rocket::fairing::AdHoc;
use rocket::http::Method;
use rocket_cors::{AllowedHeaders, AllowedOrigins, CorsOptions};
use std::collections::HashSet;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(routes::health::get_health, routes::message::get_message),
    components(),
    tags(
        (name = "Health", description = "Liveness endpoint"),
        (name = "Message", description = "Greeting endpoint"),
    ),
    info(
        title = "echo_service backend",
        version = "0.1.0",
        description = "Stateless JSON API consumed by the echo_service frontend",
    )
)]
pub struct ApiDoc;

fn configure_cors() -> CorsOptions {
    let allowed_methods = [Method::Get, Method::Options]
        .into_iter()
        .map(From::from)
        .collect();

    CorsOptions {
        allowed_origins: AllowedOrigins::all(),
        allowed_methods,
        allowed_headers: AllowedHeaders::all(),
        allow_credentials: false,
        expose_headers: HashSet::from([fairings::REQUEST_ID_HEADER.to_string()]),
        ..Default::default()
    }
}

pub fn rocket(
    config: &BackendConfig,
) -> Result<rocket::Rocket<rocket::Build>, rocket_cors::Error> {
    let cors = configure_cors().to_cors()?;

    let rocket_config = rocket::Config {
        address: config.address,
        port: config.port,
        log_level: rocket::config::LogLevel::Normal,
        ..rocket::Config::default()
    };

    Ok(rocket::custom(rocket_config)
        .mount("/", routes::health::routes())
        .mount("/api", routes::message::routes())
        .mount(
            "/",
            SwaggerUi::new("/swagger/<tail..>").url("/api-doc/openapi.json", ApiDoc::openapi()),
        )
        .register("/", catchers::catchers())
        .attach(fairings::RequestLogger::new("backend"))
        .attach(cors)
        .attach(AdHoc::on_liftoff("Startup Line", |rocket| {
            let port = rocket.config().port;
            Box::pin(async move {
                tracing::info!("backend API running on port {port}");
            })
        })))
}
