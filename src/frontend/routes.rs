use super::client::MessageSource;
use super::page;
use super::view::{MessageView, ViewState};
use crate::fairings::{request_span_for, TracingSpan};
use rocket::response::content::RawHtml;
use rocket::response::Redirect;
use rocket::serde::json::Json;
use rocket::{Catcher, Request, Route, State};
use std::sync::Arc;
use tracing::Instrument;

/// Managed state of the frontend process: one view and where it loads from.
pub struct Frontend {
    pub view: MessageView,
    pub source: Arc<dyn MessageSource>,
}

impl Frontend {
    pub fn new(source: Arc<dyn MessageSource>) -> Self {
        Self {
            view: MessageView::new(),
            source,
        }
    }
}

#[get("/")]
pub async fn index(frontend: &State<Frontend>, span: TracingSpan) -> RawHtml<String> {
    async move {
        if frontend.view.mount(frontend.source.as_ref()).await {
            tracing::info!("view mounted");
        }
        RawHtml(page::render(&frontend.view.snapshot()))
    }
    .instrument(span.0)
    .await
}

/// Refetches, then redirects to `/`.
#[post("/refresh")]
pub async fn refresh(frontend: &State<Frontend>, span: TracingSpan) -> Redirect {
    async move {
        tracing::info!("refresh requested");
        if !frontend.view.refresh(frontend.source.as_ref()).await {
            tracing::info!("refresh superseded by a newer one");
        }
        Redirect::to(uri!(index))
    }
    .instrument(span.0)
    .await
}

#[get("/view")]
pub fn view_state(frontend: &State<Frontend>) -> Json<ViewState> {
    Json(frontend.view.snapshot())
}

#[catch(404)]
pub fn not_found(req: &Request<'_>) -> RawHtml<String> {
    let span = request_span_for(req);
    span.in_scope(|| tracing::warn!("page not found"));

    RawHtml(page::render_not_found(&req.uri().path().to_string()))
}

pub fn routes() -> Vec<Route> {
    rocket::routes![index, refresh, view_state]
}

pub fn catchers() -> Vec<Catcher> {
    rocket::catchers![not_found]
}
