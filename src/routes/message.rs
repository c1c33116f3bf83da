use crate::fairings::TracingSpan;
use crate::types::message::MessageResponse;
use rocket::serde::json::Json;
use rocket::Route;

#[utoipa::path(
    get,
    path = "/api/message",
    tag = "Message",
    responses(
        (status = 200, description = "Greeting stamped with the current time", body = MessageResponse),
    )
)]
#[get("/message")]
pub async fn get_message(span: TracingSpan) -> Json<MessageResponse> {
    let body = MessageResponse::now();
    span.0
        .in_scope(|| tracing::debug!(timestamp = %body.timestamp, "message issued"));
    Json(body)
}

pub fn routes() -> Vec<Route> {
    rocket::routes![get_message]
}
