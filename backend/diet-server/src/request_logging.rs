use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

/// Logs `[METHOD] path -> status (Nms)` for every request.
///
/// Headers are never logged, so session cookies stay out of the log.
pub async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(req).await;

    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis();
    if status.is_server_error() {
        log::error!("[{}] {} -> {} ({}ms)", method, path, status.as_u16(), elapsed_ms);
    } else {
        log::info!("[{}] {} -> {} ({}ms)", method, path, status.as_u16(), elapsed_ms);
    }

    response
}
