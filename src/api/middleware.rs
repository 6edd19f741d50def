use actix_web::{Error, body::MessageBody, dev::{ServiceRequest, ServiceResponse}, middleware::Next};
use tracing::info;

/**
 * Middleware logging one line per request with method, path, status and
 * elapsed time. Failed handlers are logged as status 500.
 */
pub async fn request_log_middleware(
    request: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let started = std::time::Instant::now();
    let method = request.method().to_owned();
    let path = request.path().to_owned();
    let response = next.call(request).await;
    let status = response.as_ref().map_or(500, |service_response| service_response.status().as_u16());
    info!(target: "request", %method, path, status, elapsed_ms = started.elapsed().as_millis() as u64, "request handled");
    response
}
