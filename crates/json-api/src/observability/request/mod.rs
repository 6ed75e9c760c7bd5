//! Request-level logging and request IDs.

mod request_ids;

use std::time::{Duration, Instant};

use salvo::{
    Request, handler,
    prelude::{Depot, FlowCtrl, Response},
};
use tracing::{Instrument as _, Span, error, info, warn};

/// Wraps each request in an `http.request` span, tags the response with its request id and
/// logs the outcome. Error responses and requests slower than the threshold are logged as
/// warnings (4xx) or errors (5xx).
#[derive(Debug, Clone, Copy)]
pub(crate) struct RequestLogging {
    slow_request_threshold: Duration,
}

impl RequestLogging {
    #[must_use]
    pub(crate) fn new(slow_request_threshold: Duration) -> Self {
        Self {
            slow_request_threshold,
        }
    }
}

impl Default for RequestLogging {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

#[handler]
impl RequestLogging {
    async fn handle(
        &self,
        req: &mut Request,
        depot: &mut Depot,
        res: &mut Response,
        ctrl: &mut FlowCtrl,
    ) {
        let started = Instant::now();

        let request_id =
            request_ids::resolve_request_id(req.header::<String>(request_ids::REQUEST_ID_HEADER));

        request_ids::set_request_id_header(res, &request_id);

        let method = req.method().to_string();
        let path = req.uri().path().to_owned();

        let span = tracing::info_span!(
            parent: None,
            "http.request",
            request_id = %request_id,
            method = %method,
            path = %path,
            remote_addr = %req.remote_addr(),
            status = tracing::field::Empty,
            duration_ms = tracing::field::Empty
        );

        ctrl.call_next(req, depot, res)
            .instrument(span.clone())
            .await;

        let elapsed = started.elapsed();
        let status = request_ids::response_status_or_ok(res.status_code).as_u16();

        self.log_completed(&span, status, elapsed);
    }
}

impl RequestLogging {
    fn log_completed(&self, span: &Span, status: u16, elapsed: Duration) {
        let duration_ms = elapsed.as_millis();

        span.record("status", status);
        span.record("duration_ms", duration_ms);

        span.in_scope(|| {
            info!(status, duration_ms, "request.completed");

            if status >= 500 {
                error!(status, "server error response");
            } else if status >= 400 {
                warn!(status, "client error response");
            }

            if elapsed > self.slow_request_threshold {
                warn!(
                    duration_ms,
                    threshold_ms = self.slow_request_threshold.as_millis(),
                    "slow request detected"
                );
            }
        });
    }
}
