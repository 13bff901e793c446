use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Instant;

use http::{Request, Response};
use tower::{Layer, Service};
use tracing::{info, warn};

/// Tower layer that logs each gRPC call with its status and duration.
#[derive(Clone, Copy)]
pub struct GrpcLoggingLayer;

impl<S> Layer<S> for GrpcLoggingLayer {
    type Service = GrpcLoggingService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        GrpcLoggingService { inner }
    }
}

#[derive(Clone)]
pub struct GrpcLoggingService<S> {
    inner: S,
}

/// Split `/package.Service/Method` into `(service, method)`.
pub fn split_grpc_path(path: &str) -> (String, String) {
    let mut parts = path.trim_start_matches('/').splitn(2, '/');
    let service = parts.next().filter(|s| !s.is_empty()).unwrap_or("unknown");
    let method = parts.next().filter(|s| !s.is_empty()).unwrap_or("unknown");
    (service.to_string(), method.to_string())
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for GrpcLoggingService<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>> + Clone + Send + 'static,
    S::Future: Send,
    ReqBody: Send + 'static,
    ResBody: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
        let start = Instant::now();
        let (service, method) = split_grpc_path(req.uri().path());

        info!(
            grpc.service = %service,
            grpc.method = %method,
            "gRPC request started"
        );

        let mut inner = self.inner.clone();
        Box::pin(async move {
            let result = inner.call(req).await;
            let duration_ms = start.elapsed().as_millis();

            match &result {
                Ok(response) => {
                    let status = response
                        .headers()
                        .get("grpc-status")
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("0");
                    if status == "0" {
                        info!(
                            grpc.service = %service,
                            grpc.method = %method,
                            grpc.status = %status,
                            duration_ms = %duration_ms,
                            "gRPC request completed"
                        );
                    } else {
                        warn!(
                            grpc.service = %service,
                            grpc.method = %method,
                            grpc.status = %status,
                            duration_ms = %duration_ms,
                            "gRPC request completed with error status"
                        );
                    }
                }
                Err(_) => {
                    warn!(
                        grpc.service = %service,
                        grpc.method = %method,
                        duration_ms = %duration_ms,
                        "gRPC request failed"
                    );
                }
            }

            result
        })
    }
}
