//! Per-client rate limiting for credential-bearing routes.
//!
//! Every request on these routes runs an Argon2 verification, so the limit
//! is what keeps password guessing and hash-cost exhaustion in check.
//!
//! Clients are keyed by the peer address of the connection. `X-Forwarded-For`
//! and `X-Real-IP` are read only when the server sits behind a proxy that
//! sets them (`[server] trust_proxy_headers`); otherwise a client could pick
//! a fresh key for every request.

use axum::{
    body::Body,
    extract::ConnectInfo,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};
use std::{net::SocketAddr, num::NonZeroU32, sync::Arc, time::Duration};

use crate::web::error::ApiError;

/// How often idle client entries are dropped.
const CLEANUP_INTERVAL: Duration = Duration::from_secs(300);

/// Keyed limiter state, one bucket per client IP.
pub struct RateLimitState {
    limiter: DefaultKeyedRateLimiter<String>,
    requests_per_minute: u32,
    trust_proxy_headers: bool,
}

impl RateLimitState {
    /// Create a limiter allowing `requests_per_minute` per client.
    ///
    /// With `trust_proxy_headers` the client is taken from the forwarding
    /// headers before the peer address.
    pub fn new(requests_per_minute: u32, trust_proxy_headers: bool) -> Self {
        let quota =
            Quota::per_minute(NonZeroU32::new(requests_per_minute).unwrap_or(NonZeroU32::MIN));
        Self {
            limiter: RateLimiter::keyed(quota),
            requests_per_minute,
            trust_proxy_headers,
        }
    }

    /// Configured requests per minute.
    pub fn requests_per_minute(&self) -> u32 {
        self.requests_per_minute
    }

    /// Whether forwarding headers identify the client.
    pub fn trusts_proxy_headers(&self) -> bool {
        self.trust_proxy_headers
    }

    /// Check if a request from `ip` is allowed, consuming one cell if so.
    pub fn check(&self, ip: &str) -> bool {
        self.limiter.check_key(&ip.to_string()).is_ok()
    }

    /// Forget clients whose buckets have fully refilled.
    pub fn cleanup(&self) {
        self.limiter.retain_recent();
        self.limiter.shrink_to_fit();
    }

    /// Start a background task to periodically clean up old entries.
    pub fn start_cleanup_task(self: Arc<Self>) {
        tokio::spawn(async move {
            loop {
                tokio::time::sleep(CLEANUP_INTERVAL).await;
                self.cleanup();
            }
        });
    }
}

/// Extract client IP from request.
fn get_client_ip(req: &Request<Body>, trust_proxy_headers: bool) -> String {
    if trust_proxy_headers {
        if let Some(ip) = forwarded_ip(req) {
            return ip;
        }
    }

    if let Some(ConnectInfo(addr)) = req.extensions().get::<ConnectInfo<SocketAddr>>() {
        return addr.ip().to_string();
    }

    "unknown".to_string()
}

fn forwarded_ip(req: &Request<Body>) -> Option<String> {
    if let Some(forwarded) = req
        .headers()
        .get("X-Forwarded-For")
        .and_then(|v| v.to_str().ok())
    {
        // First hop is the original client
        if let Some(ip) = forwarded.split(',').next().map(str::trim) {
            if !ip.is_empty() {
                return Some(ip.to_string());
            }
        }
    }

    req.headers()
        .get("X-Real-IP")
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
        .map(str::to_string)
}

/// Rate limiting middleware for credential-bearing routes.
pub async fn credential_rate_limit(
    state: Arc<RateLimitState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let ip = get_client_ip(&req, state.trusts_proxy_headers());

    if !state.check(&ip) {
        tracing::warn!(ip = %ip, path = %req.uri().path(), "Credential rate limit exceeded");
        return ApiError::too_many_requests("Too many requests. Please try again later.")
            .into_response();
    }

    next.run(req).await
}
