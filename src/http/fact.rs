//! `/fact` request handler.
//!
//! Flow per request:
//! ```text
//! resolve context → handle span → presence gate → format gate
//!     → spawn: compute (fact span) → respond → log + count → span end
//! ```
//! Either gate failing short-circuits to: count 400, respond 400.
//! The spawned part runs to completion even when the client disconnects.

use std::net::SocketAddr;

use axum::extract::{ConnectInfo, Query, Request, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use tracing::Instrument;
use tracing_opentelemetry::OpenTelemetrySpanExt;

use crate::factorial::{factorial, parse_input};
use crate::http::request::{RequestId, RequestIdExt};
use crate::http::response::FactResponse;
use crate::http::server::AppState;
use crate::observability::tracing::extract_context;
use crate::observability::Outcome;

/// Per-request data used to enrich log lines and spans.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Peer address, when the server was started with connect info.
    pub client_addr: Option<SocketAddr>,
    /// `User-Agent` header, empty when absent.
    pub user_agent: String,
    pub request_id: RequestId,
}

impl RequestContext {
    pub fn from_request(request: &Request) -> Self {
        let client_addr = request
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| *addr);
        let user_agent = request
            .headers()
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_owned();
        let request_id = request
            .request_id()
            .cloned()
            .unwrap_or_else(|| RequestId::resolve(request.headers()));

        Self {
            client_addr,
            user_agent,
            request_id,
        }
    }

    fn client_ip(&self) -> String {
        self.client_addr.map(|a| a.to_string()).unwrap_or_default()
    }
}

/// First value of `key` in the query string. A malformed query counts as absent.
fn query_value(request: &Request, key: &str) -> Option<String> {
    let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(request.uri()).ok()?;
    pairs.into_iter().find(|(k, _)| k == key).map(|(_, v)| v)
}

/// `GET /fact?n=<integer>`
pub async fn fact_handler(State(state): State<AppState>, request: Request) -> Response {
    let ctx = RequestContext::from_request(&request);
    let raw_n = query_value(&request, "n");

    let span = tracing::info_span!("handle", request_id = %ctx.request_id);
    span.set_parent(extract_context(request.headers()));

    handle(state, ctx, raw_n).instrument(span).await
}

async fn handle(state: AppState, ctx: RequestContext, raw_n: Option<String>) -> Response {
    let n = match parse_input(raw_n.as_deref()) {
        Ok(n) => n,
        Err(err) => {
            tracing::debug!(request_id = %ctx.request_id, error = %err, "Rejected fact request");
            state.metrics.record_outcome(Outcome::BadRequest);
            return err.into_response();
        }
    };

    // The computation owns its own task: a client hanging up drops this
    // future but not the work, so the request is still logged and counted.
    let work = async move {
        let client_ip = ctx.client_ip();
        tracing::info!(
            client_ip = %client_ip,
            user_agent = %ctx.user_agent,
            request_id = %ctx.request_id,
            n,
            "calculating fact"
        );

        let result = factorial(n, state.step_delay).await;
        let response = Json(FactResponse { response: result }).into_response();

        tracing::info!(
            client_ip = %client_ip,
            user_agent = %ctx.user_agent,
            request_id = %ctx.request_id,
            n,
            "done calculating fact"
        );
        state.metrics.record_outcome(Outcome::Ok);

        response
    };

    match tokio::spawn(work.in_current_span()).await {
        Ok(response) => response,
        Err(err) => {
            tracing::error!(error = %err, "fact computation task failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
