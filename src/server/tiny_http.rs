//! tiny_http server adapter
//!
//! Handles routing, body parsing, and response conversion for tiny_http.
//! A fixed pool of worker threads shares one listener.

use std::io::{Cursor, Read as _};
use std::sync::Arc;
use std::thread;

use log::{error, info};
use serde::{Serialize, de::DeserializeOwned};
use tiny_http::{Header, Method, Request, Response, Server, StatusCode};

use bountyboard::api::{
    self, AddTeamRequest, ApiError, ApiResponse, SetScoreRequest, StartTimerRequest,
    SubmitRequest, UpdateTeamRequest,
};
use bountyboard::context::AppContext;

/// Header carrying the admin password
const ADMIN_TOKEN_HEADER: &str = "X-Admin-Token";

// =============================================================================
// SERVER LOOP
// =============================================================================

/// Serve the API until the listener fails
pub fn serve(ctx: AppContext) -> anyhow::Result<()> {
    let addr = ctx.config.bind_addr();
    let workers = ctx.config.server.workers.max(1);
    let server =
        Arc::new(Server::http(&addr).map_err(|e| anyhow::anyhow!("Failed to start server: {e}"))?);
    let ctx = Arc::new(ctx);

    info!("Listening on http://{addr} with {workers} worker(s)");

    let handles: Vec<_> = (0..workers)
        .map(|_| {
            let server = Arc::clone(&server);
            let ctx = Arc::clone(&ctx);
            thread::spawn(move || worker(&server, &ctx))
        })
        .collect();

    for handle in handles {
        if handle.join().is_err() {
            error!("Worker thread panicked");
        }
    }
    Ok(())
}

fn worker(server: &Server, ctx: &AppContext) {
    loop {
        let mut request = match server.recv() {
            Ok(request) => request,
            Err(e) => {
                error!("Listener failed: {e}");
                return;
            },
        };
        let response = handle_api_request(ctx, &mut request);
        if let Err(e) = request.respond(response) {
            error!("Failed to send response: {e}");
        }
    }
}

// =============================================================================
// REQUEST HANDLING
// =============================================================================

/// Handle an API request and return a response
///
/// This is the main routing function that maps URL paths to handlers.
pub fn handle_api_request(ctx: &AppContext, request: &mut Request) -> Response<Cursor<Vec<u8>>> {
    let url = request.url().to_string();
    let path = url.split('?').next().unwrap_or("");
    let method = request.method().clone();

    // Supports both /api/v1/... (versioned) and /api/...
    let Some(api_path) = path.strip_prefix("/api/v1").or_else(|| path.strip_prefix("/api")) else {
        return not_found_response(&format!("Not found: {method} {path}"));
    };

    if api_path.starts_with("/admin/") {
        let token = header_value(request, ADMIN_TOKEN_HEADER);
        if let Err(e) = api::require_admin(ctx, token.as_deref()) {
            return error_response(&e);
        }
    }

    match (&method, api_path) {
        // Public endpoints
        (&Method::Get, "/sites") => handle_result(api::list_sites(ctx)),
        (&Method::Get, "/leaderboard") => handle_result(api::get_leaderboard(ctx)),
        (&Method::Get, "/timer") => handle_result(api::get_timer(ctx)),
        (&Method::Post, "/submissions") => match read_json_body::<SubmitRequest>(request) {
            Ok(req) => handle_result(api::submit(ctx, &req)),
            Err(e) => error_response(&e),
        },

        // Site detail: GET /sites/{id}
        _ if method == Method::Get && api_path.starts_with("/sites/") => {
            match api_path.strip_prefix("/sites/").and_then(|id| id.parse().ok()) {
                Some(id) => handle_result(api::get_site_catalog(ctx, id)),
                None => error_response(&ApiError::bad_request("Site id must be a number")),
            }
        },

        // Timer control
        (&Method::Post, "/admin/timer/start") => {
            match read_json_body::<StartTimerRequest>(request) {
                Ok(req) => handle_result(api::start_timer(ctx, &req)),
                Err(e) => error_response(&e),
            }
        },
        (&Method::Post, "/admin/timer/stop") => handle_result(api::stop_timer(ctx)),
        (&Method::Post, "/admin/timer/reset") => handle_result(api::reset_timer(ctx)),

        // Scores
        (&Method::Delete, "/admin/scores") => handle_result(api::reset_scores(ctx)),
        _ if method == Method::Patch && api_path.starts_with("/admin/scores/") => {
            let team = path_param(api_path, "/admin/scores/");
            match read_json_body::<SetScoreRequest>(request) {
                Ok(req) => handle_result(api::set_score(ctx, &team, &req)),
                Err(e) => error_response(&e),
            }
        },

        // Roster
        (&Method::Get, "/admin/teams") => handle_result(api::list_teams(ctx)),
        (&Method::Post, "/admin/teams") => match read_json_body::<AddTeamRequest>(request) {
            Ok(req) => handle_result(api::add_team(ctx, &req)),
            Err(e) => error_response(&e),
        },
        (&Method::Post, "/admin/teams/import") => match read_text_body(request) {
            Ok(body) => handle_result(api::import_teams(ctx, &body)),
            Err(e) => error_response(&e),
        },
        _ if method == Method::Patch && api_path.starts_with("/admin/teams/") => {
            let name = path_param(api_path, "/admin/teams/");
            match read_json_body::<UpdateTeamRequest>(request) {
                Ok(req) => handle_result(api::update_team(ctx, &name, &req)),
                Err(e) => error_response(&e),
            }
        },
        _ if method == Method::Delete && api_path.starts_with("/admin/teams/") => {
            let name = path_param(api_path, "/admin/teams/");
            handle_result(api::delete_team(ctx, &name))
        },

        // 404 for unknown API routes
        _ => not_found_response(&format!("API endpoint not found: {method} {api_path}")),
    }
}

fn header_value(request: &Request, name: &'static str) -> Option<String> {
    request
        .headers()
        .iter()
        .find(|h| h.field.equiv(name))
        .map(|h| h.value.as_str().to_string())
}

/// Decoded trailing path segment after `prefix`
fn path_param(api_path: &str, prefix: &str) -> String {
    percent_decode(api_path.strip_prefix(prefix).unwrap_or(""))
}

/// Decode `%XX` escapes; malformed escapes are kept literally
fn percent_decode(segment: &str) -> String {
    let bytes = segment.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%'
            && let Some(hex) = segment.get(i + 1..i + 3)
            && hex.bytes().all(|b| b.is_ascii_hexdigit())
            && let Ok(byte) = u8::from_str_radix(hex, 16)
        {
            out.push(byte);
            i += 3;
            continue;
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

// =============================================================================
// BODY PARSING
// =============================================================================

/// Read the raw request body
fn read_text_body(request: &mut Request) -> Result<String, ApiError> {
    let mut body = String::new();
    request
        .as_reader()
        .read_to_string(&mut body)
        .map_err(|e| ApiError::bad_request(format!("Failed to read request body: {e}")))?;
    Ok(body)
}

/// Read and parse JSON body from request
fn read_json_body<T: DeserializeOwned>(request: &mut Request) -> Result<T, ApiError> {
    let body = read_text_body(request)?;
    serde_json::from_str(&body).map_err(|e| ApiError::bad_request(format!("Invalid JSON: {e}")))
}

// =============================================================================
// RESPONSE CONVERSION
// =============================================================================

/// Convert a handler result to an HTTP response
fn handle_result<T: Serialize>(result: Result<T, ApiError>) -> Response<Cursor<Vec<u8>>> {
    match result {
        Ok(data) => success_response(data),
        Err(e) => error_response(&e),
    }
}

/// Create a successful JSON response
fn success_response<T: Serialize>(data: T) -> Response<Cursor<Vec<u8>>> {
    let response = ApiResponse::success(data);
    json_response(&response, 200)
}

/// Create an error JSON response with appropriate status code
fn error_response(error: &ApiError) -> Response<Cursor<Vec<u8>>> {
    let response = ApiResponse::<()>::error(error.code.as_str(), &error.message);
    json_response(&response, error.status_code())
}

/// Create a 404 not found response
fn not_found_response(message: &str) -> Response<Cursor<Vec<u8>>> {
    let response = ApiResponse::<()>::error("NOT_FOUND", message);
    json_response(&response, 404)
}

/// Serialize data to JSON response with status code
fn json_response<T: Serialize>(data: &T, status: u16) -> Response<Cursor<Vec<u8>>> {
    let json = serde_json::to_string(data).unwrap_or_else(|_| r#"{"success":false}"#.to_string());
    let response = Response::from_data(json.into_bytes()).with_status_code(StatusCode(status));
    match Header::from_bytes("Content-Type", "application/json") {
        Ok(header) => response.with_header(header),
        Err(()) => response,
    }
}
