//! Run the HTTP API server

use bountyboard::context::AppContext;

use crate::server::tiny_http;

/// Serve the API with the configured worker pool
pub fn serve(ctx: AppContext) -> anyhow::Result<()> {
    println!("Serving bountyboard on http://{}", ctx.config.bind_addr());
    println!("Press Ctrl+C to stop");
    tiny_http::serve(ctx)
}
