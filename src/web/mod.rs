// ============================================================================
// Web Host - HTTP surface of the host process
// ============================================================================
//
// Routes:
// - GET /        static greeting
// - GET /health  liveness
// - GET /metrics Prometheus scrape endpoint
//
// Nothing here touches message dispatch.
// ============================================================================

mod server;

pub use server::start_server;
