// ============================================================================
// Workflow - Message dispatch
// ============================================================================
//
// Structure:
// - command_handler / event_handler - one registry per message category
// - workflow    - uniform entry point over both registries
// - router      - renders produced messages as text
// - application - dispatch → render → write, one message per call
//
// ============================================================================

mod application;
mod command_handler;
mod errors;
mod event_handler;
mod router;
#[allow(clippy::module_inception)]
mod workflow;

pub use application::Application;
pub use command_handler::CommandHandler;
pub use event_handler::EventHandler;
pub use router::route;
pub use workflow::Workflow;
