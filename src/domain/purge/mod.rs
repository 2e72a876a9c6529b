// ============================================================================
// Purge Domain - Cache invalidation messages
// ============================================================================
//
// This module contains ALL purge-specific code:
// - Events (ProductChangedEvent, CmsPageEvent)
// - Commands (PurgeNextecomProductCommand, PurgeCmsPageCommand)
// - Message (the union the workflow accepts and emits)
// - Handlers (the functions registered with the workflow at startup)
//
// Dispatch itself lives in src/workflow/.
//
// ============================================================================

pub mod commands;
pub mod events;
pub mod handlers;
pub mod messages;

// Re-export for convenience
pub use commands::*;
pub use events::*;
pub use messages::*;
