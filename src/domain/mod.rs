// ============================================================================
// Domain Layer - Message types and handler functions
// ============================================================================
//
// Each area has its own subdirectory with:
// - Events
// - Commands
// - Message union
// - Handler functions
//
// This layer knows nothing about dispatch; see src/workflow/.
//
// ============================================================================

pub mod purge;
