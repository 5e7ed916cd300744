pub mod http_cache;
pub mod inflight;
pub mod types;

// Re-export cache types
pub use types::*;
// Re-export response cache functions
pub use http_cache::*;
// Re-export in-flight request coalescing
pub use inflight::*;
