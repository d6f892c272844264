//! # Host Bridge Traits
//!
//! Capability traits that the catalog core consumes but does not implement.
//!
//! ## Overview
//!
//! This crate defines the contract between the catalog core and the host
//! environment. The core only ever talks to these traits, so storage and
//! randomness can be swapped for in-memory or deterministic doubles in tests.
//!
//! ## Traits
//!
//! - [`FileSystemAccess`](storage::FileSystemAccess) - Whole-file byte I/O
//!   used by the catalog store
//! - [`RandomSource`](random::RandomSource) - Uniform index selection used by
//!   the random retrieval strategies
//!
//! ## Implementations
//!
//! | Host    | Implementation Crate | Status |
//! |---------|----------------------|--------|
//! | Desktop | `bridge-desktop`     | ✅ Done |
//!
//! ## Error Handling
//!
//! All bridge traits use the [`BridgeError`](error::BridgeError) type.
//! Implementations should convert host-specific errors to `BridgeError` and
//! keep the original context (file paths, OS error) in the message.
//!
//! ## Thread Safety
//!
//! All bridge traits require `Send + Sync` so that handles can be shared as
//! `Arc<dyn Trait>` across async tasks.

pub mod error;
pub mod random;
pub mod storage;

pub use error::BridgeError;

// Re-export commonly used types
pub use random::{FixedRandomSource, RandomSource};
pub use storage::FileSystemAccess;
