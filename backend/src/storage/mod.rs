//! # Storage Module
//!
//! Holds the data the portal screens read and mutate. All state lives for the
//! lifetime of the process; nothing is written to disk.
//!
//! The domain layer only sees the traits in [`traits`]; [`memory`] is the
//! in-memory implementation seeded with the sample catalogue and statements.

pub mod memory;
pub mod traits;

pub use memory::MemoryConnection;
pub use traits::{ArticleStorage, Connection, StatementStorage};
