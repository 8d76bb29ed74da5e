//! Store implementations for the two persistence sinks.

pub mod memory;
pub mod mongo;
pub mod unconfigured;

#[cfg(feature = "postgres")]
pub mod supabase;

pub use memory::MemoryStore;
pub use mongo::{MongoConfig, MongoStore};
pub use unconfigured::UnconfiguredStore;

#[cfg(feature = "postgres")]
pub use supabase::SupabaseStore;
