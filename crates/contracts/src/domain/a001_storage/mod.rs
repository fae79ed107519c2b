pub mod aggregate;

pub use aggregate::{Storage, StorageId, StorageSummary};
