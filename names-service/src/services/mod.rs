pub mod memory;
pub mod metrics;
pub mod mongo;
pub mod store;

pub use memory::InMemoryNameStore;
pub use metrics::{get_metrics, init_metrics, record_store_operation};
pub use mongo::{MongoNameStore, NAMES_COLLECTION};
pub use store::{NameStore, StoreError};
