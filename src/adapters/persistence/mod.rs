pub mod memory;
pub mod store_json;

pub use memory::MemoryStore;
pub use store_json::JsonStore;
