pub mod memory;

pub use memory::MemoryCatalog;
