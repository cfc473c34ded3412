mod memory;

pub use memory::InMemoryDataCache;
