pub mod database;
#[cfg(any(test, feature = "test-utils"))]
pub mod in_memory;
pub mod redis;
pub mod repository;
