pub mod blob;
pub mod constants;
pub mod ecs;
pub mod logging;
pub mod reflect;
pub mod storage;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use inventory;
