//! Concurrency Tests
//!
//! Verifies thread-safe operation of the Strand generation facade.
//!
//! ## Test Categories
//!
//! - **Parallel Generation**: No shared state between simultaneous requests
//! - **Self-Test Latch**: The power-up gate is safe under racing first calls
//! - **Output Independence**: Concurrent callers never observe each other's bytes

pub mod parallel_generate;

#[cfg(test)]
mod tests {
    #[test]
    fn concurrency_modules_load() {
        // Ensures all concurrency test modules compile correctly
    }
}
