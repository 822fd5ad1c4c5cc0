//! Parallel Generation Tests
//!
//! Ensures byte generation is safe when called from multiple threads
//! simultaneously, including the racing-first-call case where several
//! threads trigger the power-up self-tests at once.
