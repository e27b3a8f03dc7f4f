//! DI Layer Tests
//!
//! - Binding registration, shadowing and strategies
//! - Slot injection through `make`

mod container_tests;
