//! Provider Tests
//!
//! Providers booted through a real application against a temporary home
//! directory, then driven through command dispatch.

mod discovery_tests;
