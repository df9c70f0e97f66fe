//! Shared helpers for skat-engine unit and integration tests.

pub mod logging;
