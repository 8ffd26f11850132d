//! Core building blocks: the recursive factor engine. These are internal
//! primitives consumed by the high-level `api` module.
pub mod engine;
