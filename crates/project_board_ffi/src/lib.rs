//! FFI bridge exposing the project board to a native UI shell.

pub mod api;
