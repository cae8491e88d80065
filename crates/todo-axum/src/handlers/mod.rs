//! HTTP request handlers.

pub mod todos;
