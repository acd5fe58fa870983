/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures (data.rs)
/// - The request lifecycle of an upload (upload.rs)

pub mod data;
pub mod upload;
