//! HTTP surface for the extraction workflow: a browser uploads a PDF,
//! reviews the extracted records, and downloads them as CSV. Everything
//! stateful lives upstream; each request here is an independent unit of
//! work.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod state;
pub mod upload;
