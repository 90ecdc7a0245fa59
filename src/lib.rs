//! streampack — upload-to-streaming packaging service.
//!
//! Accepts a video upload over HTTP, runs it through an external ffmpeg
//! process to produce HLS, AES-128 encrypted HLS, or MPEG-DASH output, and
//! serves the packaged result from the processed tree.

pub mod app;
pub mod common;
pub mod config;
pub mod docs;
pub mod infrastructure;
pub mod modules;
pub mod routes;
pub mod state;
