//! Core translation engine module

pub mod chunking;
pub mod client;
pub mod config;
pub mod email;
pub mod errors;
pub mod models;
pub mod request;
