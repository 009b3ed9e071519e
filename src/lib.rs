pub mod config;
pub mod controllers;
pub mod error;
pub mod generation;
pub mod models;
pub mod parsing;
pub mod session;
pub mod storage;
