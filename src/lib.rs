// src/lib.rs

//! Stack Exchange API documentation mapper library

pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod storage;
pub mod utils;
