pub mod aggregate;
pub mod config;
pub mod dataset;
pub mod error;
pub mod selection;
pub mod views;
// cmd and reports belong to the binary (main.rs) and are exercised through it.
