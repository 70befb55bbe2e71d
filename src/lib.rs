pub mod config;
pub mod error;
pub mod geometry;
pub mod matcher;
pub mod scorer;
pub mod session;
pub mod trial;
// cmd and reports belong to the binary (see main.rs).
