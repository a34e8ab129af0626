pub mod analyze;
pub mod build;
pub mod config;
pub mod normalize;
pub mod prepare;
