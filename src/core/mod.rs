pub mod config;
pub mod diacritics;
