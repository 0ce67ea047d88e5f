//! Utility functions for shortcode generation, input validation, and store errors.
//!
//! - [`validation`] - Shortcode and URL shape checks
//! - [`code_generator`] - Random shortcode generation
//! - [`db_error`] - Classification of PostgreSQL error codes

pub mod code_generator;
pub mod db_error;
pub mod validation;
