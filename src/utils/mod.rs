//! Utility modules for common functionality
//!
//! This module provides various utility functions and types used throughout the application.

pub mod logger;
pub mod angle_utils;
pub mod coordinate_utils;

pub use angle_utils::{degrees_to_radians, radians_to_degrees};
