//! Page generation modules for different view types
//!
//! This module organizes HTML page generators by page type (index,
//! reference, preview). Each page module handles its specific view logic
//! and utilizes shared components from the components module.

pub mod index;
pub mod preview;
pub mod reference;
