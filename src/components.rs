//! Reusable HTML components for page generation
//!
//! This module provides Maud component functions shared across the
//! generated reference pages, the page index and the admin preview.

pub mod layout;
pub mod nav;
