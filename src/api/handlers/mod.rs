//! HTTP request handlers for API endpoints.
//!
//! This module contains all request handlers organized by resource type.

pub mod baked_goods;
pub mod bakeries;
pub mod health;
pub mod home;
