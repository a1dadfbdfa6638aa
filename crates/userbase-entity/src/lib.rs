//! # userbase-entity
//!
//! Domain entity models for Userbase: the user record and its role enum.

pub mod user;

pub use user::{User, UserRole};
