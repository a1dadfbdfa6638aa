//! Request-processing middleware helpers.

pub mod rbac;
