//! # userbase-auth
//!
//! The authentication core: JWT issuance and verification, and argon2id
//! password hashing. Both are pure functions of their configuration, their
//! inputs, and the clock — no shared mutable state.

pub mod jwt;
pub mod password;

pub use jwt::{Claims, TokenDecoder, TokenEncoder};
pub use password::PasswordHasher;
