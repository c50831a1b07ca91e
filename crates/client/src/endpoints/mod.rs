//! Keystone API endpoint implementations.

mod tokens;

pub use tokens::{IssuedToken, SUBJECT_TOKEN_HEADER, issue_token};
