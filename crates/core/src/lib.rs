//! Core domain types shared by the repository and API layers.
//!
//! This crate has no database or HTTP dependencies so both the `db` and
//! `api` crates (and any future CLI tooling) can depend on it.

pub mod error;
pub mod pagination;
pub mod types;
