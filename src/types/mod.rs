//! Shared types

pub mod dom;
