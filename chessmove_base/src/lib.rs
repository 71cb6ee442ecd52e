//! # Base types for chessmove
//!
//! This is an auxiliary crate for `chessmove`, which contains the leaf value types: colors,
//! piece kinds and identities, coordinates and the directions pieces move along.
//!
//! Normally you don't want to use this crate directly. Use `chessmove` instead.

pub mod coord;
pub mod geometry;
pub mod types;
