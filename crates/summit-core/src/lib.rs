//! # Summit Register Core
//!
//! Shared, I/O-free logic for Summit Register: hike models, the
//! read-only catalog snapshot, the multi-criteria filter engine, and the
//! typed column sort engine.
//!
//! This crate contains no tokio, sqlx, filesystem I/O, or terminal
//! output. The data source is reached only through the
//! [`HikeSource`](source::HikeSource) trait.

pub mod annotation;
pub mod catalog;
pub mod criteria;
pub mod display;
pub mod error;
pub mod filter;
pub mod models;
pub mod sort;
pub mod source;
