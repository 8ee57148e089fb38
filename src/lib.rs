//! # Summit Register
//!
//! A local catalog of hiking trails: browse, filter, sort and annotate
//! hikes stored in SQLite.
//!
//! The algorithmic core (catalog snapshot, filter engine, typed sort
//! engine, display mapping) lives in [`summit_core`]. This crate adds the
//! surrounding application: configuration, the SQLite data source, and
//! the `summit` command-line front end.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐   load once   ┌──────────┐   filter / sort   ┌──────────┐
//! │  SQLite  │──────────────▶│ Catalog  │──────────────────▶│   CLI    │
//! │  hikes   │ SqliteSource  │ snapshot │   summit-core     │ (summit) │
//! └──────────┘               └──────────┘                   └──────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! summit init                              # create database
//! summit import hikes.json                 # seed the catalog
//! summit search --distance le:8 --difficulty moderate --sort distance
//! summit list --completed
//! summit show "Mount Si"
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`db`] | Database connection |
//! | [`migrate`] | Schema migrations |
//! | [`sqlite_source`] | SQLite hike source and catalog loading |
//! | [`import`] / [`export`] | JSON seed and dump |
//! | [`search`] | Multi-criteria search command |
//! | [`list`] | All-hikes and completed-hikes views |
//! | [`get`] | Hike detail view |
//! | [`annotate`] | Notes/completion edit stub |
//! | [`stats`] | Catalog summary |

pub mod annotate;
pub mod config;
pub mod db;
pub mod export;
pub mod get;
pub mod import;
pub mod list;
pub mod logging;
pub mod migrate;
pub mod render;
pub mod search;
pub mod sqlite_source;
pub mod stats;
