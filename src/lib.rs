//! Indoor localization from WiFi Channel State Information.
//!
//! Layers, outermost first:
//!
//! - `cli`         — clap argument parsing and result printing
//! - `application` — the end-to-end pipeline use case
//! - `domain`      — CSI samples, locations, errors, traits
//! - `data`        — synthetic source, feature extractors, splitter
//! - `ml`          — CART trees, random forest, location classifier
//! - `infra`       — metrics and the JSON run report

pub mod cli;
pub mod application;
pub mod domain;
pub mod data;
pub mod ml;
pub mod infra;
