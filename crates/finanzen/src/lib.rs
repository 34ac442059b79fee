#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/finanzen-rs/finanzen/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Stock data from finanzen.net.
//!
//! This crate re-exports the core types and the finanzen.net provider, and
//! provides the [`Finanzen`] client which accepts the same loosely typed input
//! a caller would type (stock page names, exchange codes, `"dict"` or
//! `"dataframe"`) and validates it before any request is made.
//!
//! # Features
//!
//! - `net` (default) - finanzen.net provider and [`Finanzen::new`]

// Core types and traits
pub use finanzen_core::*;

// Providers
#[cfg(feature = "net")]
pub use finanzen_net::{FinanzenNetProvider, PageKind};

mod client;
pub use client::Finanzen;
