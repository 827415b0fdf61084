//! hkaddr-cli
//! ==========
//!
//! Command-line interface for the `hkaddr-core` address consolidator.
//!
//! This crate primarily provides a binary (`hkaddr`). The library target
//! exists so that docs.rs renders this overview.
//!
//! ```text
//! hkaddr --help
//! hkaddr <INPUT_FOLDER> <OUTPUT_JSON>
//! ```
//!
//! For programmatic access use [`hkaddr-core`] directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
