//! geodata-cli
//! ===========
//!
//! Command-line interface for the `geodata-core` reference-data query engine.
//!
//! This crate primarily provides a binary (`geodata-cli`). The library target
//! only exists so that docs.rs renders this overview.
//!
//! Quick start
//! -----------
//!
//! ```text
//! cargo install geodata-cli
//! geodata-cli --help
//! geodata-cli stats
//! geodata-cli country US
//! geodata-cli states US --query cali
//! geodata-cli cities san --country US
//! geodata-cli --json currencies
//! geodata-cli --input ./data snapshot geodata.bin.gz
//! ```
//!
//! For programmatic access use the [`geodata_core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
