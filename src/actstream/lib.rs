//! # actstream Architecture
//!
//! actstream is a **UI-agnostic activity-stream library**: the CLI binary is
//! one client of it, not the other way around. The host social platform is
//! an external collaborator reached only through a narrow trait.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, renders output, owns exit codes        │
//! │  - The ONLY place that knows about stdout/stderr            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Generic over Platform backend and Rng source             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per verb, pure logic, Result<CmdResult>       │
//! │  - create/generate lean on the completion engine            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Engine + Catalog (engine.rs, catalog.rs)                   │
//! │  - Fills blank request fields per activity type             │
//! │  - Uniform selection over the fixed component catalog       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Platform Layer (platform/)                                 │
//! │  - Abstract Platform trait                                  │
//! │  - JsonPlatform (production), MemoryPlatform (testing)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular arguments, returns
//! `Result<CmdResult>`, and never touches stdout/stderr or
//! `std::process::exit`. Randomness is injected (`rand::Rng`), so tests run
//! on seeded sequences while the binary draws from OS entropy.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: One module per CLI verb
//! - [`engine`]: Default-completion of partially specified requests
//! - [`catalog`]: The component/type catalog and random selection
//! - [`platform`]: Host-platform trait and its backends
//! - [`model`]: Core data types (`Activity`, `ActivityRequest`)
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod engine;
pub mod error;
pub mod model;
pub mod platform;
