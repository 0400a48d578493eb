//! # cdinv Architecture
//!
//! cdinv is a small CD inventory kept in memory and persisted as one binary
//! snapshot file. The library holds all of the behavior; the binary is an
//! interactive menu client on top of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu loop, prompts, confirmations, inventory rendering   │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the Inventory and the SnapshotStore                 │
//! │  - Startup bootstrap of a missing snapshot file             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add / delete / list / load / save                        │
//! │  - Returns `CmdResult` with messages, never prints          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - SnapshotStore trait                                      │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes plain arguments, returns `Result<CmdResult>`
//! and never writes to the console. Rejected user input (a bad ID on add, an
//! unknown ID on delete) is reported as a message inside the result, not as an
//! error. Errors are reserved for persistence failures.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each menu operation
//! - [`store`]: Snapshot storage abstraction and implementations
//! - [`model`]: `Record` and `Inventory`
//! - [`config`]: Optional `cdinv.json` configuration
//! - [`logging`]: `tracing` subscriber setup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod store;
