//! # Userdesk Architecture
//!
//! Userdesk is a **UI-agnostic user-record administration library**. The
//! interactive terminal panel is just one client of it; the same core could
//! sit behind a web form or a test harness without changing a line.
//!
//! ## The Layered Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses arguments, runs the panel loop, renders tables    │
//! │  - Holds the edit form and the id input                     │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - DeskApi: the panel state (chosen store + page cursor)    │
//! │  - Keeps cursor and record set consistent across mutations  │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per panel operation, pure business logic      │
//! │  - Validation runs here, before the store is touched        │
//! │  - Returns typed CmdResult values, never prints             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract UserStore trait                                 │
//! │  - LocalStore over a blob backend (files or memory)         │
//! │  - RemoteStore over a REST endpoint                         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular arguments, returns regular
//! `Result<CmdResult>` values, and never writes to stdout or assumes a
//! terminal. The single deliberate exception is the blocking confirmation
//! prompt on the destructive delete path, which mirrors how the panel is
//! actually operated.
//!
//! ## Testing Strategy
//!
//! 1. **Commands**: unit tested against `InMemoryStore`; this is where the
//!    lion's share of testing lives.
//! 2. **Stores**: `LocalStore` logic is tested through the in-memory
//!    backend; the filesystem backend has its own integration tests.
//! 3. **CLI**: end-to-end tests script the panel over stdin with a temp
//!    data directory.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade and panel state
//! - [`commands`]: Business logic for each panel operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`User`, `UserData`, `Company`)
//! - [`page`]: The pagination cursor
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod page;
pub mod store;
