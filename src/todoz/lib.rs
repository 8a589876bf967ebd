//! # Todoz Architecture
//!
//! Todoz is a **UI-agnostic to-do list library**: a single-user list of
//! tasks persisted to a local key-value store. The `todoz` binary is one
//! client of it; a browser page, a TUI or a test harness could drive the
//! same core.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Client (cli/, wired by main.rs)                            │
//! │  - Parses arguments, prints views and messages              │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API / Render-Sync Bridge (api.rs)                          │
//! │  - Owns the store and the current filter mode               │
//! │  - Returns view + remaining count after every call          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs) and Todo Store (todos.rs)         │
//! │  - Record invariants, id generation, error policy           │
//! │  - Write-through persistence on every mutation              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Persistence (persist.rs) over Storage (storage/)           │
//! │  - JSON array under one key                                 │
//! │  - FileStorage (production), InMemoryStorage (testing)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes plain Rust values and returns
//! `Result<CmdResult>`. It never prints, never exits, and never panics on
//! expected conditions: blank input and unknown ids come back as messages,
//! a rejected write keeps the in-memory change and comes back as an error
//! message, corrupted stored data opens as an empty list.
//!
//! ## Module Overview
//!
//! - [`api`]: facade and render/sync bridge
//! - [`commands`]: one module per user intent, plus `CmdResult`
//! - [`todos`]: the authoritative [`todos::TodoStore`]
//! - [`view`]: filter projection and remaining count
//! - [`persist`]: collection (de)serialization under a storage key
//! - [`storage`]: key-value backends
//! - [`ids`]: unique, monotonic id generation
//! - [`model`]: `Todo`, `TodoId`, `FilterMode`
//! - [`config`]: `config.json` handling
//! - [`error`]: error type

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod ids;
pub mod model;
pub mod persist;
pub mod storage;
pub mod todos;
pub mod view;
