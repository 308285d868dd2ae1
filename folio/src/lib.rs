//! # folio - Developer Profile Viewer
//!
//! folio browses a single developer profile served by a small HTTP API:
//! personal details, education, work history, skills and projects. Projects
//! can be narrowed to one skill, and a global search matches a query across
//! skills, projects, education and work.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────┐  KeyEvent   ┌──────────────┐  Request{seq}  ┌──────────────┐
//! │     TUI      │────────────▶│  ViewState   │───────────────▶│  Controller  │
//! │ (UI thread)  │◀────────────│  ::update()  │◀───────────────│ (tokio tasks)│
//! └──────────────┘   render    └──────────────┘  Msg::*Loaded  └──────┬───────┘
//!                                                                     │ HTTP GET
//!                                                                     ▼
//!                                                             ┌──────────────┐
//!                                                             │ Profile API  │
//!                                                             └──────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - [`state`]: The view state and its pure transition function. Stale
//!   responses are recognised by per-class sequence numbers and dropped.
//! - [`controller`]: Executes requests against a [`api::ProfileSource`] and
//!   turns outcomes into messages.
//! - [`api`]: The `ProfileSource` trait and its `reqwest` implementation.
//! - [`tui`]: Terminal UI (ratatui) plus the plain-text renderer used by
//!   headless mode.
//! - [`config`]: Base URL and timeout for the API client.
//! - [`cli`]: Command-line argument parsing.
//! - [`domain`]: Tabs, request classes, sequence numbers, error types.
//!
//! ## Operational Modes
//!
//! 1. **TUI Mode** (default): interactive viewer.
//! 2. **Headless Mode** (`--headless`): load, optionally filter or search,
//!    print one panel and exit.
//!
//! ```bash
//! folio --api-url http://localhost:5000
//! folio --headless --skill Rust --tab projects
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod controller;
pub mod domain;
pub mod state;
pub mod tui;
