//! # Core Application Logic
//!
//! This module contains LyricLingo's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                   ┌────────────┴────────────┐
//!                   ▼                         ▼
//!            ┌────────────┐            ┌────────────┐
//!            │    TUI     │            │    API     │
//!            │  Adapter   │            │  (lyrics   │
//!            │ (ratatui)  │            │  service)  │
//!            └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all session state in one place
//! - [`action`]: The `Action` enum and `update()` reducer
//! - [`navigation`]: which screen is mounted, and what it carries
//! - [`catalog`], [`lyrics`], [`cards`], [`quiz`], [`summary`]: per-screen domain logic
//! - [`config`]: settings resolution

pub mod action;
pub mod cards;
pub mod catalog;
pub mod config;
pub mod lyrics;
pub mod navigation;
pub mod quiz;
pub mod screen;
pub mod state;
pub mod summary;
