//! # State Module
//!
//! Application state for the storefront shell.
//!
//! ## Why Separate State Types?
//! Each command takes only the state it needs:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │   Catalog    │  │  CartStore   │  │   ConfigState    │              │
//! │  │ (verdant-    │  │              │  │                  │              │
//! │  │  core)       │  │  CartState   │  │  store_name      │              │
//! │  │  read-only   │  │  &mut only   │  │  currency        │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  SINGLE WRITER:                                                        │
//! │  • CartStore is owned by the shell and borrowed mutably per command    │
//! │  • Catalog and ConfigState are read-only after startup                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod config;

pub use cart::{CartStore, CartTotals};
pub use config::ConfigState;
