//! Core library for dexview
//!
//! This crate implements the **Functional Core** of the dexview application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The dexview project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`dexview_core`** (this crate): Pure transformation functions with zero I/O
//! - **`dexview`**: HTTP fetching, terminal output and orchestration (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no external state mutations
//! - **Deterministic**: Behavior is predictable and reproducible
//! - **Testable**: Can be tested with simple fixture data, no mocking required
//!
//! # Module Organization
//!
//! The core crate is organized by concern:
//!
//! - [`pokemon`]: PokeAPI response models and the card summary transformation
//! - [`card`]: HTML fragment rendering for cards and picker options
//! - [`page`]: The in-memory page model and the render target capability
//! - [`filter`]: Substring search over rendered cards
//!
//! Each module contains:
//!
//! - **Domain models**: Structured types representing API responses and outputs
//! - **Transformation functions**: Pure functions that convert API data to domain models
//! - **Comprehensive tests**: Unit tests using fixture data (no mocking)
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use dexview_core::pokemon::{summarize, PokemonDetail};
//! use dexview_core::card::render_card;
//!
//! // Create fixture data (no HTTP required)
//! let detail: PokemonDetail = serde_json::from_str(fixture)?;
//!
//! // Transform using pure functions
//! let summary = summarize(&detail);
//! let html = render_card(&summary);
//!
//! // Assert on results (no mocking needed)
//! assert!(html.contains(&summary.title));
//! ```
//!
//! # Pattern Reference
//!
//! This architecture is based on Gary Bernhardt's Functional Core, Imperative Shell pattern.
//! The key insight: **data transformation logic should be pure and ignorant of where data
//! comes from or where it goes**.

pub mod card;
pub mod filter;
pub mod page;
pub mod pokemon;
