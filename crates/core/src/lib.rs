//! Core library for photogrid
//!
//! This crate implements the **Functional Core** of the photogrid application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The photogrid project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`photogrid_core`** (this crate): Pure transformation functions with zero I/O
//! - **`photogrid`**: HTTP, file and stdio operations plus orchestration (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No network calls, no file access, no external state mutations
//! - **Deterministic**: Behavior is predictable and reproducible
//! - **Testable**: Can be tested with simple fixture data, no mocking required
//!
//! # Module Organization
//!
//! The pipeline stages live in one module each:
//!
//! - [`key`]: Reading the API key (and search term) from the page location
//! - [`search`]: Building the Pixabay search URL
//! - [`images`]: Reshaping raw API hits into simplified images
//! - [`markup`]: Rendering simplified images into HTML fragments
//! - [`page`]: Page layouts and splicing markup into an HTML document
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use photogrid_core::images::{get_images, SearchResponse};
//! use photogrid_core::markup::render_images;
//! use photogrid_core::page::Layout;
//!
//! let response: SearchResponse = serde_json::from_str(body)?;
//! let images = get_images(response.hits);
//! let markup = render_images(&images, Layout::Photos, false);
//! ```

pub mod images;
pub mod key;
pub mod markup;
pub mod page;
pub mod search;
