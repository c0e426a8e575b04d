// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Float comparison against exact endpoints (0.0, 1.0) is intentional here
#![allow(clippy::float_cmp)]
// Pedantic allowances
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::default_trait_access)]
#![allow(clippy::similar_names)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::use_self)]
#![allow(clippy::redundant_pub_crate)]
#![allow(clippy::too_many_arguments)]

//! Interactive vector-map zoom and selection engine.
//!
//! Mappa drives the core of a click-to-zoom map viewer: clicking a region
//! smoothly animates the viewport to that region's bounds and presents its
//! content in a side panel; clicking again (or the map background) zooms
//! back out. Rendering, hit testing, and styling stay with the host behind
//! the [`surface`] traits, so the engine runs identically under a real
//! vector surface or fully headless.
//!
//! # Key entry points
//!
//! - [`engine::MapEngine`] - the composition root; feed it input events
//!   and a per-frame tick
//! - [`animation::ViewportAnimator`] - the cancellable viewport animation
//!   driver
//! - [`catalog::RegionCatalog`] - the region content table
//! - [`options::Options`] - runtime configuration (zoom geometry,
//!   animation timing)
//!
//! # Architecture
//!
//! The host event loop forwards pointer events as
//! [`input::InputEvent`] values; the engine converts them into
//! [`engine::MapCommand`]s, resolves target viewports through the bounds
//! cache and the fit computation in [`view`], and hands transitions to the
//! animator. Each host frame calls [`engine::MapEngine::tick`], which
//! samples the in-flight animation and writes the viewport attribute to
//! the map surface — the only place that writes it.

pub mod animation;
pub mod catalog;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod input;
pub mod options;
pub mod panel;
pub mod surface;
pub mod util;
pub mod view;

pub use engine::{MapCommand, MapEngine};
pub use error::MappaError;
