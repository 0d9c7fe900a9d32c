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
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
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

//! Procedural double-helix visualization core.
//!
//! Helica generates everything a host renderer needs to show an animated
//! DNA-style double helix: parametric strand curves, spline-smoothed tube
//! meshes, base-pair rungs with Watson-Crick nucleotide assignment, a
//! growth/idle animation state machine, and scroll-choreographed lighting.
//!
//! The crate is renderer-agnostic. Hosts upload [`geometry::TubeMesh`]
//! buffers once, then call into the animation and lighting layers every
//! frame with sampled inputs (frame delta, scroll progress, pointer
//! position) and apply the returned transform and light rig to their scene.
//!
//! # Key entry points
//!
//! - [`rig::HelixRig`] - owns geometry, animation state, and lighting for
//!   one helix; call [`rig::HelixRig::advance`] once per frame
//! - [`geometry::build_helix_geometry`] - strand curves plus base pairs
//!   from validated parameters
//! - [`geometry::build_tube_mesh`] - renderable tube mesh for one strand
//! - [`options::Options`] - runtime configuration with TOML preset support
//!
//! # Architecture
//!
//! Geometry is pure and deterministic (nucleotide assignment aside) and is
//! built once per configuration; the rig memoizes it behind a parameter
//! digest so per-frame work is limited to the animation state machine and
//! keyframe interpolation. Nothing in the crate reads globals: frame time,
//! scroll, and pointer state are explicit inputs.

pub mod animation;
pub mod error;
pub mod geometry;
pub mod lighting;
pub mod options;
pub mod rig;
pub mod util;
