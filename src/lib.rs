//! chromaprofile — perceptual color profile extraction for desktop
//! theme generation.
//!
//! Given a raster image, produces a compact, theme-ready color profile:
//! a small ordered set of perceptually distinct representative colors,
//! each annotated with perceptual characteristics, plus an overall mode
//! (light/dark) and grayscale classification. This is the input stage
//! of a theme generator; mapping the profile to semantic UI roles and
//! rendering config files is a downstream concern this crate does not
//! cover.
//!
//! Pipeline, leaves first: a [`pixel_source::PixelSource`] feeds the
//! frequency accumulator ([`frequency`]), which feeds the weighted
//! color set ([`weighted`]), which feeds the perceptual clusterer
//! ([`cluster`]), which feeds the characteristic annotator
//! ([`annotate`]), which feeds the theme-suitability filter
//! ([`filter`]), which feeds the profile classifier ([`classify`]).
//! [`color`] is used throughout; [`settings::Settings`] is injected at
//! construction and never mutated during processing.

pub mod annotate;
pub mod classify;
pub mod cluster;
pub mod color;
pub mod error;
pub mod filter;
pub mod frequency;
pub mod pipeline;
pub mod pixel_source;
pub mod settings;
pub mod weighted;

pub use annotate::{ClusterFlags, ColorCluster};
pub use classify::Mode;
pub use color::{HSLA, RGBA};
pub use error::ProfileError;
pub use pipeline::{build_profile, ColorProfile, Profiler};
pub use pixel_source::{ImagePixelSource, PixelSource, RgbaBuffer};
pub use settings::Settings;
pub use weighted::WeightedColor;
