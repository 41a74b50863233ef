//! Trackplan Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Trackplan
//! extraction pipeline, the marker text parser and the diagram layout engine.
//! It includes:
//!
//! - **Fragments**: Positioned text as delivered by a document text layer ([`fragment`] module)
//! - **Markers**: Kilometre-position records with side and icon ([`marker`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Scene**: Technology-agnostic drawing primitives ([`scene`] module)

pub mod color;
pub mod fragment;
pub mod geometry;
pub mod marker;
pub mod scene;
