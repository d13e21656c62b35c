//! Semmap Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Semmap crates.
//! It includes:
//!
//! - **Geometry**: Positions in diagram space ([`geometry::Point`])
//! - **Document**: An owned, order-preserving SVG element tree ([`document`] module)
//! - **Category**: The closed set of node categories keyed by fill color ([`category::Category`])
//! - **Semantic**: Shapes, labels and assembled map nodes ([`semantic`] module)

pub mod category;
pub mod document;
pub mod geometry;
pub mod semantic;
