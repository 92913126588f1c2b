//! Geometric conversion between editor space and tracer space
//!
//! The modules here are the core of the bridge:
//! - [`coords`] - the fixed change of basis, implemented exactly once
//! - [`camera`] - look-at camera conversion in both directions
//! - [`encode`] - editor transforms to tracer primitives
//! - [`decode`] - tracer primitives back to editor transforms

pub mod camera;
pub mod coords;
pub mod decode;
pub mod encode;
