//! Candytrail board layout - tile sequences in 3D world space
//!
//! Sits on top of the `tiler` crate the way the renderer consumes it:
//! - [`types`] - Board tile records and special tile kinds
//! - [`layout`] - Footprint centering, height profile, special rolls
//! - [`instance`] - Flat GPU instance records for upload
//!
//! Mesh, material, and camera work belong to the renderer; nothing in
//! this crate touches the GPU.

pub mod instance;
pub mod layout;
pub mod types;

pub use instance::*;
pub use layout::*;
pub use types::*;
