//! Construction functions producing fully populated drawables.
//!
//! Builders are pure: they take world-space inputs and return a
//! [`PathShape`](crate::PathShape), a [`Composite`](crate::Composite) or a
//! small aggregate exposing points later steps need. Only
//! [`solids::cylinder_wireframe`] depends on the camera.

pub mod conics;
pub mod primitives;
pub mod solids;
pub mod strips;
pub mod surface_maps;

pub use conics::{EllipseSector, RadialSector, ellipse};
pub use primitives::{axes, quad, segment, segment_along, segment_between};
pub use solids::{cylinder_wireframe, hemisphere};
pub use strips::{axis_projector_segments, connector_segments, extreme_vertical_segments, joining_quads};
pub use surface_maps::{
    cylinder_point, cylinder_projection, cylinder_projection_with_sector, horizontal_plane_projection,
    spherical_projection, spherical_projection_clipped,
};
