pub use rayon::prelude::*;

pub use crate::camera::Camera;
pub use crate::errors::RenderError;
pub use crate::geometry::{Capsule, Cuboid, Plane, Primitive, Sphere};
pub use crate::light::Light;
pub use crate::march::{march, MarchResult, MarchSettings, Termination};
pub use crate::math::*;
pub use crate::profile::Profile;
pub use crate::renderer::{
    intensity_to_channel, output_film, rgb_to_u32, FrameRenderer, RenderMode, RenderSettings,
    Vec2D,
};
pub use crate::scene::Scene;
pub use crate::sdf::SDF;
pub use crate::shading::{shade, ShadingSettings};

#[cfg(feature = "preview")]
pub use crate::window::window_loop;
