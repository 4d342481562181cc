#[macro_use]
extern crate tracing;

pub mod camera;
pub mod errors;
pub mod geometry;
pub mod light;
pub mod logging;
pub mod march;
pub mod math;
pub mod parsing;
pub mod profile;
pub mod renderer;
pub mod scene;
pub mod sdf;
pub mod shading;
#[cfg(feature = "preview")]
pub mod window;

pub mod prelude;

pub use errors::RenderError;
