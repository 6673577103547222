pub mod clock;
pub mod constants;
pub mod curve;
pub mod error;
pub mod params;
pub mod render;
pub mod surface;

pub use clock::*;
pub use constants::*;
pub use curve::*;
pub use error::*;
pub use params::*;
pub use render::*;
pub use surface::*;
