pub mod basemap;
pub mod canvas;
pub mod geometry;
pub mod markers;
pub mod projection;

pub use basemap::BaseLayer;
pub use canvas::BrailleCanvas;
pub use projection::Viewport;
