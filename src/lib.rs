// Library exports for the generator binary and tests
pub mod canvas;
pub mod config;
pub mod constants;
pub mod geometry;
pub mod knight;
pub mod output;
pub mod rasterizer;
pub mod style;

pub use canvas::Canvas;
pub use rasterizer::generate;
pub use style::StyleVariant;
