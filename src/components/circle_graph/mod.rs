mod component;
mod config;
mod layout;
mod render;
mod surface;

pub use component::CircleGraphCanvas;
pub use config::RenderConfig;
pub use layout::{BoundingBox, CircularLayout, Point, circle_points};
pub use render::{arrowhead, render};
pub use surface::{CanvasSurface, Surface, TextAnchor, context_2d};
