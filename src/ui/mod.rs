pub mod render;
pub mod text;

pub use render::Renderer;
