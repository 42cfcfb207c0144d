pub mod buffer;
pub mod canvas;
pub mod confetti;
pub mod help;
pub mod layout;
pub mod notification;
pub mod renderer;
pub mod text;
pub mod widgets;

pub use buffer::{BufferWriter, DifferentialRenderer};
pub use canvas::{Canvas, Rect};
pub use renderer::render_screen;
