pub mod frame;
pub mod pipeline;
pub mod renderer;
pub mod span;
pub mod style;
pub mod theme;
