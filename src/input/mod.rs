pub mod input;
pub mod select_input;
pub mod text_input;
pub mod validators;

pub use input::{Input, InputBase, InputCaps, KeyResult};
