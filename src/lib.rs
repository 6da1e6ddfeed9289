pub mod cli;
pub mod config;
pub mod core;
pub mod input;
pub mod logging;
pub mod terminal;
pub mod ui;

pub use crate::core::action_bindings;
pub use crate::core::app;
pub use crate::core::controller;
pub use crate::core::event;
pub use crate::core::event_queue;
pub use crate::core::form_engine;
pub use crate::core::form_state;
pub use crate::core::reducer;
pub use crate::core::state;
pub use crate::core::validation;

pub use crate::input::select_input;
pub use crate::input::text_input;
pub use crate::input::validators;

pub use crate::terminal::terminal_event;

pub use crate::ui::frame;
pub use crate::ui::renderer;
pub use crate::ui::span;
pub use crate::ui::style;
pub use crate::ui::theme;
