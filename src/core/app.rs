use crate::core::action_bindings::ActionBindings;
use crate::core::controller::RegistrationForm;
use crate::core::event::Action;
use crate::core::event_queue::{AppEvent, EventQueue};
use crate::core::reducer::{Effect, Reducer};
use crate::core::state::AppState;
use crate::terminal::{KeyEvent, Terminal};
use crate::ui::pipeline::RenderPipeline;
use crate::ui::renderer::Renderer;
use crate::ui::theme::Theme;
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, info};

pub const DEFAULT_NOTICE_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Debug, Clone)]
pub struct AppOptions {
    pub title: String,
    pub notice_timeout: Duration,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            title: "Student Registration Form".to_string(),
            notice_timeout: DEFAULT_NOTICE_TIMEOUT,
        }
    }
}

pub struct App {
    pub state: AppState,
    pub pipeline: RenderPipeline,
    options: AppOptions,
    action_bindings: ActionBindings,
    event_queue: EventQueue,
    theme: Theme,
}

impl App {
    pub fn new(form: RegistrationForm, options: AppOptions) -> Self {
        Self {
            state: AppState::new(form),
            pipeline: RenderPipeline::new(),
            options,
            action_bindings: ActionBindings::new(),
            event_queue: EventQueue::new(),
            theme: Theme::default_theme(),
        }
    }

    /// Processes every event that is ready now. Returns whether anything ran.
    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> bool {
        let mut processed_any = false;
        while let Some(event) = self.event_queue.next_ready(now) {
            self.dispatch_event(event);
            processed_any = true;
        }
        processed_any
    }

    pub fn render(&mut self, terminal: &mut Terminal) -> io::Result<()> {
        let frame = Renderer::new(&self.theme, &self.options.title).render(&self.state);
        self.pipeline.draw(terminal, &frame)
    }

    pub fn handle_key(&mut self, key_event: KeyEvent) {
        self.event_queue.emit(AppEvent::Key(key_event));
    }

    pub fn should_exit(&self) -> bool {
        self.state.should_exit
    }

    fn dispatch_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key_event) => {
                let captured = self
                    .state
                    .engine
                    .focused_caps()
                    .map(|caps| caps.captures_key(key_event.code, key_event.modifiers))
                    .unwrap_or(false);

                let action = if captured {
                    Action::InputKey(key_event)
                } else {
                    self.action_bindings
                        .handle_key(&key_event)
                        .unwrap_or(Action::InputKey(key_event))
                };
                self.reduce(action);
            }
            AppEvent::Action(action) => self.reduce(action),
            AppEvent::FieldChanged { field, value } => {
                debug!(%field, len = value.chars().count(), "field changed");
            }
            AppEvent::FocusChanged { from, to } => {
                debug!(?from, ?to, "focus changed");
            }
            AppEvent::Submitted => info!("registration accepted"),
            AppEvent::Rejected { failing } => info!(failing, "registration rejected"),
        }
    }

    fn reduce(&mut self, action: Action) {
        let effects = Reducer::reduce(&mut self.state, action, self.options.notice_timeout);
        self.apply_effects(effects);
    }

    fn apply_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Emit(event) => self.event_queue.emit(event),
                Effect::EmitAfter(event, delay) => self.event_queue.emit_after(event, delay),
                Effect::CancelClearNotice => self.event_queue.cancel_clear_notice(),
            }
        }
    }
}
