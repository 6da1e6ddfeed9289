use crate::core::FieldId;
use crate::core::form_event::FormEvent;
use crate::core::form_state::{AbroadInterest, Country, FormState, FormVariant};
use crate::input::select_input::SelectInput;
use crate::input::text_input::TextInput;
use crate::input::{Input, InputCaps, KeyResult};
use crate::terminal::KeyEvent;

/// Owns the input widgets of one form and the focus among the visible ones.
pub struct FormEngine {
    inputs: Vec<Box<dyn Input>>,
    visible: Vec<FieldId>,
    focus_index: Option<usize>,
}

#[derive(Debug, Default)]
pub struct EngineOutput {
    pub handled: bool,
    pub events: Vec<FormEvent>,
}

impl FormEngine {
    pub fn new(variant: FormVariant, visible: Vec<FieldId>) -> Self {
        let inputs = variant.fields().iter().copied().map(build_input).collect();
        Self::from_inputs(inputs, visible)
    }

    pub fn from_inputs(inputs: Vec<Box<dyn Input>>, visible: Vec<FieldId>) -> Self {
        let mut engine = Self {
            inputs,
            visible,
            focus_index: None,
        };
        if !engine.visible.is_empty() {
            engine.set_focus_internal(Some(0));
        }
        engine
    }

    pub fn visible(&self) -> &[FieldId] {
        &self.visible
    }

    pub fn focus_index(&self) -> Option<usize> {
        self.focus_index
    }

    pub fn focused_id(&self) -> Option<FieldId> {
        self.focus_index.and_then(|i| self.visible.get(i).copied())
    }

    pub fn input(&self, field: FieldId) -> Option<&dyn Input> {
        self.inputs
            .iter()
            .find(|input| input.id() == field)
            .map(|input| input.as_ref())
    }

    fn input_mut(&mut self, field: FieldId) -> Option<&mut Box<dyn Input>> {
        self.inputs.iter_mut().find(|input| input.id() == field)
    }

    pub fn focused_caps(&self) -> Option<InputCaps> {
        self.focused_id()
            .and_then(|id| self.input(id))
            .map(|input| input.capabilities())
    }

    pub fn is_last_focused(&self) -> bool {
        match self.focus_index {
            Some(idx) => idx + 1 == self.visible.len(),
            None => true,
        }
    }

    pub fn move_focus(&mut self, direction: isize) -> Vec<FormEvent> {
        if self.visible.is_empty() {
            return vec![];
        }

        let current = self.focus_index.unwrap_or(0);
        let len = self.visible.len() as isize;
        let next = ((current as isize + direction).rem_euclid(len)) as usize;

        let mut events = Vec::new();
        self.set_focus(Some(next), &mut events);
        events
    }

    pub fn advance_focus(&mut self, events: &mut Vec<FormEvent>) -> bool {
        let Some(current) = self.focus_index else {
            return false;
        };

        let next = current + 1;
        if next < self.visible.len() {
            self.set_focus(Some(next), events);
            true
        } else {
            false
        }
    }

    pub fn focus_field(&mut self, field: FieldId, events: &mut Vec<FormEvent>) {
        if let Some(idx) = self.visible.iter().position(|id| *id == field) {
            self.set_focus(Some(idx), events);
        }
    }

    pub fn set_focus(&mut self, new_index: Option<usize>, events: &mut Vec<FormEvent>) {
        let from = self.focused_id();
        let to = new_index.and_then(|i| self.visible.get(i).copied());

        if from == to {
            return;
        }

        self.set_focus_internal(new_index);
        events.push(FormEvent::FocusChanged { from, to });
    }

    /// Replaces the list of visible fields, keeping focus on the same field
    /// when it is still shown and on the nearest earlier one otherwise.
    pub fn sync_visible(&mut self, visible: Vec<FieldId>, events: &mut Vec<FormEvent>) {
        if visible == self.visible {
            return;
        }

        let from = self.focused_id();
        let old_index = self.focus_index;
        self.visible = visible;

        let new_index = match from {
            Some(id) => self
                .visible
                .iter()
                .position(|v| *v == id)
                .or_else(|| old_index.map(|i| i.min(self.visible.len()).saturating_sub(1))),
            None => None,
        };
        let new_index = new_index.filter(|_| !self.visible.is_empty());

        self.set_focus_internal(new_index);
        let to = self.focused_id();
        if from != to {
            events.push(FormEvent::FocusChanged { from, to });
        }
    }

    /// Copies controller values into inputs that disagree with them.
    pub fn sync_values(&mut self, state: &FormState) {
        for input in &mut self.inputs {
            let value = state.value(input.id());
            if input.value() != value {
                input.set_value(&value);
            }
        }
    }

    pub fn clear_inputs(&mut self) {
        for input in &mut self.inputs {
            input.clear();
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> EngineOutput {
        self.update_focused_input(|input| input.handle_key(key.code, key.modifiers))
    }

    pub fn handle_delete_word(&mut self, forward: bool) -> EngineOutput {
        self.update_focused_input(|input| {
            if forward {
                input.delete_word_forward();
            } else {
                input.delete_word();
            }
            KeyResult::Handled
        })
    }

    pub fn inputs(&self) -> impl Iterator<Item = &dyn Input> {
        self.inputs.iter().map(|input| input.as_ref())
    }

    fn set_focus_internal(&mut self, new_index: Option<usize>) {
        if let Some(id) = self.focused_id() {
            if let Some(input) = self.input_mut(id) {
                input.set_focused(false);
            }
        }

        self.focus_index = new_index;

        if let Some(id) = self.focused_id() {
            if let Some(input) = self.input_mut(id) {
                input.set_focused(true);
            }
        }
    }

    fn update_focused_input<F>(&mut self, update: F) -> EngineOutput
    where
        F: FnOnce(&mut dyn Input) -> KeyResult,
    {
        let Some(id) = self.focused_id() else {
            return EngineOutput::default();
        };

        let Some(input) = self.input_mut(id) else {
            return EngineOutput::default();
        };

        let before = input.value();
        let result = update(input.as_mut());
        let after = input.value();

        let mut output = EngineOutput {
            handled: result != KeyResult::NotHandled,
            events: Vec::new(),
        };

        if before != after {
            output.events.push(FormEvent::InputChanged {
                field: id,
                value: after,
            });
        }

        if result == KeyResult::Submit {
            output.events.push(FormEvent::SubmitRequested);
        }

        output
    }
}

fn build_input(field: FieldId) -> Box<dyn Input> {
    match field {
        FieldId::Name => Box::new(TextInput::new(field, field.label()).with_placeholder("Full Name")),
        FieldId::Email => {
            Box::new(TextInput::new(field, field.label()).with_placeholder("Email Address"))
        }
        FieldId::Phone => {
            Box::new(TextInput::new(field, field.label()).with_placeholder("Phone Number"))
        }
        FieldId::AbroadInterest => Box::new(
            SelectInput::new(
                field,
                field.label(),
                AbroadInterest::ALL.map(AbroadInterest::as_str),
            )
            .with_placeholder("Select an option"),
        ),
        FieldId::Country => Box::new(
            SelectInput::new(field, field.label(), Country::ALL.map(Country::as_str))
                .with_placeholder("Select a country"),
        ),
        FieldId::EventName => {
            Box::new(TextInput::new(field, field.label()).with_placeholder("Event Name"))
        }
    }
}
