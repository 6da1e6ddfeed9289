use crate::core::controller::SubmitOutcome;
use crate::core::event::Action;
use crate::core::event_queue::AppEvent;
use crate::core::form_engine::EngineOutput;
use crate::core::form_event::FormEvent;
use crate::core::state::AppState;
use std::time::Duration;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Emit(AppEvent),
    EmitAfter(AppEvent, Duration),
    CancelClearNotice,
}

pub struct Reducer;

impl Reducer {
    pub fn reduce(state: &mut AppState, action: Action, notice_timeout: Duration) -> Vec<Effect> {
        match action {
            Action::Exit => {
                state.should_exit = true;
                vec![]
            }
            Action::NextInput => {
                let events = state.engine.move_focus(1);
                Self::form_events_to_effects(events)
            }
            Action::PrevInput => {
                let events = state.engine.move_focus(-1);
                Self::form_events_to_effects(events)
            }
            Action::Submit => Self::handle_submit(state, notice_timeout),
            Action::DeleteWord => {
                let output = state.engine.handle_delete_word(false);
                Self::reduce_engine_output(state, output, notice_timeout)
            }
            Action::DeleteWordForward => {
                let output = state.engine.handle_delete_word(true);
                Self::reduce_engine_output(state, output, notice_timeout)
            }
            Action::InputKey(key_event) => {
                let output = state.engine.handle_key(key_event);
                Self::reduce_engine_output(state, output, notice_timeout)
            }
            Action::ClearNotice => {
                state.notice = None;
                vec![]
            }
        }
    }

    fn form_events_to_effects(events: Vec<FormEvent>) -> Vec<Effect> {
        events
            .into_iter()
            .filter_map(|event| match event {
                FormEvent::InputChanged { field, value } => {
                    Some(Effect::Emit(AppEvent::FieldChanged { field, value }))
                }
                FormEvent::FocusChanged { from, to } => {
                    Some(Effect::Emit(AppEvent::FocusChanged { from, to }))
                }
                FormEvent::SubmitRequested => None,
            })
            .collect()
    }

    fn reduce_engine_output(
        state: &mut AppState,
        output: EngineOutput,
        notice_timeout: Duration,
    ) -> Vec<Effect> {
        let mut submit_requested = false;

        for event in &output.events {
            match event {
                FormEvent::InputChanged { field, value } => {
                    if let Err(err) = state.form.set_field(*field, value) {
                        warn!(%err, "input for a field outside the form");
                    }
                }
                FormEvent::SubmitRequested => submit_requested = true,
                FormEvent::FocusChanged { .. } => {}
            }
        }

        let mut events = output.events;
        Self::sync_engine(state, &mut events);
        let mut effects = Self::form_events_to_effects(events);

        if submit_requested {
            let mut focus_events = Vec::new();
            if !state.engine.is_last_focused() && state.engine.advance_focus(&mut focus_events) {
                effects.extend(Self::form_events_to_effects(focus_events));
            } else {
                effects.extend(Self::handle_submit(state, notice_timeout));
            }
        }

        effects
    }

    /// Brings inputs and the focus list in line with the controller, which
    /// may have cleared or hidden a field as a side effect of an edit.
    fn sync_engine(state: &mut AppState, events: &mut Vec<FormEvent>) {
        state.engine.sync_values(state.form.state());
        state
            .engine
            .sync_visible(state.form.visible_fields(), events);
    }

    fn handle_submit(state: &mut AppState, notice_timeout: Duration) -> Vec<Effect> {
        let outcome = state.form.submit();
        let mut effects = vec![Effect::CancelClearNotice];
        let mut focus_events = Vec::new();

        match &outcome {
            SubmitOutcome::Rejected { errors, .. } => {
                if let Some(first) = state
                    .engine
                    .visible()
                    .iter()
                    .copied()
                    .find(|field| errors.get(*field).is_some())
                {
                    state.engine.focus_field(first, &mut focus_events);
                }
                effects.push(Effect::Emit(AppEvent::Rejected {
                    failing: errors.len(),
                }));
            }
            SubmitOutcome::Accepted { .. } => {
                state.engine.clear_inputs();
                Self::sync_engine(state, &mut focus_events);
                state.engine.set_focus(Some(0), &mut focus_events);
                effects.push(Effect::Emit(AppEvent::Submitted));
            }
        }

        effects.extend(Self::form_events_to_effects(focus_events));
        state.notice = Some(outcome.notice().clone());
        effects.push(Effect::EmitAfter(
            AppEvent::Action(Action::ClearNotice),
            notice_timeout,
        ));
        effects
    }
}

#[cfg(test)]
mod tests {
    use super::{Effect, Reducer};
    use crate::core::FieldId;
    use crate::core::controller::RegistrationForm;
    use crate::core::event::Action;
    use crate::core::event_queue::AppEvent;
    use crate::core::form_state::{FormState, FormVariant};
    use crate::core::notice::NoticeKind;
    use crate::core::state::AppState;
    use crate::core::validation::{COUNTRY_REQUIRED, NAME_TOO_SHORT};
    use crate::terminal::{KeyCode, KeyEvent};
    use std::time::Duration;

    const TIMEOUT: Duration = Duration::from_secs(3);

    fn press(state: &mut AppState, code: KeyCode) -> Vec<Effect> {
        Reducer::reduce(state, Action::InputKey(KeyEvent::plain(code)), TIMEOUT)
    }

    fn type_str(state: &mut AppState, text: &str) {
        for ch in text.chars() {
            press(state, KeyCode::Char(ch));
        }
    }

    fn next(state: &mut AppState) {
        Reducer::reduce(state, Action::NextInput, TIMEOUT);
    }

    fn fill_contact(state: &mut AppState) {
        type_str(state, "Asha Rao");
        next(state);
        type_str(state, "asha@example.in");
        next(state);
        type_str(state, "+91 98765 43210");
        next(state);
    }

    #[test]
    fn typing_updates_controller_and_live_errors() {
        let mut state = AppState::new(RegistrationForm::new(FormVariant::Destination));
        let effects = press(&mut state, KeyCode::Char('A'));

        assert_eq!(state.form.value(FieldId::Name), "A");
        assert_eq!(state.form.error(FieldId::Name), Some(NAME_TOO_SHORT));
        assert_eq!(
            effects,
            vec![Effect::Emit(AppEvent::FieldChanged {
                field: FieldId::Name,
                value: "A".to_string()
            })]
        );

        press(&mut state, KeyCode::Char('l'));
        assert_eq!(state.form.error(FieldId::Name), None);
    }

    #[test]
    fn enter_advances_until_last_field() {
        let mut state = AppState::new(RegistrationForm::new(FormVariant::Destination));
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.engine.focused_id(), Some(FieldId::Email));
        assert!(state.notice.is_none());
    }

    #[test]
    fn choosing_yes_reveals_country_and_submit_requires_it() {
        let mut state = AppState::new(RegistrationForm::new(FormVariant::Destination));
        fill_contact(&mut state);
        assert_eq!(state.engine.focused_id(), Some(FieldId::AbroadInterest));

        press(&mut state, KeyCode::Char('y'));
        assert!(state.engine.visible().contains(&FieldId::Country));

        let effects = Reducer::reduce(&mut state, Action::Submit, TIMEOUT);
        let notice = state.notice.as_ref().expect("notice");
        assert_eq!(notice.kind, NoticeKind::Destructive);
        assert_eq!(state.form.error(FieldId::Country), Some(COUNTRY_REQUIRED));
        assert_eq!(state.engine.focused_id(), Some(FieldId::Country));
        assert!(effects.contains(&Effect::CancelClearNotice));
        assert!(effects.contains(&Effect::EmitAfter(
            AppEvent::Action(Action::ClearNotice),
            TIMEOUT
        )));

        press(&mut state, KeyCode::Char('s'));
        assert_eq!(state.form.value(FieldId::Country), "Spain");
        press(&mut state, KeyCode::Enter);

        assert!(state.notice.as_ref().is_some_and(|n| n.is_success()));
        assert_eq!(state.form.state(), &FormState::new());
        assert_eq!(state.engine.focused_id(), Some(FieldId::Name));
        assert!(!state.engine.visible().contains(&FieldId::Country));
        assert!(state.engine.inputs().all(|input| input.value().is_empty()));
    }

    #[test]
    fn switching_interest_to_no_hides_and_clears_country() {
        let mut state = AppState::new(RegistrationForm::new(FormVariant::Destination));
        fill_contact(&mut state);
        press(&mut state, KeyCode::Char('y'));
        next(&mut state);
        press(&mut state, KeyCode::Char('g'));
        assert_eq!(state.form.value(FieldId::Country), "Germany");

        Reducer::reduce(&mut state, Action::PrevInput, TIMEOUT);
        press(&mut state, KeyCode::Char('n'));

        assert_eq!(state.form.value(FieldId::Country), "");
        assert_eq!(
            state
                .engine
                .input(FieldId::Country)
                .map(|i| i.value())
                .as_deref(),
            Some("")
        );
        assert!(!state.engine.visible().contains(&FieldId::Country));
    }

    #[test]
    fn event_variant_flow() {
        let mut state = AppState::new(RegistrationForm::new(FormVariant::Event));
        fill_contact(&mut state);
        press(&mut state, KeyCode::Char('n'));
        next(&mut state);
        assert_eq!(state.engine.focused_id(), Some(FieldId::EventName));

        press(&mut state, KeyCode::Enter);
        assert!(state.notice.as_ref().is_some_and(|n| !n.is_success()));
        assert_eq!(state.form.value(FieldId::Name), "Asha Rao");

        type_str(&mut state, "Open Day");
        let effects = press(&mut state, KeyCode::Enter);
        assert!(effects.contains(&Effect::Emit(AppEvent::Submitted)));
        assert_eq!(state.form.state(), &FormState::new());
    }

    #[test]
    fn clear_notice_and_exit() {
        let mut state = AppState::new(RegistrationForm::new(FormVariant::Event));
        Reducer::reduce(&mut state, Action::Submit, TIMEOUT);
        assert!(state.notice.is_some());
        Reducer::reduce(&mut state, Action::ClearNotice, TIMEOUT);
        assert!(state.notice.is_none());

        Reducer::reduce(&mut state, Action::Exit, TIMEOUT);
        assert!(state.should_exit);
    }
}
