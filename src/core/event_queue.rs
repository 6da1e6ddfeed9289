use crate::core::FieldId;
use crate::core::event::Action;
use crate::terminal::KeyEvent;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Key(KeyEvent),
    Action(Action),
    FieldChanged {
        field: FieldId,
        value: String,
    },
    FocusChanged {
        from: Option<FieldId>,
        to: Option<FieldId>,
    },
    Submitted,
    Rejected {
        failing: usize,
    },
}

#[derive(Debug, Clone)]
struct ScheduledEvent {
    due: Instant,
    event: AppEvent,
}

pub struct EventQueue {
    queue: VecDeque<AppEvent>,
    scheduled: Vec<ScheduledEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            scheduled: Vec::new(),
        }
    }

    pub fn emit(&mut self, event: AppEvent) {
        self.queue.push_back(event);
    }

    pub fn emit_after(&mut self, event: AppEvent, delay: Duration) {
        self.emit_at(event, Instant::now() + delay);
    }

    pub fn emit_at(&mut self, event: AppEvent, due: Instant) {
        self.scheduled.push(ScheduledEvent { due, event });
    }

    /// Drops any pending notice expiry, queued or scheduled.
    pub fn cancel_clear_notice(&mut self) {
        let is_clear = |event: &AppEvent| matches!(event, AppEvent::Action(Action::ClearNotice));
        self.queue.retain(|queued| !is_clear(queued));
        self.scheduled.retain(|scheduled| !is_clear(&scheduled.event));
    }

    pub fn next_ready(&mut self, now: Instant) -> Option<AppEvent> {
        self.move_due_to_queue(now);
        self.queue.pop_front()
    }

    pub fn has_scheduled(&self) -> bool {
        !self.scheduled.is_empty()
    }

    fn move_due_to_queue(&mut self, now: Instant) {
        let mut due = Vec::new();
        self.scheduled.retain(|scheduled| {
            if scheduled.due <= now {
                due.push(scheduled.event.clone());
                false
            } else {
                true
            }
        });
        self.queue.extend(due);
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{AppEvent, EventQueue};
    use crate::core::event::Action;
    use std::time::{Duration, Instant};

    #[test]
    fn scheduled_events_wait_until_due() {
        let mut queue = EventQueue::new();
        let now = Instant::now();
        queue.emit_at(AppEvent::Action(Action::ClearNotice), now + Duration::from_secs(3));
        queue.emit(AppEvent::Submitted);

        assert_eq!(queue.next_ready(now), Some(AppEvent::Submitted));
        assert_eq!(queue.next_ready(now), None);
        assert_eq!(
            queue.next_ready(now + Duration::from_secs(3)),
            Some(AppEvent::Action(Action::ClearNotice))
        );
        assert!(!queue.has_scheduled());
    }

    #[test]
    fn cancel_clear_notice_drops_pending_expiry() {
        let mut queue = EventQueue::new();
        let now = Instant::now();
        queue.emit_at(AppEvent::Action(Action::ClearNotice), now);
        queue.emit(AppEvent::Action(Action::ClearNotice));
        queue.emit(AppEvent::Rejected { failing: 2 });

        queue.cancel_clear_notice();
        assert_eq!(queue.next_ready(now), Some(AppEvent::Rejected { failing: 2 }));
        assert_eq!(queue.next_ready(now + Duration::from_secs(10)), None);
    }
}
