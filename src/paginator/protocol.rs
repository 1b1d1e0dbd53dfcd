//! Page-change protocol: turns activations into state transitions and
//! page events, and absorbs host-driven changes without echoing them.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::keys::command_for_key;
use super::label::RangeLabel;
use super::state::PaginationState;
use super::window::{self, ButtonDescriptor, RenderPlan, SkipDirection};
use crate::config::PaginatorConfig;
use crate::error::PaginatorError;

/// Upper bound on follow-up commands chained from one activation
const MAX_FOLLOW_UPS: usize = 64;

/// Something the user can activate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Page(usize),
    Skip(SkipDirection),
    Previous,
    Next,
    First,
    Last,
}

impl From<ButtonDescriptor> for Command {
    fn from(button: ButtonDescriptor) -> Self {
        match button {
            ButtonDescriptor::Page { index, .. } => Self::Page(index),
            ButtonDescriptor::Skip { direction } => Self::Skip(direction),
        }
    }
}

impl FromStr for Command {
    type Err = PaginatorError;

    /// Accepts `next`, `prev`, `first`, `last`, `skip:forward`,
    /// `skip:backward`, `page:N` and bare `N`. Page numbers are zero-based.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim().to_ascii_lowercase();
        let command = match input.as_str() {
            "next" | "n" => Self::Next,
            "previous" | "prev" | "p" => Self::Previous,
            "first" => Self::First,
            "last" => Self::Last,
            "skip:forward" | "skip+" | "forward" => Self::Skip(SkipDirection::Forward),
            "skip:backward" | "skip-" | "backward" => Self::Skip(SkipDirection::Backward),
            other => {
                let number = other.strip_prefix("page:").unwrap_or(other);
                number
                    .parse()
                    .map(Self::Page)
                    .map_err(|_| PaginatorError::InvalidCommand(input.clone()))?
            }
        };
        Ok(command)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page(index) => write!(f, "page:{}", index),
            Self::Skip(SkipDirection::Forward) => write!(f, "skip:forward"),
            Self::Skip(SkipDirection::Backward) => write!(f, "skip:backward"),
            Self::Previous => write!(f, "previous"),
            Self::Next => write!(f, "next"),
            Self::First => write!(f, "first"),
            Self::Last => write!(f, "last"),
        }
    }
}

/// Notification sent to the host after a user-initiated page change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageEvent {
    pub previous_page_index: usize,
    pub page_index: usize,
    pub page_size: usize,
    pub total_items: usize,
}

/// A change made by the host rather than by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostChange {
    TotalItems(i64),
    PageSize(i64),
    PageIndex(i64),
    WindowSize(i64),
    Disabled(bool),
}

/// Commands a listener wants to run once the current activation is done
#[derive(Debug, Default)]
pub struct FollowUps {
    commands: VecDeque<Command>,
}

impl FollowUps {
    pub fn push(&mut self, command: Command) {
        self.commands.push_back(command);
    }

    fn pop(&mut self) -> Option<Command> {
        self.commands.pop_front()
    }
}

type Listener = Box<dyn FnMut(&PageEvent, &mut FollowUps) + Send>;

/// The pagination control: owns the state and talks to the host
pub struct Paginator {
    state: PaginationState,
    label: RangeLabel,
    disabled: bool,
    show_first_last_buttons: bool,
    listeners: Vec<Listener>,
}

impl fmt::Debug for Paginator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Paginator")
            .field("state", &self.state)
            .field("label", &self.label)
            .field("disabled", &self.disabled)
            .field("show_first_last_buttons", &self.show_first_last_buttons)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Paginator {
    /// Attaches a control to `state`, computing its first window
    pub fn new(mut state: PaginationState) -> Self {
        window::recompute_range(&mut state);
        Self {
            state,
            label: RangeLabel::default(),
            disabled: false,
            show_first_last_buttons: false,
            listeners: Vec::new(),
        }
    }

    pub fn from_config(config: &PaginatorConfig) -> Self {
        let state = PaginationState::new(
            config.total_items,
            config.page_size,
            config.page_index,
            config.window_size,
        );
        let mut paginator = Self::new(state);
        paginator.label = config.range_label.clone();
        paginator.show_first_last_buttons = config.show_first_last_buttons;
        paginator
    }

    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn buttons(&self) -> Vec<ButtonDescriptor> {
        window::descriptors(&self.state)
    }

    pub fn plan(&self) -> RenderPlan {
        RenderPlan::build(
            &self.state,
            &self.label,
            self.disabled,
            self.show_first_last_buttons,
        )
    }

    /// Registers a page-change listener
    pub fn add_listener<F>(&mut self, listener: F)
    where
        F: FnMut(&PageEvent, &mut FollowUps) + Send + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Handles a user activation.
    ///
    /// Returns the emitted event, or `None` when the activation does not
    /// change the page. Listeners run only after the window is settled;
    /// commands they queue run afterwards, each with its own event.
    pub fn activate(&mut self, command: Command) -> Option<PageEvent> {
        let event = self.apply(command)?;
        let mut follow_ups = FollowUps::default();
        self.notify(&event, &mut follow_ups);

        let mut chained = 0;
        while let Some(next) = follow_ups.pop() {
            if chained == MAX_FOLLOW_UPS {
                warn!("Dropping follow-up commands after {} chained activations", chained);
                break;
            }
            chained += 1;
            if let Some(next_event) = self.apply(next) {
                self.notify(&next_event, &mut follow_ups);
            }
        }

        Some(event)
    }

    /// Handles keyboard input. Unbound keys do nothing.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<PageEvent> {
        let command = command_for_key(key)?;
        self.activate(command)
    }

    /// Applies a host-driven change. Never emits an event.
    pub fn on_host_change(&mut self, change: HostChange) {
        debug!(?change, "host change");
        match change {
            HostChange::TotalItems(value) => self.state.set_total_items(value),
            HostChange::PageSize(value) => self.state.set_page_size(value),
            HostChange::PageIndex(value) => self.state.set_page_index(value),
            HostChange::WindowSize(value) => self.state.set_window_size(value),
            HostChange::Disabled(disabled) => self.disabled = disabled,
        }
        window::recompute_range(&mut self.state);
    }

    /// Follows a page event raised by the host itself (for example by its
    /// own previous/next arrows) without re-emitting it.
    pub fn sync_from_host_event(&mut self, event: &PageEvent) {
        self.on_host_change(HostChange::TotalItems(to_signed(event.total_items)));
        self.on_host_change(HostChange::PageSize(to_signed(event.page_size)));
        self.on_host_change(HostChange::PageIndex(to_signed(event.page_index)));
    }

    /// Page an activation would move to, if any
    pub fn target_of(&self, command: Command) -> Option<usize> {
        if self.disabled || self.state.page_count() == 0 {
            return None;
        }

        let current = self.state.page_index();
        let last = self.state.last_page_index();
        let half_width = self.state.window_size().half_width();

        let target = match command {
            Command::Page(index) => index.min(last),
            Command::Skip(direction) => {
                // Hidden skip markers cannot be activated.
                if !window::shows_skip(&self.state, direction) {
                    return None;
                }
                match direction {
                    SkipDirection::Forward => (current + half_width).min(last),
                    SkipDirection::Backward => current.saturating_sub(half_width),
                }
            }
            Command::Previous => current.checked_sub(1)?,
            Command::Next => current + 1,
            Command::First => 0,
            Command::Last => last,
        };

        (target != current && target <= last).then_some(target)
    }

    fn apply(&mut self, command: Command) -> Option<PageEvent> {
        let Some(target) = self.target_of(command) else {
            debug!(%command, page_index = self.state.page_index(), "activation ignored");
            return None;
        };

        self.state.move_to(target);
        window::recompute_range(&mut self.state);

        let event = PageEvent {
            previous_page_index: self.state.previous_page_index(),
            page_index: self.state.page_index(),
            page_size: self.state.page_size(),
            total_items: self.state.total_items(),
        };
        debug!(
            %command,
            previous = event.previous_page_index,
            page_index = event.page_index,
            "page changed"
        );
        Some(event)
    }

    fn notify(&mut self, event: &PageEvent, follow_ups: &mut FollowUps) {
        for listener in &mut self.listeners {
            listener(event, follow_ups);
        }
    }
}

fn to_signed(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn control(total: i64, page_size: i64, page_index: i64) -> Paginator {
        Paginator::new(PaginationState::new(total, page_size, page_index, 5))
    }

    fn recorded(paginator: &mut Paginator) -> Arc<Mutex<Vec<PageEvent>>> {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        paginator.add_listener(move |event, _| sink.lock().unwrap().push(*event));
        events
    }

    #[test]
    fn test_page_activation_emits_event() {
        let mut paginator = control(100, 10, 0);
        let events = recorded(&mut paginator);

        let event = paginator.activate(Command::Page(2)).unwrap();
        assert_eq!(
            event,
            PageEvent { previous_page_index: 0, page_index: 2, page_size: 10, total_items: 100 }
        );
        assert_eq!(*events.lock().unwrap(), vec![event]);
        assert_eq!(paginator.state().page_index(), 2);
    }

    #[test]
    fn test_current_page_activation_is_ignored() {
        let mut paginator = control(100, 10, 3);
        let events = recorded(&mut paginator);
        assert_eq!(paginator.activate(Command::Page(3)), None);
        assert!(events.lock().unwrap().is_empty());
    }

    #[test]
    fn test_page_activation_is_clamped() {
        let mut paginator = control(100, 10, 0);
        let event = paginator.activate(Command::Page(500)).unwrap();
        assert_eq!(event.page_index, 9);
    }

    #[test]
    fn test_skip_forward_and_backward() {
        let mut paginator = control(1000, 10, 5);
        let event = paginator.activate(Command::Skip(SkipDirection::Forward)).unwrap();
        assert_eq!((event.previous_page_index, event.page_index), (5, 7));

        let event = paginator.activate(Command::Skip(SkipDirection::Backward)).unwrap();
        assert_eq!((event.previous_page_index, event.page_index), (7, 5));
    }

    #[test]
    fn test_hidden_skip_cannot_be_activated() {
        let mut paginator = control(1000, 10, 97);
        assert!(!paginator.plan().has_skip(SkipDirection::Forward));
        assert_eq!(paginator.activate(Command::Skip(SkipDirection::Forward)), None);

        let mut paginator = control(1000, 10, 1);
        assert!(!paginator.plan().has_skip(SkipDirection::Backward));
        assert_eq!(paginator.activate(Command::Skip(SkipDirection::Backward)), None);
    }

    #[test]
    fn test_previous_next_first_last() {
        let mut paginator = control(100, 10, 0);
        assert_eq!(paginator.activate(Command::Previous), None);
        assert_eq!(paginator.activate(Command::Next).unwrap().page_index, 1);
        assert_eq!(paginator.activate(Command::Last).unwrap().page_index, 9);
        assert_eq!(paginator.activate(Command::Next), None);
        assert_eq!(paginator.activate(Command::Previous).unwrap().page_index, 8);
        assert_eq!(paginator.activate(Command::First).unwrap().page_index, 0);
        assert_eq!(paginator.activate(Command::First), None);
    }

    #[test]
    fn test_host_changes_do_not_emit() {
        let mut paginator = control(1000, 10, 0);
        let events = recorded(&mut paginator);

        paginator.on_host_change(HostChange::PageIndex(40));
        paginator.on_host_change(HostChange::TotalItems(2000));
        paginator.on_host_change(HostChange::PageSize(25));

        assert!(events.lock().unwrap().is_empty());
        assert_eq!(paginator.state().page_index(), 0);
        assert_eq!(paginator.state().page_count(), 80);
    }

    #[test]
    fn test_host_page_index_recenters_window() {
        let mut paginator = control(1000, 10, 0);
        paginator.on_host_change(HostChange::PageIndex(40));
        assert_eq!((paginator.state().range_start(), paginator.state().range_end()), (38, 42));
    }

    #[test]
    fn test_sync_from_host_event() {
        let mut paginator = control(100, 10, 0);
        let events = recorded(&mut paginator);
        paginator.sync_from_host_event(&PageEvent {
            previous_page_index: 0,
            page_index: 1,
            page_size: 10,
            total_items: 100,
        });
        assert_eq!(paginator.state().page_index(), 1);
        assert!(events.lock().unwrap().is_empty());
    }

    #[test]
    fn test_disabled_control_ignores_activation() {
        let mut paginator = control(100, 10, 4);
        paginator.on_host_change(HostChange::Disabled(true));
        assert_eq!(paginator.activate(Command::Next), None);
        assert_eq!(paginator.activate(Command::Page(0)), None);
        assert!(!paginator.plan().affordances.previous.enabled);
        assert!(!paginator.buttons().is_empty());

        paginator.on_host_change(HostChange::Disabled(false));
        assert!(paginator.activate(Command::Next).is_some());
    }

    #[test]
    fn test_no_pages_ignores_everything() {
        let mut paginator = control(0, 10, 0);
        for command in [Command::Next, Command::Last, Command::Page(3), Command::Skip(SkipDirection::Forward)] {
            assert_eq!(paginator.activate(command), None);
        }
    }

    #[test]
    fn test_listener_sees_settled_state() {
        let mut paginator = control(1000, 10, 0);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        paginator.add_listener(move |event, follow_ups| {
            sink.lock().unwrap().push(event.page_index);
            if event.page_index == 40 {
                follow_ups.push(Command::Next);
            }
        });

        let event = paginator.activate(Command::Page(40)).unwrap();
        assert_eq!(event.page_index, 40);
        assert_eq!(*seen.lock().unwrap(), vec![40, 41]);
        assert_eq!(paginator.state().page_index(), 41);
        assert_eq!((paginator.state().range_start(), paginator.state().range_end()), (39, 43));
    }

    #[test]
    fn test_runaway_follow_ups_are_bounded() {
        let mut paginator = control(100_000, 1, 0);
        let count = Arc::new(Mutex::new(0usize));
        let sink = Arc::clone(&count);
        paginator.add_listener(move |_, follow_ups| {
            *sink.lock().unwrap() += 1;
            follow_ups.push(Command::Next);
        });

        paginator.activate(Command::Next);
        assert_eq!(*count.lock().unwrap(), MAX_FOLLOW_UPS + 1);
    }

    #[test]
    fn test_key_events_drive_the_control() {
        use crossterm::event::{KeyCode, KeyModifiers};

        let mut paginator = control(1000, 10, 5);
        let key = |code| KeyEvent::new(code, KeyModifiers::NONE);

        assert_eq!(paginator.handle_key_event(key(KeyCode::PageDown)).unwrap().page_index, 7);
        assert_eq!(paginator.handle_key_event(key(KeyCode::Right)).unwrap().page_index, 8);
        assert_eq!(paginator.handle_key_event(key(KeyCode::Char('x'))), None);
        assert_eq!(paginator.handle_key_event(key(KeyCode::Home)).unwrap().page_index, 0);
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!("next".parse::<Command>().unwrap(), Command::Next);
        assert_eq!("Prev".parse::<Command>().unwrap(), Command::Previous);
        assert_eq!("page:12".parse::<Command>().unwrap(), Command::Page(12));
        assert_eq!("7".parse::<Command>().unwrap(), Command::Page(7));
        assert_eq!(
            "skip:forward".parse::<Command>().unwrap(),
            Command::Skip(SkipDirection::Forward)
        );
        assert!("sideways".parse::<Command>().is_err());
        assert!("page:-1".parse::<Command>().is_err());
    }

    #[test]
    fn test_command_display_round_trips() {
        let command = Command::Skip(SkipDirection::Backward);
        assert_eq!(command.to_string().parse::<Command>().unwrap(), command);
    }

    #[test]
    fn test_event_serializes_camel_case() {
        let event = PageEvent { previous_page_index: 0, page_index: 2, page_size: 20, total_items: 100 };
        let json = serde_json::to_value(event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"previousPageIndex": 0, "pageIndex": 2, "pageSize": 20, "totalItems": 100})
        );
    }
}
