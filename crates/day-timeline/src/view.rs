//! Single-day view: binds a [`LayoutEngine`] to a [`DayEventFeed`] for one day.
//!
//! While active, every snapshot the feed emits for the view's day triggers a
//! full re-layout. A "localized" signal regenerates only the day-name label.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::NaiveDate;

use crate::entry::{DayId, DaySnapshot};
use crate::feed::{DayEventFeed, Listener};
use crate::layout::{DayLayout, LayoutEngine};

/// Produces the heading shown above a day's all-day entries.
pub trait DayLabeler: Send + Sync {
    fn label(&self, date: NaiveDate) -> String;
}

/// Abbreviated English weekday followed by the day of month, e.g. "Wed 23".
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishDayLabeler;

impl DayLabeler for EnglishDayLabeler {
    fn label(&self, date: NaiveDate) -> String {
        date.format("%a %-d").to_string()
    }
}

#[derive(Debug, Default)]
struct ViewState {
    layout: Option<DayLayout>,
    renders: usize,
}

fn lock(state: &Mutex<ViewState>) -> MutexGuard<'_, ViewState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// The view holds the only strong reference to its feed listener, so dropping
/// an active view without [`DayView::destroy`] still unregisters it.
pub struct DayView {
    day: DayId,
    active: bool,
    label: String,
    labeler: Box<dyn DayLabeler>,
    state: Arc<Mutex<ViewState>>,
    listener: Listener,
}

impl DayView {
    pub fn new(date: NaiveDate, engine: LayoutEngine) -> Self {
        Self::with_labeler(date, engine, Box::new(EnglishDayLabeler))
    }

    pub fn with_labeler(date: NaiveDate, engine: LayoutEngine, labeler: Box<dyn DayLabeler>) -> Self {
        let state = Arc::new(Mutex::new(ViewState::default()));
        let sink = Arc::clone(&state);
        let listener: Listener = Arc::new(move |snapshot: &DaySnapshot| {
            let layout = engine.layout(snapshot);
            let mut state = lock(&sink);
            state.layout = Some(layout);
            state.renders += 1;
        });

        Self {
            day: DayId(date),
            active: false,
            label: labeler.label(date),
            labeler,
            state,
            listener,
        }
    }

    pub fn day(&self) -> DayId {
        self.day
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Start listening for the day's snapshots. Repeated calls are no-ops.
    pub fn activate(&mut self, feed: &mut DayEventFeed) {
        if self.active {
            return;
        }
        feed.subscribe(self.day, &self.listener);
        self.active = true;
    }

    /// Stop listening. Does nothing unless the view is active.
    pub fn deactivate(&mut self, feed: &mut DayEventFeed) {
        if !self.active {
            return;
        }
        feed.unsubscribe(self.day, &self.listener);
        self.active = false;
    }

    /// Regenerate locale-dependent text. Layout is left untouched.
    pub fn handle_localized(&mut self) {
        self.label = self.labeler.label(self.day.date());
    }

    /// Swap the labeler (e.g. after a locale change) and refresh the label.
    pub fn set_labeler(&mut self, labeler: Box<dyn DayLabeler>) {
        self.labeler = labeler;
        self.handle_localized();
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// The most recent layout, if any snapshot has been received.
    pub fn current_layout(&self) -> Option<DayLayout> {
        lock(&self.state).layout.clone()
    }

    /// Number of layout passes run so far.
    pub fn render_count(&self) -> usize {
        lock(&self.state).renders
    }

    /// Deactivate and drop all rendered state.
    pub fn destroy(mut self, feed: &mut DayEventFeed) {
        self.deactivate(feed);
    }
}
