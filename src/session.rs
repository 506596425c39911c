//! Page-session state: the selected date and location.
//!
//! The date drives a full navigation when changed (the server renders the
//! table for a date). The location is remembered across sessions through
//! the preference store.

use crate::effects::{Effect, Toast};
use crate::prefs::{PreferenceStore, SELECTED_LOCATION_KEY};
use chrono::Local;

pub struct PageSession<S: PreferenceStore> {
    store: S,
    pub selected_date: String,
    pub selected_location: String,
}

impl<S: PreferenceStore> PageSession<S> {
    /// Start a session. A stored location wins over the caller's default;
    /// a missing date defaults to today (local time), matching the server.
    pub fn start(store: S, date: Option<String>, default_location: String) -> Self {
        let selected_location = store
            .get(SELECTED_LOCATION_KEY)
            .unwrap_or(default_location);
        let selected_date =
            date.unwrap_or_else(|| Local::now().date_naive().format("%Y-%m-%d").to_string());
        Self {
            store,
            selected_date,
            selected_location,
        }
    }

    /// Date changes navigate to the server render for that date rather than
    /// fetching anything asynchronously.
    pub fn change_date(&mut self, date: &str) -> Vec<Effect> {
        self.selected_date = date.to_string();
        vec![Effect::Navigate {
            url: format!("/?date={date}"),
        }]
    }

    /// Location changes are written through on every change.
    pub fn change_location(&mut self, location: &str) -> Vec<Effect> {
        self.store.set(SELECTED_LOCATION_KEY, location);
        self.selected_location = location.to_string();
        vec![Effect::Toast(Toast::success("Location updated"))]
    }
}
