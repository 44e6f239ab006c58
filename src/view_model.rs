//! Board View Model
//!
//! Pure transformation from (activities, controls) to what the page shows.
//! Components only commit the result to the DOM.

use std::cmp::Ordering;

use crate::models::{Activity, ActivityStore};

/// Placeholder option at the top of the activity selection
pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";
/// Leading option of the category filter
pub const ALL_CATEGORIES: &str = "All Categories";
/// Shown on a card with nobody signed up
pub const NO_PARTICIPANTS: &str = "No participants yet";

/// Sort selector value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    None,
    Name,
    Schedule,
}

/// Sort options as (value, label)
pub const SORT_OPTIONS: &[(&str, &str)] = &[
    ("", "No sorting"),
    ("name", "Sort by name"),
    ("schedule", "Sort by schedule"),
];

impl SortKey {
    /// Parse a `<select>` value; unknown values mean no sorting
    pub fn from_value(value: &str) -> Self {
        match value {
            "name" => SortKey::Name,
            "schedule" => SortKey::Schedule,
            _ => SortKey::None,
        }
    }

    pub fn as_value(&self) -> &'static str {
        match self {
            SortKey::None => "",
            SortKey::Name => "name",
            SortKey::Schedule => "schedule",
        }
    }
}

/// User-adjustable search / sort / filter values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlState {
    pub search: String,
    pub sort: SortKey,
    /// None = all categories
    pub category: Option<String>,
}

impl ControlState {
    /// Set the category filter from a `<select>` value ("" = all)
    pub fn set_category_value(&mut self, value: String) {
        self.category = if value.is_empty() { None } else { Some(value) };
    }

    /// Drop a category filter that is no longer among `options`
    pub fn retain_category(&mut self, options: &[SelectOption]) {
        let offered = match &self.category {
            Some(wanted) => options.iter().any(|o| &o.value == wanted),
            None => true,
        };
        if !offered {
            self.category = None;
        }
    }
}

/// `<option>` in a select control
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    fn placeholder(label: &str) -> Self {
        Self { value: String::new(), label: label.to_string() }
    }

    fn named(name: &str) -> Self {
        Self { value: name.to_string(), label: name.to_string() }
    }
}

/// One participant row with the data its remove control carries
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParticipantRow {
    pub activity: String,
    pub email: String,
}

/// One rendered activity card
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub participants: Vec<ParticipantRow>,
}

/// Everything derived for one render pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardView {
    pub cards: Vec<ActivityCard>,
    /// Activity selection, placeholder first
    pub options: Vec<SelectOption>,
}

/// Run the filter / sort pipeline and build cards plus selection options
pub fn render(store: &ActivityStore, controls: &ControlState) -> BoardView {
    let query = controls.search.trim().to_lowercase();

    let mut visible: Vec<&Activity> = store
        .iter()
        .filter(|a| query.is_empty() || matches_search(a, &query))
        .filter(|a| match &controls.category {
            Some(wanted) => a.details.category.as_deref() == Some(wanted.as_str()),
            None => true,
        })
        .collect();

    match controls.sort {
        SortKey::Name => visible.sort_by(|a, b| locale_compare(&a.name, &b.name)),
        SortKey::Schedule => {
            visible.sort_by(|a, b| locale_compare(&a.details.schedule, &b.details.schedule))
        }
        SortKey::None => {}
    }

    let mut options = Vec::with_capacity(visible.len() + 1);
    options.push(SelectOption::placeholder(SELECT_PLACEHOLDER));
    options.extend(visible.iter().map(|a| SelectOption::named(&a.name)));

    BoardView {
        cards: visible.into_iter().map(build_card).collect(),
        options,
    }
}

/// Category filter options: "all" first, then distinct non-empty categories
/// in first-seen order across the whole store
pub fn category_options(store: &ActivityStore) -> Vec<SelectOption> {
    let mut options = vec![SelectOption::placeholder(ALL_CATEGORIES)];
    for category in store.iter().filter_map(Activity::category) {
        if !options.iter().skip(1).any(|o| o.value == category) {
            options.push(SelectOption::named(category));
        }
    }
    options
}

/// `query` must already be trimmed and lowercased
fn matches_search(activity: &Activity, query: &str) -> bool {
    activity.name.to_lowercase().contains(query)
        || activity.details.description.to_lowercase().contains(query)
        || activity.details.schedule.to_lowercase().contains(query)
}

fn build_card(activity: &Activity) -> ActivityCard {
    ActivityCard {
        name: activity.name.clone(),
        description: activity.details.description.clone(),
        schedule: activity.details.schedule.clone(),
        spots_left: activity.spots_left(),
        participants: activity
            .details
            .participants
            .iter()
            .map(|email| ParticipantRow {
                activity: activity.name.clone(),
                email: email.clone(),
            })
            .collect(),
    }
}

/// Locale-aware string comparison (`String.prototype.localeCompare`)
#[cfg(target_arch = "wasm32")]
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let result = js_sys::JsString::from(a).locale_compare(b, &js_sys::Array::new(), &js_sys::Object::new());
    result.cmp(&0)
}

/// Outside the browser: case-insensitive first, then exact order as tie-break
#[cfg(not(target_arch = "wasm32"))]
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}
