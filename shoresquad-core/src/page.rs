//! Page interaction state.
//!
//! A [`PageContext`] is built once and handed to every handler. Handlers are
//! registered as [`Subscription`]s at init; [`PageContext::dispatch`] only
//! routes events that have a live subscription, and [`PageContext::teardown`]
//! drops them all.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::{
    aggregate::StationFilter,
    error::LocationError,
    events::sample_events,
    model::{CleanupEvent, WeatherView},
    notify::{CounterAnimation, Toast, group_thousands},
    provider::WeatherProvider,
    render,
    weather::load_weather,
};

/// Height of the fixed header; anchor scrolling stops this far above a section.
pub const HEADER_OFFSET: u32 = 80;
/// Scroll depth after which the header gets its shadow.
pub const HEADER_SHADOW_AFTER: u32 = 50;
/// Scroll depth after which the scroll-to-top control is shown.
pub const SCROLL_TOP_AFTER: u32 = 500;
/// Visible fraction at which an element is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Visible fraction at which a stat counter starts.
pub const COUNTER_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// What the host can tell us about the user's position.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Geolocation {
    #[default]
    Unsupported,
    Denied,
    Granted(Coordinates),
}

/// Fields of the join form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JoinForm {
    pub name: String,
    pub email: String,
    pub location: String,
}

impl JoinForm {
    pub fn missing_field(&self) -> Option<&'static str> {
        [("name", &self.name), ("email", &self.email), ("location", &self.location)]
            .into_iter()
            .find(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| field)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Something the host page should do in response to an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollRequest {
    To(u32),
    IntoView(String),
}

/// Input events the page reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    NavToggleClicked,
    AnchorClicked { href: String },
    Scrolled { y: u32 },
    ScrollTopClicked,
    JoinSubmitted,
    SearchClicked,
    FindCleanupClicked,
    CreateEventClicked,
    Intersected { element: String, ratio: f64 },
    /// One frame of every running stat counter.
    CounterTick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subscription {
    NavToggle,
    Anchors,
    Scroll,
    ScrollTop,
    JoinForm,
    Search,
    FindCleanup,
    CreateEvent,
    Intersection,
    CounterTick,
}

impl Subscription {
    fn for_event(event: &PageEvent) -> Self {
        match event {
            PageEvent::NavToggleClicked => Subscription::NavToggle,
            PageEvent::AnchorClicked { .. } => Subscription::Anchors,
            PageEvent::Scrolled { .. } => Subscription::Scroll,
            PageEvent::ScrollTopClicked => Subscription::ScrollTop,
            PageEvent::JoinSubmitted => Subscription::JoinForm,
            PageEvent::SearchClicked => Subscription::Search,
            PageEvent::FindCleanupClicked => Subscription::FindCleanup,
            PageEvent::CreateEventClicked => Subscription::CreateEvent,
            PageEvent::Intersected { .. } => Subscription::Intersection,
            PageEvent::CounterTick => Subscription::CounterTick,
        }
    }

    pub const ALL: [Subscription; 10] = [
        Subscription::NavToggle,
        Subscription::Anchors,
        Subscription::Scroll,
        Subscription::ScrollTop,
        Subscription::JoinForm,
        Subscription::Search,
        Subscription::FindCleanup,
        Subscription::CreateEvent,
        Subscription::Intersection,
        Subscription::CounterTick,
    ];
}

/// A stat figure that counts up the first time it scrolls into view.
#[derive(Debug, Clone)]
pub struct StatCounter {
    pub target: u64,
    pub text: String,
    animation: Option<CounterAnimation>,
}

impl StatCounter {
    pub fn new(target: u64) -> Self {
        Self { target, text: "0".to_string(), animation: None }
    }

    pub fn is_running(&self) -> bool {
        self.animation.is_some()
    }

    fn start(&mut self) {
        self.animation = Some(CounterAnimation::new(self.target));
    }

    /// Show the next frame; the animation is dropped once it reaches the target.
    fn advance(&mut self) {
        match self.animation.as_mut().and_then(|animation| animation.next()) {
            Some(frame) => self.text = frame,
            None => self.animation = None,
        }
        if self.text == group_thousands(self.target) {
            self.animation = None;
        }
    }
}

#[derive(Debug, Default)]
pub struct PageContext {
    subscriptions: Vec<Subscription>,

    pub menu_open: bool,
    pub header_scrolled: bool,
    pub scroll_top_visible: bool,
    pub scroll_request: Option<ScrollRequest>,

    /// Section id -> offset from the top of the document.
    pub sections: HashMap<String, u32>,
    pub revealed: HashSet<String>,
    pub stats: HashMap<String, StatCounter>,

    pub join_form: JoinForm,
    pub search_query: String,
    pub geolocation: Geolocation,

    pub events: Vec<CleanupEvent>,
    pub weather: Option<WeatherView>,
    pub events_html: String,
    pub weather_html: String,
    pub toasts: Vec<Toast>,
}

impl PageContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_section(mut self, id: impl Into<String>, offset_top: u32) -> Self {
        self.sections.insert(id.into(), offset_top);
        self
    }

    pub fn with_stat(mut self, id: impl Into<String>, target: u64) -> Self {
        self.stats.insert(id.into(), StatCounter::new(target));
        self
    }

    /// Register every handler.
    pub fn init(&mut self) {
        self.subscriptions = Subscription::ALL.to_vec();
        tracing::debug!(count = self.subscriptions.len(), "page handlers subscribed");
    }

    pub fn teardown(&mut self) {
        self.subscriptions.clear();
    }

    pub fn is_subscribed(&self, subscription: Subscription) -> bool {
        self.subscriptions.contains(&subscription)
    }

    /// Load the events and weather concurrently and render both.
    pub async fn load(&mut self, provider: &dyn WeatherProvider, filter: &StationFilter) {
        let events = async { sample_events() };
        let (events, weather) = tokio::join!(events, load_weather(provider, filter));

        self.set_events(events);
        self.weather_html = render::weather_widget(&weather.view);
        self.weather = Some(weather.view);
        self.toasts.extend(weather.toast);
    }

    pub fn set_events(&mut self, events: Vec<CleanupEvent>) {
        self.events_html = render::events_grid(&events);
        self.events = events;
    }

    pub fn notify(&mut self, toast: Toast) {
        tracing::info!(kind = ?toast.kind, message = %toast.message, "toast");
        self.toasts.push(toast);
    }

    pub fn user_location(&self) -> Result<Coordinates, LocationError> {
        match self.geolocation {
            Geolocation::Granted(coords) => Ok(coords),
            Geolocation::Denied => Err(LocationError::Denied),
            Geolocation::Unsupported => Err(LocationError::Unsupported),
        }
    }

    pub fn counters_running(&self) -> bool {
        self.stats.values().any(StatCounter::is_running)
    }

    /// Tick running stat counters every [`CounterAnimation::TICK`] until all
    /// of them reach their target.
    pub async fn animate_counters(&mut self) {
        while self.counters_running() && self.is_subscribed(Subscription::CounterTick) {
            tokio::time::sleep(CounterAnimation::TICK).await;
            self.dispatch(PageEvent::CounterTick);
        }
    }

    pub fn dispatch(&mut self, event: PageEvent) {
        if !self.is_subscribed(Subscription::for_event(&event)) {
            tracing::trace!(?event, "no subscription, ignoring");
            return;
        }

        match event {
            PageEvent::NavToggleClicked => self.toggle_menu(),
            PageEvent::AnchorClicked { href } => self.scroll_to_anchor(&href),
            PageEvent::Scrolled { y } => self.handle_scroll(y),
            PageEvent::ScrollTopClicked => self.scroll_request = Some(ScrollRequest::To(0)),
            PageEvent::JoinSubmitted => self.submit_join_form(),
            PageEvent::SearchClicked => self.search(),
            PageEvent::FindCleanupClicked => {
                self.scroll_request = Some(ScrollRequest::IntoView("map".to_string()));
            }
            PageEvent::CreateEventClicked => {
                self.notify(Toast::success("Event creation coming soon! 🎉"));
            }
            PageEvent::Intersected { element, ratio } => self.intersect(element, ratio),
            PageEvent::CounterTick => self.stats.values_mut().for_each(StatCounter::advance),
        }
    }

    pub fn aria_expanded(&self) -> &'static str {
        if self.menu_open { "true" } else { "false" }
    }

    fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    fn scroll_to_anchor(&mut self, href: &str) {
        let Some(id) = href.strip_prefix('#') else {
            return;
        };
        if let Some(&offset_top) = self.sections.get(id) {
            self.scroll_request = Some(ScrollRequest::To(offset_top.saturating_sub(HEADER_OFFSET)));
            self.menu_open = false;
        }
    }

    fn handle_scroll(&mut self, y: u32) {
        self.header_scrolled = y > HEADER_SHADOW_AFTER;
        self.scroll_top_visible = y > SCROLL_TOP_AFTER;
    }

    fn submit_join_form(&mut self) {
        if let Some(field) = self.join_form.missing_field() {
            self.notify(Toast::error(format!("Please enter your {field}")));
            return;
        }

        tracing::info!(form = ?self.join_form, "join form submitted");
        let toast = Toast::success(format!("Welcome to the squad, {}! 🌊", self.join_form.name));
        self.notify(toast);
        self.join_form.reset();
    }

    fn search(&mut self) {
        let query = self.search_query.trim().to_string();
        if query.is_empty() {
            self.notify(Toast::error("Please enter a location"));
            return;
        }
        self.notify(Toast::success(format!("Searching for cleanups near {query}...")));
    }

    fn intersect(&mut self, element: String, ratio: f64) {
        match self.stats.get_mut(&element) {
            // counters only ever start from their initial "0"
            Some(stat) if ratio >= COUNTER_THRESHOLD && stat.text == "0" && !stat.is_running() => {
                stat.start();
            }
            _ => {}
        }
        if ratio >= REVEAL_THRESHOLD {
            self.revealed.insert(element);
        }
    }
}
