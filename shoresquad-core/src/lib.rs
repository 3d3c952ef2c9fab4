//! Core library for the `shoresquad` CLI.
//!
//! This crate defines:
//! - Configuration handling
//! - Weather providers (NEA data.gov.sg and local sample data)
//! - Current-conditions aggregation and cleanup advisories
//! - The cleanup event list and HTML rendering
//! - Page interaction state
//!
//! It is used by `shoresquad-cli`, but can also be reused by other binaries or services.

pub mod advisory;
pub mod aggregate;
pub mod config;
pub mod error;
pub mod events;
pub mod model;
pub mod notify;
pub mod page;
pub mod provider;
pub mod render;
pub mod weather;

pub use advisory::Advisory;
pub use aggregate::StationFilter;
pub use config::{Config, NeaConfig};
pub use error::{LocationError, WeatherError};
pub use model::{CleanupEvent, CurrentConditions, WeatherView};
pub use notify::{Toast, ToastKind};
pub use page::{Geolocation, JoinForm, PageContext, PageEvent};
pub use provider::{ProviderId, WeatherProvider};
pub use weather::{WeatherOutcome, load_weather};
