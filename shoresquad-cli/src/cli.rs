use std::{fs, path::PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{Select, Text};
use shoresquad_core::{
    Config, JoinForm, NeaConfig, PageContext, PageEvent, ProviderId, StationFilter,
    WeatherProvider, WeatherView,
    events::sample_events,
    load_weather,
    provider::{default_provider_from_config, provider_from_config},
    render,
};

use crate::output;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "shoresquad", version, about = "Beach cleanups and the weather to go with them")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Configure the weather provider.
    Configure {
        /// Provider short name, "nea" or "sample".
        provider: String,
    },

    /// Show current conditions, the cleanup advisory and the 4-day forecast.
    Weather {
        /// Override the configured provider.
        #[arg(long)]
        provider: Option<String>,

        /// Print the widget HTML instead of text.
        #[arg(long)]
        html: bool,
    },

    /// List upcoming cleanups.
    Events {
        #[arg(long)]
        html: bool,
    },

    /// Render the full page (events + weather) as HTML.
    Page {
        #[arg(long)]
        provider: Option<String>,

        /// Write to a file instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Join the squad. Missing fields are prompted for.
    Join {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        location: Option<String>,
    },

    /// Search for cleanups near a location.
    Search {
        #[arg(default_value = "")]
        query: String,
    },
}

fn resolve_provider(
    config: &Config,
    provider: Option<&str>,
) -> anyhow::Result<Box<dyn WeatherProvider>> {
    match provider {
        Some(id) => provider_from_config(ProviderId::try_from(id)?, config),
        None => default_provider_from_config(config),
    }
}

fn prompt_missing(value: Option<String>, label: &str) -> anyhow::Result<String> {
    match value {
        Some(v) => Ok(v),
        None => Text::new(label)
            .prompt()
            .with_context(|| format!("Failed to read {label}")),
    }
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        tracing::debug!(command = ?self.command, "running");
        let mut config = Config::load()?;

        match self.command {
            Command::Configure { provider } => {
                let id = ProviderId::try_from(provider.as_str())?;
                if id == ProviderId::Nea {
                    configure_nea(&mut config)?;
                }
                config.set_default_provider(id);
                let path = config.save()?;
                println!("Default provider set to {id} ({})", path.display());
            }
            Command::Weather { provider, html } => {
                let provider = resolve_provider(&config, provider.as_deref())?;
                let filter = StationFilter::new(&config.nea.stations);
                let outcome = load_weather(provider.as_ref(), &filter).await;

                if let Some(toast) = &outcome.toast {
                    output::print_toast(toast);
                }
                if html {
                    print!("{}", render::weather_widget(&outcome.view));
                } else {
                    output::print_weather(&outcome.view);
                }
            }
            Command::Events { html } => {
                let events = sample_events();
                if html {
                    print!("{}", render::events_grid(&events));
                } else {
                    output::print_events(&events);
                }
            }
            Command::Page { provider, out } => {
                let provider = resolve_provider(&config, provider.as_deref())?;
                let filter = StationFilter::new(&config.nea.stations);

                let mut page = PageContext::new();
                page.init();
                page.load(provider.as_ref(), &filter).await;

                let weather = page.weather.take().unwrap_or_else(WeatherView::fallback);
                let html = render::page(&page.events, &weather, &page.toasts);
                page.teardown();

                match out {
                    Some(path) => {
                        fs::write(&path, html)
                            .with_context(|| format!("Failed to write page: {}", path.display()))?;
                        println!("Page written to {}", path.display());
                    }
                    None => print!("{html}"),
                }
            }
            Command::Join { name, email, location } => {
                let mut page = PageContext::new();
                page.init();
                page.join_form = JoinForm {
                    name: prompt_missing(name, "Name")?,
                    email: prompt_missing(email, "Email")?,
                    location: prompt_missing(location, "Favourite beach")?,
                };
                page.dispatch(PageEvent::JoinSubmitted);
                page.toasts.iter().for_each(output::print_toast);
            }
            Command::Search { query } => {
                let mut page = PageContext::new();
                page.init();
                page.search_query = query;
                page.dispatch(PageEvent::SearchClicked);
                page.toasts.iter().for_each(output::print_toast);
            }
        }

        Ok(())
    }
}

fn configure_nea(config: &mut Config) -> anyhow::Result<()> {
    let base_url = Text::new("NEA base URL")
        .with_default(&config.nea.base_url)
        .prompt()
        .context("Failed to read base URL")?;

    let preset = Select::new(
        "Preferred stations",
        vec!["East coast (Pasir Ris, Changi, East Coast Parkway)", "Keep current", "Custom"],
    )
    .prompt()
    .context("Failed to read station preset")?;

    match preset {
        "Custom" => {
            let raw = Text::new("Station names, comma separated")
                .with_default(&config.nea.stations.join(", "))
                .prompt()
                .context("Failed to read station names")?;
            config.nea.stations = raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
        }
        "Keep current" => {}
        _ => config.nea.stations = NeaConfig::default().stations,
    }

    config.nea.base_url = base_url;
    Ok(())
}
