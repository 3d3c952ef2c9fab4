use chrono::Local;
use shoresquad_core::{CleanupEvent, Toast, ToastKind, WeatherView, events::event_date_label};

pub fn print_toast(toast: &Toast) {
    match toast.kind {
        ToastKind::Success => println!("✔ {}", toast.message),
        ToastKind::Error => eprintln!("✖ {}", toast.message),
    }
}

pub fn print_weather(view: &WeatherView) {
    println!("{} {}°C  {}", view.icon, view.temperature_c, view.description);
    println!(
        "💧 {}%   💨 {} km/h   🌡️ {}°C - {}°C",
        view.humidity_pct, view.wind_kmh, view.low_c, view.high_c
    );
    println!("Cleanup conditions: {}", view.advisory);

    if view.is_sample {
        println!("(sample data - API unavailable)");
        return;
    }

    println!();
    println!("4-Day Forecast");
    for card in &view.forecast {
        println!(
            "  {:<3} {:<6} {} {:>3}° / {:>3}°  {}",
            card.date.format("%a").to_string(),
            card.date.format("%b %-d").to_string(),
            card.icon,
            card.high,
            card.low,
            card.condition
        );
    }
    println!();
    println!("Updated {}", Local::now().format("%H:%M"));
}

pub fn print_events(events: &[CleanupEvent]) {
    for event in events {
        println!("📅 {}  {}", event_date_label(event.date), event.name);
        println!("   👥 {} squad members joined ({:.4}, {:.4})", event.participants, event.lat, event.lng);
    }
}
