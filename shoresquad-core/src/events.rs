use chrono::NaiveDate;

use crate::model::CleanupEvent;

fn event(name: &str, lat: f64, lng: f64, (y, m, d): (i32, u32, u32), participants: u32) -> CleanupEvent {
    CleanupEvent {
        name: name.to_string(),
        lat,
        lng,
        date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN),
        participants,
    }
}

/// The upcoming cleanups shown on the page, in display order.
pub fn sample_events() -> Vec<CleanupEvent> {
    vec![
        event("Pasir Ris Beach Cleanup", 1.381497, 103.955574, (2025, 12, 7), 25),
        event("East Coast Park Squad", 1.3008, 103.9282, (2025, 12, 8), 18),
        event("Sentosa Beach Cleanup", 1.2494, 103.8303, (2025, 12, 10), 32),
    ]
}

/// Long event date, e.g. `Sunday, Dec 7`.
pub fn event_date_label(date: NaiveDate) -> String {
    date.format("%A, %b %-d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_events_in_order() {
        let events = sample_events();
        let names: Vec<_> = events.iter().map(|e| e.name.as_str()).collect();

        assert_eq!(
            names,
            ["Pasir Ris Beach Cleanup", "East Coast Park Squad", "Sentosa Beach Cleanup"]
        );
        assert_eq!(events.iter().map(|e| e.participants).collect::<Vec<_>>(), [25, 18, 32]);
    }

    #[test]
    fn formats_long_date() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 7).unwrap();
        assert_eq!(event_date_label(date), "Sunday, Dec 7");
    }
}
