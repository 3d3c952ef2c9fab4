use std::time::Duration;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
}

/// Transient notification shown in the corner of the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    /// How long a toast stays on screen before sliding out.
    pub const VISIBLE_FOR: Duration = Duration::from_millis(3000);

    pub fn success(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: ToastKind::Success }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: ToastKind::Error }
    }

    pub fn background(&self) -> &'static str {
        match self.kind {
            ToastKind::Success => "#4ECDC4",
            ToastKind::Error => "#FF6B6B",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self.kind {
            ToastKind::Success => "notification notification-success",
            ToastKind::Error => "notification notification-error",
        }
    }
}

/// Frames of a stat counter counting up to its target.
///
/// Each tick adds `target / (duration / tick)`; intermediate values are
/// floored and the last frame is always exactly the target.
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: u64,
    increment: f64,
    current: f64,
    done: bool,
}

impl CounterAnimation {
    pub const DURATION: Duration = Duration::from_millis(2000);
    pub const TICK: Duration = Duration::from_millis(50);

    pub fn new(target: u64) -> Self {
        let ticks = Self::DURATION.as_millis() as f64 / Self::TICK.as_millis() as f64;
        Self { target, increment: target as f64 / ticks, current: 0.0, done: false }
    }
}

impl Iterator for CounterAnimation {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }
        self.current += self.increment;
        if self.current >= self.target as f64 {
            self.done = true;
            Some(group_thousands(self.target))
        } else {
            Some(group_thousands(self.current.floor() as u64))
        }
    }
}

/// `12345` -> `12,345`
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_colors_follow_kind() {
        assert_eq!(Toast::success("ok").background(), "#4ECDC4");
        assert_eq!(Toast::error("no").background(), "#FF6B6B");
        assert_eq!(Toast::error("no").css_class(), "notification notification-error");
    }

    #[test]
    fn counter_stops_at_target() {
        let frames: Vec<_> = CounterAnimation::new(1200).collect();

        assert_eq!(frames.len(), 40);
        assert_eq!(frames[0], "30");
        assert_eq!(frames.last().map(String::as_str), Some("1,200"));
    }

    #[test]
    fn counter_for_zero_emits_single_frame() {
        let frames: Vec<_> = CounterAnimation::new(0).collect();
        assert_eq!(frames, ["0"]);
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }
}
