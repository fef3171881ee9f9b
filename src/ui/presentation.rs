//! Display mapping for message attributes: category icons, badges and dates.
//!
//! None of these fail. Values outside the known categories fall through to
//! the default "general" look, and unparsable timestamps are shown verbatim.

use std::fmt::Write;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use ratatui::style::{Color, Modifier, Style};

use crate::messages::{Category, Priority};

pub const EMPTY_STATE_TEXT: &str = "No messages found matching your criteria";
pub const ARCHIVE_MARKER: &str = "[archive]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Briefcase,
    Star,
    MessageSquare,
}

impl Icon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Briefcase => "▣",
            Icon::Star => "★",
            Icon::MessageSquare => "✉",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Icon::Briefcase => Color::Blue,
            Icon::Star => Color::Yellow,
            Icon::MessageSquare => Color::Gray,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub style: Style,
}

impl Badge {
    fn new(label: impl Into<String>, color: Color) -> Self {
        Self {
            label: label.into(),
            style: Style::default().fg(color).add_modifier(Modifier::BOLD),
        }
    }
}

pub fn category_icon(category: &Category) -> Icon {
    match category {
        Category::Sales => Icon::Briefcase,
        Category::Recruitment => Icon::Star,
        _ => Icon::MessageSquare,
    }
}

pub fn category_badge(category: &Category) -> Badge {
    let color = match category {
        Category::Recruitment => Color::Magenta,
        Category::Sales => Color::Blue,
        _ => Color::Gray,
    };
    let label = match category {
        Category::Other(raw) if raw.trim().is_empty() => "General".to_string(),
        other => capitalize(other.as_str()),
    };
    Badge::new(label, color)
}

pub fn priority_badge(priority: Priority) -> Badge {
    let color = match priority {
        Priority::High => Color::Red,
        Priority::Medium => Color::Yellow,
        Priority::Low => Color::Green,
    };
    Badge::new(format!("{} Priority", capitalize(priority.as_str())), color)
}

pub fn attachment_badge() -> Badge {
    Badge::new("Attachment", Color::Blue)
}

/// First character upper-cased, the rest untouched.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn parse_timestamp(timestamp: &str) -> Option<NaiveDateTime> {
    let timestamp = timestamp.trim();
    NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M").ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(timestamp)
                .ok()
                .map(|dt| dt.with_timezone(&Local).naive_local())
        })
        .or_else(|| {
            NaiveDate::parse_from_str(timestamp, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Format an ISO-8601 timestamp as a date using a `chrono` format string.
pub fn format_timestamp(timestamp: &str, date_format: &str) -> String {
    let Some(parsed) = parse_timestamp(timestamp) else {
        return timestamp.to_string();
    };

    // An invalid format string surfaces as a fmt::Error here rather than a panic.
    let mut out = String::new();
    match write!(out, "{}", parsed.format(date_format)) {
        Ok(()) => out,
        Err(_) => timestamp.to_string(),
    }
}

/// Cut `text` to at most `max_chars` characters, ending with an ellipsis when shortened.
pub fn clamp_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }
    let mut clamped: String = text.chars().take(max_chars - 1).collect();
    clamped.push('…');
    clamped
}
