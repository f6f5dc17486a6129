//! Feed rendering: maps delivered messages to visual lines.
//!
//! Each message is tagged own/other against the session identity. Other
//! participants' messages lead with an `author • HH:MM` info line above the
//! body; the session's own messages sit right-aligned with the bare time
//! underneath. Elements keep the feed's arrival order.

use chrono::{DateTime, Local};
use ratatui::{
    layout::Alignment,
    text::{Line, Span},
};

use crate::domain::{message::ChatMessage, theme::Theme};

use super::styles;

/// A feed entry tagged by origin, before styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedElement {
    pub author: String,
    pub body: String,
    pub time: String,
    pub own: bool,
}

pub fn build_feed_elements(messages: &[ChatMessage], own_name: &str) -> Vec<FeedElement> {
    messages
        .iter()
        .map(|message| FeedElement {
            author: message.author.clone(),
            body: message.body.clone(),
            time: format_time_of_day(message.sent_at_ms),
            own: message.is_own(own_name),
        })
        .collect()
}

/// Formats a unix-ms timestamp as a local `HH:MM` time-of-day string.
pub fn format_time_of_day(sent_at_ms: i64) -> String {
    match DateTime::from_timestamp_millis(sent_at_ms) {
        Some(utc) => utc.with_timezone(&Local).format("%H:%M").to_string(),
        None => String::new(),
    }
}

/// Renders one element to display lines, with a trailing spacer.
pub fn element_to_lines(element: &FeedElement, theme: Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if element.own {
        for text in element.body.lines() {
            lines.push(
                Line::from(Span::styled(
                    text.to_owned(),
                    styles::own_message_style(theme),
                ))
                .alignment(Alignment::Right),
            );
        }
        lines.push(
            Line::from(Span::styled(
                element.time.clone(),
                styles::message_info_style(theme),
            ))
            .alignment(Alignment::Right),
        );
    } else {
        lines.push(Line::from(Span::styled(
            format!("{} • {}", element.author, element.time),
            styles::message_info_style(theme),
        )));
        for text in element.body.lines() {
            lines.push(Line::from(Span::styled(
                text.to_owned(),
                styles::other_message_style(theme),
            )));
        }
    }

    lines.push(Line::default());
    lines
}

/// Builds the full line list for the given messages.
pub fn build_feed_lines(
    messages: &[ChatMessage],
    own_name: &str,
    theme: Theme,
) -> Vec<Line<'static>> {
    build_feed_elements(messages, own_name)
        .iter()
        .flat_map(|element| element_to_lines(element, theme))
        .collect()
}
