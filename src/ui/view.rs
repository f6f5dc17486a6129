use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::domain::session_state::{SessionPhase, SessionState};

use super::{message_rendering::build_feed_lines, styles};

const HEADER_TITLE: &str = "Community Lobby";
const PROMPT_SYMBOL: &str = "> ";
const EMPTY_FEED_PLACEHOLDER: &str = "No messages yet. Say hello!";
const SETUP_TITLE: &str = "Join the lobby";
const SETUP_PROMPT_TEXT: &str = "Pick a display name to join the conversation.";
const SETUP_HINT: &str = "2-30 characters. Press Enter to join.";
const CHAT_HINT: &str = "Press Enter to send.";

pub fn render(frame: &mut Frame<'_>, state: &SessionState) {
    let [header_area, body_area, input_area, status_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(frame.area());

    render_header(frame, header_area, state);

    match state.phase() {
        SessionPhase::AwaitingIdentity => render_setup_panel(frame, body_area, state),
        SessionPhase::ChatActive => render_feed_panel(frame, body_area, state),
    }

    render_input(frame, input_area, state);

    let status =
        Paragraph::new(status_line(state)).style(styles::status_line_style(state.theme()));
    frame.render_widget(status, status_area);
}

fn render_header(frame: &mut Frame<'_>, area: Rect, state: &SessionState) {
    let header = Paragraph::new(Line::from(Span::styled(
        HEADER_TITLE,
        styles::header_style(state.theme()),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(header, area);
}

fn render_setup_panel(frame: &mut Frame<'_>, area: Rect, state: &SessionState) {
    let theme = state.theme();

    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            SETUP_PROMPT_TEXT,
            styles::input_text_style(theme),
        )),
        Line::from(Span::styled(SETUP_HINT, styles::message_info_style(theme))),
    ];

    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styles::panel_border_style(theme))
                .title(Span::styled(SETUP_TITLE, styles::panel_title_style(theme))),
        );
    frame.render_widget(panel, area);
}

fn render_feed_panel(frame: &mut Frame<'_>, area: Rect, state: &SessionState) {
    let theme = state.theme();
    let feed = state.feed();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::panel_border_style(theme))
        .title(Span::styled(
            format!("Lobby ({})", feed.len()),
            styles::panel_title_style(theme),
        ));

    if feed.is_empty() {
        let placeholder = Paragraph::new(Line::from(Span::styled(
            EMPTY_FEED_PLACEHOLDER,
            styles::placeholder_style(theme),
        )))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let own_name = state.identity().map(|name| name.as_str()).unwrap_or("");
    let visible = &feed.messages()[..feed.visible_end()];
    let lines = build_feed_lines(visible, own_name, theme);

    // Keep the end of the visible range on screen.
    let inner_height = area.height.saturating_sub(2) as usize;
    let scroll_y = lines.len().saturating_sub(inner_height) as u16;

    let paragraph = Paragraph::new(lines).block(block).scroll((scroll_y, 0));
    frame.render_widget(paragraph, area);
}

fn render_input(frame: &mut Frame<'_>, area: Rect, state: &SessionState) {
    let theme = state.theme();

    let title = match state.notice() {
        Some(notice) => Span::styled(notice.text.clone(), styles::notice_error_style(theme)),
        None => Span::styled(
            hint_for_phase(state.phase()),
            styles::message_info_style(theme),
        ),
    };

    let input = state.input();
    let content = Line::from(vec![
        Span::styled(PROMPT_SYMBOL, styles::input_prompt_style(theme)),
        Span::styled(input.text().to_owned(), styles::input_text_style(theme)),
    ]);

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styles::panel_border_style(theme))
            .title(title),
    );
    frame.render_widget(paragraph, area);

    // Place the terminal cursor at the edit position, wide glyphs included.
    let cursor_x = area
        .x
        .saturating_add(1)
        .saturating_add(PROMPT_SYMBOL.len() as u16)
        .saturating_add(input.text_before_cursor().width().min(u16::MAX as usize) as u16);
    let cursor_y = area.y.saturating_add(1);
    frame.set_cursor_position((cursor_x, cursor_y));
}

fn hint_for_phase(phase: SessionPhase) -> &'static str {
    match phase {
        SessionPhase::AwaitingIdentity => SETUP_HINT,
        SessionPhase::ChatActive => CHAT_HINT,
    }
}

fn status_line(state: &SessionState) -> String {
    let identity = state.identity().map(|name| name.as_str()).unwrap_or("-");
    let nav_hint = match state.phase() {
        SessionPhase::AwaitingIdentity => "Enter: join | Ctrl+T: theme | Esc: quit",
        SessionPhase::ChatActive => "Enter: send | Up/Down: scroll | Ctrl+T: theme | Esc: quit",
    };

    format!(
        "you: {identity} | theme: {} | channel: {} | {nav_hint}",
        state.theme().as_str(),
        state.channel_health().as_label()
    )
}
