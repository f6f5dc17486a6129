use super::message::ChatMessage;

/// Arrival-ordered message feed for the current session.
///
/// Messages accumulate in the order the channel delivered them; nothing is
/// ever re-sorted, evicted, or windowed. The viewport stays pinned to the
/// newest message until the user scrolls up, and scrolling anchors on a
/// message so new arrivals do not yank the view back down.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeedState {
    messages: Vec<ChatMessage>,
    /// How many messages back from the newest the viewport is anchored.
    /// Zero means pinned to the bottom.
    scroll_from_latest: usize,
}

impl FeedState {
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_pinned(&self) -> bool {
        self.scroll_from_latest == 0
    }

    /// Exclusive end of the visible message range.
    pub fn visible_end(&self) -> usize {
        self.messages.len() - self.scroll_from_latest
    }

    /// Appends a delivered message. A scrolled-up viewport keeps its anchor;
    /// a pinned one follows the new message.
    pub fn append(&mut self, message: ChatMessage) {
        self.messages.push(message);
        if self.scroll_from_latest != 0 {
            self.scroll_from_latest += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        if self.scroll_from_latest + 1 < self.messages.len() {
            self.scroll_from_latest += 1;
        }
    }

    pub fn scroll_down(&mut self) {
        self.scroll_from_latest = self.scroll_from_latest.saturating_sub(1);
    }

    /// Jumps back to the newest message.
    pub fn pin_to_latest(&mut self) {
        self.scroll_from_latest = 0;
    }
}
