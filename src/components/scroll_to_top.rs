//! Floating "back to top" control.

/// Offset past which the control appears.
pub const SCROLL_THRESHOLD: u32 = 300;

/// Scroll request produced by the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollCommand {
    /// Animate to the given offset
    SmoothTo(u32),
}

/// Tracks the last reported scroll offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollToTop {
    last_offset: u32,
}

impl ScrollToTop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_scroll(&mut self, offset: u32) {
        self.last_offset = offset;
    }

    pub fn offset(&self) -> u32 {
        self.last_offset
    }

    /// Strictly greater than [`SCROLL_THRESHOLD`].
    pub fn is_visible(&self) -> bool {
        self.last_offset > SCROLL_THRESHOLD
    }

    pub fn click(&mut self) -> ScrollCommand {
        self.last_offset = 0;
        ScrollCommand::SmoothTo(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_follows_offsets() {
        let mut control = ScrollToTop::new();
        let seen: Vec<bool> = [0, 150, 301, 50]
            .into_iter()
            .map(|offset| {
                control.on_scroll(offset);
                control.is_visible()
            })
            .collect();
        assert_eq!(seen, vec![false, false, true, false]);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let mut control = ScrollToTop::new();
        control.on_scroll(SCROLL_THRESHOLD);
        assert!(!control.is_visible());
    }

    #[test]
    fn test_click_scrolls_to_zero() {
        let mut control = ScrollToTop::new();
        control.on_scroll(900);
        assert_eq!(control.click(), ScrollCommand::SmoothTo(0));
        assert_eq!(control.offset(), 0);
        assert!(!control.is_visible());
    }
}
