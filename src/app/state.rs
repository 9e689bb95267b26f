//! Screen state for the dashboard event loop.

use crate::components::{
    DashboardData, DashboardView, ScrollCommand, ScrollToTop, Toast,
};
use crate::ui;

/// Scroll offset units per rendered body line.
pub const SCROLL_UNITS_PER_LINE: u32 = 10;

/// Ticks a toast stays on screen.
pub const TOAST_TICKS: u16 = 80;

/// Everything the renderer reads.
#[derive(Debug, Clone)]
pub struct AppState {
    pub brand_name: String,
    pub view: Option<DashboardView>,
    pub loading: bool,
    pub load_error: Option<String>,
    pub toast: Option<Toast>,
    toast_ticks_left: u16,
    /// Body scroll position, in scroll units
    pub scroll_offset: u32,
    max_scroll: u32,
    /// Pending smooth-scroll destination
    scroll_target: Option<u32>,
    pub scroll_to_top: ScrollToTop,
    pub should_quit: bool,
    pub needs_redraw: bool,
}

impl AppState {
    pub fn new(brand_name: impl Into<String>) -> Self {
        Self {
            brand_name: brand_name.into(),
            view: None,
            loading: true,
            load_error: None,
            toast: None,
            toast_ticks_left: 0,
            scroll_offset: 0,
            max_scroll: 0,
            scroll_target: None,
            scroll_to_top: ScrollToTop::new(),
            should_quit: false,
            needs_redraw: true,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn begin_loading(&mut self) {
        self.loading = true;
        self.mark_dirty();
    }

    pub fn set_dashboard(&mut self, data: &DashboardData) {
        let view = DashboardView::from_data(data);
        let lines = ui::body_line_count(&view) as u32;
        self.max_scroll = lines.saturating_sub(1) * SCROLL_UNITS_PER_LINE;
        self.view = Some(view);
        self.loading = false;
        self.load_error = None;
        self.set_offset(self.scroll_offset.min(self.max_scroll));
    }

    /// Keep the last good view on screen and show the error beside it.
    pub fn set_load_error(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.load_error = Some(message.into());
        self.mark_dirty();
    }

    pub fn show_toast(&mut self, toast: Toast) {
        self.toast = Some(toast);
        self.toast_ticks_left = TOAST_TICKS;
        self.mark_dirty();
    }

    /// Scroll the body by whole lines; negative moves up.
    pub fn scroll_lines(&mut self, delta: i32) {
        self.scroll_target = None;
        let units = delta.unsigned_abs() * SCROLL_UNITS_PER_LINE;
        let next = if delta < 0 {
            self.scroll_offset.saturating_sub(units)
        } else {
            self.scroll_offset.saturating_add(units).min(self.max_scroll)
        };
        self.set_offset(next);
    }

    /// Handle a press on the "back to top" control.
    ///
    /// Ignored while the control is hidden.
    pub fn click_scroll_to_top(&mut self) -> Option<ScrollCommand> {
        if !self.scroll_to_top.is_visible() {
            return None;
        }
        let command = self.scroll_to_top.click();
        self.apply_scroll_command(command);
        Some(command)
    }

    pub fn apply_scroll_command(&mut self, command: ScrollCommand) {
        match command {
            ScrollCommand::SmoothTo(target) => self.scroll_target = Some(target.min(self.max_scroll)),
        }
        self.mark_dirty();
    }

    /// Advance animations and timers by one tick.
    pub fn tick(&mut self) {
        if let Some(target) = self.scroll_target {
            let distance = self.scroll_offset.abs_diff(target);
            let step = (distance / 4).max(SCROLL_UNITS_PER_LINE).min(distance);
            let next = if self.scroll_offset > target {
                self.scroll_offset - step
            } else {
                self.scroll_offset + step
            };
            if next == target {
                self.scroll_target = None;
            }
            self.set_offset(next);
        }

        if self.toast.is_some() {
            self.toast_ticks_left = self.toast_ticks_left.saturating_sub(1);
            if self.toast_ticks_left == 0 {
                self.toast = None;
                self.mark_dirty();
            }
        }
    }

    pub fn is_animating(&self) -> bool {
        self.scroll_target.is_some()
    }

    /// First body line on screen.
    pub fn body_scroll(&self) -> u16 {
        (self.scroll_offset / SCROLL_UNITS_PER_LINE).min(u16::MAX as u32) as u16
    }

    fn set_offset(&mut self, offset: u32) {
        self.scroll_offset = offset;
        self.scroll_to_top.on_scroll(offset);
        self.mark_dirty();
    }
}
