//! Single metric card: label, value, optional trend and sub-value.

use ratatui::style::Color;

/// Percentage change attached to a metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trend {
    pub percent: f64,
}

impl Trend {
    pub fn new(percent: f64) -> Self {
        Self { percent }
    }

    /// Zero counts as upward.
    pub fn is_up(&self) -> bool {
        self.percent >= 0.0
    }

    pub fn glyph(&self) -> char {
        if self.is_up() {
            '↑'
        } else {
            '↓'
        }
    }

    pub fn color(&self) -> Color {
        if self.is_up() {
            Color::Green
        } else {
            Color::Red
        }
    }

    /// e.g. `↑ 12.5%` or `↓ 3.0%`
    pub fn label(&self) -> String {
        format!("{} {:.1}%", self.glyph(), self.percent.abs())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatsCard {
    pub label: String,
    pub value: String,
    pub trend: Option<Trend>,
    pub sub_value: Option<String>,
}

impl StatsCard {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            trend: None,
            sub_value: None,
        }
    }

    pub fn with_trend(mut self, percent: f64) -> Self {
        self.trend = Some(Trend::new(percent));
        self
    }

    pub fn with_sub_value(mut self, sub_value: impl Into<String>) -> Self {
        self.sub_value = Some(sub_value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_and_zero_trend_are_up() {
        for percent in [12.5, 0.0] {
            let trend = Trend::new(percent);
            assert_eq!(trend.glyph(), '↑');
            assert_eq!(trend.color(), Color::Green);
        }
    }

    #[test]
    fn test_negative_trend_is_down() {
        let trend = Trend::new(-3.0);
        assert_eq!(trend.glyph(), '↓');
        assert_eq!(trend.color(), Color::Red);
        assert_eq!(trend.label(), "↓ 3.0%");
    }

    #[test]
    fn test_builder() {
        let card = StatsCard::new("Followers", "1,200")
            .with_trend(4.2)
            .with_sub_value("vs last month");
        assert_eq!(card.trend.map(|t| t.label()), Some("↑ 4.2%".to_string()));
        assert_eq!(card.sub_value.as_deref(), Some("vs last month"));
    }
}
