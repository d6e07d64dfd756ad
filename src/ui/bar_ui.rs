use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Gauge;
use ratatui::Frame;

use crate::ui::colors::Colors;
use crate::ui::render::GaugeSpec;

/// Bitterness at which the gauge reads full.
pub const MAX_IBU: i64 = 150;

/// Gauge fill for `ibu`: whole IBU scaled to 0..=100.
pub fn bitterness_percent(ibu: f64) -> u16 {
    let value = ibu.floor().clamp(0.0, MAX_IBU as f64) as i64;
    (value * 100 / MAX_IBU) as u16
}

/// Gauge label, e.g. `60 IBU`.
pub fn bitterness_label(ibu: f64, unit: &str) -> String {
    format!("{} {}", ibu.floor() as i64, unit)
}

/// Draw the bitterness gauge inside `area`.
pub fn draw_gauge(f: &mut Frame, area: Rect, spec: &GaugeSpec, colors: &Colors) {
    let gauge = Gauge::default()
        .block(colors.block(&spec.title))
        .gauge_style(Style::default().fg(colors.fg).bg(colors.bg))
        .percent(spec.percent)
        .label(spec.label.as_str());
    f.render_widget(gauge, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_bounds() {
        assert_eq!(bitterness_percent(0.0), 0);
        assert_eq!(bitterness_percent(60.0), 40);
        assert_eq!(bitterness_percent(74.9), 49);
        assert_eq!(bitterness_percent(150.0), 100);
        assert_eq!(bitterness_percent(1157.0), 100);
        assert_eq!(bitterness_percent(-3.0), 0);
        assert_eq!(bitterness_percent(1e300), 100);
        assert_eq!(bitterness_percent(f64::NAN), 0);
    }

    #[test]
    fn label_truncates() {
        assert_eq!(bitterness_label(35.7, "IBU"), "35 IBU");
    }
}
