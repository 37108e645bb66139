//! Chart rendering for the dashboard: grouped bars, pie-style breakdown, and
//! the color palette shared by both.

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders};

use crate::domain::NormalizedTable;
use crate::report::{fmt_count, unit_label, PieSlice};

/// Golden-angle hue stepping keeps neighboring tracts visually distinct for
/// any tract count.
const HUE_STEP_DEG: f64 = 137.508;

/// One color per unit, stable across redraws.
pub fn palette(count: usize) -> Vec<Color> {
    (0..count)
        .map(|i| {
            let hue = (i as f64 * HUE_STEP_DEG) % 360.0;
            let (r, g, b) = hsl_to_rgb(hue, 0.7, 0.5);
            Color::Rgb(r, g, b)
        })
        .collect()
}

/// Build the grouped bar chart: one group per category, one bar per selected
/// tract.
pub fn bar_chart(table: &NormalizedTable, selected: &[&str], colors: &[Color]) -> BarChart<'static> {
    let mut chart = BarChart::default()
        .block(Block::default().title("Census Tracts").borders(Borders::ALL))
        .bar_width(7)
        .bar_gap(1)
        .group_gap(2);

    for record in &table.records {
        let bars: Vec<Bar> = selected
            .iter()
            .enumerate()
            .map(|(i, id)| {
                let value = record.value(id).unwrap_or(0).max(0) as u64;
                let color = colors.get(i).copied().unwrap_or(Color::Yellow);
                Bar::default()
                    .value(value)
                    .text_value(fmt_count(value as i64))
                    .style(Style::default().fg(color))
            })
            .collect();

        chart = chart.data(
            BarGroup::default()
                .label(Line::from(truncate_label(&record.name, 14)))
                .bars(&bars),
        );
    }

    chart
}

/// Render the pie view as labeled percentage bars, one line per category.
pub fn pie_lines(slices: &[PieSlice], colors: &[Color], width: usize) -> Vec<Line<'static>> {
    let bar_width = width.saturating_sub(40).max(10);

    slices
        .iter()
        .enumerate()
        .map(|(i, slice)| {
            let color = colors.get(i % colors.len().max(1)).copied().unwrap_or(Color::Yellow);
            let filled = (slice.share * bar_width as f64).round() as usize;
            Line::from(vec![
                Span::raw(format!(
                    "{:<26} {:>6.2}% ",
                    truncate_label(&slice.name, 26),
                    slice.share * 100.0
                )),
                Span::styled("█".repeat(filled.min(bar_width)), Style::default().fg(color)),
            ])
        })
        .collect()
}

/// Legend line mapping colors to tract labels.
pub fn legend_line(selected: &[&str], colors: &[Color]) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, id) in selected.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let color = colors.get(i).copied().unwrap_or(Color::Yellow);
        spans.push(Span::styled("■ ", Style::default().fg(color)));
        spans.push(Span::raw(unit_label(id)));
    }
    Line::from(spans)
}

fn truncate_label(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('.');
    out
}

fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = h / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r1, g1, b1) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    (
        ((r1 + m) * 255.0).round() as u8,
        ((g1 + m) * 255.0).round() as u8,
        ((b1 + m) * 255.0).round() as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_length_and_distinct_leading_colors() {
        let colors = palette(6);
        assert_eq!(colors.len(), 6);
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
    }

    #[test]
    fn hue_zero_is_red_dominant() {
        let (r, g, b) = hsl_to_rgb(0.0, 0.7, 0.5);
        assert!(r > g && r > b);
    }

    #[test]
    fn pie_lines_show_percentages() {
        let slices = vec![PieSlice {
            name: "Cat A".to_string(),
            total: 7,
            share: 0.5,
        }];
        let lines = pie_lines(&slices, &palette(1), 80);
        let text: String = lines[0]
            .spans
            .iter()
            .map(|s| s.content.clone().into_owned())
            .collect();
        assert!(text.contains("Cat A"));
        assert!(text.contains("50.00%"));
    }

    #[test]
    fn long_labels_are_truncated() {
        let label = truncate_label("a very long category label indeed", 10);
        assert_eq!(label.chars().count(), 10);
        assert!(label.ends_with('.'));
    }
}
