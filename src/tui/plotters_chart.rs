//! Plotters-powered chart widgets for Ratatui.
//!
//! Why Plotters instead of Ratatui's built-in `Chart` widget?
//! - nicer axis + mesh rendering
//! - less manual work for ticks/labels
//! - easy to extend later (legend, annotations, exportable PNG/SVG backends, etc.)
//!
//! We render Plotters output into the Ratatui buffer using `plotters-ratatui-backend`.

use plotters::prelude::*;
use plotters_ratatui_backend::widget_fn;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::domain::MonthKey;

/// The cycle scatter: inflation (x) against output gap (y) over the display
/// window, drawn as a connected loop through time.
///
/// The widget is intentionally data-driven: all series and bounds are computed
/// outside the render call. This keeps `render()` focused on drawing and makes
/// it easy to test/benchmark the data prep separately.
pub struct CyclePlottersChart<'a> {
    /// Scatter pairs in chronological order (oldest first), so the path and
    /// the point shading both read as time moving forward.
    pub path: &'a [(f64, f64)],
    /// Fixed per-country bounds (not auto-ranged).
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
    /// Reference cross-hair position (neutral inflation rate, zero gap).
    pub x_ref: f64,
    pub y_ref: f64,
    pub x_label: &'a str,
    pub y_label: &'a str,
}

impl<'a> Widget for CyclePlottersChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // When the available area is too small, Plotters may fail to build a
        // chart. In that case, we render a small hint rather than panicking.
        if area.width < 20 || area.height < 8 {
            buf.set_string(
                area.x,
                area.y,
                "Chart area too small (resize terminal).",
                Style::default().fg(Color::Yellow),
            );
            return;
        }

        let x0 = self.x_bounds[0];
        let x1 = self.x_bounds[1];
        let y0 = self.y_bounds[0];
        let y1 = self.y_bounds[1];

        if !(x0.is_finite() && x1.is_finite() && y0.is_finite() && y1.is_finite())
            || x1 <= x0
            || y1 <= y0
        {
            return;
        }

        let widget = widget_fn(move |root| {
            let mut chart = ChartBuilder::on(&root)
                // Small margins keep the chart readable without wasting space.
                .margin(1)
                // Terminal cells are low-res, so keep label areas compact.
                .set_label_area_size(LabelAreaPosition::Left, 6)
                .set_label_area_size(LabelAreaPosition::Bottom, 3)
                .build_cartesian_2d(x0..x1, y0..y1)?;

            // Axes + tick labels. Mesh lines are disabled to reduce visual
            // clutter in low-resolution terminal rendering.
            chart
                .configure_mesh()
                .disable_x_mesh()
                .disable_y_mesh()
                .x_desc(self.x_label)
                .y_desc(self.y_label)
                .x_labels(5)
                .y_labels(5)
                .x_label_formatter(&|v| format!("{v:.1}"))
                .y_label_formatter(&|v| format!("{v:.1}"))
                .label_style(("sans-serif", 10).into_font().color(&WHITE))
                .axis_style(&WHITE)
                .bold_line_style(&WHITE)
                .draw()?;

            // Reference cross-hair at the neutral point.
            let ref_color = RGBColor(110, 110, 110);
            chart.draw_series(LineSeries::new(
                [(self.x_ref, y0), (self.x_ref, y1)],
                &ref_color,
            ))?;
            chart.draw_series(LineSeries::new(
                [(x0, self.y_ref), (x1, self.y_ref)],
                &ref_color,
            ))?;

            // The loop path connecting consecutive months.
            chart.draw_series(LineSeries::new(
                self.path.iter().copied(),
                &RGBColor(200, 200, 200),
            ))?;

            // Points shaded from dim (oldest) to bright (newest).
            //
            // We intentionally avoid `Circle` markers here. The underlying
            // `plotters-ratatui-backend` currently maps circle radii
            // incorrectly (pixel radius -> normalized canvas units),
            // producing huge circles. A colored `Pixel` gives a clean "dot"
            // that reliably overrides the path line.
            let n = self.path.len().max(1);
            chart.draw_series(self.path.iter().enumerate().map(|(i, &(x, y))| {
                let shade = (50 + 180 * i / n) as u8;
                Pixel::new((x, y), RGBColor(shade, shade, 100))
            }))?;

            // Highlight the most recent month.
            if let Some(&latest) = self.path.last() {
                chart.draw_series(std::iter::once(Pixel::new(latest, RGBColor(0, 255, 0))))?;
            }

            Ok(())
        });

        widget.render(area, buf);
    }
}

/// A monthly time-series line chart, with an optional overlay line (used for
/// the potential-output trend next to the observed output level).
pub struct SeriesPlottersChart<'a> {
    /// Primary line; x = months since `x_base`, chronological order.
    pub line: &'a [(f64, f64)],
    /// Optional second line on the same axes.
    pub overlay: Option<&'a [(f64, f64)]>,
    /// Month at x = 0, used to format tick labels as `YYYY-MM`.
    pub x_base: MonthKey,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
    pub y_label: &'a str,
}

impl<'a> Widget for SeriesPlottersChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 20 || area.height < 6 {
            buf.set_string(
                area.x,
                area.y,
                "Chart area too small.",
                Style::default().fg(Color::Yellow),
            );
            return;
        }

        let x0 = self.x_bounds[0];
        let x1 = self.x_bounds[1];
        let y0 = self.y_bounds[0];
        let y1 = self.y_bounds[1];

        if !(x0.is_finite() && x1.is_finite() && y0.is_finite() && y1.is_finite())
            || x1 <= x0
            || y1 <= y0
        {
            return;
        }

        let x_base = self.x_base;
        let widget = widget_fn(move |root| {
            let mut chart = ChartBuilder::on(&root)
                .margin(1)
                .set_label_area_size(LabelAreaPosition::Left, 7)
                .set_label_area_size(LabelAreaPosition::Bottom, 3)
                .build_cartesian_2d(x0..x1, y0..y1)?;

            chart
                .configure_mesh()
                .disable_x_mesh()
                .disable_y_mesh()
                .y_desc(self.y_label)
                .x_labels(4)
                .y_labels(4)
                .x_label_formatter(&|v| x_base.plus_months(v.round() as i32).to_string())
                .y_label_formatter(&|v| format!("{v:.1}"))
                .label_style(("sans-serif", 10).into_font().color(&WHITE))
                .axis_style(&WHITE)
                .bold_line_style(&WHITE)
                .draw()?;

            if let Some(overlay) = self.overlay {
                chart.draw_series(LineSeries::new(
                    overlay.iter().copied(),
                    &RGBColor(155, 99, 182),
                ))?;
            }

            chart.draw_series(LineSeries::new(
                self.line.iter().copied(),
                &RGBColor(255, 99, 132),
            ))?;

            Ok(())
        });

        widget.render(area, buf);
    }
}
