//! Ratatui-based terminal UI.
//!
//! The TUI shows one country dashboard at a time: the cycle scatter, the
//! inflation and output line charts, a recent-months table, and a settings
//! panel for switching country and adjusting the scatter window.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};

use crate::app::pipeline::{CountryRun, run_country};
use crate::cli::TuiArgs;
use crate::domain::{Country, MonthKey, ObservedPoint, Series};
use crate::error::AppError;

mod plotters_chart;

use plotters_chart::{CyclePlottersChart, SeriesPlottersChart};

/// Months shown on the inflation line chart.
const LINE_CHART_MONTHS: usize = 48;

/// Rows shown in the recent-months table.
const TABLE_ROWS: usize = 12;

/// Start the TUI.
pub fn run(args: TuiArgs) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::new(4, format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(args);
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::new(4, format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::new(4, format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

struct App {
    country: Country,
    window: usize,
    window_input: String,
    editing_window: bool,
    selected_field: usize,
    status: String,
    // Both dashboards are computed once up front; the data is embedded and
    // static, so there is nothing to refresh.
    runs: [CountryRun; 2],
}

impl App {
    fn new(args: TuiArgs) -> Self {
        let runs = [run_country(Country::Us), run_country(Country::Cn)];
        Self {
            country: args.country,
            window: args.window.max(1),
            window_input: String::new(),
            editing_window: false,
            selected_field: 0,
            status: "Ready.".to_string(),
            runs,
        }
    }

    fn current(&self) -> &CountryRun {
        match self.country {
            Country::Us => &self.runs[0],
            Country::Cn => &self.runs[1],
        }
    }

    fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::new(4, format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::new(4, format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| AppError::new(4, format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Returns true when the app should quit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        if self.editing_window {
            self.handle_window_edit(code);
            return false;
        }

        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Up => {
                if self.selected_field > 0 {
                    self.selected_field -= 1;
                }
            }
            KeyCode::Down => {
                if self.selected_field < 1 {
                    self.selected_field += 1;
                }
            }
            KeyCode::Left => self.adjust_field(-1),
            KeyCode::Right => self.adjust_field(1),
            KeyCode::Enter => {
                if self.selected_field == 1 {
                    self.editing_window = true;
                    self.window_input = self.window.to_string();
                    self.status =
                        "Editing window (months). Enter to apply, Esc to cancel.".to_string();
                }
            }
            KeyCode::Char('c') => {
                self.country = self.country.next();
                self.status = format!("country: {}", self.country.display_name());
            }
            _ => {}
        }

        false
    }

    fn handle_window_edit(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => {
                self.editing_window = false;
                self.status = "Window edit canceled.".to_string();
            }
            KeyCode::Enter => {
                self.editing_window = false;
                let fallback = self.current().config.default_window;
                self.window = parse_window(&self.window_input, fallback);
                self.status = format!("window: {}", self.window);
            }
            KeyCode::Backspace => {
                self.window_input.pop();
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                self.window_input.push(c);
            }
            _ => {}
        }
    }

    fn adjust_field(&mut self, delta: i32) {
        match self.selected_field {
            0 => {
                // Two countries, so either direction toggles.
                self.country = self.country.next();
                self.status = format!("country: {}", self.country.display_name());
            }
            1 => {
                self.window = if delta >= 0 {
                    self.window.saturating_add(1)
                } else {
                    self.window.saturating_sub(1).max(1)
                };
                self.status = format!("window: {}", self.window);
            }
            _ => {}
        }
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(0),
                Constraint::Length(5),
                Constraint::Length(3),
            ])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_body(frame, chunks[1]);
        self.draw_settings(frame, chunks[2]);
        self.draw_footer(frame, chunks[3]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let run = self.current();
        let joined = run.joined(self.window);

        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(vec![
            Span::styled("mcy", Style::default().fg(Color::Cyan)),
            Span::raw(" — inflation / output-gap cycles"),
        ]));

        let latest = run
            .inflation
            .latest()
            .map(|p| p.month.to_string())
            .unwrap_or_else(|| "-".to_string());

        lines.push(Line::from(Span::styled(
            format!(
                "country: {} | window: {} | pairs: {} | latest: {latest}",
                self.country.display_name(),
                self.window,
                joined.len(),
            ),
            Style::default().fg(Color::Gray),
        )));

        if let Some(p) = joined.first() {
            lines.push(Line::from(Span::styled(
                format!("{}: inflation {:.2}% | gap {:.2}%", p.month, p.x, p.y),
                Style::default().fg(Color::Gray),
            )));
        }

        let p = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_body(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(42),
                Constraint::Percentage(34),
                Constraint::Percentage(24),
            ])
            .split(area);

        self.draw_cycle_chart(frame, chunks[0]);
        self.draw_line_charts(frame, chunks[1]);
        self.draw_table(frame, chunks[2]);
    }

    fn draw_cycle_chart(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let run = self.current();
        let block = Block::default()
            .title(format!("Cycle — last {} months", self.window))
            .borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        let joined = run.joined(self.window);
        // Chronological order so the loop path and shading read forward in time.
        let path: Vec<(f64, f64)> = joined
            .iter()
            .rev()
            .filter(|p| p.x.is_finite() && p.y.is_finite())
            .map(|p| (p.x, p.y))
            .collect();

        if path.is_empty() {
            let msg = Paragraph::new("No joined pairs for this window.")
                .style(Style::default().fg(Color::Yellow))
                .block(Block::default());
            frame.render_widget(msg, inner);
            return;
        }

        let bounds = &run.config.bounds;
        let widget = CyclePlottersChart {
            path: &path,
            x_bounds: bounds.x,
            y_bounds: bounds.y,
            x_ref: bounds.x_ref,
            y_ref: bounds.y_ref,
            x_label: run.config.inflation_label,
            y_label: run.config.gap_label,
        };
        frame.render_widget(widget, inner);
    }

    fn draw_line_charts(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let run = self.current();

        self.draw_series_chart(
            frame,
            chunks[0],
            "Core inflation",
            &run.inflation,
            LINE_CHART_MONTHS,
            None,
        );

        match &run.potential {
            Some(potential) => {
                self.draw_series_chart(
                    frame,
                    chunks[1],
                    "Output vs potential",
                    &run.output_raw,
                    run.output_raw.len(),
                    Some(potential),
                );
            }
            None => {
                self.draw_series_chart(
                    frame,
                    chunks[1],
                    "Output gap",
                    &run.gap_raw,
                    run.gap_raw.len(),
                    None,
                );
            }
        }
    }

    fn draw_series_chart(
        &self,
        frame: &mut ratatui::Frame<'_>,
        area: Rect,
        title: &str,
        series: &Series,
        last_n: usize,
        overlay: Option<&Series>,
    ) {
        let block = Block::default().title(title.to_string()).borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        let Some((line, base)) = line_points(series, last_n) else {
            let msg = Paragraph::new("No data.")
                .style(Style::default().fg(Color::Yellow))
                .block(Block::default());
            frame.render_widget(msg, inner);
            return;
        };

        let overlay_line: Option<Vec<(f64, f64)>> =
            overlay.map(|s| points_since(s, base, s.len()));

        let mut all: Vec<&[(f64, f64)]> = vec![&line];
        if let Some(o) = &overlay_line {
            all.push(o);
        }
        let (x_bounds, y_bounds) = chart_bounds(&all);

        let widget = SeriesPlottersChart {
            line: &line,
            overlay: overlay_line.as_deref(),
            x_base: base,
            x_bounds,
            y_bounds,
            y_label: "%",
        };
        frame.render_widget(widget, inner);
    }

    fn draw_table(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let run = self.current();
        let block = Block::default().title("Recent months").borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(Span::styled(
            format!("{:<8} {:>8} {:>8}", "month", "infl %", "gap %"),
            Style::default().add_modifier(Modifier::BOLD),
        )));

        for p in run.inflation.window(TABLE_ROWS) {
            let gap = run
                .gap
                .value_at(p.month)
                .map(|v| format!("{v:>8.2}"))
                .unwrap_or_else(|| format!("{:>8}", "-"));
            lines.push(Line::from(format!(
                "{:<8} {:>8.2} {gap}",
                p.month.to_string(),
                p.value
            )));
        }

        let p = Paragraph::new(Text::from(lines));
        frame.render_widget(p, inner);
    }

    fn draw_settings(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let items = vec![
            ListItem::new(format!("Country: {}", self.country.display_name())),
            ListItem::new(format!("Window: {}", self.window)),
        ];

        let list = List::new(items)
            .block(Block::default().title("Settings").borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ratatui::widgets::ListState::default();
        state.select(Some(self.selected_field));
        frame.render_stateful_widget(list, area, &mut state);

        if self.editing_window {
            let hint = Paragraph::new(format!("Window: {}_", self.window_input))
                .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
            let rect = Rect {
                x: area.x + 2,
                y: area.y + area.height.saturating_sub(2),
                width: area.width.saturating_sub(4),
                height: 1,
            };
            frame.render_widget(hint, rect);
        }
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "↑/↓ select  ←/→ adjust  Enter edit window  c country  q quit";
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

/// Parse the window input, falling back to `fallback` when the text is not a
/// positive number.
fn parse_window(input: &str, fallback: usize) -> usize {
    match input.trim().parse::<usize>() {
        Ok(n) if n > 0 => n,
        _ => fallback,
    }
}

/// Build chart points for the most recent `last_n` months of a series,
/// chronological, with x = months since the slice's oldest month. Non-finite
/// values are left out of the line.
fn line_points(series: &Series, last_n: usize) -> Option<(Vec<(f64, f64)>, MonthKey)> {
    let slice = series.window(last_n);
    let base = slice.last()?.month;
    Some((points_since_slice(slice, base), base))
}

/// Chart points for a whole series against an externally chosen base month.
fn points_since(series: &Series, base: MonthKey, last_n: usize) -> Vec<(f64, f64)> {
    points_since_slice(series.window(last_n), base)
}

fn points_since_slice(slice: &[ObservedPoint], base: MonthKey) -> Vec<(f64, f64)> {
    slice
        .iter()
        .rev()
        .filter(|p| p.value.is_finite())
        .map(|p| (p.month.months_since(base) as f64, p.value))
        .collect()
}

/// Common bounds for one or more lines sharing axes, with a 5% y padding.
fn chart_bounds(lines: &[&[(f64, f64)]]) -> ([f64; 2], [f64; 2]) {
    let mut x_max = f64::NEG_INFINITY;
    let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for line in lines {
        for &(x, y) in line.iter() {
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
    }

    if !y_min.is_finite() || !y_max.is_finite() || y_max <= y_min {
        y_min = 0.0;
        y_max = 1.0;
    }
    if !x_max.is_finite() || x_max <= 0.0 {
        x_max = 1.0;
    }

    let pad = ((y_max - y_min).abs() * 0.05).max(1e-12);
    ([0.0, x_max], [y_min - pad, y_max + pad])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_input_falls_back_to_the_default() {
        assert_eq!(parse_window("36", 24), 36);
        assert_eq!(parse_window(" 12 ", 24), 12);
        assert_eq!(parse_window("", 24), 24);
        assert_eq!(parse_window("abc", 24), 24);
        assert_eq!(parse_window("0", 24), 24);
        assert_eq!(parse_window("-3", 24), 24);
    }

    #[test]
    fn line_points_are_chronological_from_the_base_month() {
        let series = Series::from_points(vec![
            ObservedPoint {
                month: MonthKey::at(2024, 1),
                value: 1.0,
            },
            ObservedPoint {
                month: MonthKey::at(2024, 3),
                value: 3.0,
            },
        ]);

        let (points, base) = line_points(&series, 48).unwrap();
        assert_eq!(base, MonthKey::at(2024, 1));
        assert_eq!(points, vec![(0.0, 1.0), (2.0, 3.0)]);
    }

    #[test]
    fn chart_bounds_pad_the_y_range() {
        let line: &[(f64, f64)] = &[(0.0, 1.0), (10.0, 3.0)];
        let (x_bounds, y_bounds) = chart_bounds(&[line]);
        assert_eq!(x_bounds, [0.0, 10.0]);
        assert!(y_bounds[0] < 1.0);
        assert!(y_bounds[1] > 3.0);
    }

    #[test]
    fn chart_bounds_degenerate_input_falls_back() {
        // Empty input falls back to the unit range plus 5% padding.
        let (x_bounds, y_bounds) = chart_bounds(&[&[]]);
        assert_eq!(x_bounds, [0.0, 1.0]);
        assert!((y_bounds[0] + 0.05).abs() < 1e-12);
        assert!((y_bounds[1] - 1.05).abs() < 1e-12);
    }
}
