//! ASCII cycle plot for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - reference cross-hair: `|` / `-` / `+` at the configured neutral point
//! - cycle path: `.` segments connecting consecutive months
//! - observations: `o`, with `@` marking the most recent month

use crate::domain::{AxisBounds, JoinedPoint};

/// Render the cycle scatter into a character grid.
///
/// Bounds are fixed per country (not auto-ranged); out-of-bounds points are
/// clamped to the frame edge, and points with non-finite coordinates are
/// left out.
pub fn render_cycle_plot(
    points: &[JoinedPoint],
    bounds: &AxisBounds,
    width: usize,
    height: usize,
) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let [x_min, x_max] = bounds.x;
    let [y_min, y_max] = bounds.y;

    let mut grid = vec![vec![' '; width]; height];

    // Reference cross-hair first, so the path only fills blank cells around it.
    let ref_col = map_x(bounds.x_ref, x_min, x_max, width);
    let ref_row = map_y(bounds.y_ref, y_min, y_max, height);
    for row in grid.iter_mut() {
        row[ref_col] = '|';
    }
    for col in grid[ref_row].iter_mut() {
        *col = '-';
    }
    grid[ref_row][ref_col] = '+';

    // Cycle path between consecutive months.
    let mut prev: Option<(usize, usize)> = None;
    for p in points {
        if !(p.x.is_finite() && p.y.is_finite()) {
            prev = None;
            continue;
        }
        let x = map_x(p.x, x_min, x_max, width);
        let y = map_y(p.y, y_min, y_max, height);
        if let Some((x0, y0)) = prev {
            draw_line(&mut grid, x0, y0, x, y, '.');
        }
        prev = Some((x, y));
    }

    // Observations overlay the path; the most recent month is highlighted.
    for (i, p) in points.iter().enumerate().rev() {
        if !(p.x.is_finite() && p.y.is_finite()) {
            continue;
        }
        let x = map_x(p.x, x_min, x_max, width);
        let y = map_y(p.y, y_min, y_max, height);
        grid[y][x] = if i == 0 { '@' } else { 'o' };
    }

    // Build final string. We include a small header with bounds and count.
    let mut out = String::new();
    out.push_str(&format!(
        "Cycle: x=[{x_min:.2}, {x_max:.2}]% inflation | y=[{y_min:.2}, {y_max:.2}]% gap | n={}\n",
        points.len()
    ));

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out
}

fn map_x(x: f64, x_min: f64, x_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((x - x_min) / (x_max - x_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

/// Integer line drawing (Bresenham-ish); only fills blank cells.
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}
