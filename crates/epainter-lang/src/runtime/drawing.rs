//! Raster primitives: brush stamping, line walk, midpoint circle, rectangle
//! outline, and BFS flood fill. Every function takes the source line of the
//! statement it serves so failures point back at the program text.

use std::collections::{HashSet, VecDeque};

use crate::canvas::{Canvas, Color, Cursor};
use crate::error::RuntimeError;

/// Stamps the square brush centered at `(x, y)`. Out-of-range cells are
/// clipped; a Transparent brush changes nothing.
pub fn stamp(canvas: &mut Canvas, cursor: &Cursor, x: i64, y: i64) {
    if cursor.color == Color::Transparent {
        return;
    }
    let half = cursor.size / 2;
    for dy in -half..=half {
        for dx in -half..=half {
            canvas.set(x + dx, y + dy, cursor.color);
        }
    }
}

/// `base + dir·scale` with overflow surfaced as a runtime failure. The
/// resolver only warns about huge literal extents, so the value can reach
/// here.
fn offset(base: i64, dir: i64, scale: i64, line: usize) -> Result<i64, RuntimeError> {
    dir.checked_mul(scale)
        .and_then(|step| base.checked_add(step))
        .ok_or_else(|| RuntimeError::new(line, "arithmetic overflow"))
}

fn check_direction(dx: i64, dy: i64, line: usize, allow_zero: bool) -> Result<(), RuntimeError> {
    if !(-1..=1).contains(&dx) || !(-1..=1).contains(&dy) {
        return Err(RuntimeError::new(
            line,
            format!("direction components must be -1, 0, or 1, found ({dx}, {dy})"),
        ));
    }
    if !allow_zero && dx == 0 && dy == 0 {
        return Err(RuntimeError::new(line, "direction must not be (0, 0)"));
    }
    Ok(())
}

/// Walks `distance` steps along one of the 8 unit directions, stamping the
/// brush at every visited cell. The cursor ends at the far endpoint even
/// when it lies off-canvas.
pub fn draw_line(
    canvas: &mut Canvas,
    cursor: &mut Cursor,
    dx: i64,
    dy: i64,
    distance: i64,
    line: usize,
) -> Result<(), RuntimeError> {
    check_direction(dx, dy, line, false)?;
    if distance < 0 {
        return Err(RuntimeError::new(
            line,
            format!("line distance must not be negative, found {distance}"),
        ));
    }

    for i in 0..=distance {
        stamp(canvas, cursor, cursor.x + dx * i, cursor.y + dy * i);
    }
    cursor.x += dx * distance;
    cursor.y += dy * distance;
    Ok(())
}

/// Midpoint circle around `cursor + dir·radius`. The center must land on
/// the canvas; the radius is clamped so all four cardinal points fit, and
/// a positive request that cannot fit at all is fatal.
pub fn draw_circle(
    canvas: &mut Canvas,
    cursor: &mut Cursor,
    dx: i64,
    dy: i64,
    radius: i64,
    line: usize,
) -> Result<(), RuntimeError> {
    check_direction(dx, dy, line, true)?;
    if radius < 0 {
        return Err(RuntimeError::new(
            line,
            format!("circle radius must not be negative, found {radius}"),
        ));
    }

    let cx = offset(cursor.x, dx, radius, line)?;
    let cy = offset(cursor.y, dy, radius, line)?;
    if !canvas.in_bounds(cx, cy) {
        return Err(RuntimeError::new(
            line,
            format!("circle center ({cx}, {cy}) is outside the canvas"),
        ));
    }

    let max_fit = fitting_radius(canvas, cx, cy);
    let r = radius.min(max_fit);
    if radius > 0 && r < 1 {
        return Err(RuntimeError::new(
            line,
            format!("no circle of positive radius fits around ({cx}, {cy})"),
        ));
    }

    if r == 0 {
        stamp(canvas, cursor, cx, cy);
    } else {
        plot_circle(canvas, cursor, cx, cy, r);
    }
    cursor.x = cx;
    cursor.y = cy;
    Ok(())
}

/// Largest radius whose four cardinal points stay on the canvas.
fn fitting_radius(canvas: &Canvas, cx: i64, cy: i64) -> i64 {
    let size = canvas.size() as i64;
    let left = cx;
    let right = size - 1 - cx;
    let up = cy;
    let down = size - 1 - cy;
    left.min(right).min(up).min(down)
}

fn plot_circle(canvas: &mut Canvas, cursor: &Cursor, cx: i64, cy: i64, r: i64) {
    let mut x = 0;
    let mut y = r;
    let mut d = 3 - 2 * r;

    while x <= y {
        plot_octants(canvas, cursor, cx, cy, x, y);
        if d < 0 {
            d += 4 * x + 6;
        } else {
            d += 4 * (x - y) + 10;
            y -= 1;
        }
        x += 1;
    }
}

fn plot_octants(canvas: &mut Canvas, cursor: &Cursor, cx: i64, cy: i64, x: i64, y: i64) {
    for (px, py) in [
        (cx + x, cy + y),
        (cx - x, cy + y),
        (cx + x, cy - y),
        (cx - x, cy - y),
        (cx + y, cy + x),
        (cx - y, cy + x),
        (cx + y, cy - x),
        (cx - y, cy - x),
    ] {
        stamp(canvas, cursor, px, py);
    }
}

/// Border-only rectangle centered at `cursor + dir·distance`. Cells across
/// `[-w/2, w/2] × [-h/2, h/2]` are stamped only when they sit on the outer
/// edge of that range.
pub fn draw_rectangle(
    canvas: &mut Canvas,
    cursor: &mut Cursor,
    dx: i64,
    dy: i64,
    distance: i64,
    width: i64,
    height: i64,
    line: usize,
) -> Result<(), RuntimeError> {
    check_direction(dx, dy, line, true)?;
    if distance < 0 {
        return Err(RuntimeError::new(
            line,
            format!("rectangle distance must not be negative, found {distance}"),
        ));
    }
    if width <= 0 || height <= 0 {
        return Err(RuntimeError::new(
            line,
            format!("rectangle sides must be positive, found {width}x{height}"),
        ));
    }

    let cx = offset(cursor.x, dx, distance, line)?;
    let cy = offset(cursor.y, dy, distance, line)?;
    if !canvas.in_bounds(cx, cy) {
        return Err(RuntimeError::new(
            line,
            format!("rectangle center ({cx}, {cy}) is outside the canvas"),
        ));
    }

    let half_w = width / 2;
    let half_h = height / 2;
    for oy in -half_h..=half_h {
        for ox in -half_w..=half_w {
            let on_border = ox == -half_w || ox == half_w || oy == -half_h || oy == half_h;
            if on_border {
                stamp(canvas, cursor, cx + ox, cy + oy);
            }
        }
    }
    cursor.x = cx;
    cursor.y = cy;
    Ok(())
}

/// 4-connected BFS flood fill from the cursor. A no-op when the cursor is
/// off-canvas, the brush is Transparent, or the target already matches the
/// brush color.
pub fn flood_fill(canvas: &mut Canvas, cursor: &Cursor) {
    if cursor.color == Color::Transparent {
        return;
    }
    let Some(target) = canvas.get(cursor.x, cursor.y) else {
        return;
    };
    if target == cursor.color {
        return;
    }

    let mut queue = VecDeque::new();
    let mut visited = HashSet::new();
    queue.push_back((cursor.x, cursor.y));
    visited.insert((cursor.x, cursor.y));

    while let Some((x, y)) = queue.pop_front() {
        canvas.set(x, y, cursor.color);
        for (nx, ny) in [(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)] {
            if canvas.get(nx, ny) == Some(target) && visited.insert((nx, ny)) {
                queue.push_back((nx, ny));
            }
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
