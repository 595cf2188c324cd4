use super::grid::{Grid, Offset};

/// Lane count of one batched comparison.
const LANES: usize = 4;

/// Positions of the four candidates relative to the current cell, stored
/// lane-major (all x offsets, then all y offsets) like a vector register.
/// Lane 0 is the cell visited just before in the sweep, whose value is
/// carried instead of re-read.
struct Pattern {
    dx: [i32; LANES],
    dy: [i32; LANES],
}

/// Top-to-bottom, left-to-right: left, upper-left, above, upper-right.
const DOWN_RIGHT: Pattern = Pattern {
    dx: [-1, -1, 0, 1],
    dy: [0, -1, -1, -1],
};

/// Bottom-to-top, right-to-left: right, lower-right, below, lower-left.
const UP_LEFT: Pattern = Pattern {
    dx: [1, 1, 0, -1],
    dy: [0, 1, 1, 1],
};

/// Runs both propagation passes over a seeded grid.
///
/// Each pass visits one row at a time: a primary sweep with the four-way
/// batch, then a corrective sweep back along the same row with only the
/// horizontal neighbour.
#[allow(clippy::cast_possible_wrap)]
pub(super) fn propagate(grid: &mut Grid) {
    let (w, h) = (grid.width() as isize, grid.height() as isize);

    for y in 0..h {
        let mut carried = grid.get(-1, y);
        for x in 0..w {
            carried = batch_compare(grid, carried, x, y, &DOWN_RIGHT);
        }
        let mut carried = grid.get(w, y);
        for x in (0..w).rev() {
            carried = single_compare(grid, carried, x, y, 1, 0);
        }
    }

    for y in (0..h).rev() {
        let mut carried = grid.get(w, y);
        for x in (0..w).rev() {
            carried = batch_compare(grid, carried, x, y, &UP_LEFT);
        }
        let mut carried = grid.get(-1, y);
        for x in 0..w {
            carried = single_compare(grid, carried, x, y, -1, 0);
        }
    }
}

/// Offsets every candidate by its neighbour-to-cell vector and keeps the
/// first lane that strictly beats the cell's current value. Returns the
/// cell's value afterwards, which the sweep carries to the next cell.
fn batch_compare(grid: &mut Grid, carried: Offset, x: isize, y: isize, pattern: &Pattern) -> Offset {
    let current = grid.get(x, y);

    let mut dx = [carried.dx; LANES];
    let mut dy = [carried.dy; LANES];
    for lane in 1..LANES {
        let neighbour = grid.get(
            x + pattern.dx[lane] as isize,
            y + pattern.dy[lane] as isize,
        );
        dx[lane] = neighbour.dx;
        dy[lane] = neighbour.dy;
    }

    let mut dist = [0_i64; LANES];
    for lane in 0..LANES {
        dx[lane] += pattern.dx[lane];
        dy[lane] += pattern.dy[lane];
        dist[lane] = Offset::new(dx[lane], dy[lane]).dist_sq();
    }

    let mut best = current.dist_sq();
    let mut winner = None;
    for (lane, &d) in dist.iter().enumerate() {
        if d < best {
            best = d;
            winner = Some(lane);
        }
    }

    match winner {
        Some(lane) => {
            let offset = Offset::new(dx[lane], dy[lane]);
            grid.put(x, y, offset);
            offset
        }
        None => current,
    }
}

fn single_compare(grid: &mut Grid, carried: Offset, x: isize, y: isize, ox: i32, oy: i32) -> Offset {
    let current = grid.get(x, y);
    let candidate = Offset::new(carried.dx + ox, carried.dy + oy);
    if candidate.dist_sq() < current.dist_sq() {
        grid.put(x, y, candidate);
        candidate
    } else {
        current
    }
}
