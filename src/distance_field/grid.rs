/// Offset from a cell to the nearest feature pixel found so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offset {
    pub dx: i32,
    pub dy: i32,
}

impl Offset {
    /// The cell is itself a feature pixel.
    pub const INSIDE: Self = Self { dx: 0, dy: 0 };

    /// No feature reached yet.
    ///
    /// Sweeps shift a cell's offset by at most one per visited neighbour, so
    /// an unreached cell drifts by up to the image size on each axis. Each
    /// component stays far above [`MAX_DIMENSION`](super::MAX_DIMENSION)
    /// after that drift, so a drifted sentinel never undercuts a real
    /// distance.
    pub const OUTSIDE: Self = Self {
        dx: 1 << 20,
        dy: 1 << 20,
    };

    #[must_use]
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    /// Squared length, widened so sentinel arithmetic cannot overflow.
    #[must_use]
    pub fn dist_sq(self) -> i64 {
        let dx = i64::from(self.dx);
        let dy = i64::from(self.dy);
        dx * dx + dy * dy
    }
}

/// Closest-feature grid with one cell of padding on every side.
///
/// Cells are addressed with image coordinates; `-1` and `width`/`height`
/// reach the padding, so the sweeps never need bounds checks.
#[derive(Debug, Clone)]
pub(super) struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Offset>,
}

impl Grid {
    pub(super) fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Offset::OUTSIDE; (width + 2) * (height + 2)],
        }
    }

    pub(super) fn width(&self) -> usize {
        self.width
    }

    pub(super) fn height(&self) -> usize {
        self.height
    }

    #[allow(clippy::cast_sign_loss)]
    fn index(&self, x: isize, y: isize) -> usize {
        debug_assert!(x >= -1 && y >= -1);
        (y + 1) as usize * (self.width + 2) + (x + 1) as usize
    }

    pub(super) fn get(&self, x: isize, y: isize) -> Offset {
        self.cells[self.index(x, y)]
    }

    pub(super) fn put(&mut self, x: isize, y: isize, offset: Offset) {
        let i = self.index(x, y);
        self.cells[i] = offset;
    }

    /// Seeds interior cells from `image` (`>= threshold` is a feature), then
    /// mirrors the edge rows into the top/bottom padding and the edge columns,
    /// corners included, into the left/right padding.
    #[allow(clippy::cast_possible_wrap)]
    pub(super) fn seed(&mut self, image: &[u8], threshold: u8) {
        let (w, h) = (self.width as isize, self.height as isize);
        for (y, row) in image.chunks_exact(self.width).enumerate() {
            for (x, &pixel) in row.iter().enumerate() {
                let cell = if pixel >= threshold {
                    Offset::INSIDE
                } else {
                    Offset::OUTSIDE
                };
                self.put(x as isize, y as isize, cell);
            }
        }

        for x in 0..w {
            self.put(x, -1, self.get(x, 0));
            self.put(x, h, self.get(x, h - 1));
        }
        for y in -1..=h {
            self.put(-1, y, self.get(0, y));
            self.put(w, y, self.get(w - 1, y));
        }
    }
}
