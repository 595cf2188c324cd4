use tracing::debug;

use crate::math::{
    point_to_segment_perpendicular, project_to_ndc, Matrix4, Point2, Vector2, Vector3, TOLERANCE,
};

use super::{Spline, MAX_CONTROL_POINTS, MIN_CONTROL_POINTS};

/// Mouse button that produced a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickButton {
    /// Selects a control point, then moves it.
    Left,
    /// Deletes the control point under the cursor or inserts a new one.
    Right,
}

/// Editing state of a spline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// No control point is selected.
    #[default]
    Idle,
    /// The control point at this index follows subsequent left clicks.
    PointSelected(usize),
}

/// A click on the sphere, as seen by the spline editor.
///
/// `position` must already lie on the spline's working radius; the editor
/// stores it verbatim.
#[derive(Debug, Clone, Copy)]
pub struct Click {
    /// Which button was pressed.
    pub button: ClickButton,
    /// Click position in object space, on the working radius.
    pub position: Vector3,
    /// Click position in normalized device coordinates.
    pub ndc: Point2,
    /// Half extent of the NDC box a control point must fall in to be hit.
    pub tolerance: Vector2,
    /// Projection from object space to clip space.
    pub object_to_ndc: Matrix4,
}

impl Click {
    /// Creates a click, deriving its NDC position from `object_to_ndc`.
    ///
    /// Returns `None` when `position` projects behind the eye.
    #[must_use]
    pub fn at(
        button: ClickButton,
        position: Vector3,
        tolerance: Vector2,
        object_to_ndc: Matrix4,
    ) -> Option<Self> {
        let ndc = project_to_ndc(&object_to_ndc, &position)?;
        Some(Self {
            button,
            position,
            ndc,
            tolerance,
            object_to_ndc,
        })
    }

    /// Whether `point` projects inside this click's tolerance box.
    fn hits(&self, point: &Vector3) -> bool {
        project_to_ndc(&self.object_to_ndc, point).is_some_and(|ndc| {
            let diff = self.ndc - ndc;
            diff.x.abs() <= self.tolerance.x && diff.y.abs() <= self.tolerance.y
        })
    }
}

/// Result of an edit on a spline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// A control point became selected.
    Selected(usize),
    /// The selected control point moved; the curve was rebuilt.
    Moved(usize),
    /// A control point was removed; the curve was rebuilt.
    Deleted(usize),
    /// A control point was inserted at this index; the curve was rebuilt.
    Inserted(usize),
    /// The edit would break the control point count limits and was ignored.
    Rejected,
    /// Nothing was close enough to the click.
    Missed,
}

impl EditOutcome {
    /// Whether the control and curve points changed and need re-uploading.
    #[must_use]
    pub fn is_modified(self) -> bool {
        matches!(
            self,
            Self::Moved(_) | Self::Deleted(_) | Self::Inserted(_)
        )
    }
}

impl Spline {
    /// Applies a click to the spline.
    ///
    /// - Left click while idle selects the nearest control point, if it is
    ///   within the click's NDC tolerance.
    /// - Left click with a selection moves the selected point to the click.
    ///   The selection stays until [`Spline::deselect`].
    /// - Right click deletes the control point under the cursor or, when there
    ///   is none, inserts a point into the closest edge of the projected
    ///   control polygon. It always clears the selection.
    ///
    /// Edits that would leave fewer than [`MIN_CONTROL_POINTS`] or more than
    /// [`MAX_CONTROL_POINTS`] points return [`EditOutcome::Rejected`] and leave
    /// the spline untouched.
    pub fn process_click(&mut self, click: &Click) -> EditOutcome {
        let outcome = match click.button {
            ClickButton::Left => self.left_click(click),
            ClickButton::Right => {
                self.deselect();
                self.right_click(click)
            }
        };
        debug!(button = ?click.button, ?outcome, "spline click");
        outcome
    }

    fn left_click(&mut self, click: &Click) -> EditOutcome {
        match self.selection {
            Selection::PointSelected(index) => self.move_control_point(index, click.position),
            Selection::Idle => match self.hit_control_point(click) {
                Some(index) => {
                    self.selection = Selection::PointSelected(index);
                    EditOutcome::Selected(index)
                }
                None => EditOutcome::Missed,
            },
        }
    }

    fn right_click(&mut self, click: &Click) -> EditOutcome {
        if let Some(index) = self.hit_control_point(click) {
            return self.delete_control_point(index);
        }
        match self.closest_edge(click) {
            Some(index) => self.insert_control_point(index, click.position),
            None => EditOutcome::Missed,
        }
    }

    /// Moves the control point at `index` to `position` and rebuilds.
    ///
    /// Returns [`EditOutcome::Rejected`] if `index` is out of range or
    /// `position` has no direction (zero-length or not finite).
    pub fn move_control_point(&mut self, index: usize, position: Vector3) -> EditOutcome {
        if !is_placeable(&position) {
            debug!(index, "move to unusable position rejected");
            return EditOutcome::Rejected;
        }
        let Some(point) = self.control_points.get_mut(index) else {
            debug!(index, "move of missing control point ignored");
            return EditOutcome::Rejected;
        };
        *point = position;
        self.rebuild();
        EditOutcome::Moved(index)
    }

    /// Inserts `position` so it becomes control point `index`, then rebuilds.
    ///
    /// Clears the selection. Rejected when the spline is already at
    /// [`MAX_CONTROL_POINTS`], `index` is past the end, or `position` has no
    /// direction.
    pub fn insert_control_point(&mut self, index: usize, position: Vector3) -> EditOutcome {
        if self.control_points.len() >= MAX_CONTROL_POINTS
            || index > self.control_points.len()
            || !is_placeable(&position)
        {
            debug!(index, count = self.control_points.len(), "insert rejected");
            return EditOutcome::Rejected;
        }
        self.deselect();
        self.control_points.insert(index, position);
        self.rebuild();
        EditOutcome::Inserted(index)
    }

    /// Removes control point `index`, then rebuilds.
    ///
    /// Clears the selection. Rejected when the spline is already at
    /// [`MIN_CONTROL_POINTS`] or `index` is out of range.
    pub fn delete_control_point(&mut self, index: usize) -> EditOutcome {
        if self.control_points.len() <= MIN_CONTROL_POINTS || index >= self.control_points.len() {
            debug!(index, count = self.control_points.len(), "delete rejected");
            return EditOutcome::Rejected;
        }
        self.deselect();
        self.control_points.remove(index);
        self.rebuild();
        EditOutcome::Deleted(index)
    }

    /// Nearest control point to the click in object space, kept only if it
    /// also lies within the click's tolerance box on screen. A point that is
    /// close on the sphere but far on screen (e.g. on the far side) is not hit.
    fn hit_control_point(&self, click: &Click) -> Option<usize> {
        let mut candidate = None;
        let mut min_dist = f64::INFINITY;
        for (i, p) in self.control_points.iter().enumerate() {
            let dist = (click.position - p).norm();
            if dist < min_dist {
                min_dist = dist;
                candidate = Some(i);
            }
        }
        candidate.filter(|&i| click.hits(&self.control_points[i]))
    }

    /// Index at which a point clicked near the projected control polygon
    /// should be inserted: just after the earlier end of the closest edge.
    ///
    /// Edges whose perpendicular foot misses the segment, or with an end
    /// that cannot be projected, are ignored.
    fn closest_edge(&self, click: &Click) -> Option<usize> {
        let ndc: Vec<Option<Point2>> = self
            .control_points
            .iter()
            .map(|p| project_to_ndc(&click.object_to_ndc, p))
            .collect();
        let n = ndc.len();

        let mut candidate = None;
        let mut min_dist = f64::INFINITY;
        for i in 0..n {
            let (Some(a), Some(b)) = (ndc[i], ndc[(i + 1) % n]) else {
                continue;
            };
            let Some(dist) = point_to_segment_perpendicular(&click.ndc, &a, &b) else {
                continue;
            };
            if dist < min_dist {
                min_dist = dist;
                candidate = Some(i + 1);
            }
        }
        candidate
    }
}

/// A control point must keep a direction from the sphere centre.
fn is_placeable(position: &Vector3) -> bool {
    position.iter().all(|c| c.is_finite()) && position.norm() > TOLERANCE
}
