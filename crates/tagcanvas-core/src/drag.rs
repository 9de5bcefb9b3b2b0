//! Press/move/release bookkeeping for drag-to-move.

use kurbo::{Point, Vec2};
use std::fmt;

/// The last press position and the latest pointer position.
///
/// The displacement only exists once both have been seen.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragState {
    start: Option<Point>,
    current: Option<Point>,
}

impl DragState {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Record a press. The press position also becomes the current one, so
    /// a release without motion yields a zero displacement.
    pub fn start(&mut self, position: Point) {
        self.start = Some(position);
        self.current = Some(position);
    }

    /// Record pointer motion.
    pub fn update(&mut self, position: Point) {
        self.current = Some(position);
    }

    /// Forget both positions.
    pub fn reset(&mut self) {
        self.start = None;
        self.current = None;
    }

    pub fn start_position(&self) -> Option<Point> {
        self.start
    }

    pub fn current_position(&self) -> Option<Point> {
        self.current
    }

    pub fn is_started(&self) -> bool {
        self.start.is_some()
    }

    /// `current - start`, when both are recorded.
    pub fn displacement(&self) -> Option<Vec2> {
        Some(self.current? - self.start?)
    }
}

/// Renders as `[x0, y0, x1, y1]` with `none` for missing values.
impl fmt::Display for DragState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut values = Vec::with_capacity(4);
        for point in [self.start, self.current] {
            match point {
                Some(p) => {
                    values.push(p.x.to_string());
                    values.push(p.y.to_string());
                }
                None => {
                    values.push("none".to_string());
                    values.push("none".to_string());
                }
            }
        }
        write!(f, "[{}]", values.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_has_no_displacement() {
        let drag = DragState::empty();
        assert!(drag.displacement().is_none());
        assert_eq!(drag.to_string(), "[none, none, none, none]");
    }

    #[test]
    fn test_motion_without_press() {
        let mut drag = DragState::empty();
        drag.update(Point::new(4.0, 5.0));
        assert!(drag.displacement().is_none());
        assert_eq!(drag.to_string(), "[none, none, 4, 5]");
    }

    #[test]
    fn test_press_release_in_place() {
        let mut drag = DragState::empty();
        drag.start(Point::new(10.0, 10.0));
        assert_eq!(drag.displacement(), Some(Vec2::ZERO));
    }

    #[test]
    fn test_displacement() {
        let mut drag = DragState::empty();
        drag.start(Point::new(10.0, 20.0));
        drag.update(Point::new(15.0, 12.5));
        assert_eq!(drag.displacement(), Some(Vec2::new(5.0, -7.5)));
        assert_eq!(drag.to_string(), "[10, 20, 15, 12.5]");

        drag.reset();
        assert!(!drag.is_started());
        assert!(drag.displacement().is_none());
    }
}
