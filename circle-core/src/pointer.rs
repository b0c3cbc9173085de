use crate::geometry::{Point, Stroke};

/// Press/move/release tracking for a single pointer.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Pointer {
    #[default]
    Idle,
    Drawing(Stroke),
}

impl Pointer {
    pub fn new() -> Self {
        Pointer::Idle
    }

    /// Begin a new stroke at `p`. An unfinished stroke is discarded.
    pub fn start(&mut self, p: Point) {
        *self = Pointer::Drawing(Stroke::with_start(p));
    }

    /// Record `p` while drawing. Returns false when idle.
    pub fn move_to(&mut self, p: Point) -> bool {
        match self {
            Pointer::Drawing(stroke) => {
                stroke.push(p);
                true
            }
            Pointer::Idle => false,
        }
    }

    /// Finish the gesture, handing back the stroke if one was in progress.
    pub fn end(&mut self) -> Option<Stroke> {
        match std::mem::take(self) {
            Pointer::Drawing(stroke) => Some(stroke),
            Pointer::Idle => None,
        }
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self, Pointer::Drawing(_))
    }

    /// Points of the stroke in progress, empty when idle.
    pub fn current(&self) -> &[Point] {
        match self {
            Pointer::Drawing(stroke) => stroke.points(),
            Pointer::Idle => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_are_ignored_when_idle() {
        let mut p = Pointer::new();
        assert!(!p.move_to(Point::new(1.0, 1.0)));
        assert!(!p.is_drawing());
        assert!(p.current().is_empty());
        assert_eq!(p.end(), None);
    }

    #[test]
    fn full_gesture() {
        let mut p = Pointer::new();
        p.start(Point::new(0.0, 0.0));
        assert!(p.is_drawing());
        assert!(p.move_to(Point::new(1.0, 0.0)));
        assert!(p.move_to(Point::new(1.0, 1.0)));
        assert_eq!(p.current().len(), 3);

        let stroke = p.end().unwrap();
        assert_eq!(stroke.len(), 3);
        assert_eq!(stroke.first(), Some(Point::new(0.0, 0.0)));
        assert_eq!(p, Pointer::Idle);
        // second release, e.g. mouseout after mouseup
        assert_eq!(p.end(), None);
    }

    #[test]
    fn restart_discards_unfinished_stroke() {
        let mut p = Pointer::new();
        p.start(Point::new(0.0, 0.0));
        p.move_to(Point::new(5.0, 5.0));
        p.start(Point::new(9.0, 9.0));
        assert_eq!(p.current(), &[Point::new(9.0, 9.0)]);
    }
}
