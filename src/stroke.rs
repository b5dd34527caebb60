use egui::{Color32, Pos2};
use serde::{Deserialize, Serialize};

/// A freehand line: a color and the ordered points the pointer passed through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    color: Color32,
    points: Vec<Pos2>,
}

impl Stroke {
    pub fn new(color: Color32, points: Vec<Pos2>) -> Self {
        Self { color, points }
    }

    // Starts a stroke from the pointer-down position
    pub fn starting_at(color: Color32, start: Pos2) -> Self {
        Self::new(color, vec![start])
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn last_point(&self) -> Option<Pos2> {
        self.points.last().copied()
    }

    /// Appends a point and returns the segment that became visible.
    pub(crate) fn push_point(&mut self, point: Pos2) -> (Pos2, Pos2) {
        let from = self.last_point().unwrap_or(point);
        self.points.push(point);
        (from, point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn push_point_reports_the_new_segment() {
        let mut stroke = Stroke::starting_at(Color32::RED, pos2(1.0, 2.0));
        assert_eq!(stroke.push_point(pos2(3.0, 4.0)), (pos2(1.0, 2.0), pos2(3.0, 4.0)));
        assert_eq!(stroke.points().len(), 2);
        assert_eq!(stroke.last_point(), Some(pos2(3.0, 4.0)));
    }

    #[test]
    fn first_point_of_an_empty_stroke_is_a_dot() {
        let mut stroke = Stroke::new(Color32::BLUE, Vec::new());
        let p = pos2(5.0, 5.0);
        assert_eq!(stroke.push_point(p), (p, p));
    }
}
