use egui::Pos2;

use super::{ShapeKind, regions_for};

/// Index of the first region whose bounding box contains `pos`.
///
/// Regions are tested in index order, so the lower index wins should two boxes
/// ever share an edge.
pub fn hit_test(shape: ShapeKind, pos: Pos2) -> Option<usize> {
    regions_for(shape)
        .iter()
        .find(|region| region.bounds().contains(pos))
        .map(|region| region.index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn region_centers_hit_their_own_index() {
        for shape in ShapeKind::ALL {
            for region in regions_for(shape) {
                assert_eq!(hit_test(shape, region.center()), Some(region.index));
            }
        }
    }

    #[test]
    fn gaps_and_margins_miss() {
        // Between region 0 (ends at x=80) and region 1 (starts at x=100).
        assert_eq!(hit_test(ShapeKind::Square, pos2(90.0, 150.0)), None);
        // Above every nail.
        assert_eq!(hit_test(ShapeKind::Oval, pos2(200.0, 10.0)), None);
        // Below every nail.
        assert_eq!(hit_test(ShapeKind::Stiletto, pos2(200.0, 290.0)), None);
    }

    #[test]
    fn stiletto_edges_are_narrower_than_square() {
        // Inside the square box of region 2 but outside the narrowed stiletto box.
        let pos = pos2(177.0, 150.0);
        assert_eq!(hit_test(ShapeKind::Square, pos), Some(2));
        assert_eq!(hit_test(ShapeKind::Stiletto, pos), None);
    }
}
