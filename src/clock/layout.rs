/// Radii of one annular ring, in view-box units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    pub inner: f64,
    pub center: f64,
    pub outer: f64,
}

impl RingGeometry {
    pub fn width(&self) -> f64 {
        self.outer - self.inner
    }
}

/// Packs `total` concentric rings between `inner_start` and `outer_bound`, each separated
/// from the next by `gap`.
///
/// `total` must be at least 2. The configuration layer rejects anything smaller before a
/// layout is ever built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingLayout {
    pub inner_start: f64,
    pub outer_bound: f64,
    pub gap: f64,
    pub total: usize,
}

impl RingLayout {
    pub fn new(inner_start: f64, outer_bound: f64, gap: f64, total: usize) -> Self {
        Self {
            inner_start,
            outer_bound,
            gap,
            total,
        }
    }

    /// Distance between the starts of two neighbouring rings.
    pub fn interval(&self) -> f64 {
        (self.outer_bound - self.inner_start) / (self.total - 1) as f64
    }

    pub fn ring_width(&self) -> f64 {
        self.interval() - self.gap
    }

    /// Geometry of the ring at 1-based `ordinal`.
    pub fn geometry(&self, ordinal: usize) -> RingGeometry {
        debug_assert!(
            (1..=self.total).contains(&ordinal),
            "ring ordinal {ordinal} outside 1..={}",
            self.total
        );

        let interval = self.interval();
        let width = interval - self.gap;
        let start = self.inner_start + (ordinal - 1) as f64 * interval;

        RingGeometry {
            inner: start,
            center: start + width / 2.0,
            outer: start + width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn face_layout() -> RingLayout {
        // seconds disc of 50 plus a 5 gap, out to a face of 300, seven rings in total
        RingLayout::new(55.0, 300.0, 5.0, 7)
    }

    #[test]
    fn test_first_ring_starts_at_inner_start() {
        let g = face_layout().geometry(1);
        assert!((g.inner - 55.0).abs() < EPS);
        let interval = 245.0 / 6.0;
        assert!((g.outer - (55.0 + interval - 5.0)).abs() < EPS);
        assert!((g.center - (g.inner + g.outer) / 2.0).abs() < EPS);
    }

    #[test]
    fn test_radii_are_ordered_within_each_ring() {
        for total in 2..12 {
            let layout = RingLayout::new(20.0, 400.0, 3.0, total);
            for ordinal in 1..=total {
                let g = layout.geometry(ordinal);
                assert!(g.inner < g.center, "{total}/{ordinal}");
                assert!(g.center < g.outer, "{total}/{ordinal}");
            }
        }
    }

    #[test]
    fn test_neighbours_are_separated_by_exactly_the_gap() {
        let layout = face_layout();
        for ordinal in 1..layout.total {
            let this = layout.geometry(ordinal);
            let next = layout.geometry(ordinal + 1);
            assert!((next.inner - this.outer - layout.gap).abs() < EPS);
        }
    }

    #[test]
    fn test_radii_increase_with_ordinal() {
        let layout = face_layout();
        let rings: Vec<_> = (1..=layout.total).map(|o| layout.geometry(o)).collect();
        for pair in rings.windows(2) {
            assert!(pair[1].inner > pair[0].inner);
            assert!(pair[1].center > pair[0].center);
            assert!(pair[1].outer > pair[0].outer);
        }
    }

    #[test]
    fn test_last_face_ring_stays_inside_the_face() {
        let layout = face_layout();
        let last = layout.geometry(layout.total - 1);
        assert!((last.outer - (300.0 - 5.0)).abs() < EPS);
    }

    #[test]
    fn test_two_ring_layout_spans_the_whole_budget() {
        let layout = RingLayout::new(10.0, 110.0, 10.0, 2);
        assert!((layout.interval() - 100.0).abs() < EPS);
        assert!((layout.geometry(1).width() - 90.0).abs() < EPS);
    }
}
