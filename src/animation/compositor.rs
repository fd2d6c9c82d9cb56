use bevy_math::Vec3;

// External line collaborator. The host renders a connected strip from the
// submitted points; the animator only guarantees index order.
pub trait LineSink {
    fn set_point_count(&mut self, count: usize);
    fn set_position(&mut self, index: usize, point: Vec3);
    fn set_width(&mut self, start: f32, end: f32);
}

// Forward the composed pose, one point per index in head-to-tail order.
pub fn submit_line(
    points: &[Vec3],
    lag_offsets: &[Vec3],
    thickness: f32,
    sink: &mut dyn LineSink,
) {
    for (i, (point, offset)) in points.iter().zip(lag_offsets.iter()).enumerate() {
        sink.set_position(i, *point + *offset);
    }
    sink.set_width(thickness, thickness);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSink {
        count: usize,
        positions: Vec<(usize, Vec3)>,
        width: (f32, f32),
    }

    impl LineSink for RecordingSink {
        fn set_point_count(&mut self, count: usize) {
            self.count = count;
        }
        fn set_position(&mut self, index: usize, point: Vec3) {
            self.positions.push((index, point));
        }
        fn set_width(&mut self, start: f32, end: f32) {
            self.width = (start, end);
        }
    }

    #[test]
    fn submits_summed_points_in_index_order() {
        let points = vec![Vec3::new(0.0, 1.0, 0.0), Vec3::new(1.0, -1.0, 0.0)];
        let lag = vec![Vec3::new(0.0, 0.5, 0.0), Vec3::new(0.0, 0.25, 0.0)];
        let mut sink = RecordingSink::default();
        sink.set_point_count(points.len());
        submit_line(&points, &lag, 0.4, &mut sink);
        assert_eq!(sink.count, 2);
        assert_eq!(sink.positions.len(), 2);
        assert_eq!(sink.positions[0], (0, Vec3::new(0.0, 1.5, 0.0)));
        assert_eq!(sink.positions[1], (1, Vec3::new(1.0, -0.75, 0.0)));
        assert_eq!(sink.width, (0.4, 0.4));
    }
}
