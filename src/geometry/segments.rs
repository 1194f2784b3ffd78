//! Stroke segments of a path: points `(0, 1)`, `(2, 3)`, ... are joined.
//! A trailing odd point stays unconnected.

use crate::data::Point;

pub fn segments(path: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    path.chunks_exact(2).map(|pair| (pair[0], pair[1]))
}

pub fn segment_count(path: &[Point]) -> usize {
    path.len() / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairs_consecutive_points() {
        let path = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ];
        let pairs: Vec<_> = segments(&path).collect();
        assert_eq!(
            pairs,
            vec![
                (Point::new(0.0, 0.0), Point::new(1.0, 0.0)),
                (Point::new(1.0, 1.0), Point::new(0.0, 1.0)),
            ]
        );
    }

    #[test]
    fn test_odd_point_is_left_unconnected() {
        let path = [Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(1.0, 1.0)];
        assert_eq!(segment_count(&path), 1);
        assert_eq!(segments(&path).count(), 1);
        assert_eq!(segments(&[Point::default()]).count(), 0);
        assert_eq!(segments(&[]).count(), 0);
    }
}
