use crate::geometry::point::Point;
use crate::utils::number::Number;

/// Axis-aligned bounds as min/max corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundRect<T: Number> {
    pub left: T,
    pub top: T,
    pub right: T,
    pub bottom: T,
}

impl<T: Number> BoundRect<T> {
    pub fn new(left: T, top: T, right: T, bottom: T) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Bounds of every point across `paths`, or `None` when there are no points.
    pub fn from_paths<'a, I>(paths: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Vec<Point<T>>>,
        T: 'a,
    {
        let mut result: Option<Self> = None;
        for point in paths.into_iter().flatten() {
            result = Some(match result {
                None => Self::new(point.x, point.y, point.x, point.y),
                Some(rect) => Self::new(
                    rect.left.min_num(point.x),
                    rect.top.min_num(point.y),
                    rect.right.max_num(point.x),
                    rect.bottom.max_num(point.y),
                ),
            });
        }
        result
    }

    pub fn width(&self) -> T {
        self.right - self.left
    }

    pub fn height(&self) -> T {
        self.bottom - self.top
    }

    pub fn contains(&self, other: &Self) -> bool {
        other.left >= self.left
            && other.right <= self.right
            && other.top >= self.top
            && other.bottom <= self.bottom
    }

    /// Grows every side by `margin`.
    pub fn inflate(&self, margin: T) -> Self {
        Self::new(
            self.left - margin,
            self.top - margin,
            self.right + margin,
            self.bottom + margin,
        )
    }

    /// Corners wound opposite to positive-area paths.
    pub fn to_negative_path(&self) -> Vec<Point<T>> {
        vec![
            Point::new(self.left, self.bottom),
            Point::new(self.right, self.bottom),
            Point::new(self.right, self.top),
            Point::new(self.left, self.top),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_paths() {
        let paths = vec![
            vec![Point::new(0i64, 5), Point::new(10, -2)],
            vec![Point::new(-3i64, 1)],
        ];
        let rect = BoundRect::from_paths(&paths);
        assert_eq!(rect, Some(BoundRect::new(-3, -2, 10, 5)));
        assert_eq!(BoundRect::<i64>::from_paths(&Vec::new()), None);
    }

    #[test]
    fn test_inflate_and_contains() {
        let rect = BoundRect::new(0i64, 0, 10, 10);
        let outer = rect.inflate(10);
        assert_eq!(outer, BoundRect::new(-10, -10, 20, 20));
        assert!(outer.contains(&rect));
        assert!(!rect.contains(&outer));
        assert_eq!(outer.width(), 30);
    }
}
