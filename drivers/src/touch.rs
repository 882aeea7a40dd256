use heapless::Vec;

/// Upper bound on the points a single sample can carry.
pub const MAX_TOUCH_POINTS: usize = 5;

/// One sensed contact in screen coordinates.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchPoint {
    pub x: u16,
    pub y: u16,
    /// Contact size; zero marks an invalid point.
    pub size: u16,
    pub id: u8,
}

/// Lifecycle of a touch peripheral.
///
/// `Uninitialized -> Awake` on a successful [`Touch::init`], then
/// `Awake <-> Asleep`. A failed init ends in `Failed`, which is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TouchState {
    Uninitialized,
    Awake,
    Asleep,
    Failed,
}

impl TouchState {
    /// True once init succeeded, whether sampling or not.
    pub fn is_initialized(self) -> bool {
        matches!(self, TouchState::Awake | TouchState::Asleep)
    }
}

/// Snapshot of the points sensed by one sample.
///
/// Iterating consumes the snapshot; take a new sample to read again.
#[derive(Debug, Default)]
pub struct TouchPoints {
    points: Vec<TouchPoint, MAX_TOUCH_POINTS>,
    next: usize,
}

impl TouchPoints {
    pub const fn new() -> Self {
        Self {
            points: Vec::new(),
            next: 0,
        }
    }

    /// Appends a point, handing it back when the snapshot is full.
    pub fn push(&mut self, point: TouchPoint) -> Result<(), TouchPoint> {
        self.points.push(point)
    }

    /// True when no unread point is left.
    pub fn is_empty(&self) -> bool {
        self.next >= self.points.len()
    }
}

impl Iterator for TouchPoints {
    type Item = TouchPoint;

    fn next(&mut self) -> Option<Self::Item> {
        let point = self.points.get(self.next).copied()?;
        self.next += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.points.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TouchPoints {}

/// Touch capability expected by the display device.
///
/// Implementations adapt one board specific touch peripheral. All calls are
/// synchronous and return after a single instantaneous sample at most.
pub trait Touch {
    type Error;

    /// One time bring up of the peripheral. A failure is terminal.
    fn init(&mut self) -> Result<(), Self::Error>;

    /// Resume sampling after [`Touch::sleep`].
    fn wakeup(&mut self) -> Result<(), Self::Error>;

    /// Stop sampling; reads return no points until woken.
    fn sleep(&mut self) -> Result<(), Self::Error>;

    /// Samples the currently touched points, at most `max_points` of them.
    fn touch_raw(&mut self, max_points: usize) -> Result<TouchPoints, Self::Error>;

    fn state(&self) -> TouchState;
}

/// Geometry and bus settings of a touch panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchConfig {
    pub x_min: u16,
    pub x_max: u16,
    pub y_min: u16,
    pub y_max: u16,
    /// Quarter turns between the sensor and the panel, `0..=3`.
    pub offset_rotation: u8,
    pub i2c_address: u8,
    /// Time to wait before trusting a released interrupt line.
    pub debounce_ms: u32,
}

impl TouchConfig {
    /// Maps raw sensor coordinates onto the panel.
    pub fn transform(&self, x: u16, y: u16) -> (u16, u16) {
        let (mut x, mut y) = (x, y);
        for step in 1..=(self.offset_rotation % 4) {
            let end = if step % 2 == 1 { self.x_max } else { self.y_max };
            let rotated_y = end.saturating_sub(x);
            x = y;
            y = rotated_y;
        }
        (
            x.clamp(self.x_min, self.x_max),
            y.clamp(self.y_min, self.y_max),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: TouchConfig = TouchConfig {
        x_min: 0,
        x_max: 239,
        y_min: 0,
        y_max: 239,
        offset_rotation: 0,
        i2c_address: 0x2E,
        debounce_ms: 1,
    };

    fn point(x: u16, y: u16) -> TouchPoint {
        TouchPoint { x, y, size: 1, id: 0 }
    }

    #[test]
    fn test_touch_points_iterate_once() {
        let mut points = TouchPoints::new();
        points.push(point(1, 2)).unwrap();
        points.push(point(3, 4)).unwrap();
        assert_eq!(points.len(), 2);

        assert_eq!(points.next(), Some(point(1, 2)));
        assert_eq!(points.len(), 1);
        assert_eq!(points.next(), Some(point(3, 4)));
        assert!(points.is_empty());
        assert_eq!(points.next(), None);
        assert_eq!(points.next(), None);
    }

    #[test]
    fn test_touch_points_reject_overflow() {
        let mut points = TouchPoints::new();
        for i in 0..MAX_TOUCH_POINTS as u16 {
            points.push(point(i, i)).unwrap();
        }
        assert_eq!(points.push(point(99, 99)), Err(point(99, 99)));
        assert_eq!(points.count(), MAX_TOUCH_POINTS);
    }

    #[test]
    fn test_empty_snapshot() {
        let mut points = TouchPoints::default();
        assert!(points.is_empty());
        assert_eq!(points.next(), None);
    }

    #[test]
    fn test_state_is_initialized() {
        assert!(!TouchState::Uninitialized.is_initialized());
        assert!(TouchState::Awake.is_initialized());
        assert!(TouchState::Asleep.is_initialized());
        assert!(!TouchState::Failed.is_initialized());
    }

    #[test]
    fn test_transform_without_rotation() {
        assert_eq!(CONFIG.transform(10, 20), (10, 20));
    }

    #[test]
    fn test_transform_quarter_turns() {
        let mut config = CONFIG;
        config.offset_rotation = 1;
        assert_eq!(config.transform(10, 20), (20, 229));

        config.offset_rotation = 2;
        assert_eq!(config.transform(10, 20), (229, 219));

        config.offset_rotation = 3;
        assert_eq!(config.transform(10, 20), (219, 10));

        config.offset_rotation = 4;
        assert_eq!(config.transform(10, 20), (10, 20));
    }

    #[test]
    fn test_transform_clamps_to_panel() {
        let config = TouchConfig {
            x_min: 5,
            y_max: 200,
            ..CONFIG
        };
        assert_eq!(config.transform(0, 240), (5, 200));
    }
}
