use crate::gallery::lightbox::Direction;

/// Turns a touch-start / touch-end pair into a navigation direction.
#[derive(Debug, Clone, Copy)]
pub struct SwipeTracker {
    threshold: f64,
    start_x: f64,
}

impl SwipeTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            start_x: 0.0,
        }
    }

    pub fn touch_start(&mut self, screen_x: f64) {
        self.start_x = screen_x;
    }

    /// Leftward drag means "next", rightward "previous". Short drags are taps.
    pub fn touch_end(&mut self, screen_x: f64) -> Option<Direction> {
        let diff = self.start_x - screen_x;

        if diff.abs() <= self.threshold {
            return None;
        }
        if diff > 0.0 {
            Some(Direction::Next)
        } else {
            Some(Direction::Prev)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_left_drag_is_next() {
        let mut swipe = SwipeTracker::new(50.0);
        swipe.touch_start(200.0);
        assert_eq!(swipe.touch_end(140.0), Some(Direction::Next));
    }

    #[test]
    fn long_right_drag_is_prev() {
        let mut swipe = SwipeTracker::new(50.0);
        swipe.touch_start(100.0);
        assert_eq!(swipe.touch_end(175.0), Some(Direction::Prev));
    }

    #[test]
    fn short_drag_is_a_tap() {
        let mut swipe = SwipeTracker::new(50.0);
        swipe.touch_start(200.0);
        assert_eq!(swipe.touch_end(170.0), None);
        swipe.touch_start(200.0);
        // exactly at the threshold still doesn't count
        assert_eq!(swipe.touch_end(150.0), None);
    }
}
