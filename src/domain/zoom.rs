//! Usage: Chromium-style zoom level arithmetic for the View menu.

const ZOOM_BASE: f64 = 1.2;
const ZOOM_STEP: f64 = 0.5;
const MIN_ZOOM_FACTOR: f64 = 0.25;
const MAX_ZOOM_FACTOR: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomAction {
    In,
    Out,
    Reset,
}

/// Scale factor for a zoom level (level 0 is 100%).
pub fn factor(level: f64) -> f64 {
    ZOOM_BASE.powf(level)
}

/// Next zoom level; a step that would leave the supported factor range is ignored.
pub fn apply(level: f64, action: ZoomAction) -> f64 {
    let next = match action {
        ZoomAction::In => level + ZOOM_STEP,
        ZoomAction::Out => level - ZOOM_STEP,
        ZoomAction::Reset => return 0.0,
    };

    let next_factor = factor(next);
    if (MIN_ZOOM_FACTOR..=MAX_ZOOM_FACTOR).contains(&next_factor) {
        next
    } else {
        level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_zero_is_unscaled() {
        assert!((factor(0.0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zoom_in_and_out_are_symmetric() {
        let level = apply(apply(0.0, ZoomAction::In), ZoomAction::Out);
        assert!(level.abs() < f64::EPSILON);
    }

    #[test]
    fn zoom_saturates_at_bounds() {
        let mut level = 0.0;
        for _ in 0..100 {
            level = apply(level, ZoomAction::In);
        }
        assert!(factor(level) <= MAX_ZOOM_FACTOR);
        assert_eq!(apply(level, ZoomAction::In), level);

        for _ in 0..200 {
            level = apply(level, ZoomAction::Out);
        }
        assert!(factor(level) >= MIN_ZOOM_FACTOR);
        assert_eq!(apply(level, ZoomAction::Out), level);
    }

    #[test]
    fn reset_returns_to_level_zero() {
        assert_eq!(apply(3.5, ZoomAction::Reset), 0.0);
    }
}
