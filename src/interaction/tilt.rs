/// Maximum rotation (degrees) at the card edges.
pub const TILT_FACTOR: f64 = 10.0;
pub const HOVER_SCALE: f64 = 1.02;
pub const RESTING_TRANSFORM: &str = "rotateX(0) rotateY(0) scale(1)";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// CSS transform tilting a card towards the pointer.
pub fn tilt_transform(pointer_x: f64, pointer_y: f64, rect: Rect) -> String {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return RESTING_TRANSFORM.to_string();
    }
    // relative position in [-0.5, 0.5]
    let x = (pointer_x - rect.left) / rect.width - 0.5;
    let y = (pointer_y - rect.top) / rect.height - 0.5;
    let rotate_x = -y * TILT_FACTOR;
    let rotate_y = x * TILT_FACTOR;
    format!("rotateX({rotate_x}deg) rotateY({rotate_y}deg) scale({HOVER_SCALE})")
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: Rect = Rect {
        left: 100.0,
        top: 200.0,
        width: 400.0,
        height: 200.0,
    };

    #[test]
    fn test_tilt_at_corners() {
        assert_eq!(
            tilt_transform(500.0, 200.0, CARD),
            "rotateX(5deg) rotateY(5deg) scale(1.02)"
        );
        assert_eq!(
            tilt_transform(100.0, 400.0, CARD),
            "rotateX(-5deg) rotateY(-5deg) scale(1.02)"
        );
    }

    #[test]
    fn test_degenerate_rect_rests() {
        let flat = Rect {
            height: 0.0,
            ..CARD
        };
        assert_eq!(tilt_transform(0.0, 0.0, flat), RESTING_TRANSFORM);
    }
}
