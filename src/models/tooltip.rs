use super::geo::ScreenPoint;
use super::marker::is_hot_score;

/// Hover tooltip, recomputed on every pointer move/leave
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TooltipState {
    pub visible: bool,
    pub screen_x: f64,
    pub screen_y: f64,
    pub label: String,
    pub score: u8,
    pub is_hot_opportunity: bool,
}

impl TooltipState {
    pub fn hidden() -> Self {
        Self::default()
    }

    /// Tooltip for a hovered site, offset from the pointer so it never sits under the cursor
    pub fn at_pointer(point: ScreenPoint, offset: (f64, f64), label: &str, score: u8) -> Self {
        Self {
            visible: true,
            screen_x: point.x + offset.0,
            screen_y: point.y + offset.1,
            label: label.to_string(),
            score,
            is_hot_opportunity: is_hot_score(score),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_above_right() {
        let tooltip = TooltipState::at_pointer(ScreenPoint::new(100.0, 100.0), (14.0, -14.0), "Kitimat", 91);
        assert!(tooltip.visible);
        assert_eq!((tooltip.screen_x, tooltip.screen_y), (114.0, 86.0));
        assert!(tooltip.is_hot_opportunity);
    }

    #[test]
    fn hidden_is_not_visible() {
        assert!(!TooltipState::hidden().visible);
    }
}
