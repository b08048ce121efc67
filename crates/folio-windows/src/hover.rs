//! Pointer-proximity curves
//!
//! Targets for the welcome text's variable font weight and the dock's icon
//! magnification. Both fall off with the horizontal distance between the
//! pointer and an element's center; the tween toward the target is left to the
//! renderer.

/// Variable font weight range for one text style
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontWeights {
    /// Weight far from the pointer
    pub min: f64,
    /// Weight directly under the pointer
    pub max: f64,
    /// Weight when the pointer leaves
    pub default: f64,
}

impl FontWeights {
    /// Large welcome title
    pub const TITLE: Self = Self {
        min: 400.0,
        max: 900.0,
        default: 400.0,
    };

    /// Welcome subtitle
    pub const SUBTITLE: Self = Self {
        min: 100.0,
        max: 400.0,
        default: 100.0,
    };

    /// Target weight for a letter `distance` pixels from the pointer
    #[must_use]
    pub fn weight_at(&self, distance: f64) -> f64 {
        let intensity = (-(distance.powi(2)) / 20_000.0).exp();
        self.min + (self.max - self.min) * intensity
    }

    /// Target weights for a row of letter centers
    #[must_use]
    pub fn weights_for(&self, pointer_x: f64, centers: &[f64]) -> Vec<f64> {
        centers
            .iter()
            .map(|center| self.weight_at((pointer_x - center).abs()))
            .collect()
    }
}

/// Dock icon target for a pointer `distance` pixels from its center
///
/// Returns `(scale, lift)`; lift is a negative vertical offset.
#[must_use]
pub fn dock_magnification(distance: f64) -> (f64, f64) {
    let intensity = (-(distance.abs().powf(2.41)) / 20_000.0).exp();
    (1.0 + 0.25 * intensity, -intensity * 15.0)
}
