#![forbid(unsafe_code)]

//! Scroll-driven parallax layers.
//!
//! Each decorative layer moves by `scroll * coefficient` on each axis.
//! Different coefficients give the layers different apparent depths.

/// Coefficients for one layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxLayer {
    pub coefficient_x: f64,
    pub coefficient_y: f64,
}

impl ParallaxLayer {
    #[must_use]
    pub const fn new(coefficient_x: f64, coefficient_y: f64) -> Self {
        Self {
            coefficient_x,
            coefficient_y,
        }
    }

    /// Displacement at the given scroll offset.
    #[must_use]
    pub fn offset(&self, scroll: f64) -> LayerOffset {
        LayerOffset {
            dx: scroll * self.coefficient_x,
            dy: scroll * self.coefficient_y,
        }
    }
}

/// A layer's displacement in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayerOffset {
    pub dx: f64,
    pub dy: f64,
}

/// The full set of parallax layers, back to front.
#[derive(Debug, Clone, PartialEq)]
pub struct ParallaxField {
    layers: Vec<ParallaxLayer>,
}

impl Default for ParallaxField {
    fn default() -> Self {
        Self::new(vec![
            ParallaxLayer::new(0.1, 0.2),
            ParallaxLayer::new(-0.15, 0.1),
            ParallaxLayer::new(0.05, -0.15),
        ])
    }
}

impl ParallaxField {
    #[must_use]
    pub fn new(layers: Vec<ParallaxLayer>) -> Self {
        Self { layers }
    }

    #[must_use]
    pub fn layers(&self) -> &[ParallaxLayer] {
        &self.layers
    }

    /// Offsets for every layer at the given scroll position.
    #[must_use]
    pub fn offsets(&self, scroll: f64) -> Vec<LayerOffset> {
        self.layers.iter().map(|layer| layer.offset(scroll)).collect()
    }
}
