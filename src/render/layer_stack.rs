use serde::{Deserialize, Serialize};

/// Drawing layers of a combined chart, back to front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartLayerKind {
    Grid,
    Bars,
    Line,
    Labels,
    Axis,
    Legend,
}

impl ChartLayerKind {
    /// Canonical back-to-front order: the grid sits behind the bars and the
    /// line overlays the bars in the same coordinate space.
    pub const CANONICAL_ORDER: [Self; 6] = [
        Self::Grid,
        Self::Bars,
        Self::Line,
        Self::Labels,
        Self::Axis,
        Self::Legend,
    ];
}
