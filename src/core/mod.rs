pub mod bar_series;
pub mod line_series;
pub mod primitives;
pub mod scale;
pub mod types;

pub use bar_series::{BarGeometry, project_value_bars, slot_centers};
pub use line_series::project_line_path;
pub use scale::ValueScale;
pub use types::{ChartDataPoint, Legend, PixelRect, Viewport};
