mod axis_label_format;
mod bar_line_chart;
mod bar_line_render_frame_builder;
mod chart_tree;
mod frame_style;
mod layout_helpers;
mod style;
mod style_environment;
mod style_json_contract;

pub use bar_line_chart::BarLineChart;
pub use bar_line_render_frame_builder::build_bar_line_render_frame;
pub use chart_tree::{
    AxisNode, BarLineChartTree, BarsNode, ChartElementKind, GridNode, GridTone, LabelsNode,
    LegendNode, LineNode, LinePaint, LinePathNode, LinearGradient, PlotNode,
};
pub use frame_style::FrameStyle;
pub use style::{
    BarLineChartStyle, BarLineChartStyleOptions, DEFAULT_STROKE_WIDTH, DrawingMode, StyleProfile,
};
pub use style_environment::{ChartStyle, StyleEnvironment};
pub use style_json_contract::{STYLE_OPTIONS_JSON_SCHEMA_V1, StyleOptionsJsonContractV1};
