pub mod chart_canvas;
pub mod input_text;
pub mod select;
