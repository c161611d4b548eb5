//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod bar_chart;
pub mod footer;
pub mod header;
pub mod info_panel;
pub mod logs;
pub mod map_panel;
pub mod pie_chart;
