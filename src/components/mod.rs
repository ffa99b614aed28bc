//! UI components.

pub mod circle_graph;
