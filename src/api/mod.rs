mod axis_labels;
mod behavior;
mod bubble_drag_controller;
mod bubble_projection;
mod bubble_resize_controller;
mod engine;
mod engine_accessors;
mod engine_config;
mod engine_core;
mod engine_init;
mod engine_snapshot;
mod filter_controller;
mod import_controller;
mod palette_controller;
mod plugin_dispatch;
mod plugin_registry;
mod render_coordinator;
mod render_style;
mod roadmap_behavior;
mod roadmap_model;
mod roadmap_presentation;
mod roadmap_runtime;
mod scene_builder;
mod service_palette;
mod snapshot_controller;
mod store_controller;
mod timeline_brush_controller;
mod validation;
mod value_brush_controller;
mod window_controller;

pub use axis_labels::AxisLabel;
pub use behavior::GestureInputBehavior;
pub use bubble_drag_controller::BubbleDragCommit;
pub use bubble_projection::BubbleGeometry;
pub use bubble_resize_controller::BubbleResizeCommit;
pub use engine::RoadmapEngine;
pub use engine_config::RoadmapEngineConfig;
pub use engine_snapshot::EngineSnapshot;
pub use render_style::RenderStyle;
pub use service_palette::ServicePalette;
