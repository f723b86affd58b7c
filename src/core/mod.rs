pub mod bubble_scale;
pub mod calendar_grid;
pub mod defaults;
pub mod project;
pub mod store;
pub mod timeline_window;
pub mod types;
pub mod value_axis;
pub mod windowing;

pub use bubble_scale::BubbleScale;
pub use calendar_grid::{CalendarGrid, days_in_month};
pub use defaults::{DEFAULT_GRID_YEAR, default_projects};
pub use project::{MAX_BUSINESS_VALUE, MAX_COMPLEXITY, Project};
pub use store::ProjectStore;
pub use timeline_window::TimelineWindow;
pub use types::{CanvasPoint, Viewport};
pub use value_axis::ValueAxis;
pub use windowing::{
    ValueWindow, projects_in_value_window, projects_in_window, projects_with_visible_service,
};
