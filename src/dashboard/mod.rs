//! Dashboard session and render model

pub mod session;
pub mod view;

pub use session::Session;
pub use view::{DashboardView, Render, RenderSettings};
