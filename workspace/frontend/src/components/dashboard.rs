pub mod header;
pub mod insights;
pub mod view;

pub use view::Dashboard;
