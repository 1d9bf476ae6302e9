mod dashboard;
mod landing;
mod preview;

pub use dashboard::Dashboard;
pub use landing::Landing;
pub use preview::Preview;
