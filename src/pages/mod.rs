mod landing;
mod not_found;
mod topic;

pub use landing::Landing;
pub use not_found::NotFound;
pub use topic::TopicPage;
