pub mod landing;
pub mod not_found;
pub mod quiz;
pub mod recommendations;
pub mod results;
pub mod topic;
