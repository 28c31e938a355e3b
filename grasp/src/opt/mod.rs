pub mod construction;
pub mod grasp;
