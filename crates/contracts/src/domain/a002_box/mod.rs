pub mod aggregate;
pub mod dto;
pub mod size_category;

pub use aggregate::BoxRecord;
pub use dto::GetBoxesResponse;
pub use size_category::{partition, BoxView, Partition};
