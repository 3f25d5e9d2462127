//! Data models for Gear Tracker

pub mod conflict;
pub mod draft;
pub mod equipment;
pub mod equipment_set;
pub mod membership;
pub mod pagination;
pub mod project;
pub mod project_type;
pub mod set_type;
pub mod user;
pub mod warehouse;

// Re-export commonly used types
pub use conflict::{ConflictingProject, EquipmentConflict};
pub use draft::Draft;
pub use equipment::Equipment;
pub use equipment_set::EquipmentSet;
pub use membership::{Availability, Parent, ParentView};
pub use pagination::{ListQuery, PaginatedResponse, Pagination};
pub use project::{DateRange, Project, ProjectDetails, ProjectSummary};
pub use project_type::ProjectType;
pub use set_type::SetType;
pub use user::{User, UserClaims, UserShort};
pub use warehouse::Warehouse;
