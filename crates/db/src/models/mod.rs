//! Domain model structs and DTOs.
//!
//! Each entity submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for partial updates

pub mod assignment;
pub mod collaborator;
pub mod project;
pub mod stats;
pub mod status;
pub mod task;
