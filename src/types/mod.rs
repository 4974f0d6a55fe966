//! Request and response shapes, one module per resource
//!
//! Field names follow the provider's wire names; Rust names are renamed
//! where the wire name is terse (`instances` becomes `instance_ids`).
//! Empty optional fields are omitted from request bodies.

pub mod eip;
pub mod image;
pub mod instance;
pub mod job;
pub mod lb;
pub mod security_group;
pub mod user_project;
pub mod volume;
pub mod vxnet;
