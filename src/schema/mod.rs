pub mod registry;
pub mod types;

pub use registry::{expected_header, field_spec, ALLOWED_LOCATIONS, REGISTRY_FIELDS};
pub use types::{Check, FieldKind, FieldSpec, Presence};
