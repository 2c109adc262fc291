//! Domain value objects and types.
//!
//! Type-safe wrappers for domain concepts. Value objects validate at
//! construction time so invalid identifiers cannot be represented.

pub mod contact_id;
pub mod errors;

pub use contact_id::ContactId;
pub use errors::ValidationError;
