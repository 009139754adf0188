//! Domain Layer
//!
//! Pure build-pipeline logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - EntryPoint, RawOutput, Artifact, Manifest
//! - `value_objects/` - ContentHash, HashLength, BaseUrl
//! - `services/` - Asset naming, HTML generation, HTML reference scanning
//! - `ports/` - Interfaces implemented by the infrastructure layer

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
