//! Component identity and location types.
//!
//! A [`ComponentLocation`] is the opaque handle the engine passes in when a
//! chain component starts executing. The tracker only ever inspects the
//! stable (namespace, name) pair it exposes; everything else rides along
//! untouched.

mod key;
mod location;

pub use key::ComponentKey;
pub use location::{ComponentIdentifier, ComponentLocation};
