//! Identity registry for element classes.
//!
//! # Purpose
//!
//! Maps identity keys (a local name plus an optional namespace) to the class that is allowed to
//! construct elements under that key, and answers the inverse question: which keys were explicitly
//! registered for a given class.
//!
//! # Mental Model
//!
//! 1. **Seeding:** [`IdentityRegistryBuilder`] ingests the built-in entries, applies the
//!    [`DuplicatePolicy`], and checks the table invariants before publishing an
//!    [`IdentityRegistry`].
//! 2. **Consumption:** [`IdentityRegistry::lookup`] never fails. Keys without an explicit entry
//!    fall back to the fallback class inside the bound namespace and to the generic base class
//!    everywhere else.
//! 3. **Extension:** [`IdentityRegistry::register`] adds entries at runtime. Existing keys are
//!    never overwritten.
//!
//! # Invariants
//!
//! - Every class registered under the bound namespace derives from the bound base class.
//!   - Enforced in: [`IdentityRegistry::register`], [`IdentityRegistry::verify_invariants`].
//!   - Tested by: `tests::test_register_rejects_class_outside_bound_hierarchy`,
//!     `tests::test_build_rejects_invalid_seed`
//!   - Failure symptom: Factory dispatch hands a bound-namespace key to a class without the
//!     bound layer's checks.
//!
//! - The fallback class and the generic base class have no explicit keys.
//!   - Enforced in: [`IdentityRegistry::register`].
//!   - Tested by: `tests::test_register_rejects_fallback_roots`
//!   - Failure symptom: Identity inference succeeds for a fallback class.
//!
//! - A key maps to at most one class.
//!   - Enforced in: [`IdentityRegistry::register`], [`IdentityRegistryBuilder::build`].
//!   - Tested by: `tests::test_register_rejects_duplicate_without_overwrite`,
//!     `tests::test_build_panic_policy_panics`
//!   - Failure symptom: A later registration silently redirects an existing key.
//!
//! # Concurrency
//!
//! Tables live behind a single [`parking_lot::RwLock`]: lookups take the read side, registration
//! takes the write side. Nothing here blocks on I/O.

mod class;
mod error;
mod key;
mod policy;
mod registry;

pub use class::RegistryClass;
pub use error::RegistryError;
pub use key::{IdentityKey, normalize_namespace};
pub use policy::DuplicatePolicy;
pub use registry::{IdentityRegistry, IdentityRegistryBuilder, Inferred, Roots};

#[cfg(test)]
mod tests;
