use crate::IdentityKey;

/// Registration and seeding failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
	/// The key is already bound; entries are never overwritten.
	#[error("{registry}: key {key} is already bound to {existing} (rejected {incoming})")]
	DuplicateKey {
		registry: &'static str,
		key: IdentityKey,
		existing: &'static str,
		incoming: &'static str,
	},
	/// A class outside the bound hierarchy was registered under the bound namespace.
	#[error("{registry}: {class} cannot be registered under {key}; it does not derive from {base}")]
	OutsideBoundHierarchy {
		registry: &'static str,
		key: IdentityKey,
		class: &'static str,
		base: &'static str,
	},
	/// The fallback class or the generic base class was registered explicitly.
	#[error("{registry}: {class} is a fallback class and cannot be registered under {key}")]
	RegisteredFallback {
		registry: &'static str,
		key: IdentityKey,
		class: &'static str,
	},
}
