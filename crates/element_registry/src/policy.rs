/// How [`IdentityRegistryBuilder::build`](crate::IdentityRegistryBuilder::build) treats two
/// seeded entries that claim the same key.
///
/// Runtime registration is unaffected: [`IdentityRegistry::register`](crate::IdentityRegistry::register)
/// always reports a duplicate as an error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
	/// Panic with a detailed error message.
	Panic,
	/// Abort the build with [`RegistryError::DuplicateKey`](crate::RegistryError::DuplicateKey).
	#[default]
	Reject,
}

impl DuplicatePolicy {
	/// Returns the appropriate policy based on build configuration.
	#[inline]
	pub fn for_build() -> Self {
		if cfg!(debug_assertions) {
			DuplicatePolicy::Panic
		} else {
			DuplicatePolicy::Reject
		}
	}
}
