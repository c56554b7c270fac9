use std::fmt;

/// Identity of an element: local name plus namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IdentityKey {
	pub local_name: String,
	/// `None` is the null namespace. Never `Some("")`.
	pub namespace: Option<String>,
}

impl IdentityKey {
	/// Creates a key, normalizing an empty namespace to `None`.
	pub fn new(local_name: impl Into<String>, namespace: Option<&str>) -> Self {
		Self {
			local_name: local_name.into(),
			namespace: normalize_namespace(namespace).map(str::to_owned),
		}
	}

	/// Returns true if this key equals `(local_name, namespace)` after namespace normalization.
	pub fn matches(&self, local_name: &str, namespace: Option<&str>) -> bool {
		self.local_name == local_name && self.namespace.as_deref() == normalize_namespace(namespace)
	}
}

impl fmt::Display for IdentityKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.namespace {
			Some(ns) => write!(f, "({:?}, {:?})", self.local_name, ns),
			None => write!(f, "({:?}, null)", self.local_name),
		}
	}
}

/// Maps the empty namespace to the null namespace.
#[inline]
pub fn normalize_namespace(namespace: Option<&str>) -> Option<&str> {
	namespace.filter(|ns| !ns.is_empty())
}
