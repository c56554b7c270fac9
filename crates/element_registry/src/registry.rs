//! Forward and reverse identity tables.

use std::fmt;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::{DuplicatePolicy, IdentityKey, RegistryClass, RegistryError, normalize_namespace};

/// The fixed classes a registry falls back to.
pub struct Roots<C: 'static> {
	/// Returned by [`IdentityRegistry::lookup`] for unbound keys outside the bound namespace.
	pub generic_base: &'static C,
	/// Namespace whose classes must derive from [`Self::bound_base`].
	pub bound_namespace: &'static str,
	/// Root of the bound hierarchy.
	pub bound_base: &'static C,
	/// Returned by [`IdentityRegistry::lookup`] for unbound keys inside the bound namespace.
	pub fallback: &'static C,
}

impl<C: 'static> Clone for Roots<C> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<C: 'static> Copy for Roots<C> {}

/// Outcome of inferring a class's identity from its explicit registrations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inferred {
	/// The class has no explicit key.
	None,
	/// The class has exactly one key.
	One(IdentityKey),
	/// The class has several keys; callers must pick one.
	Many(Vec<IdentityKey>),
}

type KeyList = SmallVec<[IdentityKey; 2]>;

struct Tables<C: 'static> {
	forward: FxHashMap<IdentityKey, &'static C>,
	/// Keyed by class address; keys kept in registration order.
	reverse: FxHashMap<usize, KeyList>,
}

impl<C: 'static> Default for Tables<C> {
	fn default() -> Self {
		Self {
			forward: FxHashMap::default(),
			reverse: FxHashMap::default(),
		}
	}
}

#[inline]
fn class_addr<C>(class: &C) -> usize {
	std::ptr::from_ref(class) as usize
}

/// Bidirectional mapping between identity keys and classes.
pub struct IdentityRegistry<C: RegistryClass> {
	label: &'static str,
	roots: Roots<C>,
	tables: RwLock<Tables<C>>,
}

impl<C: RegistryClass> fmt::Debug for IdentityRegistry<C> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("IdentityRegistry")
			.field("label", &self.label)
			.field("bound_namespace", &self.roots.bound_namespace)
			.field("entries", &self.len())
			.finish()
	}
}

impl<C: RegistryClass> IdentityRegistry<C> {
	/// Creates an empty registry.
	pub fn new(label: &'static str, roots: Roots<C>) -> Self {
		Self {
			label,
			roots,
			tables: RwLock::new(Tables::default()),
		}
	}

	/// Starts a builder that seeds the registry with built-in entries.
	pub fn builder(label: &'static str, roots: Roots<C>) -> IdentityRegistryBuilder<C> {
		IdentityRegistryBuilder::new(label, roots)
	}

	pub fn label(&self) -> &'static str {
		self.label
	}

	pub fn roots(&self) -> Roots<C> {
		self.roots
	}

	pub fn bound_namespace(&self) -> &'static str {
		self.roots.bound_namespace
	}

	/// Resolves the class for a key. Never fails.
	///
	/// Unbound keys resolve to [`Roots::fallback`] inside the bound namespace and to
	/// [`Roots::generic_base`] everywhere else.
	pub fn lookup(&self, local_name: &str, namespace: Option<&str>) -> &'static C {
		let namespace = normalize_namespace(namespace);
		let key = IdentityKey::new(local_name, namespace);
		if let Some(&class) = self.tables.read().forward.get(&key) {
			tracing::trace!(
				registry = self.label,
				%key,
				class = class.class_name(),
				"identity lookup hit"
			);
			return class;
		}

		let class = if namespace == Some(self.roots.bound_namespace) {
			self.roots.fallback
		} else {
			self.roots.generic_base
		};
		tracing::trace!(
			registry = self.label,
			%key,
			class = class.class_name(),
			"identity lookup fell back"
		);
		class
	}

	/// Returns every key explicitly registered to exactly `class`, in registration order.
	///
	/// Subclasses do not inherit their ancestors' keys.
	pub fn reverse_lookup(&self, class: &C) -> Vec<IdentityKey> {
		self.tables
			.read()
			.reverse
			.get(&class_addr(class))
			.map(|keys| keys.to_vec())
			.unwrap_or_default()
	}

	/// Classifies the explicit keys of `class` as none, one, or many.
	pub fn resolve_identity(&self, class: &C) -> Inferred {
		let tables = self.tables.read();
		match tables.reverse.get(&class_addr(class)).map(|keys| keys.as_slice()) {
			None | Some([]) => Inferred::None,
			Some([key]) => Inferred::One(key.clone()),
			Some(keys) => Inferred::Many(keys.to_vec()),
		}
	}

	/// Returns true iff an explicit entry exists for the key. Fallback resolution does not count.
	pub fn is_registered(&self, local_name: &str, namespace: Option<&str>) -> bool {
		self.tables
			.read()
			.forward
			.contains_key(&IdentityKey::new(local_name, namespace))
	}

	/// Binds a key to `class`.
	///
	/// # Errors
	///
	/// - [`RegistryError::DuplicateKey`] if the key is already bound.
	/// - [`RegistryError::OutsideBoundHierarchy`] if the key is in the bound namespace and
	///   `class` does not derive from the bound base.
	/// - [`RegistryError::RegisteredFallback`] if `class` is one of the fallback roots.
	pub fn register(
		&self,
		local_name: &str,
		namespace: Option<&str>,
		class: &'static C,
	) -> Result<(), RegistryError> {
		let key = IdentityKey::new(local_name, namespace);
		let mut tables = self.tables.write();
		let result = self.insert(&mut tables, key, class);
		if let Err(err) = &result {
			tracing::warn!(registry = self.label, error = %err, "registration rejected");
		}
		result
	}

	/// Re-checks the class constraints over the whole table.
	pub fn verify_invariants(&self) -> Result<(), RegistryError> {
		for (key, class) in self.entries() {
			self.check_class(&key, class)?;
		}
		Ok(())
	}

	/// Returns all explicit entries sorted by key.
	pub fn entries(&self) -> Vec<(IdentityKey, &'static C)> {
		let mut entries: Vec<_> = self
			.tables
			.read()
			.forward
			.iter()
			.map(|(key, &class)| (key.clone(), class))
			.collect();
		entries.sort_by(|a, b| a.0.cmp(&b.0));
		entries
	}

	/// Returns the number of explicit entries.
	pub fn len(&self) -> usize {
		self.tables.read().forward.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tables.read().forward.is_empty()
	}

	fn insert(
		&self,
		tables: &mut Tables<C>,
		key: IdentityKey,
		class: &'static C,
	) -> Result<(), RegistryError> {
		if let Some(&existing) = tables.forward.get(&key) {
			return Err(RegistryError::DuplicateKey {
				registry: self.label,
				key,
				existing: existing.class_name(),
				incoming: class.class_name(),
			});
		}
		self.check_class(&key, class)?;

		tracing::debug!(
			registry = self.label,
			%key,
			class = class.class_name(),
			"registered identity"
		);
		tables
			.reverse
			.entry(class_addr(class))
			.or_default()
			.push(key.clone());
		tables.forward.insert(key, class);
		Ok(())
	}

	fn check_class(&self, key: &IdentityKey, class: &'static C) -> Result<(), RegistryError> {
		if std::ptr::eq(class, self.roots.fallback) || std::ptr::eq(class, self.roots.generic_base)
		{
			return Err(RegistryError::RegisteredFallback {
				registry: self.label,
				key: key.clone(),
				class: class.class_name(),
			});
		}
		if key.namespace.as_deref() == Some(self.roots.bound_namespace)
			&& !class.derives_from(self.roots.bound_base)
		{
			return Err(RegistryError::OutsideBoundHierarchy {
				registry: self.label,
				key: key.clone(),
				class: class.class_name(),
				base: self.roots.bound_base.class_name(),
			});
		}
		Ok(())
	}
}

/// Seeds an [`IdentityRegistry`] with built-in entries.
pub struct IdentityRegistryBuilder<C: RegistryClass> {
	label: &'static str,
	roots: Roots<C>,
	entries: Vec<(IdentityKey, &'static C)>,
	policy: DuplicatePolicy,
}

impl<C: RegistryClass> IdentityRegistryBuilder<C> {
	pub fn new(label: &'static str, roots: Roots<C>) -> Self {
		Self {
			label,
			roots,
			entries: Vec::new(),
			policy: DuplicatePolicy::for_build(),
		}
	}

	pub fn push(mut self, local_name: &str, namespace: Option<&str>, class: &'static C) -> Self {
		self.entries
			.push((IdentityKey::new(local_name, namespace), class));
		self
	}

	pub fn extend<'a>(
		mut self,
		entries: impl IntoIterator<Item = (&'a str, Option<&'a str>, &'static C)>,
	) -> Self {
		self.entries.extend(
			entries
				.into_iter()
				.map(|(name, ns, class)| (IdentityKey::new(name, ns), class)),
		);
		self
	}

	pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
		self.policy = policy;
		self
	}

	/// Inserts the seeded entries in order and verifies the table invariants.
	///
	/// # Panics
	///
	/// Panics on a duplicate key when the policy is [`DuplicatePolicy::Panic`].
	pub fn build(self) -> Result<IdentityRegistry<C>, RegistryError> {
		let registry = IdentityRegistry::new(self.label, self.roots);
		{
			let mut tables = registry.tables.write();
			for (key, class) in self.entries {
				if let Err(err) = registry.insert(&mut tables, key, class) {
					if self.policy == DuplicatePolicy::Panic
						&& matches!(err, RegistryError::DuplicateKey { .. })
					{
						panic!("duplicate registry key: {err}");
					}
					return Err(err);
				}
			}
		}
		registry.verify_invariants()?;

		tracing::debug!(
			registry = registry.label,
			entries = registry.len(),
			"identity registry seeded"
		);
		Ok(registry)
	}
}
