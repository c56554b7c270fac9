//! Element class descriptors.
//!
//! A class is a `static` [`ElementClass`]. Identity is the descriptor's address, so a subclass is
//! declared by pointing `parent` at another static. Behaviour is attached through two optional hooks,
//! each inherited from the nearest ancestor that sets it:
//!
//! - [`ConstructFn`]: the direct constructor, invoked with the class being instantiated as
//!   `new_target`.
//! - [`FactoryFn`]: the factory-dispatch entry point used by document-level creation methods.

use std::fmt;
use std::sync::{Arc, Weak};

use elemental_registry::RegistryClass;

use crate::document::Document;
use crate::element::{self, Element};
use crate::error::ConstructError;

/// Direct constructor of a class layer.
pub type ConstructFn =
	fn(new_target: &'static ElementClass, init: ElementInit) -> Result<Element, ConstructError>;

/// Factory-dispatch entry point of a class layer.
pub type FactoryFn =
	fn(class: &'static ElementClass, args: FactoryArgs<'_>) -> Result<Element, ConstructError>;

/// Descriptor for an element class.
pub struct ElementClass {
	pub name: &'static str,
	pub parent: Option<&'static ElementClass>,
	/// `None` inherits the parent's constructor.
	pub construct: Option<ConstructFn>,
	/// `None` inherits the parent's factory.
	pub factory: Option<FactoryFn>,
}

impl ElementClass {
	/// Declares a subclass of `parent` that inherits both hooks.
	pub const fn subclass(name: &'static str, parent: &'static ElementClass) -> Self {
		Self {
			name,
			parent: Some(parent),
			construct: None,
			factory: None,
		}
	}

	pub const fn with_constructor(self, construct: ConstructFn) -> Self {
		Self {
			construct: Some(construct),
			..self
		}
	}

	pub const fn with_factory(self, factory: FactoryFn) -> Self {
		Self {
			factory: Some(factory),
			..self
		}
	}

	/// Iterates over `self` and its ancestors, nearest first.
	pub fn ancestors(&'static self) -> impl Iterator<Item = &'static ElementClass> {
		std::iter::successors(Some(self), |class| class.parent)
	}

	/// Returns true if `self` is `ancestor` or derives from it.
	pub fn is_subclass_of(&self, ancestor: &ElementClass) -> bool {
		RegistryClass::derives_from(self, ancestor)
	}

	/// Resolved direct constructor.
	pub fn constructor(&'static self) -> ConstructFn {
		self.ancestors()
			.find_map(|class| class.construct)
			.unwrap_or(element::construct)
	}

	/// Resolved factory-dispatch entry point.
	pub fn factory(&'static self) -> FactoryFn {
		self.ancestors()
			.find_map(|class| class.factory)
			.unwrap_or(element::factory)
	}

	/// Runs this class's direct constructor with `self` as the class under construction.
	pub fn construct(&'static self, init: ElementInit) -> Result<Element, ConstructError> {
		(self.constructor())(self, init)
	}

	/// Runs this class's factory-dispatch entry point.
	pub fn create(&'static self, args: FactoryArgs<'_>) -> Result<Element, ConstructError> {
		tracing::trace!(
			class = self.name,
			local_name = args.local_name,
			namespace = args.namespace,
			"factory dispatch"
		);
		(self.factory())(self, args)
	}
}

impl RegistryClass for ElementClass {
	fn class_name(&self) -> &'static str {
		self.name
	}

	fn parent(&self) -> Option<&'static Self> {
		self.parent
	}
}

impl PartialEq for ElementClass {
	fn eq(&self, other: &Self) -> bool {
		std::ptr::eq(self, other)
	}
}

impl Eq for ElementClass {}

impl fmt::Debug for ElementClass {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ElementClass")
			.field("name", &self.name)
			.field("parent", &self.parent.map(|parent| parent.name))
			.finish()
	}
}

impl fmt::Display for ElementClass {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name)
	}
}

/// Arguments to a direct constructor. Every field is optional.
#[derive(Debug, Clone, Default)]
pub struct ElementInit {
	pub local_name: Option<String>,
	pub namespace: Option<String>,
	pub prefix: Option<String>,
	/// `None` selects the ambient document.
	pub document: Option<Weak<Document>>,
}

impl ElementInit {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn local_name(mut self, local_name: impl Into<String>) -> Self {
		self.local_name = Some(local_name.into());
		self
	}

	pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
		self.namespace = Some(namespace.into());
		self
	}

	pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = Some(prefix.into());
		self
	}

	pub fn document(mut self, document: &Arc<Document>) -> Self {
		self.document = Some(Arc::downgrade(document));
		self
	}
}

/// Arguments to a factory-dispatch entry point.
#[derive(Debug, Clone, Copy)]
pub struct FactoryArgs<'a> {
	pub local_name: &'a str,
	pub namespace: Option<&'a str>,
	pub prefix: Option<&'a str>,
	pub document: &'a Arc<Document>,
}

impl From<FactoryArgs<'_>> for ElementInit {
	fn from(args: FactoryArgs<'_>) -> Self {
		Self {
			local_name: Some(args.local_name.to_owned()),
			namespace: args.namespace.map(str::to_owned),
			prefix: args.prefix.map(str::to_owned),
			document: Some(Arc::downgrade(args.document)),
		}
	}
}
