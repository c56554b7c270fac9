//! The generic `Element` layer.
//!
//! [`construct`] is the root of every constructor chain: it infers or validates the identity key
//! against the element registry, checks the prefix invariants, and allocates the element.

use std::fmt;
use std::sync::{Arc, Weak};

use elemental_registry::{Inferred, normalize_namespace};

use crate::attributes::AttributeMap;
use crate::class::{ElementClass, ElementInit, FactoryArgs};
use crate::document::{Document, ambient_document};
use crate::error::ConstructError;
use crate::namespace::{HTML_NS, XML_NS, XML_PREFIX, XMLNS_NS, XMLNS_PREFIX};
use crate::node::NodeId;
use crate::registry::registry;

/// Root of the element hierarchy. Any identity key, namespace unconstrained.
pub static ELEMENT: ElementClass = ElementClass {
	name: "Element",
	parent: None,
	construct: Some(construct),
	factory: Some(factory),
};

/// Constructs a generic [`ELEMENT`].
pub fn new(init: ElementInit) -> Result<Element, ConstructError> {
	ELEMENT.construct(init)
}

/// A constructed element. Its identity is fixed at construction.
pub struct Element {
	id: NodeId,
	class: &'static ElementClass,
	local_name: String,
	namespace: Option<String>,
	prefix: Option<String>,
	document: Weak<Document>,
	attributes: AttributeMap,
}

impl Element {
	pub fn node_id(&self) -> NodeId {
		self.id
	}

	/// The class this element was constructed as.
	pub fn class(&self) -> &'static ElementClass {
		self.class
	}

	/// Returns true if the element's class is `class` or derives from it.
	pub fn is_instance_of(&self, class: &ElementClass) -> bool {
		self.class.is_subclass_of(class)
	}

	pub fn local_name(&self) -> &str {
		&self.local_name
	}

	pub fn namespace_uri(&self) -> Option<&str> {
		self.namespace.as_deref()
	}

	pub fn prefix(&self) -> Option<&str> {
		self.prefix.as_deref()
	}

	/// `prefix:local_name`, or the local name when there is no prefix.
	pub fn qualified_name(&self) -> String {
		match &self.prefix {
			Some(prefix) => format!("{prefix}:{}", self.local_name),
			None => self.local_name.clone(),
		}
	}

	/// The qualified name, uppercased for HTML elements owned by an HTML document.
	pub fn tag_name(&self) -> String {
		let qualified = self.qualified_name();
		let html_document = self
			.owner_document()
			.is_some_and(|document| document.is_html());
		if html_document && self.namespace.as_deref() == Some(HTML_NS) {
			qualified.to_ascii_uppercase()
		} else {
			qualified
		}
	}

	/// The owner document, if it is still alive.
	pub fn owner_document(&self) -> Option<Arc<Document>> {
		self.document.upgrade()
	}

	pub fn attributes(&self) -> &AttributeMap {
		&self.attributes
	}

	pub fn attributes_mut(&mut self) -> &mut AttributeMap {
		&mut self.attributes
	}
}

impl fmt::Debug for Element {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Element")
			.field("id", &self.id)
			.field("class", &self.class.name)
			.field("local_name", &self.local_name)
			.field("namespace", &self.namespace)
			.field("prefix", &self.prefix)
			.field("attributes", &self.attributes.len())
			.finish()
	}
}

/// Resolves the owner document, defaulting to the ambient document.
pub(crate) fn resolve_document(
	document: Option<&Weak<Document>>,
) -> Result<Arc<Document>, ConstructError> {
	match document {
		None => Ok(Arc::clone(ambient_document())),
		Some(weak) => weak.upgrade().ok_or_else(|| {
			ConstructError::InvalidArgument("the owner document is no longer alive".to_string())
		}),
	}
}

/// Prefix and reserved-name invariants shared by every construction path.
pub(crate) fn check_prefix(
	local_name: &str,
	namespace: Option<&str>,
	prefix: Option<&str>,
) -> Result<(), ConstructError> {
	if prefix.is_some() && namespace.is_none() {
		return Err(ConstructError::Namespace(
			"if a prefix is given then a namespace is also required".to_string(),
		));
	}
	if prefix == Some(XML_PREFIX) && namespace != Some(XML_NS) {
		return Err(ConstructError::Namespace(
			"if the prefix is \"xml\" then the namespace must be the XML namespace".to_string(),
		));
	}
	let xmlns = (local_name == XMLNS_PREFIX && prefix.is_none()) || prefix == Some(XMLNS_PREFIX);
	if xmlns && namespace != Some(XMLNS_NS) {
		return Err(ConstructError::Namespace(
			"if the prefix or qualified name is \"xmlns\" then the namespace must be the XMLNS namespace"
				.to_string(),
		));
	}
	Ok(())
}

/// Generic direct constructor.
///
/// With no local name the identity is inferred from the keys registered to `new_target`. With a
/// local name, the registry must resolve the key to exactly `new_target`.
pub fn construct(
	new_target: &'static ElementClass,
	init: ElementInit,
) -> Result<Element, ConstructError> {
	let document = resolve_document(init.document.as_ref())?;
	let ElementInit {
		local_name,
		namespace,
		prefix,
		..
	} = init;
	let registry = registry();

	let (local_name, namespace) = match local_name {
		None => {
			if namespace.is_some() {
				return Err(ConstructError::InvalidArgument(format!(
					"{} infers its namespace from its registration; do not pass one without a local name",
					new_target.name
				)));
			}
			match registry.resolve_identity(new_target) {
				Inferred::None => {
					return Err(ConstructError::UnregisteredType {
						class: new_target.name,
					});
				}
				Inferred::Many(keys) => {
					return Err(ConstructError::AmbiguousType {
						class: new_target.name,
						keys: keys.len(),
					});
				}
				Inferred::One(key) => {
					check_prefix(&key.local_name, key.namespace.as_deref(), prefix.as_deref())?;
					(key.local_name, key.namespace)
				}
			}
		}
		Some(local_name) => {
			let namespace = normalize_namespace(namespace.as_deref()).map(str::to_owned);
			check_prefix(&local_name, namespace.as_deref(), prefix.as_deref())?;

			let expected = registry.lookup(&local_name, namespace.as_deref());
			if !std::ptr::eq(expected, new_target) {
				return Err(ConstructError::WrongConstructor {
					local_name,
					namespace,
					attempted: new_target.name,
					expected: expected.name,
				});
			}
			(local_name, namespace)
		}
	};

	let element = Element {
		id: NodeId::allocate(),
		class: new_target,
		local_name,
		namespace,
		prefix,
		document: Arc::downgrade(&document),
		attributes: AttributeMap::new(),
	};
	tracing::trace!(
		class = new_target.name,
		local_name = element.local_name.as_str(),
		namespace = element.namespace.as_deref(),
		id = element.id.as_u64(),
		"constructed element"
	);
	Ok(element)
}

/// Generic factory-dispatch entry point: construct `class` with the given arguments.
pub fn factory(
	class: &'static ElementClass,
	args: FactoryArgs<'_>,
) -> Result<Element, ConstructError> {
	class.construct(ElementInit::from(args))
}
