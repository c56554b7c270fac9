//! The HTML layer: classes bound to the HTML namespace.

pub mod paragraph;
pub mod quote;
pub mod unknown;

use std::sync::Arc;

use elemental_registry::Inferred;

pub use paragraph::HTML_PARAGRAPH_ELEMENT;
pub use quote::HTML_QUOTE_ELEMENT;
pub use unknown::HTML_UNKNOWN_ELEMENT;

use crate::class::{ElementClass, ElementInit, FactoryArgs};
use crate::document::Document;
use crate::element::{self, ELEMENT, Element};
use crate::error::ConstructError;
use crate::namespace::HTML_NS;
use crate::registry::registry;

/// Base of every HTML element class.
pub static HTML_ELEMENT: ElementClass = ElementClass::subclass("HTMLElement", &ELEMENT)
	.with_constructor(construct)
	.with_factory(factory);

/// Constructs an [`HTML_ELEMENT`] such as `section`.
pub fn new(
	local_name: &str,
	document: Option<&Arc<Document>>,
	prefix: Option<&str>,
) -> Result<Element, ConstructError> {
	HTML_ELEMENT.construct(init(Some(local_name), document, prefix))
}

pub(crate) fn init(
	local_name: Option<&str>,
	document: Option<&Arc<Document>>,
	prefix: Option<&str>,
) -> ElementInit {
	ElementInit {
		local_name: local_name.map(str::to_owned),
		namespace: None,
		prefix: prefix.map(str::to_owned),
		document: document.map(Arc::downgrade),
	}
}

fn wrong_namespace(namespace: Option<&str>) -> ConstructError {
	ConstructError::InvalidArgument(format!(
		"HTML elements cannot be created except in the HTML namespace (got {namespace:?})"
	))
}

/// HTML direct constructor: pins the namespace, then chains to [`element::construct`].
///
/// A supplied local name is ASCII-lowercased when the owner document is an HTML document.
pub fn construct(
	new_target: &'static ElementClass,
	mut init: ElementInit,
) -> Result<Element, ConstructError> {
	match init.local_name.take() {
		Some(local_name) => {
			if let Some(other) = init.namespace.as_deref().filter(|ns| *ns != HTML_NS) {
				return Err(wrong_namespace(Some(other)));
			}
			let document = element::resolve_document(init.document.as_ref())?;
			init.local_name = Some(if document.is_html() {
				local_name.to_ascii_lowercase()
			} else {
				local_name
			});
			init.namespace = Some(HTML_NS.to_owned());
		}
		None => {
			// An inferred identity may still name another namespace.
			if let Inferred::One(key) = registry().resolve_identity(new_target) {
				if key.namespace.as_deref() != Some(HTML_NS) {
					return Err(wrong_namespace(key.namespace.as_deref()));
				}
			}
		}
	}

	element::construct(new_target, init)
}

/// HTML factory-dispatch entry point.
pub fn factory(
	class: &'static ElementClass,
	args: FactoryArgs<'_>,
) -> Result<Element, ConstructError> {
	if args.namespace != Some(HTML_NS) {
		return Err(wrong_namespace(args.namespace));
	}
	class.construct(ElementInit::from(args))
}

/// Factory for concrete classes: the local name must be one registered to exactly `class`.
pub fn registered_name_factory(
	class: &'static ElementClass,
	args: FactoryArgs<'_>,
) -> Result<Element, ConstructError> {
	let keys = registry().reverse_lookup(class);
	if !keys.iter().any(|key| key.local_name == args.local_name) {
		let message = if keys.is_empty() {
			format!("{} has no registered local name", class.name)
		} else {
			let names: Vec<String> = keys
				.iter()
				.map(|key| format!("{:?}", key.local_name))
				.collect();
			format!("{} must have local name {}", class.name, names.join(" or "))
		};
		return Err(ConstructError::InvalidArgument(message));
	}
	factory(class, args)
}
