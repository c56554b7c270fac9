use std::sync::Arc;

use super::HTML_ELEMENT;
use crate::class::{ElementClass, ElementInit};
use crate::document::Document;
use crate::element::Element;
use crate::error::ConstructError;
use crate::namespace::HTML_NS;
use crate::registry::registry;

/// Fallback for HTML names without a registered class.
pub static HTML_UNKNOWN_ELEMENT: ElementClass =
	ElementClass::subclass("HTMLUnknownElement", &HTML_ELEMENT).with_constructor(construct);

pub fn new(local_name: &str, document: Option<&Arc<Document>>) -> Result<Element, ConstructError> {
	HTML_UNKNOWN_ELEMENT.construct(super::init(Some(local_name), document, None))
}

/// Rejects names registered to another class, then chains to the HTML constructor.
pub fn construct(
	new_target: &'static ElementClass,
	init: ElementInit,
) -> Result<Element, ConstructError> {
	if let Some(local_name) = init.local_name.as_deref() {
		let registry = registry();
		let registered = registry.lookup(local_name, Some(HTML_NS));
		if registry.is_registered(local_name, Some(HTML_NS)) && !std::ptr::eq(registered, new_target)
		{
			return Err(ConstructError::InvalidArgument(format!(
				"cannot create an {} with local name {local_name:?}; that name is registered to {}",
				new_target.name, registered.name
			)));
		}
	}
	super::construct(new_target, init)
}
