use std::sync::Arc;

use super::{HTML_ELEMENT, registered_name_factory};
use crate::class::ElementClass;
use crate::document::Document;
use crate::element::Element;
use crate::error::ConstructError;

/// `<p>`. Registered under a single key, so its local name is implied.
pub static HTML_PARAGRAPH_ELEMENT: ElementClass =
	ElementClass::subclass("HTMLParagraphElement", &HTML_ELEMENT)
		.with_factory(registered_name_factory);

pub fn new(
	document: Option<&Arc<Document>>,
	prefix: Option<&str>,
) -> Result<Element, ConstructError> {
	HTML_PARAGRAPH_ELEMENT.construct(super::init(None, document, prefix))
}
