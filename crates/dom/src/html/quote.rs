use std::sync::Arc;

use super::{HTML_ELEMENT, registered_name_factory};
use crate::class::ElementClass;
use crate::document::Document;
use crate::element::Element;
use crate::error::ConstructError;

/// `<q>` and `<blockquote>`. Callers must say which.
pub static HTML_QUOTE_ELEMENT: ElementClass =
	ElementClass::subclass("HTMLQuoteElement", &HTML_ELEMENT).with_factory(registered_name_factory);

pub fn new(
	local_name: &str,
	document: Option<&Arc<Document>>,
	prefix: Option<&str>,
) -> Result<Element, ConstructError> {
	HTML_QUOTE_ELEMENT.construct(super::init(Some(local_name), document, prefix))
}
