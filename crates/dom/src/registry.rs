//! The process-wide element registry.

use std::sync::LazyLock;

use elemental_registry::{IdentityRegistry, RegistryError, Roots};

use crate::class::ElementClass;
use crate::element::ELEMENT;
use crate::html::{HTML_ELEMENT, HTML_PARAGRAPH_ELEMENT, HTML_QUOTE_ELEMENT, HTML_UNKNOWN_ELEMENT};
use crate::namespace::HTML_NS;

pub type ElementRegistry = IdentityRegistry<ElementClass>;

/// Built-in HTML-namespace registrations.
static BUILTINS: &[(&str, &ElementClass)] = &[
	("p", &HTML_PARAGRAPH_ELEMENT),
	("q", &HTML_QUOTE_ELEMENT),
	("blockquote", &HTML_QUOTE_ELEMENT),
	("section", &HTML_ELEMENT),
	("aside", &HTML_ELEMENT),
	("article", &HTML_ELEMENT),
	("nav", &HTML_ELEMENT),
	("header", &HTML_ELEMENT),
	("footer", &HTML_ELEMENT),
	("main", &HTML_ELEMENT),
];

static REGISTRY: LazyLock<ElementRegistry> = LazyLock::new(|| match seed() {
	Ok(registry) => registry,
	Err(err) => panic!("built-in element registry is inconsistent: {err}"),
});

/// Fallback classes of the element hierarchy.
pub fn element_roots() -> Roots<ElementClass> {
	Roots {
		generic_base: &ELEMENT,
		bound_namespace: HTML_NS,
		bound_base: &HTML_ELEMENT,
		fallback: &HTML_UNKNOWN_ELEMENT,
	}
}

/// Builds a fresh registry holding only the built-in entries.
pub fn seed() -> Result<ElementRegistry, RegistryError> {
	IdentityRegistry::builder("elements", element_roots())
		.extend(
			BUILTINS
				.iter()
				.map(|&(local_name, class)| (local_name, Some(HTML_NS), class)),
		)
		.build()
}

/// The registry consulted by every constructor and creation method.
pub fn registry() -> &'static ElementRegistry {
	&REGISTRY
}

/// Registers a user-defined class under `(local_name, namespace)`.
///
/// After this call the class can infer its identity when constructed without a local name, and
/// document-level creation methods dispatch to it.
pub fn define_element(
	local_name: &str,
	namespace: Option<&str>,
	class: &'static ElementClass,
) -> Result<(), RegistryError> {
	registry().register(local_name, namespace, class)
}
