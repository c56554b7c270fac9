use std::sync::{Arc, LazyLock};

use crate::class::FactoryArgs;
use crate::element::Element;
use crate::error::ConstructError;
use crate::html::HTML_ELEMENT;
use crate::name::{ExtractedName, is_valid_name, validate_and_extract};
use crate::namespace::HTML_NS;
use crate::node::NodeId;
use crate::registry::registry;

/// Whether names are ASCII-lowercased by [`Document::create_element`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
	/// Canonicalizing: names are lowercased.
	Html,
	/// Names are kept as given.
	Xml,
}

/// The container that owns elements.
#[derive(Debug)]
pub struct Document {
	id: NodeId,
	kind: DocumentKind,
}

static AMBIENT: LazyLock<Arc<Document>> = LazyLock::new(Document::new_html);

/// Default owner for elements constructed without a document. Lives for the whole process.
pub fn ambient_document() -> &'static Arc<Document> {
	&AMBIENT
}

impl Document {
	pub fn new(kind: DocumentKind) -> Arc<Self> {
		Arc::new(Self {
			id: NodeId::allocate(),
			kind,
		})
	}

	pub fn new_html() -> Arc<Self> {
		Self::new(DocumentKind::Html)
	}

	pub fn new_xml() -> Arc<Self> {
		Self::new(DocumentKind::Xml)
	}

	pub fn node_id(&self) -> NodeId {
		self.id
	}

	pub fn kind(&self) -> DocumentKind {
		self.kind
	}

	pub fn is_html(&self) -> bool {
		self.kind == DocumentKind::Html
	}

	/// Creates an HTML element by local name.
	///
	/// Unlike direct construction, the name must match the XML `Name` production.
	pub fn create_element(self: &Arc<Self>, local_name: &str) -> Result<Element, ConstructError> {
		if !is_valid_name(local_name) {
			return Err(ConstructError::InvalidCharacter(format!(
				"the argument {local_name:?} does not match the Name production"
			)));
		}

		let local_name = if self.is_html() {
			local_name.to_ascii_lowercase()
		} else {
			local_name.to_owned()
		};

		let class = registry().lookup(&local_name, Some(HTML_NS));
		debug_assert!(
			class.is_subclass_of(&HTML_ELEMENT),
			"{} is registered in the HTML namespace but does not derive from HTMLElement",
			class.name
		);
		class.create(FactoryArgs {
			local_name: &local_name,
			namespace: Some(HTML_NS),
			prefix: None,
			document: self,
		})
	}

	/// Creates an element from a namespace and qualified name.
	pub fn create_element_ns(
		self: &Arc<Self>,
		namespace: Option<&str>,
		qualified_name: &str,
	) -> Result<Element, ConstructError> {
		let ExtractedName {
			namespace,
			prefix,
			local_name,
		} = validate_and_extract(namespace, qualified_name)?;

		let class = registry().lookup(&local_name, namespace.as_deref());
		class.create(FactoryArgs {
			local_name: &local_name,
			namespace: namespace.as_deref(),
			prefix: prefix.as_deref(),
			document: self,
		})
	}
}
