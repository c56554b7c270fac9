//! Element classes and their construction chain.
//!
//! Every element is created either directly, through a class's constructor
//! ([`ElementClass::construct`]), or indirectly, through a document-level creation method that
//! resolves a class in the element registry and invokes its factory-dispatch entry point
//! ([`ElementClass::create`]). Both paths end in [`element::construct`], which checks the identity
//! key against the registry before the element exists.
//!
//! # Hierarchy
//!
//! ```text
//! Element                      any key
//! └── HTMLElement              HTML namespace only
//!     ├── HTMLUnknownElement   HTML names with no registration
//!     ├── HTMLParagraphElement ("p", HTML)
//!     ├── HTMLQuoteElement     ("q", HTML), ("blockquote", HTML)
//!     └── user classes         whatever they are registered under
//! ```
//!
//! # User-defined classes
//!
//! ```ignore
//! use elemental_dom::{ElementClass, ElementInit, HTML_ELEMENT, HTML_NS, define_element};
//!
//! static CUSTOM: ElementClass = ElementClass::subclass("CustomElement", &HTML_ELEMENT);
//!
//! define_element("custom-el", Some(HTML_NS), &CUSTOM)?;
//! let el = CUSTOM.construct(ElementInit::new())?; // ("custom-el", HTML)
//! ```

pub mod attributes;
pub mod class;
pub mod document;
pub mod element;
pub mod error;
pub mod html;
pub mod name;
pub mod namespace;
pub mod node;
pub mod registry;

pub use attributes::{Attr, AttributeMap};
pub use class::{ConstructFn, ElementClass, ElementInit, FactoryArgs, FactoryFn};
pub use document::{Document, DocumentKind, ambient_document};
pub use element::{ELEMENT, Element};
pub use elemental_registry::{IdentityKey, Inferred, RegistryError};
pub use error::ConstructError;
pub use html::{HTML_ELEMENT, HTML_PARAGRAPH_ELEMENT, HTML_QUOTE_ELEMENT, HTML_UNKNOWN_ELEMENT};
pub use namespace::{HTML_NS, MATHML_NS, SVG_NS, XML_NS, XMLNS_NS};
pub use node::NodeId;
pub use registry::{ElementRegistry, define_element, registry};
