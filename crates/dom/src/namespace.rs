//! Well-known namespace URIs.

pub const HTML_NS: &str = "http://www.w3.org/1999/xhtml";
pub const XML_NS: &str = "http://www.w3.org/XML/1998/namespace";
pub const XMLNS_NS: &str = "http://www.w3.org/2000/xmlns/";
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";
pub const MATHML_NS: &str = "http://www.w3.org/1998/Math/MathML";

/// The reserved `xml` prefix.
pub const XML_PREFIX: &str = "xml";
/// The reserved `xmlns` name and prefix.
pub const XMLNS_PREFIX: &str = "xmlns";
