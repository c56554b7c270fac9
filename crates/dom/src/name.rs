//! XML name grammar and qualified-name extraction.
//!
//! Direct element construction deliberately skips these checks so that parser-created elements
//! can carry names the grammar rejects. Only the document-level entry points enforce them.

use crate::error::ConstructError;
use crate::namespace::{XML_NS, XML_PREFIX, XMLNS_NS, XMLNS_PREFIX};

fn is_name_start_char(c: char) -> bool {
	matches!(c,
		':' | 'A'..='Z' | '_' | 'a'..='z'
		| '\u{C0}'..='\u{D6}'
		| '\u{D8}'..='\u{F6}'
		| '\u{F8}'..='\u{2FF}'
		| '\u{370}'..='\u{37D}'
		| '\u{37F}'..='\u{1FFF}'
		| '\u{200C}'..='\u{200D}'
		| '\u{2070}'..='\u{218F}'
		| '\u{2C00}'..='\u{2FEF}'
		| '\u{3001}'..='\u{D7FF}'
		| '\u{F900}'..='\u{FDCF}'
		| '\u{FDF0}'..='\u{FFFD}'
		| '\u{10000}'..='\u{EFFFF}')
}

fn is_name_char(c: char) -> bool {
	is_name_start_char(c)
		|| matches!(c,
			'-' | '.' | '0'..='9' | '\u{B7}'
			| '\u{300}'..='\u{36F}'
			| '\u{203F}'..='\u{2040}')
}

/// Returns true if `name` matches the XML `Name` production.
pub fn is_valid_name(name: &str) -> bool {
	let mut chars = name.chars();
	match chars.next() {
		Some(first) if is_name_start_char(first) => chars.all(is_name_char),
		_ => false,
	}
}

fn is_valid_ncname(name: &str) -> bool {
	!name.contains(':') && is_valid_name(name)
}

/// Returns true if `name` matches the XML `QName` production.
pub fn is_valid_qname(name: &str) -> bool {
	match name.split_once(':') {
		Some((prefix, local)) => is_valid_ncname(prefix) && is_valid_ncname(local),
		None => is_valid_ncname(name),
	}
}

/// Result of [`validate_and_extract`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedName {
	pub namespace: Option<String>,
	pub prefix: Option<String>,
	pub local_name: String,
}

/// Splits a qualified name and checks it against `namespace`.
///
/// # Errors
///
/// - [`ConstructError::InvalidCharacter`] if `qualified_name` is not a `QName`.
/// - [`ConstructError::Namespace`] if the prefix and namespace disagree.
pub fn validate_and_extract(
	namespace: Option<&str>,
	qualified_name: &str,
) -> Result<ExtractedName, ConstructError> {
	let namespace = namespace.filter(|ns| !ns.is_empty());

	if !is_valid_qname(qualified_name) {
		return Err(ConstructError::InvalidCharacter(format!(
			"{qualified_name:?} is not a valid qualified name"
		)));
	}

	let (prefix, local_name) = match qualified_name.split_once(':') {
		Some((prefix, local)) => (Some(prefix), local),
		None => (None, qualified_name),
	};

	if prefix.is_some() && namespace.is_none() {
		return Err(ConstructError::Namespace(
			"a prefix requires a namespace".to_string(),
		));
	}
	if prefix == Some(XML_PREFIX) && namespace != Some(XML_NS) {
		return Err(ConstructError::Namespace(
			"the \"xml\" prefix requires the XML namespace".to_string(),
		));
	}
	let is_xmlns = qualified_name == XMLNS_PREFIX || prefix == Some(XMLNS_PREFIX);
	if is_xmlns != (namespace == Some(XMLNS_NS)) {
		return Err(ConstructError::Namespace(
			"the \"xmlns\" name or prefix is reserved for the XMLNS namespace".to_string(),
		));
	}

	Ok(ExtractedName {
		namespace: namespace.map(str::to_owned),
		prefix: prefix.map(str::to_owned),
		local_name: local_name.to_owned(),
	})
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;
	use crate::namespace::HTML_NS;

	#[rstest]
	#[case("p", true)]
	#[case("custom-el", true)]
	#[case("_x.y", true)]
	#[case("a:b", true)]
	#[case("\u{e9}l\u{e9}ment", true)]
	#[case("", false)]
	#[case("1p", false)]
	#[case("-p", false)]
	#[case("foo`", false)]
	#[case("foo bar", false)]
	fn name_production(#[case] name: &str, #[case] valid: bool) {
		assert_eq!(is_valid_name(name), valid);
	}

	#[rstest]
	#[case("p", true)]
	#[case("svg:rect", true)]
	#[case(":p", false)]
	#[case("p:", false)]
	#[case("a:b:c", false)]
	fn qname_production(#[case] name: &str, #[case] valid: bool) {
		assert_eq!(is_valid_qname(name), valid);
	}

	#[test]
	fn extracts_prefix_and_local_name() {
		let extracted = validate_and_extract(Some("urn:x"), "pre:foo").unwrap();
		assert_eq!(
			extracted,
			ExtractedName {
				namespace: Some("urn:x".to_string()),
				prefix: Some("pre".to_string()),
				local_name: "foo".to_string(),
			}
		);
	}

	#[test]
	fn empty_namespace_is_null() {
		let extracted = validate_and_extract(Some(""), "foo").unwrap();
		assert_eq!(extracted.namespace, None);
	}

	#[rstest]
	#[case(None, "pre:foo")]
	#[case(Some(HTML_NS), "xml:foo")]
	#[case(Some(HTML_NS), "xmlns")]
	#[case(Some(HTML_NS), "xmlns:foo")]
	#[case(Some(XMLNS_NS), "foo")]
	fn namespace_errors(#[case] namespace: Option<&str>, #[case] qualified_name: &str) {
		assert!(matches!(
			validate_and_extract(namespace, qualified_name),
			Err(ConstructError::Namespace(_))
		));
	}

	#[rstest]
	#[case(Some(XML_NS), "xml:lang")]
	#[case(Some(XMLNS_NS), "xmlns")]
	#[case(Some(XMLNS_NS), "xmlns:svg")]
	fn reserved_prefixes_in_their_namespace(
		#[case] namespace: Option<&str>,
		#[case] qualified_name: &str,
	) {
		assert!(validate_and_extract(namespace, qualified_name).is_ok());
	}

	#[test]
	fn invalid_qname_is_invalid_character() {
		assert!(matches!(
			validate_and_extract(None, "foo`"),
			Err(ConstructError::InvalidCharacter(_))
		));
	}
}
