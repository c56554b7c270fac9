use thiserror::Error;

/// Errors raised while constructing an element.
///
/// Every variant aborts the single construction attempt; no partially built element escapes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstructError {
	/// Malformed or self-contradictory constructor arguments.
	#[error("invalid argument: {0}")]
	InvalidArgument(String),
	/// Prefix and namespace disagree.
	#[error("NamespaceError: {0}")]
	Namespace(String),
	/// The class being constructed is not the one registered for the key.
	#[error(
		"the {attempted} constructor cannot be used to create elements with local name {local_name:?} and namespace {}; use the {expected} constructor instead",
		display_namespace(.namespace)
	)]
	WrongConstructor {
		local_name: String,
		namespace: Option<String>,
		attempted: &'static str,
		expected: &'static str,
	},
	/// No name was given and the class has no registered identity to infer.
	#[error("{class} has no registered identity; pass a local name explicitly")]
	UnregisteredType { class: &'static str },
	/// No name was given and the class is registered under several identities.
	#[error("{class} is registered under {keys} identities; pass a local name explicitly")]
	AmbiguousType { class: &'static str, keys: usize },
	/// A name failed the XML name grammar at a document-level entry point.
	#[error("InvalidCharacterError: {0}")]
	InvalidCharacter(String),
}

fn display_namespace(namespace: &Option<String>) -> String {
	match namespace {
		Some(ns) => format!("{ns:?}"),
		None => "null".to_string(),
	}
}
