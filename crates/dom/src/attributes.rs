use indexmap::IndexMap;

/// A single attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
	pub namespace: Option<String>,
	pub prefix: Option<String>,
	pub local_name: String,
	pub value: String,
}

type AttrKey = (Option<String>, String);

/// Attribute store owned by an element, keyed by (namespace, local name) in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeMap {
	entries: IndexMap<AttrKey, Attr>,
}

impl AttributeMap {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn get(&self, namespace: Option<&str>, local_name: &str) -> Option<&Attr> {
		self.entries
			.get(&(namespace.map(str::to_owned), local_name.to_owned()))
	}

	/// Sets an attribute, returning the previous value if one existed.
	pub fn set(
		&mut self,
		namespace: Option<&str>,
		prefix: Option<&str>,
		local_name: &str,
		value: impl Into<String>,
	) -> Option<String> {
		let attr = Attr {
			namespace: namespace.map(str::to_owned),
			prefix: prefix.map(str::to_owned),
			local_name: local_name.to_owned(),
			value: value.into(),
		};
		self.entries
			.insert((attr.namespace.clone(), attr.local_name.clone()), attr)
			.map(|prev| prev.value)
	}

	pub fn remove(&mut self, namespace: Option<&str>, local_name: &str) -> Option<Attr> {
		self.entries
			.shift_remove(&(namespace.map(str::to_owned), local_name.to_owned()))
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &Attr> + '_ {
		self.entries.values()
	}
}
