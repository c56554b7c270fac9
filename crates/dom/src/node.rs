use std::sync::atomic::{AtomicU64, Ordering};

/// Process-unique identifier of an allocated node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

static NEXT_NODE_ID: AtomicU64 = AtomicU64::new(1);

impl NodeId {
	/// Allocates a fresh id.
	pub(crate) fn allocate() -> Self {
		Self(NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed))
	}

	/// Returns the underlying u64 value.
	#[inline]
	pub fn as_u64(self) -> u64 {
		self.0
	}
}

impl std::fmt::Display for NodeId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "NodeId({})", self.0)
	}
}
