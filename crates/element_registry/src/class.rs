/// A class reference that can be stored in an [`IdentityRegistry`](crate::IdentityRegistry).
///
/// Classes are compared by address: two descriptors with identical contents are still distinct
/// classes. Implementors are expected to live in `static` items.
pub trait RegistryClass: Send + Sync + 'static {
	/// Human-readable class name used in diagnostics.
	fn class_name(&self) -> &'static str;

	/// The direct superclass, or `None` for a hierarchy root.
	fn parent(&self) -> Option<&'static Self>;

	/// Returns true if `self` is `ancestor` or transitively derives from it.
	fn derives_from(&self, ancestor: &Self) -> bool {
		let mut current: Option<&Self> = Some(self);
		while let Some(class) = current {
			if std::ptr::eq(class, ancestor) {
				return true;
			}
			current = class.parent();
		}
		false
	}
}
