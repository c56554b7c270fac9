use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

use super::*;

const BOUND: &str = "urn:test:bound";
const OTHER: &str = "urn:test:other";

/// Test class type.
struct TestClass {
	name: &'static str,
	parent: Option<&'static TestClass>,
}

impl RegistryClass for TestClass {
	fn class_name(&self) -> &'static str {
		self.name
	}

	fn parent(&self) -> Option<&'static Self> {
		self.parent
	}
}

static BASE: TestClass = TestClass {
	name: "Base",
	parent: None,
};
static BOUND_BASE: TestClass = TestClass {
	name: "BoundBase",
	parent: Some(&BASE),
};
static FALLBACK: TestClass = TestClass {
	name: "Fallback",
	parent: Some(&BOUND_BASE),
};
static SINGLE: TestClass = TestClass {
	name: "Single",
	parent: Some(&BOUND_BASE),
};
static MULTI: TestClass = TestClass {
	name: "Multi",
	parent: Some(&BOUND_BASE),
};
static STRAY: TestClass = TestClass {
	name: "Stray",
	parent: Some(&BASE),
};
static NEVER_REGISTERED: TestClass = TestClass {
	name: "NeverRegistered",
	parent: Some(&SINGLE),
};

fn roots() -> Roots<TestClass> {
	Roots {
		generic_base: &BASE,
		bound_namespace: BOUND,
		bound_base: &BOUND_BASE,
		fallback: &FALLBACK,
	}
}

fn seeded() -> IdentityRegistry<TestClass> {
	IdentityRegistry::builder("test", roots())
		.push("single", Some(BOUND), &SINGLE)
		.push("m1", Some(BOUND), &MULTI)
		.push("m2", Some(BOUND), &MULTI)
		.push("plain", Some(BOUND), &BOUND_BASE)
		.push("stray", Some(OTHER), &STRAY)
		.duplicate_policy(DuplicatePolicy::Reject)
		.build()
		.unwrap()
}

#[rstest]
#[case("single", Some(BOUND), &SINGLE)]
#[case("m1", Some(BOUND), &MULTI)]
#[case("m2", Some(BOUND), &MULTI)]
#[case("plain", Some(BOUND), &BOUND_BASE)]
#[case("stray", Some(OTHER), &STRAY)]
#[case("unknown", Some(BOUND), &FALLBACK)]
#[case("single", Some(OTHER), &BASE)]
#[case("single", None, &BASE)]
#[case("single", Some(""), &BASE)]
fn test_lookup(
	#[case] name: &str,
	#[case] namespace: Option<&str>,
	#[case] expected: &'static TestClass,
) {
	let registry = seeded();
	assert!(std::ptr::eq(registry.lookup(name, namespace), expected));
}

#[test]
fn test_reverse_lookup_is_exact() {
	let registry = seeded();

	assert_eq!(
		registry.reverse_lookup(&SINGLE),
		vec![IdentityKey::new("single", Some(BOUND))]
	);
	assert_eq!(
		registry.reverse_lookup(&MULTI),
		vec![
			IdentityKey::new("m1", Some(BOUND)),
			IdentityKey::new("m2", Some(BOUND)),
		]
	);
	// Subclasses do not inherit keys.
	assert!(registry.reverse_lookup(&NEVER_REGISTERED).is_empty());
	// Fallback roots are reachable by lookup but never registered.
	assert!(registry.reverse_lookup(&FALLBACK).is_empty());
	assert!(registry.reverse_lookup(&BASE).is_empty());
}

#[test]
fn test_resolve_identity() {
	let registry = seeded();

	assert_eq!(
		registry.resolve_identity(&SINGLE),
		Inferred::One(IdentityKey::new("single", Some(BOUND)))
	);
	assert!(matches!(registry.resolve_identity(&MULTI), Inferred::Many(keys) if keys.len() == 2));
	assert_eq!(registry.resolve_identity(&NEVER_REGISTERED), Inferred::None);
}

#[test]
fn test_is_registered_ignores_fallback() {
	let registry = seeded();

	assert!(registry.is_registered("single", Some(BOUND)));
	assert!(!registry.is_registered("unknown", Some(BOUND)));
	assert!(!registry.is_registered("single", None));
}

#[test]
fn test_register_rejects_duplicate_without_overwrite() {
	let registry = seeded();

	let err = registry
		.register("single", Some(BOUND), &MULTI)
		.unwrap_err();
	assert_eq!(
		err,
		RegistryError::DuplicateKey {
			registry: "test",
			key: IdentityKey::new("single", Some(BOUND)),
			existing: "Single",
			incoming: "Multi",
		}
	);
	assert!(std::ptr::eq(registry.lookup("single", Some(BOUND)), &SINGLE));
	assert_eq!(registry.reverse_lookup(&MULTI).len(), 2);
}

#[test]
fn test_register_rejects_class_outside_bound_hierarchy() {
	let registry = seeded();

	let err = registry.register("x", Some(BOUND), &STRAY).unwrap_err();
	assert!(matches!(
		err,
		RegistryError::OutsideBoundHierarchy {
			class: "Stray",
			base: "BoundBase",
			..
		}
	));
	assert!(!registry.is_registered("x", Some(BOUND)));
}

#[rstest]
#[case(&FALLBACK, Some(BOUND))]
#[case(&BASE, Some(OTHER))]
#[case(&BASE, None)]
fn test_register_rejects_fallback_roots(
	#[case] class: &'static TestClass,
	#[case] namespace: Option<&str>,
) {
	let registry = seeded();

	let err = registry.register("y", namespace, class).unwrap_err();
	assert!(matches!(err, RegistryError::RegisteredFallback { .. }));
}

#[test]
fn test_runtime_registration_extends_tables() {
	let registry = seeded();
	let before = registry.len();

	registry
		.register("later", Some(BOUND), &NEVER_REGISTERED)
		.unwrap();

	assert_eq!(registry.len(), before + 1);
	assert!(std::ptr::eq(
		registry.lookup("later", Some(BOUND)),
		&NEVER_REGISTERED
	));
	assert_eq!(
		registry.resolve_identity(&NEVER_REGISTERED),
		Inferred::One(IdentityKey::new("later", Some(BOUND)))
	);
	registry.verify_invariants().unwrap();
}

#[test]
fn test_empty_namespace_is_null() {
	let registry = seeded();

	registry.register("nullns", Some(""), &STRAY).unwrap();
	assert!(registry.is_registered("nullns", None));
	assert_eq!(
		registry.reverse_lookup(&STRAY)[1],
		IdentityKey {
			local_name: "nullns".to_string(),
			namespace: None,
		}
	);
}

#[test]
fn test_build_rejects_invalid_seed() {
	let err = IdentityRegistry::builder("test", roots())
		.push("bad", Some(BOUND), &STRAY)
		.build()
		.unwrap_err();
	assert!(matches!(err, RegistryError::OutsideBoundHierarchy { .. }));
}

#[test]
fn test_build_reject_policy_returns_duplicate() {
	let err = IdentityRegistry::builder("test", roots())
		.push("dup", Some(BOUND), &SINGLE)
		.push("dup", Some(BOUND), &MULTI)
		.duplicate_policy(DuplicatePolicy::Reject)
		.build()
		.unwrap_err();
	assert!(matches!(err, RegistryError::DuplicateKey { .. }));
}

#[test]
#[should_panic(expected = "duplicate registry key")]
fn test_build_panic_policy_panics() {
	let _registry = IdentityRegistry::builder("test", roots())
		.push("dup", Some(BOUND), &SINGLE)
		.push("dup", Some(BOUND), &MULTI)
		.duplicate_policy(DuplicatePolicy::Panic)
		.build();
}

#[test]
fn test_entries_are_sorted() {
	let registry = seeded();
	let keys: Vec<_> = registry.entries().into_iter().map(|(key, _)| key).collect();
	let mut sorted = keys.clone();
	sorted.sort();
	assert_eq!(keys, sorted);
}

#[test]
fn test_derives_from() {
	assert!(NEVER_REGISTERED.derives_from(&BOUND_BASE));
	assert!(NEVER_REGISTERED.derives_from(&NEVER_REGISTERED));
	assert!(!STRAY.derives_from(&BOUND_BASE));
	assert!(!BASE.derives_from(&BOUND_BASE));
}

#[test]
fn test_key_display() {
	assert_eq!(
		IdentityKey::new("p", Some(BOUND)).to_string(),
		"(\"p\", \"urn:test:bound\")"
	);
	assert_eq!(IdentityKey::new("p", None).to_string(), "(\"p\", null)");
}

proptest! {
	#[test]
	fn unbound_names_fall_back(name in "[a-z][a-z0-9-]{0,12}") {
		let registry = seeded();
		prop_assume!(!registry.is_registered(&name, Some(BOUND)));

		prop_assert!(std::ptr::eq(registry.lookup(&name, Some(BOUND)), &FALLBACK));
		prop_assert!(std::ptr::eq(registry.lookup(&name, Some(OTHER)), &BASE));
		prop_assert!(std::ptr::eq(registry.lookup(&name, None), &BASE));
	}

	#[test]
	fn reads_are_stable(name in "[a-z]{1,8}", reads in 1usize..8) {
		let registry = seeded();
		let first = registry.lookup(&name, Some(BOUND));
		let keys = registry.reverse_lookup(&MULTI);
		for _ in 0..reads {
			prop_assert!(std::ptr::eq(registry.lookup(&name, Some(BOUND)), first));
			prop_assert_eq!(registry.reverse_lookup(&MULTI), keys.clone());
		}
	}
}
