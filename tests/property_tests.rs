//! Property-based tests for typegen
//!
//! These tests use proptest to verify invariants across many randomly
//! generated models, catching edge cases that hand-written tests might miss.

use std::collections::HashSet;

use proptest::prelude::*;
use typegen::backend::Generator;
use typegen_model::{ObjectType, StringType, Type, TypeMap};

/// Fully-qualified names drawn from a small vocabulary so bare identifiers collide often, including with the
/// synthetic names of inline objects.
fn fqn() -> impl Strategy<Value = String> {
    (
        prop::sample::select(vec!["a", "b", "c", "net.http"]),
        prop::sample::select(vec!["Item", "Status", "Req", "Node", "ItemInline000", "ItemInline001"]),
    )
        .prop_map(|(module, ident)| format!("{}.{}", module, ident))
}

/// Shape of a root declaration: an object (with indices of the roots it references) or a string enum.
fn root(root_count: usize) -> impl Strategy<Value = (bool, Vec<usize>)> {
    (any::<bool>(), prop::collection::vec(0..root_count.max(1), 0..4))
}

fn build_model(names: &[String], shapes: &[(bool, Vec<usize>)]) -> TypeMap {
    names
        .iter()
        .zip(shapes)
        .map(|(name, (is_object, refs))| {
            let ty = if *is_object {
                let mut obj = ObjectType::new(name.as_str());
                for (i, r) in refs.iter().enumerate() {
                    let target = &names[*r % names.len()];
                    obj = obj.field(format!("F{}", (b'a' + i as u8) as char), ObjectType::new(target.as_str()), "");
                }
                let lookup = Type::map(
                    ObjectType::inline().field("K", Type::string(), "").into(),
                    ObjectType::inline().field("V", Type::Boolean, "").into(),
                );
                obj.field("Inline", ObjectType::inline().field("X", Type::Boolean, ""), "")
                    .field("Lookup", lookup, "")
                    .into()
            } else {
                let bare = name.rsplit('.').next().unwrap_or(name);
                StringType::enumeration(name.as_str(), [(format!("{}A", bare), "a")]).into()
            };
            (name.clone(), ty)
        })
        .collect()
}

fn model() -> impl Strategy<Value = TypeMap> {
    prop::collection::hash_set(fqn(), 1..8).prop_flat_map(|names| {
        let names: Vec<String> = names.into_iter().collect();
        let shapes = prop::collection::vec(root(names.len()), names.len());
        (Just(names), shapes).prop_map(|(names, shapes)| build_model(&names, &shapes))
    })
}

proptest! {
    /// Property: Output depends only on the model, not on map iteration order
    #[test]
    fn generation_is_deterministic(types in model()) {
        // Rebuilding the map re-seeds its hasher, so iteration order differs between the two passes.
        let rebuilt: TypeMap = types.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        let first = Generator::new(&types, &[]).generate().unwrap();
        let second = Generator::new(&rebuilt, &[]).generate().unwrap();
        prop_assert_eq!(first.source(), second.source());
    }

    /// Property: Every artifact gets a distinct display name
    #[test]
    fn allocated_names_are_unique(types in model()) {
        let generated = Generator::new(&types, &["zzz.Item".to_string()]).generate().unwrap();
        let mut seen = HashSet::new();
        for name in generated
            .objects()
            .iter()
            .map(|o| &o.name)
            .chain(generated.constants().iter().map(|c| &c.name))
        {
            prop_assert!(seen.insert(name.clone()), "duplicate display name {}", name);
        }
    }

    /// Property: Each named root yields exactly one artifact, however often it is referenced
    #[test]
    fn named_roots_are_memoized(types in model()) {
        let generated = Generator::new(&types, &[]).generate().unwrap();
        // Fully converted roots carry `Inline` and `Lookup` and add three inline objects (`X`, `K`, `V`).
        // Shells visited only through a reference have no fields; inline objects have exactly one.
        let full_roots = generated.objects().iter().filter(|o| o.fields.len() >= 2).count();
        let artifacts = generated.objects().len() + generated.constants().len();
        prop_assert_eq!(artifacts, types.len() + 3 * full_roots);
    }
}
