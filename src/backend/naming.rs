//! Display-name allocation.
//!
//! Every distinct fully-qualified name gets exactly one display identifier per generation pass:
//!
//! - named declarations keep their bare identifier unless it is already taken, in which case a `_xxxx` suffix
//!   (first 4 hex chars of the SHA-256 of the fully-qualified name) is appended;
//! - anonymous declarations are named after their enclosing artifact: `<Parent>Inline<index:03>`, with a `Key`
//!   suffix when the node is a map key.
//!
//! Synthetic names go through the same reservation check: a taken candidate gets a `_xxxx` suffix derived from
//! `<parent>/<index>/<slot>`. Allocation of named declarations is memoized, so repeat lookups never re-hash.

use std::collections::{HashMap, HashSet};

use typegen_core::{bare_name, short_digest};

use super::convert::{ConvertContext, Slot};

/// Hex characters of the collision suffix.
pub const COLLISION_SUFFIX_LEN: usize = 4;

/// Allocates unique display names for one generation pass.
#[derive(Debug, Default)]
pub struct NameAllocator {
    /// Fully-qualified name -> allocated display name
    allocated: HashMap<String, String>,
    /// Display names already handed out
    reserved: HashSet<String>,
    /// Bare identifier -> fully-qualified name the caller already bound it to
    prereserved: HashMap<String, String>,
}

impl NameAllocator {
    /// Create an allocator; `prereserved` lists fully-qualified names already bound elsewhere.
    pub fn new(prereserved: &[String]) -> Self {
        let prereserved = prereserved
            .iter()
            .map(|fqn| (bare_name(fqn).to_string(), fqn.clone()))
            .collect();
        Self {
            prereserved,
            ..Self::default()
        }
    }

    /// Look up the display name previously allocated for `fqn`.
    pub fn lookup(&self, fqn: &str) -> Option<&str> {
        self.allocated.get(fqn).map(String::as_str)
    }

    /// Check whether a display name has been handed out.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved.contains(name)
    }

    /// Allocate a display name for a node named `fqn` (empty for anonymous nodes) seen in `ctx`.
    ///
    /// Anonymous roots are named after their root key. Anonymous map keys get a `Key` suffix.
    pub fn allocate(&mut self, fqn: &str, ctx: ConvertContext<'_>) -> String {
        if !fqn.is_empty() {
            return self.allocate_named(fqn);
        }
        match ctx {
            ConvertContext::Root { key, slot: Slot::Value } if self.lookup(key).is_none() => self.allocate_named(key),
            ConvertContext::Root { key, slot } => {
                let candidate = format!("{}{}", bare_name(key), slot_suffix(slot));
                self.reserve_synthetic(candidate, &format!("{}/{}", key, slot.as_str()))
            }
            ConvertContext::Field { parent, index, slot } => self.allocate_inline(parent, index, slot),
        }
    }

    /// Allocate (or return the memoized) display name for a fully-qualified name.
    pub fn allocate_named(&mut self, fqn: &str) -> String {
        if let Some(existing) = self.allocated.get(fqn) {
            return existing.clone();
        }

        let bare = bare_name(fqn);
        let claimed_elsewhere = self.prereserved.get(bare).is_some_and(|owner| owner != fqn);
        let name = if claimed_elsewhere || self.reserved.contains(bare) {
            self.suffixed(bare, fqn)
        } else {
            bare.to_string()
        };

        self.reserved.insert(name.clone());
        self.allocated.insert(fqn.to_string(), name.clone());
        name
    }

    /// Allocate the synthetic name of an anonymous node at position `index` inside `parent`.
    pub fn allocate_inline(&mut self, parent: &str, index: usize, slot: Slot) -> String {
        let candidate = format!("{}Inline{:03}{}", parent, index, slot_suffix(slot));
        self.reserve_synthetic(candidate, &format!("{}/{}/{}", parent, index, slot.as_str()))
    }

    /// Reserve `candidate`, or a suffixed variant of it when the name is already taken.
    fn reserve_synthetic(&mut self, candidate: String, seed: &str) -> String {
        let name = if self.is_taken(&candidate) {
            self.suffixed(&candidate, seed)
        } else {
            candidate
        };
        self.reserved.insert(name.clone());
        name
    }

    /// `base` plus a digest suffix of `seed` that is not taken yet.
    fn suffixed(&self, base: &str, seed: &str) -> String {
        let mut salted = seed.to_string();
        let mut attempt = 1;
        loop {
            let name = format!("{}_{}", base, short_digest(&salted, COLLISION_SUFFIX_LEN));
            if !self.is_taken(&name) {
                tracing::debug!(seed, base, %name, "display name collision");
                return name;
            }
            attempt += 1;
            salted = format!("{}#{}", seed, attempt);
        }
    }

    fn is_taken(&self, name: &str) -> bool {
        self.reserved.contains(name) || self.prereserved.contains_key(name)
    }
}

fn slot_suffix(slot: Slot) -> &'static str {
    match slot {
        Slot::Value => "",
        Slot::MapKey => "Key",
    }
}
