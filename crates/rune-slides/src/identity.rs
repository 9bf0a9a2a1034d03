//! Shared identity across slide boundaries.
//!
//! Elements on different slides that carry the same `(namespace, id)` tag are
//! treated as one element by the renderer: instead of cutting from the old
//! slide to the new one, it morphs the element from its old anchor to its new
//! anchor.
//!
//! The registry is populated on every render pass. Anchors persist across
//! slide changes for lookup, but a pair is only produced for elements that
//! were tagged in the immediately preceding pass: an element missing from the
//! outgoing slide simply appears on the incoming one.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::view::{Rect, View};

/// Opaque token scoping identity matches to one running presentation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Namespace(u64);

impl Namespace {
    /// Allocate a fresh namespace, distinct from every other in this process.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for Namespace {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Namespace({})", self.0)
    }
}

/// Recorded visual state of an identified element.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Anchor {
    pub frame: Rect,
    pub opacity: f32,
}

impl Anchor {
    pub fn new(frame: Rect, opacity: f32) -> Self {
        Self { frame, opacity }
    }

    pub fn of(view: &View) -> Self {
        Self::new(view.frame, view.opacity)
    }
}

/// An element present before and after a transition.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchedPair {
    pub id: String,
    /// Anchor recorded by the previous pass.
    pub from: Anchor,
    /// Anchor of the element in the pass being rendered.
    pub to: Anchor,
}

/// `(namespace, identifier) → anchor` map.
///
/// Identifiers must be unique within one rendered tree; when they are not, the
/// last occurrence in traversal order wins.
#[derive(Debug, Default)]
pub struct IdentityRegistry {
    anchors: HashMap<(Namespace, String), Anchor>,
    /// Identifiers tagged in the last `match_and_register` pass, per namespace.
    last_pass: HashMap<Namespace, HashSet<String>>,
}

impl IdentityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record or update the anchor for `(namespace, id)`.
    pub fn register(&mut self, namespace: Namespace, id: impl Into<String>, anchor: Anchor) {
        self.anchors.insert((namespace, id.into()), anchor);
    }

    /// Last anchor registered for `(namespace, id)`, if any.
    pub fn resolve(&self, namespace: Namespace, id: &str) -> Option<Anchor> {
        self.anchors.get(&(namespace, id.to_string())).copied()
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// Drop every entry belonging to `namespace`.
    pub fn clear_namespace(&mut self, namespace: Namespace) {
        self.anchors.retain(|(ns, _), _| *ns != namespace);
        self.last_pass.remove(&namespace);
    }

    /// Whether `id` was tagged in the last pass over `namespace`.
    pub fn in_last_pass(&self, namespace: Namespace, id: &str) -> bool {
        self.last_pass
            .get(&namespace)
            .is_some_and(|ids| ids.contains(id))
    }

    /// Tagged anchors of `view` within `namespace`, in traversal order.
    pub fn collect(view: &View, namespace: Namespace) -> Vec<(String, Anchor)> {
        let mut found = Vec::new();
        view.walk(&mut |node| {
            if let Some(matched) = &node.matched {
                if matched.namespace == namespace {
                    found.push((matched.id.clone(), Anchor::of(node)));
                }
            }
        });
        found
    }

    /// Pair every tagged element of `view` with its anchor from the previous
    /// pass, then record the new anchors and make this pass the previous one.
    ///
    /// Elements absent from the previous pass produce no pair and simply
    /// appear, even when an older pass recorded them.
    pub fn match_and_register(&mut self, namespace: Namespace, view: &View) -> Vec<MatchedPair> {
        let current = Self::collect(view, namespace);

        let pairs: Vec<MatchedPair> = current
            .iter()
            .filter_map(|(id, to)| {
                if !self.in_last_pass(namespace, id) {
                    return None;
                }
                let from = self.resolve(namespace, id)?;
                Some(MatchedPair {
                    id: id.clone(),
                    from,
                    to: *to,
                })
            })
            .collect();

        let mut seen = HashSet::with_capacity(current.len());
        for (id, anchor) in current {
            seen.insert(id.clone());
            self.register(namespace, id, anchor);
        }
        self.last_pass.insert(namespace, seen);

        if !pairs.is_empty() {
            tracing::debug!(
                ?namespace,
                matched = pairs.len(),
                "resolved shared identities"
            );
        }
        pairs
    }
}
