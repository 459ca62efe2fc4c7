/*
Copyright (c) 2021 VMware, Inc.
SPDX-License-Identifier: MIT
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

//! Short names for dotted hierarchical names.
//!
//! `pipe.SwitchIngress.fwd` can also be called `SwitchIngress.fwd` or
//! `fwd`, as long as no other object in the same namespace claims the same
//! suffix.  A contested suffix resolves to nothing, so callers must use a
//! longer one.

use itertools::Itertools;

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::error::NameResolutionError;

/// Every dot-delimited suffix of `name`, including `name` itself.
pub fn generate_suffixes(name: &str) -> BTreeSet<String> {
    let tokens: Vec<&str> = name.split('.').collect();
    (0..tokens.len()).map(|i| tokens[i..].join(".")).collect()
}

/// Short name to canonical name map for one namespace.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NameAliasTable {
    aliases: BTreeMap<String, String>,
    ambiguous: BTreeMap<String, BTreeSet<String>>,
}

/// Outcome of resolving a name.
#[derive(Debug)]
pub enum Resolved<'a, V> {
    Found(&'a str, &'a V),
    Ambiguous(&'a BTreeSet<String>),
    NotFound,
}

impl<'a, V> Resolved<'a, V> {
    pub fn into_result(
        self,
        kind: &'static str,
        name: &str,
        scope: &str,
    ) -> Result<(&'a str, &'a V), NameResolutionError> {
        match self {
            Resolved::Found(canonical, v) => Ok((canonical, v)),
            Resolved::Ambiguous(candidates) => Err(NameResolutionError::Ambiguous {
                kind,
                name: name.to_string(),
                scope: scope.to_string(),
                candidates: candidates.iter().join(", "),
            }),
            Resolved::NotFound => Err(NameResolutionError::NotFound {
                kind,
                name: name.to_string(),
                scope: scope.to_string(),
            }),
        }
    }
}

impl NameAliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the table for a whole namespace at once.
    pub fn build<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        for name in names {
            table.merge_into(name.as_ref());
        }
        table
    }

    /// Adds the proper suffixes of `canonical`.  The full name is left out
    /// because lookups try canonical names first.  A suffix already claimed
    /// by another canonical name becomes ambiguous and stays that way, so
    /// the result does not depend on insertion order.
    pub fn merge_into(&mut self, canonical: &str) {
        for suffix in generate_suffixes(canonical) {
            if suffix == canonical {
                continue;
            }
            if let Some(candidates) = self.ambiguous.get_mut(&suffix) {
                candidates.insert(canonical.to_string());
                continue;
            }
            match self.aliases.get(&suffix) {
                None => {
                    self.aliases.insert(suffix, canonical.to_string());
                }
                Some(existing) if existing == canonical => (),
                Some(_) => {
                    let mut candidates = BTreeSet::new();
                    if let Some(existing) = self.aliases.remove(&suffix) {
                        candidates.insert(existing);
                    }
                    candidates.insert(canonical.to_string());
                    debug!("short name {} is ambiguous, dropping it", suffix);
                    self.ambiguous.insert(suffix, candidates);
                }
            }
        }
    }

    /// The canonical name `alias` stands for, if it is unambiguous.
    pub fn get(&self, alias: &str) -> Option<&str> {
        self.aliases.get(alias).map(String::as_str)
    }

    pub fn is_ambiguous(&self, alias: &str) -> bool {
        self.ambiguous.contains_key(alias)
    }

    /// Unambiguous aliases in name order.
    pub fn aliases(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases.iter().map(|(a, c)| (a.as_str(), c.as_str()))
    }

    /// Resolves `name` against the canonical entries first, then against
    /// the aliases.
    pub fn resolve<'a, V>(&'a self, canonical: &'a BTreeMap<String, V>, name: &str) -> Resolved<'a, V> {
        if let Some((k, v)) = canonical.get_key_value(name) {
            return Resolved::Found(k, v);
        }
        if let Some(candidates) = self.ambiguous.get(name) {
            return Resolved::Ambiguous(candidates);
        }
        match self.aliases.get(name).and_then(|c| canonical.get_key_value(c)) {
            Some((k, v)) => Resolved::Found(k, v),
            None => Resolved::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use tracing_test::traced_test;

    #[test]
    fn suffixes() {
        let expected: BTreeSet<String> = ["c", "b.c", "a.b.c"].iter().map(|s| s.to_string()).collect();
        assert_eq!(generate_suffixes("a.b.c"), expected);
        assert_eq!(generate_suffixes("x").len(), 1);
    }

    #[test]
    #[traced_test]
    fn colliding_suffixes_are_removed() {
        let names = ["p1.ingress.fwd", "p2.ingress.fwd"];
        let table = NameAliasTable::build(&names);
        assert_eq!(table.get("fwd"), None);
        assert_eq!(table.get("ingress.fwd"), None);
        assert!(table.is_ambiguous("fwd"));
        assert!(table.is_ambiguous("ingress.fwd"));

        let canonical: BTreeMap<String, u32> = names.iter().map(|n| (n.to_string(), 0)).collect();
        assert!(matches!(table.resolve(&canonical, "p1.ingress.fwd"), Resolved::Found("p1.ingress.fwd", _)));
        assert!(matches!(table.resolve(&canonical, "p2.ingress.fwd"), Resolved::Found("p2.ingress.fwd", _)));
        assert!(matches!(table.resolve(&canonical, "fwd"), Resolved::Ambiguous(_)));
        assert!(matches!(table.resolve(&canonical, "egress.fwd"), Resolved::NotFound));
        assert!(logs_contain("short name fwd is ambiguous"));
    }

    #[test]
    fn canonical_names_beat_aliases() {
        let names = ["ingress.fwd", "p1.ingress.fwd"];
        let table = NameAliasTable::build(&names);
        let canonical: BTreeMap<String, u32> = names.iter().map(|n| (n.to_string(), 0)).collect();
        assert!(matches!(table.resolve(&canonical, "ingress.fwd"), Resolved::Found("ingress.fwd", _)));
        assert!(matches!(table.resolve(&canonical, "fwd"), Resolved::Ambiguous(_)));
    }

    #[test]
    fn merge_is_order_independent() {
        let names = ["pipe.a.t", "pipe.b.t", "pipe.a.u", "other.a.t", "v"];
        let expected = NameAliasTable::build(&names);
        for order in names.iter().permutations(names.len()) {
            assert_eq!(NameAliasTable::build(order), expected);
        }
        assert_eq!(expected.get("a.u"), Some("pipe.a.u"));
        assert_eq!(expected.get("u"), Some("pipe.a.u"));
        assert_eq!(expected.get("b.t"), Some("pipe.b.t"));
        assert_eq!(expected.get("a.t"), None);
        assert_eq!(expected.get("t"), None);
        assert_eq!(expected.get("v"), None);
    }

    #[test]
    fn unknown_and_ambiguous_errors_differ() {
        let names = ["x.a", "y.a"];
        let table = NameAliasTable::build(&names);
        let canonical: BTreeMap<String, ()> = names.iter().map(|n| (n.to_string(), ())).collect();
        let err = table.resolve(&canonical, "a").into_result("table", "a", "prog").unwrap_err();
        assert_eq!(err.to_string(), "table \"a\" is ambiguous in prog (could be x.a, y.a)");
        let err = table.resolve(&canonical, "b").into_result("table", "b", "prog").unwrap_err();
        assert!(matches!(err, NameResolutionError::NotFound { .. }));
    }
}
