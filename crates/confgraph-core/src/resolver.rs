//! Read-only resolution queries over a frozen [`ConfigurationGraph`].
//!
//! The resolver holds a shared borrow of the graph, so no mutation can happen
//! while it is alive. It is `Send + Sync` and can answer queries for
//! different configurations from several threads at once.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::artifact::{ArtifactMaterializer, ArtifactRef};
use crate::attributes::Attributes;
use crate::error::ResolutionError;
use crate::graph::{ConfigurationGraph, ConfigurationNode, Dependency, NodeHandle, Variant};
use crate::Result;

/// Which declaration's attributes survive when inherited dependencies collapse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    /// Keep the first declaration in traversal order.
    #[default]
    FirstDeclaredWins,
    /// Keep the first position but take the attributes of the last declaration.
    LastDeclaredWins,
}

/// What to do when the best variants cannot be told apart by attributes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TiePolicy {
    /// Fail with `ResolutionError::Ambiguous`.
    #[default]
    Reject,
    /// Pick the first candidate in traversal order.
    FirstMatch,
}

/// Resolution settings, usually loaded from the `[resolution]` manifest table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverOptions {
    #[serde(default)]
    pub duplicates: DuplicatePolicy,
    #[serde(default)]
    pub ties: TiePolicy,
}

/// A variant reachable from a producer, with its owner's attributes applied.
#[derive(Debug, Clone)]
pub struct CandidateVariant<'g> {
    owner: &'g ConfigurationNode,
    variant: &'g Variant,
    attributes: Attributes,
}

impl<'g> CandidateVariant<'g> {
    fn new(owner: &'g ConfigurationNode, variant: &'g Variant) -> Self {
        Self {
            owner,
            variant,
            attributes: owner.attributes().overlay(variant.attributes()),
        }
    }

    pub fn name(&self) -> &'g str {
        self.variant.name()
    }

    /// Name of the configuration that publishes the variant.
    pub fn owner(&self) -> &'g str {
        self.owner.name()
    }

    /// `owner:variant`, unique across the graph.
    pub fn qualified_name(&self) -> String {
        format!("{}:{}", self.owner.name(), self.variant.name())
    }

    /// Effective attributes: owner defaults overlaid with the variant's own.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn artifact(&self) -> &'g ArtifactRef {
        self.variant.artifact()
    }

    pub fn variant(&self) -> &'g Variant {
        self.variant
    }

    /// Ask the external collaborator to produce the artifact.
    pub fn materialize(&self, materializer: &dyn ArtifactMaterializer) -> Result<PathBuf> {
        tracing::debug!(variant = %self.qualified_name(), "Materializing artifact");
        materializer.materialize(self.artifact())
    }
}

/// How well a candidate fits a request. Higher sorts better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct MatchScore {
    /// Requested keys the candidate declares with the requested value.
    matched: usize,
    /// Negated count of keys the request did not ask for.
    extra: std::cmp::Reverse<usize>,
}

/// Score a candidate, or `None` if any requested key conflicts.
///
/// Requested keys absent from the candidate are wildcards.
fn score(candidate: &Attributes, requested: &Attributes) -> Option<MatchScore> {
    let mut matched = 0;
    for (key, wanted) in requested.iter() {
        match candidate.get(key) {
            Some(value) if value == wanted => matched += 1,
            Some(_) => return None,
            None => {}
        }
    }
    let extra = candidate
        .iter()
        .filter(|(key, _)| !requested.contains_key(key))
        .count();
    Some(MatchScore {
        matched,
        extra: std::cmp::Reverse(extra),
    })
}

/// Answers closure and variant-selection queries.
#[derive(Debug, Clone, Copy)]
pub struct VariantResolver<'g> {
    graph: &'g ConfigurationGraph,
    options: ResolverOptions,
}

impl<'g> VariantResolver<'g> {
    /// Create a resolver with default options.
    pub fn new(graph: &'g ConfigurationGraph) -> Self {
        Self::with_options(graph, ResolverOptions::default())
    }

    pub fn with_options(graph: &'g ConfigurationGraph, options: ResolverOptions) -> Self {
        Self { graph, options }
    }

    pub fn options(&self) -> ResolverOptions {
        self.options
    }

    fn lookup(&self, name: &str) -> std::result::Result<NodeHandle, ResolutionError> {
        self.graph
            .get_node(name)
            .map_err(|_| ResolutionError::UnknownConfiguration {
                name: name.to_string(),
            })
    }

    /// Configurations reachable from `name`, itself first, in traversal order.
    pub fn inheritance_closure(
        &self,
        name: &str,
    ) -> std::result::Result<Vec<&'g ConfigurationNode>, ResolutionError> {
        let start = self.lookup(name)?;
        Ok(self
            .graph
            .walk_breadth_first(start)
            .into_iter()
            .map(|h| self.graph.node(h))
            .collect())
    }

    /// The effective dependency set of a configuration.
    ///
    /// Own declarations come first, then each inherited configuration's in
    /// breadth-first order. Declarations with the same name collapse into
    /// one entry at the position of the first occurrence; which attributes
    /// survive is governed by [`DuplicatePolicy`].
    pub fn effective_dependencies(
        &self,
        name: &str,
    ) -> std::result::Result<Vec<Dependency>, ResolutionError> {
        let mut result: Vec<Dependency> = Vec::new();
        let mut positions: HashMap<&str, usize> = HashMap::new();

        for node in self.inheritance_closure(name)? {
            for dependency in node.dependencies() {
                match positions.get(dependency.name.as_str()) {
                    Some(&at) => {
                        if self.options.duplicates == DuplicatePolicy::LastDeclaredWins {
                            result[at].attributes = dependency.attributes.clone();
                        }
                    }
                    None => {
                        positions.insert(dependency.name.as_str(), result.len());
                        result.push(dependency.clone());
                    }
                }
            }
        }

        tracing::debug!(configuration = name, count = result.len(), "Resolved dependencies");
        Ok(result)
    }

    /// Every variant reachable from `name`: its own, then inherited ones in
    /// traversal order.
    pub fn reachable_variants(
        &self,
        name: &str,
    ) -> std::result::Result<Vec<CandidateVariant<'g>>, ResolutionError> {
        Ok(self
            .inheritance_closure(name)?
            .into_iter()
            .flat_map(|owner| {
                owner
                    .variants()
                    .iter()
                    .map(move |variant| CandidateVariant::new(owner, variant))
            })
            .collect())
    }

    /// Select the variant of `producer` that best satisfies `requested`.
    ///
    /// Among compatible candidates the one declaring the most requested keys
    /// wins, then the one with the fewest extra keys, then the first in
    /// traversal order. With [`TiePolicy::Reject`], a winner whose effective
    /// attributes are identical to another top-ranked candidate is reported
    /// as `Ambiguous`.
    ///
    /// # Errors
    ///
    /// - `UnknownConfiguration` if `producer` does not exist
    /// - `NotConsumable` if `producer` is a bucket or resolvable-only node
    /// - `NoVariants` if nothing is published along the inheritance closure
    /// - `NoMatch` if every candidate conflicts with `requested`
    /// - `Ambiguous` as described above
    pub fn select_variant(
        &self,
        producer: &str,
        requested: &Attributes,
    ) -> std::result::Result<CandidateVariant<'g>, ResolutionError> {
        let node = self.graph.node(self.lookup(producer)?);
        if !node.role().can_be_consumed() {
            return Err(ResolutionError::NotConsumable {
                name: producer.to_string(),
                role: node.role(),
            });
        }

        let candidates = self.reachable_variants(producer)?;
        if candidates.is_empty() {
            return Err(ResolutionError::NoVariants {
                name: producer.to_string(),
            });
        }

        let mut best: Option<MatchScore> = None;
        let mut top: Vec<CandidateVariant<'g>> = Vec::new();
        for candidate in candidates {
            let Some(s) = score(candidate.attributes(), requested) else {
                tracing::trace!(variant = %candidate.qualified_name(), "Incompatible");
                continue;
            };
            match best {
                Some(b) if s < b => {}
                Some(b) if s == b => top.push(candidate),
                _ => {
                    best = Some(s);
                    top.clear();
                    top.push(candidate);
                }
            }
        }

        let mut top = top.into_iter();
        let Some(winner) = top.next() else {
            return Err(ResolutionError::NoMatch {
                name: producer.to_string(),
                requested: requested.clone(),
            });
        };

        if self.options.ties == TiePolicy::Reject {
            let twins: Vec<String> = top
                .filter(|c| c.attributes() == winner.attributes())
                .map(|c| c.qualified_name())
                .collect();
            if !twins.is_empty() {
                let mut candidates = vec![winner.qualified_name()];
                candidates.extend(twins);
                return Err(ResolutionError::Ambiguous {
                    name: producer.to_string(),
                    requested: requested.clone(),
                    candidates,
                });
            }
        }

        tracing::debug!(
            producer,
            %requested,
            variant = %winner.qualified_name(),
            "Selected variant"
        );
        Ok(winner)
    }

    /// Check every consumable configuration for at least one reachable
    /// variant. Returns one `NoVariants` error per offending configuration.
    pub fn validate(&self) -> Vec<ResolutionError> {
        self.graph
            .nodes()
            .filter(|node| node.role().can_be_consumed())
            .filter(|node| {
                self.reachable_variants(node.name())
                    .map(|v| v.is_empty())
                    .unwrap_or(true)
            })
            .map(|node| ResolutionError::NoVariants {
                name: node.name().to_string(),
            })
            .collect()
    }
}
