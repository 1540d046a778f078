//! Tests for effective dependency resolution and variant selection

use confgraph_core::{
    Attributes, ConfigurationGraph, Dependency, DuplicatePolicy, Error, ResolutionError,
    ResolverOptions, Role, TiePolicy, Variant, VariantResolver,
};
use confgraph_test_utils::graphs;
use confgraph_test_utils::materializer::RecordingMaterializer;
use pretty_assertions::assert_eq;
use std::path::PathBuf;

fn names(deps: &[Dependency]) -> Vec<&str> {
    deps.iter().map(|d| d.name.as_str()).collect()
}

mod effective_dependencies_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_diamond_collapses_shared_parent() {
        let graph = graphs::diamond();
        let resolver = VariantResolver::new(&graph);

        let deps = resolver.effective_dependencies("A").unwrap();

        assert_eq!(names(&deps), vec!["dep-a", "dep-b", "shared", "dep-c", "dep-d"]);
        assert_eq!(deps.iter().filter(|d| d.name == "dep-d").count(), 1);
    }

    #[test]
    fn test_closure_is_breadth_first_and_unique() {
        let graph = graphs::diamond();
        let closure: Vec<&str> = VariantResolver::new(&graph)
            .inheritance_closure("A")
            .unwrap()
            .into_iter()
            .map(|node| node.name())
            .collect();
        assert_eq!(closure, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_first_declared_wins_by_default() {
        let graph = graphs::diamond();
        let deps = VariantResolver::new(&graph).effective_dependencies("A").unwrap();
        let shared = deps.iter().find(|d| d.name == "shared").unwrap();
        assert_eq!(shared.attributes.get("from"), Some("B"));
    }

    #[test]
    fn test_last_declared_wins_keeps_position() {
        let graph = graphs::diamond();
        let options = ResolverOptions {
            duplicates: DuplicatePolicy::LastDeclaredWins,
            ..ResolverOptions::default()
        };
        let deps = VariantResolver::with_options(&graph, options)
            .effective_dependencies("A")
            .unwrap();

        assert_eq!(names(&deps)[2], "shared");
        assert_eq!(deps[2].attributes.get("from"), Some("D"));
    }

    #[test]
    fn test_is_idempotent() {
        let graph = graphs::diamond();
        let resolver = VariantResolver::new(&graph);
        let first = resolver.effective_dependencies("A").unwrap();
        let second = resolver.effective_dependencies("A").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_leaf_sees_only_own_declarations() {
        let graph = graphs::diamond();
        let deps = VariantResolver::new(&graph).effective_dependencies("D").unwrap();
        assert_eq!(names(&deps), vec!["dep-d", "shared"]);
    }

    #[test]
    fn test_unknown_configuration() {
        let graph = ConfigurationGraph::new();
        assert_eq!(
            VariantResolver::new(&graph).effective_dependencies("compileClasspath"),
            Err(ResolutionError::UnknownConfiguration {
                name: "compileClasspath".to_string()
            })
        );
    }

    #[test]
    fn test_concurrent_queries_agree() {
        let graph = graphs::diamond();
        let resolver = VariantResolver::new(&graph);
        let expected = resolver.effective_dependencies("A").unwrap();

        std::thread::scope(|scope| {
            let handles: Vec<_> = ["A", "B", "C", "A"]
                .into_iter()
                .map(|start| scope.spawn(move || resolver.effective_dependencies(start)))
                .collect();
            let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
            assert_eq!(results[0].as_ref().unwrap(), &expected);
            assert_eq!(results[3].as_ref().unwrap(), &expected);
        });
    }
}

mod select_variant_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn usage(value: &str) -> Attributes {
        Attributes::from([("usage", value)])
    }

    #[test]
    fn test_runtime_elements_selects_jar() {
        let graph = graphs::runtime_elements();
        let resolver = VariantResolver::new(&graph);

        let selected = resolver.select_variant("runtimeElements", &usage("runtime")).unwrap();

        assert_eq!(selected.name(), "jar");
        assert_eq!(selected.owner(), "runtimeElements");
        assert_eq!(selected.artifact().as_str(), "build/libs/main.jar");
    }

    #[test]
    fn test_runtime_elements_rejects_api() {
        let graph = graphs::runtime_elements();
        let err = VariantResolver::new(&graph)
            .select_variant("runtimeElements", &usage("api"))
            .unwrap_err();
        assert_eq!(
            err,
            ResolutionError::NoMatch {
                name: "runtimeElements".to_string(),
                requested: usage("api"),
            }
        );
    }

    #[test]
    fn test_identical_variants_are_ambiguous() {
        let mut graph = graphs::runtime_elements();
        graph
            .attach_variant(
                "runtimeElements",
                Variant::new("fat-jar", "build/libs/main-all.jar").with_attribute("usage", "runtime"),
            )
            .unwrap();

        let err = VariantResolver::new(&graph)
            .select_variant("runtimeElements", &usage("runtime"))
            .unwrap_err();

        assert_eq!(
            err,
            ResolutionError::Ambiguous {
                name: "runtimeElements".to_string(),
                requested: usage("runtime"),
                candidates: vec![
                    "runtimeElements:jar".to_string(),
                    "runtimeElements:fat-jar".to_string()
                ],
            }
        );
    }

    #[test]
    fn test_first_match_policy_breaks_ties() {
        let mut graph = graphs::runtime_elements();
        graph
            .attach_variant("runtimeElements", Variant::new("fat-jar", "all.jar"))
            .unwrap();
        let options = ResolverOptions {
            ties: TiePolicy::FirstMatch,
            ..ResolverOptions::default()
        };

        let resolver = VariantResolver::with_options(&graph, options);
        assert_eq!(resolver.options().ties, TiePolicy::FirstMatch);

        let selected = resolver
            .select_variant("runtimeElements", &usage("runtime"))
            .unwrap();
        assert_eq!(selected.name(), "jar");
    }

    #[test]
    fn test_empty_request_prefers_fewest_extra_keys() {
        let mut graph = ConfigurationGraph::new();
        graph
            .create_node("producer", Role::Consumable, Attributes::new())
            .unwrap();
        graph
            .attach_variant(
                "producer",
                Variant::new("rich", "rich.jar")
                    .with_attribute("usage", "runtime")
                    .with_attribute("format", "jar"),
            )
            .unwrap();
        graph
            .attach_variant("producer", Variant::new("lean", "lean.jar").with_attribute("usage", "api"))
            .unwrap();
        graph
            .attach_variant("producer", Variant::new("other", "other.jar").with_attribute("format", "zip"))
            .unwrap();

        let selected = VariantResolver::new(&graph)
            .select_variant("producer", &Attributes::new())
            .unwrap();
        // lean and other both carry one key; lean comes first
        assert_eq!(selected.name(), "lean");
    }

    #[test]
    fn test_specific_match_beats_wildcard() {
        let mut graph = ConfigurationGraph::new();
        graph
            .create_node("producer", Role::Consumable, Attributes::new())
            .unwrap();
        graph
            .attach_variant("producer", Variant::new("anything", "any.jar"))
            .unwrap();
        graph
            .attach_variant("producer", Variant::new("runtime", "rt.jar").with_attribute("usage", "runtime"))
            .unwrap();

        let selected = VariantResolver::new(&graph)
            .select_variant("producer", &usage("runtime"))
            .unwrap();
        assert_eq!(selected.name(), "runtime");
    }

    #[test]
    fn test_inherited_variants_are_candidates() {
        let mut graph = ConfigurationGraph::new();
        graph.create_node("runtime", Role::Both, Attributes::new()).unwrap();
        graph
            .create_node("default", Role::Consumable, Attributes::new())
            .unwrap();
        graph.add_edge("default", "runtime").unwrap();
        graph
            .attach_variant("runtime", Variant::new("jar", "main.jar"))
            .unwrap();

        let selected = VariantResolver::new(&graph)
            .select_variant("default", &Attributes::new())
            .unwrap();
        assert_eq!(selected.owner(), "runtime");
        assert_eq!(selected.name(), "jar");
    }

    /// `elements` extends `runtime`; both publish a variant named `jar`.
    fn own_and_inherited(own: Variant, inherited: Variant) -> ConfigurationGraph {
        let mut graph = ConfigurationGraph::new();
        graph.create_node("runtime", Role::Both, Attributes::new()).unwrap();
        graph
            .create_node("elements", Role::Consumable, Attributes::new())
            .unwrap();
        graph.add_edge("elements", "runtime").unwrap();
        graph.attach_variant("runtime", inherited).unwrap();
        graph.attach_variant("elements", own).unwrap();
        graph
    }

    #[test]
    fn test_own_variant_beats_inherited_on_equal_score() {
        let graph = own_and_inherited(
            Variant::new("jar", "elements.jar")
                .with_attribute("usage", "runtime")
                .with_attribute("format", "jar"),
            Variant::new("jar", "runtime.jar")
                .with_attribute("usage", "runtime")
                .with_attribute("format", "dir"),
        );

        let selected = VariantResolver::new(&graph)
            .select_variant("elements", &usage("runtime"))
            .unwrap();
        assert_eq!(selected.owner(), "elements");
        assert_eq!(selected.variant().artifact().as_str(), "elements.jar");
    }

    #[test]
    fn test_own_and_inherited_twins_are_ambiguous() {
        let graph = own_and_inherited(
            Variant::new("jar", "elements.jar").with_attribute("usage", "runtime"),
            Variant::new("jar", "runtime.jar").with_attribute("usage", "runtime"),
        );

        let err = VariantResolver::new(&graph)
            .select_variant("elements", &usage("runtime"))
            .unwrap_err();
        assert_eq!(
            err,
            ResolutionError::Ambiguous {
                name: "elements".to_string(),
                requested: usage("runtime"),
                candidates: vec!["elements:jar".to_string(), "runtime:jar".to_string()],
            }
        );
    }

    #[test]
    fn test_consumable_without_variants() {
        let mut graph = ConfigurationGraph::new();
        graph
            .create_node("apiElements", Role::Consumable, usage("api"))
            .unwrap();
        let err = VariantResolver::new(&graph)
            .select_variant("apiElements", &usage("api"))
            .unwrap_err();
        assert_eq!(
            err,
            ResolutionError::NoVariants {
                name: "apiElements".to_string()
            }
        );
    }

    #[test]
    fn test_bucket_is_not_consumable() {
        let graph = graphs::runtime_elements();
        let err = VariantResolver::new(&graph)
            .select_variant("impl", &Attributes::new())
            .unwrap_err();
        assert_eq!(
            err,
            ResolutionError::NotConsumable {
                name: "impl".to_string(),
                role: Role::Bucket
            }
        );
    }

    #[test]
    fn test_failure_on_one_node_does_not_affect_another() {
        let mut graph = graphs::runtime_elements();
        graph
            .create_node("apiElements", Role::Consumable, usage("api"))
            .unwrap();
        let resolver = VariantResolver::new(&graph);

        assert!(resolver.select_variant("apiElements", &usage("api")).is_err());
        assert!(resolver.select_variant("runtimeElements", &usage("runtime")).is_ok());
    }

    #[test]
    fn test_validate_reports_consumables_without_variants() {
        let mut graph = graphs::runtime_elements();
        graph
            .create_node("apiElements", Role::Consumable, usage("api"))
            .unwrap();
        graph.create_node("legacy", Role::Both, Attributes::new()).unwrap();

        let problems = VariantResolver::new(&graph).validate();
        assert_eq!(
            problems,
            vec![
                ResolutionError::NoVariants {
                    name: "apiElements".to_string()
                },
                ResolutionError::NoVariants {
                    name: "legacy".to_string()
                },
            ]
        );
    }
}

mod materialize_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_selection_never_materializes() {
        let graph = graphs::runtime_elements();
        let materializer = RecordingMaterializer::new("/out");
        let resolver = VariantResolver::new(&graph);

        let selected = resolver
            .select_variant("runtimeElements", &Attributes::from([("usage", "runtime")]))
            .unwrap();
        assert!(materializer.calls().is_empty());

        let path = selected.materialize(&materializer).unwrap();
        assert_eq!(path, PathBuf::from("/out/build/libs/main.jar"));
        assert_eq!(materializer.calls().len(), 1);
    }

    #[test]
    fn test_materialize_failure_is_reported() {
        let graph = graphs::runtime_elements();
        let materializer = RecordingMaterializer::new("/out").failing_on("build/libs/main.jar");
        let selected = VariantResolver::new(&graph)
            .select_variant("runtimeElements", &Attributes::from([("usage", "runtime")]))
            .unwrap();

        let err = selected.materialize(&materializer).unwrap_err();
        assert!(matches!(err, Error::Materialize { ref artifact, .. } if artifact == "build/libs/main.jar"));
    }
}
