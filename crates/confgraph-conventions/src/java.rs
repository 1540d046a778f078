//! Java library configuration layout.
//!
//! Declaration buckets feed resolvable classpaths and consumable elements:
//!
//! ```text
//! apiElements      -> compile, runtime
//! runtimeElements  -> implementation, runtimeOnly, runtime
//! compileClasspath -> compileOnly, implementation
//! runtimeClasspath -> runtimeOnly, runtime, implementation
//! implementation   -> compile
//! runtime          -> compile
//! default          -> runtimeClasspath
//! ```
//!
//! The test source set mirrors the main one and additionally extends the
//! main buckets (`testImplementation -> implementation`, ...). The `jar`,
//! `classes` and `resources` variants are published on `runtime` and
//! `runtimeElements`, jar first.

use confgraph_core::{ArtifactRef, Attributes, ConfigurationGraph, GraphError, Role, Variant};

use crate::convention::Convention;
use crate::error::{Error, Result};

/// Configuration names created by the convention.
pub mod names {
    pub const API_ELEMENTS: &str = "apiElements";
    pub const COMPILE: &str = "compile";
    pub const COMPILE_CLASSPATH: &str = "compileClasspath";
    pub const COMPILE_ONLY: &str = "compileOnly";
    pub const DEFAULT: &str = "default";
    pub const IMPLEMENTATION: &str = "implementation";
    pub const RUNTIME: &str = "runtime";
    pub const RUNTIME_CLASSPATH: &str = "runtimeClasspath";
    pub const RUNTIME_ELEMENTS: &str = "runtimeElements";
    pub const RUNTIME_ONLY: &str = "runtimeOnly";
    pub const TEST_COMPILE: &str = "testCompile";
    pub const TEST_COMPILE_CLASSPATH: &str = "testCompileClasspath";
    pub const TEST_COMPILE_ONLY: &str = "testCompileOnly";
    pub const TEST_IMPLEMENTATION: &str = "testImplementation";
    pub const TEST_RUNTIME: &str = "testRuntime";
    pub const TEST_RUNTIME_CLASSPATH: &str = "testRuntimeClasspath";
    pub const TEST_RUNTIME_ONLY: &str = "testRuntimeOnly";
}

/// The `usage` attribute and its standard values.
pub mod usage {
    pub const KEY: &str = "usage";
    pub const API: &str = "api";
    pub const RUNTIME: &str = "runtime";
}

/// The `artifactType` attribute carried by published variants.
pub mod artifact_type {
    pub const KEY: &str = "artifactType";
    pub const JAR: &str = "jar";
    pub const CLASSES: &str = "java-classes-directory";
    pub const RESOURCES: &str = "java-resources-directory";
}

/// Handles for the artifacts the library publishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaLibraryOutputs {
    pub jar: ArtifactRef,
    pub classes: ArtifactRef,
    pub resources: ArtifactRef,
}

impl Default for JavaLibraryOutputs {
    fn default() -> Self {
        Self {
            jar: ArtifactRef::new("build/libs/main.jar"),
            classes: ArtifactRef::new("build/classes/java/main"),
            resources: ArtifactRef::new("build/resources/main"),
        }
    }
}

/// Applies the Java library layout.
#[derive(Debug, Clone, Default)]
pub struct JavaLibraryConvention {
    outputs: JavaLibraryOutputs,
}

use names::*;

/// `(name, role, usage, description, visible)`
const CONFIGURATIONS: &[(&str, Role, Option<&str>, &str, bool)] = &[
    (COMPILE, Role::Bucket, None, "Dependencies for source set 'main' (deprecated, use 'implementation').", true),
    (IMPLEMENTATION, Role::Bucket, None, "Implementation only dependencies for source set 'main'.", true),
    (COMPILE_ONLY, Role::Bucket, None, "Compile only dependencies for source set 'main'.", true),
    (RUNTIME, Role::Both, None, "Runtime dependencies for source set 'main' (deprecated, use 'runtimeOnly').", true),
    (RUNTIME_ONLY, Role::Bucket, None, "Runtime only dependencies for source set 'main'.", true),
    (COMPILE_CLASSPATH, Role::Resolvable, Some(usage::API), "Compile classpath for source set 'main'.", true),
    (RUNTIME_CLASSPATH, Role::Resolvable, Some(usage::RUNTIME), "Runtime classpath of source set 'main'.", true),
    (TEST_COMPILE, Role::Bucket, None, "Dependencies for source set 'test' (deprecated, use 'testImplementation').", true),
    (TEST_IMPLEMENTATION, Role::Bucket, None, "Implementation only dependencies for source set 'test'.", true),
    (TEST_COMPILE_ONLY, Role::Bucket, None, "Compile only dependencies for source set 'test'.", true),
    (TEST_RUNTIME, Role::Bucket, None, "Runtime dependencies for source set 'test' (deprecated, use 'testRuntimeOnly').", true),
    (TEST_RUNTIME_ONLY, Role::Bucket, None, "Runtime only dependencies for source set 'test'.", true),
    (TEST_COMPILE_CLASSPATH, Role::Resolvable, Some(usage::API), "Compile classpath for source set 'test'.", true),
    (TEST_RUNTIME_CLASSPATH, Role::Resolvable, Some(usage::RUNTIME), "Runtime classpath of source set 'test'.", true),
    (API_ELEMENTS, Role::Consumable, Some(usage::API), "API elements for main.", false),
    (RUNTIME_ELEMENTS, Role::Consumable, Some(usage::RUNTIME), "Elements of runtime for main.", false),
    (DEFAULT, Role::Consumable, None, "Configuration for default artifacts.", true),
];

/// `(child, parents)` in declaration order.
const EDGES: &[(&str, &[&str])] = &[
    (IMPLEMENTATION, &[COMPILE]),
    (RUNTIME, &[COMPILE]),
    (COMPILE_CLASSPATH, &[COMPILE_ONLY, IMPLEMENTATION]),
    (RUNTIME_CLASSPATH, &[RUNTIME_ONLY, RUNTIME, IMPLEMENTATION]),
    (TEST_COMPILE, &[COMPILE]),
    (TEST_IMPLEMENTATION, &[TEST_COMPILE, IMPLEMENTATION]),
    (TEST_RUNTIME, &[TEST_COMPILE, RUNTIME]),
    (TEST_RUNTIME_ONLY, &[RUNTIME_ONLY]),
    (TEST_COMPILE_CLASSPATH, &[TEST_COMPILE_ONLY, TEST_IMPLEMENTATION]),
    (TEST_RUNTIME_CLASSPATH, &[TEST_RUNTIME_ONLY, TEST_RUNTIME, TEST_IMPLEMENTATION]),
    (API_ELEMENTS, &[COMPILE, RUNTIME]),
    (RUNTIME_ELEMENTS, &[IMPLEMENTATION, RUNTIME_ONLY, RUNTIME]),
    (DEFAULT, &[RUNTIME_CLASSPATH]),
];

impl JavaLibraryConvention {
    pub const ID: &'static str = "java-library";

    pub fn new(outputs: JavaLibraryOutputs) -> Self {
        Self { outputs }
    }

    pub fn outputs(&self) -> &JavaLibraryOutputs {
        &self.outputs
    }

    fn variants(&self) -> [Variant; 3] {
        [
            Variant::new("jar", self.outputs.jar.clone())
                .with_attribute(artifact_type::KEY, artifact_type::JAR),
            Variant::new("classes", self.outputs.classes.clone())
                .with_attribute(artifact_type::KEY, artifact_type::CLASSES),
            Variant::new("resources", self.outputs.resources.clone())
                .with_attribute(artifact_type::KEY, artifact_type::RESOURCES),
        ]
    }

    fn populate(&self, graph: &mut ConfigurationGraph) -> std::result::Result<(), GraphError> {
        for &(name, role, usage_value, description, visible) in CONFIGURATIONS {
            let attributes = match usage_value {
                Some(value) => Attributes::new().with(usage::KEY, value),
                None => Attributes::new(),
            };
            graph.create_node(name, role, attributes)?;
            graph.set_description(name, description)?;
            graph.set_visible(name, visible)?;
        }

        for &(child, parents) in EDGES {
            for parent in parents {
                graph.add_edge(child, parent)?;
            }
        }

        for publisher in [RUNTIME, RUNTIME_ELEMENTS] {
            for variant in self.variants() {
                graph.attach_variant(publisher, variant)?;
            }
        }

        Ok(())
    }
}

impl Convention for JavaLibraryConvention {
    fn id(&self) -> &str {
        Self::ID
    }

    fn apply(&self, graph: &mut ConfigurationGraph) -> Result<()> {
        tracing::debug!(convention = Self::ID, "Applying convention");
        self.populate(graph).map_err(|source| Error::Apply {
            convention: Self::ID.to_string(),
            source,
        })
    }
}
