//! Projects, packages, modules and snippets.

use crate::ast::{AstId, AstKind, PackageNode};
use crate::diagnostics::DiagnosticKind;
use crate::syntax::{NodeId, SyntaxKind};

use super::dependencies::PackageGraph;
use super::invariants::{assert_package_mapped, expect_package, invalid_package_member};
use super::{Desugarer, PackageContext};

impl Desugarer<'_> {
    pub(super) fn desugar_project(&mut self, project: NodeId) -> AstId {
        let name = match self.tree.kind(project) {
            SyntaxKind::Project { name, .. } => name.clone(),
            _ => String::new(),
        };
        log::debug!("desugaring project `{name}`");

        let package_nodes = self.tree.children(project).to_vec();
        let mut packages = Vec::with_capacity(package_nodes.len());
        for node in package_nodes {
            expect_package(self.tree, node);
            packages.push(self.desugar_package(node));
        }

        let graph = self.resolve_dependencies(&packages);
        let mut compilation_units = Vec::new();
        for component in graph.components() {
            let members: Vec<AstId> = component.iter().map(|&i| packages[i]).collect();
            let unit = self.add(AstKind::CompilationUnit {
                packages: members.clone(),
            });
            log::trace!("compilation unit {} holds {} packages", unit.index(), members.len());
            for package in members {
                if let Some(package) = self.ast.package_mut(package) {
                    package.compilation_unit = Some(unit);
                }
            }
            compilation_units.push(unit);
        }
        log::debug!(
            "project `{name}`: {} packages in {} compilation units",
            packages.len(),
            compilation_units.len()
        );

        let id = self.add(AstKind::Project {
            name,
            compilation_units,
        });
        self.map(project, id)
    }

    /// Link each package to the packages it names. Unknown names are errors
    /// unless the package only states compatibility constraints.
    fn resolve_dependencies(&mut self, packages: &[AstId]) -> PackageGraph {
        let names: Vec<String> = packages
            .iter()
            .map(|&p| self.ast.package(p).map(|p| p.name.clone()).unwrap_or_default())
            .collect();
        let mut graph = PackageGraph::new(names.iter().map(String::as_str));

        for (from, &package) in packages.iter().enumerate() {
            let node = assert_package_mapped(self.ast.mapped_syntax(package));
            let info = expect_package(self.tree, node);
            let dependency_names = info.dependency_packages.clone();
            let is_constraint = info.role.is_constraint();

            for dependency in dependency_names {
                match graph.position(&dependency) {
                    Some(to) => {
                        graph.add_edge(from, to);
                        let target = packages[to];
                        if let Some(package) = self.ast.package_mut(package) {
                            package.dependencies.push(target);
                        }
                    }
                    None if is_constraint => {}
                    None => {
                        let message = format!(
                            "Package `{}` specifies dependency `{dependency}` which does not exist.",
                            names[from]
                        );
                        self.report(DiagnosticKind::UnknownPackageDependency, node)
                            .message(message)
                            .emit();
                    }
                }
            }
        }

        graph
    }

    pub(super) fn desugar_package(&mut self, node: NodeId) -> AstId {
        let info = expect_package(self.tree, node).clone();
        let effective_verse_version = self.config.effective_version(info.verse_version);
        if !self.config.is_supported_version(effective_verse_version) {
            self.report(DiagnosticKind::InvalidVerseVersion, node)
                .message(format!(
                    "Invalid Verse version for package {}: {effective_verse_version}",
                    info.name
                ))
                .emit();
        }
        log::debug!(
            "desugaring package `{}` at version {effective_verse_version}",
            info.name
        );

        let previous = self.package.replace(PackageContext {
            effective_verse_version,
            uploaded_at_fn_version: info.uploaded_at_fn_version,
        });
        let mut members = Vec::new();
        for child in self.tree.children(node).to_vec() {
            let member = match self.tree.kind(child) {
                SyntaxKind::Module { .. } => self.desugar_module(child),
                SyntaxKind::Snippet { .. } => self.desugar_snippet(child),
                kind => invalid_package_member(kind.name(), child),
            };
            members.push(member);
        }
        self.package = previous;

        let package = self.add(AstKind::Package(Box::new(PackageNode {
            name: info.name,
            verse_path: info.verse_path,
            verse_scope: info.verse_scope,
            role: info.role,
            effective_verse_version,
            uploaded_at_fn_version: info.uploaded_at_fn_version,
            allow_native: info.vni_dest_dir.is_some(),
            treat_modules_as_implicit: info.treat_modules_as_implicit,
            allow_experimental: info.allow_experimental,
            enable_scene_graph: info.enable_scene_graph,
            members,
            dependencies: Vec::new(),
            compilation_unit: None,
        })));
        self.map(node, package)
    }

    pub(super) fn desugar_module(&mut self, node: NodeId) -> AstId {
        let (name, file_path) = match self.tree.kind(node) {
            SyntaxKind::Module { name, file_path } => (name.clone(), file_path.clone()),
            _ => Default::default(),
        };
        let symbol = self.verify_symbol(node, &name);
        // Modules declared in a `.vmodule` file predate access specifiers.
        let legacy_public = file_path.ends_with(".vmodule");

        let mut members = Vec::new();
        for child in self.tree.children(node).to_vec() {
            match self.tree.kind(child) {
                SyntaxKind::Module { .. } => members.push(self.desugar_module(child)),
                SyntaxKind::Snippet { .. } => members.push(self.desugar_snippet(child)),
                kind => {
                    let message = format!(
                        "Modules may only contain modules and snippets, found {}.",
                        kind.name()
                    );
                    self.report(DiagnosticKind::Internal, child)
                        .message(message)
                        .emit();
                }
            }
        }

        let module = self.add(AstKind::ModuleDefinition {
            name: symbol,
            members,
            legacy_public,
        });
        self.map(node, module)
    }

    pub(super) fn desugar_snippet(&mut self, node: NodeId) -> AstId {
        let path = self.tree.snippet_path(node).unwrap_or_default().to_owned();
        let members = self.desugar_children(node);
        let snippet = self.add(AstKind::Snippet { path, members });
        self.map(node, snippet)
    }
}
