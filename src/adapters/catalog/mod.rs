//! Catalog-backed implementation of the `TypeMetadata` port.
//!
//! Types are described in YAML or JSON documents (see [`Catalog`]). A small
//! prelude of `java.lang` types is always loaded first so that catalogs can
//! extend `java.lang.Object` or implement `java.lang.Runnable` without
//! restating them. Declarations are normalised on insertion the way the JVM
//! would report them: interfaces are `abstract interface`, interface methods
//! are `public` (and `abstract` unless `static` or `default`), enums are
//! `final`, and classes without declared constructors get the implicit one.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ImplError;
use crate::model::{
    Catalog, ConstructorDecl, MethodDecl, Modifiers, TargetType, TypeDecl, TypeKind, TypeRef,
    TypeShape, ENUM_BASE, OBJECT_ROOT,
};
use crate::ports::filesystem::FileSystem;
use crate::ports::metadata::TypeMetadata;

const PRELUDE: &str = include_str!("prelude.yaml");

/// Access bits that carry over from a class onto its implicit constructor.
const ACCESS: Modifiers = Modifiers::from_bits(
    Modifiers::PUBLIC.bits() | Modifiers::PROTECTED.bits() | Modifiers::PRIVATE.bits(),
);

type SignatureKey = (String, Vec<TypeRef>);

/// Type metadata served from catalog documents.
#[derive(Debug, Clone, Default)]
pub struct CatalogMetadata {
    types: HashMap<String, TypeDecl>,
}

impl CatalogMetadata {
    /// Creates metadata holding only the built-in prelude.
    ///
    /// # Panics
    ///
    /// Panics if the embedded prelude is malformed, which the test suite rules out.
    #[must_use]
    pub fn with_prelude() -> Self {
        let prelude: Catalog =
            serde_yaml::from_str(PRELUDE).expect("embedded prelude catalog is valid");
        let mut metadata = Self::default();
        metadata.insert(prelude);
        metadata
    }

    /// Loads the prelude followed by every catalog file, in order.
    ///
    /// # Errors
    ///
    /// Returns [`ImplError::Metadata`] if a file cannot be read or parsed.
    pub fn load(fs: &dyn FileSystem, paths: &[PathBuf]) -> Result<Self, ImplError> {
        let mut metadata = Self::with_prelude();
        for path in paths {
            let catalog = read_catalog(fs, path)?;
            debug!(path = %path.display(), types = catalog.types.len(), "loaded catalog");
            metadata.insert(catalog);
        }
        Ok(metadata)
    }

    /// Adds every declaration of `catalog`, replacing same-named ones.
    pub fn insert(&mut self, catalog: Catalog) {
        for decl in catalog.types {
            let decl = normalize(decl);
            self.types.insert(decl.name.clone(), decl);
        }
    }

    fn decl(&self, name: &str) -> Result<&TypeDecl, ImplError> {
        self.types.get(name).ok_or_else(|| ImplError::Resolution { name: name.to_string() })
    }

    fn target_of(decl: &TypeDecl) -> TargetType {
        let shape = match decl.kind {
            TypeKind::Interface => TypeShape::Interface,
            TypeKind::Class | TypeKind::Enum => TypeShape::Class,
        };
        TargetType::new(decl.name.clone(), shape, decl.modifiers)
    }

    fn resolve_ref(&self, ty: &TypeRef) -> Result<TargetType, ImplError> {
        match ty {
            TypeRef::Primitive(p) => Ok(TargetType::new(
                p.keyword(),
                TypeShape::Primitive,
                Modifiers::PUBLIC | Modifiers::ABSTRACT | Modifiers::FINAL,
            )),
            TypeRef::Array(element) => {
                let element = self.resolve_ref(element)?;
                let access = Modifiers::from_bits(element.modifiers.bits() & ACCESS.bits());
                Ok(TargetType::new(
                    ty.binary_name(),
                    TypeShape::Array,
                    access | Modifiers::ABSTRACT | Modifiers::FINAL,
                ))
            }
            TypeRef::Named(name) => self.decl(name).map(Self::target_of),
        }
    }

    /// Superclass chain starting at `name`, root last.
    fn class_chain(&self, name: &str) -> Result<Vec<&TypeDecl>, ImplError> {
        let mut chain = Vec::new();
        let mut visited = HashSet::new();
        let mut next = Some(name.to_string());
        while let Some(current) = next {
            let decl = self.decl(&current)?;
            if !visited.insert(current) {
                return Err(ImplError::InheritanceCycle { name: decl.name.clone() });
            }
            next = decl.superclass.clone();
            chain.push(decl);
        }
        Ok(chain)
    }

    fn collect_interface(
        &self,
        name: &str,
        visited: &mut HashSet<String>,
        seen: &mut HashSet<SignatureKey>,
        out: &mut Vec<MethodDecl>,
    ) -> Result<(), ImplError> {
        if !visited.insert(name.to_string()) {
            return Ok(());
        }
        let decl = self.decl(name)?;
        for method in &decl.methods {
            if !method.modifiers.contains(Modifiers::STATIC) {
                push_unique(method, seen, out);
            }
        }
        for parent in &decl.interfaces {
            self.collect_interface(parent, visited, seen, out)?;
        }
        Ok(())
    }
}

fn push_unique(method: &MethodDecl, seen: &mut HashSet<SignatureKey>, out: &mut Vec<MethodDecl>) {
    if seen.insert((method.name.clone(), method.params.clone())) {
        out.push(method.clone());
    }
}

fn read_catalog(fs: &dyn FileSystem, path: &Path) -> Result<Catalog, ImplError> {
    let invalid = |reason: String| ImplError::Metadata { path: path.to_path_buf(), reason };

    let bytes = fs.read(path).map_err(|e| invalid(e.to_string()))?;
    let text = String::from_utf8(bytes).map_err(|e| invalid(e.to_string()))?;
    let is_json = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        serde_json::from_str(&text).map_err(|e| invalid(e.to_string()))
    } else {
        serde_yaml::from_str(&text).map_err(|e| invalid(e.to_string()))
    }
}

fn normalize(mut decl: TypeDecl) -> TypeDecl {
    match decl.kind {
        TypeKind::Interface => {
            decl.modifiers = decl.modifiers | Modifiers::INTERFACE | Modifiers::ABSTRACT;
            decl.superclass = None;
            decl.constructors = Some(Vec::new());
            for method in &mut decl.methods {
                // Private interface methods always carry a body.
                if method.modifiers.contains(Modifiers::PRIVATE) {
                    continue;
                }
                method.modifiers = method.modifiers | Modifiers::PUBLIC;
                if !method.default && !method.modifiers.contains(Modifiers::STATIC) {
                    method.modifiers = method.modifiers | Modifiers::ABSTRACT;
                }
            }
        }
        TypeKind::Enum => {
            decl.modifiers = decl.modifiers | Modifiers::FINAL;
            decl.superclass = Some(ENUM_BASE.to_string());
        }
        TypeKind::Class => {
            if decl.superclass.is_none() && decl.name != OBJECT_ROOT {
                decl.superclass = Some(OBJECT_ROOT.to_string());
            }
        }
    }
    if decl.constructors.is_none() {
        let implicit = ConstructorDecl {
            modifiers: Modifiers::from_bits(decl.modifiers.bits() & ACCESS.bits()),
            ..ConstructorDecl::default()
        };
        decl.constructors = Some(vec![implicit]);
    }
    decl
}

impl TypeMetadata for CatalogMetadata {
    fn resolve(&self, name: &str) -> Result<TargetType, ImplError> {
        let ty: TypeRef =
            name.parse().map_err(|_| ImplError::Resolution { name: name.to_string() })?;
        self.resolve_ref(&ty)
    }

    fn members(&self, target: &TargetType) -> Result<Vec<MethodDecl>, ImplError> {
        if !matches!(target.shape, TypeShape::Class | TypeShape::Interface) {
            return Ok(Vec::new());
        }

        let chain = self.class_chain(&target.qualified_name)?;
        let mut seen = HashSet::new();
        let mut out = Vec::new();

        // Class methods shadow interface methods with the same signature.
        for decl in &chain {
            let own_interface = decl.kind == TypeKind::Interface;
            for method in &decl.methods {
                if method.modifiers.contains(Modifiers::PUBLIC) || own_interface {
                    push_unique(method, &mut seen, &mut out);
                }
            }
        }

        let mut visited: HashSet<String> =
            chain.iter().filter(|d| d.kind == TypeKind::Interface).map(|d| d.name.clone()).collect();
        for decl in &chain {
            for parent in &decl.interfaces {
                self.collect_interface(parent, &mut visited, &mut seen, &mut out)?;
            }
        }
        Ok(out)
    }

    fn declared_members(&self, target: &TargetType) -> Result<Vec<MethodDecl>, ImplError> {
        match target.shape {
            TypeShape::Class | TypeShape::Interface => {
                Ok(self.decl(&target.qualified_name)?.methods.clone())
            }
            TypeShape::Primitive | TypeShape::Array => Ok(Vec::new()),
        }
    }

    fn superclass_of(&self, target: &TargetType) -> Result<Option<TargetType>, ImplError> {
        if target.shape != TypeShape::Class {
            return Ok(None);
        }
        match &self.decl(&target.qualified_name)?.superclass {
            Some(parent) => self.decl(parent).map(|d| Some(Self::target_of(d))),
            None => Ok(None),
        }
    }

    fn constructors(&self, target: &TargetType) -> Result<Vec<ConstructorDecl>, ImplError> {
        if target.shape != TypeShape::Class {
            return Ok(Vec::new());
        }
        Ok(self.decl(&target.qualified_name)?.constructors.clone().unwrap_or_default())
    }
}
