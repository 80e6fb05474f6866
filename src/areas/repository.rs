use crate::areas::catalog::Catalog;
use crate::areas::workspace::Workspace;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::{Path, PathBuf};

/// Default catalog file name, created in the repository root
pub const CATALOG_FILE: &str = ".librarian.json";

pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    catalog: Catalog,
    workspace: Workspace,
}

impl Repository {
    pub fn new(
        path: &Path,
        catalog_path: Option<PathBuf>,
        writer: Box<dyn std::io::Write>,
    ) -> anyhow::Result<Self> {
        let path = std::fs::canonicalize(path)
            .with_context(|| format!("The specified root does not exist: {}", path.display()))?;

        if !path.is_dir() {
            anyhow::bail!("The specified root is not a directory: {}", path.display());
        }

        let workspace = Workspace::new(path.clone().into_boxed_path());
        let catalog_path = match catalog_path {
            Some(catalog_path) => workspace.resolve(&catalog_path),
            None => workspace.resolve(Path::new(CATALOG_FILE)),
        };
        let catalog = Catalog::new(catalog_path.into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            catalog,
            workspace,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// Resolve a user supplied path to the key its record is tracked under
    pub fn resolve(&self, path: &str) -> PathBuf {
        self.workspace.resolve(Path::new(path))
    }

    /// Load the catalog, run `op`, and persist the catalog if `op` changed it
    pub(crate) fn with_catalog<T>(
        &mut self,
        op: impl FnOnce(&mut Self) -> anyhow::Result<T>,
    ) -> anyhow::Result<T> {
        self.catalog.rehydrate()?;

        let output = op(self)?;

        if self.catalog.is_changed() {
            self.catalog.write_updates()?;
        }

        Ok(output)
    }
}
