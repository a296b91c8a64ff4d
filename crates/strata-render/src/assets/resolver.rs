use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::{AssetTag, ResolveError};

/// One loadable file of a package.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PackageFile {
    pub path: PathBuf,
    pub tag: AssetTag,
}

impl PackageFile {
    pub fn new(path: impl Into<PathBuf>, tag: AssetTag) -> Self {
        Self { path: path.into(), tag }
    }
}

/// Turns a package name into the files that make it up.
///
/// Implementations describe the asset graph; they never touch native
/// resources. Loading the returned files is the asset cache's job.
pub trait PackageResolver {
    fn resolve_package(&self, package: &str) -> Result<Vec<PackageFile>, ResolveError>;
}

impl<F> PackageResolver for F
where
    F: Fn(&str) -> Result<Vec<PackageFile>, ResolveError>,
{
    fn resolve_package(&self, package: &str) -> Result<Vec<PackageFile>, ResolveError> {
        self(package)
    }
}

/// Explicit package table.
#[derive(Debug, Clone, Default)]
pub struct MemoryResolver {
    packages: HashMap<String, Vec<PackageFile>>,
}

impl MemoryResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `path` to `package` under the asset name `name`.
    pub fn insert(&mut self, package: &str, name: &str, path: impl Into<PathBuf>) -> &mut Self {
        self.packages
            .entry(package.to_owned())
            .or_default()
            .push(PackageFile::new(path, AssetTag::new(package, name)));
        self
    }

    pub fn with(mut self, package: &str, name: &str, path: impl Into<PathBuf>) -> Self {
        self.insert(package, name, path);
        self
    }
}

impl PackageResolver for MemoryResolver {
    fn resolve_package(&self, package: &str) -> Result<Vec<PackageFile>, ResolveError> {
        self.packages
            .get(package)
            .cloned()
            .ok_or_else(|| ResolveError::UnknownPackage(package.to_owned()))
    }
}

/// Maps each sub-directory of `root` to a package.
///
/// Every regular file directly inside `root/<package>` becomes an asset
/// named after its file stem. Files are returned sorted by path so package
/// loads are reproducible across platforms.
#[derive(Debug, Clone)]
pub struct DirectoryResolver {
    root: PathBuf,
}

impl DirectoryResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl PackageResolver for DirectoryResolver {
    fn resolve_package(&self, package: &str) -> Result<Vec<PackageFile>, ResolveError> {
        let dir = self.root.join(package);
        if !dir.is_dir() {
            return Err(ResolveError::UnknownPackage(package.to_owned()));
        }

        let io_err = |source| ResolveError::Io { package: package.to_owned(), source };

        let mut paths = Vec::new();
        for entry in std::fs::read_dir(&dir).map_err(io_err)? {
            let entry = entry.map_err(io_err)?;
            if entry.file_type().map_err(io_err)?.is_file() {
                paths.push(entry.path());
            }
        }
        paths.sort();

        Ok(paths
            .into_iter()
            .filter_map(|path| {
                let stem = path.file_stem()?.to_str()?.to_owned();
                Some(PackageFile::new(path, AssetTag::new(package, stem)))
            })
            .collect())
    }
}
