use std::collections::HashMap;

use crate::render::RenderBackend;

use super::{free_asset, load_render_asset, AssetTag, PackageResolver, RenderAsset};

type Package = HashMap<String, RenderAsset>;

/// Two-level (package → asset) store of loaded render assets.
///
/// Lookups go through two single-entry caches first: the last package that
/// was hit and the last asset hit inside it. Runs of draws that reference the
/// same image therefore skip both map lookups. Either cache is only ever set
/// to an entry present in `packages`, and every mutation of `packages` clears
/// both.
///
/// A lookup into a package that is not loaded loads it synchronously and
/// retries once. Load failures are logged and never propagated.
pub struct AssetCache {
    resolver: Box<dyn PackageResolver>,
    packages: HashMap<String, Package>,
    cached_package: Option<String>,
    cached_asset: Option<(String, RenderAsset)>,
}

impl AssetCache {
    pub fn new(resolver: Box<dyn PackageResolver>) -> Self {
        Self {
            resolver,
            packages: HashMap::new(),
            cached_package: None,
            cached_asset: None,
        }
    }

    /// Replaces the package resolver. Loaded packages are kept.
    pub fn set_resolver(&mut self, resolver: Box<dyn PackageResolver>) {
        self.resolver = resolver;
    }

    #[inline]
    pub fn contains_package(&self, package: &str) -> bool {
        self.packages.contains_key(package)
    }

    /// Loaded package names, sorted.
    pub fn package_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.packages.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of assets loaded under `package` (0 if absent).
    pub fn package_len(&self, package: &str) -> usize {
        self.packages.get(package).map_or(0, HashMap::len)
    }

    /// Name of the package the single-entry cache currently points at.
    pub fn cached_package(&self) -> Option<&str> {
        self.cached_package.as_deref()
    }

    /// Finds the asset `tag` refers to, loading its package on a miss.
    ///
    /// Hot path: called once per primitive per frame.
    pub fn try_find_asset(
        &mut self,
        backend: &mut dyn RenderBackend,
        tag: &AssetTag,
    ) -> Option<RenderAsset> {
        if self.cached_package.as_deref() == Some(tag.package.as_str()) {
            if let Some((name, asset)) = &self.cached_asset {
                if *name == tag.name {
                    return Some(*asset);
                }
            }
            return self.find_in_package(tag);
        }

        if !self.packages.contains_key(&tag.package) {
            log::info!("loading render package '{}' for asset '{}' on the fly", tag.package, tag.name);
            self.load_package(backend, &tag.package);
            if !self.packages.contains_key(&tag.package) {
                return None;
            }
        }

        self.cached_package = Some(tag.package.clone());
        self.cached_asset = None;
        self.find_in_package(tag)
    }

    /// Looks `tag.name` up in the (already cached) package and caches the hit.
    fn find_in_package(&mut self, tag: &AssetTag) -> Option<RenderAsset> {
        let asset = *self.packages.get(&tag.package)?.get(&tag.name)?;
        self.cached_asset = Some((tag.name.clone(), asset));
        Some(asset)
    }

    /// Resolves and loads every file of `package`, merging into any existing entry.
    ///
    /// Files that fail to load are logged and skipped. A resolver failure
    /// leaves the package map untouched. Returns the number of assets loaded.
    pub fn load_package(&mut self, backend: &mut dyn RenderBackend, package: &str) -> usize {
        // Loading may replace assets the caches hold copies of.
        self.invalidate_caches();

        let files = match self.resolver.resolve_package(package) {
            Ok(files) => files,
            Err(err) => {
                log::warn!("render package '{package}' failed to resolve: {err}");
                return 0;
            }
        };

        let mut loaded = Vec::with_capacity(files.len());
        for file in &files {
            match load_render_asset(backend, file) {
                Ok(entry) => loaded.push(entry),
                Err(err) => log::debug!("skipping render asset {}: {err:#}", file.tag),
            }
        }

        let count = loaded.len();
        let entry = self.packages.entry(package.to_owned()).or_default();
        for (name, asset) in loaded {
            if let Some(replaced) = entry.insert(name, asset) {
                free_asset(backend, replaced);
            }
        }

        log::debug!("loaded {count} of {} render assets from package '{package}'", files.len());
        count
    }

    /// Releases every asset of `package` and forgets it. No-op if absent.
    pub fn unload_package(&mut self, backend: &mut dyn RenderBackend, package: &str) {
        self.invalidate_caches();

        if let Some(assets) = self.packages.remove(package) {
            for asset in assets.into_values() {
                free_asset(backend, asset);
            }
            log::debug!("unloaded render package '{package}'");
        }
    }

    /// Frees everything and reloads each previously loaded package from scratch.
    ///
    /// A package whose resolution fails comes back empty rather than
    /// disappearing, so it is picked up again by the next reload.
    pub fn reload_all_packages(&mut self, backend: &mut dyn RenderBackend) {
        let mut names: Vec<String> = self.packages.keys().cloned().collect();
        names.sort_unstable();

        self.free_all(backend);

        for name in names {
            self.load_package(backend, &name);
            if !self.packages.contains_key(&name) {
                log::warn!("render package '{name}' kept empty after failed reload");
                self.packages.insert(name, Package::new());
            }
        }
    }

    /// Releases every loaded asset and empties the package map.
    pub fn clean_up(&mut self, backend: &mut dyn RenderBackend) {
        self.free_all(backend);
    }

    fn free_all(&mut self, backend: &mut dyn RenderBackend) {
        self.invalidate_caches();
        for (_, assets) in self.packages.drain() {
            for asset in assets.into_values() {
                free_asset(backend, asset);
            }
        }
    }

    #[inline]
    fn invalidate_caches(&mut self) {
        if self.cached_package.is_some() {
            log::trace!("asset lookup caches invalidated");
        }
        self.cached_package = None;
        self.cached_asset = None;
    }
}

impl std::fmt::Debug for AssetCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssetCache")
            .field("packages", &self.packages)
            .field("cached_package", &self.cached_package)
            .field("cached_asset", &self.cached_asset)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::rc::Rc;

    use super::*;
    use crate::assets::{MemoryResolver, PackageFile, ResolveError};
    use crate::render::{BackendCall, RecordingBackend};

    fn backend() -> RecordingBackend {
        RecordingBackend::new()
            .with_texture("a/hero.png", 32, 32)
            .with_texture("a/tree.png", 64, 64)
            .with_texture("b/grass.png", 16, 16)
            .with_font("b/ui018.ttf")
    }

    fn resolver() -> MemoryResolver {
        MemoryResolver::new()
            .with("a", "hero", "a/hero.png")
            .with("a", "tree", "a/tree.png")
            .with("b", "grass", "b/grass.png")
            .with("b", "ui", "b/ui018.ttf")
            .with("b", "broken", "b/ui1.ttf")
    }

    fn tag(package: &str, name: &str) -> AssetTag {
        AssetTag::new(package, name)
    }

    #[test]
    fn miss_loads_package_on_demand() {
        let mut backend = backend();
        let mut cache = AssetCache::new(Box::new(resolver()));

        let hero = cache.try_find_asset(&mut backend, &tag("a", "hero"));
        assert!(hero.and_then(|a| a.texture()).is_some());
        assert!(cache.contains_package("a"));
        assert_eq!(cache.package_len("a"), 2);
        assert_eq!(cache.cached_package(), Some("a"));
    }

    #[test]
    fn failing_font_file_does_not_fail_package() {
        let mut backend = backend();
        let mut cache = AssetCache::new(Box::new(resolver()));

        assert_eq!(cache.load_package(&mut backend, "b"), 2);
        let ui = cache.try_find_asset(&mut backend, &tag("b", "ui"));
        assert!(matches!(ui, Some(RenderAsset::Font { point_size: 18, .. })));
        assert_eq!(cache.try_find_asset(&mut backend, &tag("b", "broken")), None);
    }

    #[test]
    fn unknown_asset_in_known_package_is_not_found() {
        let mut backend = backend();
        let mut cache = AssetCache::new(Box::new(resolver()));

        assert!(cache.try_find_asset(&mut backend, &tag("a", "hero")).is_some());
        assert_eq!(cache.try_find_asset(&mut backend, &tag("a", "villain")), None);
        // the miss must not poison the asset cache for the next hit
        assert!(cache.try_find_asset(&mut backend, &tag("a", "tree")).is_some());
        assert!(cache.try_find_asset(&mut backend, &tag("a", "hero")).is_some());
    }

    #[test]
    fn unknown_package_is_not_found_and_not_inserted() {
        let mut backend = backend();
        let mut cache = AssetCache::new(Box::new(resolver()));

        assert_eq!(cache.try_find_asset(&mut backend, &tag("zzz", "hero")), None);
        assert!(!cache.contains_package("zzz"));
        assert_eq!(cache.cached_package(), None);
    }

    #[test]
    fn loading_twice_merges_by_name() {
        let mut backend = backend();
        let mut cache = AssetCache::new(Box::new(resolver()));

        cache.load_package(&mut backend, "a");
        let first = cache.try_find_asset(&mut backend, &tag("a", "hero")).unwrap();
        cache.load_package(&mut backend, "a");
        let second = cache.try_find_asset(&mut backend, &tag("a", "hero")).unwrap();

        assert_eq!(cache.package_len("a"), 2);
        assert_ne!(first, second);
        // the replaced texture was released
        let destroyed = backend
            .calls()
            .iter()
            .filter(|c| matches!(c, BackendCall::DestroyTexture(_)))
            .count();
        assert_eq!(destroyed, 2);
    }

    #[test]
    fn unload_releases_and_invalidates() {
        let mut backend = backend();
        let mut cache = AssetCache::new(Box::new(resolver()));

        let hero = cache.try_find_asset(&mut backend, &tag("a", "hero")).unwrap();
        cache.unload_package(&mut backend, "a");

        assert!(!cache.contains_package("a"));
        assert_eq!(cache.cached_package(), None);
        assert!(backend.calls().contains(&BackendCall::DestroyTexture(hero.texture().unwrap())));
        assert_eq!(backend.live_textures(), 0);

        // unloading an absent package is a no-op
        cache.unload_package(&mut backend, "a");
    }

    #[test]
    fn lookup_after_unload_reloads_fresh_handles() {
        let mut backend = backend();
        let mut cache = AssetCache::new(Box::new(resolver()));

        let before = cache.try_find_asset(&mut backend, &tag("a", "hero")).unwrap();
        cache.unload_package(&mut backend, "a");
        let after = cache.try_find_asset(&mut backend, &tag("a", "hero")).unwrap();
        assert_ne!(before, after);
    }

    #[test]
    fn lookup_after_unload_of_withdrawn_package_is_not_found() {
        let withdrawn: Rc<RefCell<HashSet<String>>> = Rc::default();
        let table = resolver();
        let resolve = {
            let withdrawn = Rc::clone(&withdrawn);
            move |package: &str| -> Result<Vec<PackageFile>, ResolveError> {
                if withdrawn.borrow().contains(package) {
                    return Err(ResolveError::UnknownPackage(package.to_owned()));
                }
                table.resolve_package(package)
            }
        };

        let mut backend = backend();
        let mut cache = AssetCache::new(Box::new(resolve));
        assert!(cache.try_find_asset(&mut backend, &tag("a", "hero")).is_some());
        assert_eq!(cache.cached_package(), Some("a"));

        cache.unload_package(&mut backend, "a");
        withdrawn.borrow_mut().insert("a".to_owned());

        assert_eq!(cache.try_find_asset(&mut backend, &tag("a", "hero")), None);
        assert!(!cache.contains_package("a"));
        assert_eq!(cache.cached_package(), None);
        assert_eq!(backend.live_textures(), 0);
    }

    #[test]
    fn reload_keeps_package_set_when_one_fails() {
        let failing: Rc<RefCell<HashSet<String>>> = Rc::default();
        let table = resolver();
        let resolve = {
            let failing = Rc::clone(&failing);
            move |package: &str| -> Result<Vec<PackageFile>, ResolveError> {
                if failing.borrow().contains(package) {
                    return Err(ResolveError::UnknownPackage(package.to_owned()));
                }
                table.resolve_package(package)
            }
        };

        let mut backend = backend();
        let mut cache = AssetCache::new(Box::new(resolve));
        cache.load_package(&mut backend, "a");
        cache.load_package(&mut backend, "b");

        failing.borrow_mut().insert("b".to_owned());
        cache.reload_all_packages(&mut backend);

        assert_eq!(cache.package_names(), ["a", "b"]);
        assert_eq!(cache.package_len("a"), 2);
        assert_eq!(cache.package_len("b"), 0);
        assert_eq!(backend.live_textures(), 2);
        assert_eq!(backend.live_fonts(), 0);
    }

    #[test]
    fn clean_up_frees_everything() {
        let mut backend = backend();
        let mut cache = AssetCache::new(Box::new(resolver()));
        cache.load_package(&mut backend, "a");
        cache.load_package(&mut backend, "b");

        cache.clean_up(&mut backend);

        assert!(cache.package_names().is_empty());
        assert_eq!(backend.live_textures(), 0);
        assert_eq!(backend.live_fonts(), 0);
    }
}
