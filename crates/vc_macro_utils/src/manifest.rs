use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use toml_edit::{Document, Item, Table};

/// The caller's parsed `Cargo.toml`, used to find how generated code can
/// name a workspace crate.
///
/// # Example
///
/// ```rust
/// # use vc_macro_utils::Manifest;
/// let path: syn::Path = Manifest::shared(|m| m.get_crate_path("vc_codec"));
/// ```
///
/// Reading the manifest touches the file system and a global lock, so a
/// macro should resolve each path once per invocation and pass it along.
///
/// # Resolution rules
///
/// 1. `dependencies` lists the crate: `::crate_name`.
/// 2. The name starts with `vc_` and `dependencies` lists the façade crate
///    `vc_tabular`: `::vc_tabular::short_name` (e.g. `vc_codec` -> `::vc_tabular::codec`).
/// 3. Both rules again on `dev-dependencies`.
/// 4. Otherwise `::crate_name`.
///
/// A crate deriving on its own types should add `extern crate self as name;`
/// to its root, so that `::name` also resolves inside the crate.
#[derive(Debug)]
pub struct Manifest {
    pub manifest: Document<Box<str>>,
    pub modified_time: SystemTime,
}

const FACADE_NAME: &str = "vc_tabular";
const CRATE_PREFIX: &str = "vc_";

const DEPENDENCY_TABLES: [&str; 2] = ["dependencies", "dev-dependencies"];

impl Manifest {
    #[inline(never)]
    fn manifest_path() -> PathBuf {
        let dir = env::var_os("CARGO_MANIFEST_DIR")
            .expect("CARGO_MANIFEST_DIR should be auto-defined by cargo.");
        let path = PathBuf::from(dir).join("Cargo.toml");
        assert!(
            path.exists(),
            "Cargo manifest does not exist at path {}",
            path.display(),
        );
        path
    }

    #[inline(never)]
    fn modified_time(path: &Path) -> Result<SystemTime, std::io::Error> {
        std::fs::metadata(path).and_then(|metadata| metadata.modified())
    }

    #[inline(never)]
    fn read(path: &Path) -> Document<Box<str>> {
        let source = std::fs::read_to_string(path)
            .unwrap_or_else(|_| panic!("Unable to read cargo manifest: {}", path.display()))
            .into_boxed_str();
        Document::parse(source)
            .unwrap_or_else(|_| panic!("Failed to parse cargo manifest: {}", path.display()))
    }

    fn absolute(segments: &[&str]) -> syn::Path {
        let text = segments.iter().fold(String::new(), |mut text, segment| {
            text.push_str("::");
            text.push_str(segment);
            text
        });
        syn::parse_str(&text)
            .unwrap_or_else(|_| panic!("`{text}` is not a valid path"))
    }

    fn find_in(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Some(Self::absolute(&[name]));
        }
        let short = name.strip_prefix(CRATE_PREFIX)?;
        deps.contains_key(FACADE_NAME)
            .then(|| Self::absolute(&[FACADE_NAME, short]))
    }

    /// Returns the path of the crate `name` as seen from the caller.
    ///
    /// See the type documentation for the resolution rules.
    #[inline(never)]
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        DEPENDENCY_TABLES
            .iter()
            .find_map(|table| match self.manifest.get(table) {
                Some(Item::Table(deps)) => Self::find_in(deps, name),
                _ => None,
            })
            .unwrap_or_else(|| Self::absolute(&[name]))
    }

    /// Runs `func` on the caller's manifest.
    ///
    /// Parsed manifests are cached per path and re-read when the file's
    /// modification time changes.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let path = Self::manifest_path();
        let modified_time = Self::modified_time(&path)
            .expect("The Cargo.toml should have a modified time.");

        {
            let manifests = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(manifest) = manifests.get(&path)
                && manifest.modified_time == modified_time
            {
                return func(manifest);
            }
        }

        let manifest = Manifest {
            manifest: Self::read(&path),
            modified_time,
        };
        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path, manifest);

        result
    }
}

#[cfg(test)]
mod tests {
    use quote::ToTokens;
    use toml_edit::Document;

    use super::Manifest;

    fn resolve(toml: &str, name: &str) -> String {
        let document = Document::parse(String::from(toml).into_boxed_str()).unwrap();
        let manifest = Manifest {
            manifest: document,
            modified_time: std::time::SystemTime::UNIX_EPOCH,
        };
        manifest
            .get_crate_path(name)
            .to_token_stream()
            .to_string()
            .replace(' ', "")
    }

    #[test]
    fn resolution_order() {
        assert_eq!(resolve("[dependencies]\nvc_codec = \"0\"", "vc_codec"), "::vc_codec");
        assert_eq!(
            resolve("[dependencies]\nvc_tabular = \"0\"", "vc_codec"),
            "::vc_tabular::codec"
        );
        assert_eq!(
            resolve("[dev-dependencies]\nvc_tabular = \"0\"", "vc_codec"),
            "::vc_tabular::codec"
        );
        assert_eq!(resolve("[package]\nname = \"x\"", "vc_codec"), "::vc_codec");
    }
}
