use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

const CATALOG_ENV: &str = "LEVEL_CATALOG_PATH";
const DEFAULT_CATALOG: &str = "levels/catalog.toml";

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct Catalog {
    default_slug: Option<String>,
    #[serde(rename = "level")]
    levels: Vec<Level>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct Level {
    label: String,
    slug: String,
    thumbnail: String,
    width: u32,
    height: u32,
}

impl Level {
    fn check(&self) -> Result<(), String> {
        if self.slug.trim().is_empty() {
            return Err("a level has an empty slug".to_string());
        }
        for (field, value) in [("label", &self.label), ("thumbnail", &self.thumbnail)] {
            if value.trim().is_empty() {
                return Err(format!("level '{}' has an empty {field}", self.slug));
            }
        }
        if self.width == 0 || self.height == 0 {
            return Err(format!(
                "level '{}' has a {}x{} image",
                self.slug, self.width, self.height
            ));
        }
        Ok(())
    }

    fn to_rust(&self) -> String {
        format!(
            "    BuiltinLevel {{ label: {:?}, slug: {:?}, thumbnail: {:?}, width: {}, height: {} }},\n",
            self.label, self.slug, self.thumbnail, self.width, self.height
        )
    }
}

fn main() {
    let Some(root) = env::var_os("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .and_then(|dir| dir.parent().map(Path::to_path_buf))
    else {
        panic!("CARGO_MANIFEST_DIR is not set");
    };
    for dotfile in [".env.local", ".env"] {
        let path = root.join(dotfile);
        println!("cargo:rerun-if-changed={}", path.display());
        let _ = dotenvy::from_path(&path);
    }
    println!("cargo:rerun-if-env-changed={CATALOG_ENV}");

    let catalog_path = match env::var(CATALOG_ENV) {
        Ok(raw) if !raw.trim().is_empty() => root.join(raw.trim()),
        _ => root.join(DEFAULT_CATALOG),
    };
    println!("cargo:rerun-if-changed={}", catalog_path.display());

    let source = match generate(&catalog_path) {
        Ok(source) => source,
        Err(err) => panic!("level catalog {}: {err}", catalog_path.display()),
    };
    let Some(out_dir) = env::var_os("OUT_DIR").map(PathBuf::from) else {
        panic!("OUT_DIR is not set");
    };
    let out_path = out_dir.join("level_catalog.rs");
    if let Err(err) = fs::write(&out_path, source) {
        panic!("failed to write {}: {err}", out_path.display());
    }
}

fn generate(path: &Path) -> Result<String, String> {
    let text = fs::read_to_string(path).map_err(|err| err.to_string())?;
    let catalog: Catalog = toml::from_str(&text).map_err(|err| err.to_string())?;
    let Some(first) = catalog.levels.first() else {
        return Err("no levels declared".to_string());
    };

    let mut seen = HashSet::new();
    for level in &catalog.levels {
        level.check()?;
        if !seen.insert(level.slug.as_str()) {
            return Err(format!("slug '{}' appears twice", level.slug));
        }
    }
    let default_slug = catalog.default_slug.as_deref().unwrap_or(&first.slug);
    if !seen.contains(default_slug) {
        return Err(format!("default_slug '{default_slug}' names no level"));
    }

    let mut source = format!("pub const DEFAULT_LEVEL_SLUG: &str = {default_slug:?};\n\n");
    source.push_str("pub const BUILTIN_LEVELS: &[BuiltinLevel] = &[\n");
    for level in &catalog.levels {
        source.push_str(&level.to_rust());
    }
    source.push_str("];\n");
    Ok(source)
}
