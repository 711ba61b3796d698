use std::collections::HashSet;
use std::env;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Deserialize)]
struct CatalogFile {
    organelles: Vec<OrganelleEntry>,
    targets: Vec<TargetEntry>,
}

#[derive(Deserialize)]
struct OrganelleEntry {
    id: String,
    name: String,
    img: String,
}

#[derive(Deserialize)]
struct TargetEntry {
    id: String,
    label: String,
}

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("missing CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir.parent().unwrap_or(&manifest_dir);
    let env_path = workspace_root.join(".env");
    let env_local_path = workspace_root.join(".env.local");

    let _ = dotenvy::from_filename(&env_local_path);
    let _ = dotenvy::from_filename(&env_path);

    println!("cargo:rerun-if-env-changed=ORGANELLE_CATALOG_PATH");
    println!("cargo:rerun-if-changed={}", env_path.display());
    println!("cargo:rerun-if-changed={}", env_local_path.display());

    let catalog_path = resolve_catalog_path(workspace_root);
    println!("cargo:rerun-if-changed={}", catalog_path.display());

    let contents = fs::read_to_string(&catalog_path).unwrap_or_else(|err| {
        panic!(
            "failed to read organelle catalog at {}: {err}",
            catalog_path.display()
        )
    });

    let catalog: CatalogFile = toml::from_str(&contents).unwrap_or_else(|err| {
        panic!(
            "failed to parse organelle catalog at {}: {err}",
            catalog_path.display()
        )
    });

    if catalog.organelles.is_empty() {
        panic!("organelle catalog {} has no entries", catalog_path.display());
    }

    validate_organelles(&catalog.organelles, &catalog_path);
    validate_targets(&catalog.targets, &catalog.organelles, &catalog_path);

    let mut output = String::new();
    writeln!(&mut output, "pub const ORGANELLES: &[Organelle] = &[").unwrap();
    for entry in &catalog.organelles {
        let img_path = resolve_src_path(&entry.img, workspace_root);
        if img_path.exists() {
            println!("cargo:rerun-if-changed={}", img_path.display());
        } else {
            println!(
                "cargo:warning=image for organelle '{}' not found at {}, chip will show its label only",
                entry.id,
                img_path.display()
            );
        }
        writeln!(&mut output, "    Organelle {{").unwrap();
        writeln!(&mut output, "        id: {},", rust_string(&entry.id)).unwrap();
        writeln!(&mut output, "        name: {},", rust_string(&entry.name)).unwrap();
        writeln!(&mut output, "        img: {},", rust_string(&entry.img)).unwrap();
        writeln!(&mut output, "    }},").unwrap();
    }
    writeln!(&mut output, "];").unwrap();
    writeln!(&mut output).unwrap();

    writeln!(&mut output, "pub const TARGETS: &[Target] = &[").unwrap();
    for entry in &catalog.targets {
        writeln!(&mut output, "    Target {{").unwrap();
        writeln!(&mut output, "        id: {},", rust_string(&entry.id)).unwrap();
        writeln!(&mut output, "        label: {},", rust_string(&entry.label)).unwrap();
        writeln!(&mut output, "    }},").unwrap();
    }
    writeln!(&mut output, "];").unwrap();

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("missing OUT_DIR"));
    let out_path = out_dir.join("organelle_catalog.rs");
    fs::write(&out_path, output).unwrap_or_else(|err| {
        panic!("failed to write {}: {err}", out_path.display())
    });
}

fn resolve_catalog_path(workspace_root: &Path) -> PathBuf {
    let env_value = env::var("ORGANELLE_CATALOG_PATH").ok();
    let raw_path = match env_value {
        Some(value) if !value.trim().is_empty() => PathBuf::from(value),
        _ => workspace_root.join("catalog/organelles.toml"),
    };
    if raw_path.is_relative() {
        workspace_root.join(raw_path)
    } else {
        raw_path
    }
}

fn rust_string(value: &str) -> String {
    format!("{:?}", value)
}

fn validate_organelles(entries: &[OrganelleEntry], catalog_path: &Path) {
    let mut ids = HashSet::new();
    for entry in entries {
        if entry.id.trim().is_empty() {
            panic!("organelle id cannot be empty in {}", catalog_path.display());
        }
        if entry.name.trim().is_empty() {
            panic!(
                "organelle '{}' has an empty name in {}",
                entry.id,
                catalog_path.display()
            );
        }
        if entry.img.starts_with("http://") || entry.img.starts_with("https://") {
            panic!(
                "organelle '{}' img cannot be a URL in {}",
                entry.id,
                catalog_path.display()
            );
        }
        if entry.img.starts_with("data:") {
            panic!(
                "organelle '{}' img cannot be a data URL in {}",
                entry.id,
                catalog_path.display()
            );
        }
        if !ids.insert(entry.id.as_str()) {
            panic!(
                "duplicate organelle id '{}' in {}",
                entry.id,
                catalog_path.display()
            );
        }
    }
}

fn validate_targets(targets: &[TargetEntry], organelles: &[OrganelleEntry], catalog_path: &Path) {
    let organelle_ids: HashSet<&str> = organelles.iter().map(|entry| entry.id.as_str()).collect();
    let mut ids = HashSet::new();
    for entry in targets {
        if entry.label.trim().is_empty() {
            panic!(
                "target '{}' has an empty label in {}",
                entry.id,
                catalog_path.display()
            );
        }
        if !organelle_ids.contains(entry.id.as_str()) {
            panic!(
                "target '{}' does not name an organelle in {}",
                entry.id,
                catalog_path.display()
            );
        }
        if !ids.insert(entry.id.as_str()) {
            panic!(
                "duplicate target id '{}' in {}",
                entry.id,
                catalog_path.display()
            );
        }
    }
    for id in &organelle_ids {
        if !ids.contains(id) {
            panic!(
                "organelle '{}' has no target in {}",
                id,
                catalog_path.display()
            );
        }
    }
}

fn resolve_src_path(src: &str, workspace_root: &Path) -> PathBuf {
    let raw_path = PathBuf::from(src);
    if raw_path.is_absolute() {
        return raw_path;
    }
    workspace_root.join(src.trim_start_matches('/'))
}
