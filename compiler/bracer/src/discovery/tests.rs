use super::*;
use pretty_assertions::assert_eq;
use std::fs::File;
use tempfile::tempdir;

fn exts() -> Vec<String> {
    crate::options::DEFAULT_EXTENSIONS
        .iter()
        .map(ToString::to_string)
        .collect()
}

#[test]
fn test_discover_empty_dir() {
    let dir = tempdir().unwrap();
    assert!(discover_sources(dir.path(), &exts()).is_empty());
}

#[test]
fn test_discover_by_extension() {
    let dir = tempdir().unwrap();
    File::create(dir.path().join("App.tsx")).unwrap();
    File::create(dir.path().join("util.js")).unwrap();
    File::create(dir.path().join("Upper.JSX")).unwrap();
    File::create(dir.path().join("notes.md")).unwrap();
    File::create(dir.path().join("Makefile")).unwrap();

    let files = discover_sources(dir.path(), &exts());
    let names: Vec<_> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_str().unwrap())
        .collect();
    assert_eq!(names, vec!["App.tsx", "Upper.JSX", "util.js"]);
}

#[test]
fn test_discover_recursive_sorted() {
    let dir = tempdir().unwrap();
    let sub = dir.path().join("components");
    fs::create_dir(&sub).unwrap();
    File::create(dir.path().join("z.ts")).unwrap();
    File::create(sub.join("a.ts")).unwrap();

    let files = discover_sources(dir.path(), &exts());
    assert_eq!(files, vec![sub.join("a.ts"), dir.path().join("z.ts")]);
}

#[test]
fn test_skip_hidden_and_vendor_dirs() {
    let dir = tempdir().unwrap();
    for skipped in [".cache", "node_modules", "dist", "build", "target"] {
        let sub = dir.path().join(skipped);
        fs::create_dir(&sub).unwrap();
        File::create(sub.join("x.js")).unwrap();
    }
    File::create(dir.path().join(".eslintrc.js")).unwrap();
    File::create(dir.path().join("index.js")).unwrap();

    let files = discover_sources(dir.path(), &exts());
    assert_eq!(files, vec![dir.path().join("index.js")]);
}

#[test]
fn test_custom_extensions() {
    let dir = tempdir().unwrap();
    File::create(dir.path().join("a.vue")).unwrap();
    File::create(dir.path().join("b.js")).unwrap();

    let files = discover_sources(dir.path(), &["vue".to_string()]);
    assert_eq!(files, vec![dir.path().join("a.vue")]);
}

#[test]
fn test_expand_keeps_explicit_files() {
    let dir = tempdir().unwrap();
    let notes = dir.path().join("notes.txt");
    File::create(&notes).unwrap();
    let missing = dir.path().join("missing.tsx");

    let files = expand_paths(&[notes.clone(), missing.clone()], &exts());
    assert_eq!(files, vec![notes, missing]);
}

#[test]
fn test_expand_mixes_dirs_and_dedups() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a.js");
    let b = dir.path().join("b.js");
    File::create(&a).unwrap();
    File::create(&b).unwrap();

    let files = expand_paths(&[b.clone(), dir.path().to_path_buf()], &exts());
    assert_eq!(files, vec![b, a]);
}

// === Symlinks ===

#[cfg(unix)]
#[test]
fn test_symlink_to_ancestor_is_not_followed() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("src");
    fs::create_dir(&src).unwrap();
    File::create(src.join("app.tsx")).unwrap();
    std::os::unix::fs::symlink(dir.path(), src.join("up")).unwrap();

    let files = discover_sources(dir.path(), &exts());
    assert_eq!(files, vec![src.join("app.tsx")]);
}

#[cfg(unix)]
#[test]
fn test_symlinked_file_scanned_once() {
    let dir = tempdir().unwrap();
    let real = dir.path().join("a.js");
    File::create(&real).unwrap();
    std::os::unix::fs::symlink(&real, dir.path().join("b.js")).unwrap();

    assert_eq!(discover_sources(dir.path(), &exts()).len(), 2);
    let files = expand_paths(&[dir.path().to_path_buf()], &exts());
    assert_eq!(files, vec![real]);
}

#[cfg(unix)]
#[test]
fn test_expand_dedups_aliased_roots() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("src");
    fs::create_dir(&src).unwrap();
    File::create(src.join("app.tsx")).unwrap();
    let alias = dir.path().join("alias");
    std::os::unix::fs::symlink(&src, &alias).unwrap();

    let files = expand_paths(&[src.clone(), alias], &exts());
    assert_eq!(files, vec![src.join("app.tsx")]);
}
