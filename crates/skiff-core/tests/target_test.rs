use skiff_core::{FunctionTarget, ProjectConfig};
use tempfile::TempDir;

fn add_function(root: &std::path::Path, name: &str) {
    let dir = root.join("src").join(name);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("index.ts"), "export {};\n").unwrap();
}

#[test]
fn discover_finds_functions_sorted_by_name() {
    let tmp = TempDir::new().unwrap();
    add_function(tmp.path(), "ticket");
    add_function(tmp.path(), "agent");
    add_function(tmp.path(), "seller");

    let targets = FunctionTarget::discover(tmp.path(), &ProjectConfig::default()).unwrap();

    let names: Vec<&str> = targets.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["agent", "seller", "ticket"]);
}

#[test]
fn discover_skips_shared_directory() {
    let tmp = TempDir::new().unwrap();
    add_function(tmp.path(), "ticket");
    add_function(tmp.path(), "shared");

    let targets = FunctionTarget::discover(tmp.path(), &ProjectConfig::default()).unwrap();

    assert_eq!(targets.len(), 1);
    assert_eq!(targets[0].name, "ticket");
}

#[test]
fn discover_skips_directories_without_entry_point() {
    let tmp = TempDir::new().unwrap();
    add_function(tmp.path(), "ticket");
    std::fs::create_dir_all(tmp.path().join("src/notes")).unwrap();

    let targets = FunctionTarget::discover(tmp.path(), &ProjectConfig::default()).unwrap();

    assert_eq!(targets.len(), 1);
}

#[test]
fn discover_returns_empty_for_missing_functions_dir() {
    let tmp = TempDir::new().unwrap();
    let targets = FunctionTarget::discover(tmp.path(), &ProjectConfig::default()).unwrap();
    assert!(targets.is_empty());
}

#[test]
fn resolve_returns_target_with_expected_paths() {
    let tmp = TempDir::new().unwrap();
    add_function(tmp.path(), "ticket");

    let target =
        FunctionTarget::resolve(tmp.path(), &ProjectConfig::default(), "ticket").unwrap();

    assert_eq!(target.name, "ticket");
    assert_eq!(target.entry_point, tmp.path().join("src/ticket/index.ts"));
    assert_eq!(target.out_dir, tmp.path().join("dist/ticket"));
}

#[test]
fn resolve_unknown_function_errors_with_name() {
    let tmp = TempDir::new().unwrap();

    let result = FunctionTarget::resolve(tmp.path(), &ProjectConfig::default(), "ghost");
    assert!(result.is_err());

    let err = result.unwrap_err().to_string();
    assert!(err.contains("ghost"), "got: {err}");
}
