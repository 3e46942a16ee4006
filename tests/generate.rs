// tests/generate.rs

//! End-to-end generation against a populated store.

mod common;

use galley::profile::Profile;
use galley::recipe::parse_recipe_file;
use galley::workbench::{Workbench, WorkbenchConfig};
use galley::{Error, OptionValue, Store};
use std::fs;

fn release_profile() -> Profile {
    let mut profile = Profile::detect();
    profile.apply_override("compiler=gcc").unwrap();
    profile.apply_override("build_type=release").unwrap();
    profile
}

#[test]
fn test_generate_emits_configuration_for_exactly_the_pinned_deps() {
    let dir = tempfile::tempdir().unwrap();
    let store = common::populated_store(dir.path());
    let recipe = parse_recipe_file(&common::shipped_recipe("pong-c.toml")).unwrap();

    let project = dir.path().join("pong");
    fs::create_dir_all(&project).unwrap();
    let workbench = Workbench::new(WorkbenchConfig::for_source(&project), store);

    let written = workbench
        .generate(&recipe, &release_profile(), &[])
        .unwrap();

    // One .pc per pin plus the native file, nothing else
    assert_eq!(written.len(), 5);

    let generators = workbench.config().generators_dir();
    for (pin_str, _) in common::SHIPPED_PINS {
        let name = pin_str.split('/').next().unwrap();
        assert!(generators.join(format!("{}.pc", name)).exists());
    }
    assert!(generators.join("galley_meson_native.ini").exists());

    let entries = fs::read_dir(&generators).unwrap().count();
    assert_eq!(entries, 5);
}

#[test]
fn test_generated_pc_files_carry_versions_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let store = common::populated_store(dir.path());
    let recipe = parse_recipe_file(&common::shipped_recipe("pong-cpp.toml")).unwrap();

    let project = dir.path().join("pong");
    fs::create_dir_all(&project).unwrap();
    let workbench = Workbench::new(WorkbenchConfig::for_source(&project), store);
    workbench
        .generate(&recipe, &release_profile(), &[])
        .unwrap();

    let generators = workbench.config().generators_dir();
    for (pin_str, lib_file) in common::SHIPPED_PINS {
        let (name, version) = pin_str.split_once('/').unwrap();
        let pc = fs::read_to_string(generators.join(format!("{}.pc", name))).unwrap();

        assert!(pc.contains(&format!("Name: {}\n", name)));
        assert!(pc.contains(&format!("Version: {}\n", version)));
        assert!(pc.contains("Cflags: -I${includedir}\n"));
        match lib_file {
            Some(_) => assert!(pc.contains("Libs: -L${libdir}")),
            None => assert!(!pc.contains("Libs:")),
        }
    }
}

#[test]
fn test_native_file_honors_shared_override() {
    let dir = tempfile::tempdir().unwrap();
    let store = common::populated_store(dir.path());
    let recipe = parse_recipe_file(&common::shipped_recipe("pong-c.toml")).unwrap();

    let project = dir.path().join("pong");
    fs::create_dir_all(&project).unwrap();
    let workbench = Workbench::new(WorkbenchConfig::for_source(&project), store);

    // Default: static
    workbench
        .generate(&recipe, &release_profile(), &[])
        .unwrap();
    let ini = fs::read_to_string(workbench.config().native_file()).unwrap();
    assert!(ini.contains("default_library = 'static'\n"));
    assert!(ini.contains("buildtype = 'release'\n"));

    // Overridden: shared; re-running overwrites in place
    let overrides = vec![("shared".to_string(), OptionValue::Bool(true))];
    workbench
        .generate(&recipe, &release_profile(), &overrides)
        .unwrap();
    let ini = fs::read_to_string(workbench.config().native_file()).unwrap();
    assert!(ini.contains("default_library = 'shared'\n"));
}

#[test]
fn test_generate_fails_when_a_pin_is_missing_from_the_store() {
    let dir = tempfile::tempdir().unwrap();
    // Empty store: nothing installed
    let store = Store::open(&dir.path().join("store")).unwrap();
    let recipe = parse_recipe_file(&common::shipped_recipe("pong-c.toml")).unwrap();

    let project = dir.path().join("pong");
    fs::create_dir_all(&project).unwrap();
    let workbench = Workbench::new(WorkbenchConfig::for_source(&project), store);

    match workbench.generate(&recipe, &release_profile(), &[]) {
        Err(Error::DependencyMissing { pin, root }) => {
            assert_eq!(pin, "sdl/2.26.5");
            assert!(root.contains("store"));
        }
        other => panic!("expected DependencyMissing, got {:?}", other.map(|_| ())),
    }

    // Nothing was emitted for the partial list
    assert!(!workbench.config().generators_dir().exists());
}
