//! End-to-end setup flow against real adapters (no subprocesses spawned).

use std::path::Path;

use cleanstart_adapters::{BuiltinBundles, DirBundles, MemoryFilesystem, RecordingRunner};
use cleanstart_core::{
    application::SetupService,
    domain::{PackageManager, ProjectType, dependencies_for},
};

fn service(fs: MemoryFilesystem, runner: RecordingRunner) -> SetupService {
    SetupService::new(Box::new(BuiltinBundles::new()), Box::new(fs), Box::new(runner))
}

#[test]
fn full_node_flow_copies_then_installs() {
    let fs = MemoryFilesystem::new();
    let runner = RecordingRunner::new();
    let service = service(fs.clone(), runner.clone());
    let dest = Path::new("/project");

    let copied = service.copy_configs(ProjectType::Node, dest).unwrap();
    let installed = service
        .install_dependencies(PackageManager::Npm, ProjectType::Node, dest)
        .unwrap();

    // Exactly the bundle's file set, under the destination.
    assert_eq!(copied.files.len(), fs.file_count());
    assert!(fs.read_file(Path::new("/project/.eslintrc.json")).is_some());
    assert!(fs.read_file(Path::new("/project/.editorconfig")).is_some());

    // Exactly 6 install invocations, all bound to the destination.
    assert_eq!(installed.installed.len(), 6);
    let invocations = runner.invocations();
    assert_eq!(invocations.len(), 6);
    assert!(invocations.iter().all(|i| i.cwd == dest));
    assert_eq!(
        invocations[0].args,
        vec!["install", "-D", "eslint@8.33.0"]
    );
}

#[test]
fn react_flow_issues_nine_yarn_invocations() {
    let runner = RecordingRunner::new();
    let service = service(MemoryFilesystem::new(), runner.clone());

    service
        .install_dependencies(PackageManager::Yarn, ProjectType::React, Path::new("/p"))
        .unwrap();

    let invocations = runner.invocations();
    assert_eq!(invocations.len(), 9);
    for (invocation, dep) in invocations.iter().zip(dependencies_for(ProjectType::React)) {
        assert_eq!(invocation.program, "yarn");
        assert_eq!(invocation.args, vec!["add", "--dev", &dep.spec()]);
    }
}

#[test]
fn failed_install_stops_the_sequence() {
    let runner = RecordingRunner::failing_at(4);
    let service = service(MemoryFilesystem::new(), runner.clone());

    let result =
        service.install_dependencies(PackageManager::Npm, ProjectType::React, Path::new("/p"));

    assert!(result.is_err());
    // Call 4 failed; calls 5..9 never started.
    assert_eq!(runner.call_count(), 5);
}

#[test]
fn second_copy_overwrites_without_error() {
    let fs = MemoryFilesystem::new();
    let service = service(fs.clone(), RecordingRunner::new());
    let dest = Path::new("/project");

    let first = service.copy_configs(ProjectType::Node, dest).unwrap();
    let second = service.copy_configs(ProjectType::Node, dest).unwrap();

    assert_eq!(first.files, second.files);
    assert_eq!(fs.file_count(), first.files.len());
}

#[test]
fn dir_bundles_copy_matches_directory_contents() {
    let bundle_root = tempfile::tempdir().unwrap();
    let node = bundle_root.path().join("node");
    std::fs::create_dir_all(&node).unwrap();
    std::fs::write(node.join(".eslintrc.json"), "{\"extends\": []}").unwrap();
    std::fs::write(node.join(".prettierrc"), "{}").unwrap();

    let fs = MemoryFilesystem::new();
    let service = SetupService::new(
        Box::new(DirBundles::new(bundle_root.path())),
        Box::new(fs.clone()),
        Box::new(RecordingRunner::new()),
    );

    service
        .copy_configs(ProjectType::Node, Path::new("/project"))
        .unwrap();

    assert_eq!(
        fs.list_files(),
        vec![
            Path::new("/project/.eslintrc.json").to_path_buf(),
            Path::new("/project/.prettierrc").to_path_buf(),
        ]
    );
    assert_eq!(
        fs.read_file(Path::new("/project/.eslintrc.json")).unwrap(),
        "{\"extends\": []}"
    );
}
