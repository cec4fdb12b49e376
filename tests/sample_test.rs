use std::path::PathBuf;
use stempel::merge::merge_options;
use stempel::options::{ProjectKind, ProjectOptions};
use stempel::sample::{parse_bundle, sample_files};

fn sample_config(make_sample_files: bool) -> stempel::merge::ProjectConfig {
    merge_options(ProjectOptions {
        name: "test-project".to_string(),
        kind: ProjectKind::CdkApp,
        make_sample_files: Some(make_sample_files),
        ..Default::default()
    })
    .unwrap()
}

#[test]
fn test_committed_bundle_contains_all_templates() {
    let entries = parse_bundle(include_str!("../src/template_text.gen")).unwrap();
    let names: Vec<&str> = entries.keys().map(|n| n.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Configuration",
            "Main",
            "MainStack",
            "MainStage",
            "Parameters",
            "PipelineStack",
            "Statics",
        ]
    );
}

#[test]
fn test_no_sample_files_by_default() {
    assert!(sample_files(&sample_config(false)).unwrap().is_empty());
}

#[test]
fn test_sample_file_set() {
    let files = sample_files(&sample_config(true)).unwrap();

    let paths: Vec<&PathBuf> = files.iter().map(|f| &f.path).collect();
    for expected in [
        "src/index.ts",
        "src/Statics.ts",
        "src/Configuration.ts",
        "src/PipelineStack.ts",
        "src/MainStage.ts",
        "src/MainStack.ts",
    ] {
        assert!(paths.contains(&&PathBuf::from(expected)), "missing {}", expected);
    }
    // Parameters is bundled for the pipeline sample but never emitted itself.
    assert!(!paths.contains(&&PathBuf::from("src/Parameters.ts")));
}

#[test]
fn test_statics_file_substitutes_project_name() {
    let files = sample_files(&sample_config(true)).unwrap();
    let statics = files.iter().find(|f| f.path.ends_with("Statics.ts")).unwrap();

    assert!(statics.contents.contains("static readonly projectName = 'test-project';"));
    assert!(!statics.contents.contains("<project-name>"));
}

#[test]
fn test_other_files_are_copied_verbatim() {
    let files = sample_files(&sample_config(true)).unwrap();

    let main = files.iter().find(|f| f.path.ends_with("index.ts")).unwrap();
    assert!(main.contents.contains("replace old main file with this file!"));

    let configuration =
        files.iter().find(|f| f.path.ends_with("Configuration.ts")).unwrap();
    assert!(configuration.contents.contains("export function getBranchToBuild("));
    assert!(configuration.contents.contains("export function getConfiguration("));

    let pipeline = files.iter().find(|f| f.path.ends_with("PipelineStack.ts")).unwrap();
    assert!(pipeline.contents.contains("new ParameterStage("));
    assert!(pipeline.contents.contains("new MainStage("));
    // Substitution markers survive the bundle round trip unescaped.
    assert!(pipeline.contents.contains("`${Statics.projectName}-parameters`"));

    let stage = files.iter().find(|f| f.path.ends_with("MainStage.ts")).unwrap();
    assert!(stage.contents.contains("class MainStage"));

    let stack = files.iter().find(|f| f.path.ends_with("MainStack.ts")).unwrap();
    assert!(stack.contents.contains("class MainStack"));
}

#[test]
fn test_parse_bundle_preserves_entry_order() {
    let text = "// Note this file is auto-generated\nexport const B = `two`\nexport const A = `one`";
    let entries = parse_bundle(text).unwrap();
    let names: Vec<&str> = entries.keys().map(|n| n.as_str()).collect();
    assert_eq!(names, vec!["B", "A"]);
}

#[test]
fn test_parse_bundle_rejects_broken_input() {
    assert!(parse_bundle("").is_err());
    assert!(parse_bundle("// Note this file is auto-generated").is_err());
    assert!(parse_bundle("export const Broken = `never closed").is_err());
}
