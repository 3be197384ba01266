use std::process::{Command, Output};

const TAGS_SCENE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/tags.json");
const TOKEN_FIELD_SCENE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/token_field.json");

fn run_debug(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tagflow-debug"))
        .args(args)
        .output()
        .expect("Failed to execute tagflow-debug")
}

fn stdout_of(output: &Output) -> String {
    assert!(
        output.status.success(),
        "tagflow-debug failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_tree_output() {
    let stdout = stdout_of(&run_debug(&[TAGS_SCENE]));

    insta::assert_snapshot!(stdout.trim_end(), @r###"
    Flow width:100 alignment:bottom size:(72,74)
    ├── Row 0 size:(70,40)
    │   ├── [0] Fixed 30x20 pos:(0,20) size:(30,20)
    │   └── [1] Fixed 30x40 pos:(40,0) size:(30,40)
    └── Row 1 gap:10 size:(72,24)
        ├── [2] Fixed 30x20 pos:(0,54) size:(30,20)
        └── [3] Token "tag" pos:(40,50) size:(32,24)
    "###);
}

#[test]
fn test_unbounded_override_packs_one_row() {
    let stdout = stdout_of(&run_debug(&[TAGS_SCENE, "--unbounded", "--alignment", "top"]));

    assert!(stdout.starts_with("Flow width:unbounded alignment:top size:(152,40)"));
    assert!(stdout.contains("└── Row 0 size:(152,40)"));
    assert!(!stdout.contains("Row 1"));
}

#[test]
fn test_spacing_overrides() {
    let stdout = stdout_of(&run_debug(&[
        TAGS_SCENE,
        "--item-spacing",
        "0",
        "--row-spacing",
        "2",
        "--width",
        "62",
    ]));

    assert!(stdout.contains("├── Row 0 size:(60,40)"), "{}", stdout);
    assert!(stdout.contains("└── Row 1 gap:2 size:(62,24)"), "{}", stdout);
}

#[test]
fn test_json_output() {
    let stdout = stdout_of(&run_debug(&[TOKEN_FIELD_SCENE, "--format", "json"]));
    let report: serde_json::Value = serde_json::from_str(&stdout).expect("output should be JSON");

    assert_eq!(report["width"], 240.0);
    assert_eq!(report["alignment"], "anchor");

    let rows = report["rows"].as_array().expect("rows array");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["items"].as_array().map(Vec::len), Some(4));

    // The input field wraps and takes the full width of its own row
    let field = &rows[1]["items"][0];
    assert_eq!(field["index"], 4);
    assert_eq!(field["label"], "Input \"\"");
    assert_eq!(field["size"][0], 240.0);
    assert_eq!(report["size"][0], 240.0);
}

#[test]
fn test_output_file() {
    let path = std::env::temp_dir().join(format!("tagflow-debug-{}.txt", std::process::id()));
    let path_arg = path.to_string_lossy().into_owned();
    let output = run_debug(&[TAGS_SCENE, "--output", &path_arg]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let written = std::fs::read_to_string(&path).expect("output file");
    assert!(written.starts_with("Flow width:100"));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_missing_scene_fails() {
    let output = run_debug(&["tests/fixtures/missing.json"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Scene file not found"));
}

#[test]
fn test_invalid_alignment_is_rejected() {
    let output = run_debug(&[TAGS_SCENE, "--alignment", "middle"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("middle"));
}

#[test]
fn test_unknown_format_fails() {
    let output = run_debug(&[TAGS_SCENE, "--format", "yaml"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown format"));
}
