//! End-to-end tests for the `generate` command.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::fs;
use std::path::Path;

use interop_codegen::{CancellationToken, CodegenError};
use interopc::{generate, load_config, load_descriptors, DriverError, GenerateOptions};
use pretty_assertions::assert_eq;

const DESCRIPTORS: &str = r#"{
    "structs": [
        {
            "name": "Framework",
            "namespace": "Game.System",
            "member_functions": [
                {
                    "method": {
                        "name": "Tick",
                        "modifiers": "public partial",
                        "return_type": "bool",
                        "parameters": [{ "name": "delta", "type": "float" }]
                    },
                    "signature": { "pattern": "40 53 48 83 EC 20" }
                }
            ],
            "static_addresses": [
                {
                    "method": {
                        "name": "Instance",
                        "modifiers": "public static partial",
                        "return_type": "Framework*",
                        "is_static": true
                    },
                    "signature": { "pattern": "48 8B 1D ?? ?? ?? ??", "relocation_offsets": [3] },
                    "is_pointer": true
                }
            ],
            "fixed_arrays": [
                { "field": "_gamePath", "element_type": "byte", "length": 260, "is_string": true }
            ]
        },
        {
            "name": "Inner",
            "namespace": "Game.UI",
            "containing_types": ["Outer"],
            "virtual_functions": [
                {
                    "method": {
                        "name": "Show",
                        "modifiers": "public partial",
                        "return_type": "void"
                    },
                    "index": 5
                }
            ]
        }
    ]
}"#;

fn write(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn options(dir: &Path, input: &Path) -> GenerateOptions {
    GenerateOptions {
        input: input.to_path_buf(),
        output: dir.join("out"),
        no_parallel: true,
        ..GenerateOptions::default()
    }
}

#[test]
fn writes_every_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(dir.path(), "structs.json", DESCRIPTORS);

    let summary = generate(&options(dir.path(), &input), &CancellationToken::new()).unwrap();

    assert!(summary.is_success());
    let names: Vec<String> = summary
        .written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        [
            "Game.System.Framework.g.cs",
            "Game.UI.Outer.Inner.g.cs",
            "Interop.Generated.Addresses.g.cs",
            "Interop.Generated.FixedSizeArrays.g.cs",
        ]
    );

    let out = dir.path().join("out");
    let framework = fs::read_to_string(out.join("Game.System.Framework.g.cs")).unwrap();
    assert!(framework.starts_with("// <auto-generated/>\n\nnamespace Game.System;\n"));
    assert!(framework.contains("public static Framework** ppInstance"));
    assert!(framework.contains("ThrowStringSizeTooLarge(\"GamePathString\", 259);"));

    let inner = fs::read_to_string(out.join("Game.UI.Outer.Inner.g.cs")).unwrap();
    assert!(inner.contains("unsafe partial struct Outer\n{\n    unsafe partial struct Inner\n"));
    assert!(
        inner.contains("FieldOffsetAttribute(40)] public delegate* unmanaged<Inner*, void> Show;")
    );

    let registration = fs::read_to_string(out.join("Interop.Generated.Addresses.g.cs")).unwrap();
    for name in ["Tick", "Instance"] {
        let call = format!("RegisterAddress(global::Game.System.Framework.Addresses.{name});");
        assert!(registration.contains(&call));
    }

    let arrays = fs::read_to_string(out.join("Interop.Generated.FixedSizeArrays.g.cs")).unwrap();
    assert!(arrays.contains("public struct FixedSizeArray260<T> where T : unmanaged"));
}

#[test]
fn config_document_and_flags_combine() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(dir.path(), "structs.json", DESCRIPTORS);
    let config = write(
        dir.path(),
        "config.json",
        r#"{ "pointer_size": 4, "runtime_namespace": "Native.Resolver" }"#,
    );

    let loaded = load_config(&config).unwrap();
    assert_eq!(loaded.pointer_size, 4);
    assert_eq!(loaded.generated_namespace, "Interop.Generated");

    let options = GenerateOptions {
        config: Some(config),
        generated_namespace: Some("Game.Generated".to_string()),
        ..options(dir.path(), &input)
    };
    generate(&options, &CancellationToken::new()).unwrap();

    let out = dir.path().join("out");
    let inner = fs::read_to_string(out.join("Game.UI.Outer.Inner.g.cs")).unwrap();
    assert!(inner.contains("FieldOffsetAttribute(20)]"));
    let registration = fs::read_to_string(out.join("Game.Generated.Addresses.g.cs")).unwrap();
    assert!(registration.contains("namespace Game.Generated;"));
    assert!(registration.contains("global::Native.Resolver.Resolver.GetInstance"));
}

#[test]
fn malformed_struct_is_reported_but_batch_is_written() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(
        dir.path(),
        "structs.json",
        r#"{ "structs": [
            { "name": "Good" },
            {
                "name": "Bad",
                "static_virtual_table": { "pattern": "48 8D QQ ?? ??", "relocation_offsets": [3] }
            }
        ] }"#,
    );

    let summary = generate(&options(dir.path(), &input), &CancellationToken::new()).unwrap();

    assert!(!summary.is_success());
    assert_eq!(summary.written.len(), 3);
    assert!(matches!(
        &summary.errors[..],
        [CodegenError::MalformedSignature { symbol, .. }] if symbol == "Bad.StaticVirtualTable"
    ));
    assert!(!dir.path().join("out").join("Bad.g.cs").exists());
}

#[test]
fn cancelled_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(dir.path(), "structs.json", DESCRIPTORS);
    let cancel = CancellationToken::new();
    cancel.cancel();

    let result = generate(&options(dir.path(), &input), &cancel);

    assert!(matches!(result, Err(DriverError::Codegen(CodegenError::Cancelled))));
    assert!(!dir.path().join("out").exists());
}

#[test]
fn bad_documents_are_rejected() {
    let dir = tempfile::tempdir().unwrap();

    let missing = dir.path().join("missing.json");
    assert!(matches!(load_descriptors(&missing), Err(DriverError::Read { .. })));

    let invalid = write(dir.path(), "invalid.json", r#"{ "structures": [] }"#);
    assert!(matches!(load_descriptors(&invalid), Err(DriverError::Descriptors { .. })));

    let config = write(dir.path(), "config.json", r#"{ "pointer_size": "eight" }"#);
    assert!(matches!(load_config(&config), Err(DriverError::Config { .. })));
}

#[test]
fn empty_document_yields_batch_artifacts_only() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(dir.path(), "structs.json", "{}");

    let summary = generate(&options(dir.path(), &input), &CancellationToken::new()).unwrap();

    assert_eq!(summary.written.len(), 2);
}

#[test]
fn relocation_offset_past_pattern_is_written_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(
        dir.path(),
        "structs.json",
        r#"{ "structs": [
            {
                "name": "Framework",
                "namespace": "Game",
                "static_addresses": [
                    {
                        "method": {
                            "name": "Instance",
                            "modifiers": "public static partial",
                            "return_type": "Framework*",
                            "is_static": true
                        },
                        "signature": { "pattern": "48 8B 0D", "relocation_offsets": [3] },
                        "is_pointer": true
                    }
                ]
            }
        ] }"#,
    );

    let summary = generate(&options(dir.path(), &input), &CancellationToken::new()).unwrap();

    assert!(summary.is_success());
    let framework =
        fs::read_to_string(dir.path().join("out").join("Game.Framework.g.cs")).unwrap();
    assert!(framework.contains("\"Game.Framework.Instance\", \"48 8B 0D ?? ?? ?? ?? ??\""));
    assert!(framework.contains("new byte[] { 3 }"));
}

#[test]
fn struct_sharing_a_batch_file_name_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(
        dir.path(),
        "structs.json",
        r#"{ "structs": [
            { "name": "FixedSizeArrays" },
            { "name": "Addresses", "namespace": "Interop.Generated" }
        ] }"#,
    );

    let summary = generate(&options(dir.path(), &input), &CancellationToken::new()).unwrap();

    assert_eq!(
        summary.errors,
        [CodegenError::DuplicateArtifact {
            hint_name: "Interop.Generated.Addresses.g.cs".to_string(),
        }]
    );
    let out = dir.path().join("out");
    assert!(out.join("FixedSizeArrays.g.cs").exists());
    let registration = fs::read_to_string(out.join("Interop.Generated.Addresses.g.cs")).unwrap();
    assert!(registration.contains("public static class Addresses"));
    assert!(!registration.contains("unsafe partial struct"));
}
