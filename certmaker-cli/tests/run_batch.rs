use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const NO_FIELD_META: &str = r#"{
    "fields": [],
    "save_column": "name",
    "send_mail": false
}"#;

fn scaffold_template(root: &Path, name: &str, csv: &str) {
    let dir = root.join(name);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("meta.json"), NO_FIELD_META).unwrap();
    std::fs::write(dir.join("data.csv"), csv).unwrap();
    image::RgbImage::from_pixel(40, 30, image::Rgb([255, 255, 255]))
        .save(dir.join("template.jpg"))
        .unwrap();
}

#[test]
fn renders_each_template_into_the_output_root() {
    let workspace = TempDir::new().unwrap();
    let templates = workspace.path().join("templates");
    scaffold_template(&templates, "Certificate2024", "name\nana maria\nbob\n");
    let out = workspace.path().join("out");

    Command::cargo_bin("certmaker")
        .unwrap()
        .arg(&templates)
        .arg("--output-root")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("'Certificate2024' (2 rendered)"));

    assert!(out.join("Certificate2024").join("ANA_MARIA.pdf").exists());
    assert!(out.join("Certificate2024").join("BOB.pdf").exists());
}

#[test]
fn default_output_mirrors_templates_as_certificates() {
    let workspace = TempDir::new().unwrap();
    let templates = workspace.path().join("templates");
    scaffold_template(&templates, "CertificateX", "name\nana\n");

    Command::cargo_bin("certmaker")
        .unwrap()
        .arg(&templates)
        .assert()
        .success();

    let mirrored = workspace
        .path()
        .join("certificates")
        .join("CertificateX")
        .join("ANA.pdf");
    assert!(mirrored.exists(), "expected {}", mirrored.display());
}

#[test]
fn empty_root_reports_and_exits_zero() {
    let workspace = TempDir::new().unwrap();
    let templates = workspace.path().join("templates");
    std::fs::create_dir_all(&templates).unwrap();

    Command::cargo_bin("certmaker")
        .unwrap()
        .arg(&templates)
        .assert()
        .success()
        .stdout(predicate::str::contains("No templates found"));
}

#[test]
fn missing_root_reports_and_exits_zero() {
    let workspace = TempDir::new().unwrap();

    Command::cargo_bin("certmaker")
        .unwrap()
        .arg(workspace.path().join("nope"))
        .assert()
        .success()
        .stdout(predicate::str::contains("No templates found"));
}

#[test]
fn broken_template_fails_the_run() {
    let workspace = TempDir::new().unwrap();
    let templates = workspace.path().join("templates");
    let dir = templates.join("CertificateBad");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("meta.json"), "{ not json").unwrap();

    Command::cargo_bin("certmaker")
        .unwrap()
        .arg(&templates)
        .assert()
        .failure()
        .stderr(predicate::str::contains("CertificateBad"));
}
