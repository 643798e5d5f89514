//! Integration tests for the `stratum` binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

const PACKAGE_DIR: &str = "src/main/java/com/acme/shop";

/// Maven project with one `sales` module holding an `Order` entity.
fn shop() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    fs::write(root.join("pom.xml"), "<project/>").unwrap();

    let base = root.join(PACKAGE_DIR);
    fs::create_dir_all(&base).unwrap();
    fs::write(
        base.join("ShopApplication.java"),
        "package com.acme.shop;\n\n@SpringBootApplication\npublic class ShopApplication {}\n",
    )
    .unwrap();

    let entities = base.join("sales/domain/entities");
    fs::create_dir_all(&entities).unwrap();
    fs::write(
        entities.join("Order.java"),
        "package com.acme.shop.sales.domain.entities;\n\n@Entity\npublic class Order {}\n",
    )
    .unwrap();
    dir
}

fn module_dir(root: &Path, module: &str) -> PathBuf {
    root.join(PACKAGE_DIR).join(module)
}

fn stratum(root: &Path) -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("stratum");
    cmd.current_dir(root)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("STRATUM__GENERATOR__IDTYPE");
    cmd
}

#[test]
fn test_help_flag() {
    let mut cmd = cargo::cargo_bin_cmd!("stratum");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("stratum"))
        .stdout(predicate::str::contains("scan"))
        .stdout(predicate::str::contains("create"));
}

#[test]
fn test_version_flag() {
    let mut cmd = cargo::cargo_bin_cmd!("stratum");
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_scan_prints_tree() {
    let project = shop();
    stratum(project.path())
        .arg("scan")
        .assert()
        .success()
        .stdout(predicate::str::contains("Project com.acme.shop"))
        .stdout(predicate::str::contains("sales (1 resources)"))
        .stdout(predicate::str::contains("Order [entity]"))
        .stdout(predicate::str::contains("application: absent"));
}

#[test]
fn test_scan_from_nested_directory_with_project_dir_flag() {
    let project = shop();
    let nested = module_dir(project.path(), "sales");
    let elsewhere = TempDir::new().unwrap();

    stratum(elsewhere.path())
        .arg("-C")
        .arg(&nested)
        .arg("scan")
        .assert()
        .success()
        .stdout(predicate::str::contains("sales"));
}

#[test]
fn test_relative_project_dir_still_climbs_to_the_root() {
    let project = shop();
    let inner = project.path().join("src/main");

    stratum(&inner)
        .args(["-C", ".", "scan"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Project com.acme.shop"))
        .stdout(predicate::str::contains("Order [entity]"));
}

#[test]
fn test_scan_json() {
    let project = shop();
    let out = stratum(project.path())
        .args(["scan", "--json"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["basePackage"], "com.acme.shop");
    assert_eq!(json["modules"][0]["name"], "sales");
    assert_eq!(
        json["modules"][0]["layers"]["domain"]["resources"][0]["type"],
        "entity"
    );
    assert!(json["modules"][0]["layers"]["application"].is_null());
}

#[test]
fn test_create_module_then_full_resource() {
    let project = shop();
    let root = project.path();

    stratum(root)
        .args(["create", "module", "billing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Module 'billing' ready"));
    let billing = module_dir(root, "billing");
    assert!(billing.join("application/services/implementations").is_dir());
    assert!(billing.join("infrastructure/config").is_dir());

    stratum(root)
        .args([
            "create", "resource", "entity", "Invoice", "--module", "billing", "--full",
            "--idtype", "long",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("created"));

    let entity = fs::read_to_string(billing.join("domain/entities/Invoice.java")).unwrap();
    assert!(entity.contains("private Long id;"));
    assert!(
        billing
            .join("infrastructure/repositories/InvoiceRepository.java")
            .is_file()
    );
    assert!(
        billing
            .join("application/services/implementations/InvoiceServiceImpl.java")
            .is_file()
    );
    assert!(
        billing
            .join("infrastructure/controllers/InvoiceController.java")
            .is_file()
    );

    stratum(root)
        .arg("scan")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invoice [service] -> InvoiceServiceImpl"));
}

#[test]
fn test_regeneration_reports_overwrite() {
    let project = shop();
    stratum(project.path())
        .args(["create", "resource", "entity", "Order", "-m", "sales"])
        .assert()
        .success()
        .stdout(predicate::str::contains("overwrote"));
}

#[test]
fn test_standalone_service() {
    let project = shop();
    stratum(project.path())
        .args([
            "create",
            "resource",
            "service",
            "PricingService",
            "-m",
            "sales",
            "--standalone",
        ])
        .assert()
        .success();

    let services = module_dir(project.path(), "sales").join("application/services");
    assert!(services.join("PricingService.java").is_file());
    assert!(services.join("implementations/PricingServiceImpl.java").is_file());
}

#[test]
fn test_quiet_flag() {
    let project = shop();
    stratum(project.path())
        .args(["-q", "scan"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_verbose_flag() {
    let project = shop();
    stratum(project.path())
        .args(["-v", "scan"])
        .assert()
        .success()
        .stderr(predicate::str::contains("INFO"));
}

#[test]
fn test_init_then_config_get() {
    let project = shop();
    let root = project.path();

    stratum(root)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration created"));
    let written = fs::read_to_string(root.join(".stratum.json")).unwrap();
    assert!(written.contains("\"idType\": \"UUID\""));

    fs::write(
        root.join(".stratum.json"),
        r#"{ "generator": { "idType": "LONG" } }"#,
    )
    .unwrap();
    stratum(root)
        .args(["config", "get", "generator.idType"])
        .assert()
        .success()
        .stdout(predicate::str::diff("LONG\n"));
    stratum(root)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".stratum.json"));
}

#[test]
fn test_env_overrides_config_file() {
    let project = shop();
    stratum(project.path())
        .env("STRATUM__GENERATOR__IDTYPE", "LONG")
        .args(["config", "get", "generator.idType"])
        .assert()
        .success()
        .stdout(predicate::str::diff("LONG\n"));
}

#[test]
fn test_configured_id_type_reaches_generated_entity() {
    let project = shop();
    let root = project.path();
    fs::write(
        root.join(".stratum.json"),
        r#"{ "generator": { "idType": "LONG" } }"#,
    )
    .unwrap();

    stratum(root)
        .args(["create", "resource", "entity", "Customer", "-m", "sales"])
        .assert()
        .success();
    let entity = fs::read_to_string(
        module_dir(root, "sales").join("domain/entities/Customer.java"),
    )
    .unwrap();
    assert!(entity.contains("GenerationType.IDENTITY"));
}

#[test]
fn test_shell_completions() {
    let mut cmd = cargo::cargo_bin_cmd!("stratum");
    cmd.args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("complete"));
}
