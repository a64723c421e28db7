//! End-to-end CLI tests
//!
//! Drives the real binary with an isolated data directory per test, so state
//! persists across invocations within a test but never leaks between tests.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn estoque(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("estoque").unwrap();
    cmd.env("ESTOQUE_CLI_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn registers_and_lists_categories() {
    let dir = TempDir::new().unwrap();

    estoque(&dir)
        .args(["category", "add", "Bebidas"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Registered category: Bebidas"));

    estoque(&dir)
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bebidas"));
}

#[test]
fn duplicate_category_is_rejected() {
    let dir = TempDir::new().unwrap();

    estoque(&dir).args(["category", "add", "Bebidas"]).assert().success();

    estoque(&dir)
        .args(["category", "add", "Bebidas"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Category already exists: Bebidas"));
}

#[test]
fn product_requires_existing_category() {
    let dir = TempDir::new().unwrap();

    estoque(&dir)
        .args([
            "product", "add", "1", "Suco", "--category", "Inexistente", "--quantity", "10",
            "--price", "3.50",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Category not found: Inexistente"));

    estoque(&dir)
        .args(["product", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No products registered."));
}

#[test]
fn duplicate_product_id_is_rejected() {
    let dir = TempDir::new().unwrap();

    estoque(&dir).args(["category", "add", "Bebidas"]).assert().success();
    estoque(&dir)
        .args(["product", "add", "1", "Suco", "--category", "Bebidas"])
        .assert()
        .success();

    estoque(&dir)
        .args(["product", "add", "1", "Refrigerante", "--category", "Bebidas"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Product already exists: 1"));
}

#[test]
fn movements_adjust_stock_and_enforce_availability() {
    let dir = TempDir::new().unwrap();

    estoque(&dir).args(["category", "add", "Bebidas"]).assert().success();
    estoque(&dir)
        .args([
            "product", "add", "1", "Suco", "--category", "Bebidas", "--quantity", "10",
            "--price", "3.50",
        ])
        .assert()
        .success();

    estoque(&dir)
        .args(["movement", "record", "1", "entrada", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("New quantity: 15"));

    estoque(&dir)
        .args(["movement", "record", "1", "saida", "20"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Insufficient stock for product 1: requested 20, available 15",
        ));

    // The rejected outflow left quantity and ledger untouched
    estoque(&dir)
        .args(["product", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Quantity: 15"));

    estoque(&dir)
        .args(["movement", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("entrada").and(predicate::str::contains("saida").not()));
}

#[test]
fn movement_on_unknown_product_is_rejected() {
    let dir = TempDir::new().unwrap();

    estoque(&dir)
        .args(["movement", "record", "99", "entrada", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Product not found: 99"));

    estoque(&dir)
        .args(["movement", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No movements recorded."));
}

#[test]
fn unknown_movement_kind_is_a_parse_error() {
    let dir = TempDir::new().unwrap();

    estoque(&dir)
        .args(["movement", "record", "1", "venda", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown movement kind 'venda'"));
}

#[test]
fn export_with_empty_catalog_writes_no_file() {
    let dir = TempDir::new().unwrap();
    let work_dir = TempDir::new().unwrap();

    estoque(&dir)
        .current_dir(work_dir.path())
        .args(["export", "products"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No products to export."));

    assert!(!work_dir.path().join("relatorio_produtos.csv").exists());
}

#[test]
fn export_writes_reports_in_expected_format() {
    let dir = TempDir::new().unwrap();
    let work_dir = TempDir::new().unwrap();

    estoque(&dir).args(["category", "add", "Bebidas"]).assert().success();
    estoque(&dir)
        .args([
            "product", "add", "1", "Suco", "--category", "Bebidas", "--quantity", "10",
            "--price", "3.50",
        ])
        .assert()
        .success();
    estoque(&dir)
        .args(["movement", "record", "1", "entrada", "5"])
        .assert()
        .success();

    estoque(&dir)
        .current_dir(work_dir.path())
        .args(["export", "products"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Products report exported"));

    let products_csv =
        std::fs::read_to_string(work_dir.path().join("relatorio_produtos.csv")).unwrap();
    assert_eq!(
        products_csv,
        "ID,Nome,Categoria,Quantidade,Preço\r\n1,Suco,Bebidas,15,3.50\r\n"
    );

    estoque(&dir)
        .current_dir(work_dir.path())
        .args(["export", "movements"])
        .assert()
        .success();

    let movements_csv =
        std::fs::read_to_string(work_dir.path().join("relatorio_movimentacoes.csv")).unwrap();
    assert!(movements_csv.starts_with("Produto ID,Tipo,Quantidade,Data\r\n"));
    assert!(movements_csv.contains("1,entrada,5,"));
}

#[test]
fn export_json_writes_full_dump() {
    let dir = TempDir::new().unwrap();
    let work_dir = TempDir::new().unwrap();

    estoque(&dir).args(["category", "add", "Bebidas"]).assert().success();

    let output = work_dir.path().join("inventory.json");
    estoque(&dir)
        .args(["export", "json", output.to_str().unwrap(), "--pretty"])
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(json["schema_version"], "1.0.0");
    assert_eq!(json["categories"][0]["name"], "Bebidas");
}

#[test]
fn state_persists_between_invocations() {
    let dir = TempDir::new().unwrap();

    estoque(&dir).args(["category", "add", "Bebidas"]).assert().success();
    estoque(&dir)
        .args(["product", "add", "1", "Suco", "--category", "Bebidas", "--quantity", "3"])
        .assert()
        .success();

    // A fresh process sees the state written by the previous ones
    estoque(&dir)
        .args(["product", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Product: Suco"))
        .stdout(predicate::str::contains("Quantity: 3"));
}
