// End-to-end tests for `shelfprice run` / `shelfprice validate`.
// Run with: cargo test -p shelfprice-cli --test reprice_cli_tests -- --nocapture

use std::path::Path;
use std::process::{Command, Output};

const CONFIG: &str = r#"
name = "CLI test"
round_up_cents = 99

[single_pack]
base_source = "wholesale_price"
multiplier = 1.45

[multi_pack]
base_source = "inventory_price"
multiplier = 1.10

[catalogs.wholesale]
file = "supplier.csv"

[catalogs.discounts]
file = "discounts.csv"

[catalogs.inventory]
file = "inventory.csv"
"#;

const SUPPLIER: &str = "\
product_number,price
A100,12.50
B200,20.00
";

const DISCOUNTS: &str = "\
product_number,price
B200,15.00
";

const INVENTORY: &str = "\
sku,name,price,weight
1001,Oil Filter $9.99. A100,9.99,1.0
1002,Fuel Pump $25.00. B200,25.00,2.0
1003,Spark Plug 4 Pack. $12.99. SP4,10.00,0.5
1004,Updraft Carburetor. $149.99. C300,149.99,6.0
1005,Seat Cushion $30.00. Z999,30.00,1.0
";

fn shelfprice() -> Command {
    Command::new(env!("CARGO_BIN_EXE_shelfprice"))
}

fn write_fixture(dir: &Path, config: &str) {
    std::fs::write(dir.join("weekly.reprice.toml"), config).unwrap();
    std::fs::write(dir.join("supplier.csv"), SUPPLIER).unwrap();
    std::fs::write(dir.join("discounts.csv"), DISCOUNTS).unwrap();
    std::fs::write(dir.join("inventory.csv"), INVENTORY).unwrap();
}

fn run_in(dir: &Path, args: &[&str]) -> Output {
    shelfprice()
        .arg("run")
        .arg(dir.join("weekly.reprice.toml"))
        .args(args)
        .output()
        .expect("failed to run shelfprice")
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()))
}

#[test]
fn run_writes_upload_files() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), CONFIG);

    let out = run_in(dir.path(), &[]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let out_dir = dir.path().join("out");
    assert_eq!(read(&out_dir.join("skus.txt")), "1001\n1002\n1003\n");
    assert_eq!(
        read(&out_dir.join("names.txt")),
        "Oil Filter $18.99. A100\nFuel Pump $21.99. B200\nSpark Plug 4 Pack. $11.99. SP4\n"
    );
    assert_eq!(read(&out_dir.join("prices.txt")), "18.99\n21.99\n11.99\n");

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("repriced 3 of 5 products"), "stderr: {stderr}");
}

#[test]
fn run_writes_reports() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), CONFIG);
    let out_dir = dir.path().join("reports");

    let out = run_in(dir.path(), &["--out-dir", out_dir.to_str().unwrap()]);
    assert!(out.status.success());

    let missing = read(&out_dir.join("missing-products.txt"));
    assert!(missing.contains("Z999"));
    assert!(missing.contains("Seat Cushion $30.00. Z999"));

    let excluded = read(&out_dir.join("excluded-products.txt"));
    assert!(excluded.contains("C300"));

    let original = read(&out_dir.join("original-products.txt"));
    assert!(original.contains("Fuel Pump $25.00. B200"));

    // wholesale listing is written before discounts apply
    let wholesale = read(&out_dir.join("wholesale-products.txt"));
    assert!(wholesale.contains("20.00"));
    assert!(!wholesale.contains("15.00"));

    assert!(read(&out_dir.join("updated-products.txt")).contains("Oil Filter $18.99. A100"));
}

#[test]
fn run_json_output() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), CONFIG);
    let json_path = dir.path().join("result.json");

    let out = run_in(dir.path(), &["--json", "--output", json_path.to_str().unwrap()]);
    assert!(out.status.success());

    let stdout: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let file: serde_json::Value = serde_json::from_str(&read(&json_path)).unwrap();
    assert_eq!(stdout["summary"], file["summary"]);

    assert_eq!(stdout["meta"]["config_name"], "CLI test");
    assert_eq!(stdout["summary"]["updated"], 3);
    assert_eq!(stdout["summary"]["missing"], 1);
    assert_eq!(stdout["summary"]["excluded"], 1);
    assert_eq!(stdout["updated"][0]["price_cents"], 1899);
    assert_eq!(stdout["updated"][2]["pack_kind"], "multi_pack");
    assert_eq!(stdout["missing"][0]["key"], "Z999");
}

#[test]
fn invalid_multiplier_exits_60() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), &CONFIG.replace("multiplier = 1.45", "multiplier = 2.5"));

    let out = run_in(dir.path(), &[]);
    assert_eq!(out.status.code(), Some(60));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("single_pack.multiplier"), "stderr: {stderr}");
    assert!(!dir.path().join("out/skus.txt").exists());
}

#[test]
fn malformed_price_exits_61() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), CONFIG);
    std::fs::write(dir.path().join("supplier.csv"), "product_number,price\nA100,twelve\n").unwrap();

    let out = run_in(dir.path(), &[]);
    assert_eq!(out.status.code(), Some(61));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("cannot parse price 'twelve'"), "stderr: {stderr}");
}

#[test]
fn missing_catalog_file_exits_61() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), CONFIG);
    std::fs::remove_file(dir.path().join("discounts.csv")).unwrap();

    let out = run_in(dir.path(), &[]);
    assert_eq!(out.status.code(), Some(61));
}

#[test]
fn validate_reports_policies() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), CONFIG);

    let out = shelfprice()
        .arg("validate")
        .arg(dir.path().join("weekly.reprice.toml"))
        .output()
        .unwrap();
    assert!(out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("config ok: CLI test"));
    assert!(stderr.contains("single-pack: x1.45 from wholesale_price"));
    assert!(stderr.contains("cents: .99"));
}

#[test]
fn validate_without_catalogs_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = CONFIG.split("[catalogs.wholesale]").next().unwrap();
    write_fixture(dir.path(), config);

    let out = shelfprice()
        .arg("validate")
        .arg(dir.path().join("weekly.reprice.toml"))
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(60));
    assert!(String::from_utf8_lossy(&out.stderr).contains("hint:"));
}

#[test]
fn no_subcommand_is_usage_error() {
    let out = shelfprice().output().unwrap();
    assert_eq!(out.status.code(), Some(2));
}
