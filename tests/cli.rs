use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const CATALOG: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/catalog.json");

/// A `storefront` command isolated from the user's config and log settings.
fn storefront(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("storefront").unwrap();
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

fn with_catalog(home: &TempDir) -> Command {
    let mut cmd = storefront(home);
    cmd.arg("--catalog").arg(CATALOG);
    cmd
}

#[test]
fn list_shows_cards_with_default_selections() {
    let home = TempDir::new().unwrap();
    with_catalog(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nike Air Huarache Le $144.69"))
        .stdout(predicate::str::contains("product-attribute-size-40-selected"))
        .stdout(predicate::str::contains("product-attribute-size-41\n"))
        .stdout(predicate::str::contains("PlayStation 5 $844.02  OUT OF STOCK"))
        .stdout(predicate::str::contains("product-attribute-color-#44FF03-selected"));
}

#[test]
fn list_filters_by_category() {
    let home = TempDir::new().unwrap();
    with_catalog(&home)
        .args(["list", "--category", "Tech"])
        .assert()
        .success()
        .stdout(predicate::str::contains("iMac 2021"))
        .stdout(predicate::str::contains("Jacket").not());
}

#[test]
fn list_reports_unknown_category() {
    let home = TempDir::new().unwrap();
    with_catalog(&home)
        .args(["list", "-c", "garden"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown category: garden"));
}

#[test]
fn view_starts_with_nothing_selected() {
    let home = TempDir::new().unwrap();
    with_catalog(&home)
        .args(["view", "jacket-canada-goosee"])
        .assert()
        .success()
        .stdout(predicate::str::contains("product-attribute-size-s\n"))
        .stdout(predicate::str::contains("-selected").not())
        .stdout(predicate::str::contains("Choose: Size, Color"));
}

#[test]
fn view_applies_picks_and_adds() {
    let home = TempDir::new().unwrap();
    with_catalog(&home)
        .args([
            "view",
            "jacket-canada-goosee",
            "--pick",
            "size=extra large",
            "--pick",
            "product-attribute-color-#03FFF7",
            "--add",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("product-attribute-size-xl-selected"))
        .stdout(predicate::str::contains("product-attribute-color-#03FFF7-selected"))
        .stdout(predicate::str::contains("Added Jacket to the cart"));
}

#[test]
fn view_add_requires_complete_selection() {
    let home = TempDir::new().unwrap();
    with_catalog(&home)
        .args(["view", "jacket-canada-goosee", "-p", "Size=M", "--add"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error: Select Color before adding Jacket to the cart",
        ));
}

#[test]
fn view_add_refuses_out_of_stock() {
    let home = TempDir::new().unwrap();
    with_catalog(&home)
        .args(["view", "ps-5", "-p", "Color=White", "-p", "Capacity=1T", "--add"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of stock"));
}

#[test]
fn view_rejects_unknown_option() {
    let home = TempDir::new().unwrap();
    with_catalog(&home)
        .args(["view", "apple-imac-2021", "-p", "Capacity=2TB"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No option matches: Capacity=2TB"));
}

#[test]
fn view_layout_follows_width() {
    let home = TempDir::new().unwrap();
    with_catalog(&home)
        .args(["view", "huarache-x-stussy-le", "--width", "600"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 images, horizontal gallery"));

    with_catalog(&home)
        .args(["view", "huarache-x-stussy-le"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 images, vertical gallery"));
}

#[test]
fn cart_merges_identical_lines() {
    let home = TempDir::new().unwrap();
    with_catalog(&home)
        .args([
            "cart",
            "jacket-canada-goosee:Size=Extra Large,Color=Black",
            "jacket-canada-goosee:Size=XL,Color=#000000",
            "apple-imac-2021:Capacity=512GB,With USB 3 ports=No,Touch ID in keyboard=Yes",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 x Jacket $518.47"))
        .stdout(predicate::str::contains("1 x iMac 2021 $1688.03"))
        .stdout(predicate::str::contains("XL cart-item-attribute-size-xl-selected"))
        .stdout(predicate::str::contains(
            "cart-item-attribute-touch-id-in-keyboard-yes-selected",
        ))
        .stdout(predicate::str::contains("3 items in cart"));
}

#[test]
fn ids_prints_bare_identifiers() {
    let home = TempDir::new().unwrap();
    with_catalog(&home)
        .args(["ids", "apple-imac-2021"])
        .assert()
        .success()
        .stdout(
            "product-attribute-capacity\n\
             product-attribute-capacity-256gb\n\
             product-attribute-capacity-512gb\n\
             product-attribute-with-usb-3-ports\n\
             product-attribute-with-usb-3-ports-yes\n\
             product-attribute-with-usb-3-ports-no\n\
             product-attribute-touch-id-in-keyboard\n\
             product-attribute-touch-id-in-keyboard-yes\n\
             product-attribute-touch-id-in-keyboard-no\n",
        );
}

#[test]
fn ids_in_cart_context() {
    let home = TempDir::new().unwrap();
    with_catalog(&home)
        .args(["ids", "ps-5", "--cart"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cart-item-attribute-color-#44FF03-selected\n"))
        .stdout(predicate::str::contains("cart-item-attribute-capacity-512g-selected\n"));
}

#[test]
fn missing_product_fails() {
    let home = TempDir::new().unwrap();
    with_catalog(&home)
        .args(["view", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Product not found: nope"));
}

#[test]
fn requires_a_catalog() {
    let home = TempDir::new().unwrap();
    storefront(&home)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No catalog configured"));
}

#[test]
fn reads_project_config() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".storefront");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.json"),
        format!(
            r#"{{ "catalog_file": {:?}, "default_category": "clothes" }}"#,
            CATALOG
        ),
    )
    .unwrap();

    storefront(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("Jacket $518.47"))
        .stdout(predicate::str::contains("iMac 2021").not());
}

#[test]
fn verbose_logs_selector_activity() {
    let home = TempDir::new().unwrap();
    with_catalog(&home)
        .args(["view", "jacket-canada-goosee", "-p", "Size=S", "--verbose"])
        .assert()
        .success()
        .stderr(predicate::str::contains("attribute selected"));
}

#[test]
fn config_set_is_used_by_later_runs() {
    let home = TempDir::new().unwrap();
    fs::create_dir_all(home.path().join(".storefront")).unwrap();

    storefront(&home)
        .args(["config", "default_category", "tech"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default_category set to tech"));

    storefront(&home)
        .args(["config", "default_category"])
        .assert()
        .success()
        .stdout("tech\n");

    storefront(&home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("layout_breakpoint = 768"));

    with_catalog(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("iMac 2021"))
        .stdout(predicate::str::contains("Jacket").not());
}

#[test]
fn config_rejects_bad_breakpoint() {
    let home = TempDir::new().unwrap();
    fs::create_dir_all(home.path().join(".storefront")).unwrap();

    storefront(&home)
        .args(["config", "layout_breakpoint", "wide"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid layout_breakpoint: wide"));
    assert!(!home.path().join(".storefront/config.json").exists());
}
