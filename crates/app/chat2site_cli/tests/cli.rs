use assert_cmd::Command;
use predicates::prelude::*;

fn chat2site() -> Command {
    let mut cmd = Command::cargo_bin("chat2site").unwrap();
    cmd.env_remove("CHAT2SITE_CATALOG");
    cmd
}

#[test]
fn version_prints_package_version() {
    chat2site()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn classify_prints_category() {
    chat2site()
        .args(["classify", "I want to open a small restaurant"])
        .assert()
        .success()
        .stdout("restaurant\n");
    chat2site()
        .args(["classify", "متجر ملابس"])
        .assert()
        .success()
        .stdout("ecommerce\n");
    chat2site()
        .args(["classify", "a yoga studio"])
        .assert()
        .success()
        .stdout("general\n");
}

#[test]
fn reply_is_drawn_from_the_restaurant_pool() {
    chat2site()
        .args(["reply", "restaurant", "--language", "en", "--seed", "3"])
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with("Great! A restaurant is an excellent project.")
                .or(predicate::str::starts_with("Excellent! I love restaurant projects.")),
        );
}

#[test]
fn seeded_replies_are_reproducible() {
    let run = || {
        chat2site()
            .args(["reply", "hello", "--seed", "11"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn unsupported_language_is_rejected() {
    chat2site()
        .args(["reply", "restaurant", "--language", "fr"])
        .assert()
        .failure();
}

#[test]
fn greeting_in_arabic() {
    chat2site()
        .args(["greeting", "-l", "ar"])
        .assert()
        .success()
        .stdout(predicate::str::contains("صفحة هبوط").or(predicate::str::contains("صفحات الهبوط")));
}

#[test]
fn preview_prints_blueprint_json() {
    let output = chat2site()
        .args(["preview", "tech startup"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["template"], "tech");
    assert_eq!(json["primaryColor"], "#7c3aed");
}

#[test]
fn preview_html_is_a_document() {
    chat2site()
        .args(["preview", "restaurant", "--html", "-l", "ar"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
        .stdout(predicate::str::contains(r#"dir="rtl""#));
}

fn project_json() -> serde_json::Value {
    serde_json::json!({
        "id": "0191e3a0-0000-7000-8000-000000000001",
        "user_id": "0191e3a0-0000-7000-8000-000000000002",
        "title": "Tom & Jerry Diner",
        "description": "New project",
        "chat_history": [],
        "preview_data": {
            "title": "Tom & Jerry Diner",
            "subtitle": "Food <fast>",
            "primaryColor": "#dc2626",
            "sections": ["Hero"],
            "features": ["Fresh"],
            "template": "restaurant"
        },
        "template_type": "restaurant",
        "status": "draft",
        "created_at": "2025-01-01T00:00:00Z",
        "updated_at": "2025-01-02T00:00:00Z"
    })
}

#[test]
fn export_writes_escaped_html_named_after_title() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("project.json");
    std::fs::write(&input, project_json().to_string()).unwrap();

    chat2site()
        .current_dir(dir.path())
        .arg("export")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("tom-&-jerry-diner.html"));

    let html = std::fs::read_to_string(dir.path().join("tom-&-jerry-diner.html")).unwrap();
    assert!(html.contains("<title>Tom &amp; Jerry Diner</title>"));
    assert!(html.contains("Food &lt;fast&gt;"));
    assert!(html.contains("&copy; 2025"));
}

#[test]
fn export_to_explicit_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("project.json");
    let output = dir.path().join("site.html");
    std::fs::write(&input, project_json().to_string()).unwrap();

    chat2site()
        .arg("export")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();
    assert!(output.exists());
}

#[test]
fn export_of_missing_file_fails() {
    chat2site()
        .args(["export", "/definitely/not/here.json"])
        .assert()
        .failure();
}

#[test]
fn catalog_round_trips_through_flag() {
    let dir = tempfile::tempdir().unwrap();
    let output = chat2site().arg("catalog").output().unwrap();
    assert!(output.status.success());
    let path = dir.path().join("catalog.yaml");
    std::fs::write(&path, &output.stdout).unwrap();

    chat2site()
        .arg("--catalog")
        .arg(&path)
        .args(["classify", "food truck"])
        .assert()
        .success()
        .stdout("restaurant\n");
}

#[test]
fn invalid_catalog_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.yaml");
    std::fs::write(&path, "greeting: []\n").unwrap();

    chat2site()
        .arg("--catalog")
        .arg(&path)
        .args(["classify", "x"])
        .assert()
        .failure();
}

#[test]
fn token_is_a_jwt() {
    chat2site()
        .env("JWT_SECRET", "cli-test-secret")
        .args(["token", "--user", "0191e3a0-0000-7000-8000-000000000002"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^[\w-]+\.[\w-]+\.[\w-]+\n$").unwrap());
}
