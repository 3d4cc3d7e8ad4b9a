use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn expenses(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expenses").unwrap();
    cmd.env("EXPENSE_STORE_DATA_DIR", dir.path());
    cmd
}

fn call(dir: &TempDir, name: &str, args: &str) -> Value {
    let output = expenses(dir).args(["call", name, args]).output().unwrap();
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_init_creates_collection_files() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete"));

    assert!(dir.path().join("config.json").exists());
    assert!(dir.path().join("data").join("categories.json").exists());
    assert!(dir.path().join("data").join("expenses.json").exists());
}

#[test]
fn test_category_commands() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .args(["category", "create", "Food", "--color", "green"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created category: Food"));

    expenses(&dir)
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Food").and(predicate::str::contains("green")));

    expenses(&dir)
        .args(["category", "update", "food", "Groceries"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated category: Groceries"));

    expenses(&dir)
        .args(["category", "delete", "Groceries"])
        .assert()
        .success();

    expenses(&dir)
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No categories found"));
}

#[test]
fn test_expense_commands_show_dangling_category() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .args(["category", "create", "Food"])
        .assert()
        .success();

    expenses(&dir)
        .args(["expense", "create", "Food", "12.5", "Lunch", "--date", "2023-11-14"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created expense in 'Food'"));

    expenses(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Lunch")
                .and(predicate::str::contains("Food"))
                .and(predicate::str::contains("$12.50")),
        );

    expenses(&dir)
        .args(["category", "delete", "Food"])
        .assert()
        .success();

    expenses(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(no category)"));
}

#[test]
fn test_remote_call_scenario() {
    let dir = TempDir::new().unwrap();

    let created = call(&dir, "createCategory", r#"{"name": "Food"}"#);
    assert_eq!(created["ok"], true);
    let c1 = created["value"].as_str().unwrap().to_string();

    let args = format!(
        r#"{{"typeId": "{}", "amount": 12.5, "description": "Lunch", "date": 1700000000000}}"#,
        c1
    );
    let e1 = call(&dir, "createExpense", &args);
    assert_eq!(e1["ok"], true);

    let listed = call(&dir, "listExpenses", "{}");
    assert_eq!(listed["value"].as_array().unwrap().len(), 1);
    assert_eq!(listed["value"][0]["amount"], 12.5);
    assert_eq!(listed["value"][0]["expenseType"]["name"], "Food");

    let deleted = call(&dir, "deleteCategory", &format!(r#"{{"id": "{}"}}"#, c1));
    assert_eq!(deleted["ok"], true);
    assert!(deleted["value"].is_null());

    let listed = call(&dir, "listExpenses", "{}");
    assert_eq!(listed["value"][0]["id"], e1["value"]);
    assert!(listed["value"][0]["expenseType"].is_null());
}

#[test]
fn test_failed_call_exits_nonzero() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .args(["call", "createCategory", r#"{"description": "no name"}"#])
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"validation\""));

    expenses(&dir)
        .args([
            "call",
            "deleteExpense",
            r#"{"id": "550e8400-e29b-41d4-a716-446655440000"}"#,
        ])
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"not_found\""));
}

#[test]
fn test_serve_answers_each_line() {
    let dir = TempDir::new().unwrap();

    let input = concat!(
        r#"{"call": "createCategory", "args": {"name": "Travel"}}"#,
        "\n",
        r#"{"call": "listCategories"}"#,
        "\n",
    );

    let output = expenses(&dir).arg("serve").write_stdin(input).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let responses: Vec<Value> = stdout
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(responses.len(), 2);
    assert_eq!(responses[1]["value"][0]["name"], "Travel");
}
