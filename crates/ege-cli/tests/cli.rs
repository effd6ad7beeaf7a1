use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::io::Write;
use tempfile::NamedTempFile;

fn cmd() -> Command {
    Command::cargo_bin("ege").unwrap()
}

fn data_file(text: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().expect("create temp file");
    f.write_all(text.as_bytes()).expect("write temp file");
    f
}

#[test]
fn available_lists_question_24() {
    cmd().arg("available").assert().success().stdout("24\n");
}

#[test]
fn types_for_24() {
    cmd()
        .args(["types", "24"])
        .assert()
        .success()
        .stdout(
            "1 Find the longest substring with the same letter\n\
             2 Find the longest substring with different letters\n\
             3 Find the longest substring with the same given letter\n",
        );
}

#[test]
fn types_for_unknown_question_falls_back() {
    cmd().args(["types", "7"]).assert().success().stdout("This question has no types.\n");
    cmd().args(["types", "-3"]).assert().success().stdout("This question has no types.\n");
}

#[test]
fn solve_each_type() {
    let f = data_file("aabcaaa");
    let path = f.path().to_str().unwrap();
    cmd().args(["solve", "24", "-t", "1", "-f", path]).assert().success().stdout("3\n");
    cmd().args(["solve", "24", "--type", "2", "--file", path]).assert().success().stdout("4\n");
    cmd().args(["solve", "24", "-t", "3", "-c", "b", "-f", path]).assert().success().stdout("1\n");
}

#[test]
fn solve_crlf_file_counts_like_lf() {
    let f = data_file("ab\r\ncd");
    let path = f.path().to_str().unwrap();
    cmd().args(["solve", "24", "-t", "2", "-f", path]).assert().success().stdout("5\n");

    let f = data_file("a\r\n\r\n");
    let path = f.path().to_str().unwrap();
    cmd().args(["solve", "24", "-t", "1", "-f", path]).assert().success().stdout("2\n");
}

#[test]
fn solve_empty_file_is_zero() {
    let f = data_file("");
    let path = f.path().to_str().unwrap();
    cmd().args(["solve", "24", "-t", "1", "-f", path]).assert().success().stdout("0\n");
}

#[test]
fn solve_unknown_question_fails() {
    cmd()
        .args(["solve", "7", "-t", "1"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(contains("Can't solve this question."));
}

#[test]
fn solve_without_type_fails() {
    cmd().args(["solve", "24"]).assert().code(1).stderr(contains("No type provided."));
}

#[test]
fn solve_with_bad_type_lists_types() {
    let f = data_file("abc");
    cmd()
        .args(["solve", "24", "-t", "5", "-f", f.path().to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(contains("Can't solve question with given type.").and(contains("Types available:")).and(contains("2 Find")));
}

#[test]
fn solve_without_file_fails() {
    cmd().args(["solve", "24", "-t", "2"]).assert().code(1).stderr(contains("No file provided."));
}

#[test]
fn solve_with_empty_char_fails() {
    let f = data_file("aaa");
    cmd()
        .args(["solve", "24", "-t", "3", "-c", "", "-f", f.path().to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(contains("No character to count provided."));
}

#[test]
fn solve_with_unreadable_file_fails() {
    cmd()
        .args(["solve", "24", "-t", "1", "-f", "/definitely/not/here.txt"])
        .assert()
        .code(1)
        .stderr(contains("load input file"));
}

#[test]
fn json_output() {
    let f = data_file("abab");
    let out = cmd()
        .args(["--json", "solve", "24", "-t", "2", "-f", f.path().to_str().unwrap()])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let v: serde_json::Value = serde_json::from_slice(&out).expect("valid json output");
    assert_eq!(v, serde_json::json!({"question": 24, "type": 2, "result": 4}));

    let out = cmd().args(["available", "--json"]).assert().success().get_output().stdout.clone();
    let v: serde_json::Value = serde_json::from_slice(&out).expect("valid json output");
    assert_eq!(v["questions_available"], serde_json::json!([24]));
}

#[test]
fn help_text_is_chinese_throughout() {
    cmd().arg("--help").assert().success().stdout(contains("考试字符串题求解器").and(contains("以 JSON 输出结果")));
    cmd()
        .args(["solve", "--help"])
        .assert()
        .success()
        .stdout(contains("数据文件").and(contains("题型编号")).and(contains("要统计的字符")));
}
