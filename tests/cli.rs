use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const REFERENCE: &str = "This is an example sentence for text preprocessing.";
const ENTITY_TEXT: &str = "Apple is looking at buying U.K. startup for $1 billion.";

fn nlpipe() -> Command {
    let mut cmd: Command = cargo_bin_cmd!("nlpipe").into();
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("RUST_LOG");
    cmd
}

// --- Binary startup ---

#[test]
fn binary_runs() {
    nlpipe()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("nlpipe"));
}

// --- Process ---

#[test]
fn demo_prints_python_style_record() {
    nlpipe()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!("{{'text': '{REFERENCE}'")))
        .stdout(predicate::str::contains(
            "'filtered_tokens': ['example', 'sentence', 'text', 'preprocessing']",
        ))
        .stdout(predicate::str::contains("'entities': []"))
        .stdout(predicate::str::contains("'an example sentence'"));
}

#[test]
fn process_argument_as_json() {
    let output = nlpipe()
        .args(["process", ENTITY_TEXT, "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["text"], ENTITY_TEXT);
    let entities = value["entities"].as_array().unwrap();
    assert!(entities.contains(&serde_json::json!({"text": "Apple", "label": "ORG"})));
    assert!(entities.contains(&serde_json::json!({"text": "U.K.", "label": "GPE"})));
}

#[test]
fn process_reads_stdin() {
    nlpipe()
        .arg("process")
        .write_stdin(REFERENCE)
        .assert()
        .success()
        .stdout(predicate::str::contains("'text preprocessing'"));
}

#[test]
fn process_reads_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("input.txt");
    fs::write(&path, ENTITY_TEXT).unwrap();

    nlpipe()
        .args(["process", "--file"])
        .arg(&path)
        .args(["--format", "pretty"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"label\": \"ORG\""));
}

#[test]
fn process_empty_input() {
    nlpipe()
        .args(["process", ""])
        .assert()
        .success()
        .stdout("{'text': '', 'filtered_tokens': [], 'entities': [], 'noun_phrases': []}\n");
}

#[test]
fn process_rejects_invalid_utf8() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("latin1.txt");
    fs::write(&path, b"caf\xe9").unwrap();

    nlpipe()
        .args(["process", "--file"])
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("UTF-8"));
}

#[test]
fn process_missing_file_fails() {
    nlpipe()
        .args(["process", "--file", "/nonexistent/input.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

// --- Single stages ---

#[test]
fn tokens_one_per_line() {
    nlpipe()
        .args(["tokens", REFERENCE])
        .assert()
        .success()
        .stdout("example\nsentence\ntext\npreprocessing\n");
}

#[test]
fn tokens_with_extra_stopword() {
    nlpipe()
        .args(["tokens", REFERENCE, "--stopword", "Text"])
        .assert()
        .success()
        .stdout("example\nsentence\npreprocessing\n");
}

#[test]
fn entities_tab_separated() {
    nlpipe()
        .args(["entities", ENTITY_TEXT])
        .assert()
        .success()
        .stdout(predicate::str::contains("Apple\tORG\n"))
        .stdout(predicate::str::contains("U.K.\tGPE\n"));
}

#[test]
fn phrases_one_per_line() {
    nlpipe()
        .args(["phrases", REFERENCE])
        .assert()
        .success()
        .stdout("This\nan example sentence\ntext preprocessing\n");
}

// --- Stopwords and configuration ---

#[test]
fn stopwords_lists_nltk_english() {
    let output = nlpipe()
        .arg("stopwords")
        .assert()
        .success()
        .stderr(predicate::str::contains("179 stopwords"))
        .get_output()
        .stdout
        .clone();

    let words: Vec<&str> = std::str::from_utf8(&output).unwrap().lines().collect();
    assert_eq!(words.len(), 179);
    assert!(words.windows(2).all(|w| w[0] < w[1]));
    assert!(words.contains(&"this"));
}

#[test]
fn language_flag_switches_list() {
    nlpipe()
        .args(["--language", "german", "stopwords"])
        .assert()
        .success()
        .stdout(predicate::str::contains("und\n"));
}

#[test]
fn unknown_language_is_fatal() {
    nlpipe()
        .args(["--language", "klingon", "demo"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Unsupported language"));
}

#[test]
fn config_file_applies() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("names.toml"), "COMPANY = [\"Initech\"]\n").unwrap();
    fs::write(
        tmp.path().join("nlpipe.toml"),
        "[stopwords]\nextra = [\"works\"]\n\n[model]\ngazetteers = [\"names.toml\"]\ninclude_determiners = false\n",
    )
    .unwrap();
    let config = tmp.path().join("nlpipe.toml");

    nlpipe()
        .arg("--config")
        .arg(&config)
        .args(["entities", "Peter works at Initech."])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initech\tCOMPANY"));

    nlpipe()
        .arg("--config")
        .arg(&config)
        .args(["tokens", "Peter works at Initech."])
        .assert()
        .success()
        .stdout("peter\ninitech\n");

    nlpipe()
        .arg("--config")
        .arg(&config)
        .args(["phrases", REFERENCE])
        .assert()
        .success()
        .stdout(predicate::str::contains("example sentence\n"))
        .stdout(predicate::str::contains("an example").not());
}

#[test]
fn bad_config_is_fatal() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("nlpipe.toml");
    fs::write(&config, "[model]\nmax_chunk_length = \"lots\"\n").unwrap();

    nlpipe()
        .arg("--config")
        .arg(&config)
        .arg("demo")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config"));
}
