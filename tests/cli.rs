//! CLI integration tests for bua-prep
//!
//! Tests the binary as a user would interact with it.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn bua_prep() -> Command {
    let mut cmd = Command::cargo_bin("bua-prep").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

const LEXEMES_A: &str = "\
-lexeme
 lex: һара
 stem: һара.
 gramm: N
 paradigm: N-а

-lexeme
 lex: аба
 stem: аба.
 gramm: N
 paradigm: N-а
";

const LEXEMES_B: &str = "\
-lexeme
 lex: һара
 stem: һара.
 gramm: N
 paradigm: N-а

-lexeme
 lex: бөө
 stem: бөө.|бөө/
 gramm: N
 paradigm: N-а
";

const PARADIGMS: &str = "\
-paradigm: N-а
-flex: .
 gramm: sg,nom
-flex: .нууд|.нүүд
 gramm: pl,nom
";

fn write_inputs(dir: &Path) {
    fs::write(dir.join("bua_lexemes_a.txt"), LEXEMES_A).unwrap();
    fs::write(dir.join("bua_lexemes_b.txt"), format!("\u{feff}{LEXEMES_B}")).unwrap();
    fs::write(dir.join("paradigms.txt"), PARADIGMS).unwrap();
}

// ============================================================================
// Basic Commands
// ============================================================================

#[test]
fn test_help() {
    bua_prep()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Prepare Buryat lexical data"));
}

#[test]
fn test_version() {
    bua_prep()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("bua-prep"));
}

#[test]
fn test_missing_subcommand() {
    bua_prep().assert().failure();
}

// ============================================================================
// Normalize
// ============================================================================

#[test]
fn test_normalize_stdin() {
    bua_prep()
        .arg("normalize")
        .write_stdin("  stem: аба/ һара\n-flex: -нууд|-нүүд\n lex: һара\n")
        .assert()
        .success()
        .stdout("  stem: аба/ һара//hара\n-flex: -нууд|-нүүд//-нууд|-нууд\n lex: һара\n");
}

#[test]
fn test_normalize_file_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");
    fs::write(&input, "\u{feff} stem: ёохор.\n").unwrap();

    bua_prep()
        .arg("normalize")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout("");

    assert_eq!(fs::read_to_string(&output).unwrap(), " stem: ёохор.//еохор.\n");
}

#[test]
fn test_normalize_missing_file() {
    bua_prep()
        .args(["normalize", "no-such-file.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no-such-file.txt"));
}

// ============================================================================
// Prepare
// ============================================================================

#[test]
fn test_prepare_writes_trees() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path());

    bua_prep()
        .arg("-C")
        .arg(dir.path())
        .arg("prepare")
        .assert()
        .success()
        .stdout(predicate::str::contains("Lexemes: 3 unique blocks"));

    let strict = dir.path().join("uniparser_buryat/data_strict");
    let plain = dir.path().join("uniparser_buryat/data_nodiacritics");

    let strict_lexemes = fs::read_to_string(strict.join("lexemes.txt")).unwrap();
    assert_eq!(strict_lexemes.matches(" lex: һара\n").count(), 1);
    assert!(strict_lexemes.contains(" stem: бөө.|бөө/\n"));

    let plain_lexemes = fs::read_to_string(plain.join("lexemes.txt")).unwrap();
    assert!(plain_lexemes.contains(" stem: һара.//hара.\n"));
    assert!(plain_lexemes.contains(" stem: бөө.//боо.|бөө//боо/\n"));
    assert!(plain_lexemes.contains(" stem: аба.\n"));

    let plain_paradigms = fs::read_to_string(plain.join("paradigms.txt")).unwrap();
    assert!(plain_paradigms.contains("-flex: .нууд|.нүүд//.нууд|.нууд\n"));

    assert!(strict.join("derivations.txt").exists());
    assert!(!strict.join("lex_rules.txt").exists());
}

#[test]
fn test_prepare_json_and_output_flag() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path());
    let out = dir.path().join("custom");

    let output = bua_prep()
        .arg("-C")
        .arg(dir.path())
        .args(["prepare", "--json", "--output"])
        .arg(&out)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["lexeme_blocks"], 3);
    assert_eq!(json["trees"][0]["variant"], "strict");
    assert_eq!(json["trees"][1]["variant"], "no-diacritics");
    assert!(out.join("data_nodiacritics/lexemes.txt").exists());
}

#[test]
fn test_prepare_copies_auxiliary_files() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path());
    fs::write(dir.path().join("buryat_disambiguation.cg3"), "SELECT (N);\n").unwrap();

    bua_prep()
        .arg("-C")
        .arg(dir.path())
        .arg("prepare")
        .assert()
        .success();

    for tree in ["data_strict", "data_nodiacritics"] {
        let root = dir.path().join("uniparser_buryat").join(tree);
        assert!(root.join("buryat_disambiguation.cg3").exists());
        assert!(!root.join("bad_analyses.txt").exists());
    }
}

#[test]
fn test_prepare_without_paradigms_fails() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("bua_lexemes.txt"), LEXEMES_A).unwrap();

    bua_prep()
        .arg("-C")
        .arg(dir.path())
        .arg("prepare")
        .assert()
        .failure()
        .stderr(predicate::str::contains("paradigms.txt"));
}

#[test]
fn test_prepare_honours_project_config() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path());
    fs::write(
        dir.path().join("prep.toml"),
        "[outputs]\nroot = \"grammar\"\nstrict = \"s\"\nno_diacritics = \"n\"\n",
    )
    .unwrap();

    bua_prep()
        .arg("-C")
        .arg(dir.path())
        .arg("prepare")
        .assert()
        .success();

    assert!(dir.path().join("grammar/s/lexemes.txt").exists());
    assert!(dir.path().join("grammar/n/lexemes.txt").exists());
}

// ============================================================================
// Config
// ============================================================================

#[test]
fn test_config_show() {
    let dir = tempfile::tempdir().unwrap();
    bua_prep()
        .arg("-C")
        .arg(dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lexemes_prefix = \"bua_lexemes\""))
        .stdout(predicate::str::contains("[wordlist]"));
}

#[test]
fn test_config_path_lists_project_file() {
    let dir = tempfile::tempdir().unwrap();
    bua_prep()
        .arg("-C")
        .arg(dir.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("prep.toml [missing]"));
}

#[test]
fn test_invalid_explicit_config() {
    let dir = tempfile::tempdir().unwrap();
    let bad = dir.path().join("bad.toml");
    fs::write(&bad, "[outputs\n").unwrap();

    bua_prep()
        .arg("-C")
        .arg(dir.path())
        .arg("--config")
        .arg(&bad)
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid configuration"));
}

// ============================================================================
// Analyze
// ============================================================================

#[test]
fn test_analyze_without_analyzer_fails() {
    let dir = tempfile::tempdir().unwrap();
    bua_prep()
        .arg("-C")
        .arg(dir.path())
        .arg("analyze")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no analyzer configured"));
}

#[test]
fn test_build_without_analyzer_only_prepares() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path());

    bua_prep()
        .arg("-C")
        .arg(dir.path())
        .arg("build")
        .assert()
        .success()
        .stderr(predicate::str::contains("No analyzer configured"));

    assert!(
        dir.path()
            .join("uniparser_buryat/data_nodiacritics/lexemes.txt")
            .exists()
    );
}

#[cfg(unix)]
#[test]
fn test_analyze_wordlist_with_external_command() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("wordlists")).unwrap();
    fs::write(
        dir.path().join("wordlists/wordlist.csv"),
        "абяанай\t10\nзомди\t3\n",
    )
    .unwrap();
    // Answers every word with an empty analysis list.
    fs::write(
        dir.path().join("prep.toml"),
        "[analyzer]\ncommand = [\"sed\", \"s/.*/[]/\"]\n",
    )
    .unwrap();

    bua_prep()
        .arg("-C")
        .arg(dir.path())
        .args(["analyze", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"unanalyzed\": 2"));

    assert_eq!(
        fs::read_to_string(dir.path().join("wordlists/wordlist_unanalyzed.txt")).unwrap(),
        "абяанай\nзомди\n"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("wordlists/wordlist_analyzed.txt")).unwrap(),
        ""
    );
}
