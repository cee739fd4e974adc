use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};

const DATASET: &str = "id,name,classification,type1,type2\n\
                       1,Bulbasaur,Seed Pokemon,grass,poison\n\
                       4,Charmander,Lizard Pokemon,fire,none\n\
                       7,Squirtle,Tiny Turtle Pokemon,water,none\n";

fn write_dataset(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("pokemon.csv");
    std::fs::write(&path, contents).unwrap();
    path
}

fn dexcli(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("dexcli").unwrap();
    // Keep config reads/writes inside the test sandbox.
    cmd.env("DEXCLI_HOME", home);
    cmd
}

#[test]
fn name_lookup_prints_the_info_block() {
    let temp_dir = tempfile::tempdir().unwrap();
    let dataset = write_dataset(temp_dir.path(), DATASET);

    dexcli(temp_dir.path())
        .arg("--dataset")
        .arg(&dataset)
        .arg("name")
        .arg("bulbasaur")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Pokedex ID: 1\nName: Bulbasaur\nPokemon Classification: Seed Pokemon\nPokemon Typing: grass/poison",
        ));
}

#[test]
fn id_lookup_resolves_the_same_record() {
    let temp_dir = tempfile::tempdir().unwrap();
    let dataset = write_dataset(temp_dir.path(), DATASET);

    dexcli(temp_dir.path())
        .arg("--dataset")
        .arg(&dataset)
        .arg("id")
        .arg("4")
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: Charmander"))
        .stdout(predicate::str::contains("Pokemon Typing: fire/none"));
}

#[test]
fn unknown_name_reports_not_found() {
    let temp_dir = tempfile::tempdir().unwrap();
    let dataset = write_dataset(temp_dir.path(), DATASET);

    dexcli(temp_dir.path())
        .arg("--dataset")
        .arg(&dataset)
        .arg("name")
        .arg("Mewthree")
        .assert()
        .success()
        .stdout(predicate::str::contains("No Pokemon named"))
        .stdout(predicate::str::contains("Pokedex ID:").not());
}

#[test]
fn non_numeric_id_is_a_distinct_diagnostic() {
    let temp_dir = tempfile::tempdir().unwrap();
    let dataset = write_dataset(temp_dir.path(), DATASET);

    dexcli(temp_dir.path())
        .arg("--dataset")
        .arg(&dataset)
        .arg("id")
        .arg("abc")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid Pokedex ID"))
        .stderr(predicate::str::contains("must be a number"));
}

#[test]
fn missing_dataset_is_fatal_before_any_prompting() {
    let temp_dir = tempfile::tempdir().unwrap();

    dexcli(temp_dir.path())
        .arg("--dataset")
        .arg(temp_dir.path().join("absent.csv"))
        .write_stdin("name\nbulbasaur\nN\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Dataset not found"))
        .stdout(predicate::str::contains("Welcome").not());
}

#[test]
fn malformed_rows_warn_but_do_not_break_the_load() {
    let temp_dir = tempfile::tempdir().unwrap();
    let dataset = write_dataset(
        temp_dir.path(),
        "id,name,classification,type1,type2\n\
         1,Bulbasaur,Seed Pokemon,grass,poison\n\
         4,Charmander\n\
         7,Squirtle,Tiny Turtle Pokemon,water,none\n",
    );

    dexcli(temp_dir.path())
        .arg("--dataset")
        .arg(&dataset)
        .arg("name")
        .arg("squirtle")
        .assert()
        .success()
        .stderr(predicate::str::contains("skipped line 3"))
        .stdout(predicate::str::contains("Name: Squirtle"));
}

#[test]
fn strict_flag_turns_a_malformed_row_fatal() {
    let temp_dir = tempfile::tempdir().unwrap();
    let dataset = write_dataset(
        temp_dir.path(),
        "id,name,classification,type1,type2\n\
         4,Charmander\n",
    );

    dexcli(temp_dir.path())
        .arg("--dataset")
        .arg(&dataset)
        .arg("--strict")
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed record on line 2"));
}

#[test]
fn capacity_flag_truncates_the_load() {
    let temp_dir = tempfile::tempdir().unwrap();
    let dataset = write_dataset(temp_dir.path(), DATASET);

    dexcli(temp_dir.path())
        .arg("--dataset")
        .arg(&dataset)
        .arg("--capacity")
        .arg("2")
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Charmander"))
        .stdout(predicate::str::contains("Squirtle").not());
}

#[test]
fn list_shows_every_record() {
    let temp_dir = tempfile::tempdir().unwrap();
    let dataset = write_dataset(temp_dir.path(), DATASET);

    dexcli(temp_dir.path())
        .arg("--dataset")
        .arg(&dataset)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bulbasaur"))
        .stdout(predicate::str::contains("Charmander"))
        .stdout(predicate::str::contains("Squirtle"));
}

#[test]
fn json_output_emits_the_record_fields() {
    let temp_dir = tempfile::tempdir().unwrap();
    let dataset = write_dataset(temp_dir.path(), DATASET);

    dexcli(temp_dir.path())
        .arg("--dataset")
        .arg(&dataset)
        .arg("name")
        .arg("pikachu")
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));

    dexcli(temp_dir.path())
        .arg("--dataset")
        .arg(&dataset)
        .arg("name")
        .arg("bulbasaur")
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"Bulbasaur\""))
        .stdout(predicate::str::contains("\"secondary_type\": \"poison\""));
}

#[test]
fn interactive_session_searches_and_exits() {
    let temp_dir = tempfile::tempdir().unwrap();
    let dataset = write_dataset(temp_dir.path(), DATASET);

    dexcli(temp_dir.path())
        .arg("--dataset")
        .arg(&dataset)
        .write_stdin("name\nBULBASAUR\nN\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to the Pokedex!"))
        .stdout(predicate::str::contains("Pokedex ID: 1"))
        .stdout(predicate::str::contains("Thank you for using the Pokedex."));
}

#[test]
fn interactive_invalid_id_reprompts_instead_of_exiting() {
    let temp_dir = tempfile::tempdir().unwrap();
    let dataset = write_dataset(temp_dir.path(), DATASET);

    dexcli(temp_dir.path())
        .arg("--dataset")
        .arg(&dataset)
        .write_stdin("number\nabc\nnumber\n7\nN\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid Pokemon ID"))
        .stdout(predicate::str::contains("Name: Squirtle"));
}

#[test]
fn interactive_session_ends_cleanly_on_eof() {
    let temp_dir = tempfile::tempdir().unwrap();
    let dataset = write_dataset(temp_dir.path(), DATASET);

    dexcli(temp_dir.path())
        .arg("--dataset")
        .arg(&dataset)
        .write_stdin("name\nbulbasaur\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pokedex ID: 1"));
}

#[test]
fn config_set_then_show_round_trips() {
    let temp_dir = tempfile::tempdir().unwrap();

    // Setting and showing config never needs the dataset to exist.
    dexcli(temp_dir.path())
        .arg("config")
        .arg("capacity")
        .arg("151")
        .assert()
        .success();

    dexcli(temp_dir.path())
        .arg("config")
        .arg("capacity")
        .assert()
        .success()
        .stdout(predicate::str::contains("capacity = 151"));

    dexcli(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("dataset = pokemon.csv"))
        .stdout(predicate::str::contains("strict = false"));
}
