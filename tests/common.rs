#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rplancharge::db::pool::DbPool;
use rplancharge::models::month::Month;
use rplancharge::models::workload::WorkloadRow;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rpc() -> Command {
    cargo_bin_cmd!("rplancharge")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rplancharge.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB and add a small plan through the CLI:
///
/// - team 1 "Core"
/// - person 1 Doe John (team 1), person 2 Smith Jane (no team)
/// - subject 1 Math, subject 2 Physics
/// - Doe/Math: 2024-01 = 5, 2024-02 = 10, comment "lead"
/// - Smith/Physics: 2024-02 = 20
pub fn init_db_with_data(db_path: &str) {
    rpc()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    let steps: &[&[&str]] = &[
        &["team", "add", "--name", "Core"],
        &[
            "person",
            "add",
            "--name",
            "Doe",
            "--firstname",
            "John",
            "--team",
            "1",
        ],
        &["person", "add", "--name", "Smith", "--firstname", "Jane"],
        &["subject", "add", "--name", "Math"],
        &["subject", "add", "--name", "Physics"],
        &[
            "set",
            "--person",
            "1",
            "--subject",
            "1",
            "--month",
            "2024-01",
            "--load",
            "5",
        ],
        &[
            "set",
            "--person",
            "1",
            "--subject",
            "1",
            "--month",
            "02/2024",
            "--load",
            "10",
        ],
        &[
            "set",
            "--person",
            "2",
            "--subject",
            "2",
            "--month",
            "2024-02-15",
            "--load",
            "20",
        ],
        &[
            "comment",
            "--person",
            "1",
            "--subject",
            "1",
            "--text",
            "lead",
        ],
    ];

    for step in steps {
        rpc().args(["--db", db_path]).args(*step).assert().success();
    }
}

/// Fresh in-memory database with the same reference data as
/// [`init_db_with_data`], without loads.
pub fn memory_pool_with_refs() -> DbPool {
    use rplancharge::core::directory::{PersonLogic, SubjectLogic, TeamLogic};

    let mut pool = DbPool::in_memory().expect("in-memory db");
    let team = TeamLogic::add(&mut pool, "Core").expect("team");
    PersonLogic::add(&mut pool, "Doe", "John", Some(team)).expect("person 1");
    PersonLogic::add(&mut pool, "Smith", "Jane", None).expect("person 2");
    SubjectLogic::add(&mut pool, "Math").expect("subject 1");
    SubjectLogic::add(&mut pool, "Physics").expect("subject 2");
    pool
}

pub fn month(s: &str) -> Month {
    Month::parse(s).expect("valid month")
}

/// Build a joined row the way the database would return it.
pub fn row(
    name: &str,
    firstname: &str,
    subject: &str,
    comment: Option<&str>,
    m: &str,
    load: i32,
) -> WorkloadRow {
    WorkloadRow {
        person_id: 1,
        subject_id: 1,
        name: name.to_string(),
        firstname: firstname.to_string(),
        subject: subject.to_string(),
        comment: comment.map(str::to_string),
        month: month(m),
        load,
    }
}
