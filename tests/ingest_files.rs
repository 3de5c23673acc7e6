use std::fs;

use medqa_assistant::{
    config::Settings,
    data::{ingest, seeded_corpus},
};

#[test]
fn directory_walk_reads_supported_files_in_name_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("b.txt"), "What is a cold? ::: A viral infection.\n").expect("write");
    fs::write(
        dir.path().join("a.json"),
        r#"[{"question":"What is fever?","answer":"A raised body temperature."}]"#,
    )
    .expect("write");
    fs::write(dir.path().join("notes.md"), "What is ignored?,This file").expect("write");
    fs::create_dir(dir.path().join("nested")).expect("mkdir");
    fs::write(dir.path().join("nested/c.csv"), "q,a\nIs rest useful?,Yes.\n").expect("write");

    let entries = ingest::load_qna_dir(dir.path());
    let sources: Vec<_> = entries.iter().map(|e| e.source.as_str()).collect();
    assert_eq!(sources, vec!["a.json", "b.txt", "c.csv"]);
}

#[test]
fn missing_file_yields_no_entries() {
    let dir = tempfile::tempdir().expect("tempdir");
    assert!(ingest::load_qna_file(&dir.path().join("absent.csv")).is_empty());
}

#[test]
fn configured_directory_seeds_the_corpus() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("extra.txt"), "What is fever?,Hot.\nDoes it hurt?,Duplicate\n")
        .expect("write");
    let settings = Settings {
        qna_dir: Some(dir.path().to_path_buf()),
        ..Settings::default()
    };
    let corpus = seeded_corpus(&settings, &[]);
    assert_eq!(corpus.len(), 29);
    let hurt = corpus
        .active()
        .iter()
        .find(|e| e.question == "Does it hurt?")
        .expect("builtin kept");
    assert_eq!(hurt.source, "builtin");
}
