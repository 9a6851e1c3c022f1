use assert_cmd::Command;
use bayes_rank::heredity::{infer, Family, GeneCount, InheritanceModel};
use bayes_rank::pagerank::{iterate_pagerank, sample_pagerank, Corpus};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const FAMILY: &str = "\
name,mother,father,trait
Harry,Lily,James,
James,,,1
Lily,,,0
";

fn write_corpus(dir: &Path) {
    let pages: [(&str, &[&str]); 4] = [
        ("1.html", &["2.html"]),
        ("2.html", &["1.html", "3.html"]),
        ("3.html", &["2.html", "4.html", "https://elsewhere.example/"]),
        ("4.html", &[]),
    ];
    for (name, links) in pages {
        let anchors: String = links
            .iter()
            .map(|l| format!("    <a href=\"{}\">{}</a>\n", l, l))
            .collect();
        fs::write(dir.join(name), format!("<html>\n<body>\n{}</body>\n</html>\n", anchors)).unwrap();
    }
    fs::write(dir.join("README.md"), "<a href=\"1.html\">ignored</a>").unwrap();
}

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_bayes-rank"))
}

#[test]
fn heredity_pipeline_end_to_end() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("family.csv");
    fs::write(&path, FAMILY).unwrap();

    let family = Family::load(&path).unwrap();
    let posteriors = infer(&family, &InheritanceModel::default());
    assert_eq!(posteriors.len(), 3);
    for posterior in &posteriors {
        let genes: f64 = posterior.genes.iter().sum();
        let traits: f64 = posterior.has_trait.iter().sum();
        assert!((genes - 1.0).abs() < 1e-9);
        assert!((traits - 1.0).abs() < 1e-9);
    }
    assert!((posteriors[0].gene(GeneCount::One) - 0.4557).abs() < 1e-4);
}

#[test]
fn pagerank_pipeline_end_to_end() {
    let dir = tempdir().unwrap();
    write_corpus(dir.path());

    let corpus = Corpus::crawl(dir.path()).unwrap();
    assert_eq!(corpus.len(), 4);
    assert_eq!(corpus.links("3.html").unwrap().len(), 2);

    let iterated = iterate_pagerank(&corpus, 0.85, 0.001).unwrap();
    let total: f64 = iterated.ranks.values().sum();
    assert!((total - 1.0).abs() < 1e-9);

    let mut rng = StdRng::seed_from_u64(11);
    let sampled = sample_pagerank(&corpus, 0.85, 100_000, &mut rng).unwrap();
    for (page, rank) in &iterated.ranks {
        assert!((sampled[page] - rank).abs() < 0.02);
    }
}

#[test]
fn cli_heredity_prints_distributions() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("family.csv");
    fs::write(&path, FAMILY).unwrap();

    let output = bin()
        .arg("heredity")
        .arg(&path)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8_lossy(&output);
    assert!(text.starts_with("Harry:\n  Gene:\n    2: 0.0092\n    1: 0.4557\n    0: 0.5351\n"));
    assert!(text.contains("James:"));
    assert!(text.contains("    True: 0.2665"));
}

#[test]
fn cli_pagerank_json_is_reproducible() {
    let dir = tempdir().unwrap();
    write_corpus(dir.path());

    let run = || {
        bin()
            .args(["pagerank", "--seed", "5", "--samples", "5000", "--json"])
            .arg(dir.path())
            .assert()
            .success()
            .get_output()
            .stdout
            .clone()
    };
    let first = run();
    assert_eq!(first, run());

    let report: serde_json::Value = serde_json::from_slice(&first).unwrap();
    assert_eq!(report["samples"], 5000);
    assert_eq!(report["sampled"].as_object().unwrap().len(), 4);
    assert!(report["iterations"].as_u64().unwrap() > 0);
}

#[test]
fn cli_reports_missing_column() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.csv");
    fs::write(&path, "name,mother,father\nAnn,,\n").unwrap();

    let output = bin().arg("heredity").arg(&path).assert().failure().get_output().stderr.clone();
    assert!(String::from_utf8_lossy(&output).contains("missing required column 'trait'"));
}

#[test]
fn cli_rejects_unknown_command() {
    bin().arg("frobnicate").assert().failure();
}

#[test]
fn cli_help_lists_commands() {
    let output = bin().arg("--help").assert().success().get_output().stdout.clone();
    let text = String::from_utf8_lossy(&output);
    for name in ["heredity", "pagerank"] {
        assert!(text.contains(name), "missing command {name}");
    }
}
