use std::collections::HashMap;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use udcorpus::io::read_conllu;
use udcorpus::matrix::{DocumentTermMatrix, Grouping};
use udcorpus::pipelines::{
    CollocateAnalysis, FrequencyAnalysis, KeynessAnalysis, Pipeline, TokenOptions,
};
use udcorpus::stats::{Measure, Window};
use udcorpus::tokens::{AdapterOptions, TagField};

const TOKENS: &str = "doc_id,sentence_id,token_id,token,lemma,upos,xpos,head_token_id,dep_rel
news1,1,1,经济,经济,NOUN,NN,2,nsubj
news1,1,2,增长,增长,VERB,VV,0,root
news1,1,3,。,。,PUNCT,PU,2,punct
news2,1,1,经济,经济,NOUN,NN,3,nsubj
news2,1,2,很,很,ADV,AD,3,advmod
news2,1,3,好,好,ADJ,VA,0,root
news2,1,4,。,。,PUNCT,PU,3,punct
blog1,1,1,我,我,PRON,PN,2,nsubj
blog1,1,2,喜欢,喜欢,VERB,VV,0,root
blog1,1,3,猫,猫,NOUN,NN,2,obj
blog1,1,4,。,。,PUNCT,PU,2,punct
blog2,1,1,猫,猫,NOUN,NN,2,nsubj
blog2,1,2,很,很,ADV,AD,3,advmod
blog2,1,3,好,好,ADJ,VA,0,root
blog2,1,4,！,！,PUNCT,PU,3,punct
";

const CONLLU: &str = "# newdoc id = news1
# sent_id = 1
1\t经济\t经济\tNOUN\tNN\t_\t2\tnsubj\t_\t_
2\t增长\t增长\tVERB\tVV\t_\t0\troot\t_\t_
3\t。\t。\tPUNCT\tPU\t_\t2\tpunct\t_\t_

# newdoc id = blog1
# sent_id = 2
1\t我\t我\tPRON\tPN\t_\t2\tnsubj\t_\t_
2\t喜欢\t喜欢\tVERB\tVV\t_\t0\troot\t_\t_
3\t猫\t猫\tNOUN\tNN\t_\t2\tobj\t_\t_

";

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    File::create(&path)
        .unwrap()
        .write_all(content.as_bytes())
        .unwrap();
    path
}

fn tagged() -> TokenOptions {
    TokenOptions {
        adapter: AdapterOptions {
            tag: TagField::Xpos,
            ..Default::default()
        },
        remove: vec!["_pu$".to_string()],
        ..Default::default()
    }
}

fn keyness(src: &Path, target: &str, reference: &str) -> KeynessAnalysis {
    KeynessAnalysis {
        src: src.to_path_buf(),
        target: target.to_string(),
        reference: reference.to_string(),
        grouping: Grouping::default(),
        tokens: tagged(),
        min_freq: 1,
        measure: Measure::LogLikelihood,
    }
}

#[test_log::test]
fn keyness_news_vs_blog() {
    let dir = tempfile::tempdir().unwrap();
    let src = write_file(dir.path(), "tokens.csv", TOKENS);

    let rows = keyness(&src, "news", "blog").run().unwrap();

    assert!(rows.iter().all(|r| !r.term.ends_with("_PU")));
    assert_eq!(rows[0].term, "经济_NN");
    assert_eq!(rows[0].target_freq, 2);
    assert_eq!(rows[0].reference_freq, 0);
    assert!(rows[0].effect > 0.0);

    let shared = rows.iter().find(|r| r.term == "好_VA").unwrap();
    assert_eq!((shared.target_freq, shared.reference_freq), (1, 1));
}

#[test_log::test]
fn keyness_antisymmetry() {
    let dir = tempfile::tempdir().unwrap();
    let src = write_file(dir.path(), "tokens.csv", TOKENS);

    let scores = |target, reference| -> HashMap<String, (f64, f64)> {
        keyness(&src, target, reference)
            .run()
            .unwrap()
            .into_iter()
            .map(|r| (r.term, (r.effect, r.statistic)))
            .collect()
    };
    let forward = scores("news", "blog");
    let backward = scores("blog", "news");

    assert_eq!(forward.len(), backward.len());
    for (term, (effect, statistic)) in forward {
        let (other_effect, other_statistic) = backward[&term];
        assert!((effect + other_effect).abs() < 1e-9, "{term}");
        assert!((statistic + other_statistic).abs() < 1e-9, "{term}");
    }
}

#[test_log::test]
fn trimming_is_per_subset() {
    let dir = tempfile::tempdir().unwrap();
    let src = write_file(dir.path(), "tokens.csv", TOKENS);

    let mut p = keyness(&src, "news", "blog");
    p.min_freq = 2;
    let rows = p.run().unwrap();

    // 经济 occurs twice in news, 猫 twice in blogs
    let terms: Vec<&str> = rows.iter().map(|r| r.term.as_str()).collect();
    assert_eq!(terms, vec!["经济_NN", "猫_NN"]);
}

#[test_log::test]
fn removed_patterns_never_become_columns() {
    let dir = tempfile::tempdir().unwrap();
    let src = write_file(dir.path(), "tokens.csv", TOKENS);

    let options = TokenOptions {
        remove: vec!["^很$".to_string(), "[。！]".to_string()],
        ..Default::default()
    };
    let dtm: DocumentTermMatrix = options.matrix(&src, &Grouping::default()).unwrap();
    assert!(!dtm.terms().iter().any(|t| t == "很" || t == "。" || t == "！"));
    assert_eq!(dtm.nb_docs(), 4);
    assert_eq!(dtm.groups(), vec!["blog", "news"]);
}

#[test_log::test]
fn collocates_and_frequencies() {
    let dir = tempfile::tempdir().unwrap();
    let src = write_file(dir.path(), "tokens.csv", TOKENS);

    let rows = CollocateAnalysis {
        src: src.clone(),
        node: "好".to_string(),
        window: Window::symmetric(1),
        min_cooccurrences: 1,
        tokens: TokenOptions::default(),
    }
    .run()
    .unwrap();
    let terms: Vec<&str> = rows.iter().map(|r| r.term.as_str()).collect();
    assert_eq!(terms.len(), 3);
    assert!(terms.contains(&"很"));
    assert!(terms.contains(&"。"));
    assert!(terms.contains(&"！"));

    let freqs = FrequencyAnalysis {
        src,
        group: Some("blog".to_string()),
        grouping: Grouping::default(),
        tokens: TokenOptions::default(),
        min_freq: 1,
    }
    .run()
    .unwrap();
    assert_eq!(freqs[0].term, "猫");
    assert_eq!(freqs[0].frequency, 2);
    assert_eq!(freqs.len(), 7);
}

#[test_log::test]
fn collocates_honour_removed_patterns() {
    let dir = tempfile::tempdir().unwrap();
    let src = write_file(dir.path(), "tokens.csv", TOKENS);

    let rows = CollocateAnalysis {
        src,
        node: "好".to_string(),
        window: Window::symmetric(1),
        min_cooccurrences: 1,
        tokens: TokenOptions {
            remove: vec!["^[。！]$".to_string()],
            ..Default::default()
        },
    }
    .run()
    .unwrap();

    let terms: Vec<&str> = rows.iter().map(|r| r.term.as_str()).collect();
    assert_eq!(terms, vec!["很"]);
    assert_eq!(rows[0].cooccurrences, 2);
}

#[test_log::test]
fn conllu_import() {
    let dir = tempfile::tempdir().unwrap();
    let src = write_file(dir.path(), "parsed.conllu", CONLLU);

    let table = read_conllu(&src).unwrap();
    assert_eq!(table.doc_ids(), vec!["news1", "blog1"]);
    assert_eq!(table.len(), 6);
    // renumbered per document
    assert!(table.records().iter().all(|r| r.sentence_id == 1));
    assert_eq!(table.concatenated_forms("blog1").unwrap(), "我喜欢猫");
}
