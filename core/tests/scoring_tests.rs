use docrank_core::scorer::{score, QueryProfile};
use docrank_core::tokenizer::Tokenizer;
use docrank_core::{rank, Corpus, Document, FrequencyTable};

fn table(words: &[&str]) -> FrequencyTable {
    words.iter().copied().collect()
}

fn corpus(docs: &[&[&str]]) -> Corpus {
    let tok = Tokenizer::default();
    docs.iter()
        .enumerate()
        .map(|(i, lines)| Document::from_lines(format!("doc{i}"), lines.iter(), &tok))
        .collect()
}

#[test]
fn frequency_table_counts_lines() {
    let t = FrequencyTable::from_lines(["the cat sat", "the cat ran"], &Tokenizer::default());
    let expected = table(&["the", "the", "cat", "cat", "sat", "ran"]);
    assert_eq!(t, expected);
}

#[test]
fn idf_accumulates_in_document_order() {
    let d0 = table(&["x"; 5]);
    let d1 = table(&["x"]);
    let mut profile = QueryProfile::from_tokens(["x"], 2);
    profile.observe(0, &d0);
    profile.observe(1, &d1);
    let scores = profile.score();

    let term = profile.term("x").unwrap();
    assert_eq!(term.document_frequencies, vec![5, 1]);
    assert_eq!(term.document_count, 2);
    // doc0: 5 * ln(2/2); doc1: 1 * ln(2/3)
    assert_eq!(scores[0], 0.0);
    assert!((scores[1] - (2.0f64 / 3.0).ln()).abs() < 1e-12);
    assert!((scores[1] + 0.405).abs() < 1e-3);
    assert_eq!(rank(&scores), vec![0, 1]);
}

#[test]
fn later_documents_see_a_smaller_idf() {
    // Same count in every document, but idf shrinks as the scan advances.
    let d = table(&["w"]);
    let scores = score(["w"], [&d, &d, &d, &d]);
    for i in 1..scores.len() {
        assert!(scores[i] < scores[i - 1]);
    }
    assert!((scores[0] - (4.0f64 / 2.0).ln()).abs() < 1e-12);
    assert!((scores[3] - (4.0f64 / 5.0).ln()).abs() < 1e-12);
}

#[test]
fn absent_word_contributes_nothing() {
    let c = corpus(&[&["alpha beta"], &["beta"], &["gamma"]]);
    let profile = c.profile(["zeta"]);
    let term = profile.term("zeta").unwrap();
    assert_eq!(term.document_frequencies, vec![0, 0, 0]);

    let mut profile = profile;
    let scores = profile.score();
    assert_eq!(profile.term("zeta").unwrap().document_count, 0);
    assert_eq!(scores, vec![0.0, 0.0, 0.0]);

    let with = c.rank_tokens(["gamma", "zeta"]);
    let without = c.rank_tokens(["gamma"]);
    assert_eq!(with.order, without.order);
}

#[test]
fn query_terms_add_up_per_document() {
    let c = corpus(&[&["a a b"], &["b"], &["c"]]);
    let a = c.rank_tokens(["a"]).scores;
    let b = c.rank_tokens(["b"]).scores;
    let ab = c.rank_tokens(["a", "b"]).scores;
    for i in 0..3 {
        assert!((ab[i] - (a[i] + b[i])).abs() < 1e-12);
    }
}

#[test]
fn repeated_queries_are_independent() {
    let c = corpus(&[&["rust is fast", "rust"], &["python is slow"], &["rust and python"]]);
    let first = c.rank_tokens(["rust", "python"]);
    let second = c.rank_tokens(["rust", "python"]);
    assert_eq!(first, second);

    let mut profile = c.profile(["rust"]);
    let s1 = profile.score();
    let s2 = profile.score();
    assert_eq!(s1, s2);
    assert_eq!(profile.term("rust").unwrap().document_count, 2);
}

#[test]
fn most_relevant_document_ranks_first() {
    let c = corpus(&[
        &["the weather today"],
        &["earthquake earthquake damage"],
        &["a small earthquake"],
        &["nothing here"],
        &["more weather"],
        &["sunny"],
    ]);
    let r = c.rank_tokens(Tokenizer::default().tokenize("Earthquake"));
    assert_eq!(r.order[0], 1);
    assert_eq!(r.order[1], 2);
    // Zero-score documents follow in index order.
    assert_eq!(&r.order[2..], &[0, 3, 4, 5]);
}

#[test]
fn empty_corpus_ranks_nothing() {
    let c = Corpus::new();
    let r = c.rank_tokens(["x"]);
    assert!(r.order.is_empty());
    assert!(r.scores.is_empty());
}
