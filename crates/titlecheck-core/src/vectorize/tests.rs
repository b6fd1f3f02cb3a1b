use super::*;

fn corpus() -> Vec<String> {
    vec![
        "Sistem Informasi Akademik Berbasis Web".to_string(),
        "Analisis Sentimen Media Sosial".to_string(),
    ]
}

#[test]
fn test_fit_builds_sorted_vocabulary() {
    let (vectorizer, vectors) = TfidfVectorizer::fit(&corpus(), VectorizerOptions::default()).unwrap();

    assert_eq!(vectorizer.vocabulary_len(), 9);
    assert_eq!(vectorizer.term_index("akademik"), Some(0));
    assert_eq!(vectorizer.term_index("analisis"), Some(1));
    assert_eq!(vectorizer.term_index("web"), Some(8));
    assert_eq!(vectorizer.term_index("Sistem"), None);
    assert_eq!(vectors.len(), 2);
}

#[test]
fn test_fit_smooth_idf() {
    let (vectorizer, _) = TfidfVectorizer::fit(&corpus(), VectorizerOptions::default()).unwrap();

    let expected = (3.0f64 / 2.0).ln() + 1.0;
    assert!((vectorizer.idf("sistem").unwrap() - expected).abs() < 1e-12);
    assert_eq!(vectorizer.idf("skripsi"), None);
}

#[test]
fn test_fit_raw_idf() {
    let docs = ["aa bb", "aa cc"];
    let options = VectorizerOptions {
        smooth_idf: false,
        ..Default::default()
    };
    let (vectorizer, _) = TfidfVectorizer::fit(&docs, options).unwrap();

    assert!((vectorizer.idf("aa").unwrap() - 1.0).abs() < 1e-12);
    assert!((vectorizer.idf("bb").unwrap() - (2.0f64.ln() + 1.0)).abs() < 1e-12);
}

#[test]
fn test_fit_is_deterministic() {
    let (a, vectors_a) = TfidfVectorizer::fit(&corpus(), VectorizerOptions::default()).unwrap();
    let (b, vectors_b) = TfidfVectorizer::fit(&corpus(), VectorizerOptions::default()).unwrap();

    assert_eq!(a.fingerprint(), b.fingerprint());
    assert_eq!(vectors_a, vectors_b);
}

#[test]
fn test_fingerprint_depends_on_options() {
    let (a, _) = TfidfVectorizer::fit(&corpus(), VectorizerOptions::default()).unwrap();
    let options = VectorizerOptions {
        sublinear_tf: true,
        ..Default::default()
    };
    let (b, _) = TfidfVectorizer::fit(&corpus(), options).unwrap();

    assert_ne!(a.fingerprint(), b.fingerprint());
    assert_eq!(a.fingerprint().len(), 64);
}

#[test]
fn test_corpus_vectors_are_unit_length() {
    let (_, vectors) = TfidfVectorizer::fit(&corpus(), VectorizerOptions::default()).unwrap();
    for vector in &vectors {
        assert!((vector.norm() - 1.0).abs() < 1e-12);
    }
}

#[test]
fn test_transform_matches_fitted_vector() {
    let titles = corpus();
    let (vectorizer, vectors) = TfidfVectorizer::fit(&titles, VectorizerOptions::default()).unwrap();

    assert_eq!(vectorizer.transform(&titles[0]), vectors[0]);
    // Case and surrounding punctuation do not matter
    assert_eq!(
        vectorizer.transform("  SISTEM informasi, akademik berbasis WEB! "),
        vectors[0]
    );
}

#[test]
fn test_transform_out_of_vocabulary_is_zero() {
    let (vectorizer, _) = TfidfVectorizer::fit(&corpus(), VectorizerOptions::default()).unwrap();

    let vector = vectorizer.transform("Deep Learning untuk Klasifikasi Citra");
    assert!(vector.is_zero());
}

#[test]
fn test_transform_partial_overlap_only_counts_known_terms() {
    let (vectorizer, _) = TfidfVectorizer::fit(&corpus(), VectorizerOptions::default()).unwrap();

    let vector = vectorizer.transform("Sistem Pakar Berbasis Android");
    assert_eq!(vector.nnz(), 2);
    assert!(vector.get(vectorizer.term_index("sistem").unwrap()) > 0.0);
    assert!(vector.get(vectorizer.term_index("berbasis").unwrap()) > 0.0);
}

#[test]
fn test_sublinear_tf_without_norm() {
    let docs = ["data data mining"];
    let options = VectorizerOptions {
        sublinear_tf: true,
        norm: Norm::None,
        ..Default::default()
    };
    let (vectorizer, vectors) = TfidfVectorizer::fit(&docs, options).unwrap();

    // Single document: smooth idf is ln(2/2) + 1 = 1 for every term
    let data = vectorizer.term_index("data").unwrap();
    let mining = vectorizer.term_index("mining").unwrap();
    assert!((vectors[0].get(data) - (1.0 + 2.0f64.ln())).abs() < 1e-12);
    assert!((vectors[0].get(mining) - 1.0).abs() < 1e-12);
}

#[test]
fn test_raw_counts_without_norm() {
    let docs = ["data data mining"];
    let options = VectorizerOptions {
        norm: Norm::None,
        ..Default::default()
    };
    let (vectorizer, vectors) = TfidfVectorizer::fit(&docs, options).unwrap();

    let data = vectorizer.term_index("data").unwrap();
    assert!((vectors[0].get(data) - 2.0).abs() < 1e-12);
}

#[test]
fn test_bigrams_in_vocabulary() {
    let options = VectorizerOptions {
        ngram_range: (1, 2),
        ..Default::default()
    };
    let (vectorizer, _) = TfidfVectorizer::fit(&corpus(), options).unwrap();

    assert!(vectorizer.term_index("sistem informasi").is_some());
    assert!(vectorizer.term_index("media sosial").is_some());
    assert!(vectorizer.term_index("web analisis").is_none());
    assert_eq!(vectorizer.vocabulary_len(), 9 + 4 + 3);
}

#[test]
fn test_stop_words_are_lowercased_and_skipped() {
    let docs = ["Pemetaan Banjir di Jakarta"];
    let options = VectorizerOptions {
        stop_words: vec!["DI".to_string()],
        ..Default::default()
    };
    let (vectorizer, _) = TfidfVectorizer::fit(&docs, options).unwrap();

    assert_eq!(vectorizer.term_index("di"), None);
    assert_eq!(vectorizer.vocabulary_len(), 3);
}

#[test]
fn test_fit_rejects_invalid_ngram_range() {
    let options = VectorizerOptions {
        ngram_range: (0, 1),
        ..Default::default()
    };
    assert!(TfidfVectorizer::fit(&corpus(), options).is_err());
}

#[test]
fn test_json_roundtrip_preserves_behaviour() {
    let (vectorizer, _) = TfidfVectorizer::fit(&corpus(), VectorizerOptions::default()).unwrap();
    let json = vectorizer.to_json().unwrap();
    let restored = TfidfVectorizer::from_json(&json).unwrap();

    assert_eq!(restored.fingerprint(), vectorizer.fingerprint());
    assert_eq!(
        restored.transform("Analisis Sentimen Twitter"),
        vectorizer.transform("Analisis Sentimen Twitter")
    );
}

#[test]
fn test_from_artifact_rejects_length_mismatch() {
    let (vectorizer, _) = TfidfVectorizer::fit(&corpus(), VectorizerOptions::default()).unwrap();
    let mut artifact = vectorizer.to_artifact();
    artifact.idf.pop();

    let err = TfidfVectorizer::from_artifact(artifact).unwrap_err();
    assert!(matches!(err, TitlecheckError::InvalidValue { .. }));
}

#[test]
fn test_from_artifact_rejects_duplicate_index() {
    let (vectorizer, _) = TfidfVectorizer::fit(&corpus(), VectorizerOptions::default()).unwrap();
    let mut artifact = vectorizer.to_artifact();
    artifact.vocabulary.insert("web".to_string(), 0);

    assert!(TfidfVectorizer::from_artifact(artifact).is_err());
}

#[test]
fn test_from_artifact_rejects_unknown_version() {
    let (vectorizer, _) = TfidfVectorizer::fit(&corpus(), VectorizerOptions::default()).unwrap();
    let mut artifact = vectorizer.to_artifact();
    artifact.version = 99;

    assert!(TfidfVectorizer::from_artifact(artifact).is_err());
}
