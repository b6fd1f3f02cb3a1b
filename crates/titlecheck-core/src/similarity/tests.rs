use super::*;
use crate::index::TitleIndex;
use crate::vectorize::VectorizerOptions;

fn build_index(titles: &[&str]) -> TitleIndex {
    TitleIndex::build(
        titles.iter().map(|t| t.to_string()).collect(),
        VectorizerOptions::default(),
    )
    .unwrap()
}

fn corpus_titles() -> Vec<&'static str> {
    vec![
        "Sistem Informasi Akademik Berbasis Web",
        "Analisis Sentimen Media Sosial",
        "Sistem Informasi Inventaris Barang",
        "Klasifikasi Citra Daun Menggunakan CNN",
        "Sistem Pendukung Keputusan Pemilihan Beasiswa",
    ]
}

#[test]
fn test_cosine_similarity_identical_vectors() {
    let v = SparseVector::from_pairs(vec![(0, 0.3), (4, 0.7), (9, 0.1)]);
    assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-12);
}

#[test]
fn test_cosine_similarity_disjoint_vectors() {
    let a = SparseVector::from_pairs(vec![(0, 1.0)]);
    let b = SparseVector::from_pairs(vec![(1, 1.0)]);
    assert_eq!(cosine_similarity(&a, &b), 0.0);
}

#[test]
fn test_cosine_similarity_zero_vector() {
    let zero = SparseVector::default();
    let v = SparseVector::from_pairs(vec![(2, 0.5)]);
    assert_eq!(cosine_similarity(&zero, &v), 0.0);
    assert_eq!(cosine_similarity(&v, &zero), 0.0);
    assert_eq!(cosine_similarity(&zero, &zero), 0.0);
}

#[test]
fn test_cosine_similarity_ignores_magnitude() {
    let a = SparseVector::from_pairs(vec![(0, 1.0), (1, 2.0)]);
    let b = SparseVector::from_pairs(vec![(0, 10.0), (1, 20.0)]);
    assert!((cosine_similarity(&a, &b) - 1.0).abs() < 1e-12);
}

#[test]
fn test_rank_returns_min_k_results() {
    let index = build_index(&corpus_titles());
    let query = index.encode("Sistem Informasi Penjualan");

    for k in [1, 3, 5, 10] {
        let ranked = rank(&query, index.vectors(), k);
        assert_eq!(ranked.len(), k.min(index.len()), "k = {}", k);
    }
    assert!(rank(&query, index.vectors(), 0).is_empty());
}

#[test]
fn test_rank_is_sorted_and_bounded() {
    let index = build_index(&corpus_titles());
    let query = index.encode("Sistem Informasi Akademik Sekolah");
    let ranked = rank(&query, index.vectors(), 10);

    assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
    assert!(ranked.iter().all(|m| (0.0..=1.0).contains(&m.score)));
}

#[test]
fn test_rank_identical_title_ranks_first_with_full_score() {
    let titles = corpus_titles();
    let index = build_index(&titles);

    for (i, title) in titles.iter().enumerate() {
        let ranked = rank(&index.encode(title), index.vectors(), 3);
        assert_eq!(ranked[0].index, i);
        assert!((ranked[0].score - 1.0).abs() < 1e-9);
        assert_eq!(ranked[0].percent(), 100.0);
    }
}

#[test]
fn test_rank_ties_keep_corpus_order() {
    // Entries 1 and 3 are identical, so they tie against any query
    let index = build_index(&[
        "Analisis Sentimen Media Sosial",
        "Sistem Informasi Akademik",
        "Klasifikasi Citra Daun",
        "Sistem Informasi Akademik",
    ]);
    let ranked = rank(&index.encode("Sistem Informasi"), index.vectors(), 4);

    assert_eq!(ranked[0].index, 1);
    assert_eq!(ranked[1].index, 3);
    assert_eq!(ranked[0].score, ranked[1].score);
    // Zero scores also stay in corpus order
    assert_eq!(ranked[2].index, 0);
    assert_eq!(ranked[3].index, 2);
}

#[test]
fn test_rank_degenerate_query_scores_zero() {
    let index = build_index(&corpus_titles());
    let query = index.encode("Deep Learning untuk Deteksi Wajah");
    assert!(query.is_zero());

    let ranked = rank(&query, index.vectors(), 3);
    assert_eq!(ranked.len(), 3);
    assert!(ranked.iter().all(|m| m.score == 0.0));
    assert_eq!(
        ranked.iter().map(|m| m.index).collect::<Vec<_>>(),
        vec![0, 1, 2]
    );
}

#[test]
fn test_rank_is_idempotent() {
    let index = build_index(&corpus_titles());
    let query = index.encode("Sistem Pendukung Keputusan Beasiswa");

    let first = rank(&query, index.vectors(), 3);
    let second = rank(&query, index.vectors(), 3);
    assert_eq!(first, second);
}

#[test]
fn test_rank_empty_corpus() {
    let query = SparseVector::from_pairs(vec![(0, 1.0)]);
    assert!(rank(&query, &[], 5).is_empty());
}

#[test]
fn test_to_percent_rounds_two_decimals() {
    assert_eq!(to_percent(0.123456), 12.35);
    assert_eq!(to_percent(1.0), 100.0);
    assert_eq!(to_percent(0.0), 0.0);
}
