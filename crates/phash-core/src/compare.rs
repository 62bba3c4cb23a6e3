//! Comparing one target hash against many.
//!
//! All functions preserve input order and fail on the first algorithm
//! mismatch without returning partial results.

use rayon::prelude::*;

use crate::error::Result;
use crate::hash::PHash;

/// `target.similarity(h)` for every `h`, in order
pub fn batch_compare_similarity(target: &PHash, hashes: &[PHash]) -> Result<Vec<f64>> {
    hashes.iter().map(|h| target.similarity(h)).collect()
}

/// `target.distance(h)` for every `h`, in order
pub fn batch_compare_distance(target: &PHash, hashes: &[PHash]) -> Result<Vec<u32>> {
    hashes.iter().map(|h| target.distance(h)).collect()
}

/// Same result as [`batch_compare_similarity`], computed on the rayon pool
pub fn par_batch_compare_similarity(target: &PHash, hashes: &[PHash]) -> Result<Vec<f64>> {
    hashes.par_iter().map(|h| target.similarity(h)).collect()
}

/// Same result as [`batch_compare_distance`], computed on the rayon pool
pub fn par_batch_compare_distance(target: &PHash, hashes: &[PHash]) -> Result<Vec<u32>> {
    hashes.par_iter().map(|h| target.distance(h)).collect()
}

/// A hash that passed the similarity threshold
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimilarMatch {
    /// Position in the input slice
    pub index: usize,
    pub similarity: f64,
}

/// Indices of hashes with `similarity >= threshold`, most similar first
pub fn find_similar(target: &PHash, hashes: &[PHash], threshold: f64) -> Result<Vec<SimilarMatch>> {
    let similarities = par_batch_compare_similarity(target, hashes)?;
    let mut matches: Vec<SimilarMatch> = similarities
        .into_iter()
        .enumerate()
        .filter(|(_, similarity)| *similarity >= threshold)
        .map(|(index, similarity)| SimilarMatch { index, similarity })
        .collect();
    matches.sort_by(|a, b| {
        b.similarity
            .total_cmp(&a.similarity)
            .then(a.index.cmp(&b.index))
    });
    Ok(matches)
}
