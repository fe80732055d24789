//! # Approximate Question Matching
//!
//! File: cli/src/knowledge/matcher.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Scores how alike two strings are with the Ratcliff/Obershelp "gestalt
//! pattern matching" ratio, and picks the stored question closest to a query.
//!
//! The ratio is `2 * M / T`, where `T` is the combined length of both strings
//! and `M` is the number of characters in matching blocks. Matching blocks are
//! found by taking the longest common contiguous run, then recursing on the
//! pieces to its left and right. Identical strings score `1.0`, strings with
//! no character in common score `0.0`.
//!
//! Comparison is case-sensitive and works on `char`s, not bytes.
//!
use std::collections::HashMap;
use tracing::debug;

/// Sequences at least this long get the "popular character" heuristic.
const AUTOJUNK_MIN_LEN: usize = 200;

/// Compares one fixed query (`b`) against any number of candidates (`a`).
///
/// The index of `b` is built once, so scoring many candidates against the
/// same query only pays for the per-candidate work.
pub struct SequenceMatcher {
    b: Vec<char>,
    /// Positions of each character in `b`, ascending. Popular characters are left out.
    b2j: HashMap<char, Vec<usize>>,
    /// Character counts of `b`, for the multiset bound.
    b_counts: HashMap<char, usize>,
}

impl SequenceMatcher {
    pub fn new(b: &str) -> Self {
        let b: Vec<char> = b.chars().collect();

        let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, &c) in b.iter().enumerate() {
            b2j.entry(c).or_default().push(j);
        }
        let b_counts = b2j.iter().map(|(&c, idx)| (c, idx.len())).collect();

        let n = b.len();
        if n >= AUTOJUNK_MIN_LEN {
            let ntest = n / 100 + 1;
            b2j.retain(|_, idx| idx.len() <= ntest);
        }

        Self { b, b2j, b_counts }
    }

    /// Similarity of `a` to the query, in `0.0..=1.0`.
    pub fn ratio(&self, a: &str) -> f64 {
        let a: Vec<char> = a.chars().collect();
        let matches = self.matching_chars(&a);
        calculate_ratio(matches, a.len() + self.b.len())
    }

    /// Upper bound on `ratio` using only the lengths.
    pub fn real_quick_ratio(&self, a: &str) -> f64 {
        let la = a.chars().count();
        let lb = self.b.len();
        calculate_ratio(la.min(lb), la + lb)
    }

    /// Upper bound on `ratio` from the characters both strings share, ignoring order.
    pub fn quick_ratio(&self, a: &str) -> f64 {
        let mut avail: HashMap<char, usize> = HashMap::new();
        let mut matches = 0;
        let mut la = 0;
        for c in a.chars() {
            la += 1;
            let left = avail
                .entry(c)
                .or_insert_with(|| self.b_counts.get(&c).copied().unwrap_or(0));
            if *left > 0 {
                *left -= 1;
                matches += 1;
            }
        }
        calculate_ratio(matches, la + self.b.len())
    }

    /// Total size of all matching blocks between `a` and the query.
    fn matching_chars(&self, a: &[char]) -> usize {
        let mut total = 0;
        let mut queue = vec![(0, a.len(), 0, self.b.len())];
        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let (i, j, k) = self.find_longest_match(a, alo, ahi, blo, bhi);
            if k == 0 {
                continue;
            }
            total += k;
            if alo < i && blo < j {
                queue.push((alo, i, blo, j));
            }
            if i + k < ahi && j + k < bhi {
                queue.push((i + k, ahi, j + k, bhi));
            }
        }
        total
    }

    /// Longest block with `a[i..i+k] == b[j..j+k]` inside the given ranges.
    ///
    /// Among equally long blocks the one starting earliest in `a` wins, then
    /// earliest in `b`. Returns `(i, j, k)`; `k == 0` means nothing matched.
    fn find_longest_match(
        &self,
        a: &[char],
        alo: usize,
        ahi: usize,
        blo: usize,
        bhi: usize,
    ) -> (usize, usize, usize) {
        let (mut besti, mut bestj, mut bestsize) = (alo, blo, 0);
        // j2len[j] = length of the longest match ending with a[i-1] and b[j].
        let mut j2len: HashMap<usize, usize> = HashMap::new();
        for (i, c) in a.iter().enumerate().take(ahi).skip(alo) {
            let mut new_j2len = HashMap::new();
            if let Some(positions) = self.b2j.get(c) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| j2len.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    new_j2len.insert(j, k);
                    if k > bestsize {
                        besti = i + 1 - k;
                        bestj = j + 1 - k;
                        bestsize = k;
                    }
                }
            }
            j2len = new_j2len;
        }

        // Popular characters never seed a match, but may still extend one.
        while besti > alo && bestj > blo && a[besti - 1] == self.b[bestj - 1] {
            besti -= 1;
            bestj -= 1;
            bestsize += 1;
        }
        while besti + bestsize < ahi
            && bestj + bestsize < bhi
            && a[besti + bestsize] == self.b[bestj + bestsize]
        {
            bestsize += 1;
        }

        (besti, bestj, bestsize)
    }
}

fn calculate_ratio(matches: usize, length: usize) -> f64 {
    if length == 0 {
        1.0
    } else {
        2.0 * matches as f64 / length as f64
    }
}

/// A candidate that cleared the threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredMatch<'a> {
    pub candidate: &'a str,
    pub score: f64,
}

/// Returns the candidate most similar to `query`, if it scores at least `threshold`.
///
/// Ties on score go to the lexicographically greater candidate.
pub fn find_best_match<'a, I>(query: &str, candidates: I, threshold: f64) -> Option<ScoredMatch<'a>>
where
    I: IntoIterator<Item = &'a str>,
{
    let matcher = SequenceMatcher::new(query);
    let mut best: Option<ScoredMatch<'a>> = None;

    for candidate in candidates {
        if matcher.real_quick_ratio(candidate) < threshold
            || matcher.quick_ratio(candidate) < threshold
        {
            continue;
        }
        let score = matcher.ratio(candidate);
        if score < threshold {
            continue;
        }
        let better = match &best {
            None => true,
            Some(current) => {
                score > current.score || (score == current.score && candidate > current.candidate)
            }
        };
        if better {
            best = Some(ScoredMatch { candidate, score });
        }
    }

    match &best {
        Some(m) => debug!("Best match for {:?}: {:?} ({:.3})", query, m.candidate, m.score),
        None => debug!("No candidate reached {:.2} for {:?}", threshold, query),
    }
    best
}
