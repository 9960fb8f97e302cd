//! # Similarity Ratio
//!
//! File: cli/src/knowledge/similarity.rs
//!
//! ## Overview
//!
//! Ratcliff/Obershelp "gestalt" similarity: find the longest common
//! contiguous block, recurse on the unmatched pieces to its left and right,
//! and score `2 * matched / (len(a) + len(b))`. The result lies in `[0, 1]`,
//! with `1.0` for identical sequences (including two empty ones).
//!
//! Strings are compared per `char`. The second sequence is indexed once
//! (`char -> positions`); when it holds 200 or more characters, characters
//! that make up more than 1% of it are left out of that index. They can no
//! longer start a block but still extend one, which keeps long inputs full
//! of spaces or `e`s from dominating the score.
//!
//! The ratio is not symmetric in general: `ratio(a, b)` may differ from
//! `ratio(b, a)` when there are several equally long blocks to choose from.
//!
use std::collections::HashMap;

/// Below this length the popular-character heuristic is not applied.
const AUTOJUNK_MIN_LEN: usize = 200;

/// Similarity of `a` and `b` in `[0.0, 1.0]`.
pub fn ratio(a: &str, b: &str) -> f64 {
    SequenceMatcher::new(a, b).ratio()
}

struct SequenceMatcher {
    a: Vec<char>,
    b: Vec<char>,
    b2j: HashMap<char, Vec<usize>>,
}

impl SequenceMatcher {
    fn new(a: &str, b: &str) -> Self {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let b2j = index_positions(&b);
        Self { a, b, b2j }
    }

    fn ratio(&self) -> f64 {
        let total = self.a.len() + self.b.len();
        if total == 0 {
            return 1.0;
        }
        2.0 * self.matched_chars() as f64 / total as f64
    }

    /// Sum of the sizes of all matching blocks.
    fn matched_chars(&self) -> usize {
        let mut matched = 0;
        let mut pending = vec![(0, self.a.len(), 0, self.b.len())];
        while let Some((alo, ahi, blo, bhi)) = pending.pop() {
            let (i, j, k) = self.find_longest_match(alo, ahi, blo, bhi);
            if k == 0 {
                continue;
            }
            matched += k;
            if alo < i && blo < j {
                pending.push((alo, i, blo, j));
            }
            if i + k < ahi && j + k < bhi {
                pending.push((i + k, ahi, j + k, bhi));
            }
        }
        matched
    }

    /// Longest block `a[i..i+k] == b[j..j+k]` inside the given ranges.
    ///
    /// Among blocks of maximal size the one starting earliest in `a` wins,
    /// then the one starting earliest in `b`.
    fn find_longest_match(
        &self,
        alo: usize,
        ahi: usize,
        blo: usize,
        bhi: usize,
    ) -> (usize, usize, usize) {
        let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);

        // j -> length of the block ending at a[i - 1], b[j]
        let mut j2len: HashMap<usize, usize> = HashMap::new();
        for i in alo..ahi {
            let mut next_j2len = HashMap::new();
            if let Some(positions) = self.b2j.get(&self.a[i]) {
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
                    next_j2len.insert(j, k);
                    if k > best_size {
                        best_i = i + 1 - k;
                        best_j = j + 1 - k;
                        best_size = k;
                    }
                }
            }
            j2len = next_j2len;
        }

        // Popular characters were never indexed; grow the block over them.
        while best_i > alo && best_j > blo && self.a[best_i - 1] == self.b[best_j - 1] {
            best_i -= 1;
            best_j -= 1;
            best_size += 1;
        }
        while best_i + best_size < ahi
            && best_j + best_size < bhi
            && self.a[best_i + best_size] == self.b[best_j + best_size]
        {
            best_size += 1;
        }

        (best_i, best_j, best_size)
    }
}

/// Positions of every character of `b`, ascending, minus popular characters
/// for long sequences.
fn index_positions(b: &[char]) -> HashMap<char, Vec<usize>> {
    let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, &c) in b.iter().enumerate() {
        b2j.entry(c).or_default().push(j);
    }

    let n = b.len();
    if n >= AUTOJUNK_MIN_LEN {
        let limit = n / 100 + 1;
        b2j.retain(|_, positions| positions.len() <= limit);
    }
    b2j
}
