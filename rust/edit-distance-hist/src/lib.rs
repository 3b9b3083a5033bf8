//! Levenshtein distance statistics over the lines of a text file.

use std::fs;
use std::io;
use std::path::Path;

/// Minimum number of single-character insertions, deletions, and
/// substitutions to transform `source` into `target`.
///
/// Two-row dynamic program, O(|source| * |target|) time and O(|target|)
/// space. Symmetric; equals the longer length when one input is empty.
pub fn levenshtein(source: &str, target: &str) -> usize {
    let s: Vec<char> = source.chars().collect();
    let t: Vec<char> = target.chars().collect();
    if t.is_empty() {
        return s.len();
    }
    if s.is_empty() {
        return t.len();
    }

    let mut prev: Vec<usize> = (0..=t.len()).collect();
    let mut curr: Vec<usize> = vec![0; t.len() + 1];

    for (i, &sc) in s.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &tc) in t.iter().enumerate() {
            let substitution = prev[j] + usize::from(sc != tc);
            let deletion = prev[j + 1] + 1;
            let insertion = curr[j] + 1;
            curr[j + 1] = substitution.min(deletion).min(insertion);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[t.len()]
}

/// Distance of every subsequent line against the first line, with zero
/// distances (exact duplicates of the first line) dropped. Empty when the
/// input has fewer than two lines.
pub fn distances_from_first(lines: &[String]) -> Vec<usize> {
    let Some((first, rest)) = lines.split_first() else {
        return Vec::new();
    };
    rest.iter()
        .map(|line| levenshtein(line, first))
        .filter(|&d| d > 0)
        .collect()
}

/// Equal-width histogram of `values` with `bins` bins over [min, max].
///
/// Returns (bin start, count) per bin; the top bin is closed so the
/// maximum value is counted. Empty input yields no bins.
pub fn histogram(values: &[usize], bins: usize) -> Vec<(f64, usize)> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }
    let min = *values.iter().min().unwrap() as f64;
    let max = *values.iter().max().unwrap() as f64;
    // Degenerate single-value input still gets a nonzero bin width.
    let width = ((max - min) / bins as f64).max(f64::EPSILON);

    let mut counts = vec![0usize; bins];
    for &v in values {
        let idx = (((v as f64 - min) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, c)| (min + i as f64 * width, c))
        .collect()
}

/// Read a text file into lines, trailing newline excluded.
pub fn read_lines(path: &Path) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content.lines().map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kitten_sitting() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
    }

    #[test]
    fn test_identity_is_zero() {
        for s in ["", "a", "kitten", "über-straße"] {
            assert_eq!(levenshtein(s, s), 0);
        }
    }

    #[test]
    fn test_symmetry() {
        let pairs = [
            ("kitten", "sitting"),
            ("flaw", "lawn"),
            ("", "abc"),
            ("gumbo", "gambol"),
        ];
        for (a, b) in pairs {
            assert_eq!(levenshtein(a, b), levenshtein(b, a), "{} vs {}", a, b);
        }
    }

    #[test]
    fn test_empty_against_nonempty() {
        assert_eq!(levenshtein("", "sitting"), 7);
        assert_eq!(levenshtein("kitten", ""), 6);
    }

    #[test]
    fn test_triangle_inequality() {
        let words = ["kitten", "sitting", "mitten", "", "kit", "knitting"];
        for a in words {
            for b in words {
                for c in words {
                    let ab = levenshtein(a, b);
                    let bc = levenshtein(b, c);
                    let ac = levenshtein(a, c);
                    assert!(
                        ac <= ab + bc,
                        "d({a:?},{c:?})={ac} > d({a:?},{b:?})={ab} + d({b:?},{c:?})={bc}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_distances_from_first_drops_zeros() {
        let lines: Vec<String> = ["kitten", "sitting", "kitten", "mitten"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(distances_from_first(&lines), vec![3, 1]);

        assert!(distances_from_first(&[]).is_empty());
        assert!(distances_from_first(&["only".to_string()]).is_empty());
    }

    #[test]
    fn test_histogram_counts_every_value() {
        let values = vec![1, 2, 2, 3, 5, 8, 13];
        let hist = histogram(&values, 4);
        assert_eq!(hist.len(), 4);
        let total: usize = hist.iter().map(|&(_, c)| c).sum();
        assert_eq!(total, values.len());
        // The maximum value lands in the top (closed) bin.
        assert!(hist[3].1 >= 1);
    }

    #[test]
    fn test_histogram_degenerate_inputs() {
        assert!(histogram(&[], 13).is_empty());
        assert!(histogram(&[1, 2, 3], 0).is_empty());
        // All-equal values collapse into the first bin.
        let hist = histogram(&[4, 4, 4], 3);
        assert_eq!(hist[0].1, 3);
        assert_eq!(hist[1].1 + hist[2].1, 0);
    }
}
