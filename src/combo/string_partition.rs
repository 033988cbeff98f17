//! Per-slice partition enumeration (spec §4.4).

/// Enumerate every partition of `tokens` into an ordered list of contiguous
/// sub-phrases whose concatenation reproduces the slice.
///
/// Recursive: for each split position `k in [1, n-1]`, the left sub-phrase
/// `tokens[0..k]` is taken and the remainder `tokens[k..]` is recursed on;
/// the trivial partition `{whole}` is appended last. `O(2^(n-1))` partitions
/// for `n` tokens, emitted deterministically from finest to `{whole}`.
pub fn enumerate_partitions(tokens: &[String]) -> Vec<Vec<String>> {
    let n = tokens.len();
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![vec![tokens[0].clone()]];
    }

    let mut partitions = Vec::new();
    for k in 1..n {
        let left = tokens[..k].join(" ");
        let rest = enumerate_partitions(&tokens[k..]);
        for mut tail in rest {
            let mut partition = vec![left.clone()];
            partition.append(&mut tail);
            partitions.push(partition);
        }
    }
    partitions.push(vec![tokens.join(" ")]);
    partitions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(s: &str) -> Vec<String> {
        s.split(' ').map(String::from).collect()
    }

    #[test]
    fn single_token_has_one_partition() {
        assert_eq!(enumerate_partitions(&toks("nce")), vec![vec!["nce".to_string()]]);
    }

    #[test]
    fn partition_count_is_two_pow_n_minus_one() {
        let tokens = toks("san francisco international airport");
        let partitions = enumerate_partitions(&tokens);
        assert_eq!(partitions.len(), 1 << (tokens.len() - 1));
    }

    #[test]
    fn whole_partition_is_last() {
        let tokens = toks("rio de janeiro");
        let partitions = enumerate_partitions(&tokens);
        assert_eq!(partitions.last(), Some(&vec!["rio de janeiro".to_string()]));
    }

    #[test]
    fn three_tokens_produces_expected_partitions() {
        let partitions = enumerate_partitions(&toks("a b c"));
        assert_eq!(
            partitions,
            vec![
                vec!["a".to_string(), "b".to_string(), "c".to_string()],
                vec!["a".to_string(), "b c".to_string()],
                vec!["a b".to_string(), "c".to_string()],
                vec!["a b c".to_string()],
            ]
        );
    }
}
