use super::context::MatchContext;
use crate::report::MatchTier;

/// Result of a scrambled comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrambledOutcome {
    /// Every element found an accepted partner
    pub matched: bool,
    /// Weakest accepted pair tier; `ReferenceEqual` for two empty sets and
    /// `None` when unmatched
    pub weakest: MatchTier,
    /// Chosen `(index in A, index in B)` pairs, in A's order
    pub pairs: Vec<(usize, usize)>,
    pub unmatched_a: Vec<usize>,
    pub unmatched_b: Vec<usize>,
}

impl ScrambledOutcome {
    fn size_mismatch(len_a: usize, len_b: usize) -> Self {
        Self {
            matched: false,
            weakest: MatchTier::None,
            pairs: Vec::new(),
            unmatched_a: (0..len_a).collect(),
            unmatched_b: (0..len_b).collect(),
        }
    }
}

/// Pair up two unordered collections greedily
///
/// Each element of A, in A's order, takes the first unused element of B
/// (in B's order) whose pair tier the context accepts. This is not a
/// maximum matching: an early element can take a partner a later element
/// needed. Outside thorough mode the scan stops at the first element that
/// finds no partner.
pub fn compare_scrambled<'s, T, C, F>(
    set_a: &'s [T],
    set_b: &'s [T],
    ctx: &mut C,
    mut item_tier: F,
) -> ScrambledOutcome
where
    C: MatchContext + ?Sized,
    F: FnMut(&'s T, &'s T, &mut C) -> MatchTier,
{
    let thorough = ctx.thorough();
    if set_a.len() != set_b.len() && !thorough {
        return ScrambledOutcome::size_mismatch(set_a.len(), set_b.len());
    }

    let mut used = vec![false; set_b.len()];
    let mut matched = set_a.len() == set_b.len();
    let mut weakest = MatchTier::ReferenceEqual;
    let mut pairs = Vec::new();
    let mut unmatched_a = Vec::new();

    for (i, a) in set_a.iter().enumerate() {
        let mut found = None;
        for (j, b) in set_b.iter().enumerate() {
            if used[j] {
                continue;
            }
            let tier = item_tier(a, b, ctx);
            if ctx.accepts(tier) {
                found = Some((j, tier));
                break;
            }
        }

        match found {
            Some((j, tier)) => {
                used[j] = true;
                pairs.push((i, j));
                weakest = weakest.min(tier);
            }
            None => {
                matched = false;
                unmatched_a.push(i);
                if !thorough {
                    unmatched_a.extend(i + 1..set_a.len());
                    break;
                }
            }
        }
    }

    let unmatched_b = used
        .iter()
        .enumerate()
        .filter(|(_, used)| !**used)
        .map(|(j, _)| j)
        .collect();

    ScrambledOutcome {
        matched,
        weakest: if matched { weakest } else { MatchTier::None },
        pairs,
        unmatched_a,
        unmatched_b,
    }
}
