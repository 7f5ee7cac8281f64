use std::fmt;

use super::context::MatchContext;

/// Compare two position-aligned sequences element by element
///
/// Outside thorough mode a length difference fails immediately and the
/// scan stops at the first unequal index. In thorough mode every index of
/// the common prefix is visited, each mismatch is noted as
/// `<name>: <a> != <b>`, and surplus elements are noted against
/// `<missing>`. Elements without a name are labelled by index (`[i]`).
pub fn compare_ordered<'s, T, C, F>(
    seq_a: &'s [T],
    seq_b: &'s [T],
    ctx: &mut C,
    names: Option<&[&str]>,
    mut item_equals: F,
) -> bool
where
    T: fmt::Display,
    C: MatchContext + ?Sized,
    F: FnMut(&'s T, &'s T, &mut C) -> bool,
{
    let thorough = ctx.thorough();
    if seq_a.len() != seq_b.len() && !thorough {
        return false;
    }

    let mut equal = seq_a.len() == seq_b.len();
    for (index, (a, b)) in seq_a.iter().zip(seq_b).enumerate() {
        if item_equals(a, b, ctx) {
            continue;
        }
        if !thorough {
            return false;
        }
        equal = false;
        ctx.note(format!("{}: {} != {}", label(names, index), a, b));
    }

    if thorough {
        for (index, a) in seq_a.iter().enumerate().skip(seq_b.len()) {
            ctx.note(format!("{}: {} != <missing>", label(names, index), a));
        }
        for (index, b) in seq_b.iter().enumerate().skip(seq_a.len()) {
            ctx.note(format!("{}: <missing> != {}", label(names, index), b));
        }
    }

    equal
}

fn label(names: Option<&[&str]>, index: usize) -> String {
    match names.and_then(|names| names.get(index)) {
        Some(name) => (*name).to_string(),
        None => format!("[{index}]"),
    }
}
