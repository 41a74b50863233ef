//! Reading-order line reconstruction.
//!
//! Text layers emit fragments in drawing order, which rarely matches reading
//! order. Lines are rebuilt geometrically: fragments whose baselines quantize
//! to the same even value share a line, parts are read left to right, and
//! lines are read from the top of the page (highest y) down.

use std::{cmp::Reverse, collections::BTreeMap};

use log::{debug, trace};

use trackplan_core::fragment::{Line, TextFragment};

/// Quantize a document-space y to the nearest even integer.
///
/// Ties round toward negative infinity, so `100` and `101` both map to `100`
/// while `99` maps to `98`.
///
/// ```
/// # use trackplan::extract::quantize_y;
/// assert_eq!(quantize_y(100.0), 100);
/// assert_eq!(quantize_y(101.0), 100);
/// assert_eq!(quantize_y(99.0), 98);
/// assert_eq!(quantize_y(101.2), 102);
/// ```
pub fn quantize_y(y: f64) -> i64 {
    ((y / 2.0 - 0.5).ceil() * 2.0) as i64
}

/// Group one page of fragments into reading-order lines.
///
/// Whitespace-only fragments and fragments with a non-finite position are
/// discarded. The result does not depend on the order of `fragments`.
pub fn reconstruct_lines(fragments: &[TextFragment]) -> Vec<Line> {
    let mut rows: BTreeMap<Reverse<i64>, Vec<(f64, &str)>> = BTreeMap::new();

    for fragment in fragments {
        let text = fragment.text().trim();
        if text.is_empty() {
            continue;
        }
        if !(fragment.x().is_finite() && fragment.y().is_finite()) {
            debug!(text, x = fragment.x(), y = fragment.y(); "Discarding fragment with non-finite position");
            continue;
        }

        rows.entry(Reverse(quantize_y(fragment.y())))
            .or_default()
            .push((fragment.x(), text));
    }

    let lines: Vec<Line> = rows
        .into_iter()
        .map(|(Reverse(y), mut parts)| {
            parts.sort_by(|(ax, at), (bx, bt)| ax.total_cmp(bx).then_with(|| at.cmp(bt)));
            Line::new(y, parts.into_iter().map(|(_, text)| text.to_string()).collect())
        })
        .collect();

    trace!(fragments = fragments.len(), lines = lines.len(); "Reconstructed lines");
    lines
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    fn fragment_strategy() -> impl Strategy<Value = TextFragment> {
        ("[a-z0-9. ]{0,8}", 0.0f64..600.0, 0.0f64..800.0)
            .prop_map(|(text, x, y)| TextFragment::new(text, x, y))
    }

    fn page_and_permutation() -> impl Strategy<Value = (Vec<TextFragment>, Vec<TextFragment>)> {
        proptest::collection::vec(fragment_strategy(), 0..40).prop_flat_map(|page| {
            let shuffled = Just(page.clone()).prop_shuffle();
            (Just(page), shuffled)
        })
    }

    fn check_permutation_invariance(
        page: Vec<TextFragment>,
        shuffled: Vec<TextFragment>,
    ) -> Result<(), TestCaseError> {
        prop_assert_eq!(reconstruct_lines(&page), reconstruct_lines(&shuffled));
        Ok(())
    }

    fn check_lines_strictly_descending(page: Vec<TextFragment>) -> Result<(), TestCaseError> {
        let lines = reconstruct_lines(&page);
        for pair in lines.windows(2) {
            prop_assert!(pair[0].y() > pair[1].y());
        }
        for line in &lines {
            prop_assert!(!line.parts().is_empty());
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn permutation_invariant((page, shuffled) in page_and_permutation()) {
            check_permutation_invariance(page, shuffled)?;
        }

        #[test]
        fn lines_strictly_descending(page in proptest::collection::vec(fragment_strategy(), 0..40)) {
            check_lines_strictly_descending(page)?;
        }
    }
}
