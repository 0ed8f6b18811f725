use serde::Deserialize;

/// Observer options for reveal targets.
///
/// `thresholds` only decide when the browser calls back. Any intersecting
/// sample latches: an element taller than the root divided by the smallest
/// threshold never reaches that ratio, and the bottom root margin already
/// keeps a sliver at the edge from counting.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RevealPolicy {
    pub thresholds: Vec<f64>,
    #[serde(default)]
    pub root_margin_bottom_px: u32,
}

impl RevealPolicy {
    pub fn single(threshold: f64) -> Self {
        Self {
            thresholds: vec![threshold],
            root_margin_bottom_px: 0,
        }
    }

    /// Multi-step thresholds with the viewport bottom pulled in by 100px.
    pub fn staged() -> Self {
        Self {
            thresholds: vec![0.1, 0.3, 0.5, 0.7, 0.9],
            root_margin_bottom_px: 100,
        }
    }

    pub fn root_margin(&self) -> String {
        match self.root_margin_bottom_px {
            0 => "0px".to_string(),
            px => format!("0px 0px -{}px 0px", px),
        }
    }

    pub fn counts_as_visible(&self, is_intersecting: bool, ratio: f64) -> bool {
        // Older engines leave `isIntersecting` unset; a positive ratio still means overlap.
        is_intersecting || ratio > 0.0
    }
}

impl Default for RevealPolicy {
    fn default() -> Self {
        Self::single(0.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staged_policy_pulls_in_bottom_edge() {
        let policy = RevealPolicy::staged();
        assert_eq!(policy.thresholds, vec![0.1, 0.3, 0.5, 0.7, 0.9]);
        assert_eq!(policy.root_margin(), "0px 0px -100px 0px");
    }

    #[test]
    fn single_policy_has_no_margin() {
        assert_eq!(RevealPolicy::default().root_margin(), "0px");
    }

    #[test]
    fn any_intersection_counts() {
        let policy = RevealPolicy::single(0.1);
        assert!(policy.counts_as_visible(true, 0.02));
        assert!(policy.counts_as_visible(true, 0.4));
        assert!(policy.counts_as_visible(false, 0.4));
        assert!(!policy.counts_as_visible(false, 0.0));
        assert!(!policy.counts_as_visible(false, f64::NAN));
    }

    #[test]
    fn tall_target_below_smallest_threshold_still_counts() {
        // 7000px section filling a 700px viewport minus the 100px margin.
        let policy = RevealPolicy::staged();
        let best_ratio = 600.0 / 7000.0;
        assert!(best_ratio < policy.thresholds[0]);
        assert!(policy.counts_as_visible(true, best_ratio));
        // The callback that fires on first overlap carries a ratio near zero.
        assert!(policy.counts_as_visible(true, 0.0));
    }
}
