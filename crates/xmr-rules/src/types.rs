//! Types used to report detection results

use serde::{Deserialize, Serialize};
use std::fmt;

/// The detection rules, numbered as in *Making Sense of Data*
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// Rule 1 on the X chart
    XBeyondLimits,
    /// Rule 1 on the mR chart
    MovingRangeBeyondLimit,
    /// Rule 2
    RunsAboutCentralLine,
    /// Rule 3
    RunsNearLimits,
}

impl RuleKind {
    /// All rules in report order
    pub const ALL: [RuleKind; 4] = [
        RuleKind::XBeyondLimits,
        RuleKind::MovingRangeBeyondLimit,
        RuleKind::RunsAboutCentralLine,
        RuleKind::RunsNearLimits,
    ];

    /// Effect strength of the assignable cause this rule points at
    pub fn effect(&self) -> &'static str {
        match self {
            RuleKind::XBeyondLimits | RuleKind::MovingRangeBeyondLimit => "dominant",
            RuleKind::RunsAboutCentralLine => "weak but sustained",
            RuleKind::RunsNearLimits => "moderate but sustained",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleKind::XBeyondLimits => write!(f, "Rule 1 (X): points beyond limits"),
            RuleKind::MovingRangeBeyondLimit => write!(f, "Rule 1 (mR): points beyond limit"),
            RuleKind::RunsAboutCentralLine => write!(f, "Rule 2: runs about the central line"),
            RuleKind::RunsNearLimits => write!(f, "Rule 3: runs near the limits"),
        }
    }
}

/// Flag sequences of all rules for one chart
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SignalReport {
    /// Rule 1 on the X values
    pub x_beyond_limits: Vec<bool>,
    /// Rule 1 on the moving ranges
    pub mr_beyond_limit: Vec<bool>,
    /// Rule 2 on the X values
    pub runs_about_central_line: Vec<bool>,
    /// Rule 3 on the X values
    pub runs_near_limits: Vec<bool>,
}

impl SignalReport {
    /// Flags produced by `rule`
    pub fn flags(&self, rule: RuleKind) -> &[bool] {
        match rule {
            RuleKind::XBeyondLimits => &self.x_beyond_limits,
            RuleKind::MovingRangeBeyondLimit => &self.mr_beyond_limit,
            RuleKind::RunsAboutCentralLine => &self.runs_about_central_line,
            RuleKind::RunsNearLimits => &self.runs_near_limits,
        }
    }

    /// Indices flagged by `rule`
    pub fn flagged_indices(&self, rule: RuleKind) -> Vec<usize> {
        self.flags(rule)
            .iter()
            .enumerate()
            .filter_map(|(i, &f)| f.then_some(i))
            .collect()
    }

    /// Whether any rule flagged any point
    pub fn any(&self) -> bool {
        RuleKind::ALL
            .iter()
            .any(|&rule| self.flags(rule).iter().any(|&f| f))
    }

    /// Whether `index` was flagged by at least one rule
    pub fn is_flagged(&self, index: usize) -> bool {
        RuleKind::ALL
            .iter()
            .any(|&rule| self.flags(rule).get(index).copied().unwrap_or(false))
    }
}

impl fmt::Display for SignalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Signal Report:")?;
        for rule in RuleKind::ALL {
            let indices = self.flagged_indices(rule);
            if indices.is_empty() {
                writeln!(f, "  {rule}: none")?;
            } else {
                writeln!(f, "  {rule} ({} effect): {:?}", rule.effect(), indices)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> SignalReport {
        SignalReport {
            x_beyond_limits: vec![false, true, false],
            mr_beyond_limit: vec![false, false, false],
            runs_about_central_line: vec![false, false, false],
            runs_near_limits: vec![true, true, false],
        }
    }

    #[test]
    fn test_flagged_indices() {
        let r = report();
        assert_eq!(r.flagged_indices(RuleKind::XBeyondLimits), vec![1]);
        assert_eq!(r.flagged_indices(RuleKind::RunsNearLimits), vec![0, 1]);
        assert!(r.flagged_indices(RuleKind::MovingRangeBeyondLimit).is_empty());
    }

    #[test]
    fn test_any_and_is_flagged() {
        let r = report();
        assert!(r.any());
        assert!(r.is_flagged(0));
        assert!(!r.is_flagged(2));
        assert!(!r.is_flagged(99));
        assert!(!SignalReport::default().any());
    }

    #[test]
    fn test_display() {
        let text = report().to_string();
        assert!(text.contains("Rule 1 (X): points beyond limits (dominant effect): [1]"));
        assert!(text.contains("Rule 2: runs about the central line: none"));
    }
}
