use crate::common::*;
use std::fmt;

/// The result of rolling an expression.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Outcome {
    actual: Int,
    verdict: Option<Verdict>,
}

/// How the rolled value fared against the comparison's target.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Verdict {
    pub comparison: Comparison,
    pub target: Int,
    pub success: bool,
}

impl Outcome {
    pub fn new(actual: Int, verdict: Option<Verdict>) -> Self {
        Self { actual, verdict }
    }

    pub fn judged(actual: Int, comparison: Comparison, target: Int) -> Self {
        let success = comparison.judge(actual, target);
        Self::new(
            actual,
            Some(Verdict {
                comparison,
                target,
                success,
            }),
        )
    }

    pub fn actual(&self) -> Int {
        self.actual
    }

    pub fn verdict(&self) -> Option<&Verdict> {
        self.verdict.as_ref()
    }

    pub fn judgement(&self) -> Option<bool> {
        self.verdict.map(|v| v.success)
    }

    pub fn target(&self) -> Option<Int> {
        self.verdict.map(|v| v.target)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.actual)?;
        if let Some(verdict) = &self.verdict {
            write!(f, " ({})", verdict)?;
        }
        Ok(())
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = if self.success { "success" } else { "failure" };
        write!(f, "{} {}: {}", self.comparison, self.target, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Outcome::new(7, None).to_string(), "7");
        assert_eq!(
            Outcome::judged(7, Comparison::Ge, 10).to_string(),
            "7 (>= 10: failure)"
        );
        assert_eq!(
            Outcome::judged(2, Comparison::Gt, 1).to_string(),
            "2 (> 1: success)"
        );
    }

    #[test]
    fn test_judgement_and_target_together() {
        let plain = Outcome::new(3, None);
        assert_eq!((plain.judgement(), plain.target()), (None, None));

        let judged = Outcome::judged(1, Comparison::Eq, 1);
        assert_eq!((judged.judgement(), judged.target()), (Some(true), Some(1)));
    }
}
