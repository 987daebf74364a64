//! Empirical convergence study of the composite rules.
//!
//! Given the exact value of an integral, tabulate the absolute error of each
//! rule for a sequence of subdivision counts and estimate the observed order
//! `p` in `error ~ C h^p`. The table is plain data (one row per rule), ready
//! to be printed or handed to a plotting routine.

use crate::error::{NumericError, Result};
use crate::quad::integrate;
use crate::rule::Rule;
use ndarray::{Array2, ArrayView1};
use std::fmt;

/// Subdivision counts used when none are given.
pub const DEFAULT_SUBDIVISIONS: [usize; 5] = [4, 8, 16, 32, 64];

#[derive(Clone, Debug)]
pub struct ConvergenceStudy {
    /// Exact value of the integral.
    pub reference: f64,
    /// Subdivision counts, one column of the table each.
    pub subdivisions: Vec<usize>,
    /// Rules compared, one row of the table each.
    pub rules: Vec<Rule>,
}

impl ConvergenceStudy {
    /// Integrate `f` over `[a, b]` with every rule and subdivision count.
    pub fn run<F>(&self, f: F, a: f64, b: f64) -> Result<ConvergenceTable>
    where
        F: Fn(f64) -> f64,
    {
        let mut errors = Array2::zeros((self.rules.len(), self.subdivisions.len()));
        for (i, rule) in self.rules.iter().enumerate() {
            for (j, &n) in self.subdivisions.iter().enumerate() {
                let val = integrate(&f, a, b, n, *rule)?;
                errors[[i, j]] = (val - self.reference).abs();
            }
        }

        Ok(ConvergenceTable {
            rules: self.rules.clone(),
            subdivisions: self.subdivisions.clone(),
            errors,
        })
    }
}

/// Builder struct used to construct a convergence study.
#[derive(Default)]
pub struct ConvergenceStudyBuilder {
    reference: Option<f64>,
    subdivisions: Option<Vec<usize>>,
    rules: Option<Vec<Rule>>,
}

impl ConvergenceStudyBuilder {
    /// Set the exact value of the integral. Required.
    pub fn reference(mut self, reference: f64) -> Self {
        self.reference = Some(reference);
        self
    }
    /// Set the subdivision counts.
    pub fn subdivisions(mut self, subdivisions: Vec<usize>) -> Self {
        self.subdivisions = Some(subdivisions);
        self
    }
    /// Set the rules to compare.
    pub fn rules(mut self, rules: Vec<Rule>) -> Self {
        self.rules = Some(rules);
        self
    }
    /// Build the study.
    pub fn build(self) -> Result<ConvergenceStudy> {
        let reference = self.reference.ok_or(NumericError::MissingReference)?;
        Ok(ConvergenceStudy {
            reference,
            subdivisions: self
                .subdivisions
                .unwrap_or_else(|| DEFAULT_SUBDIVISIONS.to_vec()),
            rules: self.rules.unwrap_or_else(|| Rule::ALL.to_vec()),
        })
    }
}

/// Absolute errors, one row per rule and one column per subdivision count.
#[derive(Clone, Debug)]
pub struct ConvergenceTable {
    rules: Vec<Rule>,
    subdivisions: Vec<usize>,
    errors: Array2<f64>,
}

impl ConvergenceTable {
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn subdivisions(&self) -> &[usize] {
        &self.subdivisions
    }

    pub fn errors(&self) -> &Array2<f64> {
        &self.errors
    }

    /// Error row of `rule`, or `None` if it was not part of the study.
    pub fn errors_for(&self, rule: Rule) -> Option<ArrayView1<f64>> {
        let i = self.rules.iter().position(|r| *r == rule)?;
        Some(self.errors.row(i))
    }

    /// Observed orders between consecutive subdivision counts,
    /// `ln(e_j / e_{j+1}) / ln(n_{j+1} / n_j)`.
    ///
    /// Simpson-type rules are measured against the even count they actually
    /// used.
    pub fn observed_orders(&self, rule: Rule) -> Option<Vec<f64>> {
        let row = self.errors_for(rule)?;
        let ns: Vec<f64> = self
            .subdivisions
            .iter()
            .map(|&n| effective_subdivisions(rule, n) as f64)
            .collect();

        Some(
            (1..ns.len())
                .map(|j| (row[j - 1] / row[j]).ln() / (ns[j] / ns[j - 1]).ln())
                .collect(),
        )
    }
}

fn effective_subdivisions(rule: Rule, n: usize) -> usize {
    match rule {
        Rule::Simpson | Rule::SimpsonLagrange if n % 2 != 0 => n.saturating_add(1),
        _ => n,
    }
}

impl fmt::Display for ConvergenceTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:<18}", "rule")?;
        for n in self.subdivisions.iter() {
            write!(f, "{:>12}", format!("n={}", n))?;
        }
        writeln!(f, "{:>8}", "order")?;

        for (i, rule) in self.rules.iter().enumerate() {
            write!(f, "{:<18}", rule.name())?;
            for e in self.errors.row(i).iter() {
                write!(f, "{:>12.3e}", e)?;
            }
            match self.observed_orders(*rule).and_then(|o| o.last().copied()) {
                Some(p) if p.is_finite() => writeln!(f, "{:>8.2}", p)?,
                _ => writeln!(f, "{:>8}", "-")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::ErrorKind;
    use crate::rule::RectangleRule;
    use crate::test_utils::*;

    fn quartic_cos_table() -> ConvergenceTable {
        ConvergenceStudyBuilder::default()
            .reference(quartic_cos_integral(0.0, 2.0))
            .build()
            .unwrap()
            .run(quartic_cos, 0.0, 2.0)
            .unwrap()
    }

    #[test]
    fn test_observed_orders() {
        let table = quartic_cos_table();
        assert_eq!(table.errors().dim(), (6, 5));

        for rule in Rule::ALL.iter() {
            let orders = table.observed_orders(*rule).unwrap();
            assert_eq!(orders.len(), 4);
            let p = *orders.last().unwrap();
            let expected = rule.order() as f64;
            assert!(
                (p - expected).abs() < 0.1,
                "{}: observed order {} expected {}",
                rule,
                p,
                expected
            );
        }
    }

    #[test]
    fn test_errors_shrink() {
        let table = quartic_cos_table();
        for rule in Rule::ALL.iter() {
            let row = table.errors_for(*rule).unwrap();
            for j in 1..row.len() {
                assert!(row[j] < row[j - 1]);
            }
        }
    }

    #[test]
    fn test_simpson_variants_match() {
        let table = quartic_cos_table();
        let classic = table.errors_for(Rule::Simpson).unwrap();
        let lagrange = table.errors_for(Rule::SimpsonLagrange).unwrap();
        for (c, l) in classic.iter().zip(lagrange.iter()) {
            test_abs(*l, *c, 1e-9);
        }
    }

    #[test]
    fn test_selected_rules_and_odd_counts() {
        let study = ConvergenceStudyBuilder::default()
            .reference(sine_poly_integral(0.0, 2.0))
            .rules(vec![Rule::Simpson, Rule::Rectangle(RectangleRule::Midpoint)])
            .subdivisions(vec![7, 15, 31])
            .build()
            .unwrap();
        let table = study.run(sine_poly, 0.0, 2.0).unwrap();

        assert_eq!(table.rules().len(), 2);
        assert_eq!(table.subdivisions(), &[7, 15, 31]);
        assert!(table.errors_for(Rule::Trapezoid).is_none());

        // measured at 8, 16, 32
        let p = *table.observed_orders(Rule::Simpson).unwrap().last().unwrap();
        assert!((p - 4.0).abs() < 0.15);
    }

    #[test]
    fn test_display() {
        let table = quartic_cos_table();
        let text = table.to_string();
        assert_eq!(text.lines().count(), 7);
        assert!(text.lines().next().unwrap().contains("n=64"));
        assert!(text.contains("simpson-lagrange"));
    }

    #[test]
    fn test_missing_reference() {
        let err = ConvergenceStudyBuilder::default().build().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_invalid_count_propagates() {
        let study = ConvergenceStudyBuilder::default()
            .reference(1.0)
            .subdivisions(vec![4, 0])
            .build()
            .unwrap();
        let err = study.run(quartic_cos, 0.0, 2.0).unwrap_err();
        assert_eq!(err, NumericError::InvalidSubdivisions { n: 0 });
    }
}
