//! Quadrature rule selection.
//!
//! Rules are closed enums matched exhaustively. Textual names (for
//! command-line or configuration driven callers) go through `FromStr`, and an
//! unknown name is an error rather than a silent default.

use crate::error::NumericError;
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Sample point used by the rectangle rule on each subinterval.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum RectangleRule {
    /// `a + i h`
    Left,
    /// `a + (i + 1) h`
    Right,
    /// `a + (i + 1/2) h`
    Midpoint,
}

/// Composite rule families understood by `quad::integrate`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Rule {
    Rectangle(RectangleRule),
    Trapezoid,
    Simpson,
    SimpsonLagrange,
}

impl Rule {
    /// Every rule variant, in reporting order.
    pub const ALL: [Rule; 6] = [
        Rule::Rectangle(RectangleRule::Left),
        Rule::Rectangle(RectangleRule::Right),
        Rule::Rectangle(RectangleRule::Midpoint),
        Rule::Trapezoid,
        Rule::Simpson,
        Rule::SimpsonLagrange,
    ];

    /// Asymptotic order of the error in `h` for smooth integrands.
    pub fn order(self) -> u32 {
        match self {
            Rule::Rectangle(RectangleRule::Left) | Rule::Rectangle(RectangleRule::Right) => 1,
            Rule::Rectangle(RectangleRule::Midpoint) | Rule::Trapezoid => 2,
            Rule::Simpson | Rule::SimpsonLagrange => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Rule::Rectangle(RectangleRule::Left) => "left",
            Rule::Rectangle(RectangleRule::Right) => "right",
            Rule::Rectangle(RectangleRule::Midpoint) => "midpoint",
            Rule::Trapezoid => "trapezoid",
            Rule::Simpson => "simpson",
            Rule::SimpsonLagrange => "simpson-lagrange",
        }
    }
}

lazy_static! {
    static ref RULE_NAMES: HashMap<&'static str, Rule> = {
        let mut m = HashMap::new();
        for rule in Rule::ALL.iter() {
            m.insert(rule.name(), *rule);
        }
        m.insert("l", Rule::Rectangle(RectangleRule::Left));
        m.insert("r", Rule::Rectangle(RectangleRule::Right));
        m.insert("mid", Rule::Rectangle(RectangleRule::Midpoint));
        m.insert("middle", Rule::Rectangle(RectangleRule::Midpoint));
        m.insert("trap", Rule::Trapezoid);
        m.insert("trapezoidal", Rule::Trapezoid);
        m.insert("lagrange", Rule::SimpsonLagrange);
        m.insert("simpson_lagrange", Rule::SimpsonLagrange);
        m
    };
}

impl FromStr for Rule {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        RULE_NAMES
            .get(key.as_str())
            .copied()
            .ok_or_else(|| NumericError::UnknownRule { name: s.to_string() })
    }
}

impl FromStr for RectangleRule {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<Rule>() {
            Ok(Rule::Rectangle(rule)) => Ok(rule),
            _ => Err(NumericError::UnknownRule { name: s.to_string() }),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl fmt::Display for RectangleRule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", Rule::Rectangle(*self).name())
    }
}
