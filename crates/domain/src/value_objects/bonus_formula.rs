//! Additive bonus formulas and parsing
//!
//! Supports the flat formulas found in attack bonus fields, like "2 + @mod",
//! "@prof - 1" or "2 + 3". Dice terms and functions are not supported; callers
//! treat a parse failure as "cannot be totalled".

use thiserror::Error;

/// Error when parsing a bonus formula
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormulaParseError {
    /// The formula string is empty
    #[error("Empty bonus formula")]
    Empty,
    /// A `+` or `-` with nothing after it
    #[error("Formula ends with a dangling operator")]
    DanglingOperator,
    /// A term that is neither a number nor an `@` reference
    #[error("Invalid formula term: {0}")]
    InvalidTerm(String),
}

/// One signed term of a formula.
#[derive(Debug, Clone, PartialEq)]
pub enum FormulaTerm {
    Number(f64),
    /// Roll data reference without the leading `@` (e.g. "mod")
    Reference { name: String, negated: bool },
}

impl FormulaTerm {
    fn parse(token: &str, negated: bool) -> Result<Self, FormulaParseError> {
        if let Some(name) = token.strip_prefix('@') {
            let valid = !name.is_empty()
                && name
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '_');
            if !valid {
                return Err(FormulaParseError::InvalidTerm(token.to_string()));
            }
            return Ok(Self::Reference {
                name: name.to_string(),
                negated,
            });
        }

        let value: f64 = token
            .parse()
            .map_err(|_| FormulaParseError::InvalidTerm(token.to_string()))?;
        if !value.is_finite() {
            return Err(FormulaParseError::InvalidTerm(token.to_string()));
        }
        Ok(Self::Number(if negated { -value } else { value }))
    }
}

/// A parsed additive formula like "2 + @mod + 3"
#[derive(Debug, Clone, PartialEq)]
pub struct BonusFormula {
    terms: Vec<FormulaTerm>,
}

impl BonusFormula {
    /// Parse a formula string.
    ///
    /// Supported formats:
    /// - "N" - a decimal number
    /// - "@name" - a roll data reference
    /// - any of the above joined with `+` or `-`, including "2 + -1"
    pub fn parse(input: &str) -> Result<Self, FormulaParseError> {
        if input.trim().is_empty() {
            return Err(FormulaParseError::Empty);
        }

        let mut terms = Vec::new();
        let mut token = String::new();
        let mut negated = false;

        for ch in input.chars() {
            if ch != '+' && ch != '-' {
                token.push(ch);
                continue;
            }

            let trimmed = token.trim();
            if trimmed.is_empty() {
                // Unary sign directly after another operator or at the start
                if ch == '-' {
                    negated = !negated;
                }
                continue;
            }

            terms.push(FormulaTerm::parse(trimmed, negated)?);
            token.clear();
            negated = ch == '-';
        }

        let trimmed = token.trim();
        if trimmed.is_empty() {
            return Err(FormulaParseError::DanglingOperator);
        }
        terms.push(FormulaTerm::parse(trimmed, negated)?);

        Ok(Self { terms })
    }

    pub fn terms(&self) -> &[FormulaTerm] {
        &self.terms
    }

    /// Total the formula, resolving references through `lookup`.
    ///
    /// Returns `None` if any reference is unknown.
    pub fn evaluate(&self, lookup: impl Fn(&str) -> Option<f64>) -> Option<f64> {
        self.terms.iter().try_fold(0.0, |total, term| match term {
            FormulaTerm::Number(value) => Some(total + value),
            FormulaTerm::Reference { name, negated } => {
                let value = lookup(name)?;
                Some(if *negated { total - value } else { total + value })
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(name: &str) -> Option<f64> {
        match name {
            "mod" => Some(4.0),
            "prof" => Some(3.0),
            _ => None,
        }
    }

    #[test]
    fn test_parse_single_number() {
        let formula = BonusFormula::parse("2").unwrap();
        assert_eq!(formula.terms(), &[FormulaTerm::Number(2.0)]);
    }

    #[test]
    fn test_parse_reference_and_numbers() {
        let formula = BonusFormula::parse("2 + @mod + 3").unwrap();
        assert_eq!(formula.terms().len(), 3);
        assert_eq!(formula.evaluate(lookup), Some(9.0));
    }

    #[test]
    fn test_parse_subtraction() {
        let formula = BonusFormula::parse("@prof - 1").unwrap();
        assert_eq!(formula.evaluate(lookup), Some(2.0));
    }

    #[test]
    fn test_parse_appended_negative_term() {
        let formula = BonusFormula::parse("2 + -1").unwrap();
        assert_eq!(formula.evaluate(lookup), Some(1.0));
    }

    #[test]
    fn test_parse_leading_negative() {
        let formula = BonusFormula::parse("-2 + @mod").unwrap();
        assert_eq!(formula.evaluate(lookup), Some(2.0));
    }

    #[test]
    fn test_parse_decimal_term() {
        let formula = BonusFormula::parse("1.5 + 1.5").unwrap();
        assert_eq!(formula.evaluate(lookup), Some(3.0));
    }

    #[test]
    fn test_unknown_reference_does_not_evaluate() {
        let formula = BonusFormula::parse("@abilities.int.mod + 1").unwrap();
        assert_eq!(formula.evaluate(lookup), None);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(BonusFormula::parse("   "), Err(FormulaParseError::Empty));
        assert_eq!(BonusFormula::parse("2 +"), Err(FormulaParseError::DanglingOperator));
        assert!(matches!(
            BonusFormula::parse("1d4 + 2"),
            Err(FormulaParseError::InvalidTerm(_))
        ));
        assert!(matches!(
            BonusFormula::parse("@ + 2"),
            Err(FormulaParseError::InvalidTerm(_))
        ));
    }
}
