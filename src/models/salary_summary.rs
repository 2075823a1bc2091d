//! Aggregate salary statistics.
//!
//! Totals are folded with checked addition, so salaries near the edge of the
//! `Decimal` range never panic. A total that does not fit is reported as
//! `None`; the mean is then built from per-salary quotients instead.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Salary statistics over a non-empty set of employees.
///
/// Produced by [`Registry::salary_summary`](crate::registry::Registry::salary_summary),
/// which returns `None` for an empty registry instead of dividing by zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalarySummary {
    /// Number of employees included.
    pub count: usize,
    /// Sum of all salaries, or `None` when it exceeds the `Decimal` range.
    pub total: Option<Decimal>,
    /// Mean salary, always within `min..=max`.
    pub average: Decimal,
    /// Lowest salary.
    pub min: Decimal,
    /// Highest salary.
    pub max: Decimal,
}

impl SalarySummary {
    /// Builds a summary from salary values, or `None` when there are none.
    ///
    /// ```
    /// use employee_registry::models::SalarySummary;
    /// use rust_decimal::Decimal;
    ///
    /// let salaries = [Decimal::new(4000, 0), Decimal::new(4500, 0), Decimal::new(3500, 0)];
    /// let summary = SalarySummary::from_salaries(salaries).unwrap();
    /// assert_eq!(summary.total, Some(Decimal::new(12000, 0)));
    /// assert_eq!(summary.average, Decimal::new(4000, 0));
    /// assert_eq!(summary.max, Decimal::new(4500, 0));
    ///
    /// assert!(SalarySummary::from_salaries(std::iter::empty()).is_none());
    /// ```
    pub fn from_salaries<I>(salaries: I) -> Option<Self>
    where
        I: IntoIterator<Item = Decimal>,
    {
        let salaries: Vec<Decimal> = salaries.into_iter().collect();
        let average = mean(&salaries)?;
        let min = salaries.iter().copied().min()?;
        let max = salaries.iter().copied().max()?;

        Some(Self {
            count: salaries.len(),
            total: checked_total(&salaries),
            average,
            min,
            max,
        })
    }
}

/// Sum of `salaries`, or `None` if it overflows.
pub(crate) fn checked_total(salaries: &[Decimal]) -> Option<Decimal> {
    salaries
        .iter()
        .try_fold(Decimal::ZERO, |total, salary| total.checked_add(*salary))
}

/// Mean of `salaries`, or `None` when there are none.
///
/// When the plain total overflows, each salary is divided by the count first
/// and the quotients are summed with saturation. The exact mean lies inside
/// the `Decimal` range, so saturation only absorbs rounding of the quotients.
pub(crate) fn mean(salaries: &[Decimal]) -> Option<Decimal> {
    if salaries.is_empty() {
        return None;
    }
    let count = Decimal::from(salaries.len());

    match checked_total(salaries) {
        Some(total) => Some(total / count),
        None => Some(
            salaries
                .iter()
                .fold(Decimal::ZERO, |sum, salary| sum.saturating_add(*salary / count)),
        ),
    }
}
