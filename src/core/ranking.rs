//! Selection functions that reduce a set of options to a single pick.
//!
//! None of these filter by service; callers pass whatever set they want
//! compared. Ties always resolve to the earliest element in input order.

use crate::domain::model::ServiceOption;
use std::cmp::Ordering;

/// Total order over floats where `-0.0 == 0.0`.
pub(crate) fn cmp_f64(a: f64, b: f64) -> Ordering {
    (a + 0.0).total_cmp(&(b + 0.0))
}

/// Keeps the first element for which no later element compares `Greater`.
fn first_max<'a, I, F>(options: I, mut compare: F) -> Option<&'a ServiceOption>
where
    I: IntoIterator<Item = &'a ServiceOption>,
    F: FnMut(&ServiceOption, &ServiceOption) -> Ordering,
{
    options.into_iter().reduce(|best, candidate| {
        if compare(candidate, best) == Ordering::Greater {
            candidate
        } else {
            best
        }
    })
}

// Lower price is preferred; an unknown price loses to any known one.
fn price_preference(option: &ServiceOption) -> f64 {
    option.price().map_or(f64::NEG_INFINITY, |price| -price)
}

fn compare_rated(a: &ServiceOption, b: &ServiceOption) -> Ordering {
    cmp_f64(a.rating(), b.rating())
        .then_with(|| a.review_count().cmp(&b.review_count()))
        .then_with(|| cmp_f64(price_preference(a), price_preference(b)))
}

/// Highest rating, then most reviews, then lowest price.
pub fn best_rated<'a, I>(options: I) -> Option<&'a ServiceOption>
where
    I: IntoIterator<Item = &'a ServiceOption>,
{
    first_max(options, compare_rated)
}

/// Lowest known price, then highest rating, then most reviews.
///
/// Options without a price are never returned.
pub fn cheapest<'a, I>(options: I) -> Option<&'a ServiceOption>
where
    I: IntoIterator<Item = &'a ServiceOption>,
{
    // Minimum on (price, -rating, -reviews) is the maximum of the reversed key.
    first_max(
        options.into_iter().filter(|option| option.price().is_some()),
        |a, b| {
            let price_a = a.price().unwrap_or(f64::INFINITY);
            let price_b = b.price().unwrap_or(f64::INFINITY);
            cmp_f64(price_b, price_a)
                .then_with(|| cmp_f64(a.rating(), b.rating()))
                .then_with(|| a.review_count().cmp(&b.review_count()))
        },
    )
}

/// `rating * (1 + review_count / 100) / price`, only for prices above zero.
pub fn value_score(option: &ServiceOption) -> Option<f64> {
    let price = option.price().filter(|price| *price > 0.0)?;
    let engagement_factor = 1.0 + option.review_count() as f64 / 100.0;
    Some(option.rating() * engagement_factor / price)
}

/// Best quality for the money.
///
/// With no option priced above zero, rating alone decides: the result is
/// [`best_rated`] over the whole input.
pub fn best_value<'a, I>(options: I) -> Option<&'a ServiceOption>
where
    I: IntoIterator<Item = &'a ServiceOption>,
{
    let options: Vec<&'a ServiceOption> = options.into_iter().collect();

    let scored: Vec<(&'a ServiceOption, f64)> = options
        .iter()
        .filter_map(|option| value_score(option).map(|score| (*option, score)))
        .collect();

    if scored.is_empty() {
        return best_rated(options);
    }

    scored
        .into_iter()
        .reduce(|best, candidate| {
            let ordering = cmp_f64(candidate.1, best.1)
                .then_with(|| cmp_f64(candidate.0.rating(), best.0.rating()))
                .then_with(|| candidate.0.review_count().cmp(&best.0.review_count()));
            if ordering == Ordering::Greater {
                candidate
            } else {
                best
            }
        })
        .map(|(option, _)| option)
}

/// The three picks shown at the top of a comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary<'a> {
    pub best_rated: Option<&'a ServiceOption>,
    pub cheapest: Option<&'a ServiceOption>,
    pub best_value: Option<&'a ServiceOption>,
}

impl<'a> Summary<'a> {
    pub fn of(options: &'a [ServiceOption]) -> Self {
        Self {
            best_rated: best_rated(options),
            cheapest: cheapest(options),
            best_value: best_value(options),
        }
    }
}
