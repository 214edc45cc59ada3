use crate::core::ranking::cmp_f64;
use crate::domain::model::ServiceOption;
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};

/// Snapshot of options indexed by normalized service name.
///
/// The index is built once in [`ServiceRepository::new`]; when the data
/// changes, build a new repository.
#[derive(Debug, Clone, Default)]
pub struct ServiceRepository {
    options: Vec<ServiceOption>,
    index: HashMap<String, Vec<usize>>,
}

impl ServiceRepository {
    pub fn new(options: impl IntoIterator<Item = ServiceOption>) -> Self {
        let options: Vec<ServiceOption> = options.into_iter().collect();
        let mut index: HashMap<String, Vec<usize>> = HashMap::new();

        for (position, option) in options.iter().enumerate() {
            index
                .entry(normalize_service_name(option.service()))
                .or_default()
                .push(position);
        }

        tracing::debug!(
            "Indexed {} options into {} service buckets",
            options.len(),
            index.len()
        );

        Self { options, index }
    }

    /// Distinct raw service names, sorted ascending.
    pub fn services(&self) -> Vec<String> {
        self.options
            .iter()
            .map(|option| option.service())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Options for `service`, best first. Unknown services yield an empty list.
    pub fn for_service(&self, service: &str) -> Vec<&ServiceOption> {
        let Some(positions) = self.index.get(&normalize_service_name(service)) else {
            return Vec::new();
        };

        let mut options: Vec<&ServiceOption> =
            positions.iter().map(|&position| &self.options[position]).collect();
        // `sort_by` is stable, so equal keys keep input order.
        options.sort_by(|a, b| ranking_order(a, b));
        options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

// Rating desc, reviews desc, then price asc with unknown prices last.
fn ranking_order(a: &ServiceOption, b: &ServiceOption) -> Ordering {
    cmp_f64(b.rating(), a.rating())
        .then_with(|| b.review_count().cmp(&a.review_count()))
        .then_with(|| {
            cmp_f64(
                a.price().unwrap_or(f64::INFINITY),
                b.price().unwrap_or(f64::INFINITY),
            )
        })
}

pub fn normalize_service_name(service: &str) -> String {
    service.trim().to_lowercase()
}
