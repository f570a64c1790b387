use std::collections::HashSet;

use rand::seq::index;
use rand::Rng;

use crate::catalog::{Catalog, Product};
use crate::db::HistoryEntry;

/// Products picked from the categories a user has already shown interest in.
///
/// With no history, picks uniformly from the whole catalog. Otherwise picks
/// unseen products from the user's categories, topping up from unseen
/// products in other categories when the affinity pool runs short. Never
/// returns more products than exist and never repeats one.
pub fn recommend_behavior<R: Rng + ?Sized>(
    catalog: &Catalog,
    history: &[HistoryEntry],
    n: usize,
    rng: &mut R,
) -> Vec<Product> {
    if history.is_empty() {
        let all: Vec<usize> = (0..catalog.len()).collect();
        return collect(catalog, sample(rng, &all, n));
    }

    let seen: HashSet<i64> = history.iter().map(|h| h.product_id).collect();
    let affinity: HashSet<&str> = seen
        .iter()
        .filter_map(|&id| catalog.get_by_id(id))
        .map(|p| p.category.as_str())
        .collect();

    let mut pool: Vec<usize> = affinity
        .iter()
        .flat_map(|category| catalog.indices_in_category(category))
        .copied()
        .filter(|&idx| !seen.contains(&catalog.products()[idx].id))
        .collect();
    pool.sort_unstable();

    let in_pool: HashSet<usize> = pool.iter().copied().collect();
    let remainder: Vec<usize> = catalog
        .products()
        .iter()
        .enumerate()
        .filter(|(idx, p)| !seen.contains(&p.id) && !in_pool.contains(idx))
        .map(|(idx, _)| idx)
        .collect();

    tracing::debug!(
        seen = seen.len(),
        categories = affinity.len(),
        pool = pool.len(),
        "behavior candidates"
    );

    if pool.len() >= n {
        return collect(catalog, sample(rng, &pool, n));
    }

    let needed = n - pool.len();
    let mut picked = pool;
    picked.extend(sample(rng, &remainder, needed));
    collect(catalog, picked)
}

/// Uniform sample without replacement, capped at the population size
fn sample<R: Rng + ?Sized>(rng: &mut R, population: &[usize], amount: usize) -> Vec<usize> {
    let amount = amount.min(population.len());
    index::sample(rng, population.len(), amount)
        .into_iter()
        .map(|i| population[i])
        .collect()
}

fn collect(catalog: &Catalog, indices: Vec<usize>) -> Vec<Product> {
    indices
        .into_iter()
        .filter_map(|idx| catalog.get(idx).cloned())
        .collect()
}
