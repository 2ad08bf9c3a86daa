use log::debug;

/// Every ordering of `items`, each item used exactly once.
///
/// Orderings are produced by fixing each position-0 candidate in turn and
/// permuting the rest, so `[1, 2, 3]` yields `123, 132, 213, 231, 312, 321`.
/// Equal items are not collapsed.
pub fn generate_permutations<T: Copy, const N: usize>(items: [T; N]) -> Vec<[T; N]> {
    let result: Vec<[T; N]> = permute(&items)
        .into_iter()
        .filter_map(|ordering| <[T; N]>::try_from(ordering).ok())
        .collect();

    debug!("Generated {} permutations of {} items", result.len(), N);
    result
}

fn permute<T: Copy>(items: &[T]) -> Vec<Vec<T>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }

    let mut result = Vec::new();
    for (i, &head) in items.iter().enumerate() {
        let rest: Vec<T> = items
            .iter()
            .enumerate()
            .filter_map(|(j, &item)| (i != j).then_some(item))
            .collect();

        for tail in permute(&rest) {
            let mut ordering = Vec::with_capacity(items.len());
            ordering.push(head);
            ordering.extend(tail);
            result.push(ordering);
        }
    }
    result
}
