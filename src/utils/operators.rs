use crate::expression::Operator;

/// All 64 ordered operator triples, repetition allowed.
///
/// The last slot varies fastest: `+++`, `++-`, `++*`, `++/`, `+-+`, ...
pub fn generate_operator_combinations() -> Vec<[Operator; 3]> {
    Operator::ALL
        .into_iter()
        .flat_map(|first| {
            Operator::ALL.into_iter().flat_map(move |second| {
                Operator::ALL
                    .into_iter()
                    .map(move |third| [first, second, third])
            })
        })
        .collect()
}
