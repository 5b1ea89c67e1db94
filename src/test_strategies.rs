use crate::common::Int;
use proptest::prelude::*;

/// Arbitrary text over the expression alphabet, well formed or not.
pub(crate) fn raw_expression_strategy() -> impl Strategy<Value = String> {
    r"[0-9()+*/%^dDx<>= \\-]{0,32}"
}

/// `(count, faces)` pairs that stay well inside the default roll limit.
pub(crate) fn dice_strategy() -> impl Strategy<Value = (Int, Int)> {
    (1..=100 as Int, 1..=1000 as Int)
}

fn number_strategy() -> impl Strategy<Value = String> {
    (0u16..=1000).prop_map(|n| n.to_string())
}

fn binary_operation_strategy(
    left: impl Strategy<Value = String>,
    right: impl Strategy<Value = String>,
) -> impl Strategy<Value = String> {
    (
        left,
        prop_oneof![
            Just("+"),
            Just("-"),
            Just("*"),
            Just("x"),
            Just("/"),
            Just("%"),
            Just("\\"),
            Just("^"),
        ],
        right,
    )
        .prop_map(|(l, op, r)| format!("{} {} {}", l, op, r))
}

/// Dice-free expressions, including implicit multiplication and one-faced dice.
pub(crate) fn arithmetic_strategy() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        number_strategy(),
        (1u16..=100).prop_map(|n| format!("{}d1", n)),
    ];

    leaf.prop_recursive(4, 32, 8, |inner| {
        prop_oneof![
            inner.clone().prop_map(|expr| format!("({})", expr)),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| format!("{}({})", l, r)),
            binary_operation_strategy(inner.clone(), inner),
        ]
    })
}
