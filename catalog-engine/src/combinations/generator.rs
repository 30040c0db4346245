//! Combination generator
//!
//! Pure Cartesian product of the variant set. Same variant set (by value)
//! always yields the same ordered output; no hidden state.

use shared::models::VariantOption;

/// One `(option, value)` coordinate of a combination tuple
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TupleEntry {
    pub option: String,
    pub value: String,
}

/// Ordered coordinates, one per variant option
pub type CombinationTuple = Vec<TupleEntry>;

/// Cartesian product of all option values, in option order: the first
/// option varies slowest, so derived names read left-to-right.
///
/// An empty variant set yields no combinations. An option with zero values
/// collapses the whole product to empty (a factor of the product is empty),
/// it is never skipped.
pub fn generate(variants: &[VariantOption]) -> Vec<CombinationTuple> {
    if variants.is_empty() {
        return Vec::new();
    }
    variants.iter().fold(vec![Vec::new()], |acc, variant| {
        acc.into_iter()
            .flat_map(|prefix| {
                variant.values.iter().map(move |value| {
                    let mut tuple = prefix.clone();
                    tuple.push(TupleEntry {
                        option: variant.name.clone(),
                        value: value.clone(),
                    });
                    tuple
                })
            })
            .collect()
    })
}

/// Derived combination name: values joined by "/" in option order.
pub fn tuple_name(tuple: &[TupleEntry]) -> String {
    tuple
        .iter()
        .map(|entry| entry.value.as_str())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size_and_color() -> Vec<VariantOption> {
        vec![
            VariantOption::new("Size", vec!["M".into(), "L".into()]),
            VariantOption::new("Color", vec!["Black".into(), "Red".into()]),
        ]
    }

    #[test]
    fn cartesian_product_in_first_option_slowest_order() {
        let tuples = generate(&size_and_color());
        let names: Vec<String> = tuples.iter().map(|t| tuple_name(t)).collect();
        assert_eq!(names, vec!["M/Black", "M/Red", "L/Black", "L/Red"]);
    }

    #[test]
    fn tuples_carry_option_names() {
        let tuples = generate(&size_and_color());
        assert_eq!(tuples[0][0].option, "Size");
        assert_eq!(tuples[0][1].option, "Color");
        assert_eq!(tuples[3][0].value, "L");
        assert_eq!(tuples[3][1].value, "Red");
    }

    #[test]
    fn empty_variant_set_yields_no_combinations() {
        assert!(generate(&[]).is_empty());
    }

    #[test]
    fn empty_factor_collapses_whole_product() {
        let variants = vec![
            VariantOption::new("Size", vec!["M".into(), "L".into()]),
            VariantOption::new("Color", vec![]),
        ];
        assert!(generate(&variants).is_empty());
    }

    #[test]
    fn single_option_yields_one_tuple_per_value() {
        let variants = vec![VariantOption::new("Size", vec!["S".into(), "M".into()])];
        let tuples = generate(&variants);
        assert_eq!(tuples.len(), 2);
        assert_eq!(tuples[0].len(), 1);
        assert_eq!(tuple_name(&tuples[1]), "M");
    }

    #[test]
    fn generation_is_deterministic() {
        let variants = size_and_color();
        assert_eq!(generate(&variants), generate(&variants));
    }

    #[test]
    fn three_options_multiply_out() {
        let variants = vec![
            VariantOption::new("Size", vec!["M".into(), "L".into()]),
            VariantOption::new("Color", vec!["Black".into()]),
            VariantOption::new("Fit", vec!["Slim".into(), "Wide".into()]),
        ];
        let tuples = generate(&variants);
        assert_eq!(tuples.len(), 4);
        assert_eq!(tuple_name(&tuples[0]), "M/Black/Slim");
        assert_eq!(tuple_name(&tuples[3]), "L/Black/Wide");
    }
}
