use log::debug;
use regex::Regex;

/// only reactions of this cellular compartment are processed
pub const COMPARTMENT_MARKER: &str = "[c]";
pub const FORWARD_ARROW: &str = "-->";
pub const REVERSIBLE_ARROW: &str = "<==>";

/// One reaction equation extracted from the table, split on its arrow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionEquation {
    pub lhs: String,
    pub rhs: String,
    pub reversible: bool,
}

/// Scans the full table text and returns the reaction equations in order of
/// first appearance.
///
/// A row survives only if it has exactly 4 tab-separated fields, its 3rd field
/// starts with the compartment marker `[c]` and the equation text (3rd field
/// with every leading `label:` segment stripped) contains a reaction arrow.
/// The one-way arrow check comes first: a field containing both arrow
/// substrings is classified as one-way.
pub fn extract_equations(table_text: &str) -> Vec<ReactionEquation> {
    let forward_re = Regex::new(r"\s*-->\s*").unwrap();
    let reversible_re = Regex::new(r"\s*<==>\s*").unwrap();
    let mut equations = Vec::new();
    for line in table_text.split('\n') {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != 4 {
            continue;
        }
        if !fields[2].starts_with(COMPARTMENT_MARKER) {
            continue;
        }
        // "[c]: r1: (2) A + B --> C" -> "(2) A + B --> C"
        let Some(colon) = fields[2].rfind(':') else {
            debug!("reaction field has no label colon, row dropped: {}", fields[2]);
            continue;
        };
        let equation_text = fields[2][colon + 1..].trim();
        if equation_text.contains(FORWARD_ARROW) {
            if let Some(equation) = split_equation(&forward_re, equation_text, false) {
                equations.push(equation);
            }
        } else if equation_text.contains(REVERSIBLE_ARROW) {
            if let Some(equation) = split_equation(&reversible_re, equation_text, true) {
                equations.push(equation);
            }
        } else {
            debug!("no reaction arrow, row dropped: {}", equation_text);
        }
    }
    equations
}

/// splits on the first arrow occurrence, whitespace around the arrow may vary
fn split_equation(arrow: &Regex, equation_text: &str, reversible: bool) -> Option<ReactionEquation> {
    let parts: Vec<&str> = arrow.splitn(equation_text, 2).collect();
    match parts.as_slice() {
        [lhs, rhs] => Some(ReactionEquation {
            lhs: lhs.to_string(),
            rhs: rhs.to_string(),
            reversible,
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_row() {
        let equations = extract_equations("foo\tbar\t[c]: r1: (2) A + B --> C\tbaz");
        assert_eq!(
            equations,
            vec![ReactionEquation {
                lhs: "(2) A + B".to_string(),
                rhs: "C".to_string(),
                reversible: false,
            }]
        );
    }

    #[test]
    fn test_reversible_row() {
        let equations = extract_equations("foo\tbar\t[c]: r2: X <==> Y\tbaz");
        assert_eq!(
            equations,
            vec![ReactionEquation {
                lhs: "X".to_string(),
                rhs: "Y".to_string(),
                reversible: true,
            }]
        );
    }

    #[test]
    fn test_wrong_field_count_dropped() {
        let equations = extract_equations("foo\tbar\t[c]: r1: A --> B");
        assert!(equations.is_empty());
        let equations = extract_equations("foo\tbar\t[c]: r1: A --> B\tbaz\textra");
        assert!(equations.is_empty());
    }

    #[test]
    fn test_foreign_compartment_dropped() {
        let equations = extract_equations("foo\tbar\t[e]: r1: A --> B\tbaz");
        assert!(equations.is_empty());
    }

    #[test]
    fn test_row_without_colon_dropped() {
        let equations = extract_equations("foo\tbar\t[c] A --> B\tbaz");
        assert!(equations.is_empty());
    }

    #[test]
    fn test_row_without_arrow_dropped() {
        let equations = extract_equations("foo\tbar\t[c]: r1: A = B\tbaz");
        assert!(equations.is_empty());
    }

    #[test]
    fn test_label_with_single_colon() {
        let equations = extract_equations("foo\tbar\t[c]: A --> B\tbaz");
        assert_eq!(equations[0].lhs, "A");
        assert_eq!(equations[0].rhs, "B");
    }

    #[test]
    fn test_whitespace_around_arrow() {
        let equations = extract_equations("foo\tbar\t[c]: r1: A-->B\tbaz");
        assert_eq!(equations[0].lhs, "A");
        assert_eq!(equations[0].rhs, "B");
        let equations = extract_equations("foo\tbar\t[c]: r1: A   <==>   B\tbaz");
        assert_eq!(equations[0].lhs, "A");
        assert_eq!(equations[0].rhs, "B");
        assert!(equations[0].reversible);
    }

    #[test]
    fn test_one_way_check_comes_first() {
        // a field carrying both arrow substrings is classified as one-way
        let equations = extract_equations("foo\tbar\t[c]: r1: A <==> B --> C\tbaz");
        assert_eq!(equations.len(), 1);
        assert!(!equations[0].reversible);
        assert_eq!(equations[0].lhs, "A <==> B");
        assert_eq!(equations[0].rhs, "C");
    }

    #[test]
    fn test_order_of_appearance_is_kept() {
        let table = "a\tb\t[c]: r1: A --> B\tc\n\
                     a\tb\t[x]: r2: skipped --> row\tc\n\
                     a\tb\t[c]: r3: C <==> D\tc";
        let equations = extract_equations(table);
        assert_eq!(equations.len(), 2);
        assert_eq!(equations[0].lhs, "A");
        assert_eq!(equations[1].lhs, "C");
        assert!(equations[1].reversible);
    }
}
