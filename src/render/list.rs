//! Flat, sorted list output

use std::collections::HashSet;

use super::DisplayForm;

/// Render a traversal result one resource per line, sorted by MRN
pub fn render_list(resources: &HashSet<String>, form: DisplayForm) -> Vec<String> {
    let mut sorted: Vec<&String> = resources.iter().collect();
    sorted.sort();
    sorted.into_iter().map(|mrn| form.display(mrn)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_raw_output() {
        let set: HashSet<String> = ["D", "B", "C"].iter().map(|s| s.to_string()).collect();
        assert_eq!(render_list(&set, DisplayForm::Mrn), vec!["B", "C", "D"]);
    }

    #[test]
    fn test_sorts_before_path_conversion() {
        // '0' sorts before '_' but after '/', so path order would differ.
        let set: HashSet<String> = ["a__b__c", "a0__x__y"].iter().map(|s| s.to_string()).collect();
        assert_eq!(
            render_list(&set, DisplayForm::Path),
            vec!["a0/x/roles/y", "a/b/roles/c"]
        );
    }

    #[test]
    fn test_empty_set_renders_nothing() {
        assert!(render_list(&HashSet::new(), DisplayForm::Path).is_empty());
    }
}
