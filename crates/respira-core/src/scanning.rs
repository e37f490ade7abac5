use crate::model::{Category, VirusCounts};
use regex::Regex;
use std::sync::LazyLock;

/// Standalone ASCII integers ("45" in "Influenza A: 45", not the "1" in "H1N1").
static INTEGER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b[0-9]+\b").unwrap());

/// One classification rule: a category and the test a lowercased line must pass.
struct ScanRule {
    category: Category,
    matches: fn(&str) -> bool,
}

/// Classification rules in priority order. The first rule that matches a
/// line claims it, so a line never feeds more than one category.
static RULES: &[ScanRule] = &[
    ScanRule {
        category: Category::InfluenzaA,
        matches: |l| l.contains("influenza") && l.contains('a') && !l.contains('b'),
    },
    ScanRule {
        category: Category::InfluenzaB,
        matches: |l| l.contains("influenza") && l.contains('b'),
    },
    ScanRule {
        category: Category::Rsv,
        matches: |l| l.contains("rsv") || l.contains("respiratory syncytial"),
    },
    ScanRule {
        category: Category::Adenovirus,
        matches: |l| l.contains("adenovir"),
    },
    ScanRule {
        category: Category::Rhinovirus,
        matches: |l| l.contains("rhinovir"),
    },
    ScanRule {
        category: Category::Parainfluenza,
        matches: |l| l.contains("parainfluenza") || l.contains("paragrip"),
    },
    ScanRule {
        category: Category::Coronavirus,
        // SARS-CoV-2 is reported separately
        matches: |l| l.contains("coronavirus") && !l.contains("covid") && !l.contains("sars"),
    },
    ScanRule {
        category: Category::Total,
        matches: |l| l.contains("celkem") || l.contains("total") || l.contains("všech"),
    },
];

/// A line that set a value during the scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMatch {
    /// 1-based line number in the extracted text.
    pub line_number: usize,
    pub category: Category,
    pub value: u64,
}

#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    pub counts: VirusCounts,
    pub matches: Vec<LineMatch>,
}

/// Classify a line by the first rule it satisfies.
pub fn classify_line(line: &str) -> Option<Category> {
    let lower = line.to_lowercase();
    RULES
        .iter()
        .find(|rule| (rule.matches)(&lower))
        .map(|rule| rule.category)
}

/// All standalone integers on a line, in order. Numbers too large for u64
/// are skipped.
pub fn extract_integers(line: &str) -> Vec<u64> {
    INTEGER
        .find_iter(line)
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}

/// Scan the pdftotext output of a weekly report for virus counts.
///
/// Each classified line overwrites its category with the last integer on
/// the line (the maximum for the total row). Lines without integers leave
/// the category unchanged. If no total was found the total becomes the sum
/// of the seven virus counts.
pub fn scan_table(text: &str) -> ScanOutcome {
    let mut counts = VirusCounts::default();
    let mut matches = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let Some(category) = classify_line(line) else {
            continue;
        };

        let numbers = extract_integers(line);
        let value = match category {
            Category::Total => numbers.iter().copied().max(),
            _ => numbers.last().copied(),
        };

        if let Some(value) = value {
            counts.set(category, value);
            matches.push(LineMatch {
                line_number: i + 1,
                category,
                value,
            });
        }
    }

    if counts.total_tests == 0 {
        counts.total_tests = counts.detections();
    }

    ScanOutcome { counts, matches }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_integer_wins() {
        let out = scan_table("Influenza A: 12 cases 45");
        assert_eq!(out.counts.influenza_a, 45);
    }

    #[test]
    fn test_total_takes_maximum() {
        let out = scan_table("Total tests: 100 200");
        assert_eq!(out.counts.total_tests, 200);

        let out = scan_table("Celkem   350   12   7");
        assert_eq!(out.counts.total_tests, 350);
    }

    #[test]
    fn test_total_falls_back_to_sum() {
        let out = scan_table("Influenza A   10\nRSV   5\n");
        assert_eq!(out.counts.influenza_a, 10);
        assert_eq!(out.counts.rsv, 5);
        assert_eq!(out.counts.total_tests, 15);
    }

    #[test]
    fn test_explicit_total_is_kept_even_if_smaller_than_sum() {
        let out = scan_table("Influenza A   10\nRSV   5\nTotal   3\n");
        assert_eq!(out.counts.total_tests, 3);
    }

    #[test]
    fn test_sars_coronavirus_excluded() {
        let out = scan_table("SARS coronavirus 30");
        assert_eq!(out.counts.coronavirus, 0);
        assert_eq!(classify_line("SARS coronavirus 30"), None);
        assert_eq!(classify_line("Coronavirus (COVID-19) 30"), None);
    }

    #[test]
    fn test_seasonal_coronavirus_counted() {
        let out = scan_table("Coronavirus OC43/229E   4");
        assert_eq!(out.counts.coronavirus, 4);
    }

    #[test]
    fn test_first_match_wins() {
        // Both the influenza and the total keyword appear: influenza claims it.
        assert_eq!(classify_line("Influenza A total 9"), Some(Category::InfluenzaA));
        let out = scan_table("Influenza A total 9");
        assert_eq!(out.counts.influenza_a, 9);
        assert_eq!(out.counts.total_tests, 9);
        assert_eq!(out.matches.len(), 1);
    }

    #[test]
    fn test_parainfluenza_without_b_is_claimed_by_influenza_a() {
        assert_eq!(classify_line("Parainfluenza 7"), Some(Category::InfluenzaA));
        assert_eq!(classify_line("Paragripózní viry 7"), Some(Category::Parainfluenza));
    }

    #[test]
    fn test_influenza_b() {
        assert_eq!(classify_line("Influenza B   6"), Some(Category::InfluenzaB));
    }

    #[test]
    fn test_rules_in_priority_order() {
        assert_eq!(classify_line("RSV 3"), Some(Category::Rsv));
        assert_eq!(
            classify_line("Respiratory syncytial virus 3"),
            Some(Category::Rsv)
        );
        assert_eq!(classify_line("Adenoviry 2"), Some(Category::Adenovirus));
        assert_eq!(classify_line("Rhinoviry 8"), Some(Category::Rhinovirus));
        assert_eq!(classify_line("Počet všech vzorků 120"), Some(Category::Total));
        assert_eq!(classify_line("Metapneumovirus 1"), None);
    }

    #[test]
    fn test_line_without_digits_keeps_previous_value() {
        let out = scan_table("Influenza A   11\nInfluenza A (pozn.)\n");
        assert_eq!(out.counts.influenza_a, 11);
        assert_eq!(out.matches.len(), 1);
    }

    #[test]
    fn test_later_line_overwrites() {
        let out = scan_table("Rhinoviry 8\nRhinoviry 2\n");
        assert_eq!(out.counts.rhinovirus, 2);
    }

    #[test]
    fn test_extract_integers_word_boundaries() {
        assert_eq!(extract_integers("A(H1N1)pdm09 12 / 4"), vec![12, 4]);
        assert_eq!(extract_integers("no digits"), Vec::<u64>::new());
        assert_eq!(extract_integers("99999999999999999999999 5"), vec![5]);
    }

    #[test]
    fn test_match_line_numbers() {
        let out = scan_table("header\nRSV 3\n\nTotal 40\n");
        assert_eq!(
            out.matches,
            vec![
                LineMatch {
                    line_number: 2,
                    category: Category::Rsv,
                    value: 3
                },
                LineMatch {
                    line_number: 4,
                    category: Category::Total,
                    value: 40
                },
            ]
        );
    }

    #[test]
    fn test_empty_text() {
        let out = scan_table("");
        assert_eq!(out.counts, VirusCounts::default());
        assert!(out.matches.is_empty());
    }
}
