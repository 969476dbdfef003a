//! Overlap resolution for painters
//!
//! The classifier emits overlapping annotations (a `[GET /coupons]` bracket
//! also yields `GET` twice). Hosts that can only paint one style per
//! character use [`flatten`] to reduce them to disjoint runs.

use crate::annotation::Annotation;

/// Reduce overlapping annotations to disjoint, ordered runs
///
/// For every byte the shortest covering annotation wins; between equally
/// long candidates the one emitted later wins. Adjacent runs of the same
/// category are merged.
///
/// Cost grows with the product of boundaries and annotations, so callers
/// flatten one line at a time.
///
/// # Example
///
/// ```
/// use apib_highlight::{classify_line, flatten, Category};
///
/// let line = "## Coupons [GET /coupons]";
/// let runs = flatten(&classify_line(line, 0));
/// let painted: Vec<_> = runs.iter().map(|a| (&line[a.range()], a.category)).collect();
///
/// assert_eq!(painted[0], ("[", Category::ResourcePath));
/// assert_eq!(painted[1], ("GET", Category::HttpMethod));
/// ```
pub fn flatten(annotations: &[Annotation]) -> Vec<Annotation> {
    let mut bounds: Vec<usize> = annotations
        .iter()
        .filter(|a| !a.is_empty())
        .flat_map(|a| [a.start, a.end])
        .collect();
    bounds.sort_unstable();
    bounds.dedup();

    let mut runs: Vec<Annotation> = Vec::new();
    for window in bounds.windows(2) {
        let (start, end) = (window[0], window[1]);
        let winner = annotations
            .iter()
            .filter(|a| a.start <= start && end <= a.end)
            .fold(None::<&Annotation>, |best, candidate| match best {
                Some(b) if b.len() < candidate.len() => Some(b),
                _ => Some(candidate),
            });

        let Some(winner) = winner else { continue };
        match runs.last_mut() {
            Some(last) if last.end == start && last.category == winner.category => {
                last.end = end;
            }
            _ => runs.push(Annotation::new(start, end, winner.category)),
        }
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;

    #[test]
    fn test_disjoint_pass_through() {
        let input = vec![
            Annotation::new(0, 3, Category::HttpMethod),
            Annotation::new(4, 9, Category::ResourcePath),
        ];
        assert_eq!(flatten(&input), input);
    }

    #[test]
    fn test_innermost_wins() {
        let input = vec![
            Annotation::new(0, 10, Category::TypeAnnotation),
            Annotation::new(1, 7, Category::TypeAnnotation),
            Annotation::new(1, 7, Category::MsonTypeReference),
        ];
        let runs = flatten(&input);
        assert_eq!(
            runs,
            vec![
                Annotation::new(0, 1, Category::TypeAnnotation),
                Annotation::new(1, 7, Category::MsonTypeReference),
                Annotation::new(7, 10, Category::TypeAnnotation),
            ]
        );
    }

    #[test]
    fn test_same_category_runs_merge() {
        let input = vec![
            Annotation::new(0, 4, Category::StringValue),
            Annotation::new(4, 8, Category::StringValue),
        ];
        assert_eq!(
            flatten(&input),
            vec![Annotation::new(0, 8, Category::StringValue)]
        );
    }

    #[test]
    fn test_gaps_and_empty_input() {
        assert!(flatten(&[]).is_empty());
        let input = vec![
            Annotation::new(0, 2, Category::Metadata),
            Annotation::new(5, 5, Category::Relation),
            Annotation::new(6, 8, Category::Relation),
        ];
        assert_eq!(
            flatten(&input),
            vec![
                Annotation::new(0, 2, Category::Metadata),
                Annotation::new(6, 8, Category::Relation),
            ]
        );
    }
}
