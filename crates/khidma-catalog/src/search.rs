// SPDX-License-Identifier: MIT
//
// Incremental search over the service catalog.
//
// Matching is plain case-insensitive substring containment against service
// name and description — no tokenizing, no fuzziness.  Lowercasing in Rust
// may change byte lengths, so all scanning walks char boundaries instead of
// byte-indexing a lowercased copy of the text.

use std::borrow::Cow;
use std::ops::Range;

use tracing::debug;

use khidma_core::{Service, ServiceCategory};

/// Three-way split of a text around the first match of the active query.
///
/// `matched` preserves the original casing of the text, not the query's.
/// When the query is empty or absent from the text, the whole text lands in
/// `prefix` and the other parts are empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    pub prefix: String,
    pub matched: String,
    pub suffix: String,
}

impl Highlight {
    fn whole(text: &str) -> Self {
        Self {
            prefix: text.to_string(),
            matched: String::new(),
            suffix: String::new(),
        }
    }
}

/// Derive the filtered catalog view for a query.
///
/// An empty (or all-whitespace) query returns the input untouched.  For a
/// non-empty query, each category keeps only its matching services in their
/// original order, and categories left with no services are dropped.
pub fn filter_catalog<'a>(
    categories: &'a [ServiceCategory],
    query: &str,
) -> Cow<'a, [ServiceCategory]> {
    let term = query.trim();
    if term.is_empty() {
        return Cow::Borrowed(categories);
    }

    let filtered: Vec<ServiceCategory> = categories
        .iter()
        .filter_map(|category| {
            let services: Vec<Service> = category
                .services
                .iter()
                .filter(|s| service_matches(s, term))
                .cloned()
                .collect();
            if services.is_empty() {
                None
            } else {
                Some(ServiceCategory {
                    id: category.id.clone(),
                    title: category.title.clone(),
                    services,
                })
            }
        })
        .collect();

    debug!(term, categories = filtered.len(), "catalog filtered");
    Cow::Owned(filtered)
}

/// Split `text` around the first case-insensitive occurrence of `query`.
pub fn highlight(text: &str, query: &str) -> Highlight {
    let term = query.trim();
    if term.is_empty() {
        return Highlight::whole(text);
    }
    match find_case_insensitive(text, term) {
        Some(range) => Highlight {
            prefix: text[..range.start].to_string(),
            matched: text[range.clone()].to_string(),
            suffix: text[range.end..].to_string(),
        },
        None => Highlight::whole(text),
    }
}

fn service_matches(service: &Service, term: &str) -> bool {
    find_case_insensitive(&service.name, term).is_some()
        || find_case_insensitive(&service.description, term).is_some()
}

/// Byte range of the first case-insensitive occurrence of `needle` in
/// `haystack`, with both endpoints on char boundaries of `haystack`.
fn find_case_insensitive(haystack: &str, needle: &str) -> Option<Range<usize>> {
    if needle.is_empty() {
        return None;
    }
    let folded: Vec<char> = needle.chars().flat_map(char::to_lowercase).collect();
    haystack
        .char_indices()
        .find_map(|(start, _)| match_at(haystack, start, &folded).map(|end| start..end))
}

/// Try to match the folded needle starting at byte `start` of `haystack`.
///
/// Returns the exclusive end byte of the match.  A haystack char whose
/// lowercase expansion runs past the end of the needle still counts as
/// matched in full, so the returned range never splits a char.
fn match_at(haystack: &str, start: usize, folded_needle: &[char]) -> Option<usize> {
    let mut pos = 0;
    for (offset, ch) in haystack[start..].char_indices() {
        for folded in ch.to_lowercase() {
            if pos == folded_needle.len() {
                break;
            }
            if folded != folded_needle[pos] {
                return None;
            }
            pos += 1;
        }
        if pos == folded_needle.len() {
            return Some(start + offset + ch.len_utf8());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use khidma_core::Accent;

    fn svc(name: &str, description: &str) -> Service {
        Service {
            name: name.into(),
            description: description.into(),
            accent: Accent::Blue,
        }
    }

    fn cat(id: &str, services: Vec<Service>) -> ServiceCategory {
        ServiceCategory {
            id: id.into(),
            title: id.to_uppercase(),
            services,
        }
    }

    fn fixture() -> Vec<ServiceCategory> {
        vec![
            cat("passports", vec![svc("Passport Renewal", "Renew an expiring passport")]),
            cat("visas", vec![svc("Visa Transfer", "Transfer sponsorship to a new employer")]),
        ]
    }

    #[test]
    fn empty_query_returns_catalog_unchanged() {
        let categories = fixture();
        let result = filter_catalog(&categories, "");
        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(result.as_ref(), categories.as_slice());
    }

    #[test]
    fn whitespace_query_is_treated_as_empty() {
        let categories = fixture();
        let result = filter_catalog(&categories, "   ");
        assert!(matches!(result, Cow::Borrowed(_)));
    }

    #[test]
    fn query_drops_categories_with_no_matches() {
        let categories = fixture();
        let result = filter_catalog(&categories, "pass");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "passports");
        assert_eq!(result[0].services.len(), 1);
        assert_eq!(result[0].services[0].name, "Passport Renewal");
    }

    #[test]
    fn matching_is_case_insensitive_over_name_and_description() {
        let categories = fixture();
        let by_name = filter_catalog(&categories, "VISA");
        assert_eq!(by_name[0].id, "visas");
        let by_description = filter_catalog(&categories, "EMPLOYER");
        assert_eq!(by_description[0].id, "visas");
    }

    #[test]
    fn query_is_trimmed_before_matching() {
        let categories = fixture();
        let result = filter_catalog(&categories, "  pass  ");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "passports");
    }

    #[test]
    fn every_retained_service_contains_the_query() {
        let categories = fixture();
        for query in ["trans", "renew", "e"] {
            for category in filter_catalog(&categories, query).iter() {
                for service in &category.services {
                    let haystack =
                        format!("{} {}", service.name, service.description).to_lowercase();
                    assert!(haystack.contains(query), "{} kept for {query}", service.name);
                }
            }
        }
    }

    #[test]
    fn no_match_yields_empty_list() {
        let categories = fixture();
        let result = filter_catalog(&categories, "zzz");
        assert!(result.is_empty());
    }

    #[test]
    fn service_order_is_preserved_within_a_category() {
        let categories = vec![cat(
            "labor",
            vec![
                svc("Work Permit Issue", "issue a permit"),
                svc("Wage Protection", "fix wage file"),
                svc("Work Permit Renewal", "renew a permit"),
            ],
        )];
        let result = filter_catalog(&categories, "permit");
        let names: Vec<_> = result[0].services.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Work Permit Issue", "Work Permit Renewal"]);
    }

    #[test]
    fn arabic_query_matches_arabic_services() {
        let categories = vec![cat(
            "visas",
            vec![svc("نقل الكفالة", "نقل خدمات العامل إلى كفيل جديد")],
        )];
        let result = filter_catalog(&categories, "كفالة");
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn highlight_splits_around_first_match_preserving_case() {
        let parts = highlight("Passport Renewal", "pass");
        assert_eq!(parts.prefix, "");
        assert_eq!(parts.matched, "Pass");
        assert_eq!(parts.suffix, "port Renewal");
    }

    #[test]
    fn highlight_of_interior_match() {
        let parts = highlight("Visa Transfer", "TRANS");
        assert_eq!(parts.prefix, "Visa ");
        assert_eq!(parts.matched, "Trans");
        assert_eq!(parts.suffix, "fer");
    }

    #[test]
    fn highlight_without_match_returns_whole_text_as_prefix() {
        let parts = highlight("Visa Transfer", "zzz");
        assert_eq!(parts.prefix, "Visa Transfer");
        assert!(parts.matched.is_empty());
        assert!(parts.suffix.is_empty());
    }

    #[test]
    fn highlight_with_empty_query_returns_whole_text_as_prefix() {
        let parts = highlight("Visa Transfer", "");
        assert_eq!(parts.prefix, "Visa Transfer");
        assert!(parts.matched.is_empty());
    }

    #[test]
    fn highlight_is_char_boundary_safe_for_arabic() {
        let parts = highlight("تجديد الإقامة", "الإقامة");
        assert_eq!(parts.prefix, "تجديد ");
        assert_eq!(parts.matched, "الإقامة");
        assert!(parts.suffix.is_empty());
    }

    #[test]
    fn find_handles_multibyte_case_folding() {
        // 'İ' lowercases to "i\u{307}" — two chars, different byte length.
        let range = find_case_insensitive("İstanbul", "i\u{307}stan").expect("match");
        assert_eq!(range.start, 0);
        assert!("İstanbul".is_char_boundary(range.end));
    }
}
