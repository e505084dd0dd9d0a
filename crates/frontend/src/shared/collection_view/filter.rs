//! Filter predicate: free-text query AND discrete (categorical) filter.

use super::record::{Categorized, Searchable};

/// Discrete filter selected in the toolbar dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscreteFilter<C> {
    /// No constraint ("all")
    All,
    Only(C),
}

impl<C> Default for DiscreteFilter<C> {
    fn default() -> Self {
        DiscreteFilter::All
    }
}

impl<C: PartialEq> DiscreteFilter<C> {
    /// A record without a category never passes an `Only` filter.
    pub fn admits(&self, value: Option<&C>) -> bool {
        match self {
            DiscreteFilter::All => true,
            DiscreteFilter::Only(expected) => value == Some(expected),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, DiscreteFilter::All)
    }
}

/// Case-insensitive substring match of `query` against any of `fields`.
/// An empty query matches everything.
pub fn text_matches<S: AsRef<str>>(fields: &[S], query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    fields
        .iter()
        .any(|field| field.as_ref().to_lowercase().contains(&needle))
}

pub fn matches<T>(record: &T, query: &str, filter: &DiscreteFilter<T::Category>) -> bool
where
    T: Searchable + Categorized,
{
    filter.admits(record.category().as_ref()) && text_matches(&record.search_fields(), query)
}

/// Records of `source` passing the predicate, in source order
pub fn filter_records<'a, T>(
    source: &'a [T],
    query: &str,
    filter: &DiscreteFilter<T::Category>,
) -> Vec<&'a T>
where
    T: Searchable + Categorized,
{
    source
        .iter()
        .filter(|record| matches(*record, query, filter))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Tier {
        Gold,
        Silver,
    }

    struct Person {
        first_name: &'static str,
        last_name: Option<&'static str>,
        email: &'static str,
        tier: Option<Tier>,
    }

    impl Searchable for Person {
        fn search_fields(&self) -> Vec<Cow<'_, str>> {
            vec![
                Cow::Owned(format!(
                    "{} {}",
                    self.first_name,
                    self.last_name.unwrap_or_default()
                )),
                Cow::Borrowed(self.email),
            ]
        }
    }

    impl Categorized for Person {
        type Category = Tier;

        fn category(&self) -> Option<Tier> {
            self.tier
        }
    }

    fn people() -> Vec<Person> {
        vec![
            Person {
                first_name: "John",
                last_name: Some("Doe"),
                email: "jd@example.com",
                tier: Some(Tier::Gold),
            },
            Person {
                first_name: "Jane",
                last_name: None,
                email: "jane@shop.io",
                tier: Some(Tier::Silver),
            },
            Person {
                first_name: "Mark",
                last_name: Some("Twain"),
                email: "mark@example.com",
                tier: None,
            },
        ]
    }

    #[test]
    fn test_empty_query_and_all_filter_match_everything() {
        let source = people();
        for person in &source {
            assert!(matches(person, "", &DiscreteFilter::All));
        }
        assert_eq!(filter_records(&source, "", &DiscreteFilter::All).len(), 3);
    }

    #[test]
    fn test_query_is_case_insensitive_substring() {
        let source = people();
        let found = filter_records(&source, "john", &DiscreteFilter::All);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].first_name, "John");

        let found = filter_records(&source, "EXAMPLE.COM", &DiscreteFilter::All);
        assert_eq!(found.len(), 2);

        // "hn D" spans first and last name of the projected full name
        assert_eq!(filter_records(&source, "hn D", &DiscreteFilter::All).len(), 1);
    }

    #[test]
    fn test_query_absent_everywhere_excludes() {
        let source = people();
        assert!(filter_records(&source, "zzz", &DiscreteFilter::All).is_empty());
    }

    #[test]
    fn test_discrete_filter_and_text_are_combined() {
        let source = people();
        let gold = DiscreteFilter::Only(Tier::Gold);
        assert_eq!(filter_records(&source, "", &gold).len(), 1);
        assert!(filter_records(&source, "jane", &gold).is_empty());
        assert_eq!(
            filter_records(&source, "jane", &DiscreteFilter::Only(Tier::Silver)).len(),
            1
        );
    }

    #[test]
    fn test_record_without_category_never_matches_only() {
        let source = people();
        let found = filter_records(&source, "mark", &DiscreteFilter::Only(Tier::Silver));
        assert!(found.is_empty());
        assert!(DiscreteFilter::<Tier>::default().is_all());
    }
}
