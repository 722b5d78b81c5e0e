//! Aspect taxonomy derived from labels.
//!
//! A label named `category/leaf` (e.g. `time/morning`) is an aspect: one value
//! of one facet of a task. Labels without a separator, and labels whose name
//! starts with [`IGNORE_PREFIX`], are not aspects.

use crate::todoist::Label;

/// Separator between category and leaf in a label name.
pub const SEPARATOR: char = '/';

/// Labels starting with this prefix never become aspects.
pub const IGNORE_PREFIX: &str = "ignore";

/// One category/leaf pair and the label it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aspect {
    pub category: String,
    pub leaf: String,
    pub label: Label,
}

impl Aspect {
    /// Parse a label into an aspect, if it is one.
    pub fn from_label(label: &Label) -> Option<Self> {
        if label.name.starts_with(IGNORE_PREFIX) {
            return None;
        }

        let mut parts = label.name.split(SEPARATOR);
        let category = parts.next()?;
        let leaf = parts.next()?;

        Some(Self {
            category: category.to_string(),
            leaf: leaf.to_string(),
            label: label.clone(),
        })
    }

    /// `category/leaf`, the label name used in filter queries.
    pub fn label_name(&self) -> String {
        format!("{}{SEPARATOR}{}", self.category, self.leaf)
    }
}

/// Aspects grouped by category.
///
/// Categories keep the order in which they first appear in the label list,
/// and aspects keep label order within each category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AspectCategoryMap {
    categories: Vec<(String, Vec<Aspect>)>,
}

impl AspectCategoryMap {
    /// Build the map from the full label list.
    ///
    /// Duplicate leaves within a category are kept as separate entries.
    pub fn from_labels<'a>(labels: impl IntoIterator<Item = &'a Label>) -> Self {
        let mut map = Self::default();

        for aspect in labels.into_iter().filter_map(Aspect::from_label) {
            match map.categories.iter_mut().find(|(c, _)| *c == aspect.category) {
                Some((_, aspects)) => aspects.push(aspect),
                None => map.categories.push((aspect.category.clone(), vec![aspect])),
            }
        }

        map
    }

    /// Aspects registered for a category; empty if the category is unknown.
    pub fn get(&self, category: &str) -> &[Aspect] {
        self.categories
            .iter()
            .find(|(c, _)| c == category)
            .map(|(_, aspects)| aspects.as_slice())
            .unwrap_or_default()
    }

    pub fn contains(&self, category: &str) -> bool {
        self.categories.iter().any(|(c, _)| c == category)
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|(c, _)| c.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Aspect])> {
        self.categories
            .iter()
            .map(|(category, aspects)| (category.as_str(), aspects.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<Label> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Label::new(i.to_string(), *name))
            .collect()
    }

    fn leaves(map: &AspectCategoryMap, category: &str) -> Vec<String> {
        map.get(category).iter().map(|a| a.leaf.clone()).collect()
    }

    #[test]
    fn test_build_map_from_labels() {
        let labels = labels(&[
            "meta",
            "time/morning",
            "time/evening",
            "ignoretemp",
            "focus/deep",
        ]);
        let map = AspectCategoryMap::from_labels(&labels);

        assert_eq!(map.len(), 2);
        assert_eq!(leaves(&map, "time"), vec!["morning", "evening"]);
        assert_eq!(leaves(&map, "focus"), vec!["deep"]);
        assert!(map.get("time").iter().all(|a| a.category == "time"));
        assert_eq!(map.get("time")[0].label.name, "time/morning");
        assert!(!map.contains("meta"));
    }

    #[test]
    fn test_ignored_and_plain_labels_excluded() {
        let labels = labels(&["ignore/time", "ignore", "errand", "ignored/x", "home/chores"]);
        let map = AspectCategoryMap::from_labels(&labels);

        assert_eq!(map.categories().collect::<Vec<_>>(), vec!["home"]);
        for (_, aspects) in map.iter() {
            for aspect in aspects {
                assert!(aspect.label.name.contains(SEPARATOR));
                assert!(!aspect.label.name.starts_with(IGNORE_PREFIX));
            }
        }
    }

    #[test]
    fn test_category_and_leaf_rejoin_to_label_prefix() {
        let labels = labels(&["time/morning", "place/home/office", "a/", "/b"]);
        let map = AspectCategoryMap::from_labels(&labels);

        for (_, aspects) in map.iter() {
            for aspect in aspects {
                let first_two: Vec<&str> = aspect.label.name.split(SEPARATOR).take(2).collect();
                assert_eq!(aspect.label_name(), first_two.join("/"));
            }
        }
        assert_eq!(leaves(&map, "place"), vec!["home"]);
    }

    #[test]
    fn test_categories_keep_first_appearance_order() {
        let labels = labels(&["time/morning", "focus/deep", "time/evening", "energy/low"]);
        let map = AspectCategoryMap::from_labels(&labels);

        assert_eq!(
            map.categories().collect::<Vec<_>>(),
            vec!["time", "focus", "energy"]
        );
        assert_eq!(leaves(&map, "time"), vec!["morning", "evening"]);
    }

    #[test]
    fn test_duplicate_leaves_preserved() {
        let labels = labels(&["time/morning", "time/morning"]);
        let map = AspectCategoryMap::from_labels(&labels);

        assert_eq!(map.get("time").len(), 2);
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let map = AspectCategoryMap::from_labels(&labels(&["time/morning"]));
        assert!(map.get("color").is_empty());
    }
}
