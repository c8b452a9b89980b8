//! Archive view assembly.
//!
//! An archive's front page shows its categories with the publications
//! inside each, but only the categories that actually have something to
//! show: a category with no publications is skipped, and a category
//! flagged "show on separate page" is skipped even when non-empty.
//!
//! Category order is the caller's input order (manual/storage order). The
//! archive's sort order applies to the publications within each category,
//! never to the category list itself.

use serde::Serialize;

/// Message shown by the presentation layer when an archive has nothing to
/// display.
pub const NO_DATA_MESSAGE: &str = "No data available.";

/// Flags a category exposes to view assembly.
pub trait CategoryFlags {
    /// Display title.
    fn title(&self) -> &str;
    /// Whether the category is rendered on its own page instead of the
    /// archive's aggregate view.
    fn show_on_separate_page(&self) -> bool;
}

/// One visible category in an archive view: the category itself plus its
/// publications, already sorted per the archive's configured order.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryView<C, P> {
    pub title: String,
    pub category: C,
    pub publications: Vec<P>,
}

/// Assemble the visible-category views for an archive.
///
/// Input is `(category, publications)` pairs in category storage/manual
/// order, with each publication list already sorted. Empty and
/// separate-page categories are dropped; relative order is preserved.
///
/// An empty result is the "archive is empty" signal the presentation layer
/// pairs with [`NO_DATA_MESSAGE`].
pub fn visible_categories<C, P>(categories: Vec<(C, Vec<P>)>) -> Vec<CategoryView<C, P>>
where
    C: CategoryFlags,
{
    categories
        .into_iter()
        .filter(|(category, publications)| {
            !publications.is_empty() && !category.show_on_separate_page()
        })
        .map(|(category, publications)| CategoryView {
            title: category.title().to_string(),
            category,
            publications,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Cat {
        title: &'static str,
        separate_page: bool,
    }

    impl CategoryFlags for Cat {
        fn title(&self) -> &str {
            self.title
        }
        fn show_on_separate_page(&self) -> bool {
            self.separate_page
        }
    }

    #[test]
    fn empty_categories_are_excluded() {
        let views = visible_categories(vec![
            (Cat { title: "Reports", separate_page: false }, vec!["a"]),
            (Cat { title: "Drafts", separate_page: false }, Vec::<&str>::new()),
        ]);
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].title, "Reports");
    }

    #[test]
    fn separate_page_categories_are_excluded_even_when_non_empty() {
        let views = visible_categories(vec![
            (Cat { title: "Reports", separate_page: true }, vec!["a", "b"]),
            (Cat { title: "Newsletters", separate_page: false }, vec!["c"]),
        ]);
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].title, "Newsletters");
    }

    #[test]
    fn input_order_is_preserved() {
        let views = visible_categories(vec![
            (Cat { title: "Zoning", separate_page: false }, vec!["a"]),
            (Cat { title: "Annual", separate_page: false }, vec!["b"]),
            (Cat { title: "Minutes", separate_page: false }, vec!["c"]),
        ]);
        let titles: Vec<&str> = views.iter().map(|v| v.title.as_str()).collect();
        assert_eq!(titles, vec!["Zoning", "Annual", "Minutes"]);
    }

    #[test]
    fn archive_with_no_categories_yields_empty_view() {
        let views = visible_categories(Vec::<(Cat, Vec<&str>)>::new());
        assert!(views.is_empty());
    }

    #[test]
    fn publication_lists_pass_through_untouched() {
        let views = visible_categories(vec![(
            Cat { title: "Reports", separate_page: false },
            vec!["third", "first", "second"],
        )]);
        assert_eq!(views[0].publications, vec!["third", "first", "second"]);
    }
}
