use crate::model::task::Task;
use crate::store::TodoState;

/// What the list view shows: visible tasks in display order plus completion
/// counts over that same (post-search) set.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskListing {
    pub tasks: Vec<Task>,
    pub completed_count: usize,
    pub total_count: usize,
}

/// Derive the visible task list from a snapshot.
///
/// Recomputed from scratch on every render; holds no state of its own.
/// The query is trimmed here (the store keeps it verbatim) and matched
/// case-insensitively against titles only.
pub fn visible_tasks(state: &TodoState) -> TaskListing {
    let query = state.search_query.trim();

    let mut tasks: Vec<Task> = if query.is_empty() {
        state.tasks.values().cloned().collect()
    } else {
        let needle = query.to_lowercase();
        state
            .tasks
            .values()
            .filter(|t| t.title.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    };

    // Newest first; the sort is stable, so equal timestamps keep insertion order
    tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let completed_count = tasks.iter().filter(|t| t.completed).count();
    let total_count = tasks.len();

    TaskListing {
        tasks,
        completed_count,
        total_count,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::store::Store;

    fn listing_for(query: &str) -> TaskListing {
        let mut store = Store::new();
        store.set_search_query(query);
        visible_tasks(&store.state())
    }

    fn ids(listing: &TaskListing) -> Vec<&str> {
        listing.tasks.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn empty_query_shows_everything_newest_first() {
        let listing = listing_for("");
        assert_eq!(ids(&listing), vec!["3", "2", "1"]);
        assert_eq!(listing.total_count, 3);
        assert_eq!(listing.completed_count, 2);
    }

    #[test]
    fn whitespace_query_is_treated_as_empty() {
        let listing = listing_for("   ");
        assert_eq!(listing.total_count, 3);
    }

    #[test]
    fn query_matches_titles_case_insensitively() {
        // "the" appears in seed titles 1 and 3; newest first puts 3 ahead
        let listing = listing_for("the");
        assert_eq!(ids(&listing), vec!["3", "1"]);

        let listing = listing_for("TASK");
        assert_eq!(ids(&listing), vec!["2"]);
    }

    #[test]
    fn query_is_trimmed_before_matching() {
        let listing = listing_for("  the  ");
        assert_eq!(ids(&listing), vec!["3", "1"]);
    }

    #[test]
    fn reporter_and_description_are_not_searched() {
        // "Infra" is task 1's reporter, "functionality" appears only in descriptions
        assert_eq!(listing_for("Infra").total_count, 0);
        assert_eq!(listing_for("functionality").total_count, 0);
    }

    #[test]
    fn counts_cover_the_filtered_set_not_the_whole_store() {
        let listing = listing_for("the");
        // Of the two matches, only task 1 is completed
        assert_eq!(listing.total_count, 2);
        assert_eq!(listing.completed_count, 1);
    }

    #[test]
    fn no_matches_yields_an_empty_listing() {
        let listing = listing_for("zzz");
        assert_eq!(listing.total_count, 0);
        assert_eq!(listing.completed_count, 0);
        assert!(listing.tasks.is_empty());
    }
}
