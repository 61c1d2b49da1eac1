//! The state transition function.
//!
//! [`reduce`] is pure and synchronous: it never fails or performs I/O, and
//! returns the same state for the same `(state, action)` pair. Network
//! calls belong to the orchestrator, which dispatches actions here only after
//! the favourites service has answered.

use super::{Action, AppState, Selection};
use std::collections::HashSet;

/// Applies `action` to `state` and returns the next state.
///
/// # Example
///
/// ```
/// use cat_gallery::app::{reduce, Action, AppState};
/// use cat_gallery::domain::{FavouriteImage, Image};
///
/// let record = FavouriteImage::new("f1", Image::new("1", "u1"));
/// let added = reduce(AppState::new(), &Action::ToggleFavourite(record.clone()));
/// assert_eq!(added.favourites, vec![record.clone()]);
///
/// let removed = reduce(added, &Action::ToggleFavourite(record));
/// assert!(removed.favourites.is_empty());
/// ```
#[must_use]
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    apply(&mut state, action);
    state
}

/// Applies `action` in place and reports whether anything changed.
///
/// The store uses the flag to skip notifying subscribers for no-op actions.
pub(crate) fn apply(state: &mut AppState, action: &Action) -> bool {
    match action {
        Action::Select(image) => {
            let selection = Selection::from(image.clone());
            let changed =
                state.selection != selection || state.last_shown.as_ref() != Some(image);
            state.selection = selection;
            state.last_shown = Some(image.clone());
            changed
        }
        Action::ToggleFavourite(record) => {
            let before = state.favourites.len();
            state.favourites.retain(|f| f.image.id != record.image.id);
            if state.favourites.len() == before {
                state.favourites.push(record.clone());
            }
            true
        }
        Action::FavouritesLoaded(records) => {
            let mut seen = HashSet::new();
            let favourites: Vec<_> = records
                .iter()
                .filter(|f| seen.insert(f.image.id.as_str()))
                .cloned()
                .collect();
            let changed = state.favourites != favourites;
            state.favourites = favourites;
            changed
        }
        Action::ToggleStarted { image_id } => state.pending.insert(image_id.clone()),
        Action::ToggleSettled { image_id } => state.pending.remove(image_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FavouriteImage, Image};

    fn img(id: &str, url: &str) -> Image {
        Image::new(id, url)
    }

    fn fav(id: &str, image: Image) -> FavouriteImage {
        FavouriteImage::new(id, image)
    }

    fn count_for(state: &AppState, image_id: &str) -> usize {
        state
            .favourites
            .iter()
            .filter(|f| f.image.id == image_id)
            .count()
    }

    #[test]
    fn select_opens_image_with_non_empty_id() {
        let states = [
            AppState::new(),
            reduce(AppState::new(), &Action::Select(img("9", "u9"))),
            reduce(AppState::new(), &Action::Select(img("", "u0"))),
        ];

        for state in states {
            let next = reduce(state, &Action::Select(img("1", "u1")));
            assert_eq!(next.selected(), Some(&img("1", "u1")));
            assert_eq!(next.last_shown, Some(img("1", "u1")));
        }
    }

    #[test]
    fn closing_keeps_the_other_fields_of_the_previous_image() {
        let open = reduce(AppState::new(), &Action::Select(img("1", "u1")));
        let previous = open.selected().cloned().unwrap();

        let closed = reduce(open, &Action::close(&previous));

        assert_eq!(closed.selection, Selection::Closed);
        let shown = closed.last_shown.unwrap();
        assert_eq!(shown.id, "");
        assert_eq!(shown.url, previous.url);
    }

    #[test]
    fn close_marker_from_initial_state_records_residual_image() {
        let next = reduce(AppState::new(), &Action::Select(img("", "u1")));

        assert!(next.selected().is_none());
        assert_eq!(next.last_shown, Some(img("", "u1")));
    }

    #[test]
    fn toggle_adds_then_removes_the_same_record() {
        let record = fav("f1", img("1", "u1"));
        let start = reduce(AppState::new(), &Action::Select(img("1", "u1")));

        let added = reduce(start, &Action::ToggleFavourite(record.clone()));
        assert_eq!(added.favourites, vec![record.clone()]);

        let removed = reduce(added, &Action::ToggleFavourite(record));
        assert!(removed.favourites.is_empty());
    }

    #[test]
    fn toggle_removes_by_image_id_even_with_a_different_record() {
        let state = reduce(
            AppState::new(),
            &Action::ToggleFavourite(fav("f1", img("1", "u1"))),
        );

        let next = reduce(state, &Action::ToggleFavourite(fav("other", img("1", ""))));

        assert!(next.favourites.is_empty());
    }

    #[test]
    fn toggle_removal_keeps_order_of_remaining_favourites() {
        let mut state = AppState::new();
        for (id, image) in [("fa", "a"), ("fb", "b"), ("fc", "c")] {
            state = reduce(state, &Action::ToggleFavourite(fav(id, img(image, ""))));
        }

        let next = reduce(state, &Action::ToggleFavourite(fav("fb", img("b", ""))));

        let ids: Vec<_> = next.favourites.iter().map(|f| f.image.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
    }

    #[test]
    fn any_toggle_sequence_keeps_at_most_one_entry_per_image() {
        let records = [
            fav("f1", img("1", "u1")),
            fav("f2", img("2", "u2")),
            fav("f1b", img("1", "u1")),
            fav("f3", img("3", "u3")),
        ];
        let sequence = [0, 1, 2, 2, 0, 3, 1, 1, 1, 2, 3, 0];

        let mut state = AppState::new();
        for &i in &sequence {
            state = reduce(state, &Action::ToggleFavourite(records[i].clone()));
            for id in ["1", "2", "3"] {
                assert!(count_for(&state, id) <= 1, "duplicate favourite for {id}");
            }
        }
    }

    #[test]
    fn reduce_is_deterministic() {
        let state = reduce(AppState::new(), &Action::Select(img("1", "u1")));
        let action = Action::ToggleFavourite(fav("f1", img("1", "u1")));

        assert_eq!(reduce(state.clone(), &action), reduce(state, &action));
    }

    #[test]
    fn favourites_loaded_keeps_first_record_per_image() {
        let records = vec![
            fav("f1", img("1", "u1")),
            fav("f2", img("2", "u2")),
            fav("f3", img("1", "u1")),
        ];

        let state = reduce(AppState::new(), &Action::FavouritesLoaded(records));

        let ids: Vec<_> = state.favourites.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, ["f1", "f2"]);
    }

    #[test]
    fn apply_reports_no_change_for_repeated_select_and_settle() {
        let mut state = AppState::new();
        assert!(apply(&mut state, &Action::Select(img("1", "u1"))));
        assert!(!apply(&mut state, &Action::Select(img("1", "u1"))));

        assert!(apply(&mut state, &Action::ToggleStarted { image_id: "1".into() }));
        assert!(!apply(&mut state, &Action::ToggleStarted { image_id: "1".into() }));
        assert!(apply(&mut state, &Action::ToggleSettled { image_id: "1".into() }));
        assert!(!apply(&mut state, &Action::ToggleSettled { image_id: "1".into() }));
    }
}
