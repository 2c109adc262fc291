//! Tests for the MVC list manager: model rules, controller messages and
//! view refreshes.

use contact_book::list_manager::{AddOutcome, ItemList, ListController, ListView, RemoveOutcome};
use contact_book::presentation::ConsoleListView;

/// Calls received by a view, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ViewCall {
    Items(Vec<String>),
    Message(String),
}

#[derive(Debug, Default)]
struct RecordingListView {
    calls: Vec<ViewCall>,
}

impl ListView for RecordingListView {
    fn display_items(&mut self, items: &[String]) {
        self.calls.push(ViewCall::Items(items.to_vec()));
    }

    fn display_message(&mut self, message: &str) {
        self.calls.push(ViewCall::Message(message.to_string()));
    }
}

fn controller() -> ListController<RecordingListView> {
    ListController::new(ItemList::new(), RecordingListView::default())
}

fn items(values: &[&str]) -> ViewCall {
    ViewCall::Items(values.iter().map(|s| s.to_string()).collect())
}

fn message(text: &str) -> ViewCall {
    ViewCall::Message(text.to_string())
}

#[test]
fn test_model_rejects_duplicates_and_empty_items() {
    let mut list = ItemList::new();

    assert_eq!(list.add_item("milk").unwrap(), AddOutcome::Added);
    assert_eq!(list.add_item("milk").unwrap(), AddOutcome::Duplicate);
    assert!(list.add_item("").is_err());
    assert_eq!(list.items(), vec!["milk".to_string()]);
}

#[test]
fn test_model_remove_reports_missing() {
    let mut list = ItemList::new();
    list.add_item("eggs").unwrap();

    assert_eq!(list.remove_item("bread"), RemoveOutcome::NotFound);
    assert_eq!(list.remove_item("eggs"), RemoveOutcome::Removed);
    assert!(list.is_empty());
}

#[test]
fn test_add_reports_success_then_refreshes() {
    let mut controller = controller();

    controller.add_item_to_list("Buy groceries");

    assert_eq!(
        controller.view().calls,
        vec![message("Success: 'Buy groceries' added."), items(&["Buy groceries"])]
    );
}

#[test]
fn test_duplicate_add_still_refreshes() {
    let mut controller = controller();
    controller.add_item_to_list("Buy groceries");

    controller.add_item_to_list("Buy groceries");

    let calls = &controller.view().calls;
    assert_eq!(calls[2], message("Error: 'Buy groceries' is already in the list."));
    assert_eq!(calls[3], items(&["Buy groceries"]));
}

#[test]
fn test_empty_item_reports_model_error() {
    let mut controller = controller();

    controller.add_item_to_list("");

    assert_eq!(
        controller.view().calls,
        vec![message("Error: Item must be a non-empty string."), items(&[])]
    );
    assert!(controller.model().is_empty());
}

#[test]
fn test_remove_messages() {
    let mut controller = controller();
    controller.add_item_to_list("Read a book");

    controller.remove_item_from_list("Read a book");
    controller.remove_item_from_list("Go to the gym");

    let calls = &controller.view().calls;
    assert_eq!(calls[2], message("Success: 'Read a book' removed."));
    assert_eq!(calls[3], items(&[]));
    assert_eq!(calls[4], message("Error: 'Go to the gym' not found."));
    assert_eq!(calls[5], items(&[]));
}

#[test]
fn test_items_keep_insertion_order() {
    let mut controller = controller();
    for item in ["c", "a", "b"] {
        controller.add_item_to_list(item);
    }

    let (model, _) = controller.into_parts();
    assert_eq!(model.items(), vec!["c", "a", "b"]);
}

#[test]
fn test_console_view_output() {
    let mut controller = ListController::new(ItemList::new(), ConsoleListView::new(Vec::new()));

    controller.update_view();
    controller.add_item_to_list("Buy groceries");

    let (_, view) = controller.into_parts();
    let out = String::from_utf8(view.into_inner()).unwrap();
    assert_eq!(
        out,
        "--- Your List ---\nThe list is empty.\n-----------------\n\n\
         STATUS: Success: 'Buy groceries' added.\n\n\
         --- Your List ---\n- Buy groceries\n-----------------\n\n"
    );
}
