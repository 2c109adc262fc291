use super::model::{AddOutcome, ItemList, RemoveOutcome};

/// Presentation side of the list manager.
pub trait ListView {
    /// Show the current items.
    fn display_items(&mut self, items: &[String]);

    /// Show a status message.
    fn display_message(&mut self, message: &str);
}

/// Coordinates an [`ItemList`] and a [`ListView`].
#[derive(Debug)]
pub struct ListController<V> {
    model: ItemList,
    view: V,
}

impl<V: ListView> ListController<V> {
    pub fn new(model: ItemList, view: V) -> Self {
        Self { model, view }
    }

    /// Add an item, report the outcome, then refresh the view.
    ///
    /// The view is refreshed even when the item is rejected.
    pub fn add_item_to_list(&mut self, item: &str) {
        let message = match self.model.add_item(item) {
            Ok(AddOutcome::Added) => format!("Success: '{}' added.", item),
            Ok(AddOutcome::Duplicate) => format!("Error: '{}' is already in the list.", item),
            Err(err) => format!("Error: {}", err),
        };
        self.view.display_message(&message);
        self.update_view();
    }

    /// Remove an item, report the outcome, then refresh the view.
    pub fn remove_item_from_list(&mut self, item: &str) {
        let message = match self.model.remove_item(item) {
            RemoveOutcome::Removed => format!("Success: '{}' removed.", item),
            RemoveOutcome::NotFound => format!("Error: '{}' not found.", item),
        };
        self.view.display_message(&message);
        self.update_view();
    }

    /// Push the current items to the view.
    pub fn update_view(&mut self) {
        let items = self.model.items();
        self.view.display_items(&items);
    }

    pub fn model(&self) -> &ItemList {
        &self.model
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn into_parts(self) -> (ItemList, V) {
        (self.model, self.view)
    }
}
