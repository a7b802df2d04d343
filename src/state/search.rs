//! Search box text buffer.

use gifwall::Route;

#[derive(Debug, Clone, Default)]
pub struct SearchState {
    text: String,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows the keyword of `route` in the box; home clears it.
    pub fn sync_from_route(&mut self, route: &Route) {
        self.text = match route {
            Route::Search(keyword) => keyword.clone(),
            Route::Trending | Route::NotFound(_) => String::new(),
        };
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Route for submitting the current text.
    pub fn submit(&self) -> Route {
        Route::search(&self.text)
    }
}
