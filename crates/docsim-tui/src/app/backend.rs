use super::App;
use crate::tui_event::BackendEvent;

impl App {
    /// Apply an event from the backend task.
    pub fn handle_backend_event(&mut self, event: BackendEvent) {
        match event {
            BackendEvent::SearchFinished {
                generation,
                outcome,
            } => {
                if self.widget.complete_search(generation, outcome) {
                    let max = self.widget.results().len().saturating_sub(1);
                    self.result_cursor = self.result_cursor.min(max);
                }
            }
        }
    }
}
