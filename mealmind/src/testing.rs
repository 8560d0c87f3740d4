use crate::app_core::{AppCore, DataEventHandler};
use crate::commands::executor;
use crate::events::{AppCommand, DataEvent, Effect};
use crate::input::{Key, KeyEvent};
use crate::state::AppState;
use crate::ui::screens::Screen;

/// Mock data event handler for tests (no real async tasks)
///
/// Commands are applied with the pure state transition and every effect they
/// request is recorded instead of performed, so tests can assert exactly which
/// requests would have gone out.
#[derive(Default)]
pub struct MockDataHandler {
    effects: Vec<Effect>,
}

impl MockDataHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }
}

impl DataEventHandler for MockDataHandler {
    fn execute_with_context(&mut self, command: AppCommand, state: &mut AppState) {
        if let Some(effect) = executor::apply_command(command, state) {
            self.effects.push(effect);
        }
    }

    fn perform_effect(&mut self, effect: Effect, _state: &mut AppState) {
        self.effects.push(effect);
    }
}

pub struct TestApp {
    core: AppCore<MockDataHandler>,
}

impl TestApp {
    /// Create a new test app with mock handler
    pub fn new() -> Self {
        Self {
            core: AppCore::new(MockDataHandler::new()),
        }
    }

    pub fn with_state(state: AppState) -> Self {
        Self {
            core: AppCore::with_state(MockDataHandler::new(), state),
        }
    }

    /// Send a single key event
    pub fn send_key(&mut self, key: Key) {
        self.core.handle_key(KeyEvent::new(key));
    }

    /// Send a key event with modifiers
    pub fn send_key_event(&mut self, event: KeyEvent) {
        self.core.handle_key(event);
    }

    /// Send multiple keys in sequence
    pub fn send_keys(&mut self, keys: &[Key]) {
        for key in keys {
            self.send_key(*key);
        }
    }

    /// Type text into whatever currently accepts characters
    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.send_key(Key::Char(c));
        }
    }

    /// Inject a data event (simulate API response)
    pub fn send_data_event(&mut self, event: DataEvent) {
        self.core.handle_data_event(event);
    }

    pub fn tick(&mut self, times: usize) {
        for _ in 0..times {
            self.core.tick();
        }
    }

    /// Effects requested so far, oldest first
    pub fn effects(&self) -> &[Effect] {
        self.core.handler().effects()
    }

    pub fn last_effect(&self) -> Option<&Effect> {
        self.effects().last()
    }

    /// Get read-only access to current state
    pub fn state(&self) -> &AppState {
        self.core.state()
    }

    /// Assert that the app is on a specific screen type
    ///
    /// Uses discriminant comparison to check screen type without
    /// requiring full equality of state.
    pub fn assert_screen_type(&self, expected_discriminant: std::mem::Discriminant<Screen>) {
        let current = self.state().current_screen();
        assert_eq!(
            std::mem::discriminant(current),
            expected_discriminant,
            "Expected different screen. Current: {:?}",
            current
        );
    }

    /// Assert that the app should quit
    pub fn assert_should_quit(&self) {
        assert!(
            self.core.should_quit(),
            "App should be marked for quit but is not"
        );
    }

    /// Assert that the app should NOT quit
    pub fn assert_not_quit(&self) {
        assert!(
            !self.core.should_quit(),
            "App should NOT be marked for quit but is"
        );
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Builders for API values used across tests
pub mod fixtures {
    use mealmind_api::endpoints::meals::{Recipe, RecipeType};

    /// A recipe with the given matched ingredients and nothing else filled in
    pub fn recipe(name: &str, recipe_type: RecipeType, matched: &[&str]) -> Recipe {
        Recipe {
            name: name.to_string(),
            recipe_type,
            matched_ingredients: matched.iter().map(|s| s.to_string()).collect(),
            missing_ingredients: Vec::new(),
            ingredients: Vec::new(),
            steps: Vec::new(),
            nutrition: None,
            healthy_alternative: None,
            image: None,
        }
    }
}
