use mealmind::events::{DataEvent, Effect};
use mealmind::input::{Key, KeyEvent};
use mealmind::state::focus::SETTLE_TICKS;
use mealmind::state::grid::{self, GridView};
use mealmind::state::{Focus, LoadingState, IMAGE_PLACEHOLDER, PANTRY_ERROR};
use mealmind::testing::fixtures::recipe;
use mealmind::testing::TestApp;
use mealmind::ui::screens::Screen;
use mealmind_api::endpoints::meals::{Nutrition, Recipe, RecipeType, SuggestionsResponse};

fn suggestions() -> Vec<Recipe> {
    let mut omelette = recipe("Omelette", RecipeType::Veg, &["egg"]);
    omelette.ingredients = vec!["2 eggs".to_string(), "salt".to_string()];
    omelette.steps = vec!["Whisk".to_string(), "Fry".to_string()];
    omelette.nutrition = Some(Nutrition {
        calories: Some(180.0),
    });
    omelette.healthy_alternative = Some("Use egg whites".to_string());

    let mut curry = recipe("Chicken Curry", RecipeType::NonVeg, &["chicken"]);
    curry.missing_ingredients = vec!["coconut milk".to_string()];

    let plain = recipe("Plain Rice", RecipeType::Veg, &[]);

    vec![omelette, curry, plain]
}

/// Type ingredients, submit, and answer the request with `recipes`
fn search(app: &mut TestApp, text: &str, recipes: Vec<Recipe>) {
    app.type_text(text);
    app.send_key(Key::Enter);

    let Some(Effect::FetchSuggestions {
        request_id,
        ingredients,
    }) = app.last_effect().cloned()
    else {
        panic!("expected a suggestion request, got {:?}", app.last_effect());
    };

    app.send_data_event(DataEvent::SuggestionsLoaded {
        request_id,
        ingredients,
        suggestions: recipes,
    });
    app.tick(SETTLE_TICKS as usize);
}

fn card_names(app: &TestApp) -> Vec<String> {
    app.state()
        .home
        .grid
        .grid()
        .map(|g| g.cards().iter().map(|c| c.recipe.name.clone()).collect())
        .unwrap_or_default()
}

#[test]
fn test_quit_flow() {
    let mut app = TestApp::new();
    app.assert_not_quit();

    // Typing 'q' into the ingredient box is just text
    app.send_key(Key::Char('q'));
    app.assert_not_quit();
    assert_eq!(app.state().home.input, "q");

    app.send_key(Key::Esc);
    app.send_key(Key::Char('q'));
    app.assert_should_quit();
}

#[test]
fn test_ctrl_c_quits_from_anywhere() {
    let mut app = TestApp::new();
    app.send_key_event(KeyEvent::with_ctrl(Key::Char('c')));
    app.assert_should_quit();
}

#[test]
fn test_blank_input_issues_no_request() {
    let mut app = TestApp::new();

    app.type_text("   ");
    app.send_key(Key::Enter);

    assert!(app.effects().is_empty());
    assert_eq!(
        app.state().home.grid,
        GridView::message(grid::MSG_EMPTY_INPUT)
    );
}

#[test]
fn test_search_issues_exactly_one_trimmed_request() {
    let mut app = TestApp::new();

    app.type_text("  egg, Tomato ");
    app.send_key(Key::Enter);

    assert_eq!(
        app.effects(),
        &[Effect::FetchSuggestions {
            request_id: 1,
            ingredients: "egg, Tomato".to_string(),
        }]
    );
    assert!(app.state().home.loading.is_loading());

    // Keys other than quit are swallowed while loading
    app.send_key(Key::Enter);
    assert_eq!(app.effects().len(), 1);
}

#[test]
fn test_search_renders_matched_cards_and_saves_pantry() {
    let mut app = TestApp::new();

    search(&mut app, "egg, Chicken", suggestions());

    assert_eq!(card_names(&app), vec!["Omelette", "Chicken Curry"]);
    assert_eq!(app.state().home.loading, LoadingState::Loaded);
    assert_eq!(
        app.last_effect(),
        Some(&Effect::SaveToPantry {
            ingredients: vec!["egg".to_string(), "chicken".to_string()],
        })
    );

    // Focus lands on the results after the settle delay
    assert_eq!(app.state().home.focus, Focus::Results);
    assert!(!app.state().home.results_attrs.is_announcing());
}

#[test]
fn test_backend_payload_flows_into_modal() {
    let payload = r#"{
        "suggestions": [
            {
                "name": "Tomato Soup",
                "type": "veg",
                "matched_ingredients": ["tomato"],
                "missing_ingredients": ["cream"],
                "ingredients": ["4 tomatoes", "1 onion"],
                "steps": ["Chop", "Simmer", "Blend"],
                "nutrition": {"calories": 120.5},
                "healthy_alternative": "Skip the cream"
            },
            {
                "name": "Beef Stew",
                "type": "non-veg",
                "matched_ingredients": [],
                "nutrition": null,
                "healthy_alternative": null
            }
        ]
    }"#;
    let response: SuggestionsResponse = serde_json::from_str(payload).unwrap();

    let mut app = TestApp::new();
    search(&mut app, "Tomato", response.suggestions);

    assert_eq!(card_names(&app), vec!["Tomato Soup"]);

    app.send_key(Key::Enter);
    let modal = &app.state().recipe_modal;
    assert_eq!(modal.title(), "Tomato Soup");
    assert_eq!(modal.calories_line(), "Calories: 120.5");
    assert_eq!(modal.image_ref(), IMAGE_PLACEHOLDER);
}

#[test]
fn test_failed_search_shows_message() {
    let mut app = TestApp::new();
    app.type_text("egg");
    app.send_key(Key::Enter);

    app.send_data_event(DataEvent::SuggestionsFailed {
        request_id: 1,
        error: "HTTP 502".to_string(),
    });

    assert_eq!(
        app.state().home.grid,
        GridView::message(grid::MSG_FETCH_FAILED)
    );
    assert!(!app.state().home.loading.is_loading());
    assert!(app.state().session.suggestions.is_none());
}

#[test]
fn test_veg_filter_after_search() {
    let mut app = TestApp::new();
    search(&mut app, "egg, chicken", suggestions());

    app.send_key(Key::Char('v'));
    assert_eq!(card_names(&app), vec!["Omelette"]);

    app.send_key(Key::Char('n'));
    assert_eq!(card_names(&app), vec!["Chicken Curry"]);

    app.send_key(Key::Char('a'));
    assert_eq!(card_names(&app), vec!["Omelette", "Chicken Curry"]);
}

#[test]
fn test_veg_filter_before_search() {
    let mut app = TestApp::new();
    app.send_key(Key::Esc);

    app.send_key(Key::Char('v'));

    assert_eq!(
        app.state().home.grid,
        GridView::message(grid::MSG_FETCH_FIRST)
    );
    assert!(app.effects().is_empty());
}

#[test]
fn test_opening_second_recipe_replaces_first() {
    let mut app = TestApp::new();
    search(&mut app, "egg, chicken", suggestions());

    app.send_key(Key::Enter);
    assert_eq!(app.state().recipe_modal.title(), "Omelette");
    assert_eq!(app.state().recipe_modal.calories_line(), "Calories: 180");

    app.send_key(Key::Esc);
    assert!(!app.state().recipe_modal.visible);

    app.send_key(Key::Char('j'));
    app.send_key(Key::Enter);

    let modal = &app.state().recipe_modal;
    assert!(modal.visible);
    assert_eq!(modal.title(), "Chicken Curry");
    assert_eq!(modal.calories_line(), "Calories: N/A");
    assert_eq!(modal.image, None);
    assert_eq!(
        app.last_effect(),
        Some(&Effect::GenerateImage {
            generation: 2,
            recipe_name: "Chicken Curry".to_string(),
        })
    );
}

#[test]
fn test_stale_image_does_not_touch_modal() {
    let mut app = TestApp::new();
    search(&mut app, "egg, chicken", suggestions());

    app.send_key(Key::Enter);
    app.send_key(Key::Esc);
    app.send_key(Key::Char('j'));
    app.send_key(Key::Enter);

    // Answer for the first open arrives late
    app.send_data_event(DataEvent::ImageGenerated {
        generation: 1,
        image: "https://cdn.example.com/omelette.png".to_string(),
    });
    assert_eq!(app.state().recipe_modal.image, None);

    app.send_data_event(DataEvent::ImageGenerated {
        generation: 2,
        image: "https://cdn.example.com/curry.png".to_string(),
    });
    assert_eq!(
        app.state().recipe_modal.image.as_deref(),
        Some("https://cdn.example.com/curry.png")
    );

    // After close nothing changes either
    app.send_key(Key::Esc);
    app.send_data_event(DataEvent::ImageGenerated {
        generation: 2,
        image: "https://cdn.example.com/other.png".to_string(),
    });
    assert_eq!(
        app.state().recipe_modal.image.as_deref(),
        Some("https://cdn.example.com/curry.png")
    );
}

#[test]
fn test_modal_suspends_background_keys() {
    let mut app = TestApp::new();
    search(&mut app, "egg, chicken", suggestions());
    app.send_key(Key::Enter);

    app.send_key(Key::Char('j'));
    app.send_key(Key::Char('v'));

    assert_eq!(app.state().home.selected, 0);
    assert_eq!(card_names(&app).len(), 2);

    app.send_key(Key::Char('d'));
    assert!(matches!(
        app.last_effect(),
        Some(Effect::ExportRecipe { recipe, .. }) if recipe.name == "Omelette"
    ));
}

#[test]
fn test_pantry_failure_renders_single_item() {
    let mut app = TestApp::new();
    app.send_key(Key::Esc);

    app.send_key(Key::Char('p'));
    assert_eq!(app.last_effect(), Some(&Effect::LoadPantry));
    assert!(app.state().pantry.visible);

    app.send_data_event(DataEvent::PantryLoadFailed {
        error: "connection refused".to_string(),
    });

    assert_eq!(app.state().pantry.items, vec![PANTRY_ERROR]);

    app.send_key(Key::Char('d'));
    assert_eq!(app.last_effect(), Some(&Effect::OpenPantryDownload));

    app.send_key(Key::Esc);
    assert!(!app.state().pantry.visible);
}

#[test]
fn test_healthy_swaps_panel() {
    let mut app = TestApp::new();
    search(&mut app, "egg, chicken", suggestions());

    app.send_key(Key::Char('s'));

    assert!(app.state().swaps.visible);
    assert_eq!(app.state().swaps.items, vec!["Omelette: Use egg whites"]);

    app.send_key(Key::Esc);
    assert!(!app.state().swaps.visible);
}

#[test]
fn test_theme_toggle_cross_fades_logo() {
    let mut app = TestApp::new();
    app.send_key(Key::Esc);

    app.send_key(Key::Char('t'));
    let theme = &app.state().theme;
    assert!(theme.mode.is_dark());
    assert!(!theme.logo.visible);

    app.tick(2);
    let theme = &app.state().theme;
    assert!(theme.logo.visible);
    assert!(theme.logo.variant.is_dark());
}

#[test]
fn test_logs_navigation() {
    let mut app = TestApp::new();
    app.send_key(Key::Esc);

    app.send_keys(&[Key::Char('g'), Key::Char('l')]);
    app.assert_screen_type(std::mem::discriminant(&Screen::Logs(Default::default())));

    app.send_key(Key::Char('h'));
    app.assert_screen_type(std::mem::discriminant(&Screen::Home));
}

#[test]
fn test_help_toggle() {
    let mut app = TestApp::new();
    app.send_key(Key::Esc);

    app.send_key(Key::Char('?'));
    assert!(app.state().help_visible);

    app.send_key(Key::Esc);
    assert!(!app.state().help_visible);
}
