use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use super::popup;
use crate::state::RecipeModalState;
use crate::ui::{layouts, theme::{self, Palette}};

const FOOTER: &str = "d: download recipe | o: open image | Esc: close";

/// Longest image reference shown verbatim; data URIs are summarized
const MAX_IMAGE_REF: usize = 60;

pub fn render_recipe_modal(f: &mut Frame, modal: &RecipeModalState, palette: &Palette) {
    let title = format!(" {} ", modal.title());
    let inner = popup::render_popup_frame(
        f,
        f.area(),
        layouts::popup_sizes::LARGE,
        &title,
        palette.accent_border_style(),
        palette,
    );
    let (content_area, footer_area) = popup::split_footer(inner);

    let body = Paragraph::new(body_lines(modal, palette)).wrap(Wrap { trim: false });
    f.render_widget(body, content_area);

    f.render_widget(
        Paragraph::new(Span::styled(FOOTER, theme::help_text_style())).alignment(Alignment::Center),
        footer_area,
    );
}

fn body_lines<'a>(modal: &'a RecipeModalState, palette: &Palette) -> Vec<Line<'a>> {
    let mut lines = vec![
        Line::from(Span::styled(modal.calories_line(), theme::header_style())),
        Line::from(vec![
            Span::styled("Image: ", palette.muted_style()),
            Span::raw(image_label(modal.image_ref())),
        ]),
        Line::from(""),
        Line::from(Span::styled("Ingredients", palette.title_style())),
    ];

    if let Some(recipe) = &modal.recipe {
        lines.extend(
            recipe
                .ingredients
                .iter()
                .map(|item| Line::from(format!("  • {}", item))),
        );
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Steps", palette.title_style())));
        lines.extend(
            recipe
                .steps
                .iter()
                .enumerate()
                .map(|(i, step)| Line::from(format!("  {}. {}", i + 1, step))),
        );
    }

    lines
}

fn image_label(image: &str) -> String {
    if image.starts_with("data:") {
        let kind = image
            .split(';')
            .next()
            .and_then(|head| head.strip_prefix("data:"))
            .unwrap_or("image");
        return format!("inline {} ({} bytes)", kind, image.len());
    }

    if image.chars().count() > MAX_IMAGE_REF {
        let head: String = image.chars().take(MAX_IMAGE_REF - 3).collect();
        format!("{}...", head)
    } else {
        image.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::IMAGE_PLACEHOLDER;
    use crate::testing::fixtures::recipe;
    use mealmind_api::endpoints::meals::RecipeType;

    fn text(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_body_numbers_steps_from_one() {
        let mut r = recipe("Omelette", RecipeType::Veg, &["egg"]);
        r.ingredients = vec!["2 eggs".to_string()];
        r.steps = vec!["Whisk".to_string(), "Fry".to_string()];
        let modal = RecipeModalState {
            visible: true,
            generation: 1,
            recipe: Some(r),
            image: None,
        };
        let palette = Palette::for_mode(Default::default());

        let body = text(&body_lines(&modal, &palette));

        assert_eq!(body[0], "Calories: N/A");
        assert_eq!(body[1], format!("Image: {}", IMAGE_PLACEHOLDER));
        assert!(body.contains(&"  • 2 eggs".to_string()));
        assert!(body.contains(&"  1. Whisk".to_string()));
        assert!(body.contains(&"  2. Fry".to_string()));
    }

    #[test]
    fn test_image_label_summarizes_data_uri() {
        assert_eq!(
            image_label("data:image/png;base64,AAAA"),
            "inline image/png (26 bytes)"
        );
        assert_eq!(
            image_label("https://cdn.example.com/a.png"),
            "https://cdn.example.com/a.png"
        );
        let long = format!("https://cdn.example.com/{}", "x".repeat(80));
        assert_eq!(image_label(&long).chars().count(), MAX_IMAGE_REF);
    }
}
