//! Plain-text export of a recipe.

use std::fs;
use std::path::{Path, PathBuf};

use itertools::Itertools;
use mealmind_api::endpoints::meals::Recipe;
use thiserror::Error;

use crate::state::calories_line;

const FILE_SUFFIX: &str = "-recipe.txt";
const UNTITLED: &str = "untitled";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to create export directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// File name for an exported recipe: lower-cased, runs of anything outside
/// `[a-z0-9]` collapsed to one hyphen, ends trimmed.
pub fn recipe_file_name(name: &str) -> String {
    let slug = name
        .to_lowercase()
        .split(|c: char| !(c.is_ascii_lowercase() || c.is_ascii_digit()))
        .filter(|part| !part.is_empty())
        .join("-");

    if slug.is_empty() {
        format!("{}{}", UNTITLED, FILE_SUFFIX)
    } else {
        format!("{}{}", slug, FILE_SUFFIX)
    }
}

pub fn recipe_text(recipe: &Recipe) -> String {
    let ingredients = recipe
        .ingredients
        .iter()
        .map(|item| format!("- {}", item))
        .join("\n");
    let steps = recipe
        .steps
        .iter()
        .enumerate()
        .map(|(i, step)| format!("{}. {}", i + 1, step))
        .join("\n");

    format!(
        "{}\n\n{}\n\nIngredients:\n{}\n\nSteps:\n{}",
        recipe.name,
        calories_line(Some(recipe)),
        ingredients,
        steps
    )
    .trim()
    .to_string()
}

/// Write the recipe into `dir`, creating it when missing
pub fn export_recipe(recipe: &Recipe, dir: &Path) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(dir).map_err(|source| ExportError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(recipe_file_name(&recipe.name));
    fs::write(&path, recipe_text(recipe)).map_err(|source| ExportError::Write {
        path: path.clone(),
        source,
    })?;

    tracing::info!("Exported '{}' to {}", recipe.name, path.display());
    Ok(path)
}
