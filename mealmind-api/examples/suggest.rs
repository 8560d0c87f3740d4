use mealmind_api::{Client, DEFAULT_BASE_URL, MealMindApiError, Request};

#[tokio::main]
pub async fn main() -> Result<(), MealMindApiError> {
    let client = Client::new(DEFAULT_BASE_URL);

    let req = Request::meals().suggest("egg, tomato");

    let res = client.send(req).await?;
    for recipe in res.suggestions {
        println!("{} ({})", recipe.name, recipe.recipe_type);
    }
    Ok(())
}
