use crate::core::{Recipe, RecipeCollection, RecipeSink};

const CARD_ELEMENT: &str = "recipe-card";
const CONTAINER_ELEMENT: &str = "main";

/// One presentational unit, carrying its recipe as a JSON attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeCard {
    data: Recipe,
}

impl RecipeCard {
    pub fn new(data: Recipe) -> Self {
        Self { data }
    }

    pub fn data(&self) -> &Recipe {
        &self.data
    }

    pub fn to_html(&self) -> String {
        let json = self.data.data().to_string();
        format!(
            "<{tag} data-recipe=\"{}\"></{tag}>",
            escape_attribute(&json),
            tag = CARD_ELEMENT
        )
    }
}

/// The render target: a single `<main>` container of recipe cards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    cards: Vec<RecipeCard>,
}

impl Document {
    pub fn append(&mut self, card: RecipeCard) {
        self.cards.push(card);
    }

    pub fn cards(&self) -> &[RecipeCard] {
        &self.cards
    }

    pub fn to_html(&self, title: &str) -> String {
        let mut html = String::new();
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("  <meta charset=\"utf-8\">\n");
        html.push_str(&format!("  <title>{}</title>\n", escape_text(title)));
        html.push_str("</head>\n<body>\n");
        html.push_str(&format!("  <{}>\n", CONTAINER_ELEMENT));
        for card in &self.cards {
            html.push_str("    ");
            html.push_str(&card.to_html());
            html.push('\n');
        }
        html.push_str(&format!("  </{}>\n", CONTAINER_ELEMENT));
        html.push_str("</body>\n</html>\n");
        html
    }
}

#[derive(Debug, Default)]
pub struct HtmlRenderer {
    document: Document,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }
}

impl RecipeSink for HtmlRenderer {
    fn render(&mut self, recipes: Option<&RecipeCollection>) {
        let Some(recipes) = recipes else {
            return;
        };

        for recipe in recipes {
            self.document.append(RecipeCard::new(recipe.clone()));
        }
        tracing::debug!("Appended {} recipe cards", recipes.len());
    }
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn escape_attribute(s: &str) -> String {
    escape_text(s).replace('"', "&quot;").replace('\'', "&#39;")
}
