use serde::Serialize;

use crate::core::pokemon::Pokemon;
use crate::core::types::PokemonNumber;
use crate::palette::state::PaletteState;

const PAGE_TEMPLATE: &str = include_str!("templates/index.html");

/// A toggle control on the rendered list, keyed by record number
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToggleBinding {
    pub number: PokemonNumber,
    /// `id` of the `<img>` the toggle swaps
    pub image_id: String,
}

impl ToggleBinding {
    pub fn for_record(pokemon: &Pokemon) -> Self {
        Self {
            number: pokemon.number,
            image_id: image_id(pokemon.number),
        }
    }
}

/// Markup for a list of cards plus the toggle bindings it carries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedList {
    pub html: String,
    pub bindings: Vec<ToggleBinding>,
}

impl RenderedList {
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

pub fn image_id(number: PokemonNumber) -> String {
    format!("image-{number}")
}

/// Escape text for use in element content and quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// CSS class token for a type badge: lower case, whitespace runs joined by `-`
pub fn badge_token(category: &str) -> String {
    category
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

fn render_badges(pokemon: &Pokemon) -> String {
    pokemon
        .types
        .iter()
        .map(|t| {
            format!(
                "<span class='type-bubble type-{}'>{}</span>",
                escape_html(&badge_token(t)),
                escape_html(t)
            )
        })
        .collect()
}

/// One `<li>` card, showing whichever sprite `palette` selects
pub fn render_card(pokemon: &Pokemon, palette: &PaletteState) -> String {
    let number = pokemon.number;
    let name = escape_html(&pokemon.name);
    format!(
        "<li class='card'>\
<div class='pokemon-number'>{number}</div>\
<img class='card-image' src='{src}' alt='{name}' id='{id}'>\
<h2 class='card-title'>{name}</h2>\
<p class='card-subtitle'>{badges}</p>\
<p class='pokemon-description'>{description}</p>\
<button class='show-shiny' data-number='{number}'>Show Shiny</button>\
</li>",
        src = escape_html(palette.displayed(pokemon)),
        id = image_id(number),
        badges = render_badges(pokemon),
        description = escape_html(&pokemon.description),
    )
}

/// Render the full list. Output replaces the previous list wholesale.
pub fn render_list(records: &[&Pokemon], palette: &PaletteState) -> RenderedList {
    let html = records
        .iter()
        .map(|p| render_card(p, palette))
        .collect::<Vec<_>>()
        .join("\n");
    let bindings = records.iter().map(|p| ToggleBinding::for_record(p)).collect();
    RenderedList { html, bindings }
}

/// `<option>` elements for the type selector; the empty value clears the filter
pub fn render_type_options(categories: &[&str]) -> String {
    let mut options = vec!["<option value=''>All types</option>".to_string()];
    options.extend(categories.iter().map(|c| {
        let escaped = escape_html(c);
        format!("<option value='{escaped}'>{escaped}</option>")
    }));
    options.join("\n")
}

/// A complete page: controls plus the rendered list
pub fn render_page(records: &[&Pokemon], categories: &[&str], palette: &PaletteState) -> String {
    let list = render_list(records, palette);
    PAGE_TEMPLATE
        .replace("{{count}}", &list.len().to_string())
        .replace("{{type_options}}", &render_type_options(categories))
        .replace("{{cards}}", &list.html)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bulbasaur() -> Pokemon {
        Pokemon::new(1, "bulbasaur", "1.png")
            .with_shiny("shiny/1.png")
            .with_types(["Grass", "poison"])
            .with_description("A strange seed was planted on its back at birth.")
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<b>\"Mr. Mime\" & 'friends'</b>"),
            "&lt;b&gt;&quot;Mr. Mime&quot; &amp; &#39;friends&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_badge_token() {
        assert_eq!(badge_token("Grass"), "grass");
        assert_eq!(badge_token("Dark  Steel"), "dark-steel");
    }

    #[test]
    fn test_render_card_contents() {
        let html = render_card(&bulbasaur(), &PaletteState::new());
        assert!(html.contains("<div class='pokemon-number'>1</div>"));
        assert!(html.contains("src='1.png'"));
        assert!(html.contains("id='image-1'"));
        assert!(html.contains("<h2 class='card-title'>bulbasaur</h2>"));
        assert!(html.contains("data-number='1'"));
        assert!(html.contains("A strange seed was planted on its back at birth."));
    }

    #[test]
    fn test_badges_keep_order_and_lowercase_class() {
        let html = render_card(&bulbasaur(), &PaletteState::new());
        let grass = html.find("type-grass'>Grass<").unwrap();
        let poison = html.find("type-poison'>poison<").unwrap();
        assert!(grass < poison);
    }

    #[test]
    fn test_render_card_uses_palette() {
        let p = bulbasaur();
        let mut palette = PaletteState::new();
        palette.toggle(&p);
        let html = render_card(&p, &palette);
        assert!(html.contains("src='shiny/1.png'"));
    }

    #[test]
    fn test_render_list_bindings_follow_records() {
        let a = bulbasaur();
        let b = Pokemon::new(4, "charmander", "4.png");
        let list = render_list(&[&b, &a], &PaletteState::new());
        assert_eq!(list.len(), 2);
        assert_eq!(list.bindings[0].number, PokemonNumber(4));
        assert_eq!(list.bindings[1].image_id, "image-1");
        assert!(list.html.find("charmander").unwrap() < list.html.find("bulbasaur").unwrap());
    }

    #[test]
    fn test_render_empty_list() {
        let list = render_list(&[], &PaletteState::new());
        assert!(list.is_empty());
        assert!(list.html.is_empty());
    }

    #[test]
    fn test_render_page_fills_template() {
        let p = bulbasaur();
        let page = render_page(&[&p], &["grass", "poison"], &PaletteState::new());
        assert!(page.contains("<option value=''>All types</option>"));
        assert!(page.contains("<option value='poison'>poison</option>"));
        assert!(page.contains("class='card'"));
        assert!(!page.contains("{{"));
    }
}
