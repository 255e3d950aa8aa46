//! Descriptor module - The website template data contract
//!
//! A `WebsiteTemplate` is a plain record. It carries no behavior: it is built
//! by some producer (authoring tool, generator) and read by some consumer
//! (renderer, image generator). Colors and section labels are free text.

use serde::{Deserialize, Serialize};

use super::config::keys;

/// Design description of one website template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteTemplate {
    /// Human-readable identifier
    pub template_name: String,

    /// Free-form summary of intent and style
    pub description: String,

    /// Colors in order, primary first
    pub color_palette: Vec<String>,

    pub font_pairing: FontPairing,

    /// Page sections in presentation order
    pub sections: Vec<String>,

    /// Natural-language prompt for the hero image
    pub hero_image_prompt: String,
}

/// Heading/body typography selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontPairing {
    pub heading: String,
    pub body: String,
}

impl WebsiteTemplate {
    /// Logical field paths in declaration order
    pub fn field_names() -> [&'static str; 7] {
        [
            keys::TEMPLATE_NAME,
            keys::DESCRIPTION,
            keys::COLOR_PALETTE,
            keys::FONT_PAIRING_HEADING,
            keys::FONT_PAIRING_BODY,
            keys::SECTIONS,
            keys::HERO_IMAGE_PROMPT,
        ]
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn modern_portfolio() -> WebsiteTemplate {
        WebsiteTemplate {
            template_name: "Modern Portfolio".to_string(),
            description: "A minimalist portfolio template".to_string(),
            color_palette: vec![
                "#1A1A1A".to_string(),
                "#F5F5F5".to_string(),
                "#E63946".to_string(),
            ],
            font_pairing: FontPairing {
                heading: "Poppins".to_string(),
                body: "Inter".to_string(),
            },
            sections: vec![
                "Hero".to_string(),
                "About".to_string(),
                "Projects".to_string(),
                "Contact".to_string(),
            ],
            hero_image_prompt: "A dim studio desk with a laptop and coffee, moody lighting"
                .to_string(),
        }
    }

    #[test]
    fn fields_read_back_exactly() {
        let t = modern_portfolio();
        assert_eq!(t.template_name, "Modern Portfolio");
        assert_eq!(t.description, "A minimalist portfolio template");
        assert_eq!(t.color_palette, ["#1A1A1A", "#F5F5F5", "#E63946"]);
        assert_eq!(t.font_pairing.heading, "Poppins");
        assert_eq!(t.font_pairing.body, "Inter");
        assert_eq!(t.sections, ["Hero", "About", "Projects", "Contact"]);
        assert_eq!(
            t.hero_image_prompt,
            "A dim studio desk with a laptop and coffee, moody lighting"
        );
    }

    #[test]
    fn equality_is_structural() {
        let a = modern_portfolio();
        let mut b = a.clone();
        assert_eq!(a, b);

        b.sections.swap(0, 1);
        assert_ne!(a, b);
    }

    #[test]
    fn serializes_with_camel_case_keys_and_nested_fonts() {
        let value = serde_json::to_value(modern_portfolio()).unwrap();
        let obj = value.as_object().unwrap();

        let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            [
                "colorPalette",
                "description",
                "fontPairing",
                "heroImagePrompt",
                "sections",
                "templateName"
            ]
        );
        assert_eq!(value["fontPairing"]["heading"], "Poppins");
        assert_eq!(value["fontPairing"]["body"], "Inter");
    }

    #[test]
    fn palette_is_free_text_and_may_be_empty() {
        let mut t = modern_portfolio();
        t.color_palette = vec!["cornflower blue".to_string(), "rgb(0,0,0)".to_string()];
        t.sections.clear();

        let json = serde_json::to_string(&t).unwrap();
        let back: WebsiteTemplate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn field_names_list_all_seven_paths() {
        let names = WebsiteTemplate::field_names();
        assert_eq!(names[0], "templateName");
        assert!(names.contains(&"fontPairing.heading"));
        assert!(names.contains(&"fontPairing.body"));
        assert_eq!(names[6], "heroImagePrompt");
    }
}
