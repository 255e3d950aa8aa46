//! Configuration module - Constants for descriptor files

/// File extensions
pub mod extensions {
    /// JSON descriptor
    pub const JSON: &str = "json";

    /// TOML descriptor
    pub const TOML: &str = "toml";
}

/// Wire key names
pub mod keys {
    pub const TEMPLATE_NAME: &str = "templateName";
    pub const DESCRIPTION: &str = "description";
    pub const COLOR_PALETTE: &str = "colorPalette";
    pub const FONT_PAIRING_HEADING: &str = "fontPairing.heading";
    pub const FONT_PAIRING_BODY: &str = "fontPairing.body";
    pub const SECTIONS: &str = "sections";
    pub const HERO_IMAGE_PROMPT: &str = "heroImagePrompt";
}

/// Skeleton values for `moldura new`
pub mod defaults {
    pub const DESCRIPTION: &str = "Describe the template's intent and style";

    pub const COLOR_PALETTE: &[&str] = &["#1A1A1A", "#F5F5F5", "#E63946"];

    pub const HEADING_FONT: &str = "Poppins";

    pub const BODY_FONT: &str = "Inter";

    pub const SECTIONS: &[&str] = &["Hero", "About", "Contact"];

    pub const HERO_IMAGE_PROMPT: &str = "Describe the hero image to generate";
}
