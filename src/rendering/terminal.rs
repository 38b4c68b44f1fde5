//! Colourizing outlines for the terminal

use owo_colors::OwoColorize;

use super::{Element, Render};

/// Embellish outline elements with ANSI escapes.
pub struct Terminal;

impl Render for Terminal {
    fn style(&self, element: Element, content: &str) -> String {
        match element {
            Element::Neutral => content.to_string(),
            Element::Tags => content // punctuation - #999999 (grey)
                .color(owo_colors::Rgb(0x99, 0x99, 0x99))
                .to_string(),
            Element::Identifier => content // entity.name.function - #3465a4 (blue) bold
                .color(owo_colors::Rgb(0x34, 0x65, 0xa4))
                .bold()
                .to_string(),
            Element::Operator => content // keyword.operator - #cc0000 (red) bold
                .color(owo_colors::Rgb(204, 0, 0))
                .bold()
                .to_string(),
            Element::Text => content // string - #4e9a06 (green) bold
                .color(owo_colors::Rgb(0x4e, 0x9a, 0x06))
                .bold()
                .to_string(),
        }
    }
}
