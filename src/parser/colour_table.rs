//! `\colortbl` group parsing.

use super::control::{next_control, Control};
use crate::model::{Colour, ColourTheme};

/// One `;`-terminated clause of the colour table.
#[derive(Debug, Default)]
struct Clause {
    colour: Colour,
    touched: bool,
}

impl Clause {
    fn apply(&mut self, name: &str, value: Option<i32>) {
        let n = value.unwrap_or(0);
        match name {
            "red" => self.colour.red = component(n),
            "green" => self.colour.green = component(n),
            "blue" => self.colour.blue = component(n),
            "ctint" => self.colour.tint = Some(n),
            "cshade" => self.colour.shade = Some(n),
            _ => match ColourTheme::from_control(name) {
                Some(theme) => self.colour.theme = Some(theme),
                None => {
                    log::debug!("Ignoring {} in colour table", name);
                    return;
                }
            },
        }
        self.touched = true;
    }
}

fn component(value: i32) -> u8 {
    // clamped into 0..=255 so the cast is lossless
    value.clamp(0, 255) as u8
}

/// Parse a colour table starting just after `\colortbl`.
///
/// Returns the position of the closing brace, or the input length when the
/// table is never closed.
pub fn parse_colour_table(src: &[char], mut pos: usize, colours: &mut Vec<Colour>) -> usize {
    let mut clause = Clause::default();

    while let Some(&c) = src.get(pos) {
        match c {
            ';' => {
                let entry = if clause.touched {
                    clause.colour
                } else if colours.is_empty() {
                    Colour::reader_default()
                } else {
                    Colour::default()
                };
                colours.push(entry);
                clause = Clause::default();
            }
            '}' => {
                if clause.touched {
                    colours.push(clause.colour);
                }
                return pos;
            }
            '\\' => {
                let (control, next) = next_control(src, pos + 1);
                if let Control::Word { name, value } = control {
                    clause.apply(&name, value);
                }
                pos = next;
                continue;
            }
            _ => {}
        }
        pos += 1;
    }

    if clause.touched {
        colours.push(clause.colour);
    }
    src.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(src: &str) -> (Vec<Colour>, usize) {
        let chars: Vec<char> = src.chars().collect();
        let mut colours = Vec::new();
        let end = parse_colour_table(&chars, 0, &mut colours);
        (colours, end)
    }

    #[test]
    fn test_rgb_components() {
        let (colours, end) = parse(r"\red2\green55\blue23;}");
        assert_eq!(colours[0].rgb(), (2, 55, 23));
        assert_eq!(end, 21);
    }

    #[test]
    fn test_tint_and_shade() {
        let (colours, _) = parse(r"\ctint22\red2\green55\blue23;}");
        assert_eq!(colours[0].tint, Some(22));

        let (colours, _) = parse(r"\cshade11\red2\green55\blue23;}");
        assert_eq!(colours[0].shade, Some(11));
    }

    #[test]
    fn test_theme_colours() {
        for (word, theme) in [
            ("cmaindarkone", ColourTheme::MainDarkOne),
            ("cmainlightone", ColourTheme::MainLightOne),
            ("cmaindarktwo", ColourTheme::MainDarkTwo),
            ("cmainlighttwo", ColourTheme::MainLightTwo),
            ("caccentone", ColourTheme::AccentOne),
            ("caccenttwo", ColourTheme::AccentTwo),
            ("caccentthree", ColourTheme::AccentThree),
            ("caccentfour", ColourTheme::AccentFour),
            ("caccentfive", ColourTheme::AccentFive),
            ("caccentsix", ColourTheme::AccentSix),
            ("chyperlink", ColourTheme::Hyperlink),
            ("cfollowedhyperlink", ColourTheme::FollowedHyperlink),
            ("cbackgroundone", ColourTheme::BackgroundOne),
            ("ctextone", ColourTheme::TextOne),
            ("cbackgroundtwo", ColourTheme::BackgroundTwo),
            ("ctexttwo", ColourTheme::TextTwo),
        ] {
            let (colours, _) = parse(&format!("\\{}\\red11\\green22\\blue33;}}", word));
            assert_eq!(colours[0].theme, Some(theme), "{}", word);
        }
    }

    #[test]
    fn test_line_breaks_ignored() {
        let (colours, _) = parse("\\cshade11\\red2\\green55\r\n\\blue23;}");
        assert_eq!(colours[0].shade, Some(11));
        assert_eq!(colours[0].rgb(), (2, 55, 23));
    }

    #[test]
    fn test_spaces_between_clauses() {
        let (colours, _) = parse(r"\red0\green0\blue0;  \red127\green2\blue255;}");
        assert_eq!(colours.len(), 2);
        assert_eq!(colours[0].rgb(), (0, 0, 0));
        assert_eq!(colours[1].rgb(), (127, 2, 255));
    }

    #[test]
    fn test_leading_empty_clause_is_default() {
        let (colours, _) = parse(r";\red255\green0\blue0;\red0\green0\blue255;}");
        assert_eq!(colours.len(), 3);
        assert!(colours[0].use_default);
        assert_eq!(colours[1].rgb(), (255, 0, 0));
        assert!(!colours[1].use_default);
        assert_eq!(colours[2].rgb(), (0, 0, 255));
    }

    #[test]
    fn test_later_empty_clause_is_black() {
        let (colours, _) = parse(r"\red9;;}");
        assert_eq!(colours.len(), 2);
        assert_eq!(colours[1], Colour::default());
        assert!(!colours[1].use_default);
    }

    #[test]
    fn test_components_clamped() {
        let (colours, _) = parse(r"\red300\green-4\blue17;}");
        assert_eq!(colours[0].rgb(), (255, 0, 17));
    }

    #[test]
    fn test_trailing_clause_without_terminator() {
        let (colours, _) = parse(r"\red1\green2\blue3}");
        assert_eq!(colours, vec![Colour::new(1, 2, 3)]);
    }
}
