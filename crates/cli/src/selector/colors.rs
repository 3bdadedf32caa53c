use crossterm::style::Color;
use instance_picker_core::error::{Error, Result};

/// Highlight used when the environment is flagged as scary
pub const SCARY_HIGHLIGHT: Color = Color::Red;

/// Converts a color name to a terminal color
pub fn color_from_name(name: &str) -> Result<Color> {
    Ok(match name.to_lowercase().as_str() {
        "black" => Color::Black,
        "darkgrey" => Color::DarkGrey,
        "red" => Color::Red,
        "darkred" => Color::DarkRed,
        "green" => Color::Green,
        "darkgreen" => Color::DarkGreen,
        "yellow" => Color::Yellow,
        "darkyellow" => Color::DarkYellow,
        "blue" => Color::Blue,
        "darkblue" => Color::DarkBlue,
        "magenta" => Color::Magenta,
        "darkmagenta" => Color::DarkMagenta,
        "cyan" => Color::Cyan,
        "darkcyan" => Color::DarkCyan,
        "white" => Color::White,
        "grey" => Color::Grey,
        _ => return Err(Error::UnknownColorName(name.to_string())),
    })
}

/// Picks the highlight background: red when scary, the named color otherwise
pub fn highlight_color(name: &str, scary: bool) -> Result<Color> {
    if scary {
        return Ok(SCARY_HIGHLIGHT);
    }
    color_from_name(name)
}
