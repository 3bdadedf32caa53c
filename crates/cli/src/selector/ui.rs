use std::io::{stderr, Write};

use crossterm::cursor::{self, MoveTo};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::style::Color::{DarkGreen, Reset};
use crossterm::style::{Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{execute, queue, ExecutableCommand};
use log::debug;

use instance_picker_core::error::Result;
use instance_picker_core::item::Item;
use instance_picker_core::selector::{Effect, Mode, SelectionResult, Session};

use super::input::translate_event;
use super::types::{HostInput, SelectorOptions, ViewportState};

struct RawModeGuard;

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // Disable raw mode on drop
        let _ = disable_raw_mode();
        let mut out = stderr();
        let _ = out.execute(DisableMouseCapture);
        let _ = out.execute(cursor::Show);
        let _ = out.execute(LeaveAlternateScreen);
    }
}

/// What is on screen besides the session itself.
#[derive(Clone, Debug, PartialEq)]
pub struct ScreenState {
    pub viewport: ViewportState,
    pub preview: Option<String>,
}

/// Runs the selector until the session ends and returns its outcome.
///
/// Drawing goes to stderr so stdout stays free for the selected key.
pub fn prompt_for_selection(
    session: &mut Session,
    options: &SelectorOptions,
) -> Result<SelectionResult> {
    let mut out = stderr();

    out.execute(EnterAlternateScreen)?;
    enable_raw_mode()?;

    let _raw_mode_guard = RawModeGuard; // When this goes out of scope, raw mode and mouse capture is disabled
    execute!(out, EnableMouseCapture, cursor::Hide)?;

    let (width, height) = terminal::size()?;
    let mut screen = ScreenState {
        viewport: ViewportState::for_terminal(width, height),
        preview: session.current_preview(),
    };

    loop {
        screen
            .viewport
            .follow(session.highlighted_index(), session.view().len());
        redraw_ui(&mut out, session, options, &screen)?;

        let Some(input) = translate_event(event::read()?) else {
            continue;
        };

        let effects = match input {
            HostInput::Key(key) => session.handle_key(key),
            HostInput::Click { column, row } => match screen.viewport.index_at(column, row) {
                Some(index) if index < session.view().len() => session.highlight(index),
                _ => vec![],
            },
            HostInput::Resize { width, height } => {
                let offset = screen.viewport.offset;
                screen.viewport = ViewportState::for_terminal(width, height);
                screen.viewport.offset = offset;
                vec![]
            }
        };

        if let Some(result) = apply_effects(&mut out, &mut screen, effects)? {
            return Ok(result);
        }
    }
}

/// Applies effects in order. Returns the outcome once a terminate effect is seen.
pub fn apply_effects<W: Write>(
    out: &mut W,
    screen: &mut ScreenState,
    effects: Vec<Effect>,
) -> Result<Option<SelectionResult>> {
    for effect in effects {
        match effect {
            Effect::ShowPreview(text) => screen.preview = Some(text),
            Effect::ClearPreview => screen.preview = None,
            Effect::Bell => execute!(out, Print("\x07"))?,
            Effect::Terminate(result) => {
                debug!("Selector finished with {result:?}");
                return Ok(Some(result));
            }
        }
    }

    Ok(None)
}

/// Draws the whole selector.
pub fn redraw_ui<W: Write>(
    out: &mut W,
    session: &Session,
    options: &SelectorOptions,
    screen: &ScreenState,
) -> Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;

    print_header(out, session, options, screen.viewport.width)?;

    if session.view().is_empty() {
        queue!(
            out,
            MoveTo(0, 1),
            SetForegroundColor(Color::Red),
            Print("No matching instances!".to_string()),
            SetAttribute(Attribute::Reset),
            SetForegroundColor(Reset),
        )?;
    } else {
        print_items_with_highlight(out, session, options, &screen.viewport)?;
    }

    print_preview(out, options, screen)?;

    if session.mode() == Mode::Filtering {
        queue!(
            out,
            MoveTo(0, screen.viewport.height + 1),
            SetAttribute(Attribute::Bold),
            Print(format!("Filter: {}", session.query())),
            SetAttribute(Attribute::Reset)
        )?;
    }

    out.flush()?;
    Ok(())
}

/// Header text: title, key hints and the highlight position.
#[must_use]
pub fn header_text(session: &Session, options: &SelectorOptions) -> String {
    let count = session.view().len();
    let position = match session.highlighted_index() {
        Some(index) => pad_to_width_of(index + 1, count),
        None => pad_to_width_of("-", count),
    };

    let instructions = match session.mode() {
        Mode::Filtering => "<esc>: Stop Filtering   |   <enter>: Select Top Match".to_string(),
        Mode::Browsing if options.show_search_hint => {
            "(Press \"/\" to search)   |   <esc>: Quit".to_string()
        }
        Mode::Browsing => "<esc>: Quit".to_string(),
    };

    format!(
        "{}   |   {}   |   {}/{}",
        options.title, instructions, position, count
    )
}

fn print_header<W: Write>(
    out: &mut W,
    session: &Session,
    options: &SelectorOptions,
    width: u16,
) -> Result<()> {
    let left_padding_size = 2usize;
    let left_padding = " ".repeat(left_padding_size);

    let header = truncate(
        &header_text(session, options),
        (width as usize).saturating_sub(left_padding_size),
    );
    let right_padding =
        " ".repeat((width as usize).saturating_sub(left_padding_size + header.chars().count()));

    queue!(
        out,
        MoveTo(0, 0),
        SetBackgroundColor(DarkGreen),
        Print(left_padding),
        Print(header),
        Print(right_padding),
        SetBackgroundColor(Reset),
        SetForegroundColor(Reset),
    )?;

    Ok(())
}

/// Pad a value to match the width of the largest value
fn pad_to_width_of<T: std::fmt::Display>(value: T, max_number: usize) -> String {
    let width = format!("{max_number}").len();
    format!("{:>width$}", value.to_string())
}

fn truncate(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}

fn write_item_row<W: Write>(
    out: &mut W,
    row: u16,
    item: &Item,
    is_highlighted: bool,
    options: &SelectorOptions,
    width: u16,
) -> Result<()> {
    let content = truncate(item.label(), width as usize);
    let padding = " ".repeat((width as usize).saturating_sub(content.chars().count()));

    queue!(out, MoveTo(0, row))?;

    if is_highlighted {
        queue!(
            out,
            SetAttribute(Attribute::Bold),
            SetBackgroundColor(options.highlight_color),
            SetForegroundColor(Color::Black),
        )?;
    }

    queue!(
        out,
        Print(content),
        Print(padding),
        SetAttribute(Attribute::Reset),
        SetBackgroundColor(Reset),
        SetForegroundColor(Reset),
    )?;

    Ok(())
}

fn print_items_with_highlight<W: Write>(
    out: &mut W,
    session: &Session,
    options: &SelectorOptions,
    viewport: &ViewportState,
) -> Result<()> {
    let highlight = session.highlighted_index();

    let visible_items = session
        .visible_items()
        .enumerate()
        .skip(viewport.offset)
        .take(viewport.height as usize);

    for (row, (index, item)) in visible_items.enumerate() {
        write_item_row(
            out,
            row as u16 + 1,
            item,
            highlight == Some(index),
            options,
            viewport.list_width(),
        )?;
    }

    Ok(())
}

fn print_preview<W: Write>(
    out: &mut W,
    options: &SelectorOptions,
    screen: &ScreenState,
) -> Result<()> {
    let viewport = &screen.viewport;
    let column = viewport.preview_column();
    let width = viewport.preview_width() as usize;

    if width == 0 || viewport.height == 0 {
        return Ok(());
    }

    // Separator between the list and the preview
    for row in 1..=viewport.height {
        queue!(out, MoveTo(viewport.list_width(), row), Print("│"))?;
    }

    queue!(
        out,
        MoveTo(column, 1),
        SetAttribute(Attribute::Bold),
        Print(truncate(&options.preview_title, width)),
        SetAttribute(Attribute::Reset),
    )?;

    let Some(preview) = &screen.preview else {
        return Ok(());
    };

    for (row, line) in preview
        .lines()
        .take(viewport.height.saturating_sub(1) as usize)
        .enumerate()
    {
        queue!(out, MoveTo(column, row as u16 + 2), Print(truncate(line, width)))?;
    }

    Ok(())
}
