//! Rendering backends.
//!
//! Paint commands are replayed onto a [`CellSink`] by [`replay`]; a backend only has to say how
//! a single cell is written. That keeps `ratatui` types inside `terminal`.

use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::painter::{BorderKind, PaintCmd};
use crate::ui::core::style::Style;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

pub trait Backend {
    fn draw(&mut self, area: Rect, cmds: &[PaintCmd]);

    fn set_cursor(&mut self, pos: Option<Pos>);
}

/// A grid of cells that paint commands can be written into.
pub trait CellSink {
    fn area(&self) -> Rect;

    fn put(&mut self, x: u16, y: u16, symbol: &str, style: Style);

    /// Patch the style of a cell, keeping its symbol.
    fn restyle(&mut self, x: u16, y: u16, style: Style);
}

pub fn replay(sink: &mut dyn CellSink, cmds: &[PaintCmd]) {
    for cmd in cmds {
        match cmd {
            PaintCmd::FillRect { rect, style } => fill_rect(sink, *rect, *style),
            PaintCmd::StyleRect { rect, style } => style_rect(sink, *rect, *style),
            PaintCmd::Text {
                pos,
                text,
                style,
                clip,
            } => draw_text(sink, *pos, text, *style, *clip),
            PaintCmd::Border { rect, style, kind } => draw_border(sink, *rect, *style, *kind),
        }
    }
}

fn fill_rect(sink: &mut dyn CellSink, rect: Rect, style: Style) {
    let clip = rect.intersect(sink.area());
    for y in clip.y..clip.bottom() {
        for x in clip.x..clip.right() {
            sink.put(x, y, " ", style);
        }
    }
}

fn style_rect(sink: &mut dyn CellSink, rect: Rect, style: Style) {
    let clip = rect.intersect(sink.area());
    for y in clip.y..clip.bottom() {
        for x in clip.x..clip.right() {
            sink.restyle(x, y, style);
        }
    }
}

fn draw_text(sink: &mut dyn CellSink, pos: Pos, text: &str, style: Style, clip: Option<Rect>) {
    let clip = clip.unwrap_or_else(|| sink.area()).intersect(sink.area());
    if clip.is_empty() || pos.y < clip.y || pos.y >= clip.bottom() {
        return;
    }

    let y = pos.y;
    let mut x = pos.x;
    for g in text.graphemes(true) {
        let w = UnicodeWidthStr::width(g) as u16;
        if w == 0 {
            continue;
        }
        if x >= clip.right() {
            break;
        }
        // Wide glyphs are drawn whole or not at all.
        if x.saturating_add(w) > clip.right() {
            break;
        }
        if x < clip.x {
            x = x.saturating_add(w);
            continue;
        }

        sink.put(x, y, g, style);
        for dx in 1..w {
            sink.put(x + dx, y, " ", style);
        }
        x = x.saturating_add(w);
    }
}

fn draw_border(sink: &mut dyn CellSink, rect: Rect, style: Style, kind: BorderKind) {
    if rect.w < 2 || rect.h < 2 {
        return;
    }

    let (tl, tr, bl, br, h, v) = kind.glyphs();
    let mut put = |x: u16, y: u16, ch: char| {
        let mut tmp = [0u8; 4];
        sink.put(x, y, ch.encode_utf8(&mut tmp), style);
    };

    let right = rect.right() - 1;
    let bottom = rect.bottom() - 1;

    put(rect.x, rect.y, tl);
    put(right, rect.y, tr);
    put(rect.x, bottom, bl);
    put(right, bottom, br);
    for x in rect.x + 1..right {
        put(x, rect.y, h);
        put(x, bottom, h);
    }
    for y in rect.y + 1..bottom {
        put(rect.x, y, v);
        put(right, y, v);
    }
}

#[cfg(feature = "tui")]
#[path = "ratatui.rs"]
pub mod terminal;
