use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

/// One entry of the shortcut footer: a description plus the key sequences
/// that trigger it.
pub struct Shortcut {
    pub desc: &'static str,
    pub keys: &'static [&'static str],
}

impl Shortcut {
    pub fn new(desc: &'static str, keys: &'static [&'static str]) -> Self {
        Self { desc, keys }
    }

    fn to_spans(&self) -> Vec<Span<'static>> {
        let mut spans = Vec::new();
        for (i, key) in self.keys.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("/"));
            }
            spans.push(Span::styled(
                *key,
                Style::default().add_modifier(Modifier::BOLD),
            ));
        }
        spans.push(Span::raw(format!(" {}", self.desc)));
        spans
    }

    fn width(&self) -> usize {
        let keys: usize = self.keys.iter().map(|k| k.width()).sum();
        let separators = self.keys.len().saturating_sub(1);
        keys + separators + 1 + self.desc.width()
    }
}

#[macro_export]
macro_rules! shortcuts {
    ($(($desc:literal, [$($key:literal),+ $(,)?])),* $(,)?) => {
        vec![
            $($crate::hint::Shortcut::new($desc, &[$($key),+])),*
        ]
        .into_boxed_slice()
    };
}

/// Pack shortcuts into as few lines as fit the given width.
pub fn create_shortcut_list(shortcuts: Box<[Shortcut]>, width: u16) -> Vec<Line<'static>> {
    const GAP: usize = 4;
    let width = width.saturating_sub(2) as usize;
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut used = 0usize;

    for sc in shortcuts.iter() {
        let w = sc.width();
        if !current.is_empty() && used + GAP + w > width {
            lines.push(Line::from(std::mem::take(&mut current)));
            used = 0;
        }
        if !current.is_empty() {
            current.push(Span::raw(" ".repeat(GAP)));
            used += GAP;
        }
        current.extend(sc.to_spans());
        used += w;
    }
    if !current.is_empty() {
        lines.push(Line::from(current));
    }
    lines
}
