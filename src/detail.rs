use crate::{controller::Record, float::FloatContent, hint::Shortcut, schema::Schema, theme::Theme};
use ratatui::{Frame, layout::Rect};

/// Read-only float showing one record: identity line on top, then each
/// schema field paired with its value.
pub struct RecordDetail {
    heading: String,
    fields: Vec<(String, String)>,
    finished: bool,
}

impl RecordDetail {
    pub fn new(record: &Record, schema: &Schema) -> Self {
        let fields = schema
            .fields()
            .iter()
            .zip(&record.values)
            .map(|(f, v)| (f.name.clone(), v.clone()))
            .collect();
        Self {
            heading: format!("Record {}  |  No {}", record.id, record.no),
            fields,
            finished: false,
        }
    }

    fn label_width(&self) -> usize {
        self.fields.iter().map(|(n, _)| n.len()).max().unwrap_or(0)
    }
}

impl FloatContent for RecordDetail {
    fn draw(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        use ratatui::{
            style::{Modifier, Style},
            text::{Line, Span, Text},
            widgets::{Block, Borders, Clear, Paragraph},
        };

        // Dim overlay
        let overlay = Block::default().style(Style::default().bg(theme.overlay_bg()));
        frame.render_widget(overlay, frame.area());
        frame.render_widget(Clear, area);

        let label_width = self.label_width();
        let mut lines = vec![
            Line::from(self.heading.clone()).style(
                Style::default()
                    .fg(theme.info_color())
                    .add_modifier(Modifier::BOLD),
            ),
            Line::from(""),
        ];
        for (name, value) in &self.fields {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{name:>label_width$}: "),
                    Style::default().fg(theme.unfocused_color()),
                ),
                Span::raw(value.clone()),
            ]));
        }

        let text = Paragraph::new(Text::from(lines)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Record Detail ")
                .border_type(ratatui::widgets::BorderType::Rounded),
        );

        frame.render_widget(text, area);
    }

    fn handle_key_event(&mut self, key: &ratatui::crossterm::event::KeyEvent) -> bool {
        use ratatui::crossterm::event::KeyCode::*;
        match key.code {
            Char('q') | Esc | Enter => {
                self.finished = true;
                true
            }
            _ => false,
        }
    }

    fn is_finished(&self) -> bool {
        self.finished
    }

    fn get_shortcut_list(&self) -> (&str, Box<[Shortcut]>) {
        ("Detail", crate::shortcuts!(("Close", ["q", "Esc"]),))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::DatasetController;
    use crate::schema::{FieldKind, FieldSpec, Schema};

    #[test]
    fn detail_pairs_schema_fields_with_record_values() {
        let schema = Schema::new(vec![
            FieldSpec::new("Vendor", FieldKind::Text, true),
            FieldSpec::new("Amount", FieldKind::Currency, false),
        ]);
        let mut c = DatasetController::new(schema, 10);
        c.seed(vec![vec!["PT Mitra Sejati".into(), "Rp 250.000".into()]]);
        let rec = c.visible_page().rows[0].clone();

        let d = RecordDetail::new(&rec, c.schema());
        assert!(d.heading.contains(&rec.id.to_string()));
        assert!(d.heading.contains("No 1"));
        assert_eq!(
            d.fields,
            vec![
                ("Vendor".to_string(), "PT Mitra Sejati".to_string()),
                ("Amount".to_string(), "Rp 250.000".to_string()),
            ]
        );
    }
}
