use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
    widgets::ListItem,
};

use crate::models::options::EntryKind;
use crate::utils::currency::format_rupiah;

#[derive(Debug, Clone)]
pub struct MoneyRecord {
    pub id: i64,
    pub date: String,
    pub category: String,
    pub amount: String,
    pub kind: String,
    pub notes: String,
}

impl MoneyRecord {
    pub fn to_list_item(&self) -> ListItem {
        let amount_style = if self.kind == EntryKind::Income.as_str() {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Red)
        };

        ListItem::new(Line::from(vec![
            Span::raw(format!("{:<12}", self.date)),
            Span::styled(format!("{:>18} ", format_rupiah(&self.amount)), amount_style),
            Span::raw(format!("{:<15}", self.category)),
            Span::raw(format!("{:<9}", self.kind)),
            Span::raw(self.notes.as_str()),
        ]))
    }
}
