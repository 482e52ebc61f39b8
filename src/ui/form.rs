use chrono::{Local, Months, NaiveDate};

use crate::models::options::{Category, EntryKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Date,
    Category,
    Amount,
    Kind,
    Notes,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            Self::Date => Self::Category,
            Self::Category => Self::Amount,
            Self::Amount => Self::Kind,
            Self::Kind => Self::Notes,
            Self::Notes => Self::Date,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Date => Self::Notes,
            Self::Category => Self::Date,
            Self::Amount => Self::Category,
            Self::Kind => Self::Amount,
            Self::Notes => Self::Kind,
        }
    }
}

// The date field holds a real calendar date and is adjusted with keys, so
// the stored string is always ISO formatted.
#[derive(Debug)]
pub struct EntryForm {
    pub date: NaiveDate,
    pub category_index: usize,
    pub amount: String,
    pub kind_index: usize,
    pub notes: String,
    pub focused_field: FormField,
    pub categories: Vec<Category>,
    pub kinds: Vec<EntryKind>,
}

impl EntryForm {
    pub fn new() -> Self {
        EntryForm {
            date: Local::now().date_naive(),
            category_index: 0,
            amount: String::new(),
            kind_index: 0,
            notes: String::new(),
            focused_field: FormField::Date,
            categories: Category::all(),
            kinds: EntryKind::all(),
        }
    }

    // Back to defaults: today's date, first selector options, empty text
    pub fn reset(&mut self) {
        self.date = Local::now().date_naive();
        self.category_index = 0;
        self.amount.clear();
        self.kind_index = 0;
        self.notes.clear();
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    pub fn date_string(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn category(&self) -> &'static str {
        self.categories[self.category_index].as_str()
    }

    pub fn kind(&self) -> &'static str {
        self.kinds[self.kind_index].as_str()
    }

    pub fn handle_input(&mut self, c: char) {
        match self.focused_field {
            FormField::Amount => self.amount.push(c),
            FormField::Notes => self.notes.push(c),
            _ => {}
        }
    }

    pub fn handle_backspace(&mut self) {
        match self.focused_field {
            FormField::Amount => {
                self.amount.pop();
            }
            FormField::Notes => {
                self.notes.pop();
            }
            _ => {}
        }
    }

    pub fn handle_left(&mut self) {
        match self.focused_field {
            FormField::Date => {
                self.date = self.date.pred_opt().unwrap_or(self.date);
            }
            FormField::Category => {
                self.category_index = if self.category_index == 0 {
                    self.categories.len() - 1
                } else {
                    self.category_index - 1
                };
            }
            FormField::Kind => {
                self.kind_index = if self.kind_index == 0 {
                    self.kinds.len() - 1
                } else {
                    self.kind_index - 1
                };
            }
            _ => {}
        }
    }

    pub fn handle_right(&mut self) {
        match self.focused_field {
            FormField::Date => {
                self.date = self.date.succ_opt().unwrap_or(self.date);
            }
            FormField::Category => {
                self.category_index = if self.category_index >= self.categories.len() - 1 {
                    0
                } else {
                    self.category_index + 1
                };
            }
            FormField::Kind => {
                self.kind_index = if self.kind_index >= self.kinds.len() - 1 {
                    0
                } else {
                    self.kind_index + 1
                };
            }
            _ => {}
        }
    }

    pub fn handle_page_up(&mut self) {
        if self.focused_field == FormField::Date {
            self.date = self
                .date
                .checked_sub_months(Months::new(1))
                .unwrap_or(self.date);
        }
    }

    pub fn handle_page_down(&mut self) {
        if self.focused_field == FormField::Date {
            self.date = self
                .date
                .checked_add_months(Months::new(1))
                .unwrap_or(self.date);
        }
    }
}

impl Default for EntryForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_focus_cycles_through_all_fields() {
        let mut form = EntryForm::new();
        assert_eq!(form.focused_field, FormField::Date);

        for _ in 0..5 {
            form.next_field();
        }
        assert_eq!(form.focused_field, FormField::Date);

        form.prev_field();
        assert_eq!(form.focused_field, FormField::Notes);
    }

    #[test]
    fn typing_targets_the_focused_text_field() {
        let mut form = EntryForm::new();
        form.focused_field = FormField::Amount;
        form.handle_input('2');
        form.handle_input('5');
        form.handle_backspace();
        assert_eq!(form.amount, "2");

        // Typing on a selector field is ignored
        form.focused_field = FormField::Category;
        form.handle_input('x');
        assert_eq!(form.amount, "2");
        assert!(form.notes.is_empty());
    }

    #[test]
    fn selectors_wrap_around() {
        let mut form = EntryForm::new();
        form.focused_field = FormField::Kind;
        assert_eq!(form.kind(), "Income");

        form.handle_right();
        assert_eq!(form.kind(), "Expense");
        form.handle_right();
        assert_eq!(form.kind(), "Income");
        form.handle_left();
        assert_eq!(form.kind(), "Expense");
    }

    #[test]
    fn date_adjustments_stay_valid() {
        let mut form = EntryForm::new();
        form.date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();

        form.handle_left();
        assert_eq!(form.date_string(), "2025-02-28");
        form.handle_right();
        assert_eq!(form.date_string(), "2025-03-01");

        form.handle_page_up();
        assert_eq!(form.date_string(), "2025-02-01");
        form.handle_page_down();
        assert_eq!(form.date_string(), "2025-03-01");
    }

    #[test]
    fn reset_restores_defaults() {
        let mut form = EntryForm::new();
        form.focused_field = FormField::Amount;
        form.amount = "5000".to_string();
        form.notes = "coffee".to_string();
        form.category_index = 2;
        form.kind_index = 1;
        form.date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();

        form.reset();

        assert!(form.amount.is_empty());
        assert!(form.notes.is_empty());
        assert_eq!(form.category_index, 0);
        assert_eq!(form.kind_index, 0);
        assert_eq!(form.date, Local::now().date_naive());
        // Focus is left where it was
        assert_eq!(form.focused_field, FormField::Amount);
    }
}
