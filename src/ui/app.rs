use std::path::{Path, PathBuf};

use anyhow::Result;
use ratatui::widgets::ListState;

use crate::db::connection::DbConnection;
use crate::db::record::{NewRecord, RecordStore};
use crate::models::record::MoneyRecord;
use crate::ui::form::EntryForm;
use crate::utils::csv;

#[derive(Debug, PartialEq)]
pub enum InputMode {
    Browsing,
    Editing,
    ExportPrompt,
}

#[derive(Debug)]
pub enum Notice {
    ValidationError(String),
    ExportDone(PathBuf),
    About,
}

#[derive(Debug)]
pub struct App {
    pub db: DbConnection,
    pub records: Vec<MoneyRecord>,
    pub form: EntryForm,
    pub input_mode: InputMode,
    pub list_state: ListState,
    pub notice: Option<Notice>,
    pub export_input: String,
}

impl App {
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let db = DbConnection::new(db_path)?;

        let mut app = App {
            db,
            records: Vec::new(),
            form: EntryForm::new(),
            input_mode: InputMode::Browsing,
            list_state: ListState::default(),
            notice: None,
            export_input: String::new(),
        };

        app.reload()?;
        Ok(app)
    }

    // Full-replace refresh of the table from the store
    pub fn reload(&mut self) -> Result<()> {
        self.records = RecordStore::new(self.db.get_connection()).get_all()?;

        if self.records.is_empty() {
            self.list_state.select(None);
        } else {
            let selected = self.list_state.selected().unwrap_or(0);
            self.list_state
                .select(Some(selected.min(self.records.len() - 1)));
        }

        Ok(())
    }

    pub fn add_entry(&mut self) -> Result<()> {
        let amount = self.form.amount.trim().to_string();
        if amount.is_empty() {
            self.notice = Some(Notice::ValidationError(
                "Amount cannot be empty.".to_string(),
            ));
            return Ok(());
        }

        let date = self.form.date_string();
        let notes = self.form.notes.trim().to_string();

        RecordStore::new(self.db.get_connection()).insert(&NewRecord {
            date: &date,
            category: self.form.category(),
            amount: &amount,
            kind: self.form.kind(),
            notes: &notes,
        })?;

        self.reload()?;
        self.form.reset();
        Ok(())
    }

    pub fn begin_export(&mut self) {
        self.export_input.clear();
        self.input_mode = InputMode::ExportPrompt;
    }

    pub fn cancel_export(&mut self) {
        self.export_input.clear();
        self.input_mode = InputMode::Browsing;
    }

    pub fn submit_export(&mut self) -> Result<()> {
        let entered = self.export_input.trim().to_string();
        self.export_input.clear();
        self.input_mode = InputMode::Browsing;

        // An empty path is a cancelled save dialog
        if entered.is_empty() {
            return Ok(());
        }

        let path = csv::ensure_csv_extension(&entered);
        let records = RecordStore::new(self.db.get_connection()).get_all()?;
        csv::export_records(&records, &path)?;

        self.notice = Some(Notice::ExportDone(path));
        Ok(())
    }

    pub fn show_about(&mut self) {
        self.notice = Some(Notice::About);
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn next(&mut self) {
        let i = match self.list_state.selected() {
            Some(i) => {
                if i >= self.records.len().saturating_sub(1) {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let i = match self.list_state.selected() {
            Some(i) => {
                if i == 0 {
                    self.records.len().saturating_sub(1)
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_app() -> (TempDir, App) {
        let temp_dir = TempDir::new().unwrap();
        let app = App::new(temp_dir.path().join("money.db")).unwrap();
        (temp_dir, app)
    }

    #[test]
    fn add_entry_inserts_one_row_and_resets_form() {
        let (_temp_dir, mut app) = create_test_app();
        app.form.amount = "  2500 ".to_string();
        app.form.notes = " lunch ".to_string();
        app.form.category_index = 1;
        app.form.kind_index = 1;

        app.add_entry().unwrap();

        assert_eq!(app.records.len(), 1);
        assert_eq!(app.records[0].amount, "2500");
        assert_eq!(app.records[0].notes, "lunch");
        assert_eq!(app.records[0].category, "Transport");
        assert_eq!(app.records[0].kind, "Expense");
        assert!(app.notice.is_none());

        assert!(app.form.amount.is_empty());
        assert!(app.form.notes.is_empty());
        assert_eq!(app.form.category_index, 0);
        assert_eq!(app.form.kind_index, 0);
    }

    #[test]
    fn blank_amount_is_rejected_without_touching_store() {
        let (_temp_dir, mut app) = create_test_app();
        app.form.amount = "   ".to_string();
        app.form.notes = "kept".to_string();

        app.add_entry().unwrap();

        assert!(app.records.is_empty());
        assert!(matches!(app.notice, Some(Notice::ValidationError(_))));
        // The form is not cleared on a failed add
        assert_eq!(app.form.notes, "kept");
    }

    #[test]
    fn table_shows_records_in_date_descending_order() {
        let (_temp_dir, mut app) = create_test_app();

        for (date, amount) in [
            ("2025-06-01", "100"),
            ("2025-06-03", "300"),
            ("2025-06-02", "200"),
        ] {
            app.form.date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
            app.form.amount = amount.to_string();
            app.add_entry().unwrap();
        }

        let amounts: Vec<&str> = app.records.iter().map(|r| r.amount.as_str()).collect();
        assert_eq!(amounts, ["300", "200", "100"]);
    }

    #[test]
    fn export_writes_store_contents_to_chosen_path() {
        let (temp_dir, mut app) = create_test_app();
        app.form.amount = "1000000".to_string();
        app.add_entry().unwrap();

        app.begin_export();
        assert_eq!(app.input_mode, InputMode::ExportPrompt);
        app.export_input = temp_dir
            .path()
            .join("export")
            .to_string_lossy()
            .into_owned();
        app.submit_export().unwrap();

        let expected = temp_dir.path().join("export.csv");
        assert!(expected.exists());
        assert_eq!(app.input_mode, InputMode::Browsing);
        match &app.notice {
            Some(Notice::ExportDone(path)) => assert_eq!(path, &expected),
            other => panic!("expected export notice, got {other:?}"),
        }

        let contents = std::fs::read_to_string(&expected).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0], "Date,Category,Amount,Type,Notes");
        assert!(lines[1].contains("1000000"));
    }

    #[test]
    fn empty_export_path_is_a_no_op() {
        let (_temp_dir, mut app) = create_test_app();
        app.begin_export();
        app.export_input = "   ".to_string();

        app.submit_export().unwrap();

        assert_eq!(app.input_mode, InputMode::Browsing);
        assert!(app.notice.is_none());
    }

    #[test]
    fn reopening_the_store_shows_the_same_records() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("money.db");

        {
            let mut app = App::new(&path).unwrap();
            app.form.amount = "42".to_string();
            app.add_entry().unwrap();
        }

        let app = App::new(&path).unwrap();
        assert_eq!(app.records.len(), 1);
        assert_eq!(app.records[0].amount, "42");
        assert_eq!(app.list_state.selected(), Some(0));
    }
}
