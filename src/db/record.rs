use anyhow::Result;
use rusqlite::{params, Connection};

use crate::models::record::MoneyRecord;

#[derive(Debug)]
pub struct NewRecord<'a> {
    pub date: &'a str,
    pub category: &'a str,
    pub amount: &'a str,
    pub kind: &'a str,
    pub notes: &'a str,
}

pub struct RecordStore<'a> {
    conn: &'a mut Connection,
}

impl<'a> RecordStore<'a> {
    pub fn new(conn: &'a mut Connection) -> Self {
        Self { conn }
    }

    pub fn insert(&mut self, record: &NewRecord) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO money (date, category, amount, type, notes) VALUES (?, ?, ?, ?, ?)",
            params![
                record.date,
                record.category,
                record.amount,
                record.kind,
                record.notes
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    // Same-date rows come back newest-inserted first
    pub fn get_all(&mut self) -> Result<Vec<MoneyRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, date, category, amount, type, notes FROM money
             ORDER BY date DESC, id DESC",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(MoneyRecord {
                id: row.get(0)?,
                date: row.get(1)?,
                category: row.get(2)?,
                amount: row.get(3)?,
                kind: row.get(4)?,
                notes: row.get(5)?,
            })
        })?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }

        Ok(records)
    }
}
