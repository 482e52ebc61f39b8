use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;

#[derive(Debug)]
pub struct DbConnection {
    conn: Connection,
}

impl DbConnection {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let db = DbConnection { conn };
        db.initialize()?;
        Ok(db)
    }

    pub fn get_connection(&mut self) -> &mut Connection {
        &mut self.conn
    }

    fn initialize(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS money (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                date TEXT,
                category TEXT,
                amount TEXT,
                type TEXT,
                notes TEXT
            )",
            [],
        )?;

        Ok(())
    }
}
