//! The storage capability and a handler that depends on it, not on any
//! concrete backend.

use std::cell::RefCell;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StorageError {
    #[error("refusing to persist an empty record")]
    EmptyRecord,
}

/// Persists one text record. Backends here only simulate their medium;
/// nothing touches disk or network.
pub trait Storage {
    fn persist(&self, record: &str) -> Result<(), StorageError>;
}

/// Simulated SQL backend.
pub struct DatabaseStorage {
    pub connection: String,
}

impl Storage for DatabaseStorage {
    fn persist(&self, record: &str) -> Result<(), StorageError> {
        if record.is_empty() {
            return Err(StorageError::EmptyRecord);
        }
        println!(
            "[db {}] INSERT INTO records VALUES ('{}')",
            self.connection, record
        );
        Ok(())
    }
}

/// Simulated flat-file backend.
pub struct FileStorage {
    pub path: String,
}

impl Storage for FileStorage {
    fn persist(&self, record: &str) -> Result<(), StorageError> {
        if record.is_empty() {
            return Err(StorageError::EmptyRecord);
        }
        println!("[file {}] append: {}", self.path, record);
        Ok(())
    }
}

/// In-memory backend; doubles as the test spy.
#[derive(Default)]
pub struct MemoryStorage {
    records: RefCell<Vec<String>>,
}

impl MemoryStorage {
    pub fn records(&self) -> Vec<String> {
        self.records.borrow().clone()
    }
}

impl Storage for MemoryStorage {
    fn persist(&self, record: &str) -> Result<(), StorageError> {
        if record.is_empty() {
            return Err(StorageError::EmptyRecord);
        }
        self.records.borrow_mut().push(record.to_string());
        Ok(())
    }
}

/// Hands records to whatever backend it was constructed with.
pub struct RecordHandler<S> {
    backend: S,
}

impl<S: Storage> RecordHandler<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn save(&self, record: &str) -> Result<(), StorageError> {
        self.backend.persist(record)
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handler_delegates_to_its_backend() {
        let handler = RecordHandler::new(MemoryStorage::default());
        handler.save("first").unwrap();
        handler.save("second").unwrap();
        assert_eq!(handler.backend().records(), vec!["first", "second"]);
    }

    #[test]
    fn every_backend_rejects_empty_records() {
        let db = DatabaseStorage {
            connection: "test".into(),
        };
        let file = FileStorage {
            path: "/tmp/records".into(),
        };
        let memory = MemoryStorage::default();
        assert_eq!(db.persist(""), Err(StorageError::EmptyRecord));
        assert_eq!(file.persist(""), Err(StorageError::EmptyRecord));
        assert_eq!(memory.persist(""), Err(StorageError::EmptyRecord));
    }

    #[test]
    fn handler_surfaces_backend_errors() {
        let handler = RecordHandler::new(MemoryStorage::default());
        assert_eq!(handler.save(""), Err(StorageError::EmptyRecord));
        assert!(handler.backend().records().is_empty());
    }
}
