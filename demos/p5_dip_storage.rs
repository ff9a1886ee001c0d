//! Pattern 5: Dependency Inversion
//! Example: Handlers That Take Their Backend, Not Build It
//!
//! Run with: cargo run --example p5_dip_storage

use anyhow::Result;
use capability_design_patterns::storage::{
    DatabaseStorage, FileStorage, MemoryStorage, RecordHandler, Storage,
};

// Incorrect: the handler constructs its own concrete database. Swapping
// the medium, or testing without one, means rewriting the handler.
struct HardwiredHandler {
    db: DatabaseStorage,
}

impl HardwiredHandler {
    fn new() -> Self {
        Self {
            db: DatabaseStorage {
                connection: "prod-db:5432".to_string(),
            },
        }
    }

    fn save(&self, record: &str) {
        // Ignores the result too; a failed write vanishes.
        let _ = self.db.persist(record);
    }
}

fn main() -> Result<()> {
    println!("=== Incorrect: Handler Hard-Wired to a Database ===");
    let hardwired = HardwiredHandler::new();
    hardwired.save("order #1");

    println!("\n=== Correct: Backend Supplied at Construction ===");
    let db_handler = RecordHandler::new(DatabaseStorage {
        connection: "prod-db:5432".to_string(),
    });
    db_handler.save("order #1")?;

    let file_handler = RecordHandler::new(FileStorage {
        path: "/var/log/orders".to_string(),
    });
    file_handler.save("order #1")?;

    println!("\n=== Correct: Same Handler, In-Memory for Tests ===");
    let memory_handler = RecordHandler::new(MemoryStorage::default());
    memory_handler.save("order #1")?;
    memory_handler.save("order #2")?;
    println!("Captured records: {:?}", memory_handler.backend().records());

    Ok(())
}
