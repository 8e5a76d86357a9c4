//! Demo seed data for an empty engine.
//!
//! # Responsibility
//! - Populate the starter catalog and user registry.
//!
//! # Invariants
//! - Called once by the process entry point, never implicitly.

use crate::engine::CirculationEngine;

/// Seeds the two starter books and two starter users.
pub fn seed_demo_data(engine: &mut CirculationEngine) {
    engine.add_book(
        "Dom Casmurro",
        "Machado de Assis",
        1899,
        "9788535910682",
        "Literatura Brasileira",
    );
    engine.add_book(
        "O Cortiço",
        "Aluísio Azevedo",
        1890,
        "9788535910699",
        "Literatura Brasileira",
    );
    engine.register_user("João Silva", "joao@email.com", "11999999999");
    engine.register_user("Maria Santos", "maria@email.com", "11988888888");
}
