//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data`, so they depend
//! only on domain ports and remain testable without I/O. The store client is
//! constructed at startup and injected here; there is no process-global
//! handle.

use std::sync::Arc;

use crate::domain::ports::PokemonsQuery;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Read port for the catalogue listing.
    pub pokemons: Arc<dyn PokemonsQuery>,
}

impl HttpState {
    /// Construct state over the given catalogue read port.
    pub fn new(pokemons: Arc<dyn PokemonsQuery>) -> Self {
        Self { pokemons }
    }
}
