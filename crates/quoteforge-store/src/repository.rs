//! # Quote/Client Repository
//!
//! The client → quote-history tree and its mutations. Every successful
//! mutation rewrites the quotes slot in full; a failed write rolls the
//! in-memory tree back, so repository state and slot state never diverge
//! by more than the write that is currently failing.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Repository Operations                               │
//! │                                                                         │
//! │  Host Action               Repository Call        On unknown id        │
//! │  ───────────               ───────────────        ─────────────        │
//! │  Create client ──────────► add_client()           (validates name)     │
//! │  Rename client ──────────► update_client()        benign no-op         │
//! │  Remove client ──────────► delete_client()        benign no-op         │
//! │  Save a quote ───────────► add_quote()            HARD ERROR           │
//! │  Remove a quote ─────────► delete_quote()         benign no-op         │
//! │  Browse ─────────────────► list_clients()/get_client()                 │
//! │                                                                         │
//! │  add_quote is the one hard failure: a quote cannot synthesize its      │
//! │  own owner, so an unknown client id leaves the tree untouched.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use std::path::PathBuf;
use tracing::{debug, info, warn};
use uuid::Uuid;

use quoteforge_core::validation::validate_client_name;
use quoteforge_core::{Client, NewQuote, Quote, QuotesData};

use crate::error::{StoreError, StoreResult};
use crate::slot::JsonSlot;

// =============================================================================
// Quote Repository
// =============================================================================

/// Repository over the quotes storage slot.
///
/// Construction performs the one-time load; an instance that exists has
/// finished loading and accepts mutations.
#[derive(Debug)]
pub struct QuoteRepository {
    slot: JsonSlot,
    data: QuotesData,
}

impl QuoteRepository {
    /// Opens the repository, loading the slot (or its seed document, or an
    /// empty tree) and persisting the loaded state.
    pub fn open(slot_path: impl Into<PathBuf>, seed_path: Option<PathBuf>) -> Self {
        let slot = JsonSlot::new(slot_path);
        let data = Self::load_initial(&slot, seed_path.as_ref());

        if let Err(err) = slot.write(&data) {
            warn!(error = %err, "Could not persist loaded quote tree");
        }

        QuoteRepository { slot, data }
    }

    fn load_initial(slot: &JsonSlot, seed_path: Option<&PathBuf>) -> QuotesData {
        match slot.read::<QuotesData>() {
            Ok(Some(data)) => {
                info!(
                    path = %slot.path().display(),
                    clients = data.clients.len(),
                    "Loaded quotes slot"
                );
                return data;
            }
            Ok(None) => debug!("Quotes slot empty, trying seed document"),
            Err(err) => warn!(error = %err, "Quotes slot unreadable, trying seed document"),
        }

        if let Some(seed) = seed_path {
            match JsonSlot::new(seed).read::<QuotesData>() {
                Ok(Some(data)) => {
                    info!(path = %seed.display(), "Loaded quotes seed document");
                    return data;
                }
                Ok(None) => debug!(path = %seed.display(), "Seed document not present"),
                Err(err) => warn!(error = %err, "Seed document unreadable"),
            }
        }

        info!("Starting with an empty client tree");
        QuotesData::default()
    }

    // -------------------------------------------------------------------------
    // Client operations
    // -------------------------------------------------------------------------

    /// Creates a client with a fresh id and an empty quote history.
    ///
    /// ## Errors
    /// * `InvalidClient` - name empty after trimming
    pub fn add_client(&mut self, name: &str, email: &str) -> StoreResult<Client> {
        let name = validate_client_name(name)?;
        debug!(name = %name, "Adding client");

        let client = Client {
            id: new_entity_id(),
            name,
            email: email.to_string(),
            quotes: Vec::new(),
        };

        let snapshot = self.data.clone();
        self.data.clients.insert(client.id.clone(), client.clone());
        self.persist_or_rollback(snapshot)?;

        Ok(client)
    }

    /// Replaces a client's name and email in place, preserving its id and
    /// quote history. Unknown ids are a benign no-op.
    pub fn update_client(&mut self, id: &str, name: &str, email: &str) -> StoreResult<()> {
        if !self.data.clients.contains_key(id) {
            debug!(id = %id, "update_client: unknown id, nothing to do");
            return Ok(());
        }

        let snapshot = self.data.clone();
        if let Some(client) = self.data.clients.get_mut(id) {
            client.name = name.to_string();
            client.email = email.to_string();
        }
        self.persist_or_rollback(snapshot)
    }

    /// Removes a client and, with it, every quote it owns.
    /// Unknown ids are a benign no-op.
    pub fn delete_client(&mut self, id: &str) -> StoreResult<()> {
        if !self.data.clients.contains_key(id) {
            debug!(id = %id, "delete_client: unknown id, nothing to do");
            return Ok(());
        }

        debug!(id = %id, "Deleting client");
        let snapshot = self.data.clone();
        self.data.clients.remove(id);
        self.persist_or_rollback(snapshot)
    }

    // -------------------------------------------------------------------------
    // Quote operations
    // -------------------------------------------------------------------------

    /// Stores a finalized quote under `client_id`, assigning a fresh id and
    /// the current calendar date, and appending it to the end of the
    /// client's history.
    ///
    /// ## Errors
    /// * `UnknownClient` - no such client; the tree is left unchanged
    pub fn add_quote(&mut self, client_id: &str, new_quote: NewQuote) -> StoreResult<Quote> {
        if !self.data.clients.contains_key(client_id) {
            return Err(StoreError::unknown_client(client_id));
        }

        let quote = Quote {
            id: new_entity_id(),
            created_at: Utc::now().date_naive(),
            items: new_quote.items,
            modifiers: new_quote.modifiers,
            subtotal: new_quote.subtotal,
            tax_amount: new_quote.tax_amount,
            total: new_quote.total,
        };
        debug!(client = %client_id, quote = %quote.id, total = quote.total, "Adding quote");

        let snapshot = self.data.clone();
        if let Some(client) = self.data.clients.get_mut(client_id) {
            client.quotes.push(quote.clone());
        }
        self.persist_or_rollback(snapshot)?;

        Ok(quote)
    }

    /// Removes the matching quote from the client's history.
    /// Unknown client or quote ids are a benign no-op.
    pub fn delete_quote(&mut self, client_id: &str, quote_id: &str) -> StoreResult<()> {
        let owns_quote = self
            .data
            .clients
            .get(client_id)
            .is_some_and(|client| client.quotes.iter().any(|quote| quote.id == quote_id));
        if !owns_quote {
            debug!(client = %client_id, quote = %quote_id, "delete_quote: nothing to do");
            return Ok(());
        }

        let snapshot = self.data.clone();
        if let Some(client) = self.data.clients.get_mut(client_id) {
            client.quotes.retain(|quote| quote.id != quote_id);
        }
        self.persist_or_rollback(snapshot)
    }

    // -------------------------------------------------------------------------
    // Views
    // -------------------------------------------------------------------------

    /// A snapshot of all clients, sorted by name (case-insensitive, ties
    /// broken by id).
    ///
    /// The order is an explicit choice of this store: the underlying tree
    /// is a hash map with no inherent order, so the view imposes a
    /// deterministic one.
    pub fn list_clients(&self) -> Vec<Client> {
        let mut clients: Vec<Client> = self.data.clients.values().cloned().collect();
        clients.sort_by(|a, b| {
            (a.name.to_lowercase(), &a.id).cmp(&(b.name.to_lowercase(), &b.id))
        });
        clients
    }

    /// Looks up one client.
    pub fn get_client(&self, id: &str) -> Option<&Client> {
        self.data.clients.get(id)
    }

    /// Number of clients in the tree.
    pub fn client_count(&self) -> usize {
        self.data.clients.len()
    }

    // -------------------------------------------------------------------------
    // Persistence
    // -------------------------------------------------------------------------

    /// Writes the full tree; restores `snapshot` if the write fails.
    fn persist_or_rollback(&mut self, snapshot: QuotesData) -> StoreResult<()> {
        match self.slot.write(&self.data) {
            Ok(()) => Ok(()),
            Err(err) => {
                warn!(error = %err, "Persist failed, rolling back in-memory change");
                self.data = snapshot;
                Err(err)
            }
        }
    }
}

/// Generates a fresh entity id (UUID v4) for clients and quotes.
pub fn new_entity_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================
