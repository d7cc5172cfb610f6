//! Worker implementation for asynchronous document-store operations.
//!
//! This module implements the worker that owns the document store and
//! processes [`StoreRequest`]s off the event loop, so rendering and input
//! handling never wait on disk I/O. It includes distributed tracing support
//! for cross-thread observability.

use crate::domain::error::{PetIdError, Result};
use crate::domain::pet::PetForm;
use crate::infrastructure::paths;
use crate::storage::backend::DocumentStore;
use crate::storage::JsonStore;
use crate::worker::{StoreRequest, StoreResponse};

/// Worker state for handling document-store operations.
///
/// Runs on a thread of its own in the host shell, receiving requests over a
/// channel and posting responses back. The store backend is initialized
/// lazily on first request receipt.
#[derive(Default)]
pub struct StoreWorker {
    /// Document store, initialized lazily on first use.
    store: Option<Box<dyn DocumentStore>>,
}

impl StoreWorker {
    /// Creates a worker with an initialized JSON store in the data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the store backend cannot be initialized.
    pub fn new() -> Result<Self> {
        let path = paths::get_data_dir().join("pets.json");
        let store: Box<dyn DocumentStore> = Box::new(JsonStore::new(path)?);
        Ok(Self { store: Some(store) })
    }

    /// Creates a worker over an explicit store backend.
    ///
    /// Used by tests and ephemeral runs with a [`MemoryStore`].
    ///
    /// [`MemoryStore`]: crate::storage::MemoryStore
    #[must_use]
    pub fn with_store(store: Box<dyn DocumentStore>) -> Self {
        Self { store: Some(store) }
    }

    /// Returns a mutable reference to the store, failing if not initialized.
    ///
    /// # Errors
    ///
    /// Returns an error if the store has not been initialized yet.
    fn get_store(&mut self) -> Result<&mut Box<dyn DocumentStore>> {
        self.store
            .as_mut()
            .ok_or_else(|| PetIdError::Worker("store not initialized".to_string()))
    }

    /// Helper for handling store operation results with consistent logging.
    ///
    /// This function standardizes error handling and success logging across
    /// all store operations in the worker.
    fn handle_db_result<T, F>(operation: &str, result: Result<T>, on_success: F) -> StoreResponse
    where
        F: FnOnce(T) -> StoreResponse,
    {
        match result {
            Ok(value) => {
                tracing::debug!(operation = operation, "store operation successful");
                on_success(value)
            }
            Err(e) => {
                tracing::debug!(operation = operation, error = %e, "store operation failed");
                StoreResponse::Error {
                    message: format!("{operation}: {e}"),
                }
            }
        }
    }

    /// Handles the `LoadPets` request.
    fn handle_load_pets(&mut self, owner_id: &str) -> StoreResponse {
        Self::handle_db_result(
            "load pets",
            self.get_store().and_then(|store| store.pets_by_owner(owner_id)),
            |pets| {
                tracing::debug!(pet_count = pets.len(), "pets loaded from store");
                StoreResponse::PetsLoaded { pets }
            },
        )
    }

    /// Handles the `LoadPetCard` request.
    ///
    /// Fetches the pet by id, then joins the owner's contact profile through
    /// the record's owner stamp. A missing pet yields `pet: None` rather than
    /// an error; the card screen renders its own not-found state.
    fn handle_load_pet_card(&mut self, pet_id: &str) -> StoreResponse {
        let result = self.get_store().and_then(|store| {
            let pet = store.pet_by_id(pet_id)?;
            let owner = match &pet {
                Some(pet) => store.profile_by_id(&pet.owner_id)?,
                None => None,
            };
            Ok((pet, owner))
        });

        Self::handle_db_result("load pet card", result, |(pet, owner)| {
            tracing::debug!(
                found = pet.is_some(),
                has_owner_profile = owner.is_some(),
                "pet card loaded"
            );
            StoreResponse::PetCardLoaded { pet, owner }
        })
    }

    /// Handles the `LoadProfile` request.
    fn handle_load_profile(&mut self, user_id: &str) -> StoreResponse {
        Self::handle_db_result(
            "load profile",
            self.get_store().and_then(|store| store.profile_by_id(user_id)),
            |profile| {
                tracing::debug!(found = profile.is_some(), "profile loaded");
                StoreResponse::ProfileLoaded { profile }
            },
        )
    }

    /// Handles the `SavePet` request.
    fn handle_save_pet(
        &mut self,
        acting_user: &str,
        pet_id: Option<&str>,
        form: &PetForm,
    ) -> StoreResponse {
        Self::handle_db_result(
            "save pet",
            self.get_store()
                .and_then(|store| store.upsert_pet(acting_user, pet_id, form)),
            |pet| {
                tracing::debug!(pet_id = %pet.id, "pet saved");
                StoreResponse::PetSaved { pet }
            },
        )
    }

    /// Handles the `DeletePet` request.
    fn handle_delete_pet(&mut self, acting_user: &str, pet_id: String) -> StoreResponse {
        Self::handle_db_result(
            "delete pet",
            self.get_store()
                .and_then(|store| store.delete_pet(acting_user, &pet_id)),
            |()| {
                tracing::debug!(pet_id = %pet_id, "pet deleted");
                StoreResponse::PetDeleted { pet_id }
            },
        )
    }

    /// Handles the `SaveProfile` request.
    fn handle_save_profile(&mut self, user_id: &str, name: &str, contact: &str) -> StoreResponse {
        Self::handle_db_result(
            "save profile",
            self.get_store()
                .and_then(|store| store.upsert_profile(user_id, name, contact)),
            |profile| {
                tracing::debug!("profile saved");
                StoreResponse::ProfileSaved { profile }
            },
        )
    }

    /// Attaches the parent trace context from a request to the current thread.
    ///
    /// This function reconstructs the OpenTelemetry context from the
    /// serialized trace information in the request, allowing spans created in
    /// the worker thread to be linked to their parent spans in the event
    /// loop.
    ///
    /// Returns a context guard that must be held for the duration of the
    /// operation.
    fn attach_parent_trace_context(request: &StoreRequest) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{
            SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState,
        };

        let trace_context = match request {
            StoreRequest::LoadPets { trace_context, .. }
            | StoreRequest::LoadPetCard { trace_context, .. }
            | StoreRequest::LoadProfile { trace_context, .. }
            | StoreRequest::SavePet { trace_context, .. }
            | StoreRequest::DeletePet { trace_context, .. }
            | StoreRequest::SaveProfile { trace_context, .. } => trace_context,
        }
        .as_ref()?;

        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        let otel_context = opentelemetry::Context::current().with_remote_span_context(span_context);

        Some(otel_context.attach())
    }

    /// Processes a store request and returns the appropriate response.
    ///
    /// This is the main request handling entry point, dispatching to specific
    /// handlers based on the request variant. Automatically attaches trace
    /// context and creates a tracing span for the operation. Lazy-initializes
    /// the store backend on first use.
    pub fn handle_request(&mut self, request: StoreRequest) -> StoreResponse {
        let _context_guard = Self::attach_parent_trace_context(&request);

        let span = tracing::debug_span!("worker_handle_request", request_type = ?request);
        let _guard = span.entered();

        if self.store.is_none() {
            match Self::new() {
                Ok(worker) => {
                    self.store = worker.store;
                }
                Err(e) => {
                    tracing::debug!(error = %e, "failed to initialize store");
                    return StoreResponse::Error {
                        message: format!("failed to initialize store: {e}"),
                    };
                }
            }
        }

        match request {
            StoreRequest::LoadPets { owner_id, .. } => self.handle_load_pets(&owner_id),

            StoreRequest::LoadPetCard { pet_id, .. } => self.handle_load_pet_card(&pet_id),

            StoreRequest::LoadProfile { user_id, .. } => self.handle_load_profile(&user_id),

            StoreRequest::SavePet {
                acting_user,
                pet_id,
                form,
                ..
            } => self.handle_save_pet(&acting_user, pet_id.as_deref(), &form),

            StoreRequest::DeletePet {
                acting_user,
                pet_id,
                ..
            } => self.handle_delete_pet(&acting_user, pet_id),

            StoreRequest::SaveProfile {
                user_id,
                name,
                contact,
                ..
            } => self.handle_save_profile(&user_id, &name, &contact),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn worker() -> StoreWorker {
        StoreWorker::with_store(Box::new(MemoryStore::new()))
    }

    fn save_pet(worker: &mut StoreWorker, user: &str, name: &str) -> String {
        let response = worker.handle_request(StoreRequest::save_pet(
            user.to_string(),
            None,
            PetForm::new(name, "Labrador", "Male"),
        ));
        match response {
            StoreResponse::PetSaved { pet } => pet.id,
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn save_then_load_pets() {
        let mut worker = worker();
        save_pet(&mut worker, "user-1", "Rex");
        save_pet(&mut worker, "user-2", "Bob");

        let response = worker.handle_request(StoreRequest::load_pets("user-1".to_string()));
        match response {
            StoreResponse::PetsLoaded { pets } => {
                assert_eq!(pets.len(), 1);
                assert_eq!(pets[0].name, "Rex");
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn pet_card_joins_owner_profile() {
        let mut worker = worker();
        let pet_id = save_pet(&mut worker, "user-1", "Rex");
        worker.handle_request(StoreRequest::save_profile(
            "user-1".to_string(),
            "Jane Doe".to_string(),
            "+1 555 0100".to_string(),
        ));

        let response = worker.handle_request(StoreRequest::load_pet_card(pet_id));
        match response {
            StoreResponse::PetCardLoaded { pet, owner } => {
                assert_eq!(pet.unwrap().name, "Rex");
                assert_eq!(owner.unwrap().name, "Jane Doe");
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn missing_pet_card_is_a_state_not_an_error() {
        let mut worker = worker();

        let response = worker.handle_request(StoreRequest::load_pet_card("nope".to_string()));
        match response {
            StoreResponse::PetCardLoaded { pet, owner } => {
                assert!(pet.is_none());
                assert!(owner.is_none());
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn forbidden_delete_surfaces_as_error_response() {
        let mut worker = worker();
        let pet_id = save_pet(&mut worker, "user-1", "Rex");

        let response = worker.handle_request(StoreRequest::delete_pet(
            "user-2".to_string(),
            pet_id,
        ));
        assert!(matches!(response, StoreResponse::Error { .. }));
    }
}
