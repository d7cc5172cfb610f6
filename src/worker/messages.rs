//! Worker message types for cross-thread communication.
//!
//! This module defines the request and response protocol between the event
//! loop and the background worker that owns the document store. It also
//! implements distributed tracing context propagation across thread
//! boundaries.

use crate::domain::pet::{Pet, PetForm};
use crate::domain::profile::OwnerProfile;
use serde::{Deserialize, Serialize};

/// Distributed tracing context for cross-thread span propagation.
///
/// Captures the current trace and span IDs from OpenTelemetry to maintain
/// trace continuity when passing requests to the worker thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Parent span ID for linking spans across threads.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Creates a trace context from the current tracing span.
    ///
    /// Extracts the OpenTelemetry trace ID and span ID from the active span.
    /// Returns `None` if the current span context is invalid or not sampled.
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let span = tracing::Span::current();

        let otel_context = span.context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if span_context.is_valid() {
            let trace_id_str = format!("{:032x}", span_context.trace_id());
            let parent_span_id_str = format!("{:016x}", span_context.span_id());

            tracing::debug!(
                trace_id = %trace_id_str,
                parent_span_id = %parent_span_id_str,
                "capturing trace context"
            );

            Some(Self {
                trace_id: trace_id_str,
                parent_span_id: parent_span_id_str,
            })
        } else {
            tracing::debug!("span context is not valid");
            None
        }
    }
}

/// Macro to generate builder methods for `StoreRequest` variants.
///
/// Generates convenience constructors that automatically attach the current
/// trace context to each request variant.
macro_rules! store_request_builders {
    (
        $(
            $builder_name:ident($variant:ident { $($field:ident: $ty:ty),* $(,)? })
        ),* $(,)?
    ) => {
        impl StoreRequest {
            $(
                #[doc = concat!("Create a ", stringify!($variant), " request with current trace context")]
                pub fn $builder_name($($field: $ty),*) -> Self {
                    Self::$variant {
                        $($field,)*
                        trace_context: TraceContext::from_current(),
                    }
                }
            )*
        }
    };
}

store_request_builders! {
    load_pets(LoadPets { owner_id: String }),
    load_pet_card(LoadPetCard { pet_id: String }),
    load_profile(LoadProfile { user_id: String }),
    save_pet(SavePet { acting_user: String, pet_id: Option<String>, form: PetForm }),
    delete_pet(DeletePet { acting_user: String, pet_id: String }),
    save_profile(SaveProfile { user_id: String, name: String, contact: String }),
}

/// Requests sent from the event loop to the worker.
///
/// Each variant corresponds to a document-store operation that should be
/// performed asynchronously. All variants include an optional trace context
/// for distributed tracing support.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoreRequest {
    /// Load all pets owned by a user.
    LoadPets {
        /// Id of the owning user.
        owner_id: String,

        /// Trace context for linking spans across threads.
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Load one pet together with its owner's contact profile.
    ///
    /// Serves both the public scanned card and the management view; the
    /// record and the join are identical for both.
    LoadPetCard {
        /// Opaque id of the pet.
        pet_id: String,

        /// Trace context for linking spans across threads.
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Load a user's own contact profile for the profile form.
    LoadProfile {
        /// Id of the user.
        user_id: String,

        /// Trace context for linking spans across threads.
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Create or update a pet record.
    SavePet {
        /// Id of the user performing the save.
        acting_user: String,

        /// Existing pet id when editing, `None` when registering.
        pet_id: Option<String>,

        /// Submitted form fields.
        form: PetForm,

        /// Trace context for linking spans across threads.
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Delete a pet record.
    DeletePet {
        /// Id of the user performing the delete.
        acting_user: String,

        /// Opaque id of the pet.
        pet_id: String,

        /// Trace context for linking spans across threads.
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Create or replace a user's contact profile.
    SaveProfile {
        /// Id of the user.
        user_id: String,

        /// Owner display name.
        name: String,

        /// Contact information.
        contact: String,

        /// Trace context for linking spans across threads.
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },
}

/// Responses sent from the worker back to the event loop.
///
/// Each variant corresponds to the completion of a worker operation, either
/// successfully with result data or with an error message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoreResponse {
    /// A user's pets were successfully loaded.
    PetsLoaded {
        /// The loaded pets, most recently updated first.
        pets: Vec<Pet>,
    },

    /// A pet card lookup completed.
    ///
    /// `pet: None` means the id resolved to nothing; that is a screen state,
    /// not an error. `owner` is `None` when the owner never saved a profile.
    PetCardLoaded {
        /// The pet record, if the id exists.
        pet: Option<Pet>,

        /// The owner's contact profile, joined through the owner stamp.
        owner: Option<OwnerProfile>,
    },

    /// A profile lookup completed.
    ProfileLoaded {
        /// The stored profile, if the user ever saved one.
        profile: Option<OwnerProfile>,
    },

    /// A pet was successfully created or updated.
    PetSaved {
        /// The saved record with store-assigned fields filled in.
        pet: Pet,
    },

    /// A pet was successfully deleted.
    PetDeleted {
        /// Id of the deleted pet.
        pet_id: String,
    },

    /// A profile was successfully saved.
    ProfileSaved {
        /// The saved profile.
        profile: OwnerProfile,
    },

    /// An error occurred during the worker operation.
    Error {
        /// Human-readable error message.
        message: String,
    },
}
