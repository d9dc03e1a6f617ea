//! Registration form state machine.
//!
//! ```text
//! Editing --begin_submit--> Submitting --finish_submit--> Editing
//!    ^                                                       |
//!    +------------- validation error (no I/O) ---------------+
//! ```
//!
//! While a save is in flight the form refuses edits and a second submit, so at
//! most one save per form is ever outstanding.

use std::fmt;

use thiserror::Error;
use tracing::{info, instrument, warn};

use crate::builder::{self, ValidationError};
use crate::catalog_actor::CatalogError;
use crate::clients::CatalogClient;
use crate::domain::{Field, Product, ProductForm};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Editing,
    Submitting,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("a save is already in progress")]
    InFlight,
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Dialog shown to the user after a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Saved,
    FormatError(ValidationError),
    IoError(String),
    Busy,
}

impl Notice {
    pub fn title(&self) -> &'static str {
        match self {
            Notice::Saved => "Sucesso",
            Notice::FormatError(_) => "Erro de Formato",
            Notice::IoError(_) => "Erro de IO",
            Notice::Busy => "Aguarde",
        }
    }

    pub fn body(&self) -> String {
        match self {
            Notice::Saved => "Produto salvo com sucesso!".to_string(),
            Notice::FormatError(_) => "Erro na entrada de dados. Preço deve ser um valor decimal e quantidade um valor inteiro.".to_string(),
            Notice::IoError(cause) => format!("Erro ao salvar o produto: {cause}"),
            Notice::Busy => "Um produto já está sendo salvo.".to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Notice::Saved)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.title(), self.body())
    }
}

impl From<SubmitError> for Notice {
    fn from(err: SubmitError) -> Self {
        match err {
            SubmitError::InFlight => Notice::Busy,
            SubmitError::Validation(e) => Notice::FormatError(e),
        }
    }
}

/// The seven inputs plus the Editing/Submitting state.
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    fields: ProductForm,
    state: FormState,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self {
            fields: ProductForm::default(),
            state: FormState::Editing,
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn fields(&self) -> &ProductForm {
        &self.fields
    }

    /// Edits one input. Returns `false` and leaves the form untouched while a
    /// save is in flight.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> bool {
        if self.state == FormState::Submitting {
            return false;
        }
        self.fields.set(field, value);
        true
    }

    /// Validates the current input and, on success, moves to Submitting.
    ///
    /// A validation failure keeps the form in Editing with its fields intact.
    #[instrument(skip(self), fields(barcode = %self.fields.barcode))]
    pub fn begin_submit(&mut self) -> Result<Product, SubmitError> {
        if self.state == FormState::Submitting {
            warn!("Submit ignored: save already in progress");
            return Err(SubmitError::InFlight);
        }

        match builder::build(&self.fields) {
            Ok(product) => {
                self.state = FormState::Submitting;
                Ok(product)
            }
            Err(e) => {
                warn!(error = %e, "Form input rejected");
                Err(e.into())
            }
        }
    }

    /// Records the outcome of the save started by [`RegistrationForm::begin_submit`].
    ///
    /// Success clears every field; failure keeps them so the user can retry.
    pub fn finish_submit(&mut self, outcome: Result<(), CatalogError>) -> Notice {
        if self.state != FormState::Submitting {
            warn!("finish_submit called with no save in flight");
        }
        self.state = FormState::Editing;

        match outcome {
            Ok(()) => {
                self.fields = ProductForm::default();
                Notice::Saved
            }
            Err(e) => Notice::IoError(e.to_string()),
        }
    }

    /// Validates, saves through `client`, and settles the state.
    pub async fn submit(&mut self, client: &CatalogClient) -> Notice {
        let product = match self.begin_submit() {
            Ok(product) => product,
            Err(e) => return e.into(),
        };

        let barcode = product.barcode().to_string();
        let notice = self.finish_submit(client.save_product(product).await);
        if notice.is_success() {
            info!(barcode = %barcode, "Product registered");
        }
        notice
    }
}
