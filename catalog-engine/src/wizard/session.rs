//! Wizard session controller
//!
//! Owns the active step, the accumulated draft data and the active draft id
//! for one product-creation flow. All mutation happens through the step
//! submissions below, on one logical thread; draft data is replaced
//! wholesale on every merge, never edited in place.
//!
//! Persistence during step advancement is best-effort: a failed save is
//! logged, surfaced as a [`Notice`] and the in-memory state stays usable.
//! The explicit [`WizardSession::save_draft`] propagates storage errors
//! instead, since the operator asked for durability.

use crate::catalog::CatalogService;
use crate::combinations::{self, ValidationReport};
use crate::drafts::{DraftStore, StorageError};
use crate::wizard::assembler::{self, AssemblyError};
use crate::wizard::WizardStep;
use shared::models::{Draft, DraftData, Product};
use shared::util::{now_millis, resource_id};
use shared::validation::{BasicInfoForm, CombinationsForm, PricingForm, VariantsForm};
use thiserror::Error;
use validator::Validate;

/// Wizard flow errors
#[derive(Debug, Error)]
pub enum WizardError {
    /// Step schema validation failed; blocks advancement, resolved locally
    #[error("validation failed")]
    Validation(#[from] validator::ValidationErrors),

    /// Combination validation produced blocking issues
    #[error("combination validation failed")]
    Combinations(ValidationReport),

    /// Description referenced a category id the catalog does not know
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// The submitted form does not belong to the active step
    #[error("wizard is on step {current:?}, not {requested:?}")]
    StepMismatch {
        current: WizardStep,
        requested: WizardStep,
    },

    #[error(transparent)]
    Assembly(#[from] AssemblyError),

    /// Raised only by operations where persistence is the point
    /// (explicit save); advancement-time saves degrade to notices instead
    #[error("draft storage: {0}")]
    Persistence(#[from] StorageError),
}

/// Non-blocking notification surfaced to the operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    DraftSaved { draft_id: String },
    DraftSaveFailed { reason: String },
    DraftDeleteFailed { draft_id: String, reason: String },
}

/// Result of a successful step submission
#[derive(Debug)]
pub struct StepOutcome {
    /// Step the wizard is on after the submission
    pub step: WizardStep,
    pub notices: Vec<Notice>,
    /// Advisory findings that did not block (duplicate SKUs)
    pub warnings: ValidationReport,
}

/// One product-creation flow
pub struct WizardSession {
    catalog: CatalogService,
    drafts: DraftStore,
    step: WizardStep,
    data: DraftData,
    draft_id: Option<String>,
    created_at: Option<i64>,
}

impl WizardSession {
    pub fn new(catalog: CatalogService, drafts: DraftStore) -> Self {
        Self {
            catalog,
            drafts,
            step: WizardStep::Description,
            data: DraftData::default(),
            draft_id: None,
            created_at: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn data(&self) -> &DraftData {
        &self.data
    }

    pub fn draft_id(&self) -> Option<&str> {
        self.draft_id.as_deref()
    }

    /// Resume the most recently updated draft, restoring step and data.
    /// Returns whether anything was resumed. Storage trouble is logged and
    /// treated as "nothing to resume": the wizard must stay usable without
    /// the store.
    pub fn resume_latest(&mut self) -> bool {
        match self.drafts.latest_draft() {
            Ok(Some(draft)) => {
                self.step =
                    WizardStep::from_number(draft.step).unwrap_or(WizardStep::Description);
                self.data = draft.data.clone();
                self.created_at = Some(draft.created_at);
                self.draft_id = Some(draft.id.clone());
                tracing::info!(draft_id = %draft.id, step = draft.step, "resumed draft");
                true
            }
            Ok(None) => false,
            Err(e) => {
                tracing::warn!(error = %e, "failed to load drafts, starting fresh");
                false
            }
        }
    }

    /// Step 1: Description
    pub fn submit_description(
        &mut self,
        form: BasicInfoForm,
    ) -> Result<StepOutcome, WizardError> {
        self.require_step(WizardStep::Description)?;
        form.validate()?;
        if !self.catalog.category_exists(&form.category) {
            return Err(WizardError::UnknownCategory(form.category));
        }
        self.data = self.data.merged_with(form.into());
        self.advance()
    }

    /// Step 2: Variants. Regenerates the combination list from the variant
    /// set and reconciles it against previously entered combination data.
    pub fn submit_variants(&mut self, form: VariantsForm) -> Result<StepOutcome, WizardError> {
        self.require_step(WizardStep::Variants)?;
        form.validate()?;

        let tuples = combinations::generate(&form.variants);
        let previous = self.data.combinations.clone().unwrap_or_default();
        let reconciled = combinations::reconcile(&tuples, &previous);

        self.data = self.data.merged_with(DraftData {
            variants: Some(form.variants),
            combinations: Some(reconciled),
            ..Default::default()
        });
        self.advance()
    }

    /// Step 3: Combinations. Blocking issues (missing SKU, stock/quantity
    /// coupling) fail the submission; duplicate-SKU warnings pass through in
    /// the outcome.
    pub fn submit_combinations(
        &mut self,
        form: CombinationsForm,
    ) -> Result<StepOutcome, WizardError> {
        self.require_step(WizardStep::Combinations)?;
        form.validate()?;

        let report = combinations::validate(&form.combinations);
        if report.has_blocking() {
            return Err(WizardError::Combinations(report));
        }

        self.data = self.data.merged_with(form.into());
        let mut outcome = self.advance()?;
        outcome.warnings = report;
        Ok(outcome)
    }

    /// Step 4: Price Info. Assembles the product, appends it to the
    /// catalog, deletes the draft (best-effort) and resets the session.
    pub fn submit_pricing(
        &mut self,
        form: PricingForm,
    ) -> Result<(Product, Vec<Notice>), WizardError> {
        self.require_step(WizardStep::Pricing)?;
        form.validate()?;

        let data = self.data.merged_with(form.into());
        let product = assembler::assemble(&data)?;
        self.catalog.add_product(product.clone());

        let mut notices = Vec::new();
        if let Some(draft_id) = self.draft_id.take() {
            if let Err(e) = self.drafts.delete_draft(&draft_id) {
                tracing::warn!(draft_id = %draft_id, error = %e, "failed to delete draft after assembly");
                notices.push(Notice::DraftDeleteFailed {
                    draft_id,
                    reason: e.to_string(),
                });
            }
        }

        self.step = WizardStep::Description;
        self.data = DraftData::default();
        self.created_at = None;
        Ok((product, notices))
    }

    /// Explicit save at the current step. Unlike advancement-time saves,
    /// storage failures propagate.
    pub fn save_draft(&mut self) -> Result<Draft, WizardError> {
        let draft = self.current_draft();
        let stored = self.drafts.save_draft(&draft)?;
        self.remember(&stored);
        Ok(stored)
    }

    /// Move back to an already-visited step to edit it. Moving forward past
    /// the current step is refused; forward motion happens through
    /// submissions only.
    pub fn go_back(&mut self, step: WizardStep) -> Result<(), WizardError> {
        if step > self.step {
            return Err(WizardError::StepMismatch {
                current: self.step,
                requested: step,
            });
        }
        self.step = step;
        Ok(())
    }

    fn require_step(&self, requested: WizardStep) -> Result<(), WizardError> {
        if self.step != requested {
            return Err(WizardError::StepMismatch {
                current: self.step,
                requested,
            });
        }
        Ok(())
    }

    /// Advance one step and persist best-effort.
    fn advance(&mut self) -> Result<StepOutcome, WizardError> {
        self.step = self.step.next().unwrap_or(self.step);
        Ok(StepOutcome {
            step: self.step,
            notices: self.persist(),
            warnings: ValidationReport::default(),
        })
    }

    fn current_draft(&self) -> Draft {
        let id = self
            .draft_id
            .clone()
            .unwrap_or_else(|| resource_id("draft"));
        let created_at = self.created_at.unwrap_or_else(now_millis);
        Draft {
            id,
            step: self.step.number(),
            data: self.data.clone(),
            created_at,
            updated_at: created_at,
        }
    }

    fn persist(&mut self) -> Vec<Notice> {
        let draft = self.current_draft();
        match self.drafts.save_draft(&draft) {
            Ok(stored) => {
                self.remember(&stored);
                vec![Notice::DraftSaved {
                    draft_id: stored.id,
                }]
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to save draft, in-memory state kept");
                vec![Notice::DraftSaveFailed {
                    reason: e.to_string(),
                }]
            }
        }
    }

    fn remember(&mut self, stored: &Draft) {
        self.draft_id = Some(stored.id.clone());
        self.created_at = Some(stored.created_at);
    }
}
