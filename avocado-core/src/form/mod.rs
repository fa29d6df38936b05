//! Form state for the price prediction page.
//!
//! [`PredictionForm`] owns the draft record, the `loading` flag and the last
//! predicted price. Front ends feed it raw field edits and trigger
//! submissions; it reports back through a [`FormObserver`].

mod observer;

use thiserror::Error;
use tracing::{debug, error, info};

use crate::gateway::{GatewayError, PredictionGateway};
use crate::models::{DraftRecord, FormField, ProductType, Region, UnknownFieldError, coerce_number};

pub use observer::FormObserver;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error(transparent)]
    UnknownField(#[from] UnknownFieldError),

    #[error("'{value}' is not a valid choice for {field}")]
    InvalidChoice { field: FormField, value: String },
}

/// How a submission settled.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Predicted(f64),
    Failed(GatewayError),
}

#[derive(Debug, Clone, Default)]
pub struct PredictionForm {
    record: DraftRecord,
    /// Last successful prediction. Kept until a later success replaces it.
    prediction: Option<f64>,
    loading: bool,
}

impl PredictionForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self) -> &DraftRecord {
        &self.record
    }

    pub fn prediction(&self) -> Option<f64> {
        self.prediction
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.loading
    }

    /// Applies an edit to the field called `field_name`.
    ///
    /// Accepts internal names (`smallBags`) as well as form control names
    /// (`SmallBags`, `type`).
    pub fn on_field_change(
        &mut self,
        field_name: &str,
        raw_value: &str,
    ) -> Result<(), FormError> {
        let field: FormField = field_name.parse()?;
        self.set_field(field, raw_value)
    }

    /// Applies an edit to `field`.
    ///
    /// Numeric fields store the coerced number, `NaN` included. Choice
    /// fields only take one of their wire values; anything else leaves the
    /// record untouched.
    pub fn set_field(
        &mut self,
        field: FormField,
        raw_value: &str,
    ) -> Result<(), FormError> {
        let record = &mut self.record;
        let slot = match field {
            FormField::Quality1 => &mut record.quality1,
            FormField::Quality2 => &mut record.quality2,
            FormField::Quality3 => &mut record.quality3,
            FormField::SmallBags => &mut record.small_bags,
            FormField::LargeBags => &mut record.large_bags,
            FormField::XLargeBags => &mut record.xlarge_bags,
            FormField::Year => &mut record.year,
            FormField::ProductType => {
                record.product_type =
                    ProductType::parse(raw_value).ok_or_else(|| invalid_choice(field, raw_value))?;
                debug!(%field, value = raw_value, "field updated");
                return Ok(());
            }
            FormField::Region => {
                record.region =
                    Region::parse(raw_value).ok_or_else(|| invalid_choice(field, raw_value))?;
                debug!(%field, value = raw_value, "field updated");
                return Ok(());
            }
        };

        *slot = coerce_number(raw_value);
        debug!(%field, raw = raw_value, value = *slot, "field updated");
        Ok(())
    }

    /// Restores the form to its initial state.
    pub fn reset(&mut self) {
        self.record = DraftRecord::default();
        self.prediction = None;
    }

    /// Sends the current record to `gateway` and records the outcome.
    ///
    /// `loading` is raised for the duration of the call and lowered on every
    /// exit path, including when the returned future is dropped before it
    /// completes. A failure raises exactly one alert; a stale prediction is
    /// left in place.
    pub async fn submit(
        &mut self,
        gateway: &dyn PredictionGateway,
        observer: &dyn FormObserver,
    ) -> SubmitOutcome {
        let snapshot = self.record.clone();
        let _loading = LoadingGuard::raise(&mut self.loading, observer);

        info!("submitting prediction request");
        debug!(record = %snapshot, "draft record snapshot");

        match gateway.predict(&snapshot).await {
            Ok(price) => {
                info!(price, "prediction received");
                self.prediction = Some(price);
                observer.prediction_ready(price);
                SubmitOutcome::Predicted(price)
            }
            Err(err) => {
                error!(error = %err, "prediction request failed");
                observer.alert(&err.alert_text());
                SubmitOutcome::Failed(err)
            }
        }
    }
}

fn invalid_choice(
    field: FormField,
    value: &str,
) -> FormError {
    FormError::InvalidChoice {
        field,
        value: value.to_string(),
    }
}

/// Holds `loading` high until dropped.
struct LoadingGuard<'a> {
    loading: &'a mut bool,
    observer: &'a dyn FormObserver,
}

impl<'a> LoadingGuard<'a> {
    fn raise(
        loading: &'a mut bool,
        observer: &'a dyn FormObserver,
    ) -> Self {
        *loading = true;
        observer.loading_changed(true);
        Self { loading, observer }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        *self.loading = false;
        self.observer.loading_changed(false);
    }
}
