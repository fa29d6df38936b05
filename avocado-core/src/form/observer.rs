/// Receives the user-visible side effects of a submission.
///
/// Front ends implement this to drive their busy indicator, show the
/// blocking error alert, and display the result.
pub trait FormObserver: Send + Sync {
    fn loading_changed(
        &self,
        _loading: bool,
    ) {
    }

    /// A submission failed. Called once per failure.
    fn alert(
        &self,
        message: &str,
    );

    fn prediction_ready(
        &self,
        _price: f64,
    ) {
    }
}
