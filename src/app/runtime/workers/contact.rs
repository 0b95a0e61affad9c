//! Contact submission worker.

use tokio::sync::mpsc;

use crate::api;
use crate::state::{ContactForm, ContactOutcome};

/// What: Spawn the worker posting contact submissions.
///
/// Inputs:
/// - `base_url`: API base URL without trailing slash
/// - `contact_req_rx`: Channel receiver for validated forms
/// - `contact_res_tx`: Channel sender for submission outcomes
///
/// Details:
/// - One submission at a time; the UI disables the form while a send is in
///   flight, so no queueing is needed.
pub fn spawn_contact_worker(
    base_url: String,
    mut contact_req_rx: mpsc::UnboundedReceiver<ContactForm>,
    contact_res_tx: mpsc::UnboundedSender<ContactOutcome>,
) {
    tokio::spawn(async move {
        while let Some(form) = contact_req_rx.recv().await {
            let result = api::contact::submit_contact(&base_url, &form).await;
            if let Err(e) = &result {
                tracing::warn!(error = %e, "[Contact] submission failed");
            }
            let _ = contact_res_tx.send(ContactOutcome { result });
        }
    });
}
