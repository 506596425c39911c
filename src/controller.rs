//! The four user flows: submit, edit, delete, clear.
//!
//! Each flow validates locally, issues at most one backend call, and
//! returns the effects the embedding UI should apply. Requests are fired
//! one per user action with no client-side timeout or cancellation; a
//! failed request only ever produces an error toast, never a dead page.

use crate::api::BackendClient;
use crate::effects::{Effect, RELOAD_DELAY_MS, Toast};
use crate::models::{ActivityUpdate, EditInput, FormInput, NewActivity, RowSnapshot};
use crate::timefmt::{to_12_hour, to_24_hour};
use crate::validate::{validate_edit, validate_form};

/// Modal yes/no prompt shown before destructive calls. Resolves exactly
/// once: `true` confirms, `false` cancels. There is no third outcome.
pub trait ConfirmPrompt {
    fn confirm(&self, title: &str, message: &str) -> impl Future<Output = bool>;
}

pub struct ActivityController {
    backend: BackendClient,
}

impl ActivityController {
    pub fn new(backend: BackendClient) -> Self {
        Self { backend }
    }

    /// Create flow. On success the editable fields are cleared and a reload
    /// is scheduled so the server's own render shows the new row; on
    /// failure the form keeps its values for a resubmit.
    pub async fn submit(&self, form: FormInput) -> Vec<Effect> {
        if let Err(message) = validate_form(&form) {
            return vec![Effect::Toast(Toast::error(message))];
        }

        let activity = NewActivity {
            date: form.date,
            start_time: form.start_time,
            end_time: form.end_time,
            description: form.description,
            location: form.location,
        };

        match self.backend.add_activity(&activity).await {
            Ok(()) => vec![
                Effect::Toast(Toast::success("Activity saved")),
                Effect::ClearForm,
                Effect::ScheduleReload {
                    delay_ms: RELOAD_DELAY_MS,
                },
            ],
            Err(err) => vec![Effect::Toast(Toast::error(err.message))],
        }
    }

    /// Pre-filled values for the edit prompts, with the displayed 12-hour
    /// cells converted back to the 24-hour form the backend stores.
    pub fn edit_defaults(row: &RowSnapshot) -> EditInput {
        EditInput {
            start_time: to_24_hour(&row.start_time),
            end_time: to_24_hour(&row.end_time),
            description: row.description.clone(),
        }
    }

    /// Edit flow. The location is taken from the row as displayed, never
    /// re-prompted. On success the row's cells are patched in place with
    /// times reformatted to 12-hour text.
    pub async fn edit(&self, row: &RowSnapshot, input: EditInput) -> Vec<Effect> {
        if let Err(message) = validate_edit(&input) {
            return vec![Effect::Toast(Toast::error(message))];
        }

        let update = ActivityUpdate {
            start_time: input.start_time,
            end_time: input.end_time,
            description: input.description,
            location: row.location.clone(),
        };

        match self.backend.edit_activity(row.id, &update).await {
            Ok(()) => vec![
                Effect::PatchRow {
                    id: row.id,
                    start_time: to_12_hour(&update.start_time),
                    end_time: to_12_hour(&update.end_time),
                    description: update.description,
                },
                Effect::Toast(Toast::success("Activity updated")),
            ],
            Err(err) => vec![Effect::Toast(Toast::error(err.message))],
        }
    }

    /// Delete flow. `rows_in_table` counts rows before removal; deleting
    /// the last one schedules a reload so the server's empty state takes
    /// over. A cancelled confirmation produces no effects at all.
    pub async fn delete(
        &self,
        id: u64,
        rows_in_table: usize,
        prompt: &impl ConfirmPrompt,
    ) -> Vec<Effect> {
        let confirmed = prompt
            .confirm(
                "Delete activity",
                "Are you sure you want to delete this activity?",
            )
            .await;
        if !confirmed {
            return Vec::new();
        }

        match self.backend.delete_activity(id).await {
            Ok(()) => {
                let mut effects = vec![
                    Effect::Toast(Toast::success("Activity deleted")),
                    Effect::RemoveRow { id },
                ];
                if rows_in_table <= 1 {
                    effects.push(Effect::ScheduleReload {
                        delay_ms: RELOAD_DELAY_MS,
                    });
                }
                effects
            }
            Err(err) => vec![Effect::Toast(Toast::error(err.message))],
        }
    }

    /// Bulk clear flow, behind a stronger warning since it cannot be undone.
    pub async fn clear(&self, prompt: &impl ConfirmPrompt) -> Vec<Effect> {
        let confirmed = prompt
            .confirm(
                "Clear database",
                "Are you sure you want to delete every activity? This cannot be undone.",
            )
            .await;
        if !confirmed {
            return Vec::new();
        }

        match self.backend.clear_database().await {
            Ok(()) => vec![
                Effect::Toast(Toast::success("Database cleared")),
                Effect::ScheduleReload {
                    delay_ms: RELOAD_DELAY_MS,
                },
            ],
            Err(err) => vec![Effect::Toast(Toast::error(err.message))],
        }
    }

    /// Page-load pass over the table: the server renders 24-hour text, the
    /// table displays 12-hour. Empty cells are left alone.
    pub fn reformat_rows(rows: &[RowSnapshot]) -> Vec<Effect> {
        rows.iter()
            .filter(|row| !row.start_time.trim().is_empty() || !row.end_time.trim().is_empty())
            .map(|row| Effect::PatchRow {
                id: row.id,
                start_time: to_12_hour(row.start_time.trim()),
                end_time: to_12_hour(row.end_time.trim()),
                description: row.description.clone(),
            })
            .collect()
    }
}
