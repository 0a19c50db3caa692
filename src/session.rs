//! The interactive session loop.
//!
//! Line-oriented: each command runs to completion (including any network
//! round trip) before the next line is read, so the page state is never
//! touched by two operations at once. The loop is generic over its input
//! and output streams so whole sessions can be driven from tests.

use std::io::{BufRead, Write};

use api_client::RecordsClient;
use pcv_core::{render_page, FormField, PageError, PatientPage};
use pcv_types::{EntryKind, PatientId};

/// Runs the session until `quit` or end of input.
///
/// Network failures never end the session; they surface as inline alerts
/// and the loop continues.
pub async fn run_session<R, W>(
    client: &RecordsClient,
    page: &mut PatientPage,
    input: R,
    output: &mut W,
) -> std::io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let patient_id = page.patient().id.clone();
    let mut lines = input.lines();

    loop {
        output.write_all(render_page(page).as_bytes())?;
        write!(output, "> ")?;
        output.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let line = line.trim();
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));

        match command {
            "" => {}
            "quit" | "exit" => break,
            "add" => page.open_form(),
            "cancel" => page.cancel_form(),
            "kind" => match rest.trim().parse::<EntryKind>() {
                Ok(kind) => match page.form_mut() {
                    Some(form) => form.select_kind(kind),
                    None => writeln!(output, "open the form first with 'add'")?,
                },
                Err(err) => writeln!(output, "{err}")?,
            },
            "submit" => submit(client, page, &patient_id, output).await?,
            other => match FormField::from_key(other) {
                Some(field) => match page.form_mut() {
                    Some(form) => form.set_field(field, rest.trim()),
                    None => writeln!(output, "open the form first with 'add'")?,
                },
                None => writeln!(output, "unknown command '{other}'")?,
            },
        }
    }

    Ok(())
}

async fn submit<W: Write>(
    client: &RecordsClient,
    page: &mut PatientPage,
    patient_id: &PatientId,
    output: &mut W,
) -> std::io::Result<()> {
    match page.begin_submit() {
        Ok(new_entry) => match client.add_entry(patient_id, &new_entry).await {
            Ok(entry) => page.entry_appended(entry),
            Err(err) => {
                tracing::error!("entry submission failed: {err}");
                page.submit_failed(err.user_message());
            }
        },
        // Assembly failures have already become the page's inline alert.
        Err(PageError::Form(_)) => {}
        Err(err) => writeln!(output, "{err}")?,
    }
    Ok(())
}
