//! Session-level behavior: input exclusivity, stale-write suppression,
//! reset, and the export dispatch.

use chrono::{TimeZone, Utc};
use csview_ingest::parse_csv;
use csview_model::{ParseOutcome, RawInput, Record, UploadedFile};
use csview_session::{ExportChoice, ExportOutput, SessionError, SessionState};

fn csv_upload(bytes: &[u8]) -> UploadedFile {
    UploadedFile::new("data.csv", "text/csv", bytes.to_vec())
}

fn instant() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 5, 1, 12, 0, 0).unwrap()
}

fn rendered_session(raw: &str) -> SessionState {
    let mut session = SessionState::new();
    session.set_pasted_text(raw);
    assert!(session.render().unwrap());
    session
}

#[test]
fn setting_a_file_clears_pasted_text() {
    let mut session = SessionState::new();
    session.set_pasted_text("a,b\n1,x\n");
    assert!(!session.upload_enabled());

    session.set_uploaded_file(csv_upload(b"c,d\n2,y\n")).unwrap();
    assert!(matches!(session.input(), Some(RawInput::UploadedFile(_))));
    assert!(!session.paste_enabled());
    assert!(session.upload_enabled());
}

#[test]
fn setting_pasted_text_clears_the_file() {
    let mut session = SessionState::new();
    session.set_uploaded_file(csv_upload(b"c,d\n2,y\n")).unwrap();
    session.set_pasted_text("a,b\n1,x\n");
    assert!(matches!(session.input(), Some(RawInput::PastedText(_))));
    assert!(session.paste_enabled());
    assert!(!session.upload_enabled());
}

#[test]
fn rejected_upload_leaves_state_untouched() {
    let mut session = rendered_session("a,b\n1,x\n");
    let before = session.outcome().cloned();

    let err = session
        .set_uploaded_file(UploadedFile::new("x.png", "image/png", vec![0u8; 16]))
        .unwrap_err();
    assert!(matches!(err, SessionError::Ingest(_)));

    assert!(matches!(session.input(), Some(RawInput::PastedText(_))));
    assert_eq!(session.outcome().cloned(), before);
}

#[test]
fn render_parses_the_active_input() {
    let session = rendered_session("a,b\n1,x\n2,y\n");
    let Some(ParseOutcome::Success { records, fields }) = session.outcome() else {
        panic!("expected success");
    };
    assert_eq!(fields.names(), ["a", "b"]);
    assert_eq!(records.len(), 2);
}

#[test]
fn render_without_input_is_a_no_op() {
    let mut session = SessionState::new();
    assert!(!session.render().unwrap());
    assert!(session.outcome().is_none());
}

#[test]
fn stale_parse_result_is_discarded() {
    let mut session = SessionState::new();
    session.set_pasted_text("a,b\n1,x\n");
    let (old_ticket, old_input) = session.begin_parse().unwrap();

    // A newer request supersedes the first before it commits.
    session.set_pasted_text("c,d\n2,y\n");
    let (new_ticket, new_input) = session.begin_parse().unwrap();

    let RawInput::PastedText(raw) = &old_input else {
        panic!("expected text input");
    };
    assert!(!session.commit_outcome(old_ticket, parse_csv(raw)));
    assert!(session.outcome().is_none());

    let RawInput::PastedText(raw) = &new_input else {
        panic!("expected text input");
    };
    assert!(session.commit_outcome(new_ticket, parse_csv(raw)));
    let Some(ParseOutcome::Success { fields, .. }) = session.outcome() else {
        panic!("expected success");
    };
    assert_eq!(fields.names(), ["c", "d"]);
}

#[test]
fn reset_invalidates_an_in_flight_parse() {
    let mut session = SessionState::new();
    session.set_pasted_text("a,b\n1,x\n");
    let (ticket, input) = session.begin_parse().unwrap();
    session.reset();

    let RawInput::PastedText(raw) = &input else {
        panic!("expected text input");
    };
    assert!(!session.commit_outcome(ticket, parse_csv(raw)));
    assert!(session.outcome().is_none());
    assert!(session.paste_enabled());
    assert!(session.upload_enabled());
}

#[test]
fn committing_a_new_outcome_clears_selection_and_block() {
    let mut session = rendered_session("a,b\n1,x\n");
    session.set_selection(vec![Record::from_iter([
        ("a".to_string(), "1".to_string()),
        ("b".to_string(), "x".to_string()),
    ])]);
    session.run_export(ExportChoice::AllToJson, instant()).unwrap();
    assert!(session.inline_block().is_some());

    session.set_pasted_text("c,d\n2,y\n");
    assert!(session.render().unwrap());
    assert!(session.selection().is_empty());
    assert!(session.inline_block().is_none());
}

#[test]
fn export_without_a_parse_is_refused() {
    let mut session = SessionState::new();
    let err = session
        .run_export(ExportChoice::AllToJson, instant())
        .unwrap_err();
    assert!(matches!(err, SessionError::NoParsedData));
}

#[test]
fn selection_export_with_no_rows_is_a_warning() {
    let mut session = rendered_session("a,b\n1,x\n");
    let err = session
        .run_export(ExportChoice::SelectedToJson, instant())
        .unwrap_err();
    assert!(matches!(err, SessionError::EmptySelection));
    assert_eq!(err.to_string(), "Please select a row.");
    // Parsed state is untouched.
    assert!(session.outcome().unwrap().is_success());
}

#[test]
fn selection_export_displays_only_the_selected_rows() {
    let mut session = rendered_session("a,b\n1,x\n2,y\n");
    session.set_selection(vec![Record::from_iter([
        ("a".to_string(), "2".to_string()),
        ("b".to_string(), "y".to_string()),
    ])]);

    let output = session
        .run_export(ExportChoice::SelectedToJson, instant())
        .unwrap();
    assert_eq!(output, ExportOutput::Displayed);

    let parsed: Vec<serde_json::Value> =
        serde_json::from_str(session.inline_block().unwrap()).unwrap();
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0]["a"], "2");
}

#[test]
fn oversized_json_export_downloads_and_clears_the_block() {
    let mut raw = String::from("a,b\n");
    for i in 0..101 {
        raw.push_str(&format!("{i},x{i}\n"));
    }
    let mut session = rendered_session(&raw);
    session.run_export(ExportChoice::ModelStub, instant()).unwrap();
    assert!(session.inline_block().is_some());

    let output = session.run_export(ExportChoice::AllToJson, instant()).unwrap();
    let ExportOutput::Download(file) = output else {
        panic!("expected a download");
    };
    assert!(file.filename.ends_with(".json"));
    assert!(session.inline_block().is_none());
}

#[test]
fn model_stub_export_displays_the_generated_class() {
    let mut session = rendered_session("a,b\n1,true\n");
    let output = session.run_export(ExportChoice::ModelStub, instant()).unwrap();
    assert_eq!(output, ExportOutput::Displayed);
    assert_eq!(
        session.inline_block().unwrap(),
        "public class CsvModel\n{\n   public int a { get; set; }\n   public bool b { get; set; }\n}"
    );
}

#[test]
fn workbook_export_keeps_the_displayed_block() {
    let mut session = rendered_session("a,b\n1,x\n");
    session.run_export(ExportChoice::ModelStub, instant()).unwrap();
    let block = session.inline_block().map(str::to_string);

    let output = session
        .run_export(ExportChoice::AllToWorkbook, instant())
        .unwrap();
    assert!(matches!(output, ExportOutput::Download(_)));
    assert_eq!(session.inline_block().map(str::to_string), block);
}

#[test]
fn none_choice_clears_the_block() {
    let mut session = rendered_session("a,b\n1,x\n");
    session.run_export(ExportChoice::AllToJson, instant()).unwrap();
    assert!(session.inline_block().is_some());

    let output = session.run_export(ExportChoice::None, instant()).unwrap();
    assert_eq!(output, ExportOutput::Cleared);
    assert!(session.inline_block().is_none());
}

#[test]
fn structural_error_supersedes_a_previous_success() {
    let mut session = rendered_session("a,b\n1,x\n");
    session.set_pasted_text("a,b\n\"unterminated");
    assert!(session.render().unwrap());
    let Some(ParseOutcome::StructuralError { message }) = session.outcome() else {
        panic!("expected structural error");
    };
    assert!(!message.is_empty());
    let err = session
        .run_export(ExportChoice::AllToJson, instant())
        .unwrap_err();
    assert!(matches!(err, SessionError::NoParsedData));
}
