//! End-to-end flows: author a sequence, preview it, export and reload it,
//! then run it and summarize the outcome.

use crate::core::{BlockKind, BlockPatch, BlockStore, SurveyKind};
use crate::document::{self, ExperimentDocument};
use crate::preview;
use crate::runtime::{InstantRunner, RunController, RunStatus};

use std::sync::{Arc, Mutex};

fn author_session() -> BlockStore {
    let mut store = BlockStore::new();

    let intro = store.add(BlockKind::Text);
    store.update(
        intro,
        &BlockPatch::new()
            .with_content("Welcome to the study")
            .with_alignment("left"),
    );

    let picture = store.add(BlockKind::Image);
    store.update(
        picture,
        &BlockPatch::new().with_url("https://cdn.example/stim.png"),
    );

    let rt = store.add(BlockKind::Reaction);
    store.update(rt, &BlockPatch::new().with_time_limit_ms(1_000));

    let survey = store.add(BlockKind::Survey);
    store.update(
        survey,
        &BlockPatch::new()
            .with_question("How difficult was this?")
            .with_survey_kind(SurveyKind::Rating),
    );

    store
}

#[test]
fn preview_reflects_the_authored_sequence() {
    let mut store = author_session();
    let report = preview::render(store.blocks());

    assert_eq!(report.block_count, 4);
    assert_eq!(report.distinct_kinds, 4);
    assert_eq!(report.entries.len(), 4);
    assert_eq!(report.entries[0].title, "Text");
    assert!(report.entries[0].body.contains("Welcome to the study"));

    // duplicating the text block adds a block but not a new kind
    let first = store.blocks()[0].id;
    store.duplicate(first).unwrap();
    let report = preview::render(store.blocks());
    assert_eq!(report.block_count, 5);
    assert_eq!(report.distinct_kinds, 4);
}

#[test]
fn export_import_roundtrip_preserves_the_sequence() {
    let store = author_session();
    let doc = ExperimentDocument::from_store(&store);

    let json = doc.to_json().expect("export");
    let reloaded = ExperimentDocument::from_json(&json).expect("import");
    assert_eq!(reloaded.blocks.as_slice(), store.blocks());

    let restored = reloaded.into_store();
    assert_eq!(restored.blocks(), store.blocks());
    assert_eq!(restored.selected(), None);
}

#[test]
fn documents_survive_a_trip_through_disk() {
    let store = author_session();
    let doc = ExperimentDocument::from_store(&store);

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("experiment.json");

    doc.save(&path).expect("save");
    let loaded = ExperimentDocument::load(&path).expect("load");
    assert_eq!(loaded, doc);
}

#[test]
fn loading_garbage_reports_an_invalid_document() {
    let err = ExperimentDocument::from_json("{not json").unwrap_err();
    assert!(err.to_string().contains("invalid document"));
}

#[tokio::test]
async fn authored_sequence_runs_to_a_summarizable_result() {
    let store = author_session();
    let controller = RunController::new(InstantRunner);
    let delivered = Arc::new(Mutex::new(None));

    let slot = delivered.clone();
    let status = controller
        .run(store.blocks(), move |result| {
            *slot.lock().unwrap() = Some(result);
        })
        .await;
    assert_eq!(status, RunStatus::Completed);

    let result = delivered.lock().unwrap().take().expect("result delivered");
    // 4 authored blocks plus welcome and completion
    assert_eq!(result.len(), 6);

    let summary = preview::summarize(&result);
    assert_eq!(summary.trials, 6);
    assert!(summary.elapsed_ms >= 0.0);

    // the reaction record carries its analysis tags through the run
    let reaction = result
        .records
        .iter()
        .find(|r| r.tags.get("task").map(String::as_str) == Some("reaction"))
        .expect("reaction record");
    assert!(reaction.tags.contains_key("stimulus"));

    let exported = document::export_result(&result).expect("export result");
    let parsed: crate::runtime::RunResult =
        serde_json::from_str(&exported).expect("result json parses back");
    assert_eq!(parsed, result);
}

#[test]
fn imported_unknown_blocks_flow_through_preview_and_compile() {
    let json = r#"{
        "blocks": [
            {
                "id": "9f2d3a4e-0f2b-4c8a-9d68-0b1a2c3d4e5f",
                "type": "audio",
                "props": { "src": "tone.wav" }
            }
        ]
    }"#;

    let store = ExperimentDocument::from_json(json)
        .expect("document with unknown block imports")
        .into_store();
    assert_eq!(store.len(), 1);

    let report = preview::render(store.blocks());
    assert_eq!(report.entries[0].title, "Unsupported block");

    let timeline = crate::compiler::compile(store.blocks());
    assert_eq!(timeline.len(), 1);
}
