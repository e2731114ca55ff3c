//! Integration tests for infra-sizer

use std::path::Path;

use infra_sizer::{
    CONCURRENT_USERS_KEY, ExportDecision, MODEL_SIZE_KEY, MemoryExporter, OVERVIEW_TITLE, Prompt,
    PromptKey, PromptSet, Questionnaire, Report, ScriptedFrontend, SizerError, Stage,
    run_session,
};

const SCENARIO: [&str; 10] = [
    "Chatbot support",
    "Inference",
    "Text",
    "5000",
    "50",
    "200",
    "High",
    "200ms",
    "Contextual",
    "LLAMA3 8B",
];

const DESTINATION: &str = "Infra_Sizer_Report.pdf";

#[test]
fn test_scenario_fills_overview() {
    let frontend = ScriptedFrontend::new(SCENARIO);
    let exporter = MemoryExporter::new();
    let mut session = Questionnaire::standard();

    let outcome = run_session(&mut session, &frontend, &exporter, Path::new(DESTINATION)).unwrap();

    assert!(session.is_complete());
    let overview = outcome.report.section(OVERVIEW_TITLE).unwrap();
    assert_eq!(overview.value(MODEL_SIZE_KEY), Some("LLAMA3 8B"));
    assert_eq!(overview.value(CONCURRENT_USERS_KEY), Some("50"));
    assert_eq!(outcome.exported.as_deref(), Some(Path::new(DESTINATION)));
}

#[test]
fn test_export_produces_five_pages_in_order() {
    let frontend = ScriptedFrontend::new(SCENARIO);
    let exporter = MemoryExporter::new();
    let mut session = Questionnaire::standard();

    run_session(&mut session, &frontend, &exporter, Path::new(DESTINATION)).unwrap();

    let document = exporter.last().unwrap();
    assert_eq!(document.destination, Path::new(DESTINATION));
    let titles: Vec<_> = document.pages.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Project Overview",
            "Assumptions",
            "Infra Sizing - Compute",
            "Storage",
            "Network"
        ]
    );
    for (i, page) in document.pages.iter().enumerate() {
        assert_eq!(page.number, i + 1);
        assert_eq!(page.header, ["Key".to_string(), "Value".to_string()]);
        assert!(!page.rows.is_empty());
    }
    assert_eq!(
        document.pages[0].rows[1],
        ("Model Size".to_string(), "LLAMA3 8B".to_string())
    );
}

#[test]
fn test_inline_report_is_presented_before_export() {
    let frontend = ScriptedFrontend::new(SCENARIO);
    let exporter = MemoryExporter::new();
    let mut session = Questionnaire::standard();

    run_session(&mut session, &frontend, &exporter, Path::new(DESTINATION)).unwrap();

    let presented = frontend.presented();
    assert_eq!(presented.len(), 1);
    assert_eq!(presented[0].heading, "Your Report is Ready!");
    assert_eq!(presented[0].sections[0].items[3], "Concurrent Users: 50");
}

#[test]
fn test_skip_does_not_export() {
    let frontend = ScriptedFrontend::new(SCENARIO).with_decision(ExportDecision::Skip);
    let exporter = MemoryExporter::new();
    let mut session = Questionnaire::standard();

    let outcome = run_session(&mut session, &frontend, &exporter, Path::new(DESTINATION)).unwrap();

    assert_eq!(outcome.exported, None);
    assert!(exporter.documents().is_empty());
}

#[test]
fn test_nine_answers_do_not_crash() {
    let frontend = ScriptedFrontend::new(SCENARIO[..9].to_vec());
    let exporter = MemoryExporter::new();
    let mut session = Questionnaire::standard();

    let err = run_session(&mut session, &frontend, &exporter, Path::new(DESTINATION)).unwrap_err();

    assert!(matches!(err, SizerError::Frontend(_)));
    assert_eq!(session.stage(), Stage::Asking(9));
    assert_eq!(session.answers().len(), 9);
    assert!(exporter.documents().is_empty());
    assert!(Report::from_answers(session.answers()).is_err());
}

#[test]
fn test_unavailable_exporter_surfaces_export_error() {
    let frontend = ScriptedFrontend::new(SCENARIO);
    let exporter = MemoryExporter::unavailable();
    let mut session = Questionnaire::standard();

    let err = run_session(&mut session, &frontend, &exporter, Path::new(DESTINATION)).unwrap_err();

    match err {
        SizerError::Export(export) => assert!(export.is_unavailable()),
        other => panic!("Expected export error, got {other:?}"),
    }
    assert!(session.is_complete());
    assert!(exporter.documents().is_empty());
}

#[test]
fn test_blank_answers_are_ignored_mid_session() {
    let mut inputs: Vec<&str> = Vec::new();
    for answer in SCENARIO {
        inputs.push("   ");
        inputs.push(answer);
    }
    let frontend = ScriptedFrontend::new(inputs);
    let exporter = MemoryExporter::new();
    let mut session = Questionnaire::standard();

    let outcome = run_session(&mut session, &frontend, &exporter, Path::new(DESTINATION)).unwrap();

    assert_eq!(session.answers().len(), 10);
    let overview = outcome.report.section(OVERVIEW_TITLE).unwrap();
    assert_eq!(overview.value(CONCURRENT_USERS_KEY), Some("50"));
}

#[test]
fn test_reordered_prompts_keep_report_fields() {
    let mut prompts: Vec<Prompt> = PromptSet::standard().prompts().to_vec();
    prompts.reverse();
    let reversed = PromptSet::new(prompts).unwrap();
    assert_eq!(reversed.get(0).unwrap().key(), PromptKey::Model);

    let mut answers = SCENARIO;
    answers.reverse();
    let frontend = ScriptedFrontend::new(answers);
    let exporter = MemoryExporter::new();
    let mut session = Questionnaire::new(reversed);

    let outcome = run_session(&mut session, &frontend, &exporter, Path::new(DESTINATION)).unwrap();

    let overview = outcome.report.section(OVERVIEW_TITLE).unwrap();
    assert_eq!(overview.value(MODEL_SIZE_KEY), Some("LLAMA3 8B"));
    assert_eq!(overview.value(CONCURRENT_USERS_KEY), Some("50"));
}
