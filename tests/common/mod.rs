//! Shared merge-result fixtures for integration tests

#![allow(dead_code)]

use pactum::{AmendmentSummary, ChangeType, ClauseChange, MergeResult};

/// Base plus one amendment, with a full contract body and log
pub fn amended_services_agreement() -> MergeResult {
    MergeResult {
        final_contract: Some(
            r#"MASTER SERVICES AGREEMENT

This Agreement is entered into on March 3, 2022, by and between Acme Corp (the "Client") and Beta Services LLC (the "Provider").

1. Services. Provider shall host and maintain the Client platform."#
                .to_string(),
        ),
        base_summary: Some(
            "Hosting agreement between Acme Corp and Beta Services LLC.".to_string(),
        ),
        amendment_summaries: vec![AmendmentSummary::new(
            "amend1.pdf",
            vec!["Added liability cap".to_string()],
        )],
        clause_change_log: vec![
            ClauseChange::new(ChangeType::Added).with_detail("clause", "9.4"),
            ClauseChange::new(ChangeType::Modified).with_detail("clause", "2.1"),
        ],
        document_incorporation_log: vec![
            "base.pdf (base, January 1, 2023)".to_string(),
            "amend1.pdf (amendment, June 15, 2023)".to_string(),
        ],
        ..Default::default()
    }
}

/// Contract text only; no log, no summaries
pub fn contract_text_only(text: &str) -> MergeResult {
    MergeResult {
        final_contract: Some(text.to_string()),
        ..Default::default()
    }
}

/// Nothing any extractor can use
pub fn barren() -> MergeResult {
    MergeResult {
        final_contract: Some("The undersigned agree to cooperate in good faith.".to_string()),
        document_incorporation_log: vec!["scan.pdf (base, unknown)".to_string()],
        ..Default::default()
    }
}
