use serde::Serialize;

/// A downloadable form offered to users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentLink {
    pub key: String,
    pub name: String,
    pub url: String,
}

/// (key, display name, file name under the documents base URL)
const DOCUMENTS: &[(&str, &str, &str)] = &[
    (
        "registration",
        "Client Registration Form",
        "client-registration-form.pdf",
    ),
    (
        "preferences",
        "Partner Preferences Questionnaire",
        "partner-preferences-questionnaire.pdf",
    ),
    (
        "consent",
        "Data Processing Consent",
        "data-processing-consent.pdf",
    ),
];

fn link(base_url: &str, (key, name, file): (&str, &str, &str)) -> DocumentLink {
    DocumentLink {
        key: key.to_string(),
        name: name.to_string(),
        url: format!("{}/{file}", base_url.trim_end_matches('/')),
    }
}

/// All catalog entries, in display order.
pub fn all_documents(base_url: &str) -> Vec<DocumentLink> {
    DOCUMENTS.iter().map(|doc| link(base_url, *doc)).collect()
}

pub fn find_document(base_url: &str, key: &str) -> Option<DocumentLink> {
    DOCUMENTS
        .iter()
        .find(|(k, _, _)| k.eq_ignore_ascii_case(key))
        .map(|doc| link(base_url, *doc))
}
