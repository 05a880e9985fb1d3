//! Verdict texts for review status codes.

use super::StatusCode;

const CATALOG: &[(&str, &str)] = &[
    ("reviewing", "Работа взята на ревью."),
    ("rejected", "К сожалению, в работе нашлись ошибки."),
    ("approved", "Ревьюеру всё понравилось, работа зачтена!"),
];

/// Static mapping from status code to the verdict shown to the user.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusCatalog;

impl StatusCatalog {
    /// Verdict text for `code`, or `None` if the code is not recognized.
    #[must_use]
    pub fn lookup(&self, code: &StatusCode) -> Option<&'static str> {
        CATALOG
            .iter()
            .find(|(known, _)| *known == code.as_str())
            .map(|(_, verdict)| *verdict)
    }

    /// All known codes with their verdicts.
    pub fn entries(&self) -> impl Iterator<Item = (StatusCode, &'static str)> {
        CATALOG
            .iter()
            .map(|(code, verdict)| (StatusCode::from(*code), *verdict))
    }
}
