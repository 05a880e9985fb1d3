//! Notification text for a reviewed homework.

use crate::error::InvalidRecord;

use super::{HomeworkRecord, StatusCatalog};

/// Renders homework records into the message sent to the user.
///
/// Unrecognized status codes are rejected with
/// [`InvalidRecord::UnknownStatus`] rather than mapped to a made-up verdict.
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageFormatter {
    catalog: StatusCatalog,
}

impl MessageFormatter {
    #[must_use]
    pub const fn new(catalog: StatusCatalog) -> Self {
        Self { catalog }
    }

    pub fn format(&self, record: &HomeworkRecord) -> Result<String, InvalidRecord> {
        let name = record
            .name
            .as_deref()
            .ok_or(InvalidRecord::MissingField("homework_name"))?;
        let status = record
            .status
            .as_ref()
            .ok_or(InvalidRecord::MissingField("status"))?;
        let verdict = self
            .catalog
            .lookup(status)
            .ok_or_else(|| InvalidRecord::UnknownStatus(status.to_string()))?;

        Ok(format!("У вас проверили работу \"{name}\"!\n\n{verdict}"))
    }
}
