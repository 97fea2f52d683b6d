//! The single-slot page message shown instead of the table.
//!
//! The table holds an `Option<PageMessage>`: `None` means the table is shown,
//! otherwise the message replaces it. A message is either the informational
//! "No Records" notice or an error carrying the upstream failure.

use crate::domain::UpstreamError;

/// Kind of message occupying the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    NoRecords,
    Error,
}

/// Everything needed to render the alert banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMessage {
    pub kind: MessageKind,
    /// Style classes of the outer alert container.
    pub container_class: String,
    /// Style classes of the icon container.
    pub icon_container_class: String,
    pub title: String,
    pub summary: String,
    /// Icon identifier, e.g. `utility:warning`.
    pub icon: String,
}

impl PageMessage {
    /// The informational notice shown when a search matched nothing.
    #[must_use]
    pub fn no_records() -> Self {
        Self {
            kind: MessageKind::NoRecords,
            container_class:
                "slds-notify slds-notify_alert slds-theme_alert-texture slds-theme_warning"
                    .to_string(),
            icon_container_class:
                "slds-icon_container slds-icon-utility-warning slds-m-right_x-small".to_string(),
            title: "No Records".to_string(),
            summary: "No records found.".to_string(),
            icon: "utility:warning".to_string(),
        }
    }

    /// The error banner for a failed metadata or record fetch.
    ///
    /// The summary is the exception type, message and stack trace joined by
    /// spaces.
    #[must_use]
    pub fn error(error: &UpstreamError) -> Self {
        Self {
            kind: MessageKind::Error,
            container_class:
                "slds-notify slds-notify_alert slds-theme_alert-texture slds-theme_error"
                    .to_string(),
            icon_container_class:
                "slds-icon_container slds-icon-utility-error slds-m-right_x-small".to_string(),
            title: "Error".to_string(),
            summary: error.to_string(),
            icon: "utility:error".to_string(),
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.kind == MessageKind::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_records_is_a_warning() {
        let message = PageMessage::no_records();
        assert!(!message.is_error());
        assert_eq!(message.title, "No Records");
        assert!(message.container_class.ends_with("slds-theme_warning"));
    }

    #[test]
    fn error_summary_joins_upstream_parts() {
        let message = PageMessage::error(&UpstreamError::new(
            "System.QueryException",
            "unexpected token",
            "Class.SearchListController.getRecords: line 42",
        ));
        assert!(message.is_error());
        assert_eq!(message.icon, "utility:error");
        assert_eq!(
            message.summary,
            "System.QueryException unexpected token Class.SearchListController.getRecords: line 42"
        );
    }
}
