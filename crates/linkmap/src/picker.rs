//! Native file-open dialog for selecting the CSV export.
//!
//! A thin wrapper over the OS file picker, kept behind one function so
//! everything else stays testable without a display.

use rfd::FileDialog;
use std::path::PathBuf;

/// Title of the file-open dialog.
pub const DIALOG_TITLE: &str = "Sélectionnez le fichier CSV contenant les issues Jira";

/// Message printed when the dialog is cancelled.
pub const NO_FILE_MESSAGE: &str = "Aucun fichier sélectionné. Veuillez réessayer.";

/// Shows a file-open dialog restricted to `*.csv` files.
///
/// Returns `None` when the user cancels.
#[must_use]
pub fn pick_csv_file() -> Option<PathBuf> {
    FileDialog::new()
        .add_filter("CSV files", &["csv"])
        .set_title(DIALOG_TITLE)
        .pick_file()
}
