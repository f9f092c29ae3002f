//! Dialog-driven picking: choose images, pick, save, optionally start over.

use std::path::PathBuf;

use crate::app::{NativeRunner, SessionRunner};
use crate::config::PickConfig;
use crate::error::Result;
use crate::persistence::{save_points, PickedSet};
use crate::picker::{pick_multi_with, pick_single_with};

/// File extensions offered in the open dialog.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif", "tif", "tiff", "webp"];

/// Modal questions asked by the launcher.
pub trait Prompter {
    /// Ask for an image file. `None` when the dialog was cancelled.
    fn open_image(&mut self, title: &str) -> Option<PathBuf>;
    /// Ask where to save the picked points. `None` when the dialog was cancelled.
    fn save_path(&mut self) -> Option<PathBuf>;
    fn confirm(&mut self, title: &str, question: &str) -> bool;
}

/// Native dialogs through `rfd`. Remembers the last directory for the current run only.
#[derive(Debug, Default)]
pub struct RfdPrompter {
    last_dir: Option<PathBuf>,
}

impl RfdPrompter {
    fn remember(&mut self, path: &Option<PathBuf>) {
        if let Some(dir) = path.as_ref().and_then(|p| p.parent()) {
            self.last_dir = Some(dir.to_path_buf());
        }
    }
}

impl Prompter for RfdPrompter {
    fn open_image(&mut self, title: &str) -> Option<PathBuf> {
        let mut dlg = rfd::FileDialog::new()
            .set_title(title)
            .add_filter("Images", IMAGE_EXTENSIONS);
        if let Some(dir) = &self.last_dir {
            dlg = dlg.set_directory(dir);
        }
        let path = dlg.pick_file();
        self.remember(&path);
        path
    }

    fn save_path(&mut self) -> Option<PathBuf> {
        let mut dlg = rfd::FileDialog::new()
            .set_title("Save picked points")
            .set_file_name("points.txt")
            .add_filter("Text", &["txt"]);
        if let Some(dir) = &self.last_dir {
            dlg = dlg.set_directory(dir);
        }
        let path = dlg.save_file();
        self.remember(&path);
        path
    }

    fn confirm(&mut self, title: &str, question: &str) -> bool {
        rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Info)
            .set_title(title)
            .set_description(question)
            .set_buttons(rfd::MessageButtons::YesNo)
            .show()
            == rfd::MessageDialogResult::Yes
    }
}

/// What a launcher run produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LaunchSummary {
    /// Completed pick-and-save rounds.
    pub rounds: usize,
    /// Point rows written over all rounds.
    pub rows_written: usize,
}

/// Run the launcher with native dialogs and windows.
pub fn launch(config: &PickConfig) -> Result<LaunchSummary> {
    launch_with(&mut RfdPrompter::default(), &mut NativeRunner, config)
}

/// Run the launcher with any prompter and runner.
///
/// Cancelling the first image dialog ends the run without error. Cancelling the
/// second one picks on a single image. Cancelling the save dialog skips writing.
pub fn launch_with<P, R>(prompter: &mut P, runner: &mut R, config: &PickConfig) -> Result<LaunchSummary>
where
    P: Prompter + ?Sized,
    R: SessionRunner + ?Sized,
{
    let mut summary = LaunchSummary::default();
    loop {
        let Some(first) = prompter.open_image("Select image") else {
            log::info!("no image selected, leaving");
            return Ok(summary);
        };
        let second = prompter.open_image("Select second image (cancel to pick on one image)");

        let (a, b) = match second {
            None => {
                let points = pick_single_with(runner, first.as_path(), config)?;
                (PickedSet::new(Some(first), points), None)
            }
            Some(second) => {
                let (p1, p2) = pick_multi_with(runner, first.as_path(), second.as_path(), config)?;
                (
                    PickedSet::new(Some(first), p1),
                    Some(PickedSet::new(Some(second), p2)),
                )
            }
        };

        let out = prompter.save_path();
        summary.rows_written += save_points(out.as_deref(), &a, b.as_ref())?;
        summary.rounds += 1;

        if !prompter.confirm("epic", "Pick points on another image?") {
            return Ok(summary);
        }
    }
}
