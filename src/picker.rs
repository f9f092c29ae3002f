//! Blocking point-picking entry points.
//!
//! [`pick_single`] and [`pick_multi`] open a window and return when the user
//! presses the finish key, clicks past the point limit, or closes the window.
//! The cancel key throws the current points away and opens a fresh session with
//! the same configuration.

use std::cell::RefCell;
use std::rc::Rc;

use crate::app::{NativeRunner, SessionRunner};
use crate::config::PickConfig;
use crate::data::image::{ImageSource, PixelArray};
use crate::data::session::{PickEvent, PickSession, Point};
use crate::error::Result;

/// Pick points on one image.
pub fn pick_single(image: impl Into<ImageSource>, config: &PickConfig) -> Result<Vec<Point>> {
    pick_single_with(&mut NativeRunner, image, config)
}

/// Pick points on two images stacked vertically. Each click goes to the image under the pointer.
pub fn pick_multi(
    image1: impl Into<ImageSource>,
    image2: impl Into<ImageSource>,
    config: &PickConfig,
) -> Result<(Vec<Point>, Vec<Point>)> {
    pick_multi_with(&mut NativeRunner, image1, image2, config)
}

/// [`pick_single`] with a caller-provided runner.
pub fn pick_single_with<R: SessionRunner + ?Sized>(
    runner: &mut R,
    image: impl Into<ImageSource>,
    config: &PickConfig,
) -> Result<Vec<Point>> {
    let image = image.into().load()?;
    let mut seqs = run_until_done(runner, std::slice::from_ref(&image), config)?;
    Ok(seqs.pop().unwrap_or_default())
}

/// [`pick_multi`] with a caller-provided runner.
pub fn pick_multi_with<R: SessionRunner + ?Sized>(
    runner: &mut R,
    image1: impl Into<ImageSource>,
    image2: impl Into<ImageSource>,
    config: &PickConfig,
) -> Result<(Vec<Point>, Vec<Point>)> {
    let images = [image1.into().load()?, image2.into().load()?];
    let mut seqs = run_until_done(runner, &images, config)?.into_iter();
    let first = seqs.next().unwrap_or_default();
    let second = seqs.next().unwrap_or_default();
    Ok((first, second))
}

/// Run sessions until one ends without a cancel.
fn run_until_done<R: SessionRunner + ?Sized>(
    runner: &mut R,
    images: &[PixelArray],
    config: &PickConfig,
) -> Result<Vec<Vec<Point>>> {
    let mut attempt = 1;
    loop {
        let session = PickSession::new(images.len(), config.limit);
        log::info!(
            "picking session {} on {} image(s), limit {:?}",
            attempt,
            session.panel_count(),
            session.limit()
        );
        let session = Rc::new(RefCell::new(session));
        runner.run(images, Rc::clone(&session), config)?;

        let mut session = match Rc::try_unwrap(session) {
            Ok(cell) => cell.into_inner(),
            Err(shared) => shared.borrow().clone(),
        };
        if !session.is_over() {
            log::warn!("window closed without finishing, keeping picked points");
            session.handle(PickEvent::Close);
        }
        if session.restart_requested() {
            attempt += 1;
            continue;
        }
        return Ok(session.into_sequences());
    }
}
