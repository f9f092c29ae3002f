#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::rc::Rc;

use epic::{EventOutcome, PickConfig, PickEvent, PickSession, PixelArray, SessionRunner};

/// One call to [`ScriptedRunner::run`].
pub struct RunRecord {
    pub shapes: Vec<(usize, usize, usize)>,
    pub config: PickConfig,
    pub outcomes: Vec<EventOutcome>,
}

/// Replays a list of events per session instead of opening a window.
#[derive(Default)]
pub struct ScriptedRunner {
    scripts: VecDeque<Vec<PickEvent>>,
    pub runs: Vec<RunRecord>,
}

impl ScriptedRunner {
    pub fn new(scripts: Vec<Vec<PickEvent>>) -> Self {
        Self {
            scripts: scripts.into(),
            runs: Vec::new(),
        }
    }
}

impl SessionRunner for ScriptedRunner {
    fn run(
        &mut self,
        images: &[PixelArray],
        session: Rc<RefCell<PickSession>>,
        config: &PickConfig,
    ) -> epic::Result<()> {
        let script = self.scripts.pop_front().unwrap_or_default();
        let mut session = session.borrow_mut();
        session.start();
        let outcomes = script.into_iter().map(|e| session.handle(e)).collect();
        self.runs.push(RunRecord {
            shapes: images.iter().map(|i| i.shape()).collect(),
            config: config.clone(),
            outcomes,
        });
        Ok(())
    }
}

pub fn click(panel: usize, x: f64, y: f64) -> PickEvent {
    PickEvent::Click {
        panel: Some(panel),
        point: [x, y],
    }
}

pub fn click_outside(x: f64, y: f64) -> PickEvent {
    PickEvent::Click {
        panel: None,
        point: [x, y],
    }
}

/// Unique path in the system temp dir for this test process.
pub fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("epic-{}-{}", std::process::id(), name))
}

/// Small RGB test image.
pub fn rgb_image(rows: usize, cols: usize) -> PixelArray {
    let mut data = Vec::with_capacity(rows * cols * 3);
    for r in 0..rows {
        for c in 0..cols {
            data.extend_from_slice(&[(c % 256) as u8, (r % 256) as u8, 0]);
        }
    }
    PixelArray::from_raw(rows, cols, 3, data).unwrap()
}

/// Write a 320x240 RGB PNG whose brightest sample is 207.
pub fn write_reference_png(name: &str) -> PathBuf {
    let path = temp_path(name);
    let img = image::RgbImage::from_fn(320, 240, |x, y| {
        image::Rgb([(x * 207 / 319) as u8, (y * 100 / 239) as u8, 50])
    });
    img.save(&path).unwrap();
    path
}
