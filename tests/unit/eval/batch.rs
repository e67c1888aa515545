use super::*;
use crate::composition::{
    content::Content,
    dsl::CompositionBuilder,
    model::{LayoutScene, TitleScene},
};

fn timeline() -> Timeline {
    let comp = CompositionBuilder::default()
        .then("title", 40, TitleScene::new("Batch"))
        .then(
            "still",
            20,
            LayoutScene::new("1x2").item(Content::Label { text: "x".into() }),
        )
        .build()
        .unwrap();
    Timeline::new(comp).unwrap()
}

fn full(tl: &Timeline) -> FrameRange {
    FrameRange::new(FrameIndex(0), tl.duration()).unwrap()
}

#[test]
fn parallel_matches_sequential() {
    let tl = timeline();
    let (par, par_stats) = tl
        .eval_frames(
            full(&tl),
            &BatchOptions {
                parallel: true,
                threads: Some(2),
            },
        )
        .unwrap();
    let (seq, seq_stats) = tl
        .eval_frames(
            full(&tl),
            &BatchOptions {
                parallel: false,
                threads: None,
            },
        )
        .unwrap();
    assert_eq!(par, seq);
    assert_eq!(par_stats, seq_stats);
    assert!(par.iter().enumerate().all(|(i, f)| f.frame == FrameIndex(i as u64)));
}

#[test]
fn static_stretches_collapse_in_stats() {
    let tl = timeline();
    let (frames, stats) = tl.eval_frames(full(&tl), &BatchOptions::default()).unwrap();
    assert_eq!(frames.len(), 60);
    assert_eq!(stats.frames_total, 60);
    // the 20 layout frames are identical
    assert!(stats.frames_unique <= 41);
    assert!(stats.frames_static() >= 19);
}

#[test]
fn bad_ranges_and_threads_are_rejected() {
    let tl = timeline();
    let empty = FrameRange::new(FrameIndex(3), FrameIndex(3)).unwrap();
    assert!(tl.eval_frames(empty, &BatchOptions::default()).is_err());

    let past = FrameRange::new(FrameIndex(0), FrameIndex(61)).unwrap();
    assert!(matches!(
        tl.eval_frames(past, &BatchOptions::default()),
        Err(FramekitError::Evaluation(_))
    ));

    let zero_threads = BatchOptions {
        parallel: true,
        threads: Some(0),
    };
    assert!(tl.eval_frames(full(&tl), &zero_threads).is_err());
}
